//! Special character section.

/// The characters accepted as "special". `_ - + = ~` and backtick are
/// deliberately absent and must stay that way.
pub const SPECIAL_CHARS: &[char] = &[
    '!', '@', '#', '$', '%', '^', '&', '*', '(', ')', ',', '.', '?', '"', ':', '{', '}', '|', '<',
    '>',
];

/// Checks for at least one character from [`SPECIAL_CHARS`].
pub fn special_char_section(password: &str) -> bool {
    password.chars().any(|c| SPECIAL_CHARS.contains(&c))
}
