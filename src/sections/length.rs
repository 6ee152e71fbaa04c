//! Length section - checks password minimum length.

/// Minimum number of characters for the length criterion.
pub const MIN_LENGTH: usize = 8;

/// Checks if the password meets the minimum length.
///
/// Length is counted in characters, not bytes, so `"àààààààà"` qualifies.
pub fn length_section(password: &str) -> bool {
    password.chars().count() >= MIN_LENGTH
}
