//! Character variety sections - uppercase, lowercase and digit criteria.
//!
//! Only ASCII ranges count. `É` is not uppercase here and `٣` is not a digit.

/// Checks for at least one `A`-`Z` character.
pub fn uppercase_section(password: &str) -> bool {
    password.chars().any(|c| c.is_ascii_uppercase())
}

/// Checks for at least one `a`-`z` character.
pub fn lowercase_section(password: &str) -> bool {
    password.chars().any(|c| c.is_ascii_lowercase())
}

/// Checks for at least one `0`-`9` character.
pub fn digit_section(password: &str) -> bool {
    password.chars().any(|c| c.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variety_section_uppercase() {
        assert!(uppercase_section("lowercaseX"));
        assert!(!uppercase_section("lowercase123!"));
    }

    #[test]
    fn test_variety_section_lowercase() {
        assert!(lowercase_section("UPPERCASEx"));
        assert!(!lowercase_section("UPPERCASE123!"));
    }

    #[test]
    fn test_variety_section_digit() {
        assert!(digit_section("NoNumbers!9"));
        assert!(!digit_section("NoNumbers!"));
    }

    #[test]
    fn test_variety_section_non_ascii_ignored() {
        assert!(!uppercase_section("ÉÀÖ"));
        assert!(!lowercase_section("éàö"));
        assert!(!digit_section("٣٤٥"));
    }

    #[test]
    fn test_variety_section_empty() {
        assert!(!uppercase_section(""));
        assert!(!lowercase_section(""));
        assert!(!digit_section(""));
    }
}
