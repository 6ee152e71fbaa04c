//! Strength labels shown to the user.

use std::fmt;

/// Categorical strength of a password, ordered from weakest to strongest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum StrengthLabel {
    VeryWeak,
    Weak,
    Moderate,
    Strong,
    VeryStrong,
}

impl StrengthLabel {
    /// Maps a number of satisfied criteria to a label.
    ///
    /// 0 and 1 both map to `VeryWeak`; anything above 5 saturates to `VeryStrong`.
    pub fn from_count(count: usize) -> Self {
        match count {
            0 | 1 => StrengthLabel::VeryWeak,
            2 => StrengthLabel::Weak,
            3 => StrengthLabel::Moderate,
            4 => StrengthLabel::Strong,
            _ => StrengthLabel::VeryStrong,
        }
    }

    /// Human-readable text, e.g. `"Very Strong"`.
    pub fn as_str(&self) -> &'static str {
        match self {
            StrengthLabel::VeryWeak => "Very Weak",
            StrengthLabel::Weak => "Weak",
            StrengthLabel::Moderate => "Moderate",
            StrengthLabel::Strong => "Strong",
            StrengthLabel::VeryStrong => "Very Strong",
        }
    }
}

impl fmt::Display for StrengthLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_count_table() {
        assert_eq!(StrengthLabel::from_count(0), StrengthLabel::VeryWeak);
        assert_eq!(StrengthLabel::from_count(1), StrengthLabel::VeryWeak);
        assert_eq!(StrengthLabel::from_count(2), StrengthLabel::Weak);
        assert_eq!(StrengthLabel::from_count(3), StrengthLabel::Moderate);
        assert_eq!(StrengthLabel::from_count(4), StrengthLabel::Strong);
        assert_eq!(StrengthLabel::from_count(5), StrengthLabel::VeryStrong);
    }

    #[test]
    fn test_from_count_saturates() {
        assert_eq!(StrengthLabel::from_count(42), StrengthLabel::VeryStrong);
    }

    #[test]
    fn test_display_text() {
        assert_eq!(StrengthLabel::VeryWeak.to_string(), "Very Weak");
        assert_eq!(StrengthLabel::Moderate.to_string(), "Moderate");
        assert_eq!(StrengthLabel::VeryStrong.to_string(), "Very Strong");
    }

    #[test]
    fn test_labels_ordered_by_rank() {
        assert!(StrengthLabel::VeryWeak < StrengthLabel::Weak);
        assert!(StrengthLabel::Weak < StrengthLabel::Moderate);
        assert!(StrengthLabel::Moderate < StrengthLabel::Strong);
        assert!(StrengthLabel::Strong < StrengthLabel::VeryStrong);
    }
}
