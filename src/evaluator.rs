//! Password strength evaluator - main evaluation logic.

use secrecy::{ExposeSecret, SecretString};

use crate::label::StrengthLabel;
use crate::sections::{
    MIN_LENGTH, SectionFn, digit_section, length_section, lowercase_section,
    special_char_section, uppercase_section,
};

/// One of the five composition criteria.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Criterion {
    Length,
    Uppercase,
    Lowercase,
    Digit,
    Special,
}

impl Criterion {
    /// All criteria, in evaluation order.
    pub const ALL: [Criterion; 5] = [
        Criterion::Length,
        Criterion::Uppercase,
        Criterion::Lowercase,
        Criterion::Digit,
        Criterion::Special,
    ];

    fn section(&self) -> SectionFn {
        match self {
            Criterion::Length => length_section,
            Criterion::Uppercase => uppercase_section,
            Criterion::Lowercase => lowercase_section,
            Criterion::Digit => digit_section,
            Criterion::Special => special_char_section,
        }
    }

    /// Short hint telling the user how to satisfy this criterion.
    pub fn hint(&self) -> String {
        match self {
            Criterion::Length => format!("Use at least {} characters", MIN_LENGTH),
            Criterion::Uppercase => "Add an uppercase letter (A-Z)".to_string(),
            Criterion::Lowercase => "Add a lowercase letter (a-z)".to_string(),
            Criterion::Digit => "Add a digit (0-9)".to_string(),
            Criterion::Special => "Add a special character such as ! @ # $ %".to_string(),
        }
    }
}

/// Which criteria a password satisfies.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CriteriaResult {
    pub length: bool,
    pub uppercase: bool,
    pub lowercase: bool,
    pub digit: bool,
    pub special: bool,
}

impl CriteriaResult {
    /// Number of satisfied criteria, 0 to 5.
    pub fn count(&self) -> usize {
        Criterion::ALL.iter().filter(|&&c| self.is_met(c)).count()
    }

    pub fn is_met(&self, criterion: Criterion) -> bool {
        match criterion {
            Criterion::Length => self.length,
            Criterion::Uppercase => self.uppercase,
            Criterion::Lowercase => self.lowercase,
            Criterion::Digit => self.digit,
            Criterion::Special => self.special,
        }
    }

    fn set(&mut self, criterion: Criterion, met: bool) {
        let slot = match criterion {
            Criterion::Length => &mut self.length,
            Criterion::Uppercase => &mut self.uppercase,
            Criterion::Lowercase => &mut self.lowercase,
            Criterion::Digit => &mut self.digit,
            Criterion::Special => &mut self.special,
        };
        *slot = met;
    }

    /// Unmet criteria, in evaluation order.
    pub fn missing(&self) -> Vec<Criterion> {
        Criterion::ALL
            .into_iter()
            .filter(|&c| !self.is_met(c))
            .collect()
    }

    pub fn label(&self) -> StrengthLabel {
        StrengthLabel::from_count(self.count())
    }
}

/// Full outcome of evaluating one password.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PasswordEvaluation {
    pub criteria: CriteriaResult,
    pub label: StrengthLabel,
}

impl PasswordEvaluation {
    pub fn missing(&self) -> Vec<Criterion> {
        self.criteria.missing()
    }

    /// One hint per unmet criterion.
    pub fn hints(&self) -> Vec<String> {
        self.missing().iter().map(Criterion::hint).collect()
    }
}

/// Runs every section against the full password.
pub fn evaluate_criteria(password: &str) -> CriteriaResult {
    let mut result = CriteriaResult::default();
    for criterion in Criterion::ALL {
        let section_fn = criterion.section();
        result.set(criterion, section_fn(password));
    }
    result
}

/// Scores a password. Total over all strings; never fails.
pub fn score(password: &str) -> StrengthLabel {
    evaluate_criteria(password).label()
}

/// Same as [`score`] for a secret-wrapped password.
pub fn score_secret(password: &SecretString) -> StrengthLabel {
    score(password.expose_secret())
}

/// Evaluates password strength and returns the criteria breakdown with the label.
pub fn evaluate_password_strength(password: &SecretString) -> PasswordEvaluation {
    let criteria = evaluate_criteria(password.expose_secret());
    let label = criteria.label();

    #[cfg(feature = "tracing")]
    tracing::debug!(
        met = criteria.count(),
        label = label.as_str(),
        "password evaluated"
    );

    PasswordEvaluation { criteria, label }
}
