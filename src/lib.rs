//! Password strength meter
//!
//! Scores a password against five fixed criteria (length of at least 8
//! characters, an uppercase letter, a lowercase letter, a digit and a special
//! character) and maps the number of satisfied criteria to a label, from
//! "Very Weak" to "Very Strong". An [`InputBinding`] keeps two display
//! surfaces in sync with a password input as the user types.
//!
//! # Features
//!
//! - `async` (default): Enables [`run_binding`], a channel-driven input loop with cancellation support
//! - `tracing`: Enables logging via tracing crate
//!
//! # Example
//!
//! ```rust
//! use pwd_meter::{score, InputBinding, StrengthLabel, TextSink};
//!
//! assert_eq!(score("Abcdefg1!"), StrengthLabel::VeryStrong);
//!
//! let mut binding = InputBinding::new(TextSink::new(), TextSink::new());
//! binding.on_input("abcdefgh").unwrap();
//! assert_eq!(binding.strength_sink().text(), "Password strength: Weak");
//! assert_eq!(binding.length_sink().text(), "Password length: 8");
//! ```

// Internal modules
mod binding;
mod evaluator;
mod label;
mod sections;

// Public API
pub use binding::{BindingError, DisplaySink, DisplayUpdate, InputBinding, TextSink, WriterSink};
pub use evaluator::{
    CriteriaResult, Criterion, PasswordEvaluation, evaluate_criteria, evaluate_password_strength,
    score, score_secret,
};
pub use label::StrengthLabel;
pub use sections::{MIN_LENGTH, SPECIAL_CHARS};

#[cfg(feature = "async")]
pub use binding::run_binding;
