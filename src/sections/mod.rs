//! Password criteria sections
//!
//! Each section checks one character-composition criterion against the
//! whole password. Sections are independent: none short-circuits another.

mod length;
mod special;
mod variety;

pub use length::{MIN_LENGTH, length_section};
pub use special::{SPECIAL_CHARS, special_char_section};
pub use variety::{digit_section, lowercase_section, uppercase_section};

/// Signature shared by every criterion section.
/// - `true` - criterion satisfied
/// - `false` - criterion not satisfied
pub type SectionFn = fn(&str) -> bool;
