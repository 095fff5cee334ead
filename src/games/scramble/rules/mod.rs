//! Game rules for word scramble.
//!
//! Pure predicates over plain strings. They know nothing about sessions
//! or dictionaries so the submission contract can compose them freely.

pub mod feasibility;
pub mod length;
pub mod originality;

pub use feasibility::is_possible;
pub use length::is_long_enough;
pub use originality::{is_original, is_root_word};
