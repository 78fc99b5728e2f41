//! Form Validators
//!
//! Pure predicate functions over raw form input. Every value arrives as text (or a
//! list of text), so the numeric and date checks coerce explicitly before comparing.
//! Messages are not produced here; the engine pairs each check with its own message.

pub mod collection;
pub mod date;
pub mod email;
pub mod numeric;
pub mod password;
pub mod string;

// Re-export all validators
pub use collection::*;
pub use date::*;
pub use email::*;
pub use numeric::*;
pub use password::*;
pub use string::*;
