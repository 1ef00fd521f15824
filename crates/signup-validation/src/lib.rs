//! Signup Validation
//!
//! Pure field predicates used by the registration schema. Every function here
//! looks at a single value and knows nothing about forms or messages shown to
//! the user; the schema in `signup-form` maps failures to messages.

pub mod email;
pub mod numeric;
pub mod phone;
pub mod string;

// Re-export all validators
pub use email::*;
pub use numeric::*;
pub use phone::*;
pub use string::*;
