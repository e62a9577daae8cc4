//! Constraint validation for admin console forms
//!
//! Mirrors the browser's HTML constraint-validation model so that form logic
//! can run against native inputs (via `admin-console-pages` on wasm32) or
//! against explicit component state ([`TextInput`]) anywhere else.
//!
//! - [`ValidityState`]: the flags a submit guard inspects
//! - [`InputPattern`]: `pattern` attribute semantics (whole-value match)
//! - [`ConstraintField`]: the capability a field must offer
//! - [`ValidationMessage`]: the console's custom-validity messages

pub mod field;
pub mod messages;
pub mod pattern;
pub mod validity;

pub use field::{ConstraintField, TextInput};
pub use messages::ValidationMessage;
pub use pattern::{ASCII_ALPHANUMERIC, InputPattern, PatternError};
pub use validity::ValidityState;
