//! Constraint validation model
//!
//! Re-exports `admin-console-forms`.

pub use admin_console_forms::*;
