//! # Admin Console
//!
//! Browser-side form handling for the admin console.
//!
//! ## Crates
//!
//! - [`i18n`]: gettext catalogs and translation lookup
//! - [`forms`]: constraint validation model for form controls
//! - [`pages`]: the create-local-user submit guard and its DOM binding
//!
//! ## Example
//!
//! ```
//! use admin_console::forms::{ConstraintField, InputPattern, TextInput};
//! use admin_console::i18n::builtin_context;
//! use admin_console::pages::{BlockReason, FormSubmitGuard, SubmitDecision};
//!
//! let guard = FormSubmitGuard::localized(&builtin_context("ja").unwrap());
//! let mut username = TextInput::new("userName")
//! 	.required()
//! 	.with_pattern(InputPattern::ascii_alphanumeric().unwrap());
//! let mut password = TextInput::new("password").required();
//!
//! let decision = guard.check(&mut username, &mut password, &|_: &str| true);
//!
//! assert_eq!(decision, SubmitDecision::Block(BlockReason::UsernameMissing));
//! assert_eq!(username.custom_validity(), "必須入力項目です");
//! ```

pub mod forms;
pub mod i18n;
pub mod pages;
