//! Browser-side behavior of the admin console's "create local user" page
//!
//! The page's form carries native constraint attributes on its two inputs:
//! the username is `required` with a half-width alphanumeric `pattern`, the
//! password is `required`. This crate guards the form's submit event: it
//! replaces the browser's generic validation messages with the console's
//! localized ones and asks for confirmation before a user is created.
//!
//! ## Modules
//!
//! - [`guard`]: the submit decision, independent of the DOM
//! - [`confirm`]: the confirmation-dialog seam
//! - [`config`]: JSON configuration of element ids and locale
//! - [`error`]: configuration and binding errors
//! - `dom` (wasm32): attaching the guard to the page
//! - [`logging`]: console logging macros
//!
//! ## Usage
//!
//! ```js
//! import init, { install_create_local_user_guard } from "./admin_console_pages.js";
//!
//! await init();
//! install_create_local_user_guard();
//! ```
//!
//! Outside the browser the guard runs against [`admin_console_forms::TextInput`]
//! state and any closure as the confirmation dialog; see [`FormSubmitGuard::check`].

pub mod config;
pub mod confirm;
pub mod error;
pub mod guard;
pub mod logging;

#[cfg(target_arch = "wasm32")]
pub mod dom;

pub use config::GuardConfig;
pub use confirm::ConfirmDialog;
pub use error::{BindError, ConfigError};
pub use guard::{
	BlockReason, CONFIRM_CREATE_USER, FormSubmitGuard, GuardMessages, GuardedField,
	SubmitDecision,
};

#[cfg(target_arch = "wasm32")]
pub use confirm::WindowConfirm;
#[cfg(target_arch = "wasm32")]
pub use dom::{
	DomInput, SubmitListener, bind_submit_guard, detect_locale, install,
	install_create_local_user_guard, uninstall,
};

#[doc(hidden)]
pub mod __private {
	pub use web_sys;
}
