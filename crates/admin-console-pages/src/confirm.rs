//! Blocking confirmation dialogs

/// A modal yes/no prompt answered synchronously
///
/// Closures taking the prompt text implement it, which is how tests and
/// embedders without a browser supply answers:
///
/// ```
/// use admin_console_pages::ConfirmDialog;
///
/// let always_yes = |_: &str| true;
/// assert!(always_yes.confirm("Proceed?"));
/// ```
pub trait ConfirmDialog {
	/// Show `message` and return whether the user accepted
	fn confirm(&self, message: &str) -> bool;
}

impl<F> ConfirmDialog for F
where
	F: Fn(&str) -> bool,
{
	fn confirm(&self, message: &str) -> bool {
		self(message)
	}
}

/// The browser's `window.confirm`
#[cfg(target_arch = "wasm32")]
#[derive(Debug, Clone)]
pub struct WindowConfirm {
	window: web_sys::Window,
}

#[cfg(target_arch = "wasm32")]
impl WindowConfirm {
	pub fn new(window: web_sys::Window) -> Self {
		Self { window }
	}
}

#[cfg(target_arch = "wasm32")]
impl ConfirmDialog for WindowConfirm {
	fn confirm(&self, message: &str) -> bool {
		// A throwing confirm (e.g. dialogs suppressed in a sandboxed frame) counts as declined
		match self.window.confirm_with_message(message) {
			Ok(accepted) => accepted,
			Err(err) => {
				crate::error_log!("window.confirm failed: {:?}", err);
				false
			}
		}
	}
}
