//! Errors raised while configuring or installing the submit guard

use admin_console_i18n::I18nError;

/// Invalid guard configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
	#[error("invalid guard configuration: {0}")]
	Json(#[from] serde_json::Error),
	#[error("`{0}` must not be empty")]
	EmptyId(&'static str),
	#[error("username and password fields share the id '{0}'")]
	DuplicateId(String),
}

/// Failure to attach the guard to the page
#[derive(Debug, thiserror::Error)]
pub enum BindError {
	#[error("no global window")]
	NoWindow,
	#[error("window has no document")]
	NoDocument,
	#[error("no element with id '{id}'")]
	ElementNotFound { id: String },
	#[error("element '{id}' is not {expected}")]
	UnexpectedElement { id: String, expected: &'static str },
	#[error("element '{id}' is not inside form '{form_id}'")]
	OutsideForm { id: String, form_id: String },
	#[error("JavaScript error: {0}")]
	Js(String),
	#[error(transparent)]
	Config(#[from] ConfigError),
	#[error(transparent)]
	I18n(#[from] I18nError),
}

#[cfg(target_arch = "wasm32")]
impl From<wasm_bindgen::JsValue> for BindError {
	fn from(value: wasm_bindgen::JsValue) -> Self {
		Self::Js(format!("{:?}", value))
	}
}
