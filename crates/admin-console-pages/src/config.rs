//! Guard configuration
//!
//! The page passes an optional JSON object to
//! `install_create_local_user_guard`; omitted keys take the defaults of the
//! console's create-local-user template.
//!
//! ```json
//! {
//!   "form_id": "localUserForm",
//!   "username_field_id": "userName",
//!   "password_field_id": "password",
//!   "locale": "ja"
//! }
//! ```

use crate::error::ConfigError;
use admin_console_i18n::{I18nError, TranslationContext, builtin_context};
use serde::{Deserialize, Serialize};

pub const DEFAULT_FORM_ID: &str = "localUserForm";
pub const DEFAULT_USERNAME_FIELD_ID: &str = "userName";
pub const DEFAULT_PASSWORD_FIELD_ID: &str = "password";
/// Locale used when neither the config nor the page names one
pub const DEFAULT_LOCALE: &str = "en";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GuardConfig {
	/// `id` of the form element the submit listener is attached to
	pub form_id: String,
	pub username_field_id: String,
	pub password_field_id: String,
	/// Overrides the locale detected from the page
	pub locale: Option<String>,
}

impl Default for GuardConfig {
	fn default() -> Self {
		Self {
			form_id: DEFAULT_FORM_ID.to_string(),
			username_field_id: DEFAULT_USERNAME_FIELD_ID.to_string(),
			password_field_id: DEFAULT_PASSWORD_FIELD_ID.to_string(),
			locale: None,
		}
	}
}

impl GuardConfig {
	/// Parse and validate a JSON configuration object
	pub fn from_json(json: &str) -> Result<Self, ConfigError> {
		let config: Self = serde_json::from_str(json)?;
		config.validate()?;
		Ok(config)
	}

	pub fn validate(&self) -> Result<(), ConfigError> {
		for (key, value) in [
			("form_id", &self.form_id),
			("username_field_id", &self.username_field_id),
			("password_field_id", &self.password_field_id),
		] {
			if value.trim().is_empty() {
				return Err(ConfigError::EmptyId(key));
			}
		}
		if self.username_field_id == self.password_field_id {
			return Err(ConfigError::DuplicateId(self.username_field_id.clone()));
		}
		Ok(())
	}

	/// Locale to translate into: configured, then detected, then [`DEFAULT_LOCALE`]
	pub fn resolve_locale<'a>(&'a self, detected: Option<&'a str>) -> &'a str {
		let non_empty = |locale: &'a str| Some(locale.trim()).filter(|locale| !locale.is_empty());
		self.locale
			.as_deref()
			.and_then(non_empty)
			.or_else(|| detected.and_then(non_empty))
			.unwrap_or(DEFAULT_LOCALE)
	}

	/// Translation context for [`Self::resolve_locale`] with the bundled catalogs
	pub fn translation_context(
		&self,
		detected: Option<&str>,
	) -> Result<TranslationContext, I18nError> {
		builtin_context(self.resolve_locale(detected))
	}
}
