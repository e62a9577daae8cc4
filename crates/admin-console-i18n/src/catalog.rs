//! Message catalog for storing translations

use std::collections::HashMap;

/// A message catalog containing the translations of one locale
///
/// # Example
/// ```
/// use admin_console_i18n::MessageCatalog;
///
/// let mut catalog = MessageCatalog::new("ja");
/// catalog.add_translation("Required field", "必須入力項目です");
/// catalog.add_context("button", "Create", "作成");
///
/// assert_eq!(catalog.get("Required field"), Some("必須入力項目です"));
/// assert_eq!(catalog.get_context("button", "Create"), Some("作成"));
/// assert_eq!(catalog.get("Create"), None);
/// ```
#[derive(Debug, Clone)]
pub struct MessageCatalog {
	locale: String,
	messages: HashMap<String, String>,
	contexts: HashMap<(String, String), String>,
}

impl MessageCatalog {
	/// Create a new message catalog for the given locale
	pub fn new(locale: &str) -> Self {
		Self {
			locale: locale.to_string(),
			messages: HashMap::new(),
			contexts: HashMap::new(),
		}
	}

	/// Get the locale for this catalog
	pub fn locale(&self) -> &str {
		&self.locale
	}

	/// Add a simple translation
	pub fn add_translation(&mut self, message: impl Into<String>, translation: impl Into<String>) {
		self.messages.insert(message.into(), translation.into());
	}

	/// Add a contextual translation
	pub fn add_context(
		&mut self,
		context: impl Into<String>,
		message: impl Into<String>,
		translation: impl Into<String>,
	) {
		self.contexts
			.insert((context.into(), message.into()), translation.into());
	}

	/// Get a translation
	pub fn get(&self, message: &str) -> Option<&str> {
		self.messages.get(message).map(String::as_str)
	}

	/// Get a contextual translation
	pub fn get_context(&self, context: &str, message: &str) -> Option<&str> {
		self.contexts
			.get(&(context.to_string(), message.to_string()))
			.map(String::as_str)
	}

	/// Number of simple and contextual entries
	pub fn len(&self) -> usize {
		self.messages.len() + self.contexts.len()
	}

	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}
}
