//! Form controls that take part in constraint validation

use crate::pattern::InputPattern;
use crate::validity::ValidityState;

/// A form control exposing constraint validation
///
/// Implemented by [`TextInput`] for explicit component state and by the
/// DOM wrapper in `admin-console-pages` for native inputs.
pub trait ConstraintField {
	/// Identifier of the control (its `id` or `name`)
	fn name(&self) -> &str;

	/// Current validity flags
	fn validity(&self) -> ValidityState;

	/// Current custom-validity message, empty when none is set
	fn custom_validity(&self) -> String;

	/// Replace the custom-validity message; an empty string clears it
	fn set_custom_validity(&mut self, message: &str);
}

/// Text input held as explicit state
///
/// # Examples
///
/// ```
/// use admin_console_forms::{ConstraintField, InputPattern, TextInput};
///
/// let mut input = TextInput::new("userName")
/// 	.required()
/// 	.with_pattern(InputPattern::ascii_alphanumeric().unwrap());
/// assert!(input.validity().value_missing);
///
/// input.set_value("ｕｓｅｒ");
/// assert!(input.validity().pattern_mismatch);
///
/// input.set_value("user01");
/// assert!(input.validity().is_valid());
/// ```
#[derive(Debug, Clone)]
pub struct TextInput {
	name: String,
	value: String,
	required: bool,
	pattern: Option<InputPattern>,
	custom_validity: String,
}

impl TextInput {
	pub fn new(name: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			value: String::new(),
			required: false,
			pattern: None,
			custom_validity: String::new(),
		}
	}

	/// Mark the input as required
	pub fn required(mut self) -> Self {
		self.required = true;
		self
	}

	pub fn with_pattern(mut self, pattern: InputPattern) -> Self {
		self.pattern = Some(pattern);
		self
	}

	pub fn with_value(mut self, value: impl Into<String>) -> Self {
		self.value = value.into();
		self
	}

	pub fn value(&self) -> &str {
		&self.value
	}

	pub fn set_value(&mut self, value: impl Into<String>) {
		self.value = value.into();
	}

	pub fn is_required(&self) -> bool {
		self.required
	}

	pub fn pattern(&self) -> Option<&InputPattern> {
		self.pattern.as_ref()
	}
}

impl ConstraintField for TextInput {
	fn name(&self) -> &str {
		&self.name
	}

	fn validity(&self) -> ValidityState {
		ValidityState {
			value_missing: self.required && self.value.is_empty(),
			pattern_mismatch: self
				.pattern
				.as_ref()
				.is_some_and(|pattern| pattern.is_mismatch(&self.value)),
			custom_error: !self.custom_validity.is_empty(),
		}
	}

	fn custom_validity(&self) -> String {
		self.custom_validity.clone()
	}

	fn set_custom_validity(&mut self, message: &str) {
		self.custom_validity = message.to_string();
	}
}
