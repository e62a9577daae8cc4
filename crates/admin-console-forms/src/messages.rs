//! Custom-validity messages used by the console's forms

use admin_console_i18n::TranslationContext;
use std::fmt;

/// Message set on a field that failed a constraint
///
/// The msgid doubles as the English text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValidationMessage {
	/// Required field left empty
	Required,
	/// Value outside half-width letters and digits
	HalfWidthAlphanumeric,
}

impl ValidationMessage {
	pub const fn msgid(self) -> &'static str {
		match self {
			Self::Required => "Required field",
			Self::HalfWidthAlphanumeric => "Please enter using half-width alphanumeric characters",
		}
	}

	pub fn localize(self, ctx: &TranslationContext) -> String {
		ctx.gettext(self.msgid())
	}
}

impl fmt::Display for ValidationMessage {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.msgid())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use admin_console_i18n::builtin_context;
	use rstest::rstest;

	#[rstest]
	#[case(ValidationMessage::Required, "en", "Required field")]
	#[case(
		ValidationMessage::HalfWidthAlphanumeric,
		"en",
		"Please enter using half-width alphanumeric characters"
	)]
	#[case(ValidationMessage::Required, "ja", "必須入力項目です")]
	#[case(
		ValidationMessage::HalfWidthAlphanumeric,
		"ja",
		"半角英数字で入力してください"
	)]
	fn test_localize(
		#[case] message: ValidationMessage,
		#[case] locale: &str,
		#[case] expected: &str,
	) {
		let ctx = builtin_context(locale).unwrap();

		assert_eq!(message.localize(&ctx), expected);
	}

	#[rstest]
	fn test_display_is_msgid() {
		assert_eq!(ValidationMessage::Required.to_string(), "Required field");
	}
}
