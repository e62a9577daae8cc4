//! `pattern` attribute semantics
//!
//! An HTML `pattern` must match the entire value, so the source is compiled
//! as `^(?:<pattern>)$`. Empty values are never checked against it.

use regex::Regex;

/// Pattern accepted by the username field: half-width letters and digits
pub const ASCII_ALPHANUMERIC: &str = "[A-Za-z0-9]+";

#[derive(Debug, thiserror::Error)]
pub enum PatternError {
	#[error("invalid pattern '{pattern}': {source}")]
	Invalid {
		pattern: String,
		#[source]
		source: regex::Error,
	},
}

/// A compiled `pattern` attribute
#[derive(Debug, Clone)]
pub struct InputPattern {
	source: String,
	regex: Regex,
}

impl InputPattern {
	/// Compile a pattern attribute value
	///
	/// # Examples
	///
	/// ```
	/// use admin_console_forms::InputPattern;
	///
	/// let pattern = InputPattern::new("[a-z]{3}").unwrap();
	/// assert!(pattern.matches("abc"));
	/// assert!(!pattern.matches("abcd"));
	/// ```
	pub fn new(source: &str) -> Result<Self, PatternError> {
		let regex = Regex::new(&format!("^(?:{})$", source)).map_err(|source_err| {
			PatternError::Invalid {
				pattern: source.to_string(),
				source: source_err,
			}
		})?;
		Ok(Self {
			source: source.to_string(),
			regex,
		})
	}

	/// `[A-Za-z0-9]+`
	pub fn ascii_alphanumeric() -> Result<Self, PatternError> {
		Self::new(ASCII_ALPHANUMERIC)
	}

	/// The attribute value as written, without anchoring
	pub fn as_str(&self) -> &str {
		&self.source
	}

	/// Whether `value` matches the whole pattern
	pub fn matches(&self, value: &str) -> bool {
		self.regex.is_match(value)
	}

	/// Browser `patternMismatch` rule: empty values never mismatch
	pub fn is_mismatch(&self, value: &str) -> bool {
		!value.is_empty() && !self.matches(value)
	}
}
