//! Validity flags of a single form control

/// Subset of the DOM `ValidityState` the console's forms rely on
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ValidityState {
	/// Required control with an empty value
	pub value_missing: bool,
	/// Non-empty value that does not match the control's pattern
	pub pattern_mismatch: bool,
	/// A custom-validity message is set
	pub custom_error: bool,
}

impl ValidityState {
	pub fn is_valid(&self) -> bool {
		!(self.value_missing || self.pattern_mismatch || self.custom_error)
	}
}
