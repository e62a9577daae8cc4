//! Submit guard for the "create local user" form
//!
//! Runs on every submit attempt, in order:
//!
//! 1. username: required, then half-width alphanumeric
//! 2. password: required
//! 3. confirmation prompt
//!
//! The first failing step sets its field's custom-validity message and blocks
//! the submit; later steps are not evaluated. A field that passes has its
//! message cleared before the next step runs.

use crate::confirm::ConfirmDialog;
use crate::debug_log;
use admin_console_forms::{ConstraintField, ValidationMessage};
use admin_console_i18n::TranslationContext;

/// msgid of the confirmation prompt
pub const CONFIRM_CREATE_USER: &str = "This will create a user. Are you sure?";

/// User-facing strings, resolved once per installation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuardMessages {
	pub required: String,
	pub half_width_alphanumeric: String,
	pub confirm_create_user: String,
}

impl GuardMessages {
	pub fn resolve(ctx: &TranslationContext) -> Self {
		Self {
			required: ValidationMessage::Required.localize(ctx),
			half_width_alphanumeric: ValidationMessage::HalfWidthAlphanumeric.localize(ctx),
			confirm_create_user: ctx.gettext(CONFIRM_CREATE_USER),
		}
	}
}

impl Default for GuardMessages {
	/// The untranslated English strings
	fn default() -> Self {
		Self {
			required: ValidationMessage::Required.msgid().to_string(),
			half_width_alphanumeric: ValidationMessage::HalfWidthAlphanumeric.msgid().to_string(),
			confirm_create_user: CONFIRM_CREATE_USER.to_string(),
		}
	}
}

/// The two inputs the guard inspects
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardedField {
	Username,
	Password,
}

/// Why a submit attempt was blocked
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockReason {
	UsernameMissing,
	UsernamePatternMismatch,
	PasswordMissing,
	/// Both fields passed but the user declined the prompt
	Declined,
}

impl BlockReason {
	/// Field carrying the custom-validity message, if any
	pub fn field(self) -> Option<GuardedField> {
		match self {
			Self::UsernameMissing | Self::UsernamePatternMismatch => Some(GuardedField::Username),
			Self::PasswordMissing => Some(GuardedField::Password),
			Self::Declined => None,
		}
	}
}

/// Outcome of one submit attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitDecision {
	Proceed,
	Block(BlockReason),
}

impl SubmitDecision {
	/// Whether the submit event's default action must be prevented
	pub fn is_blocked(self) -> bool {
		matches!(self, Self::Block(_))
	}
}

/// Guard bound to the create-local-user form's submit event
#[derive(Debug, Clone, Default)]
pub struct FormSubmitGuard {
	messages: GuardMessages,
}

impl FormSubmitGuard {
	pub fn new(messages: GuardMessages) -> Self {
		Self { messages }
	}

	/// Guard with messages translated through `ctx`
	pub fn localized(ctx: &TranslationContext) -> Self {
		Self::new(GuardMessages::resolve(ctx))
	}

	pub fn messages(&self) -> &GuardMessages {
		&self.messages
	}

	/// Run the checks for one submit attempt
	///
	/// # Examples
	///
	/// ```
	/// use admin_console_forms::{ConstraintField, InputPattern, TextInput};
	/// use admin_console_pages::{BlockReason, FormSubmitGuard, SubmitDecision};
	///
	/// let guard = FormSubmitGuard::default();
	/// let mut username = TextInput::new("userName")
	/// 	.required()
	/// 	.with_pattern(InputPattern::ascii_alphanumeric().unwrap())
	/// 	.with_value("admin");
	/// let mut password = TextInput::new("password").required();
	///
	/// let decision = guard.check(&mut username, &mut password, &|_: &str| true);
	/// assert_eq!(decision, SubmitDecision::Block(BlockReason::PasswordMissing));
	/// assert_eq!(password.custom_validity(), "Required field");
	///
	/// password.set_value("s3cret");
	/// let decision = guard.check(&mut username, &mut password, &|_: &str| true);
	/// assert_eq!(decision, SubmitDecision::Proceed);
	/// ```
	pub fn check<U, P, C>(&self, username: &mut U, password: &mut P, confirm: &C) -> SubmitDecision
	where
		U: ConstraintField + ?Sized,
		P: ConstraintField + ?Sized,
		C: ConfirmDialog + ?Sized,
	{
		let outcome = self
			.check_username(username)
			.and_then(|()| self.check_password(password))
			.and_then(|()| self.confirm(confirm));

		match outcome {
			Ok(()) => SubmitDecision::Proceed,
			Err(reason) => {
				debug_log!("create-local-user submit blocked: {:?}", reason);
				SubmitDecision::Block(reason)
			}
		}
	}

	fn check_username<U>(&self, field: &mut U) -> Result<(), BlockReason>
	where
		U: ConstraintField + ?Sized,
	{
		let validity = field.validity();
		if validity.value_missing {
			field.set_custom_validity(&self.messages.required);
			return Err(BlockReason::UsernameMissing);
		}
		if validity.pattern_mismatch {
			field.set_custom_validity(&self.messages.half_width_alphanumeric);
			return Err(BlockReason::UsernamePatternMismatch);
		}
		field.set_custom_validity("");
		Ok(())
	}

	fn check_password<P>(&self, field: &mut P) -> Result<(), BlockReason>
	where
		P: ConstraintField + ?Sized,
	{
		if field.validity().value_missing {
			field.set_custom_validity(&self.messages.required);
			return Err(BlockReason::PasswordMissing);
		}
		field.set_custom_validity("");
		Ok(())
	}

	fn confirm<C>(&self, dialog: &C) -> Result<(), BlockReason>
	where
		C: ConfirmDialog + ?Sized,
	{
		if dialog.confirm(&self.messages.confirm_create_user) {
			Ok(())
		} else {
			Err(BlockReason::Declined)
		}
	}
}
