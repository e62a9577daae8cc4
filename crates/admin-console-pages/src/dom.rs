//! Binding the submit guard to the page (wasm32 only)
//!
//! The guard is attached to one form element looked up by id at page
//! initialization. Listeners live as long as the returned [`SubmitListener`];
//! [`install`] keeps one alive for the lifetime of the page.

use crate::config::GuardConfig;
use crate::confirm::{ConfirmDialog, WindowConfirm};
use crate::error::BindError;
use crate::guard::{FormSubmitGuard, GuardedField, SubmitDecision};
use crate::{error_log, info_log};
use admin_console_forms::{ConstraintField, ValidityState};
use std::cell::RefCell;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Event, HtmlFormElement, HtmlInputElement, Node, Window};

type EventClosure = Closure<dyn FnMut(Event)>;

/// Native `<input>` exposed through [`ConstraintField`]
#[derive(Debug, Clone)]
pub struct DomInput {
	id: String,
	element: HtmlInputElement,
}

impl DomInput {
	pub fn new(element: HtmlInputElement) -> Self {
		Self {
			id: element.id(),
			element,
		}
	}

	pub fn element(&self) -> &HtmlInputElement {
		&self.element
	}

	/// Show the browser's validation bubble for this input
	pub fn report_validity(&self) -> bool {
		self.element.report_validity()
	}
}

impl ConstraintField for DomInput {
	fn name(&self) -> &str {
		&self.id
	}

	fn validity(&self) -> ValidityState {
		let state = self.element.validity();
		ValidityState {
			value_missing: state.value_missing(),
			pattern_mismatch: state.pattern_mismatch(),
			custom_error: state.custom_error(),
		}
	}

	fn custom_validity(&self) -> String {
		// validationMessage reports the custom message while a custom error is set
		if self.element.validity().custom_error() {
			self.element.validation_message().unwrap_or_default()
		} else {
			String::new()
		}
	}

	fn set_custom_validity(&mut self, message: &str) {
		self.element.set_custom_validity(message);
	}
}

/// Registered listeners; dropping the handle removes them
pub struct SubmitListener {
	form: HtmlFormElement,
	on_submit: EventClosure,
	on_input: Vec<(HtmlInputElement, EventClosure)>,
}

impl SubmitListener {
	pub fn form(&self) -> &HtmlFormElement {
		&self.form
	}
}

impl Drop for SubmitListener {
	fn drop(&mut self) {
		let _ = self
			.form
			.remove_event_listener_with_callback("submit", self.on_submit.as_ref().unchecked_ref());
		for (input, closure) in &self.on_input {
			let _ = input
				.remove_event_listener_with_callback("input", closure.as_ref().unchecked_ref());
		}
	}
}

/// Attach `guard` to the form and inputs named by `config`
pub fn bind_submit_guard<C>(
	document: &Document,
	config: &GuardConfig,
	guard: FormSubmitGuard,
	confirm: C,
) -> Result<SubmitListener, BindError>
where
	C: ConfirmDialog + 'static,
{
	config.validate()?;

	let form: HtmlFormElement = element_by_id(document, &config.form_id, "a <form>")?;
	let username: HtmlInputElement =
		element_by_id(document, &config.username_field_id, "an <input>")?;
	let password: HtmlInputElement =
		element_by_id(document, &config.password_field_id, "an <input>")?;

	for input in [&username, &password] {
		let node: &Node = input.as_ref();
		if !form.contains(Some(node)) {
			return Err(BindError::OutsideForm {
				id: input.id(),
				form_id: config.form_id.clone(),
			});
		}
	}

	let mut username_field = DomInput::new(username.clone());
	let mut password_field = DomInput::new(password.clone());
	let on_submit = Closure::wrap(Box::new(move |event: Event| {
		let decision = guard.check(&mut username_field, &mut password_field, &confirm);
		if let SubmitDecision::Block(reason) = decision {
			event.prevent_default();
			match reason.field() {
				Some(GuardedField::Username) => {
					username_field.report_validity();
				}
				Some(GuardedField::Password) => {
					password_field.report_validity();
				}
				None => {}
			}
		}
	}) as Box<dyn FnMut(Event)>);
	form.add_event_listener_with_callback("submit", on_submit.as_ref().unchecked_ref())?;

	// A leftover message would make native validation stop the next attempt
	// before the guard sees it
	let mut on_input = Vec::with_capacity(2);
	for input in [username, password] {
		let target = input.clone();
		let closure = Closure::wrap(Box::new(move |_event: Event| {
			target.set_custom_validity("");
		}) as Box<dyn FnMut(Event)>);
		if let Err(err) =
			input.add_event_listener_with_callback("input", closure.as_ref().unchecked_ref())
		{
			// Unregisters what was attached so far
			drop(SubmitListener {
				form,
				on_submit,
				on_input,
			});
			return Err(err.into());
		}
		on_input.push((input, closure));
	}

	Ok(SubmitListener {
		form,
		on_submit,
		on_input,
	})
}

fn element_by_id<T: JsCast>(
	document: &Document,
	id: &str,
	expected: &'static str,
) -> Result<T, BindError> {
	document
		.get_element_by_id(id)
		.ok_or_else(|| BindError::ElementNotFound { id: id.to_string() })?
		.dyn_into::<T>()
		.map_err(|_| BindError::UnexpectedElement {
			id: id.to_string(),
			expected,
		})
}

/// `<html lang>`, then `navigator.language`
pub fn detect_locale(window: &Window, document: &Document) -> Option<String> {
	document
		.document_element()
		.and_then(|root| root.get_attribute("lang"))
		.filter(|lang| !lang.trim().is_empty())
		.or_else(|| window.navigator().language())
}

thread_local! {
	static INSTALLED: RefCell<Option<SubmitListener>> = const { RefCell::new(None) };
}

/// Install the guard on the current page, replacing any earlier installation
pub fn install(config_json: Option<&str>) -> Result<(), BindError> {
	let config = match config_json {
		Some(json) => GuardConfig::from_json(json)?,
		None => GuardConfig::default(),
	};
	let window = web_sys::window().ok_or(BindError::NoWindow)?;
	let document = window.document().ok_or(BindError::NoDocument)?;

	let detected = detect_locale(&window, &document);
	let ctx = config.translation_context(detected.as_deref())?;
	let guard = FormSubmitGuard::localized(&ctx);
	let listener = bind_submit_guard(&document, &config, guard, WindowConfirm::new(window))?;

	// Dropping the previous listener unregisters it
	INSTALLED.with(|slot| *slot.borrow_mut() = Some(listener));
	info_log!(
		"create-local-user guard installed on #{} (locale {})",
		config.form_id,
		ctx.locale()
	);
	Ok(())
}

/// Remove the listeners registered by [`install`]
pub fn uninstall() {
	INSTALLED.with(|slot| slot.borrow_mut().take());
}

/// Page-initialization entry point
///
/// ```js
/// import init, { install_create_local_user_guard } from "./admin_console_pages.js";
///
/// await init();
/// install_create_local_user_guard(JSON.stringify({ locale: "ja" }));
/// ```
#[wasm_bindgen]
pub fn install_create_local_user_guard(config_json: Option<String>) -> Result<(), JsValue> {
	install(config_json.as_deref()).map_err(|err| {
		error_log!("failed to install create-local-user guard: {}", err);
		JsValue::from_str(&err.to_string())
	})
}
