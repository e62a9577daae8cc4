//! Browser tests for the DOM binding of the submit guard
//!
//! Run with `wasm-pack test --headless --chrome crates/admin-console-pages`.

#![cfg(target_arch = "wasm32")]

use admin_console_forms::ConstraintField;
use admin_console_pages::{
	BindError, DomInput, FormSubmitGuard, GuardConfig, SubmitListener, bind_submit_guard,
	detect_locale, install, uninstall,
};
use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{Document, Element, Event, EventInit, HtmlFormElement, HtmlInputElement};

wasm_bindgen_test_configure!(run_in_browser);

const FORM_HTML: &str = r#"
<form id="localUserForm" action="/users" method="post">
	<input id="userName" name="userName" type="text" required pattern="[A-Za-z0-9]+">
	<input id="password" name="password" type="password" required>
</form>
"#;

/// Mounted form markup, removed from the document on drop
struct Page {
	document: Document,
	container: Element,
}

impl Page {
	fn mount(html: &str) -> Self {
		let document = web_sys::window().unwrap().document().unwrap();
		let container = document.create_element("div").unwrap();
		container.set_inner_html(html);
		document.body().unwrap().append_child(&container).unwrap();
		Self {
			document,
			container,
		}
	}

	fn input(&self, id: &str) -> HtmlInputElement {
		self.document
			.get_element_by_id(id)
			.unwrap()
			.dyn_into::<HtmlInputElement>()
			.unwrap()
	}

	fn form(&self) -> HtmlFormElement {
		self.document
			.get_element_by_id("localUserForm")
			.unwrap()
			.dyn_into::<HtmlFormElement>()
			.unwrap()
	}

	/// Dispatch a cancelable submit event and report whether it was prevented
	fn submit(&self) -> bool {
		let init = EventInit::new();
		init.set_bubbles(true);
		init.set_cancelable(true);
		let event = Event::new_with_event_init_dict("submit", &init).unwrap();
		self.form().dispatch_event(&event).unwrap();
		event.default_prevented()
	}

	fn type_into(&self, id: &str, value: &str) {
		let input = self.input(id);
		input.set_value(value);
		let event = Event::new("input").unwrap();
		input.dispatch_event(&event).unwrap();
	}

	fn custom_validity(&self, id: &str) -> String {
		DomInput::new(self.input(id)).custom_validity()
	}
}

impl Drop for Page {
	fn drop(&mut self) {
		self.container.remove();
	}
}

/// `lang` attribute of `<html>`, restored on drop
struct HtmlLang {
	root: Element,
	previous: Option<String>,
}

impl HtmlLang {
	fn set(lang: Option<&str>) -> Self {
		let document = web_sys::window().unwrap().document().unwrap();
		let root = document.document_element().unwrap();
		let previous = root.get_attribute("lang");
		match lang {
			Some(lang) => root.set_attribute("lang", lang).unwrap(),
			None => root.remove_attribute("lang").unwrap(),
		}
		Self { root, previous }
	}
}

impl Drop for HtmlLang {
	fn drop(&mut self) {
		let _ = match &self.previous {
			Some(lang) => self.root.set_attribute("lang", lang),
			None => self.root.remove_attribute("lang"),
		};
	}
}

/// Confirm dialog answering `answer` and counting prompts
fn counting_confirm(answer: bool) -> (Rc<Cell<usize>>, impl Fn(&str) -> bool + 'static) {
	let calls = Rc::new(Cell::new(0));
	let counter = Rc::clone(&calls);
	let dialog = move |_: &str| {
		counter.set(counter.get() + 1);
		answer
	};
	(calls, dialog)
}

fn bind(page: &Page, answer: bool) -> (SubmitListener, Rc<Cell<usize>>) {
	let (calls, dialog) = counting_confirm(answer);
	let listener = bind_submit_guard(
		&page.document,
		&GuardConfig::default(),
		FormSubmitGuard::default(),
		dialog,
	)
	.unwrap();
	(listener, calls)
}

#[wasm_bindgen_test]
fn test_empty_username_blocks_submit() {
	let page = Page::mount(FORM_HTML);
	let (_listener, calls) = bind(&page, true);

	let prevented = page.submit();

	assert!(prevented);
	assert_eq!(page.custom_validity("userName"), "Required field");
	assert_eq!(calls.get(), 0);
}

#[wasm_bindgen_test]
fn test_full_width_username_blocks_submit() {
	let page = Page::mount(FORM_HTML);
	let (_listener, calls) = bind(&page, true);
	page.input("userName").set_value("ｕｓｅｒ");
	page.input("password").set_value("s3cret");

	let prevented = page.submit();

	assert!(prevented);
	assert_eq!(
		page.custom_validity("userName"),
		"Please enter using half-width alphanumeric characters"
	);
	assert_eq!(calls.get(), 0);
}

#[wasm_bindgen_test]
fn test_empty_password_blocks_submit() {
	let page = Page::mount(FORM_HTML);
	let (_listener, calls) = bind(&page, true);
	page.input("userName").set_value("admin01");

	let prevented = page.submit();

	assert!(prevented);
	assert_eq!(page.custom_validity("userName"), "");
	assert_eq!(page.custom_validity("password"), "Required field");
	assert_eq!(calls.get(), 0);
}

#[wasm_bindgen_test]
fn test_confirmation_decides_valid_submit() {
	for (answer, expect_prevented) in [(true, false), (false, true)] {
		let page = Page::mount(FORM_HTML);
		let (_listener, calls) = bind(&page, answer);
		page.input("userName").set_value("admin01");
		page.input("password").set_value("s3cret");

		let prevented = page.submit();

		assert_eq!(prevented, expect_prevented);
		assert_eq!(calls.get(), 1);
	}
}

#[wasm_bindgen_test]
fn test_typing_clears_stale_message() {
	let page = Page::mount(FORM_HTML);
	let (_listener, _calls) = bind(&page, true);
	page.submit();
	assert_eq!(page.custom_validity("userName"), "Required field");

	page.type_into("userName", "admin");

	assert_eq!(page.custom_validity("userName"), "");
	assert!(page.input("userName").check_validity());
}

#[wasm_bindgen_test]
fn test_dropping_listener_unbinds_guard() {
	let page = Page::mount(FORM_HTML);
	let (listener, calls) = bind(&page, false);
	drop(listener);

	let prevented = page.submit();

	assert!(!prevented);
	assert_eq!(page.custom_validity("userName"), "");
	assert_eq!(calls.get(), 0);
}

#[wasm_bindgen_test]
fn test_missing_form_is_reported() {
	let page = Page::mount(FORM_HTML);
	let config = GuardConfig {
		form_id: "noSuchForm".to_string(),
		..GuardConfig::default()
	};

	let result = bind_submit_guard(
		&page.document,
		&config,
		FormSubmitGuard::default(),
		|_: &str| true,
	);

	assert!(matches!(result, Err(BindError::ElementNotFound { ref id }) if id == "noSuchForm"));
}

#[wasm_bindgen_test]
fn test_non_input_field_is_reported() {
	let page = Page::mount(
		r#"<form id="localUserForm"><textarea id="userName"></textarea><input id="password"></form>"#,
	);

	let result = bind_submit_guard(
		&page.document,
		&GuardConfig::default(),
		FormSubmitGuard::default(),
		|_: &str| true,
	);

	assert!(matches!(result, Err(BindError::UnexpectedElement { ref id, .. }) if id == "userName"));
}

#[wasm_bindgen_test]
fn test_field_outside_form_is_reported() {
	let page = Page::mount(
		r#"<form id="localUserForm"><input id="userName"></form><input id="password">"#,
	);

	let result = bind_submit_guard(
		&page.document,
		&GuardConfig::default(),
		FormSubmitGuard::default(),
		|_: &str| true,
	);

	assert!(matches!(result, Err(BindError::OutsideForm { ref id, .. }) if id == "password"));
}

#[wasm_bindgen_test]
fn test_detect_locale_prefers_html_lang() {
	let window = web_sys::window().unwrap();
	let document = window.document().unwrap();

	let _lang = HtmlLang::set(Some("ja"));

	assert_eq!(detect_locale(&window, &document).as_deref(), Some("ja"));
}

#[wasm_bindgen_test]
fn test_detect_locale_falls_back_to_navigator() {
	let window = web_sys::window().unwrap();
	let document = window.document().unwrap();

	let _lang = HtmlLang::set(Some("  "));

	assert_eq!(
		detect_locale(&window, &document),
		window.navigator().language()
	);
}

#[wasm_bindgen_test]
fn test_install_uses_page_language() {
	let _lang = HtmlLang::set(Some("ja"));
	let page = Page::mount(FORM_HTML);

	install(None).unwrap();
	let prevented = page.submit();
	uninstall();

	assert!(prevented);
	assert_eq!(page.custom_validity("userName"), "必須入力項目です");
}

#[wasm_bindgen_test]
fn test_install_config_locale_overrides_page() {
	let _lang = HtmlLang::set(Some("ja"));
	let page = Page::mount(FORM_HTML);

	install(Some(r#"{"locale": "en"}"#)).unwrap();
	page.submit();
	uninstall();

	assert_eq!(page.custom_validity("userName"), "Required field");
}

#[wasm_bindgen_test]
fn test_reinstall_replaces_previous_binding() {
	let page = Page::mount(FORM_HTML);
	install(None).unwrap();
	install(None).unwrap();

	// One uninstall must leave no listener behind
	uninstall();
	let prevented = page.submit();

	assert!(!prevented);
	assert_eq!(page.custom_validity("userName"), "");
}

#[wasm_bindgen_test]
fn test_uninstall_unbinds_guard() {
	let page = Page::mount(FORM_HTML);
	install(None).unwrap();
	assert!(page.submit());

	uninstall();
	// The input listener went with the guard
	page.input("userName").set_custom_validity("");
	let prevented = page.submit();

	assert!(!prevented);
	assert_eq!(page.custom_validity("userName"), "");
}

#[wasm_bindgen_test]
fn test_install_without_form_fails() {
	let result = install(Some(r#"{"form_id": "missingForm"}"#));

	assert!(matches!(result, Err(BindError::ElementNotFound { ref id }) if id == "missingForm"));
}
