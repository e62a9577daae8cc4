//! Translation context: the active locale and the catalogs it can draw from

use crate::MessageCatalog;
use crate::po_parser::{PoParseError, parse_po_file};
use std::collections::HashMap;

/// Japanese catalog shipped with the console
const JA_PO: &str = include_str!("../locale/ja.po");

/// Errors raised while assembling a [`TranslationContext`]
#[derive(Debug, thiserror::Error)]
pub enum I18nError {
	#[error("catalog for locale '{catalog}' registered under '{requested}'")]
	LocaleMismatch { requested: String, catalog: String },
	#[error("failed to load catalog for '{locale}': {source}")]
	Po {
		locale: String,
		#[source]
		source: PoParseError,
	},
}

/// Locale plus the catalogs used to translate into it
///
/// Lookups try the active locale, then its bare language subtag
/// (`ja-JP` falls back to `ja`), then the fallback locale. When nothing
/// matches the msgid itself is returned.
#[derive(Debug, Clone)]
pub struct TranslationContext {
	locale: String,
	fallback_locale: String,
	catalogs: HashMap<String, MessageCatalog>,
}

impl TranslationContext {
	pub fn new(locale: impl Into<String>, fallback_locale: impl Into<String>) -> Self {
		Self {
			locale: normalize_tag(&locale.into()),
			fallback_locale: normalize_tag(&fallback_locale.into()),
			catalogs: HashMap::new(),
		}
	}

	pub fn locale(&self) -> &str {
		&self.locale
	}

	pub fn fallback_locale(&self) -> &str {
		&self.fallback_locale
	}

	/// Register a catalog; `locale` must name the catalog's own locale
	pub fn add_catalog(&mut self, locale: &str, catalog: MessageCatalog) -> Result<(), I18nError> {
		let requested = normalize_tag(locale);
		if normalize_tag(catalog.locale()) != requested {
			return Err(I18nError::LocaleMismatch {
				requested,
				catalog: catalog.locale().to_string(),
			});
		}
		self.catalogs.insert(requested, catalog);
		Ok(())
	}

	/// Parse a `.po` document and register it for `locale`
	pub fn add_po(&mut self, locale: &str, po: &str) -> Result<(), I18nError> {
		let catalog = parse_po_file(po.as_bytes(), locale).map_err(|source| I18nError::Po {
			locale: locale.to_string(),
			source,
		})?;
		self.add_catalog(locale, catalog)
	}

	/// Switch the active locale, keeping the loaded catalogs
	pub fn set_locale(&mut self, locale: &str) {
		self.locale = normalize_tag(locale);
	}

	pub fn has_catalog(&self, locale: &str) -> bool {
		self.catalogs.contains_key(&normalize_tag(locale))
	}

	/// Translate `msgid` into the active locale
	pub fn gettext(&self, msgid: &str) -> String {
		self.lookup(|catalog| catalog.get(msgid))
			.unwrap_or(msgid)
			.to_string()
	}

	/// Translate `msgid` within `context`
	pub fn pgettext(&self, context: &str, msgid: &str) -> String {
		self.lookup(|catalog| catalog.get_context(context, msgid))
			.unwrap_or(msgid)
			.to_string()
	}

	fn lookup<'a, F>(&'a self, find: F) -> Option<&'a str>
	where
		F: Fn(&'a MessageCatalog) -> Option<&'a str>,
	{
		for candidate in self.candidates() {
			if let Some(found) = self.catalogs.get(candidate).and_then(&find) {
				return Some(found);
			}
		}
		tracing::debug!(
			locale = %self.locale,
			fallback = %self.fallback_locale,
			"no translation found, using msgid"
		);
		None
	}

	/// Locale tags to try, most specific first
	fn candidates(&self) -> Vec<&str> {
		let mut tags = Vec::with_capacity(4);
		for tag in [self.locale.as_str(), self.fallback_locale.as_str()] {
			if !tags.contains(&tag) {
				tags.push(tag);
			}
			let language = language_subtag(tag);
			if !tags.contains(&language) {
				tags.push(language);
			}
		}
		tags
	}
}

/// Context preloaded with every catalog bundled with the console
///
/// ```
/// use admin_console_i18n::builtin_context;
///
/// let ctx = builtin_context("ja-JP").unwrap();
/// assert_eq!(ctx.gettext("Required field"), "必須入力項目です");
///
/// let ctx = builtin_context("en").unwrap();
/// assert_eq!(ctx.gettext("Required field"), "Required field");
/// ```
pub fn builtin_context(locale: &str) -> Result<TranslationContext, I18nError> {
	let mut ctx = TranslationContext::new(locale, "en");
	ctx.add_po("ja", JA_PO)?;
	Ok(ctx)
}

/// Canonical form used as the catalog key: `ja_JP` and `JA-jp` become `ja-jp`
fn normalize_tag(tag: &str) -> String {
	tag.trim().replace('_', "-").to_ascii_lowercase()
}

fn language_subtag(tag: &str) -> &str {
	tag.split('-').next().unwrap_or(tag)
}
