//! Internationalization support for the admin console
//!
//! Provides:
//! - [`MessageCatalog`]: per-locale translation tables
//! - [`po_parser`]: gettext `.po` reader feeding the catalogs
//! - [`TranslationContext`]: active locale with language and fallback lookup
//! - [`builtin_context`]: a context preloaded with the bundled catalogs

pub mod catalog;
pub mod context;
pub mod po_parser;

pub use catalog::MessageCatalog;
pub use context::{I18nError, TranslationContext, builtin_context};
pub use po_parser::{PoParseError, parse_po_file};
