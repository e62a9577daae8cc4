//! Message catalogs and translation lookup
//!
//! Re-exports `admin-console-i18n`.

pub use admin_console_i18n::*;
