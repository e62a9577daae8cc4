//! Create-local-user page behavior
//!
//! Re-exports `admin-console-pages`. In a wasm32 build this includes the
//! `install_create_local_user_guard` entry point for page initialization.

pub use admin_console_pages::*;
