//! Development logging for the console's browser code
//!
//! Output goes to the browser console on wasm32 and to stderr elsewhere.
//! Every macro compiles to nothing without `debug_assertions`.
//!
//! | Macro | Extra requirement | WASM | Non-WASM |
//! |-------|-------------------|------|----------|
//! | `debug_log!` | `debug-hooks` feature | `console.debug` | `eprintln!` |
//! | `info_log!` | | `console.info` | `eprintln!` |
//! | `warn_log!` | | `console.warn` | `eprintln!` |
//! | `error_log!` | | `console.error` | `eprintln!` |
//!
//! ```ignore
//! use admin_console_pages::{debug_log, error_log};
//!
//! debug_log!("submit blocked: {:?}", reason);
//! error_log!("failed to bind guard: {}", err);
//! ```

/// Writes one formatted line at the given level
#[doc(hidden)]
#[macro_export]
#[cfg(target_arch = "wasm32")]
macro_rules! __console {
	(debug, $($arg:tt)*) => {
		$crate::__private::web_sys::console::debug_1(&::std::format!($($arg)*).into())
	};
	(info, $($arg:tt)*) => {
		$crate::__private::web_sys::console::info_1(&::std::format!($($arg)*).into())
	};
	(warn, $($arg:tt)*) => {
		$crate::__private::web_sys::console::warn_1(&::std::format!($($arg)*).into())
	};
	(error, $($arg:tt)*) => {
		$crate::__private::web_sys::console::error_1(&::std::format!($($arg)*).into())
	};
}

/// Writes one formatted line at the given level
#[doc(hidden)]
#[macro_export]
#[cfg(not(target_arch = "wasm32"))]
macro_rules! __console {
	($level:ident, $($arg:tt)*) => {
		::std::eprintln!("[{}] {}", ::core::stringify!($level), ::std::format!($($arg)*))
	};
}

/// Type-checks and consumes the arguments of a disabled logging macro
#[doc(hidden)]
#[macro_export]
macro_rules! __discard {
	($($arg:tt)*) => {
		if false {
			let _ = ::std::format!($($arg)*);
		}
	};
}

/// Logs a debug message (`debug-hooks` feature + `debug_assertions`)
#[macro_export]
#[cfg(all(debug_assertions, feature = "debug-hooks"))]
macro_rules! debug_log {
	($($arg:tt)*) => {{
		$crate::__console!(debug, $($arg)*);
	}};
}

#[macro_export]
#[cfg(not(all(debug_assertions, feature = "debug-hooks")))]
macro_rules! debug_log {
	($($arg:tt)*) => {{
		$crate::__discard!($($arg)*);
	}};
}

/// Logs an info message (`debug_assertions` only)
#[macro_export]
#[cfg(debug_assertions)]
macro_rules! info_log {
	($($arg:tt)*) => {{
		$crate::__console!(info, $($arg)*);
	}};
}

#[macro_export]
#[cfg(not(debug_assertions))]
macro_rules! info_log {
	($($arg:tt)*) => {{
		$crate::__discard!($($arg)*);
	}};
}

/// Logs a warning (`debug_assertions` only)
#[macro_export]
#[cfg(debug_assertions)]
macro_rules! warn_log {
	($($arg:tt)*) => {{
		$crate::__console!(warn, $($arg)*);
	}};
}

#[macro_export]
#[cfg(not(debug_assertions))]
macro_rules! warn_log {
	($($arg:tt)*) => {{
		$crate::__discard!($($arg)*);
	}};
}

/// Logs an error (`debug_assertions` only)
#[macro_export]
#[cfg(debug_assertions)]
macro_rules! error_log {
	($($arg:tt)*) => {{
		$crate::__console!(error, $($arg)*);
	}};
}

#[macro_export]
#[cfg(not(debug_assertions))]
macro_rules! error_log {
	($($arg:tt)*) => {{
		$crate::__discard!($($arg)*);
	}};
}
