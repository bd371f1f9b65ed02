/// Development-only console logging
///
/// `log!` is compiled in for debug builds or with the `console_logging`
/// feature and compiles to nothing otherwise. Errors and warnings go through
/// `leptos::logging::{error, warn}` in every build.
///
/// ```rust,ignore
/// use crate::log;
///
/// log!("Loaded {} trips", trips.len());
/// ```
#[macro_export]
macro_rules! log {
    ($($arg:expr),+ $(,)?) => {
        #[cfg(any(debug_assertions, feature = "console_logging"))]
        {
            web_sys::console::log_1(&format!($($arg),+).into());
        }
    };
}
