// Logging setup plus debug-build-only macros. The hidden word is logged at
// debug level, so release players cannot cheat via RUST_LOG.

use env_logger::Env;

/// Initializes the `log` facade. Verbosity comes from `RUST_LOG`,
/// defaulting to warnings only.
pub fn init() {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();
}

#[cfg(debug_assertions)]
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {
        log::debug!($($arg)*);
    };
}

#[cfg(not(debug_assertions))]
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {{}};
}

#[cfg(debug_assertions)]
#[macro_export]
macro_rules! info_log {
    ($($arg:tt)*) => {
        log::info!($($arg)*);
    };
}

#[cfg(not(debug_assertions))]
#[macro_export]
macro_rules! info_log {
    ($($arg:tt)*) => {{}};
}
