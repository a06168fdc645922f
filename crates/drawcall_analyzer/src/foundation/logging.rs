//! Logging utilities

/// Initialize the logging system
///
/// `filter` applies when `RUST_LOG` is unset. Later calls are ignored.
pub fn init_with_default(filter: &str) {
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(filter))
        .try_init();
}
