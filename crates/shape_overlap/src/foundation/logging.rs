//! Logging utilities and structured logging support

pub use log::{debug, trace};

/// Initialize the logging system if no logger is installed yet
///
/// Reads the filter from `RUST_LOG`.
pub fn try_init() {
    let _ = env_logger::builder().is_test(cfg!(test)).try_init();
}
