//! Utility modules: logging and best-score persistence.

pub mod logging;
pub mod persistence;

pub use logging::init_logging;
