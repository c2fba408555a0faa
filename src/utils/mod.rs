//! Utilities
//!
//! Configuration storage, logging setup and display formatting.

pub mod config_store;
pub mod format;
pub mod logging;
