//! State - UI State Modules
//!
//! Each state module represents a distinct piece of UI state with a single owner.

pub mod i18n_state;
pub mod sidebar_state;
pub mod tabs_state;
