//! Layout Components
//!
//! Shell, header and sidebar.

pub mod header;
pub mod shell;
pub mod sidebar;
