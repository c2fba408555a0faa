//! Dashboard Feature
//!
//! The overview page: a fixed grid of independent widgets fed by the
//! controller's datasets.

pub mod controller;
pub mod layout;
pub mod page;
pub mod widgets;
