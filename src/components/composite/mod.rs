//! Composite Components
//!
//! Components assembled from primitives: cards and tables.

pub mod card;
pub mod data_table;
