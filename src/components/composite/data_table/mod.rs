//! DataTable Component
//!
//! A reusable table that renders the rows of a widget frame.

pub mod column;
pub mod data_table;

pub use column::{Column, ColumnWidth};
pub use data_table::DataTable;
