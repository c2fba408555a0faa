//! Domain - Dashboard Records and Configuration
//!
//! Plain data types with no UI dependencies.

pub mod activity;
pub mod chart;
pub mod config;
pub mod connection;
pub mod dataset;
pub mod sample;
pub mod stat;
