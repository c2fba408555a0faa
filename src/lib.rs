//! Smite Dashboard Library
//!
//! This crate provides the application logic for the Smite dashboard, a native
//! GUI client that monitors VPN tunnel infrastructure.

rust_i18n::i18n!("locales", fallback = "en");

pub mod app;
pub mod assets;
pub mod components;
pub mod constants;
pub mod domain;
pub mod error;
pub mod features;
pub mod i18n;
pub mod state;
pub mod theme;
pub mod utils;
