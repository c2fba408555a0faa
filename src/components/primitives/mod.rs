//! Primitive Components
//!
//! Basic building blocks like buttons, badges and avatars.

pub mod avatar;
pub mod badge;
pub mod button;
