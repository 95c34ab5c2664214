//! Shared utilities for chatkit
//!
//! This crate provides common functionality used across the chatkit workspace,
//! including logging setup and small text helpers.

pub mod logging;
pub mod text;

pub use logging::init_tracing;
pub use text::{closest_match, edit_distance};
