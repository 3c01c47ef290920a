//! Maintenance Calories Calculator Backend Library
//!
//! This library exposes the backend modules for use in tests and other crates.

pub mod config;
pub mod error;
pub mod render;
pub mod routes;
pub mod services;
pub mod state;
