//! Backend service for the workout-bird app.
//!
//! A deliberately small HTTP service: two read-only endpoints returning
//! static JSON, with a permissive CORS policy applied to every response so
//! the frontend can call it from any origin during development.
//!
//! # Modules
//!
//! - [`config`]: Configuration loading from environment
//! - [`error`]: Unified error types
//! - [`api`]: HTTP routes and handlers
//! - [`utils`]: Utility functions

pub mod api;
pub mod config;
pub mod error;
pub mod utils;

pub use config::Config;
pub use error::{AppError, Result};
