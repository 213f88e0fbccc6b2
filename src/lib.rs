//! Website server library.
//!
//! Session verification, template rendering, and the page routes, split out
//! of the binary so integration tests can assemble the app.

pub mod auth;
pub mod config;
pub mod error;
pub mod middleware;
pub mod models;
pub mod templates;
pub mod views;
