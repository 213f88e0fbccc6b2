//! Domain models for the website.

pub mod user;

pub use user::{CurrentUser, SessionClaims};
