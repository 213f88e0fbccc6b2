//! Page and probe routes.

pub mod assets;
pub mod health;
pub mod home;

pub use assets::configure_static_routes;
pub use health::configure_health_routes;
pub use home::configure_routes as configure_home_routes;
