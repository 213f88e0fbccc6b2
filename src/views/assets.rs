//! Static assets (navbar script, stylesheet) under `/static`.

use std::path::PathBuf;

use actix_files::Files;
use actix_web::web;
use tracing::debug;

/// URL prefix the templates link assets from.
pub const STATIC_PREFIX: &str = "/static";

/// Mount `dir` at `/static` when it exists. A missing directory mounts nothing,
/// so asset requests fall through to 404.
pub fn configure_static_routes(dir: PathBuf) -> impl FnOnce(&mut web::ServiceConfig) {
    move |cfg| {
        if dir.is_dir() {
            cfg.service(Files::new(STATIC_PREFIX, dir).prefer_utf8(true));
        } else {
            debug!("Static directory {:?} missing, not mounting {}", dir, STATIC_PREFIX);
        }
    }
}
