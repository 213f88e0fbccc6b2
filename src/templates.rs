//! HTML template rendering.

use std::path::Path;

use actix_web::HttpResponse;
use actix_web::http::header::ContentType;
use tera::{Context, Tera};
use tracing::info;

use crate::error::{AppError, AppResult};

/// Compiled templates, shared read-only across workers.
#[derive(Debug, Clone)]
pub struct Templates {
    tera: Tera,
}

impl Templates {
    /// Load every `*.html` file below `dir`.
    pub fn from_dir(dir: &Path) -> AppResult<Self> {
        if !dir.is_dir() {
            return Err(AppError::Template(format!(
                "Template directory {} does not exist",
                dir.display()
            )));
        }

        let pattern = dir.join("**").join("*.html");
        let tera = Tera::new(&pattern.to_string_lossy())?;
        info!(
            "Loaded {} templates from {}",
            tera.get_template_names().count(),
            dir.display()
        );

        Ok(Self { tera })
    }

    pub fn new(tera: Tera) -> Self {
        Self { tera }
    }

    /// Render `name` to a string.
    pub fn render_to_string(&self, name: &str, context: &Context) -> AppResult<String> {
        Ok(self.tera.render(name, context)?)
    }

    /// Render `name` into a 200 `text/html` response.
    pub fn render(&self, name: &str, context: &Context) -> AppResult<HttpResponse> {
        let html = self.render_to_string(name, context)?;
        Ok(HttpResponse::Ok()
            .content_type(ContentType::html())
            .body(html))
    }
}
