//! Welcome page for logged-in users.

use actix_web::{HttpResponse, routes, web};
use tera::Context;
use tracing::debug;

use crate::error::AppResult;
use crate::models::CurrentUser;
use crate::templates::Templates;

/// Template rendered for the welcome page.
pub const HOME_TEMPLATE: &str = "home.html";

/// GET / and GET /home
///
/// Callers without a valid session never get here; the `CurrentUser`
/// extractor answers them with the login redirect.
#[routes]
#[get("/")]
#[get("/home")]
pub async fn home(user: CurrentUser, templates: web::Data<Templates>) -> AppResult<HttpResponse> {
    debug!(user_id = %user.id, "Rendering home page");

    let mut context = Context::new();
    context.insert("name", &user.username);
    templates.render(HOME_TEMPLATE, &context)
}

/// Configure page routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(home);
}
