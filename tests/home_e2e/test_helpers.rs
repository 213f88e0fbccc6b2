//! Shared test helpers for home page E2E tests.

use std::path::{Path, PathBuf};

use actix_web::cookie::Cookie;
use actix_web::{App, dev::ServiceResponse, test, web};
use jsonwebtoken::{EncodingKey, Header, encode};
use secrecy::SecretString;
use website_lib::auth::{SESSION_ISSUER, issue_session_token, session_cookie};
use website_lib::config::SessionSettings;
use website_lib::middleware::RequestLogger;
use website_lib::models::{CurrentUser, SessionClaims};
use website_lib::templates::Templates;
use website_lib::views;

/// Secret shared with the (pretend) login service.
pub const TEST_SECRET: &str = "test-session-secret-for-home-e2e";

/// Login page used for redirect assertions.
pub const TEST_LOGIN_URL: &str = "/login";

/// Session settings matching `TEST_SECRET`, redirecting to `TEST_LOGIN_URL`.
pub fn test_session_settings() -> SessionSettings {
    SessionSettings {
        secret: SecretString::from(TEST_SECRET.to_string()),
        cookie_name: "site_session".to_string(),
        login_url: Some(TEST_LOGIN_URL.to_string()),
        ttl_secs: 300,
        secure_cookies: false,
    }
}

/// Templates shipped with the crate.
pub fn shipped_templates() -> Templates {
    let dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("templates");
    Templates::from_dir(&dir).expect("shipped templates should load")
}

/// Static assets shipped with the crate.
pub fn shipped_static_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("static")
}

/// Build the page app the way `main` does, serving the shipped assets.
pub async fn create_test_app(
    settings: SessionSettings,
    templates: Templates,
) -> impl actix_web::dev::Service<
    actix_http::Request,
    Response = ServiceResponse,
    Error = actix_web::Error,
> {
    create_test_app_with_static(settings, templates, shipped_static_dir()).await
}

/// Build the page app with `static_dir` mounted at `/static`.
pub async fn create_test_app_with_static(
    settings: SessionSettings,
    templates: Templates,
    static_dir: PathBuf,
) -> impl actix_web::dev::Service<
    actix_http::Request,
    Response = ServiceResponse,
    Error = actix_web::Error,
> {
    test::init_service(
        App::new()
            .wrap(RequestLogger)
            .app_data(web::Data::new(settings))
            .app_data(web::Data::new(templates))
            .configure(views::configure_health_routes)
            .configure(views::configure_home_routes)
            .configure(views::configure_static_routes(static_dir)),
    )
    .await
}

/// A session cookie for `username`, signed with `TEST_SECRET`.
pub fn session_for(username: &str) -> Cookie<'static> {
    let settings = test_session_settings();
    let user = CurrentUser {
        id: format!("id-{}", username),
        username: username.to_string(),
    };
    let token = issue_session_token(&user, &settings.secret, settings.ttl_secs)
        .expect("token should be issued");
    session_cookie(&settings, token)
}

/// A session cookie whose token expired an hour ago.
pub fn expired_session_for(username: &str) -> Cookie<'static> {
    let now = chrono::Utc::now().timestamp() as usize;
    let claims = SessionClaims {
        sub: username.to_string(),
        iss: SESSION_ISSUER.to_string(),
        exp: now - 3600,
        iat: now - 7200,
        user_id: username.to_string(),
        username: username.to_string(),
    };
    let token = encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(TEST_SECRET.as_bytes()),
    )
    .expect("token should encode");
    session_cookie(&test_session_settings(), token)
}

/// GET `uri`, optionally with a session cookie. Returns status, headers and body.
pub async fn get_page<S>(
    app: &S,
    uri: &str,
    cookie: Option<Cookie<'static>>,
) -> (u16, actix_web::http::header::HeaderMap, String)
where
    S: actix_web::dev::Service<
            actix_http::Request,
            Response = ServiceResponse,
            Error = actix_web::Error,
        >,
{
    let mut req = test::TestRequest::get().uri(uri);
    if let Some(cookie) = cookie {
        req = req.cookie(cookie);
    }

    let resp = test::call_service(app, req.to_request()).await;
    let status = resp.status().as_u16();
    let headers = resp.headers().clone();
    let body = test::read_body(resp).await;
    (
        status,
        headers,
        String::from_utf8(body.to_vec()).expect("body should be utf-8"),
    )
}
