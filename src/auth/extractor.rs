//! Actix-web extractor resolving the logged-in user from the session cookie.
//!
//! Handlers that take a `CurrentUser` argument are only entered for callers
//! with a valid session. Everyone else gets the login redirect (or a 401 when
//! no login page is configured) produced by `AuthError`.

use actix_web::dev::Payload;
use actix_web::http::{StatusCode, header};
use actix_web::{FromRequest, HttpRequest, HttpResponse, ResponseError, web};
use std::future::{Ready, ready};
use tracing::debug;

use super::{session_token, verify_session_token};
use crate::config::SessionSettings;
use crate::error::ErrorResponse;
use crate::models::CurrentUser;

/// Why a request was turned away before reaching its handler.
#[derive(Debug)]
pub enum AuthError {
    /// No usable session; send the caller to `login_url` and back to `next`.
    LoginRequired {
        login_url: Option<String>,
        next: String,
        reason: String,
    },
    /// Session settings were never registered as app data.
    Misconfigured,
}

impl AuthError {
    fn login_required(settings: &SessionSettings, req: &HttpRequest, reason: String) -> Self {
        let next = req
            .uri()
            .path_and_query()
            .map(|pq| pq.as_str().to_string())
            .unwrap_or_else(|| req.path().to_string());

        AuthError::LoginRequired {
            login_url: settings.login_url.clone(),
            next,
            reason,
        }
    }

    /// Location header value for the login redirect, if one is configured.
    pub fn redirect_location(&self) -> Option<String> {
        match self {
            AuthError::LoginRequired {
                login_url: Some(url),
                next,
                ..
            } => {
                let sep = if url.contains('?') { '&' } else { '?' };
                Some(format!("{}{}next={}", url, sep, urlencoding::encode(next)))
            }
            _ => None,
        }
    }
}

impl std::fmt::Display for AuthError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AuthError::LoginRequired { reason, .. } => write!(f, "{}", reason),
            AuthError::Misconfigured => write!(f, "Internal configuration error"),
        }
    }
}

impl ResponseError for AuthError {
    fn status_code(&self) -> StatusCode {
        match self {
            AuthError::LoginRequired {
                login_url: Some(_), ..
            } => StatusCode::FOUND,
            AuthError::LoginRequired { login_url: None, .. } => StatusCode::UNAUTHORIZED,
            AuthError::Misconfigured => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        if let Some(location) = self.redirect_location() {
            return HttpResponse::Found()
                .insert_header((header::LOCATION, location))
                .finish();
        }

        let (error, message) = match self {
            AuthError::Misconfigured => {
                tracing::error!("Session settings missing from app data");
                ("INTERNAL_ERROR", self.to_string())
            }
            AuthError::LoginRequired { .. } => {
                ("UNAUTHORIZED", "Please log in to access this page.".to_string())
            }
        };

        HttpResponse::build(self.status_code()).json(ErrorResponse {
            error: error.to_string(),
            message,
        })
    }
}

/// Extractor that requires a valid session.
///
/// ```ignore
/// async fn protected_handler(user: CurrentUser) -> impl Responder {
///     format!("hello {}", user.username)
/// }
/// ```
impl FromRequest for CurrentUser {
    type Error = AuthError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let settings = match req.app_data::<web::Data<SessionSettings>>() {
            Some(settings) => settings,
            None => return ready(Err(AuthError::Misconfigured)),
        };

        let token = match session_token(req, settings) {
            Some(token) => token,
            None => {
                debug!(path = %req.path(), "No session cookie");
                return ready(Err(AuthError::login_required(
                    settings,
                    req,
                    "Missing session".to_string(),
                )));
            }
        };

        match verify_session_token(&token, &settings.secret) {
            Ok(claims) => ready(Ok(CurrentUser::from(claims))),
            Err(e) => {
                debug!(path = %req.path(), "Rejected session: {}", e);
                ready(Err(AuthError::login_required(settings, req, e)))
            }
        }
    }
}
