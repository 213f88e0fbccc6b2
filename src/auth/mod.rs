//! Session verification for pages that require a logged-in user.
//!
//! The login service signs an HS256 JWT and stores it in an HttpOnly cookie.
//! This module holds the shared half of that contract: the claim layout, the
//! issuer, and the code to mint and check tokens.

mod extractor;

use actix_web::HttpRequest;
use actix_web::cookie::{Cookie, SameSite};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use secrecy::{ExposeSecret, SecretString};

use crate::config::SessionSettings;
use crate::error::{AppError, AppResult};
use crate::models::{CurrentUser, SessionClaims};

pub use extractor::AuthError;

/// Session JWT issuer.
pub const SESSION_ISSUER: &str = "website";

/// Sign a session token for `user`, valid for `ttl_secs`.
pub fn issue_session_token(
    user: &CurrentUser,
    secret: &SecretString,
    ttl_secs: u64,
) -> AppResult<String> {
    let now = chrono::Utc::now();
    let exp = i64::try_from(ttl_secs)
        .ok()
        .and_then(chrono::TimeDelta::try_seconds)
        .and_then(|ttl| now.checked_add_signed(ttl))
        .ok_or_else(|| AppError::Internal(format!("Session TTL of {}s is out of range", ttl_secs)))?;

    let claims = SessionClaims {
        sub: user.id.clone(),
        iss: SESSION_ISSUER.to_string(),
        exp: exp.timestamp() as usize,
        iat: now.timestamp() as usize,
        user_id: user.id.clone(),
        username: user.username.clone(),
    };

    let key = EncodingKey::from_secret(secret.expose_secret().as_bytes());
    Ok(encode(&Header::default(), &claims, &key)?)
}

/// Verify a session token and return its claims.
pub fn verify_session_token(token: &str, secret: &SecretString) -> Result<SessionClaims, String> {
    let key = DecodingKey::from_secret(secret.expose_secret().as_bytes());
    let mut validation = Validation::new(Algorithm::HS256);
    validation.set_issuer(&[SESSION_ISSUER]);
    validation.validate_aud = false;

    let token_data = decode::<SessionClaims>(token, &key, &validation)
        .map_err(|e| format!("Invalid session token: {}", e))?;

    Ok(token_data.claims)
}

/// The token in `req`'s session cookie. An empty cookie counts as no session.
pub fn session_token(req: &HttpRequest, settings: &SessionSettings) -> Option<String> {
    req.cookie(&settings.cookie_name)
        .map(|c| c.value().to_string())
        .filter(|token| !token.is_empty())
}

/// Build the session cookie the login service hands to browsers.
pub fn session_cookie(settings: &SessionSettings, token: String) -> Cookie<'static> {
    let mut cookie = Cookie::new(settings.cookie_name.clone(), token);
    cookie.set_path("/");
    cookie.set_http_only(true);
    cookie.set_same_site(SameSite::Lax);
    cookie.set_secure(settings.secure_cookies);
    cookie
}
