//! Session-bound user identity.

use serde::{Deserialize, Serialize};

/// The logged-in user, as vouched for by the session cookie.
///
/// Owned by the login service; this server only reads it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CurrentUser {
    pub id: String,
    pub username: String,
}

impl From<SessionClaims> for CurrentUser {
    fn from(claims: SessionClaims) -> Self {
        Self {
            id: claims.user_id,
            username: claims.username,
        }
    }
}

/// Session JWT claims.
#[derive(Debug, Serialize, Deserialize)]
pub struct SessionClaims {
    pub sub: String,
    pub iss: String,
    pub exp: usize,
    pub iat: usize,
    pub user_id: String,
    pub username: String,
}
