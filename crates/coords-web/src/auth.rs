//! Session token issuance and credential hashing.
//!
//! Login and register issue an HS256 JWT, but authentication is by
//! server-side session lookup, not JWT verification — tokens minted by the
//! external OAuth exchange pass through the same session store and are not
//! JWTs we signed.

use anyhow::Context;
use axum::http::{header, HeaderMap};
use chrono::Duration;
use coords::models::{utc_now, User};
use coords::CoordsError;
use jsonwebtoken::{EncodingKey, Header};
use serde::Serialize;
use sha2::{Digest, Sha256};

pub const SESSION_EXPIRY_DAYS: i64 = 7;
pub const SESSION_COOKIE: &str = "session_token";

pub struct AuthConfig {
    encoding: EncodingKey,
}

impl AuthConfig {
    pub fn from_secret(secret: &[u8]) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret),
        }
    }
}

#[derive(Debug, Serialize)]
struct Claims {
    sub: String,
    email: String,
    role: coords::models::UserRole,
    tenant_id: String,
    exp: i64,
    iat: i64,
}

/// Mint the session JWT for a user.
pub fn generate_jwt(config: &AuthConfig, user: &User) -> Result<String, CoordsError> {
    let now = utc_now();
    let claims = Claims {
        sub: user.user_id.clone(),
        email: user.email.clone(),
        role: user.role,
        tenant_id: user.tenant_id.clone(),
        exp: (now + Duration::days(SESSION_EXPIRY_DAYS)).timestamp(),
        iat: now.timestamp(),
    };
    let token = jsonwebtoken::encode(&Header::default(), &claims, &config.encoding)
        .context("failed to encode session JWT")?;
    Ok(token)
}

/// Salted SHA-256 digest, `<salt_hex>$<digest_hex>`.
pub fn hash_password(password: &str) -> String {
    let salt: [u8; 16] = rand::random();
    let salt_hex = hex::encode(salt);
    let digest = Sha256::digest(format!("{salt_hex}{password}").as_bytes());
    format!("{salt_hex}${}", hex::encode(digest))
}

pub fn verify_password(password: &str, stored: &str) -> bool {
    let Some((salt_hex, digest_hex)) = stored.split_once('$') else {
        return false;
    };
    let digest = Sha256::digest(format!("{salt_hex}{password}").as_bytes());
    hex::encode(digest) == digest_hex
}

/// Session token from the `session_token` cookie, falling back to a
/// `Bearer` Authorization header.
pub fn extract_session_token(headers: &HeaderMap) -> Option<String> {
    if let Some(cookies) = headers.get(header::COOKIE).and_then(|v| v.to_str().ok()) {
        let from_cookie = cookies.split(';').find_map(|pair| {
            let (name, value) = pair.trim().split_once('=')?;
            (name == SESSION_COOKIE).then(|| value.to_string())
        });
        if from_cookie.is_some() {
            return from_cookie;
        }
    }

    headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .map(str::to_string)
}

/// `Set-Cookie` value for a fresh session.
pub fn session_cookie(token: &str) -> String {
    format!(
        "{SESSION_COOKIE}={token}; HttpOnly; Secure; SameSite=None; Path=/; Max-Age={}",
        SESSION_EXPIRY_DAYS * 24 * 60 * 60
    )
}

/// `Set-Cookie` value that clears the session cookie.
pub fn clear_session_cookie() -> String {
    format!("{SESSION_COOKIE}=; HttpOnly; Secure; SameSite=None; Path=/; Max-Age=0")
}
