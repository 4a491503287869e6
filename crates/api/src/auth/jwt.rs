//! Session tokens.
//!
//! An access token is an HS256 JWT issued by `daybook` whose subject is the
//! user id. A refresh token is an opaque random string handed to the client
//! once; `user_sessions` stores only its SHA-256 hex digest.

use daybook_core::types::DbId;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use uuid::Uuid;

use crate::config::env_or;

/// Value of the `iss` claim; tokens from any other issuer are rejected.
pub const ISSUER: &str = "daybook";

/// Payload of an access token.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    pub sub: DbId,
    pub iss: String,
    pub exp: i64,
    pub iat: i64,
    /// Random per-token id, useful when correlating logs.
    pub jti: String,
}

/// Signing secret and token lifetimes.
#[derive(Debug, Clone)]
pub struct JwtConfig {
    pub secret: String,
    pub access_token_expiry_mins: i64,
    pub refresh_token_expiry_days: i64,
}

impl JwtConfig {
    /// Load token settings from the environment.
    ///
    /// | Env Var                    | Required | Default |
    /// |----------------------------|----------|---------|
    /// | `JWT_SECRET`               | **yes**  | --      |
    /// | `JWT_ACCESS_EXPIRY_MINS`   | no       | `15`    |
    /// | `JWT_REFRESH_EXPIRY_DAYS`  | no       | `7`     |
    ///
    /// # Panics
    ///
    /// Panics if `JWT_SECRET` is missing or empty, or a lifetime is not an
    /// integer.
    pub fn from_env() -> Self {
        let secret = std::env::var("JWT_SECRET").unwrap_or_default();
        assert!(!secret.is_empty(), "JWT_SECRET must be set and non-empty");

        Self {
            secret,
            access_token_expiry_mins: env_or("JWT_ACCESS_EXPIRY_MINS", 15),
            refresh_token_expiry_days: env_or("JWT_REFRESH_EXPIRY_DAYS", 7),
        }
    }

    /// Access token lifetime in seconds, as reported to clients.
    pub fn access_ttl_secs(&self) -> i64 {
        self.access_token_expiry_mins * 60
    }

    fn validation() -> Validation {
        let mut validation = Validation::default();
        validation.set_issuer(&[ISSUER]);
        validation
    }
}

/// Sign an access token for `user_id`.
pub fn generate_access_token(
    user_id: DbId,
    config: &JwtConfig,
) -> Result<String, jsonwebtoken::errors::Error> {
    let iat = chrono::Utc::now().timestamp();
    let claims = Claims {
        sub: user_id,
        iss: ISSUER.to_string(),
        exp: iat + config.access_ttl_secs(),
        iat,
        jti: Uuid::new_v4().to_string(),
    };
    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(config.secret.as_bytes()),
    )
}

/// Check signature, expiry and issuer, and return the claims.
pub fn validate_token(
    token: &str,
    config: &JwtConfig,
) -> Result<Claims, jsonwebtoken::errors::Error> {
    decode::<Claims>(
        token,
        &DecodingKey::from_secret(config.secret.as_bytes()),
        &JwtConfig::validation(),
    )
    .map(|data| data.claims)
}

/// A freshly minted refresh token.
#[derive(Debug)]
pub struct RefreshToken {
    /// Returned to the client, never stored.
    pub plaintext: String,
    /// Stored in `user_sessions.refresh_token_hash`.
    pub hash: String,
}

/// Mint a 256-bit refresh token.
pub fn generate_refresh_token() -> RefreshToken {
    let plaintext = format!("{}{}", Uuid::new_v4().simple(), Uuid::new_v4().simple());
    let hash = hash_refresh_token(&plaintext);
    RefreshToken { plaintext, hash }
}

pub fn hash_refresh_token(token: &str) -> String {
    format!("{:x}", Sha256::digest(token.as_bytes()))
}
