use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Token payload: subject (user id), issued-at, expiry, plus a per-issuance
/// token id so two tokens minted in the same second are still distinct strings.
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub iat: i64,
    pub exp: i64,
    pub jti: String,
}

impl Claims {
    pub fn new(user_id: Uuid, expiry_hours: i64) -> Self {
        let now = Utc::now();
        Self {
            sub: user_id.to_string(),
            iat: now.timestamp(),
            exp: (now + Duration::hours(expiry_hours)).timestamp(),
            jti: Uuid::new_v4().to_string(),
        }
    }
}

#[derive(Debug, Error)]
pub enum TokenError {
    #[error("JWT secret is not configured")]
    MissingSecret,

    #[error("failed to sign token: {0}")]
    Signing(String),

    /// Expired, malformed and bad-signature tokens all collapse into this
    /// variant; callers must not be able to tell them apart.
    #[error("invalid or expired token")]
    Invalid,
}

/// Issues and verifies HS256 bearer tokens. The secret and lifetime are
/// injected at construction so tests can run with distinct secrets.
#[derive(Clone)]
pub struct TokenService {
    secret: String,
    expiry_hours: i64,
}

impl TokenService {
    pub fn new(secret: impl Into<String>, expiry_hours: i64) -> Self {
        Self {
            secret: secret.into(),
            expiry_hours,
        }
    }

    /// Mint a signed token for a user id, valid for the configured lifetime.
    pub fn issue(&self, user_id: Uuid) -> Result<String, TokenError> {
        if self.secret.is_empty() {
            return Err(TokenError::MissingSecret);
        }

        let claims = Claims::new(user_id, self.expiry_hours);
        let encoding_key = EncodingKey::from_secret(self.secret.as_bytes());

        encode(&Header::default(), &claims, &encoding_key)
            .map_err(|e| TokenError::Signing(e.to_string()))
    }

    /// Decode a token, checking signature and expiry.
    pub fn verify(&self, token: &str) -> Result<Claims, TokenError> {
        if self.secret.is_empty() {
            return Err(TokenError::MissingSecret);
        }

        let decoding_key = DecodingKey::from_secret(self.secret.as_bytes());
        let validation = Validation::default();

        let token_data = decode::<Claims>(token, &decoding_key, &validation).map_err(|e| {
            tracing::debug!("token rejected: {}", e);
            TokenError::Invalid
        })?;

        Ok(token_data.claims)
    }
}
