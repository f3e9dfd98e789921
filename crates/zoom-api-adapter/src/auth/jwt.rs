/*
[INPUT]:  API key and API secret
[OUTPUT]: HS256-signed JWT credentials valid for one hour
[POS]:    Auth layer - production token signer
[UPDATE]: When the vendor changes claim requirements or token lifetime
*/

use std::fmt;

use chrono::{Duration, Utc};
use jsonwebtoken::{Algorithm, EncodingKey, Header, encode};
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::signer::{Credential, SigningError, TokenSigner};

/// Lifetime of every signed token
pub const TOKEN_TTL_SECONDS: i64 = 60 * 60;

/// JWT claims set sent to the API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Issuer: the API key
    pub iss: String,
    /// Expiration as a unix timestamp
    pub exp: i64,
}

/// Signs bearer tokens from an API key/secret pair
#[derive(Clone)]
pub struct JwtSigner {
    api_key: String,
    api_secret: String,
}

impl JwtSigner {
    pub fn new(api_key: impl Into<String>, api_secret: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            api_secret: api_secret.into(),
        }
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }
}

// Keep the secret out of logs
impl fmt::Debug for JwtSigner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JwtSigner")
            .field("api_key", &self.api_key)
            .field("api_secret", &"<redacted>")
            .finish()
    }
}

impl TokenSigner for JwtSigner {
    fn sign(&self) -> Result<Credential, SigningError> {
        if self.api_key.is_empty() {
            return Err(SigningError::EmptyKey);
        }
        if self.api_secret.is_empty() {
            return Err(SigningError::EmptySecret);
        }

        let issued_at = Utc::now();
        let ttl = Duration::seconds(TOKEN_TTL_SECONDS);
        let claims = Claims {
            iss: self.api_key.clone(),
            exp: (issued_at + ttl).timestamp(),
        };

        let token = encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(self.api_secret.as_bytes()),
        )?;
        debug!(issuer = %self.api_key, exp = claims.exp, "signed new API token");

        Ok(Credential::new(token, issued_at, ttl))
    }
}
