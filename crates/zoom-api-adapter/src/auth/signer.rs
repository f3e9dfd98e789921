/*
[INPUT]:  Stored API key/secret (or a scripted token source in tests)
[OUTPUT]: Freshly signed bearer credentials
[POS]:    Auth layer - token signing abstraction
[UPDATE]: When adding new signer types or changing credential metadata
*/

use std::fmt::Debug;
use std::sync::atomic::{AtomicUsize, Ordering};

use chrono::{DateTime, Duration, Utc};
use thiserror::Error;

/// Bearer credential with its validity window
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credential {
    pub token: String,
    pub issued_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

impl Credential {
    pub fn new(token: String, issued_at: DateTime<Utc>, ttl: Duration) -> Self {
        Self {
            token,
            issued_at,
            expires_at: issued_at + ttl,
        }
    }

    /// True once `now + leeway` reaches the expiry
    pub fn expires_within(&self, leeway: Duration) -> bool {
        Utc::now() + leeway >= self.expires_at
    }

    pub fn is_expired(&self) -> bool {
        self.expires_within(Duration::zero())
    }
}

/// Failure to produce a signed token
#[derive(Error, Debug)]
pub enum SigningError {
    #[error("API key is empty")]
    EmptyKey,

    #[error("API secret is empty")]
    EmptySecret,

    #[error("JWT encoding failed: {0}")]
    Jwt(#[from] jsonwebtoken::errors::Error),

    #[error("{0}")]
    Rejected(String),
}

/// Produces bearer credentials on demand.
///
/// Signing is local CPU work, so the trait is synchronous; the auth manager
/// calls it while holding its credential lock.
pub trait TokenSigner: Send + Sync + Debug {
    fn sign(&self) -> Result<Credential, SigningError>;
}

/// Scripted signer for tests.
///
/// Issues `"{prefix}-1"`, `"{prefix}-2"`, ... and can be told to fail once a
/// number of tokens have been handed out.
#[derive(Debug)]
pub struct MockTokenSigner {
    prefix: String,
    fail_after: Option<usize>,
    calls: AtomicUsize,
}

impl MockTokenSigner {
    /// Create a signer that always succeeds
    pub fn new(prefix: &str) -> Self {
        Self {
            prefix: prefix.to_string(),
            fail_after: None,
            calls: AtomicUsize::new(0),
        }
    }

    /// Create a signer that succeeds `successes` times, then fails
    pub fn failing_after(prefix: &str, successes: usize) -> Self {
        Self {
            prefix: prefix.to_string(),
            fail_after: Some(successes),
            calls: AtomicUsize::new(0),
        }
    }

    /// Number of `sign` invocations so far, failed ones included
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl TokenSigner for MockTokenSigner {
    fn sign(&self) -> Result<Credential, SigningError> {
        let n = self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_after.is_some_and(|limit| n >= limit) {
            return Err(SigningError::Rejected(format!(
                "mock signer exhausted after {n} tokens"
            )));
        }
        Ok(Credential::new(
            format!("{}-{}", self.prefix, n + 1),
            Utc::now(),
            Duration::hours(1),
        ))
    }
}
