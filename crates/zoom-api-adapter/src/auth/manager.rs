/*
[INPUT]:  A token signer and the pipeline's token requests
[OUTPUT]: The single live bearer credential, refreshed on demand
[POS]:    Auth layer - credential ownership and refresh coordination
[UPDATE]: When changing refresh policy or credential storage
*/

use std::sync::{Arc, Mutex, MutexGuard};

use chrono::Duration;
use tracing::{debug, warn};

use super::signer::{Credential, SigningError, TokenSigner};

/// Tokens this close to expiry are re-signed before use
const EXPIRY_LEEWAY_SECONDS: i64 = 60;

/// Token handed to the pipeline, tagged with the credential generation it came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssuedToken {
    pub token: String,
    pub generation: u64,
}

#[derive(Debug, Default)]
struct TokenState {
    credential: Option<Credential>,
    generation: u64,
}

impl TokenState {
    fn issued(&self) -> Option<IssuedToken> {
        self.credential.as_ref().map(|c| IssuedToken {
            token: c.token.clone(),
            generation: self.generation,
        })
    }

    fn replace(&mut self, credential: Credential) -> IssuedToken {
        self.generation += 1;
        let issued = IssuedToken {
            token: credential.token.clone(),
            generation: self.generation,
        };
        self.credential = Some(credential);
        issued
    }
}

/// Owns the client's credential.
///
/// Clones share the same credential. Every read-sign-write runs under one
/// lock, so concurrent callers never sign twice for the same stale token.
#[derive(Debug, Clone)]
pub struct AuthManager {
    signer: Arc<dyn TokenSigner>,
    state: Arc<Mutex<TokenState>>,
}

impl AuthManager {
    pub fn new(signer: Arc<dyn TokenSigner>) -> Self {
        Self {
            signer,
            state: Arc::new(Mutex::new(TokenState::default())),
        }
    }

    fn lock(&self) -> MutexGuard<'_, TokenState> {
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Return the live token, signing one first if none is held or it has expired
    pub fn ensure_token(&self) -> Result<IssuedToken, SigningError> {
        let mut state = self.lock();
        let leeway = Duration::seconds(EXPIRY_LEEWAY_SECONDS);
        let usable = state
            .credential
            .as_ref()
            .is_some_and(|c| !c.token.is_empty() && !c.expires_within(leeway));

        if usable {
            if let Some(issued) = state.issued() {
                return Ok(issued);
            }
        }

        debug!(generation = state.generation, "acquiring API token");
        let credential = self.sign_non_empty()?;
        Ok(state.replace(credential))
    }

    /// Replace the token the server rejected.
    ///
    /// Signs only if `stale_generation` is still current; a caller that lost
    /// the race gets the token another caller already refreshed.
    pub fn refresh(&self, stale_generation: u64) -> Result<IssuedToken, SigningError> {
        let mut state = self.lock();
        if state.generation != stale_generation {
            if let Some(issued) = state.issued() {
                debug!(
                    stale_generation,
                    generation = state.generation,
                    "token already refreshed"
                );
                return Ok(issued);
            }
        }

        warn!(generation = stale_generation, "refreshing rejected API token");
        let credential = self.sign_non_empty()?;
        Ok(state.replace(credential))
    }

    fn sign_non_empty(&self) -> Result<Credential, SigningError> {
        let credential = self.signer.sign()?;
        if credential.token.is_empty() {
            return Err(SigningError::Rejected("signer returned an empty token".to_string()));
        }
        Ok(credential)
    }

    /// Snapshot of the stored credential
    pub fn credential(&self) -> Option<Credential> {
        self.lock().credential.clone()
    }

    /// Check if no usable credential is held
    pub fn is_expired(&self) -> bool {
        self.lock().credential.as_ref().is_none_or(Credential::is_expired)
    }

    /// Drop the stored credential; the next call signs a new one
    pub fn clear(&self) {
        self.lock().credential = None;
    }
}
