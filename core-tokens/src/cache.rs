//! Token Cache
//!
//! Serves a valid bearer token per requested scope set with as few
//! acquisition calls as possible, while staying consistent with the shared
//! authentication state. Entries are whole token strings exactly as the
//! acquirer returned them; their expiration is re-decoded from the token's
//! own claims on every lookup rather than tracked separately.

use bridge_idp::Clock;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::debug;

use crate::acquirer::TokenAcquirer;
use crate::claims;
use crate::context::AuthStateHandle;
use crate::error::Result;
use crate::types::{CacheKey, ScopeSet};

/// Scope-keyed cache of bearer tokens for one authentication session.
///
/// Owned by the [`AuthContext`](crate::AuthContext); the mapping, the
/// authentication-state handle, and the clock are injected at construction
/// time, so there is no process-wide singleton.
///
/// ## Concurrency
///
/// The map lock is never held across an acquisition await, so entries stay
/// atomic per key while unrelated work proceeds. Concurrent `get_token`
/// calls for the *same* key are not deduplicated: each may observe a miss
/// and acquire independently, and the last result written wins. A single
/// in-flight acquisition per key would be the stronger design; this cache
/// keeps the simpler historical behavior.
pub struct TokenCache {
    acquirer: TokenAcquirer,
    auth_state: AuthStateHandle,
    clock: Arc<dyn Clock>,
    entries: Mutex<HashMap<CacheKey, String>>,
}

impl TokenCache {
    pub fn new(acquirer: TokenAcquirer, auth_state: AuthStateHandle, clock: Arc<dyn Clock>) -> Self {
        Self {
            acquirer,
            auth_state,
            clock,
            entries: Mutex::new(HashMap::new()),
        }
    }

    /// Return a currently-valid bearer token for `scopes`.
    ///
    /// While the session is unauthenticated, any entry under the key is
    /// evicted first (checked on every call, not only on the state
    /// transition) so a stale token is never served. A cache miss or an
    /// expired entry delegates to the acquirer and stores the fresh token;
    /// an unexpired entry is returned as-is with zero acquisition calls.
    ///
    /// # Errors
    ///
    /// - [`BrokerError::MalformedToken`](crate::BrokerError) when a cached
    ///   token has no decodable expiration claim; propagated, never treated
    ///   as expired or valid.
    /// - [`BrokerError::AcquisitionFailed`](crate::BrokerError) when
    ///   re-acquisition fails on both provider paths.
    pub async fn get_token(&self, scopes: &ScopeSet) -> Result<String> {
        let key = scopes.cache_key();

        if !self.auth_state.is_authenticated().await {
            let mut entries = self.entries.lock().await;
            if entries.remove(&key).is_some() {
                debug!(key = %key, "evicted cached token for unauthenticated session");
            }
        }

        let cached = self.entries.lock().await.get(&key).cloned();

        let token = match cached {
            None => self.fetch_token(&key, scopes).await?,
            Some(token) => {
                if claims::is_token_expired(&token, self.clock.as_ref())? {
                    debug!(key = %key, "cached token expired, re-acquiring");
                    self.fetch_token(&key, scopes).await?
                } else {
                    token
                }
            }
        };

        Ok(token)
    }

    /// Discard every entry. Called when the owning context tears the
    /// session down (logout).
    pub async fn clear(&self) {
        let mut entries = self.entries.lock().await;
        if !entries.is_empty() {
            debug!(entries = entries.len(), "clearing token cache");
            entries.clear();
        }
    }

    // Acquire and store under `key`. Last write wins when callers race on
    // the same key.
    async fn fetch_token(&self, key: &CacheKey, scopes: &ScopeSet) -> Result<String> {
        let token = self.acquirer.acquire(scopes).await?;
        self.entries
            .lock()
            .await
            .insert(key.clone(), token.clone());
        Ok(token)
    }
}
