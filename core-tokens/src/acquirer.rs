//! Token Acquirer
//!
//! Produces fresh bearer tokens from the identity-provider client while
//! keeping user interruption to a minimum: every acquisition tries the
//! silent path first and falls back to the interactive flow only when the
//! silent path fails, whatever the cause.

use bridge_idp::IdentityClient;
use std::sync::Arc;
use tracing::{debug, warn};

use crate::error::Result;
use crate::types::ScopeSet;

/// Silent-first token acquisition against the external identity provider.
///
/// The silent failure cause is deliberately not inspected before falling
/// back; any failure there means "needs interaction". Callers that need
/// cause-specific handling of a terminal failure inspect the `IdpError`
/// carried by [`BrokerError::AcquisitionFailed`](crate::BrokerError).
#[derive(Clone)]
pub struct TokenAcquirer {
    client: Arc<dyn IdentityClient>,
}

impl TokenAcquirer {
    pub fn new(client: Arc<dyn IdentityClient>) -> Self {
        Self { client }
    }

    /// Acquire a fresh bearer token for `scopes`.
    ///
    /// One silent attempt, then at most one interactive attempt; no retries
    /// beyond that single fallback. The interactive flow suspends until the
    /// user completes or aborts it.
    ///
    /// # Errors
    ///
    /// [`BrokerError::AcquisitionFailed`](crate::BrokerError) when both
    /// paths fail, wrapping the interactive failure unchanged.
    pub async fn acquire(&self, scopes: &ScopeSet) -> Result<String> {
        match self.client.acquire_token_silent(scopes.as_slice()).await {
            Ok(result) => Ok(result.access_token),
            Err(silent_err) => {
                debug!(
                    error = %silent_err,
                    "silent acquisition failed, falling back to interactive flow"
                );
                let result = self
                    .client
                    .acquire_token_interactive(scopes.as_slice())
                    .await
                    .map_err(|interactive_err| {
                        warn!(error = %interactive_err, "interactive acquisition failed");
                        interactive_err
                    })?;
                Ok(result.access_token)
            }
        }
    }
}
