//! Authentication Context
//!
//! Owns the per-session pieces the broker needs: the shared authentication
//! state, the token cache, and the identity-provider client handle. One
//! context per authentication session; tearing it down (logout) discards the
//! whole cache.
//!
//! The context does not own session-event wiring. Hosts that listen to
//! provider events (login succeeded, logout succeeded, account changed)
//! drive the state through the explicit transition functions
//! [`AuthContext::handle_login_success`] and [`AuthContext::handle_logout`];
//! the cache only ever observes the resulting state.

use bridge_idp::{AccountInfo, Clock, IdentityClient, SystemClock};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, info};

use crate::acquirer::TokenAcquirer;
use crate::cache::TokenCache;
use crate::error::{BrokerError, Result};
use crate::types::{ScopeSet, UserProfile};

/// Scopes requested by the interactive login flow.
pub const LOGIN_SCOPES: &[&str] = &["openid", "email", "offline_access"];

#[derive(Debug, Default)]
struct SessionState {
    authenticated: bool,
    user: Option<UserProfile>,
}

/// Cloneable read/transition handle on the shared authentication state.
///
/// The boolean flag is re-read by the cache on every lookup; transitions
/// happen only through the explicit functions below.
#[derive(Clone, Default)]
pub struct AuthStateHandle {
    inner: Arc<RwLock<SessionState>>,
}

impl AuthStateHandle {
    pub async fn is_authenticated(&self) -> bool {
        self.inner.read().await.authenticated
    }

    pub async fn user(&self) -> Option<UserProfile> {
        self.inner.read().await.user.clone()
    }

    /// Mark the session authenticated, recording the user profile when the
    /// provider reported an account.
    pub async fn transition_signed_in(&self, account: Option<AccountInfo>) {
        let mut state = self.inner.write().await;
        state.authenticated = true;
        state.user = account.map(UserProfile::from);
        debug!(has_profile = state.user.is_some(), "session signed in");
    }

    /// Mark the session unauthenticated and drop the user profile.
    pub async fn transition_signed_out(&self) {
        let mut state = self.inner.write().await;
        state.authenticated = false;
        state.user = None;
        debug!("session signed out");
    }
}

/// Per-session authentication context and composition root of the broker.
pub struct AuthContext {
    client: Arc<dyn IdentityClient>,
    state: AuthStateHandle,
    cache: TokenCache,
}

impl AuthContext {
    /// Create a context over the given provider client, using system time
    /// for expiry checks.
    pub fn new(client: Arc<dyn IdentityClient>) -> Self {
        Self::with_clock(client, Arc::new(SystemClock))
    }

    /// Create a context with an injected clock.
    pub fn with_clock(client: Arc<dyn IdentityClient>, clock: Arc<dyn Clock>) -> Self {
        let state = AuthStateHandle::default();
        let cache = TokenCache::new(
            TokenAcquirer::new(client.clone()),
            state.clone(),
            clock,
        );
        Self {
            client,
            state,
            cache,
        }
    }

    /// Sign in through the provider's interactive flow with the fixed
    /// [`LOGIN_SCOPES`], then apply the signed-in transition.
    ///
    /// # Errors
    ///
    /// [`BrokerError::AcquisitionFailed`] when the interactive flow fails;
    /// the session state is left unchanged in that case.
    pub async fn login_with_popup(&self) -> Result<()> {
        let scopes: Vec<String> = LOGIN_SCOPES.iter().map(|s| s.to_string()).collect();
        let result = self.client.acquire_token_interactive(&scopes).await?;
        info!("interactive login succeeded");
        self.state.transition_signed_in(result.account).await;
        Ok(())
    }

    /// Sign out through the provider's interactive flow, then apply the
    /// signed-out transition and discard the token cache.
    pub async fn logout_with_popup(&self) -> Result<()> {
        self.client
            .logout_interactive()
            .await
            .map_err(BrokerError::LogoutFailed)?;
        info!("interactive logout succeeded");
        self.handle_logout().await;
        Ok(())
    }

    /// Return a currently-valid bearer token for `scopes`, acquiring or
    /// refreshing through the provider only when the cache cannot serve the
    /// request. This is the brokering entry point for downstream API-client
    /// adapters.
    pub async fn acquire_access_token(&self, scopes: &ScopeSet) -> Result<String> {
        self.cache.get_token(scopes).await
    }

    /// Explicit signed-in transition for external session-event wiring.
    pub async fn handle_login_success(&self, account: AccountInfo) {
        self.state.transition_signed_in(Some(account)).await;
    }

    /// Explicit signed-out transition for external session-event wiring.
    /// Also tears the cache down: entries of an ended session are never
    /// reused.
    pub async fn handle_logout(&self) {
        self.state.transition_signed_out().await;
        self.cache.clear().await;
    }

    /// Handle on the shared authentication state, cloneable into host event
    /// wiring and UI observers.
    pub fn state(&self) -> AuthStateHandle {
        self.state.clone()
    }

    pub async fn is_authenticated(&self) -> bool {
        self.state.is_authenticated().await
    }

    pub async fn user(&self) -> Option<UserProfile> {
        self.state.user().await
    }
}
