//! Identity-Provider Client Abstraction
//!
//! Async acquisition seam implemented by host adapters on top of a concrete
//! provider SDK (MSAL-style public client applications and the like).

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::Result;

/// Account metadata returned by the provider on a successful flow.
///
/// `username` carries the account's email address for OIDC providers.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountInfo {
    /// Display name of the account
    pub name: String,
    /// Login identifier, typically the email address
    pub username: String,
    /// Raw OIDC id token for the account
    pub id_token: String,
}

// The id token is a credential; keep it out of logs.
impl fmt::Debug for AccountInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AccountInfo")
            .field("name", &self.name)
            .field("username", &self.username)
            .field("id_token", &"[REDACTED]")
            .finish()
    }
}

/// Outcome of a successful token acquisition.
///
/// `account` is present when the provider established or confirmed a session
/// as part of the flow (always the case for interactive logins).
#[derive(Clone)]
pub struct AuthenticationResult {
    /// The bearer access token for the requested scopes
    pub access_token: String,
    /// The account the token was issued for, when the provider reports it
    pub account: Option<AccountInfo>,
}

impl fmt::Debug for AuthenticationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthenticationResult")
            .field("access_token", &"[REDACTED]")
            .field("account", &self.account)
            .finish()
    }
}

/// External identity-provider client.
///
/// Implementations own the provider session state (accounts, refresh
/// mechanisms, redirect handling). Both acquisition paths suspend the caller
/// until the provider responds; neither applies a timeout of its own, so
/// hosts needing one must impose it externally.
///
/// # Example
///
/// ```ignore
/// use bridge_idp::{AuthenticationResult, IdentityClient, Result};
/// use async_trait::async_trait;
///
/// pub struct MsalClient { /* provider SDK handle */ }
///
/// #[async_trait]
/// impl IdentityClient for MsalClient {
///     async fn acquire_token_silent(&self, scopes: &[String]) -> Result<AuthenticationResult> {
///         // delegate to the SDK's silent path
///         todo!()
///     }
///
///     async fn acquire_token_interactive(&self, scopes: &[String]) -> Result<AuthenticationResult> {
///         // open the provider's popup flow and block on completion
///         todo!()
///     }
///
///     async fn logout_interactive(&self) -> Result<()> {
///         todo!()
///     }
/// }
/// ```
#[async_trait]
pub trait IdentityClient: Send + Sync {
    /// Acquire a token for `scopes` without user interaction, relying on a
    /// previously established session or refresh mechanism.
    async fn acquire_token_silent(&self, scopes: &[String]) -> Result<AuthenticationResult>;

    /// Acquire a token for `scopes` through a user-facing flow (popup,
    /// system browser). Resolves once the user completes or aborts it.
    async fn acquire_token_interactive(&self, scopes: &[String]) -> Result<AuthenticationResult>;

    /// End the provider session through the user-facing logout flow.
    async fn logout_interactive(&self) -> Result<()>;
}
