//! # Access-Token Brokering Core
//!
//! Acquires and caches OAuth2/OIDC bearer tokens for downstream API calls.
//!
//! ## Overview
//!
//! Callers ask for a token covering an ordered set of permission scopes and
//! get back a currently-valid bearer token. A scope-keyed cache serves
//! unexpired tokens with zero provider round-trips; on a miss, an expired
//! entry, or an unauthenticated session the core re-acquires through the
//! external identity-provider client, preferring the silent path and falling
//! back to an interactive flow only when silent acquisition fails.
//!
//! ## Components
//!
//! - [`claims`] - expiration-claim decoding for self-describing bearer tokens
//! - [`acquirer`] - silent-first acquisition against the provider client
//! - [`cache`] - scope-keyed token cache consistent with authentication state
//! - [`context`] - authentication context owning the cache and session state
//!
//! ## Usage
//!
//! ```ignore
//! use core_tokens::{AuthContext, ScopeSet};
//! use std::sync::Arc;
//!
//! # async fn example(client: Arc<dyn bridge_idp::IdentityClient>) -> core_tokens::Result<()> {
//! let context = AuthContext::new(client);
//! context.login_with_popup().await?;
//!
//! let scopes = ScopeSet::from(vec!["https://storage.example.net/user_impersonation".to_string()]);
//! let token = context.acquire_access_token(&scopes).await?;
//! // Authorization: Bearer <token>
//! # Ok(())
//! # }
//! ```

pub mod acquirer;
pub mod cache;
pub mod claims;
pub mod context;
pub mod error;
pub mod types;

#[cfg(test)]
pub(crate) mod testing;

pub use acquirer::TokenAcquirer;
pub use cache::TokenCache;
pub use claims::{is_token_expired, token_expiration_claim};
pub use context::{AuthContext, AuthStateHandle, LOGIN_SCOPES};
pub use error::{BrokerError, Result};
pub use types::{CacheKey, ScopeSet, UserProfile};
