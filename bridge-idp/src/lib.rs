//! # Identity-Provider Bridge Traits
//!
//! Boundary contracts between the token-brokering core and the external
//! identity-provider client that actually talks to the authority.
//!
//! ## Overview
//!
//! The brokering core never performs network I/O or drives user-facing
//! authentication flows itself. Both concerns live behind the
//! [`IdentityClient`](client::IdentityClient) trait, which a host adapter
//! implements on top of whatever provider SDK it uses. The core only decides
//! *when* to call which acquisition path and what to do with the result.
//!
//! ## Traits
//!
//! - [`IdentityClient`](client::IdentityClient) - silent and interactive
//!   token acquisition, interactive logout
//! - [`Clock`](time::Clock) - time source for deterministic expiry testing
//!
//! ## Error Handling
//!
//! All trait methods use [`IdpError`](error::IdpError). Adapters should map
//! provider-specific failures onto the closest variant and keep the message
//! actionable; the core treats any silent failure as "needs interaction"
//! without inspecting the cause.
//!
//! ## Thread Safety
//!
//! All traits require `Send + Sync` so implementations can be shared across
//! async tasks behind an `Arc`.

pub mod client;
pub mod error;
pub mod time;

pub use client::{AccountInfo, AuthenticationResult, IdentityClient};
pub use error::{IdpError, Result};
pub use time::{Clock, SystemClock};
