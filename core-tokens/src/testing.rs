//! Shared test doubles: a scripted identity-provider client and a manually
//! advanced clock.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use bridge_idp::{AccountInfo, AuthenticationResult, Clock, IdentityClient, IdpError};
use chrono::{DateTime, TimeZone, Utc};
use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

/// Build a three-segment bearer token whose claims carry the given `exp`.
pub(crate) fn bearer_token(exp: i64) -> String {
    let claims = URL_SAFE_NO_PAD.encode(format!(r#"{{"exp":{exp}}}"#));
    format!("header.{claims}.signature")
}

pub(crate) fn account(name: &str) -> AccountInfo {
    AccountInfo {
        name: name.to_string(),
        username: format!("{}@example.com", name.to_lowercase()),
        id_token: "id-token".to_string(),
    }
}

/// Clock pinned to a Unix timestamp, advanced explicitly by tests.
pub(crate) struct ManualClock {
    now: Mutex<DateTime<Utc>>,
}

impl ManualClock {
    pub(crate) fn at(unix_seconds: i64) -> Self {
        Self {
            now: Mutex::new(Utc.timestamp_opt(unix_seconds, 0).unwrap()),
        }
    }

    pub(crate) fn advance_secs(&self, seconds: i64) {
        let mut now = self.now.lock().unwrap();
        *now += chrono::Duration::seconds(seconds);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        *self.now.lock().unwrap()
    }
}

/// Identity-provider client driven by scripted per-path response queues.
///
/// Every call pops the next scripted result for its path; an exhausted queue
/// fails the call, so a test that scripts exactly the acquisitions it
/// expects also catches surplus ones through the returned error, not just
/// through the counters.
#[derive(Default)]
pub(crate) struct FakeIdentityClient {
    silent_responses: Mutex<VecDeque<bridge_idp::Result<AuthenticationResult>>>,
    interactive_responses: Mutex<VecDeque<bridge_idp::Result<AuthenticationResult>>>,
    pub(crate) silent_calls: AtomicUsize,
    pub(crate) interactive_calls: AtomicUsize,
    pub(crate) logout_calls: AtomicUsize,
}

impl FakeIdentityClient {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn script_silent(&self, result: bridge_idp::Result<AuthenticationResult>) {
        self.silent_responses.lock().unwrap().push_back(result);
    }

    pub(crate) fn script_interactive(&self, result: bridge_idp::Result<AuthenticationResult>) {
        self.interactive_responses.lock().unwrap().push_back(result);
    }

    pub(crate) fn script_silent_token(&self, token: &str) {
        self.script_silent(Ok(AuthenticationResult {
            access_token: token.to_string(),
            account: None,
        }));
    }

    pub(crate) fn script_interactive_token(&self, token: &str) {
        self.script_interactive(Ok(AuthenticationResult {
            access_token: token.to_string(),
            account: Some(account("Ada")),
        }));
    }

    pub(crate) fn acquisitions(&self) -> usize {
        self.silent_calls.load(Ordering::SeqCst) + self.interactive_calls.load(Ordering::SeqCst)
    }
}

#[async_trait::async_trait]
impl IdentityClient for FakeIdentityClient {
    async fn acquire_token_silent(
        &self,
        _scopes: &[String],
    ) -> bridge_idp::Result<AuthenticationResult> {
        self.silent_calls.fetch_add(1, Ordering::SeqCst);
        self.silent_responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| {
                Err(IdpError::ProviderUnavailable(
                    "no scripted silent response".to_string(),
                ))
            })
    }

    async fn acquire_token_interactive(
        &self,
        _scopes: &[String],
    ) -> bridge_idp::Result<AuthenticationResult> {
        self.interactive_calls.fetch_add(1, Ordering::SeqCst);
        self.interactive_responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| {
                Err(IdpError::ProviderUnavailable(
                    "no scripted interactive response".to_string(),
                ))
            })
    }

    async fn logout_interactive(&self) -> bridge_idp::Result<()> {
        self.logout_calls.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}
