use bridge_idp::AccountInfo;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Prefix shared by every cache key, separating token entries from anything
/// else a host might co-locate in the same namespace.
const SCOPE_KEY_PREFIX: &str = "scopes:";

/// An ordered sequence of permission scopes as requested by a caller.
///
/// Order matters: two requests carrying the same scopes in a different order
/// produce different [`CacheKey`]s and therefore different cache entries.
/// Scopes are not normalized or deduplicated either. This mirrors how the
/// cache has always behaved and keeps its externally observable hit/miss
/// pattern stable; see `cache_key`.
///
/// # Examples
///
/// ```
/// use core_tokens::ScopeSet;
///
/// let scopes = ScopeSet::from(vec!["openid".to_string(), "email".to_string()]);
/// assert_eq!(scopes.as_slice(), ["openid", "email"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ScopeSet(Vec<String>);

impl ScopeSet {
    pub fn new(scopes: Vec<String>) -> Self {
        Self(scopes)
    }

    /// The scopes in request order, as passed to the provider client.
    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Derive the cache key for this scope set: the constant prefix followed
    /// by every scope concatenated in sequence order.
    ///
    /// Identical sequences map to identical keys; this is *not* a
    /// set-equality key, so `["a","b"]` and `["b","a"]` cache independently.
    ///
    /// # Examples
    ///
    /// ```
    /// use core_tokens::ScopeSet;
    ///
    /// let ab = ScopeSet::from(vec!["a".to_string(), "b".to_string()]);
    /// let ba = ScopeSet::from(vec!["b".to_string(), "a".to_string()]);
    /// assert_ne!(ab.cache_key(), ba.cache_key());
    /// ```
    pub fn cache_key(&self) -> CacheKey {
        let mut key = String::from(SCOPE_KEY_PREFIX);
        for scope in &self.0 {
            key.push_str(scope);
        }
        CacheKey(key)
    }
}

impl From<Vec<String>> for ScopeSet {
    fn from(scopes: Vec<String>) -> Self {
        Self(scopes)
    }
}

impl From<&[&str]> for ScopeSet {
    fn from(scopes: &[&str]) -> Self {
        Self(scopes.iter().map(|s| s.to_string()).collect())
    }
}

impl FromIterator<String> for ScopeSet {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Deterministic cache key derived from a [`ScopeSet`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey(String);

impl CacheKey {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Profile of the signed-in user, derived from the account the identity
/// provider reported on login.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub name: String,
    pub email: String,
    pub id_token: String,
}

// Keep the id token out of logs.
impl fmt::Debug for UserProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UserProfile")
            .field("name", &self.name)
            .field("email", &self.email)
            .field("id_token", &"[REDACTED]")
            .finish()
    }
}

impl From<AccountInfo> for UserProfile {
    fn from(account: AccountInfo) -> Self {
        Self {
            name: account.name,
            email: account.username,
            id_token: account.id_token,
        }
    }
}
