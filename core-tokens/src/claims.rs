//! Expiration-Claim Decoding
//!
//! Bearer tokens issued by the provider are self-describing: three
//! period-delimited segments, the middle one base64 JSON carrying an `exp`
//! claim in Unix seconds. Expiration is never tracked separately from the
//! token; it is re-decoded here on every validity check.

use base64::engine::general_purpose::{STANDARD, URL_SAFE_NO_PAD};
use base64::Engine;
use bridge_idp::Clock;
use serde::Deserialize;

use crate::error::{BrokerError, Result};

/// The subset of registered claims the broker cares about.
#[derive(Debug, Deserialize)]
struct Claims {
    /// Expiration instant, Unix seconds
    exp: i64,
}

/// Decode the `exp` claim (Unix seconds) from a bearer token.
///
/// Downstream credential adapters use this for their own expiry contract,
/// e.g. a table-storage client that must report an expiration instant next
/// to every credential it presents.
///
/// Tokens are decoded with the base64url alphabet first (the JWT encoding),
/// falling back to padded standard base64 for providers that emit it.
///
/// # Errors
///
/// Fails with [`BrokerError::MalformedToken`] when the claims segment is
/// absent, not valid base64, not JSON, or missing an integer `exp`. The
/// failure is propagated as-is; a token that cannot describe its own
/// expiration is never treated as valid or as expired.
///
/// # Examples
///
/// ```
/// use base64::engine::general_purpose::URL_SAFE_NO_PAD;
/// use base64::Engine;
/// use core_tokens::token_expiration_claim;
///
/// let claims = URL_SAFE_NO_PAD.encode(br#"{"exp":1700000000}"#);
/// let token = format!("header.{claims}.signature");
/// assert_eq!(token_expiration_claim(&token).unwrap(), 1_700_000_000);
///
/// assert!(token_expiration_claim("no-separator").is_err());
/// ```
pub fn token_expiration_claim(token: &str) -> Result<i64> {
    let mut segments = token.split('.');
    let claims_segment = segments
        .nth(1)
        .ok_or_else(|| BrokerError::malformed("missing claims segment"))?;

    let decoded = URL_SAFE_NO_PAD
        .decode(claims_segment)
        .or_else(|_| STANDARD.decode(claims_segment))
        .map_err(|e| BrokerError::malformed(format!("claims segment is not base64: {e}")))?;

    let claims: Claims = serde_json::from_slice(&decoded)
        .map_err(|e| BrokerError::malformed(format!("claims are not valid JSON with exp: {e}")))?;

    Ok(claims.exp)
}

/// Whether `token` has reached its expiration instant according to `clock`.
///
/// The comparison is inclusive: a token whose `exp` equals the current
/// second counts as expired.
///
/// # Errors
///
/// Propagates [`BrokerError::MalformedToken`] from claim decoding.
pub fn is_token_expired(token: &str, clock: &dyn Clock) -> Result<bool> {
    let expires_at = token_expiration_claim(token)?;
    Ok(clock.unix_timestamp() >= expires_at)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{bearer_token, ManualClock};

    #[test]
    fn decodes_exp_from_url_safe_claims() {
        let token = bearer_token(1_700_000_000);
        assert_eq!(token_expiration_claim(&token).unwrap(), 1_700_000_000);
    }

    #[test]
    fn accepts_padded_standard_base64_claims() {
        // 11-byte payload forces padding under the standard alphabet
        let claims = STANDARD.encode(br#"{"exp": 42}"#);
        assert!(claims.ends_with('='));
        let token = format!("header.{claims}.signature");
        assert_eq!(token_expiration_claim(&token).unwrap(), 42);
    }

    #[test]
    fn token_without_separator_is_malformed() {
        let err = token_expiration_claim("opaque-token").unwrap_err();
        assert!(matches!(err, BrokerError::MalformedToken { .. }));
    }

    #[test]
    fn empty_claims_segment_is_malformed() {
        let err = token_expiration_claim("header..signature").unwrap_err();
        assert!(matches!(err, BrokerError::MalformedToken { .. }));
    }

    #[test]
    fn non_base64_claims_segment_is_malformed() {
        let err = token_expiration_claim("header.!!!.signature").unwrap_err();
        assert!(matches!(err, BrokerError::MalformedToken { .. }));
    }

    #[test]
    fn claims_without_exp_are_malformed() {
        let claims = URL_SAFE_NO_PAD.encode(br#"{"sub":"ada"}"#);
        let token = format!("header.{claims}.signature");
        let err = token_expiration_claim(&token).unwrap_err();
        assert!(matches!(err, BrokerError::MalformedToken { .. }));
    }

    #[test]
    fn expiry_comparison_is_inclusive() {
        let clock = ManualClock::at(1_000);
        assert!(is_token_expired(&bearer_token(999), &clock).unwrap());
        assert!(is_token_expired(&bearer_token(1_000), &clock).unwrap());
        assert!(!is_token_expired(&bearer_token(1_001), &clock).unwrap());
    }
}
