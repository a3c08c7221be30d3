use bridge_idp::IdpError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BrokerError {
    /// A bearer token did not contain a decodable claims segment. Never
    /// coerced to "expired" or "valid"; always surfaced to the caller.
    #[error("malformed bearer token: {reason}")]
    MalformedToken { reason: String },

    /// Both the silent and the interactive acquisition path failed. Carries
    /// the interactive failure; callers should treat this as "not
    /// authenticated right now" and may retry on a later call.
    #[error("token acquisition failed: {0}")]
    AcquisitionFailed(#[from] IdpError),

    /// The provider's interactive logout flow failed; the session state is
    /// left untouched.
    #[error("logout failed: {0}")]
    LogoutFailed(#[source] IdpError),
}

impl BrokerError {
    pub(crate) fn malformed(reason: impl Into<String>) -> Self {
        BrokerError::MalformedToken {
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, BrokerError>;
