use thiserror::Error;

/// Failures reported by an identity-provider client adapter.
///
/// The brokering core does not branch on these variants when falling back
/// from silent to interactive acquisition; they exist so callers that
/// receive a terminal acquisition failure can inspect the underlying cause.
#[derive(Error, Debug)]
pub enum IdpError {
    /// The provider requires user interaction to satisfy the request
    /// (expired session, consent prompt, conditional access, ...).
    #[error("interaction required: {0}")]
    InteractionRequired(String),

    /// The user dismissed or aborted an interactive flow.
    #[error("user cancelled the interactive flow")]
    UserCancelled,

    /// No established session exists for silent acquisition.
    #[error("no signed-in account")]
    NotSignedIn,

    /// The provider could not be reached or returned an unexpected failure.
    #[error("identity provider unavailable: {0}")]
    ProviderUnavailable(String),
}

pub type Result<T> = std::result::Result<T, IdpError>;
