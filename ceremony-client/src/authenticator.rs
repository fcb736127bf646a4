use std::fmt;

use ceremony_types::webauthn::{
    AuthenticatedPublicKeyCredential, CreatedPublicKeyCredential, CredentialCreationOptions,
    CredentialRequestOptions,
};
use typeshare::typeshare;

#[cfg(doc)]
use crate::Client;

/// The ways a platform authenticator can turn a ceremony down.
///
/// The variants follow the `DOMException` names a browser's credential container rejects with, so
/// a bridge to `navigator.credentials` can map them one to one.
#[typeshare]
#[derive(Debug, Clone, serde::Serialize, PartialEq, Eq)]
#[serde(tag = "type", content = "content")]
pub enum CeremonyError {
    /// The user dismissed the prompt, or the platform refused the operation (`NotAllowedError`).
    NotAllowed,
    /// The ceremony timeout elapsed before the user completed it.
    Timeout,
    /// The authenticator already holds a credential for this account (`InvalidStateError`).
    InvalidState,
    /// None of the requested algorithms or options are supported (`NotSupportedError`).
    NotSupported,
    /// The relying party id does not match the current origin (`SecurityError`).
    Security,
    /// The operation was aborted by the platform (`AbortError`).
    Aborted,
    /// Any other failure, described by the platform.
    Other(String),
}

impl fmt::Display for CeremonyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CeremonyError::NotAllowed => f.write_str("the request was cancelled or not allowed"),
            CeremonyError::Timeout => f.write_str("the request timed out"),
            CeremonyError::InvalidState => {
                f.write_str("this authenticator is already registered for the account")
            }
            CeremonyError::NotSupported => {
                f.write_str("the authenticator does not support the requested options")
            }
            CeremonyError::Security => f.write_str("the request is not valid for this origin"),
            CeremonyError::Aborted => f.write_str("the request was aborted"),
            CeremonyError::Other(reason) => write!(f, "the authenticator failed: {reason}"),
        }
    }
}

impl std::error::Error for CeremonyError {}

/// Pluggable trait for the [`Client`] to reach the platform authenticator, for example a bridge
/// to `navigator.credentials` or a native passkey provider.
///
/// Both operations may suspend for as long as the user needs to answer the prompt. They are only
/// cancelled by the platform itself, which must surface as a [`CeremonyError`]. Implementations
/// enforce the `timeout` carried in the options.
#[cfg_attr(any(test, feature = "testable"), mockall::automock)]
#[cfg_attr(target_arch = "wasm32", async_trait::async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait::async_trait)]
pub trait Authenticator {
    /// Create a new credential, `navigator.credentials.create()`.
    async fn create(
        &self,
        options: CredentialCreationOptions,
    ) -> Result<CreatedPublicKeyCredential, CeremonyError>;

    /// Produce an assertion with an existing credential, `navigator.credentials.get()`.
    async fn get(
        &self,
        options: CredentialRequestOptions,
    ) -> Result<AuthenticatedPublicKeyCredential, CeremonyError>;
}
