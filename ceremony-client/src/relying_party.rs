use std::fmt;

use serde::{Deserialize, Serialize};
use typeshare::typeshare;

#[cfg(feature = "reqwest")]
mod http;

#[cfg(feature = "reqwest")]
pub use http::HttpRelyingParty;

#[cfg(doc)]
use crate::Client;

/// The four ceremony endpoints a Relying Party exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    /// Issues the registration challenge bundle.
    RegistrationStart,
    /// Verifies the attestation and stores the credential.
    RegistrationFinish,
    /// Issues the authentication challenge.
    LoginStart,
    /// Verifies the assertion and establishes the session.
    LoginFinish,
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Endpoint::RegistrationStart => "registration-start",
            Endpoint::RegistrationFinish => "registration-finish",
            Endpoint::LoginStart => "login-start",
            Endpoint::LoginFinish => "login-finish",
        })
    }
}

/// Where each [`Endpoint`] lives, relative to the Relying Party's base url.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Endpoints {
    /// Path of [`Endpoint::RegistrationStart`].
    pub registration_start: String,
    /// Path of [`Endpoint::RegistrationFinish`].
    pub registration_finish: String,
    /// Path of [`Endpoint::LoginStart`].
    pub login_start: String,
    /// Path of [`Endpoint::LoginFinish`].
    pub login_finish: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            registration_start: "/webauthn/register/start".into(),
            registration_finish: "/webauthn/register/finish".into(),
            login_start: "/webauthn/login/start".into(),
            login_finish: "/webauthn/login/finish".into(),
        }
    }
}

impl Endpoints {
    /// The configured path of `endpoint`.
    pub fn path(&self, endpoint: Endpoint) -> &str {
        match endpoint {
            Endpoint::RegistrationStart => &self.registration_start,
            Endpoint::RegistrationFinish => &self.registration_finish,
            Endpoint::LoginStart => &self.login_start,
            Endpoint::LoginFinish => &self.login_finish,
        }
    }
}

/// What came back from a Relying Party endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    /// The http status code.
    pub status: u16,
    /// The raw response body.
    pub body: Vec<u8>,
}

impl Response {
    /// Whether the status is in the `2xx` range.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Failures talking to the Relying Party.
#[typeshare]
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(tag = "type", content = "content")]
pub enum TransportError {
    /// The request never got a response.
    Unreachable(String),
    /// The server answered with a non-success status.
    Status(u16),
    /// The server answered with a body that does not match the expected shape.
    MalformedBody(String),
}

impl fmt::Display for TransportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransportError::Unreachable(reason) => {
                write!(f, "the relying party could not be reached: {reason}")
            }
            TransportError::Status(status) => {
                write!(f, "the relying party responded with status {status}")
            }
            TransportError::MalformedBody(reason) => {
                write!(f, "the relying party sent an unexpected body: {reason}")
            }
        }
    }
}

impl std::error::Error for TransportError {}

/// Pluggable trait for the [`Client`] to reach the Relying Party.
///
/// Every ceremony call is a `POST`. A `Some` body must be sent as JSON with the
/// `application/json` content type, a `None` body means an empty request. Cookies set by a start
/// endpoint must be sent back to the matching finish endpoint, since that is how the Relying
/// Party finds the challenge it issued.
#[cfg_attr(any(test, feature = "testable"), mockall::automock)]
#[cfg_attr(target_arch = "wasm32", async_trait::async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait::async_trait)]
pub trait RelyingParty {
    /// Post to `endpoint`. Any response, successful or not, is an `Ok`. Only a failure to get a
    /// response at all is an `Err`.
    async fn post(
        &self,
        endpoint: Endpoint,
        body: Option<serde_json::Value>,
    ) -> Result<Response, TransportError>;
}
