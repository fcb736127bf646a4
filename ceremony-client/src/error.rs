use std::fmt;

use ceremony_types::wire::MalformedToken;
use typeshare::typeshare;

use crate::{authenticator::CeremonyError, relying_party::TransportError};

/// Which ceremony an [`Error`] happened in.
#[typeshare]
#[derive(Debug, Clone, Copy, serde::Serialize, PartialEq, Eq)]
pub enum Flow {
    /// Creating and enrolling a new credential.
    Registration,
    /// Signing in with an existing credential.
    Login,
}

impl fmt::Display for Flow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Flow::Registration => "registration",
            Flow::Login => "login",
        })
    }
}

/// The step of a ceremony that failed, and why.
#[typeshare]
#[derive(Debug, Clone, serde::Serialize, PartialEq, Eq)]
#[serde(tag = "type", content = "content")]
pub enum ErrorKind {
    /// The challenge could not be fetched from the start endpoint.
    Start(TransportError),
    /// The challenge bundle contained a malformed token.
    Decode(MalformedToken),
    /// The authenticator declined, timed out, or the user cancelled.
    Ceremony(CeremonyError),
    /// The finish endpoint did not accept the credential.
    Finish(TransportError),
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::Start(e) => write!(f, "fetching the challenge failed: {e}"),
            ErrorKind::Decode(e) => write!(f, "the challenge is malformed: {e}"),
            ErrorKind::Ceremony(e) => write!(f, "the authenticator did not complete: {e}"),
            ErrorKind::Finish(e) => write!(f, "submitting the credential failed: {e}"),
        }
    }
}

/// Ceremony failure. Every failure aborts the ceremony it occurred in, nothing is retried.
#[typeshare]
#[derive(Debug, Clone, serde::Serialize, PartialEq, Eq)]
pub struct Error {
    /// The ceremony that failed.
    pub flow: Flow,
    /// The failing step.
    pub kind: ErrorKind,
}

impl Error {
    pub(crate) fn new(flow: Flow, kind: ErrorKind) -> Self {
        Self { flow, kind }
    }

    /// A short message fit to show an end user. It never contains payload data.
    pub fn user_message(&self) -> &'static str {
        match (self.flow, &self.kind) {
            (Flow::Registration, ErrorKind::Start(_)) => "Registration failed to start.",
            (Flow::Login, ErrorKind::Start(_)) => "Login failed to start.",
            (_, ErrorKind::Decode(_)) => "The server sent an invalid challenge.",
            (_, ErrorKind::Ceremony(CeremonyError::NotAllowed | CeremonyError::Aborted)) => {
                "The request was cancelled."
            }
            (_, ErrorKind::Ceremony(CeremonyError::Timeout)) => "The request timed out.",
            (Flow::Registration, ErrorKind::Ceremony(CeremonyError::InvalidState)) => {
                "This device is already registered."
            }
            (Flow::Registration, ErrorKind::Ceremony(_)) => "Your device could not create a passkey.",
            (Flow::Login, ErrorKind::Ceremony(_)) => "Your device could not sign in.",
            (Flow::Registration, ErrorKind::Finish(_)) => "Registration failed.",
            (Flow::Login, ErrorKind::Finish(_)) => "Login failed.",
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} failed: {}", self.flow, self.kind)
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            ErrorKind::Start(e) | ErrorKind::Finish(e) => Some(e),
            ErrorKind::Decode(e) => Some(e),
            ErrorKind::Ceremony(e) => Some(e),
        }
    }
}
