//! # Ceremony Client
//!
//! This crate defines a [`Client`] that drives the two webauthn ceremonies a browser-side login
//! page runs against its Relying Party: registering a new passkey and signing in with one.
//!
//! A ceremony is a short exchange. The Client fetches a challenge from the Relying Party's start
//! endpoint, hands the resulting options to the platform [`Authenticator`], then submits the
//! produced credential to the finish endpoint. All binary values cross the wire as base64url
//! tokens, see [`ceremony_types::encoding`]. The Client performs no cryptography or
//! verification of its own, the authenticator and the Relying Party do.
//!
//! Both collaborators are traits so the Client can be used with any authenticator bridge and any
//! transport. [`HttpRelyingParty`] is the [`reqwest`](https://docs.rs/reqwest) transport behind the
//! default `reqwest` feature.
use ceremony_types::encoding;
use serde::{de::DeserializeOwned, Serialize};

mod authentication;
mod authenticator;
mod config;
mod error;
mod registration;
mod relying_party;

#[cfg(test)]
mod tests;

pub use self::{
    authentication::Authenticated,
    authenticator::{Authenticator, CeremonyError},
    config::{CeremonyConfig, DEFAULT_TIMEOUT_MS},
    error::{Error, ErrorKind, Flow},
    registration::Registered,
    relying_party::{Endpoint, Endpoints, RelyingParty, Response, TransportError},
};

#[cfg(feature = "reqwest")]
pub use self::relying_party::HttpRelyingParty;

#[cfg(any(test, feature = "testable"))]
pub use self::{authenticator::MockAuthenticator, relying_party::MockRelyingParty};

pub use url::Url;

/// A `Client` runs webauthn ceremonies for a single page. Users of this struct supply an
/// [`Authenticator`] to create and exercise credentials, a [`RelyingParty`] to reach the server and
/// the [`CeremonyConfig`] describing what to ask the authenticator for.
///
/// Ceremonies take `&mut self`, so at most one runs at a time on a given `Client`.
pub struct Client<A, R>
where
    A: Authenticator,
    R: RelyingParty,
{
    authenticator: A,
    relying_party: R,
    config: CeremonyConfig,
}

impl<A, R> Client<A, R>
where
    A: Authenticator,
    R: RelyingParty,
{
    /// Create a `Client` from its collaborators and policy.
    pub fn new(authenticator: A, relying_party: R, config: CeremonyConfig) -> Self {
        Self {
            authenticator,
            relying_party,
            config,
        }
    }

    /// Read access to the Client's `Authenticator`.
    pub fn authenticator(&self) -> &A {
        &self.authenticator
    }

    /// Read access to the Client's `RelyingParty`.
    pub fn relying_party(&self) -> &R {
        &self.relying_party
    }

    /// Read access to the policy the Client builds options with.
    pub fn config(&self) -> &CeremonyConfig {
        &self.config
    }

    /// Fetch and parse the body of a start endpoint.
    async fn fetch_start<T: DeserializeOwned>(
        &self,
        flow: Flow,
        endpoint: Endpoint,
    ) -> Result<T, Error> {
        let response = self
            .relying_party
            .post(endpoint, None)
            .await
            .map_err(|e| abort(flow, ErrorKind::Start(e)))?;

        if !response.is_success() {
            return Err(abort(
                flow,
                ErrorKind::Start(TransportError::Status(response.status)),
            ));
        }

        let body = serde_json::from_slice(&response.body).map_err(|e| {
            abort(
                flow,
                ErrorKind::Start(TransportError::MalformedBody(e.to_string())),
            )
        })?;
        log::debug!("{flow}: {endpoint} answered with {} bytes", response.body.len());
        Ok(body)
    }

    /// Submit a finish envelope. The response body is not inspected.
    async fn submit<T: Serialize>(
        &self,
        flow: Flow,
        endpoint: Endpoint,
        envelope: &T,
    ) -> Result<(), Error> {
        // SAFETY: it is a developer error if serializing an envelope of tokens fails.
        let body = serde_json::to_value(envelope).unwrap();

        let response = self
            .relying_party
            .post(endpoint, Some(body))
            .await
            .map_err(|e| abort(flow, ErrorKind::Finish(e)))?;

        if !response.is_success() {
            return Err(abort(
                flow,
                ErrorKind::Finish(TransportError::Status(response.status)),
            ));
        }

        log::debug!("{flow}: {endpoint} accepted with status {}", response.status);
        Ok(())
    }
}

/// Build the error that ends a ceremony.
fn abort(flow: Flow, kind: ErrorKind) -> Error {
    log::warn!("{flow} aborted: {kind}");
    Error::new(flow, kind)
}

/// The encoded id of a credential, as it is reported back to callers.
fn credential_id(raw_id: &[u8]) -> String {
    encoding::base64url(raw_id)
}
