use ceremony_types::wire::{LoginFinish, LoginStart};

use crate::{
    abort, credential_id, Authenticator, Client, Endpoint, Error, ErrorKind, Flow, RelyingParty,
};

/// A successful sign in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Authenticated {
    /// The base64url token of the raw id of the credential that signed the challenge.
    pub credential_id: String,
    /// Where the caller should navigate next, the configured landing path.
    pub landing_path: String,
}

impl<A, R> Client<A, R>
where
    A: Authenticator,
    R: RelyingParty,
{
    /// Sign in with a passkey the authenticator already holds for the Relying Party.
    ///
    /// The authenticator chooses the credential, no allow list is sent. The first failing step
    /// ends the ceremony with an [`Error`] whose flow is [`Flow::Login`].
    pub async fn login(&mut self) -> Result<Authenticated, Error> {
        let flow = Flow::Login;

        let challenge = self
            .fetch_start::<LoginStart>(flow, Endpoint::LoginStart)
            .await?
            .decode()
            .map_err(|e| abort(flow, ErrorKind::Decode(e)))?;

        let options = self.config.request_options(challenge);
        log::debug!("{flow}: requesting an assertion");

        let credential = self
            .authenticator
            .get(options)
            .await
            .map_err(|e| abort(flow, ErrorKind::Ceremony(e)))?;
        log::debug!(
            "{flow}: authenticator signed with a {} byte credential id",
            credential.raw_id.len()
        );

        self.submit(flow, Endpoint::LoginFinish, &LoginFinish::from(&credential))
            .await?;

        Ok(Authenticated {
            credential_id: credential_id(&credential.raw_id),
            landing_path: self.config.landing_path.clone(),
        })
    }
}
