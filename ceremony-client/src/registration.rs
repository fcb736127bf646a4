use ceremony_types::wire::{RegistrationFinish, RegistrationStart};

use crate::{
    abort, credential_id, Authenticator, Client, Endpoint, Error, ErrorKind, Flow, RelyingParty,
};

/// A credential the Relying Party accepted during registration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registered {
    /// The base64url token of the new credential's raw id.
    pub credential_id: String,
}

impl<A, R> Client<A, R>
where
    A: Authenticator,
    R: RelyingParty,
{
    /// Register a new passkey for the account the Relying Party's session belongs to.
    ///
    /// This fetches a fresh challenge, asks the authenticator to create a credential for it, and
    /// submits the attestation to the finish endpoint. The first failing step ends the ceremony
    /// with an [`Error`] whose flow is [`Flow::Registration`]. Nothing is retried.
    pub async fn register(&mut self) -> Result<Registered, Error> {
        let flow = Flow::Registration;

        let challenge = self
            .fetch_start::<RegistrationStart>(flow, Endpoint::RegistrationStart)
            .await?
            .decode()
            .map_err(|e| abort(flow, ErrorKind::Decode(e)))?;

        let options = self.config.creation_options(challenge);
        log::debug!(
            "{flow}: requesting a credential with {} accepted algorithms",
            options.public_key.pub_key_cred_params.len()
        );

        let credential = self
            .authenticator
            .create(options)
            .await
            .map_err(|e| abort(flow, ErrorKind::Ceremony(e)))?;
        log::debug!(
            "{flow}: authenticator created a credential with a {} byte id",
            credential.raw_id.len()
        );

        self.submit(
            flow,
            Endpoint::RegistrationFinish,
            &RegistrationFinish::from(&credential),
        )
        .await?;

        Ok(Registered {
            credential_id: credential_id(&credential.raw_id),
        })
    }
}
