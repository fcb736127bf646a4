//! The JSON bodies exchanged with the Relying Party's ceremony endpoints.
//!
//! Every binary value in here travels as a token produced by [`encoding::base64url`]. The
//! `*Start` types are what the start endpoints answer with, their [`decode`](RegistrationStart::decode)
//! methods turn them into the binary challenge bundles a ceremony consumes. The `*Finish` types
//! are the envelopes submitted back once the authenticator has produced a credential.

use std::fmt;

use serde::{Deserialize, Serialize};
use typeshare::typeshare;

use crate::{
    encoding::{self, DecodeError},
    webauthn::{AuthenticatedPublicKeyCredential, CreatedPublicKeyCredential},
    Bytes,
};

/// Body of the registration start response.
#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
#[typeshare]
pub struct RegistrationStart {
    /// Token of the registration challenge.
    pub challenge: String,
    /// Token of the user handle the new credential is bound to.
    pub user_id: String,
    /// Account identifier shown by the authenticator.
    pub username: String,
    /// Human-palatable account name shown by the authenticator.
    pub display_name: String,
}

impl RegistrationStart {
    /// Decode the tokens into the binary bundle for a single registration ceremony.
    pub fn decode(self) -> Result<RegistrationChallenge, MalformedToken> {
        Ok(RegistrationChallenge {
            challenge: decode_field("challenge", &self.challenge)?,
            user_id: decode_field("userId", &self.user_id)?,
            username: self.username,
            display_name: self.display_name,
        })
    }
}

/// The decoded registration parameters. It is consumed by the ceremony that fetched it.
#[derive(Debug, PartialEq, Eq)]
pub struct RegistrationChallenge {
    /// The challenge the authenticator signs.
    pub challenge: Bytes,
    /// The user handle.
    pub user_id: Bytes,
    /// Account identifier.
    pub username: String,
    /// Human-palatable account name.
    pub display_name: String,
}

/// Body of the login start response.
#[derive(Debug, Deserialize, Serialize)]
#[typeshare]
pub struct LoginStart {
    /// Token of the authentication challenge.
    pub challenge: String,
}

impl LoginStart {
    /// Decode the token into the binary bundle for a single authentication ceremony.
    pub fn decode(self) -> Result<LoginChallenge, MalformedToken> {
        Ok(LoginChallenge {
            challenge: decode_field("challenge", &self.challenge)?,
        })
    }
}

/// The decoded authentication parameters. It is consumed by the ceremony that fetched it.
#[derive(Debug, PartialEq, Eq)]
pub struct LoginChallenge {
    /// The challenge the authenticator signs.
    pub challenge: Bytes,
}

fn decode_field(field: &'static str, token: &str) -> Result<Bytes, MalformedToken> {
    Bytes::try_from(token).map_err(|error| MalformedToken { field, error })
}

/// A field of a start response did not hold a valid token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[typeshare]
pub struct MalformedToken {
    /// The wire name of the offending field.
    pub field: &'static str,
    /// Why decoding failed.
    pub error: DecodeError,
}

impl fmt::Display for MalformedToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "`{}` is not a valid token: {}", self.field, self.error)
    }
}

impl std::error::Error for MalformedToken {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.error)
    }
}

/// Body submitted to the registration finish endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
#[typeshare]
pub struct RegistrationFinish {
    /// Token of the credential's raw id.
    pub credential_id: String,
    /// Token of the client data JSON.
    #[serde(rename = "clientDataJSON")]
    pub client_data_json: String,
    /// Token of the attestation object.
    pub attestation_object: String,
}

impl From<&CreatedPublicKeyCredential> for RegistrationFinish {
    fn from(credential: &CreatedPublicKeyCredential) -> Self {
        Self {
            credential_id: encoding::base64url(&credential.raw_id),
            client_data_json: encoding::base64url(&credential.response.client_data_json),
            attestation_object: encoding::base64url(&credential.response.attestation_object),
        }
    }
}

/// Body submitted to the login finish endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
#[typeshare]
pub struct LoginFinish {
    /// Token of the raw id of the credential that signed the challenge.
    pub credential_id: String,
    /// Token of the authenticator data.
    pub authenticator_data: String,
    /// Token of the client data JSON.
    #[serde(rename = "clientDataJSON")]
    pub client_data_json: String,
    /// Token of the assertion signature.
    pub signature: String,
}

impl From<&AuthenticatedPublicKeyCredential> for LoginFinish {
    fn from(credential: &AuthenticatedPublicKeyCredential) -> Self {
        Self {
            credential_id: encoding::base64url(&credential.raw_id),
            authenticator_data: encoding::base64url(&credential.response.authenticator_data),
            client_data_json: encoding::base64url(&credential.response.client_data_json),
            signature: encoding::base64url(&credential.response.signature),
        }
    }
}

#[cfg(test)]
mod tests;
