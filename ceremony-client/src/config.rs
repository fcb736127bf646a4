use ceremony_types::{
    webauthn::{
        AttestationConveyancePreference, AuthenticatorAttachment, AuthenticatorSelectionCriteria,
        CredentialCreationOptions, CredentialRequestOptions, PublicKeyCredentialCreationOptions,
        PublicKeyCredentialParameters, PublicKeyCredentialRequestOptions,
        PublicKeyCredentialRpEntity, PublicKeyCredentialUserEntity, ResidentKeyRequirement,
        UserVerificationRequirement,
    },
    wire::{LoginChallenge, RegistrationChallenge},
};
use serde::{Deserialize, Serialize};

/// How long the authenticator is given to complete a ceremony, in milliseconds.
pub const DEFAULT_TIMEOUT_MS: u32 = 60_000;

/// The policy the [`Client`](crate::Client) applies when building options for the authenticator.
///
/// The defaults favour broad device compatibility: user verification is only `preferred` and no
/// relying party id is sent, so the authenticator derives it from the current origin. Stricter
/// deployments can tighten either with [`Self::user_verification`] and [`Self::rp_id`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CeremonyConfig {
    /// The relying party name shown by the authenticator during registration.
    pub rp_name: String,

    /// Explicit relying party id. `None` lets the authenticator use the origin's effective domain.
    #[serde(default)]
    pub rp_id: Option<String>,

    /// User verification requested for both ceremonies.
    #[serde(default)]
    pub user_verification: UserVerificationRequirement,

    /// Ceremony timeout handed to the authenticator.
    #[serde(default = "default_timeout")]
    pub timeout_ms: u32,

    /// Accepted algorithms, most preferred first.
    #[serde(default = "PublicKeyCredentialParameters::default_algorithms")]
    pub algorithms: Vec<PublicKeyCredentialParameters>,

    /// Attachment class new credentials must be created on.
    #[serde(default = "default_attachment")]
    pub authenticator_attachment: Option<AuthenticatorAttachment>,

    /// Whether new credentials must be discoverable.
    #[serde(default = "default_resident_key")]
    pub resident_key: ResidentKeyRequirement,

    /// Attestation requested from the authenticator.
    #[serde(default)]
    pub attestation: AttestationConveyancePreference,

    /// Where the caller should navigate after a successful login.
    #[serde(default = "default_landing_path")]
    pub landing_path: String,
}

fn default_timeout() -> u32 {
    DEFAULT_TIMEOUT_MS
}

fn default_attachment() -> Option<AuthenticatorAttachment> {
    Some(AuthenticatorAttachment::Platform)
}

fn default_resident_key() -> ResidentKeyRequirement {
    ResidentKeyRequirement::Required
}

fn default_landing_path() -> String {
    "/".into()
}

impl CeremonyConfig {
    /// Default policy for a relying party displayed as `rp_name`.
    pub fn new(rp_name: impl Into<String>) -> Self {
        Self {
            rp_name: rp_name.into(),
            rp_id: None,
            user_verification: UserVerificationRequirement::Preferred,
            timeout_ms: DEFAULT_TIMEOUT_MS,
            algorithms: PublicKeyCredentialParameters::default_algorithms(),
            authenticator_attachment: default_attachment(),
            resident_key: default_resident_key(),
            attestation: AttestationConveyancePreference::None,
            landing_path: default_landing_path(),
        }
    }

    /// Send an explicit relying party id instead of letting the authenticator derive it.
    pub fn rp_id(mut self, rp_id: impl Into<String>) -> Self {
        self.rp_id = Some(rp_id.into());
        self
    }

    /// Change the user verification requirement, e.g. to `required`.
    pub fn user_verification(mut self, user_verification: UserVerificationRequirement) -> Self {
        self.user_verification = user_verification;
        self
    }

    /// Change the ceremony timeout.
    pub fn timeout_ms(mut self, timeout_ms: u32) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }

    /// Replace the accepted algorithms, most preferred first.
    pub fn algorithms(mut self, algorithms: Vec<PublicKeyCredentialParameters>) -> Self {
        self.algorithms = algorithms;
        self
    }

    /// Restrict, or with `None` stop restricting, the attachment class of new credentials.
    pub fn authenticator_attachment(mut self, attachment: Option<AuthenticatorAttachment>) -> Self {
        self.authenticator_attachment = attachment;
        self
    }

    /// Change the discoverable credential requirement.
    pub fn resident_key(mut self, resident_key: ResidentKeyRequirement) -> Self {
        self.resident_key = resident_key;
        self
    }

    /// Change the attestation conveyance preference.
    pub fn attestation(mut self, attestation: AttestationConveyancePreference) -> Self {
        self.attestation = attestation;
        self
    }

    /// Change where a successful login lands.
    pub fn landing_path(mut self, landing_path: impl Into<String>) -> Self {
        self.landing_path = landing_path.into();
        self
    }

    /// Options for registering a credential with `challenge`, which they take ownership of.
    pub fn creation_options(&self, challenge: RegistrationChallenge) -> CredentialCreationOptions {
        let RegistrationChallenge {
            challenge,
            user_id,
            username,
            display_name,
        } = challenge;

        CredentialCreationOptions {
            public_key: PublicKeyCredentialCreationOptions {
                rp: PublicKeyCredentialRpEntity {
                    id: self.rp_id.clone(),
                    name: self.rp_name.clone(),
                },
                user: PublicKeyCredentialUserEntity {
                    id: user_id,
                    display_name,
                    name: username,
                },
                challenge,
                pub_key_cred_params: self.algorithms.clone(),
                timeout: Some(self.timeout_ms),
                authenticator_selection: Some(AuthenticatorSelectionCriteria::new(
                    self.authenticator_attachment,
                    self.resident_key,
                    self.user_verification,
                )),
                attestation: self.attestation,
            },
        }
    }

    /// Options for asserting with `challenge`, which they take ownership of.
    pub fn request_options(&self, challenge: LoginChallenge) -> CredentialRequestOptions {
        CredentialRequestOptions {
            public_key: PublicKeyCredentialRequestOptions {
                challenge: challenge.challenge,
                timeout: Some(self.timeout_ms),
                rp_id: self.rp_id.clone(),
                user_verification: self.user_verification,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use coset::iana;

    use super::*;

    fn registration_challenge() -> RegistrationChallenge {
        RegistrationChallenge {
            challenge: vec![0x01].into(),
            user_id: vec![0x02].into(),
            username: "alice".into(),
            display_name: "Alice".into(),
        }
    }

    #[test]
    fn default_creation_options() {
        let options = CeremonyConfig::new("Hannie Book Store")
            .creation_options(registration_challenge())
            .public_key;

        assert_eq!(options.rp.id, None);
        assert_eq!(options.rp.name, "Hannie Book Store");
        assert_eq!(*options.challenge, vec![0x01]);
        assert_eq!(*options.user.id, vec![0x02]);
        assert_eq!(options.user.name, "alice");
        assert_eq!(options.user.display_name, "Alice");
        assert_eq!(
            options
                .pub_key_cred_params
                .iter()
                .map(|p| p.alg)
                .collect::<Vec<_>>(),
            vec![iana::Algorithm::ES256, iana::Algorithm::RS256]
        );
        assert_eq!(options.timeout, Some(60_000));
        assert_eq!(options.attestation, AttestationConveyancePreference::None);

        let selection = options.authenticator_selection.unwrap();
        assert_eq!(
            selection.authenticator_attachment,
            Some(AuthenticatorAttachment::Platform)
        );
        assert_eq!(selection.resident_key, Some(ResidentKeyRequirement::Required));
        assert!(selection.require_resident_key);
        assert_eq!(
            selection.user_verification,
            UserVerificationRequirement::Preferred
        );
    }

    #[test]
    fn default_request_options() {
        let options = CeremonyConfig::new("Hannie Book Store")
            .request_options(LoginChallenge {
                challenge: vec![0x03].into(),
            })
            .public_key;

        assert_eq!(*options.challenge, vec![0x03]);
        assert_eq!(options.rp_id, None);
        assert_eq!(options.timeout, Some(60_000));
        assert_eq!(
            options.user_verification,
            UserVerificationRequirement::Preferred
        );
    }

    #[test]
    fn strict_policy_flows_into_options() {
        let config = CeremonyConfig::new("Shop")
            .rp_id("shop.example")
            .user_verification(UserVerificationRequirement::Required)
            .timeout_ms(120_000);

        let creation = config.creation_options(registration_challenge()).public_key;
        assert_eq!(creation.rp.id.as_deref(), Some("shop.example"));
        assert_eq!(creation.timeout, Some(120_000));
        assert_eq!(
            creation.authenticator_selection.unwrap().user_verification,
            UserVerificationRequirement::Required
        );

        let request = config
            .request_options(LoginChallenge {
                challenge: vec![0x03].into(),
            })
            .public_key;
        assert_eq!(request.rp_id.as_deref(), Some("shop.example"));
        assert_eq!(request.user_verification, UserVerificationRequirement::Required);
    }

    #[test]
    fn deserializes_with_defaults() {
        let config: CeremonyConfig =
            serde_json::from_str(r#"{ "rpName": "Hannie Book Store" }"#).unwrap();
        assert_eq!(config, CeremonyConfig::new("Hannie Book Store"));

        let strict: CeremonyConfig = serde_json::from_str(
            r#"{
                "rpName": "Shop",
                "userVerification": "required",
                "timeoutMs": 30000,
                "authenticatorAttachment": null,
                "landingPath": "/account"
            }"#,
        )
        .unwrap();
        assert_eq!(strict.user_verification, UserVerificationRequirement::Required);
        assert_eq!(strict.timeout_ms, 30_000);
        assert_eq!(strict.authenticator_attachment, None);
        assert_eq!(strict.landing_path, "/account");
    }
}
