use serde_json::json;

use super::*;
use crate::webauthn::{
    AuthenticatorAssertionResponse, AuthenticatorAttestationResponse, PublicKeyCredential,
    PublicKeyCredentialType,
};

fn created_credential() -> CreatedPublicKeyCredential {
    PublicKeyCredential {
        id: "AQI".into(),
        raw_id: vec![0x01, 0x02].into(),
        ty: PublicKeyCredentialType::PublicKey,
        response: AuthenticatorAttestationResponse {
            client_data_json: vec![0xBB].into(),
            attestation_object: vec![0xAA].into(),
        },
        authenticator_attachment: None,
    }
}

fn authenticated_credential() -> AuthenticatedPublicKeyCredential {
    PublicKeyCredential {
        id: "AQI".into(),
        raw_id: vec![0x01, 0x02].into(),
        ty: PublicKeyCredentialType::PublicKey,
        response: AuthenticatorAssertionResponse {
            client_data_json: vec![0xBB].into(),
            authenticator_data: vec![0xCC].into(),
            signature: vec![0xDD].into(),
            user_handle: Some(vec![0x02].into()),
        },
        authenticator_attachment: None,
    }
}

#[test]
fn registration_start_decodes_tokens() {
    let start: RegistrationStart = serde_json::from_value(json!({
        "challenge": "AQ",
        "userId": "Ag",
        "username": "alice",
        "displayName": "Alice"
    }))
    .unwrap();

    assert_eq!(
        start.decode().unwrap(),
        RegistrationChallenge {
            challenge: vec![0x01].into(),
            user_id: vec![0x02].into(),
            username: "alice".into(),
            display_name: "Alice".into(),
        }
    );
}

#[test]
fn registration_start_requires_every_field() {
    serde_json::from_value::<RegistrationStart>(json!({
        "userId": "Ag",
        "username": "alice",
        "displayName": "Alice"
    }))
    .expect_err("a start response without challenge is malformed");
}

#[test]
fn malformed_tokens_name_their_field() {
    let start = RegistrationStart {
        challenge: "AQ".into(),
        user_id: "A+g".into(),
        username: "alice".into(),
        display_name: "Alice".into(),
    };
    let err = start.decode().unwrap_err();
    assert_eq!(err.field, "userId");
    assert!(err.to_string().starts_with("`userId` is not a valid token"));

    let login = LoginStart {
        challenge: "A".into(),
    };
    assert_eq!(login.decode().unwrap_err().field, "challenge");
}

#[test]
fn login_start_ignores_extra_fields() {
    let start: LoginStart =
        serde_json::from_value(json!({ "challenge": "AQI=", "timeout": 60000 })).unwrap();
    assert_eq!(start.decode().unwrap().challenge, Bytes::from(vec![0x01, 0x02]));
}

#[test]
fn registration_finish_schema() {
    let envelope = RegistrationFinish::from(&created_credential());
    assert_eq!(
        serde_json::to_value(&envelope).unwrap(),
        json!({
            "credentialId": "AQI",
            "clientDataJSON": "uw",
            "attestationObject": "qg"
        })
    );
    // field order follows the documented envelope
    assert_eq!(
        serde_json::to_string(&envelope).unwrap(),
        r#"{"credentialId":"AQI","clientDataJSON":"uw","attestationObject":"qg"}"#
    );
}

#[test]
fn login_finish_schema() {
    let envelope = LoginFinish::from(&authenticated_credential());
    assert_eq!(
        serde_json::to_string(&envelope).unwrap(),
        r#"{"credentialId":"AQI","authenticatorData":"zA","clientDataJSON":"uw","signature":"3Q"}"#
    );
}

#[test]
fn finish_uses_raw_id_not_reported_id() {
    let mut credential = created_credential();
    credential.id = "something-else".into();
    assert_eq!(RegistrationFinish::from(&credential).credential_id, "AQI");
}
