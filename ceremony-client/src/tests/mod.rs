use ceremony_types::webauthn::{
    AuthenticatedPublicKeyCredential, AuthenticatorAssertionResponse, AuthenticatorAttachment,
    AuthenticatorAttestationResponse, CreatedPublicKeyCredential, PublicKeyCredentialType,
};
use serde_json::{json, Value};

use super::*;


const RP_NAME: &str = "Hannie Book Store";

fn client(
    authenticator: MockAuthenticator,
    relying_party: MockRelyingParty,
) -> Client<MockAuthenticator, MockRelyingParty> {
    Client::new(authenticator, relying_party, CeremonyConfig::new(RP_NAME))
}

fn ok(body: Value) -> Response {
    Response {
        status: 200,
        body: serde_json::to_vec(&body).unwrap(),
    }
}

fn status(status: u16) -> Response {
    Response {
        status,
        body: Vec::new(),
    }
}

/// Expect exactly one call to `endpoint` that answers with `response`.
fn expect_endpoint(
    relying_party: &mut MockRelyingParty,
    endpoint: Endpoint,
    response: Result<Response, TransportError>,
) {
    relying_party
        .expect_post()
        .withf(move |e, _| *e == endpoint)
        .times(1)
        .return_once(move |_, _| response);
}

fn expect_never(relying_party: &mut MockRelyingParty, endpoint: Endpoint) {
    relying_party
        .expect_post()
        .withf(move |e, _| *e == endpoint)
        .never();
}

fn created_credential() -> CreatedPublicKeyCredential {
    CreatedPublicKeyCredential {
        id: "AQI".into(),
        raw_id: vec![0x01, 0x02].into(),
        ty: PublicKeyCredentialType::PublicKey,
        response: AuthenticatorAttestationResponse {
            client_data_json: vec![0xbb].into(),
            attestation_object: vec![0xaa].into(),
        },
        authenticator_attachment: Some(AuthenticatorAttachment::Platform),
    }
}

fn authenticated_credential() -> AuthenticatedPublicKeyCredential {
    AuthenticatedPublicKeyCredential {
        id: "AQI".into(),
        raw_id: vec![0x01, 0x02].into(),
        ty: PublicKeyCredentialType::PublicKey,
        response: AuthenticatorAssertionResponse {
            client_data_json: vec![0xbb].into(),
            authenticator_data: vec![0xcc].into(),
            signature: vec![0xdd].into(),
            user_handle: Some(vec![0x02].into()),
        },
        authenticator_attachment: Some(AuthenticatorAttachment::Platform),
    }
}
