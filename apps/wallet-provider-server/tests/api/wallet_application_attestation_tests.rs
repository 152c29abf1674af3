use serde_json::json;

use crate::fixtures::{decode_jwt, ec_jwk};
use crate::utils::context::TestContext;

#[tokio::test]
async fn test_issue_wallet_application_attestation_with_jwk() {
    // GIVEN
    let context = TestContext::new().await;
    let jwk = ec_jwk(
        "f83OJ3D2xF1Bg8vub9tLe1gHMzV76e8Tus9uPHvRVEU",
        "x_FEzRu9m36HLN_tue659LNpXW6pCyStikYjKIWI5a0",
    );

    // WHEN
    let resp = context
        .api
        .wallet_application_attestations
        .jwk(json!({ "jwk": jwk }))
        .await;

    // THEN
    assert_eq!(resp.status(), 200);
    let resp = resp.json_value().await;
    let (header, payload) = decode_jwt(resp["walletApplicationAttestation"].as_str().unwrap());

    assert_eq!(header["typ"], "oauth-client-attestation+jwt");
    assert_eq!(payload["iss"], context.base_url);
    assert_eq!(payload["cnf"]["jwk"], jwk);
    assert_eq!(
        payload["exp"].as_i64().unwrap() - payload["iat"].as_i64().unwrap(),
        86400
    );
    assert!(payload.get("wallet_name").is_none());
    assert!(payload.get("wallet_metadata").is_none());
}

#[tokio::test]
async fn test_fail_wallet_application_attestation_invalid_ios_attestation() {
    // GIVEN
    let context = TestContext::new().await;
    let challenge = context.api.challenge.generate_value().await;

    // WHEN
    let resp = context
        .api
        .wallet_application_attestations
        .ios(json!({
            "keyAttestation": { "attestation": "oWNmbXRvYXBwbGUtYXBwYXR0ZXN0" },
            "challenge": challenge,
            "supportedSigningAlgorithms": ["ES256"],
        }))
        .await;

    // THEN
    assert_eq!(resp.status(), 400);
    assert_eq!(
        resp.json_value().await,
        json!({ "error": "invalid_key_attestation" })
    );
}

#[tokio::test]
async fn test_fail_wallet_application_attestation_empty_algorithm_list() {
    // GIVEN
    let context = TestContext::new().await;

    // WHEN
    let resp = context
        .api
        .wallet_application_attestations
        .jwk(json!({
            "jwk": ec_jwk("x", "y"),
            "supportedSigningAlgorithms": [],
        }))
        .await;

    // THEN
    assert_eq!(resp.status(), 400);
    assert_eq!(
        resp.json_value().await,
        json!({ "error": "unsupported_signing_algorithms" })
    );
}
