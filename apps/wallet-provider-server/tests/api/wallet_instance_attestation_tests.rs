use serde_json::json;

use crate::fixtures::{android_leaf_certificate, decode_jwt, ec_jwk, verify_es256};
use crate::utils::context::TestContext;

const X: &str = "MKBCTNIcKUSDii11ySs3526iDZ8AiTo7Tu6KPAqv7D4";
const Y: &str = "4Etl6SRW2YiLUrN5vfvVHuhp7x8PxltmWWlbbM4IFyM";

#[tokio::test]
async fn test_issue_wallet_instance_attestation_with_jwk() {
    // GIVEN
    let context = TestContext::new().await;
    let jwk = ec_jwk(X, Y);

    // WHEN
    let resp = context
        .api
        .wallet_instance_attestations
        .jwk(json!({
            "jwk": jwk,
            "supportedSigningAlgorithms": ["ES256"],
            "walletMetadata": { "platform": "android" },
        }))
        .await;

    // THEN
    assert_eq!(resp.status(), 200);
    let resp = resp.json_value().await;
    let token = resp["walletInstanceAttestation"].as_str().unwrap();

    let (header, payload) = decode_jwt(token);
    assert_eq!(header["typ"], "oauth-client-attestation+jwt");
    assert_eq!(header["alg"], "ES256");

    assert_eq!(payload["iss"], context.base_url);
    assert_eq!(payload["sub"], "wallet-dev");
    assert_eq!(payload["cnf"]["jwk"], jwk);
    assert_eq!(
        payload["exp"].as_i64().unwrap() - payload["iat"].as_i64().unwrap(),
        300
    );
    assert_eq!(payload["nbf"], payload["iat"]);
    assert_eq!(payload["wallet_name"], "Test Wallet");
    assert_eq!(payload["wallet_link"], "https://wallet.test/");
    assert_eq!(payload["wallet_metadata"], json!({ "platform": "android" }));
    assert_eq!(
        payload["eudi_wallet_info"]["general_info"]["wallet_solution_id"],
        "wallet-dev"
    );

    let jwks = context.api.metadata.jwks().await.json_value().await;
    verify_es256(token, &jwks["keys"][0]);
}

#[tokio::test]
async fn test_issue_wallet_instance_attestation_with_android_key_attestation() {
    // GIVEN
    let context = TestContext::new().await;
    let challenge = context.api.challenge.generate_value().await;

    // WHEN
    let resp = context
        .api
        .wallet_instance_attestations
        .android(json!({
            "keyAttestation": { "x5c": [android_leaf_certificate()] },
            "challenge": challenge,
        }))
        .await;

    // THEN
    assert_eq!(resp.status(), 200);
    let resp = resp.json_value().await;
    let (_, payload) = decode_jwt(resp["walletInstanceAttestation"].as_str().unwrap());
    assert_eq!(payload["cnf"]["jwk"]["kty"], "EC");
    assert!(payload.get("wallet_metadata").is_none());
}

#[tokio::test]
async fn test_fail_wallet_instance_attestation_unsupported_signing_algorithm() {
    // GIVEN
    let context = TestContext::new().await;

    // WHEN
    let resp = context
        .api
        .wallet_instance_attestations
        .jwk(json!({
            "jwk": ec_jwk(X, Y),
            "supportedSigningAlgorithms": ["RS256"],
        }))
        .await;

    // THEN
    assert_eq!(resp.status(), 400);
    assert_eq!(
        resp.json_value().await,
        json!({ "error": "unsupported_signing_algorithms" })
    );
}

#[tokio::test]
async fn test_fail_wallet_instance_attestation_invalid_key_attestation() {
    // GIVEN
    let context = TestContext::new().await;
    let challenge = context.api.challenge.generate_value().await;

    // WHEN
    let resp = context
        .api
        .wallet_instance_attestations
        .android(json!({
            "keyAttestation": { "x5c": ["bm90IGEgY2VydGlmaWNhdGU="] },
            "challenge": challenge,
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
async fn test_fail_wallet_instance_attestation_malformed_body() {
    // GIVEN
    let context = TestContext::new().await;

    // WHEN
    let resp = context
        .api
        .wallet_instance_attestations
        .jwk(json!({ "supportedSigningAlgorithms": ["ES256"] }))
        .await;

    // THEN
    assert_eq!(resp.status(), 422);
}
