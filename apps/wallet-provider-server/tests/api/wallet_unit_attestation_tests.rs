use serde_json::json;
use wiremock::matchers::{body_string_contains, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::fixtures::{android_leaf_certificate, decode_jwt, ec_jwk};
use crate::utils::context::TestContext;

const MINIMUM_TTL: i64 = 2678400;
const MAXIMUM_TTL: i64 = 5356800;

fn first_key() -> serde_json::Value {
    ec_jwk(
        "MKBCTNIcKUSDii11ySs3526iDZ8AiTo7Tu6KPAqv7D4",
        "4Etl6SRW2YiLUrN5vfvVHuhp7x8PxltmWWlbbM4IFyM",
    )
}

fn jwk_set() -> serde_json::Value {
    json!({
        "keys": [
            first_key(),
            ec_jwk(
                "f83OJ3D2xF1Bg8vub9tLe1gHMzV76e8Tus9uPHvRVEU",
                "x_FEzRu9m36HLN_tue659LNpXW6pCyStikYjKIWI5a0",
            ),
        ]
    })
}

#[tokio::test]
async fn test_issue_wallet_unit_attestation_with_jwk_set() {
    // GIVEN
    let context = TestContext::new().await;
    let keys = jwk_set();

    // WHEN
    let resp = context
        .api
        .wallet_unit_attestations
        .jwk_set(json!({
            "jwkSet": keys,
            "nonce": "wallet-nonce",
            "preferredTtl": MAXIMUM_TTL,
        }))
        .await;

    // THEN
    assert_eq!(resp.status(), 200);
    let resp = resp.json_value().await;
    let (header, payload) = decode_jwt(resp["walletUnitAttestation"].as_str().unwrap());

    assert_eq!(header["typ"], "key-attestation+jwt");
    assert_eq!(payload["iss"], context.base_url);
    assert_eq!(payload["sub"], "wallet-dev");
    assert_eq!(payload["attested_keys"], keys["keys"]);
    assert_eq!(payload["nonce"], "wallet-nonce");
    assert_eq!(
        payload["exp"].as_i64().unwrap() - payload["iat"].as_i64().unwrap(),
        MAXIMUM_TTL
    );
    assert_eq!(payload["key_storage"], json!(["iso_18045_moderate"]));
    assert_eq!(payload["user_authentication"], json!(["iso_18045_moderate"]));
    assert_eq!(
        payload["eudi_wallet_info"]["wscd_info"]["wscd_type"],
        "LOCAL_NATIVE"
    );
    assert!(payload.get("status").is_none());
}

#[tokio::test]
async fn test_issue_wallet_unit_attestation_with_android_key_attestations() {
    // GIVEN
    let context = TestContext::new().await;
    let challenge = context.api.challenge.generate_value().await;

    // WHEN
    let resp = context
        .api
        .wallet_unit_attestations
        .android(json!({
            "keyAttestations": [{ "x5c": [android_leaf_certificate()] }],
            "challenge": challenge,
        }))
        .await;

    // THEN
    assert_eq!(resp.status(), 200);
    let resp = resp.json_value().await;
    let (_, payload) = decode_jwt(resp["walletUnitAttestation"].as_str().unwrap());

    assert_eq!(payload["attested_keys"].as_array().unwrap().len(), 1);
    assert_eq!(
        payload["exp"].as_i64().unwrap() - payload["iat"].as_i64().unwrap(),
        MINIMUM_TTL
    );
    assert!(payload.get("nonce").is_none());
}

#[tokio::test]
async fn test_fail_wallet_unit_attestation_reports_every_failure_once() {
    // GIVEN
    let context = TestContext::new().await;
    let challenge = context.api.challenge.generate_value().await;

    // WHEN
    let resp = context
        .api
        .wallet_unit_attestations
        .android(json!({
            "keyAttestations": [
                { "x5c": ["bm90IGEgY2VydGlmaWNhdGU="] },
                { "x5c": [android_leaf_certificate()] },
                { "x5c": [] },
            ],
            "challenge": challenge,
        }))
        .await;

    // THEN
    assert_eq!(resp.status(), 400);
    assert_eq!(
        resp.json_value().await,
        json!({ "errors": ["invalid_key_attestation"] })
    );
}

#[tokio::test]
async fn test_fail_wallet_unit_attestation_duplicate_keys() {
    // GIVEN
    let context = TestContext::new().await;
    let key = first_key();
    let mut same_key_with_kid = key.clone();
    same_key_with_kid["kid"] = json!("second");

    // WHEN
    let resp = context
        .api
        .wallet_unit_attestations
        .jwk_set(json!({ "jwkSet": { "keys": [key, same_key_with_kid] } }))
        .await;

    // THEN
    assert_eq!(resp.status(), 400);
    assert_eq!(
        resp.json_value().await,
        json!({ "errors": ["non_unique_attested_keys"] })
    );
}

#[tokio::test]
async fn test_fail_wallet_unit_attestation_no_keys() {
    // GIVEN
    let context = TestContext::new().await;

    // WHEN
    let resp = context
        .api
        .wallet_unit_attestations
        .jwk_set(json!({ "jwkSet": { "keys": [] } }))
        .await;

    // THEN
    assert_eq!(resp.status(), 400);
    assert_eq!(
        resp.json_value().await,
        json!({ "errors": ["no_attested_keys"] })
    );
}

#[tokio::test]
async fn test_fail_wallet_unit_attestation_preferred_ttl_out_of_range() {
    // GIVEN
    let context = TestContext::new().await;

    for preferred_ttl in [MINIMUM_TTL - 1, MAXIMUM_TTL + 1] {
        // WHEN
        let resp = context
            .api
            .wallet_unit_attestations
            .jwk_set(json!({ "jwkSet": jwk_set(), "preferredTtl": preferred_ttl }))
            .await;

        // THEN
        assert_eq!(resp.status(), 400);
        assert_eq!(
            resp.json_value().await,
            json!({ "errors": ["invalid_preferred_ttl"] })
        );
    }
}

#[tokio::test]
async fn test_fail_wallet_unit_attestation_unsupported_signing_algorithm() {
    // GIVEN
    let context = TestContext::new().await;

    // WHEN
    let resp = context
        .api
        .wallet_unit_attestations
        .jwk_set(json!({
            "jwkSet": jwk_set(),
            "supportedSigningAlgorithms": ["RS256", "ES384"],
        }))
        .await;

    // THEN
    assert_eq!(resp.status(), 400);
    assert_eq!(
        resp.json_value().await,
        json!({ "errors": ["unsupported_signing_algorithms"] })
    );
}

fn status_list_config(service_url: &str) -> Option<String> {
    Some(indoc::formatdoc! {"
        core:
          tokenStatusListService:
            serviceUrl: {service_url}/status-list
            apiKey: test-api-key
    "})
}

#[tokio::test]
async fn test_issue_wallet_unit_attestation_with_status_list_entry() {
    // GIVEN
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/status-list"))
        .and(header("X-API-Key", "test-api-key"))
        .and(body_string_contains("country=FC"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status_list": { "idx": 42, "uri": "https://status.test/lists/1" }
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let context = TestContext::new_with_config(status_list_config(&mock_server.uri())).await;

    // WHEN
    let resp = context
        .api
        .wallet_unit_attestations
        .jwk_set(json!({ "jwkSet": jwk_set() }))
        .await;

    // THEN
    assert_eq!(resp.status(), 200);
    let resp = resp.json_value().await;
    let (_, payload) = decode_jwt(resp["walletUnitAttestation"].as_str().unwrap());
    assert_eq!(
        payload["status"],
        json!({ "status_list": { "idx": 42, "uri": "https://status.test/lists/1" } })
    );
}

#[tokio::test]
async fn test_fail_wallet_unit_attestation_status_list_unavailable() {
    // GIVEN
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/status-list"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&mock_server)
        .await;

    let context = TestContext::new_with_config(status_list_config(&mock_server.uri())).await;

    // WHEN
    let resp = context
        .api
        .wallet_unit_attestations
        .jwk_set(json!({ "jwkSet": jwk_set() }))
        .await;

    // THEN
    assert_eq!(resp.status(), 500);
    assert_eq!(
        resp.json_value().await,
        json!({ "errors": ["status_list_token_generation_failure"] })
    );
}
