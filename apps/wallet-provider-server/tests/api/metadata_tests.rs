use crate::utils::context::TestContext;

#[tokio::test]
async fn test_get_protected_resource_metadata() {
    // GIVEN
    let context = TestContext::new().await;

    // WHEN
    let resp = context.api.metadata.protected_resource().await;

    // THEN
    assert_eq!(resp.status(), 200);
    let resp = resp.json_value().await;

    assert_eq!(resp["resource"], context.base_url);
    assert_eq!(resp["jwks_uri"], format!("{}/jwks", context.base_url));
    assert_eq!(resp["resource_name"], "Integration Test Provider");
    for field in [
        "resource_signing_alg_values_supported",
        "client_attestation_signing_alg_values_supported",
        "proof_signing_alg_values_supported",
    ] {
        assert_eq!(resp[field], serde_json::json!(["ES256"]));
    }
}

#[tokio::test]
async fn test_get_jwks_with_generated_key() {
    // GIVEN
    let context = TestContext::new().await;

    // WHEN
    let resp = context.api.metadata.jwks().await;

    // THEN
    assert_eq!(resp.status(), 200);
    let resp = resp.json_value().await;

    let keys = resp["keys"].as_array().unwrap();
    assert_eq!(keys.len(), 1);
    assert_eq!(keys[0]["kty"], "EC");
    assert_eq!(keys[0]["crv"], "P-256");
    assert!(keys[0].get("x5c").is_none());
}

#[tokio::test]
async fn test_openapi_document_lists_issuance_endpoints() {
    // GIVEN
    let context = TestContext::new().await;

    // WHEN
    let resp = context.api.metadata.openapi().await;

    // THEN
    assert_eq!(resp.status(), 200);
    let resp = resp.json_value().await;

    let paths = resp["paths"].as_object().unwrap();
    assert!(paths.contains_key("/challenge"));
    assert!(paths.contains_key("/wallet-instance-attestation/jwk"));
    assert!(paths.contains_key("/wallet-application-attestation/platform-key-attestation/ios"));
    assert!(paths.contains_key("/wallet-unit-attestation/jwk-set"));
    assert!(paths.contains_key("/jwks"));
}

#[tokio::test]
async fn test_openapi_document_hidden_when_disabled() {
    // GIVEN
    let context = TestContext::new_with_config(Some(
        indoc::indoc! {"
            app:
              enableOpenApi: false
        "}
        .to_string(),
    ))
    .await;

    // WHEN
    let resp = context.api.metadata.openapi().await;

    // THEN
    assert_eq!(resp.status(), 404);
}
