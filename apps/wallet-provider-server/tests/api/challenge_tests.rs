use ct_codecs::{Base64UrlSafeNoPadding, Decoder};

use crate::fixtures::decode_jwt;
use crate::utils::context::TestContext;

#[tokio::test]
async fn test_generate_challenge() {
    // GIVEN
    let context = TestContext::new().await;

    // WHEN
    let challenge = context.api.challenge.generate_value().await;

    // THEN
    let token = Base64UrlSafeNoPadding::decode_to_vec(&challenge, None).unwrap();
    let token = String::from_utf8(token).unwrap();
    let (header, payload) = decode_jwt(&token);

    assert_eq!(header["typ"], "challenge+jwt");
    assert_eq!(header["alg"], "ES256");

    let nonce =
        Base64UrlSafeNoPadding::decode_to_vec(payload["challenge"].as_str().unwrap(), None)
            .unwrap();
    assert_eq!(nonce.len(), 128);

    let not_before = payload["nbf"].as_i64().unwrap();
    let expires_at = payload["exp"].as_i64().unwrap();
    assert_eq!(expires_at - not_before, 300);
}

#[tokio::test]
async fn test_generate_challenge_is_random() {
    // GIVEN
    let context = TestContext::new().await;

    // WHEN
    let first = context.api.challenge.generate_value().await;
    let second = context.api.challenge.generate_value().await;

    // THEN
    assert_ne!(first, second);
}
