use ct_codecs::{Base64UrlSafeNoPadding, Decoder};
use serde_json::{Value, json};
use wallet_provider_core::config::core_config::AppConfig;
use wallet_provider_crypto::Signer;
use wallet_provider_crypto::signer::es256::ES256Signer;
use wallet_provider_server::ServerConfig;

const TEST_CHAIN_PEM: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../../lib/wallet-provider-core/resources/test/signing_chain.pem"
));

pub fn create_config(
    base_url: &str,
    additional_config: Option<String>,
) -> AppConfig<ServerConfig> {
    let root = std::env!("CARGO_MANIFEST_DIR");
    let base_config = std::fs::read_to_string(format!("{root}/config/config.yml")).unwrap();

    let test_config = indoc::formatdoc! {"
        core:
          issuer:
            publicUrl: {base_url}
            name: Integration Test Provider
          challenge:
            length: 128
            validity: 300
          walletInstanceAttestation:
            validity: 300
            walletName: Test Wallet
            walletLink: https://wallet.test/
        app:
          enableOpenApi: true
    "};

    let configs = [base_config, test_config]
        .into_iter()
        .chain(additional_config);

    AppConfig::from_yaml(configs).unwrap()
}

pub fn ec_jwk(x: &str, y: &str) -> Value {
    json!({
        "kty": "EC",
        "crv": "P-256",
        "x": x,
        "y": y,
    })
}

/// Standard base64 DER of the leaf certificate of the bundled test chain
pub fn android_leaf_certificate() -> String {
    TEST_CHAIN_PEM
        .lines()
        .skip_while(|line| !line.starts_with("-----BEGIN CERTIFICATE-----"))
        .skip(1)
        .take_while(|line| !line.starts_with("-----END CERTIFICATE-----"))
        .collect()
}

pub fn decode_jwt(token: &str) -> (Value, Value) {
    let parts: Vec<&str> = token.split('.').collect();
    assert_eq!(parts.len(), 3);
    (decode_part(parts[0]), decode_part(parts[1]))
}

fn decode_part(part: &str) -> Value {
    let bytes = Base64UrlSafeNoPadding::decode_to_vec(part, None).unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

/// Checks the ES256 signature of `token` against an EC P-256 JWK
pub fn verify_es256(token: &str, jwk: &Value) {
    let (signing_input, signature) = token.rsplit_once('.').unwrap();
    let signature = Base64UrlSafeNoPadding::decode_to_vec(signature, None).unwrap();

    let coordinate = |name: &str| {
        Base64UrlSafeNoPadding::decode_to_vec(jwk[name].as_str().unwrap(), None).unwrap()
    };
    let public_key =
        ES256Signer::parse_public_key_coordinates(&coordinate("x"), &coordinate("y")).unwrap();

    ES256Signer {}
        .verify(signing_input.as_bytes(), &signature, &public_key)
        .unwrap();
}
