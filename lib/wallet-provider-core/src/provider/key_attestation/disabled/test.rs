use assert2::{assert, let_assert};
use ciborium::Value;
use ct_codecs::{Base64, Encoder};
use x509_parser::pem::parse_x509_pem;

use super::*;
use crate::provider::key_attestation::{AndroidKeystoreAttestation, IosAppAttestation};

fn leaf_certificate() -> (Vec<u8>, Vec<u8>) {
    let (_, pem) =
        parse_x509_pem(include_bytes!("../../../../resources/test/signing_chain.pem")).unwrap();
    let public_key = pem.parse_x509().unwrap().public_key().raw.to_vec();
    (pem.contents, public_key)
}

#[tokio::test]
async fn test_android_leaf_key_extracted_without_checks() {
    let (der, public_key) = leaf_certificate();
    let attestation = KeyAttestation::Android(AndroidKeystoreAttestation {
        certificate_chain: vec![Base64::encode_to_string(&der).unwrap()],
    });

    let result = DisabledKeyAttestationVerifier
        .verify(&attestation, b"ignored")
        .await;

    let_assert!(Ok(verified) = result);
    assert!(verified.public_key == public_key);
    assert!(verified.details["platform"] == "android");
}

#[tokio::test]
async fn test_ios_leaf_key_extracted_without_checks() {
    let (der, public_key) = leaf_certificate();
    let object = Value::Map(vec![
        (Value::Text("fmt".into()), Value::Text("apple-appattest".into())),
        (
            Value::Text("attStmt".into()),
            Value::Map(vec![(
                Value::Text("x5c".into()),
                Value::Array(vec![Value::Bytes(der)]),
            )]),
        ),
    ]);
    let mut bytes = vec![];
    ciborium::ser::into_writer(&object, &mut bytes).unwrap();
    let attestation = KeyAttestation::Ios(IosAppAttestation {
        attestation: Base64::encode_to_string(&bytes).unwrap(),
    });

    let result = DisabledKeyAttestationVerifier
        .verify(&attestation, b"ignored")
        .await;

    let_assert!(Ok(verified) = result);
    assert!(verified.public_key == public_key);
    assert!(verified.details["platform"] == "ios");
}

#[tokio::test]
async fn test_empty_chain_rejected() {
    let attestation = KeyAttestation::Android(AndroidKeystoreAttestation {
        certificate_chain: vec![],
    });

    let result = DisabledKeyAttestationVerifier
        .verify(&attestation, b"ignored")
        .await;

    let_assert!(Err(failure) = result);
    assert!(failure.explanation == "Empty certificate chain");
}

#[tokio::test]
async fn test_garbage_certificate_rejected() {
    let attestation = KeyAttestation::Android(AndroidKeystoreAttestation {
        certificate_chain: vec!["AAAA".to_string()],
    });

    let result = DisabledKeyAttestationVerifier
        .verify(&attestation, b"ignored")
        .await;

    let_assert!(Err(failure) = result);
    assert!(failure.explanation == "Failed to parse attestation certificate");
}
