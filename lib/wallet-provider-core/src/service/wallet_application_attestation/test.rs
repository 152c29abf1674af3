use std::sync::Arc;

use assert2::{assert, let_assert};
use rstest::rstest;
use serde_json::json;
use time::Duration;

use super::*;
use crate::error::{ErrorCode, ErrorCodeMixin};
use crate::model::attestation::CLIENT_ATTESTATION_TYPE;
use crate::model::challenge::Challenge;
use crate::provider::key_attestation::{
    AttestedKey, IosAppAttestation, KeyAttestation, KeyAttestationValidationFailure,
    MockKeyAttestationValidator,
};
use crate::service::challenge::MockChallengeValidator;
use crate::service::challenge::error::ChallengeValidationFailure;
use crate::service::common::ClientKeyDTO;
use crate::service::test_utilities::*;
use crate::service::wallet_application_attestation::dto::WalletApplicationAttestationRequestDTO;
use crate::service::wallet_application_attestation::error::WalletApplicationAttestationError;

fn service(
    challenge_validator: MockChallengeValidator,
    key_attestation_validator: MockKeyAttestationValidator,
) -> WalletApplicationAttestationService {
    WalletApplicationAttestationService::new(
        Arc::new(challenge_validator),
        Arc::new(key_attestation_validator),
        JwsSigner::new(signing_material(), CLIENT_ATTESTATION_TYPE),
        Arc::new(fixed_clock(NOW)),
        core_config(),
    )
}

fn ios_request() -> WalletApplicationAttestationRequestDTO {
    WalletApplicationAttestationRequestDTO {
        key: ClientKeyDTO::PlatformKeyAttestation {
            key_attestation: KeyAttestation::Ios(IosAppAttestation {
                attestation: "o2NmbXQ=".to_string(),
            }),
            challenge: Challenge::new(b"challenge".to_vec()),
        },
        supported_signing_algorithms: None,
    }
}

#[tokio::test]
async fn test_issue_with_ios_key_attestation() {
    let attested = dummy_jwk("ios");

    let mut challenge_validator = MockChallengeValidator::new();
    challenge_validator
        .expect_validate()
        .once()
        .returning(|_, _| Ok(()));

    let mut key_attestation_validator = MockKeyAttestationValidator::new();
    key_attestation_validator.expect_validate().once().returning({
        let attested = attested.clone();
        move |_, _| {
            Ok(AttestedKey {
                public_key: attested.clone(),
                details: json!({"platform": "ios"}),
            })
        }
    });

    let signed = service(challenge_validator, key_attestation_validator)
        .issue(ios_request())
        .await
        .unwrap();

    assert!(signed.header.r#type.as_deref() == Some(CLIENT_ATTESTATION_TYPE));
    let claims = signed.payload;
    assert!(claims.confirmation.jwk == attested);
    assert!(claims.issuer == "https://wallet-provider.test");
    assert!(claims.subject == "wallet-test");
    assert!(claims.not_before == claims.issued_at);
    assert!(claims.expires_at - claims.issued_at == Duration::hours(2));
    assert!(claims.wallet_name.is_none());
    assert!(claims.wallet_link.is_none());
}

#[tokio::test]
async fn test_issue_with_jwk_skips_validation() {
    let jwk = dummy_jwk("bare");

    let signed = service(MockChallengeValidator::new(), MockKeyAttestationValidator::new())
        .issue(WalletApplicationAttestationRequestDTO {
            key: ClientKeyDTO::Jwk(jwk.clone()),
            supported_signing_algorithms: Some(vec!["ES384".to_string(), "ES256".to_string()]),
        })
        .await
        .unwrap();

    assert!(signed.payload.confirmation.jwk == jwk);

    let serialized = serde_json::to_value(&signed.payload).unwrap();
    assert!(serialized.get("wallet_metadata").is_none());
    assert!(serialized["eudi_wallet_info"]["general_info"]["wallet_solution_id"] == "test-wallet");
}

#[tokio::test]
async fn test_issue_unsupported_algorithm() {
    let mut request = ios_request();
    request.supported_signing_algorithms = Some(vec!["RS256".to_string()]);

    let result = service(MockChallengeValidator::new(), MockKeyAttestationValidator::new())
        .issue(request)
        .await;

    let_assert!(Err(error) = result);
    assert!(error.error_code() == ErrorCode::UnsupportedSigningAlgorithms);
}

#[rstest]
#[case::challenge(
    Err(ChallengeValidationFailure::NotYetActive),
    None,
    ErrorCode::InvalidChallenge
)]
#[case::key_attestation(
    Ok(()),
    Some(KeyAttestationValidationFailure::InvalidKeyAttestation {
        message: "Nonce mismatch".to_string(),
        cause: None,
    }),
    ErrorCode::InvalidKeyAttestation
)]
#[case::attested_key(
    Ok(()),
    Some(KeyAttestationValidationFailure::UnsupportedAttestedKey {
        message: "Attested PublicKey is not supported".to_string(),
        cause: None,
    }),
    ErrorCode::UnsupportedAttestedKey
)]
#[tokio::test]
async fn test_issue_rejected(
    #[case] challenge_result: Result<(), ChallengeValidationFailure>,
    #[case] key_attestation_failure: Option<KeyAttestationValidationFailure>,
    #[case] expected: ErrorCode,
) {
    let mut challenge_validator = MockChallengeValidator::new();
    challenge_validator
        .expect_validate()
        .return_const(challenge_result);

    let mut key_attestation_validator = MockKeyAttestationValidator::new();
    if let Some(failure) = key_attestation_failure {
        key_attestation_validator
            .expect_validate()
            .once()
            .returning(move |_, _| Err(failure.clone()));
    }

    let result = service(challenge_validator, key_attestation_validator)
        .issue(ios_request())
        .await;

    let_assert!(Err(error) = result);
    assert!(error.error_code() == expected);
    if expected == ErrorCode::InvalidChallenge {
        assert!(let WalletApplicationAttestationError::InvalidChallenge(_) = error);
    } else {
        assert!(let WalletApplicationAttestationError::InvalidKeyAttestation(_) = error);
    }
}
