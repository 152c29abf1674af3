use thiserror::Error;

use crate::error::{ErrorCode, ErrorCodeMixin};
use crate::proto::jwt::JwtError;
use crate::provider::key_algorithm::SigningAlgorithm;
use crate::provider::key_attestation::KeyAttestationValidationFailure;
use crate::service::challenge::error::ChallengeValidationFailure;

#[derive(Debug, Error)]
pub enum WalletInstanceAttestationError {
    #[error("Signing algorithm `{supported}` is not among the requested {requested:?}")]
    UnsupportedSigningAlgorithms {
        supported: SigningAlgorithm,
        requested: Vec<String>,
    },
    #[error("Challenge is not valid: {0}")]
    InvalidChallenge(ChallengeValidationFailure),
    #[error("Key attestation is not valid: {0}")]
    InvalidKeyAttestation(KeyAttestationValidationFailure),
    #[error("Failed to sign wallet instance attestation: {0}")]
    Jwt(#[from] JwtError),
}

impl ErrorCodeMixin for WalletInstanceAttestationError {
    fn error_code(&self) -> ErrorCode {
        match self {
            Self::UnsupportedSigningAlgorithms { .. } => ErrorCode::UnsupportedSigningAlgorithms,
            Self::InvalidChallenge(_) => ErrorCode::InvalidChallenge,
            Self::InvalidKeyAttestation(failure) => failure.error_code(),
            Self::Jwt(_) => ErrorCode::InternalError,
        }
    }
}
