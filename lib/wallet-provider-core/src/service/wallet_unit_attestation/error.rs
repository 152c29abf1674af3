use itertools::Itertools;
use thiserror::Error;
use time::Duration;

use crate::error::{ErrorCode, ErrorCodeMixin};
use crate::proto::jwt::JwtError;
use crate::provider::key_algorithm::SigningAlgorithm;
use crate::provider::key_attestation::KeyAttestationValidationFailure;
use crate::provider::status_list::StatusListError;
use crate::service::challenge::error::ChallengeValidationFailure;

#[derive(Debug, Error)]
pub enum WalletUnitAttestationError {
    #[error("Signing algorithm `{supported}` is not among the requested {requested:?}")]
    UnsupportedSigningAlgorithms {
        supported: SigningAlgorithm,
        requested: Vec<String>,
    },
    #[error("Challenge is not valid: {0}")]
    InvalidChallenge(ChallengeValidationFailure),
    #[error("Key attestations are not valid: {}", .0.iter().join("; "))]
    InvalidKeyAttestations(Vec<KeyAttestationValidationFailure>),
    #[error("No attested keys")]
    NoAttestedKeys,
    #[error("Attested keys are not unique")]
    NonUniqueAttestedKeys,
    #[error(
        "Preferred TTL {requested} is outside the allowed range [{minimum_allowed}, {maximum_allowed}]"
    )]
    InvalidPreferredTtl {
        requested: Duration,
        minimum_allowed: Duration,
        maximum_allowed: Duration,
    },
    #[error("Status list token generation failed: {0}")]
    StatusListTokenGenerationFailure(StatusListError),
    #[error("Failed to sign wallet unit attestation: {0}")]
    Jwt(#[from] JwtError),
}

impl WalletUnitAttestationError {
    /// Distinct wire codes in order of first occurrence
    pub fn error_codes(&self) -> Vec<ErrorCode> {
        match self {
            Self::InvalidKeyAttestations(failures) => failures
                .iter()
                .map(ErrorCodeMixin::error_code)
                .unique()
                .collect(),
            Self::UnsupportedSigningAlgorithms { .. } => {
                vec![ErrorCode::UnsupportedSigningAlgorithms]
            }
            Self::InvalidChallenge(_) => vec![ErrorCode::InvalidChallenge],
            Self::NoAttestedKeys => vec![ErrorCode::NoAttestedKeys],
            Self::NonUniqueAttestedKeys => vec![ErrorCode::NonUniqueAttestedKeys],
            Self::InvalidPreferredTtl { .. } => vec![ErrorCode::InvalidPreferredTtl],
            Self::StatusListTokenGenerationFailure(_) => {
                vec![ErrorCode::StatusListTokenGenerationFailure]
            }
            Self::Jwt(_) => vec![ErrorCode::InternalError],
        }
    }
}
