use strum::Display;

/// Stable wire codes of rejected issuance requests
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[strum(serialize_all = "snake_case")]
pub enum ErrorCode {
    InvalidChallenge,
    InvalidKeyAttestation,
    UnsupportedAttestedKey,
    NoAttestedKeys,
    NonUniqueAttestedKeys,
    UnsupportedSigningAlgorithms,
    InvalidPreferredTtl,
    StatusListTokenGenerationFailure,
    InternalError,
}

impl ErrorCode {
    /// Whether the failure originates in the service rather than in the request
    pub fn is_internal(&self) -> bool {
        matches!(
            self,
            ErrorCode::StatusListTokenGenerationFailure | ErrorCode::InternalError
        )
    }
}

pub trait ErrorCodeMixin {
    fn error_code(&self) -> ErrorCode;
}
