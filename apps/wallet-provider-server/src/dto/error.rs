use one_dto_mapper::From;
use serde::Serialize;
use utoipa::ToSchema;
use wallet_provider_core::error::ErrorCode;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, From, ToSchema)]
#[from(ErrorCode)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCodeRestEnum {
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

#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponseRestDTO {
    pub error: ErrorCodeRestEnum,
}

/// Every distinct failure of a multi-key request
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorsResponseRestDTO {
    pub errors: Vec<ErrorCodeRestEnum>,
}
