use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChallengeValidationFailure {
    #[error("Challenge is not valid, unable to parse.")]
    UnparsableChallenge { cause: Option<String> },
    #[error("Challenge is not valid, signature is invalid.")]
    InvalidSignature,
    #[error("Challenge is not valid, contains invalid `typ`. Expected: '{expected}', found: '{found}'.")]
    WrongType { expected: String, found: String },
    #[error("Challenge is not active yet.")]
    NotYetActive,
    #[error("Challenge is expired.")]
    Expired,
}
