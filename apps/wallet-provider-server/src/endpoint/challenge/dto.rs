use serde::Serialize;
use utoipa::ToSchema;
use wallet_provider_core::model::challenge::Challenge;

#[derive(Debug, Serialize, ToSchema)]
pub struct ChallengeResponseRestDTO {
    /// Base64url encoded challenge to be bound into the key attestation
    #[schema(value_type = String, example = "ZXlKaGJHY2lPaUpGVXpJMU5pSjkuZXlKamFHRnNiR1Z1WjJVaU9pSjRlSG9pZlEuc2ln")]
    pub challenge: Challenge,
}

impl From<Challenge> for ChallengeResponseRestDTO {
    fn from(challenge: Challenge) -> Self {
        Self { challenge }
    }
}
