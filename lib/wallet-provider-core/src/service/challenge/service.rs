use ct_codecs::{Base64UrlSafeNoPadding, Encoder};
use time::OffsetDateTime;
use wallet_provider_crypto::utilities::generate_random_vec;

use super::dto::ChallengeClaims;
use super::error::ChallengeValidationFailure;
use super::{CHALLENGE_TYPE, ChallengeService, ChallengeValidator};
use crate::model::challenge::Challenge;
use crate::proto::jwt::{JwtError, JwtValidationFailure};

impl ChallengeService {
    /// Issues a fresh challenge valid from now for the configured validity
    pub fn generate(&self) -> Result<Challenge, JwtError> {
        let nonce = generate_random_vec(self.config.length);
        let now = self.clock.now_utc();
        let expires_at = now
            .checked_add(self.config.validity)
            .ok_or(JwtError::TimestampOutOfRange)?;

        let claims = ChallengeClaims {
            challenge: Base64UrlSafeNoPadding::encode_to_string(nonce)
                .map_err(|err| JwtError::Encoding(err.to_string()))?,
            not_before: now,
            expires_at,
        };

        let signed = self.signer.sign(claims)?;
        tracing::debug!("Generated challenge valid until {}", signed.payload.expires_at);

        Ok(Challenge::new(signed.token.into_bytes()))
    }
}

impl ChallengeValidator for ChallengeService {
    fn validate(
        &self,
        challenge: &Challenge,
        at: OffsetDateTime,
    ) -> Result<(), ChallengeValidationFailure> {
        let token = std::str::from_utf8(challenge.as_bytes()).map_err(|err| {
            ChallengeValidationFailure::UnparsableChallenge {
                cause: Some(err.to_string()),
            }
        })?;

        let signed = self.signer.validate(token).map_err(|failure| match failure {
            JwtValidationFailure::InvalidSignature => ChallengeValidationFailure::InvalidSignature,
            JwtValidationFailure::UnparsableDocument(cause) => {
                ChallengeValidationFailure::UnparsableChallenge { cause: Some(cause) }
            }
            JwtValidationFailure::UnparsablePayload(err) => {
                ChallengeValidationFailure::UnparsableChallenge {
                    cause: Some(err.to_string()),
                }
            }
        })?;

        let found = signed.header.r#type.unwrap_or_default();
        if found != CHALLENGE_TYPE {
            return Err(ChallengeValidationFailure::WrongType {
                expected: CHALLENGE_TYPE.to_string(),
                found,
            });
        }

        if at < signed.payload.not_before {
            return Err(ChallengeValidationFailure::NotYetActive);
        }
        if at >= signed.payload.expires_at {
            return Err(ChallengeValidationFailure::Expired);
        }

        Ok(())
    }
}
