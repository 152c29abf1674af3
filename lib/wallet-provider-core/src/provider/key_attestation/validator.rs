use std::sync::Arc;

use super::{
    AttestedKey, KeyAttestation, KeyAttestationValidationFailure, KeyAttestationValidator,
    KeyAttestationVerifier,
};
use crate::model::challenge::Challenge;
use crate::provider::key_algorithm::public_jwk_from_spki;


pub const UNSUPPORTED_ATTESTED_KEY_MESSAGE: &str = "Attested PublicKey is not supported";

pub struct KeyAttestationValidatorImpl {
    verifier: Arc<dyn KeyAttestationVerifier>,
}

impl KeyAttestationValidatorImpl {
    pub fn new(verifier: Arc<dyn KeyAttestationVerifier>) -> Self {
        Self { verifier }
    }
}

#[async_trait::async_trait]
impl KeyAttestationValidator for KeyAttestationValidatorImpl {
    async fn validate(
        &self,
        attestation: &KeyAttestation,
        challenge: &Challenge,
    ) -> Result<AttestedKey, KeyAttestationValidationFailure> {
        let verified = self
            .verifier
            .verify(attestation, challenge.as_bytes())
            .await
            .map_err(|failure| {
                let message = match &failure.debug_info {
                    Some(debug_info) => format!("{} {debug_info}", failure.explanation),
                    None => failure.explanation,
                };
                tracing::debug!("Key attestation rejected: {message}");
                KeyAttestationValidationFailure::InvalidKeyAttestation {
                    message,
                    cause: failure.cause,
                }
            })?;

        let public_key = public_jwk_from_spki(&verified.public_key).map_err(|err| {
            KeyAttestationValidationFailure::UnsupportedAttestedKey {
                message: UNSUPPORTED_ATTESTED_KEY_MESSAGE.to_string(),
                cause: Some(err.to_string()),
            }
        })?;

        Ok(AttestedKey {
            public_key,
            details: verified.details,
        })
    }
}
