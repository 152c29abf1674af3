use futures::StreamExt;
use itertools::Itertools;
use time::Duration;

use super::dto::{WalletUnitAttestationRequestDTO, WalletUnitKeysDTO};
use super::error::WalletUnitAttestationError;
use super::{MAX_CONCURRENT_VALIDATIONS, WalletUnitAttestationService};
use crate::model::attestation::{UnitEudiWalletInfo, WalletUnitAttestationClaims};
use crate::model::challenge::Challenge;
use crate::model::jwk::PublicJwk;
use crate::proto::jwt::model::SignedJwt;
use crate::provider::key_attestation::KeyAttestation;
use crate::service::common::{accepts_algorithm, general_info, wscd_info};

impl WalletUnitAttestationService {
    /// Issues a wallet unit attestation covering one or more wallet keys
    pub async fn issue(
        &self,
        request: WalletUnitAttestationRequestDTO,
    ) -> Result<SignedJwt<WalletUnitAttestationClaims>, WalletUnitAttestationError> {
        let algorithm = self.signer.algorithm();
        if !accepts_algorithm(request.supported_signing_algorithms.as_deref(), algorithm) {
            let requested = request.supported_signing_algorithms.unwrap_or_default();
            tracing::warn!(
                "Wallet unit attestation rejected, {algorithm} not among requested algorithms {requested:?}"
            );
            return Err(WalletUnitAttestationError::UnsupportedSigningAlgorithms {
                supported: algorithm,
                requested,
            });
        }

        let attested_keys = match request.keys {
            WalletUnitKeysDTO::PlatformKeyAttestations {
                key_attestations,
                challenge,
            } => {
                if let Err(failure) = self
                    .challenge_validator
                    .validate(&challenge, self.clock.now_utc())
                {
                    tracing::warn!("Wallet unit attestation rejected, {failure}");
                    return Err(WalletUnitAttestationError::InvalidChallenge(failure));
                }

                self.validate_key_attestations(&key_attestations, &challenge)
                    .await?
            }
            WalletUnitKeysDTO::JwkSet(keys) => keys,
        };

        if attested_keys.is_empty() {
            tracing::warn!("Wallet unit attestation rejected, no attested keys");
            return Err(WalletUnitAttestationError::NoAttestedKeys);
        }
        if !attested_keys.iter().map(PublicJwk::key_material).all_unique() {
            tracing::warn!("Wallet unit attestation rejected, attested keys are not unique");
            return Err(WalletUnitAttestationError::NonUniqueAttestedKeys);
        }

        let ttl = self.time_to_live(request.preferred_ttl)?;
        let issued_at = self.clock.now_utc();
        let expires_at = issued_at + ttl;

        let status = match &self.status_list_provider {
            Some(provider) => Some(provider.generate(expires_at).await.map_err(|err| {
                tracing::warn!("Wallet unit attestation rejected, {err}");
                WalletUnitAttestationError::StatusListTokenGenerationFailure(err)
            })?),
            None => None,
        };

        let config = &self.config.wallet_unit_attestation;
        let claims = WalletUnitAttestationClaims {
            issuer: self.config.issuer.identifier(),
            subject: self.config.client_id.to_owned(),
            issued_at,
            expires_at,
            attested_keys,
            key_storage: config.key_storage.to_owned(),
            user_authentication: config.user_authentication.to_owned(),
            certification: config.certification.to_owned(),
            nonce: request.nonce,
            status,
            eudi_wallet_info: UnitEudiWalletInfo {
                general_info: general_info(&self.config.wallet_information),
                wscd_info: wscd_info(&self.config.wallet_information),
            },
        };

        let signed = self.signer.sign(claims)?;
        tracing::info!(
            "Issued wallet unit attestation for {} key(s) valid until {}",
            signed.payload.attested_keys.len(),
            signed.payload.expires_at
        );

        Ok(signed)
    }

    /// Validates every attestation and reports all failures at once
    async fn validate_key_attestations(
        &self,
        key_attestations: &[KeyAttestation],
        challenge: &Challenge,
    ) -> Result<Vec<PublicJwk>, WalletUnitAttestationError> {
        let validations: Vec<_> = key_attestations
            .iter()
            .enumerate()
            .map(|(index, attestation)| async move {
                let result = self
                    .key_attestation_validator
                    .validate(attestation, challenge)
                    .await;
                (index, result)
            })
            .collect();
        let mut results: Vec<_> = futures::stream::iter(validations)
            .buffer_unordered(MAX_CONCURRENT_VALIDATIONS)
            .collect()
            .await;
        results.sort_by_key(|(index, _)| *index);

        let (attested_keys, failures): (Vec<_>, Vec<_>) = results
            .into_iter()
            .map(|(_, result)| result)
            .partition_result();

        if !failures.is_empty() {
            tracing::warn!(
                "Wallet unit attestation rejected, {} of {} key attestations are not valid",
                failures.len(),
                key_attestations.len()
            );
            return Err(WalletUnitAttestationError::InvalidKeyAttestations(failures));
        }

        Ok(attested_keys
            .into_iter()
            .map(|attested| attested.public_key)
            .collect())
    }

    fn time_to_live(
        &self,
        preferred_ttl: Option<Duration>,
    ) -> Result<Duration, WalletUnitAttestationError> {
        let validity = &self.config.wallet_unit_attestation.validity;
        let Some(requested) = preferred_ttl else {
            return Ok(validity.minimum);
        };

        if requested < validity.minimum || requested > validity.maximum {
            tracing::warn!("Wallet unit attestation rejected, preferred TTL {requested} out of range");
            return Err(WalletUnitAttestationError::InvalidPreferredTtl {
                requested,
                minimum_allowed: validity.minimum,
                maximum_allowed: validity.maximum,
            });
        }

        Ok(requested)
    }
}
