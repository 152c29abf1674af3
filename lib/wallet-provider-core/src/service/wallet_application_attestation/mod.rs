use std::sync::Arc;

use crate::config::core_config::CoreConfig;
use crate::model::attestation::WalletApplicationAttestationClaims;
use crate::proto::jwt::JwsSigner;
use crate::provider::key_attestation::KeyAttestationValidator;
use crate::service::challenge::ChallengeValidator;
use crate::util::clock::Clock;

pub mod dto;
pub mod error;
pub mod service;

#[cfg(test)]
mod test;

#[derive(Clone)]
pub struct WalletApplicationAttestationService {
    challenge_validator: Arc<dyn ChallengeValidator>,
    key_attestation_validator: Arc<dyn KeyAttestationValidator>,
    signer: JwsSigner<WalletApplicationAttestationClaims>,
    clock: Arc<dyn Clock>,
    config: Arc<CoreConfig>,
}

impl WalletApplicationAttestationService {
    pub(crate) fn new(
        challenge_validator: Arc<dyn ChallengeValidator>,
        key_attestation_validator: Arc<dyn KeyAttestationValidator>,
        signer: JwsSigner<WalletApplicationAttestationClaims>,
        clock: Arc<dyn Clock>,
        config: Arc<CoreConfig>,
    ) -> Self {
        Self {
            challenge_validator,
            key_attestation_validator,
            signer,
            clock,
            config,
        }
    }
}
