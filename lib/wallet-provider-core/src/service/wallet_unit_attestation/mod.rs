use std::sync::Arc;

use crate::config::core_config::CoreConfig;
use crate::model::attestation::WalletUnitAttestationClaims;
use crate::proto::jwt::JwsSigner;
use crate::provider::key_attestation::KeyAttestationValidator;
use crate::provider::status_list::StatusListTokenProvider;
use crate::service::challenge::ChallengeValidator;
use crate::util::clock::Clock;

pub mod dto;
pub mod error;
pub mod service;


/// Upper bound of key attestations validated concurrently for one request
const MAX_CONCURRENT_VALIDATIONS: usize = 4;

#[derive(Clone)]
pub struct WalletUnitAttestationService {
    challenge_validator: Arc<dyn ChallengeValidator>,
    key_attestation_validator: Arc<dyn KeyAttestationValidator>,
    status_list_provider: Option<Arc<dyn StatusListTokenProvider>>,
    signer: JwsSigner<WalletUnitAttestationClaims>,
    clock: Arc<dyn Clock>,
    config: Arc<CoreConfig>,
}

impl WalletUnitAttestationService {
    pub(crate) fn new(
        challenge_validator: Arc<dyn ChallengeValidator>,
        key_attestation_validator: Arc<dyn KeyAttestationValidator>,
        status_list_provider: Option<Arc<dyn StatusListTokenProvider>>,
        signer: JwsSigner<WalletUnitAttestationClaims>,
        clock: Arc<dyn Clock>,
        config: Arc<CoreConfig>,
    ) -> Self {
        Self {
            challenge_validator,
            key_attestation_validator,
            status_list_provider,
            signer,
            clock,
            config,
        }
    }
}
