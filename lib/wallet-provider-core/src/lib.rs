use std::sync::Arc;

use thiserror::Error;

use crate::config::core_config::{CoreConfig, PlatformKeyAttestationValidationConfig};
use crate::model::attestation::{CLIENT_ATTESTATION_TYPE, KEY_ATTESTATION_TYPE};
use crate::proto::jwt::JwsSigner;
use crate::provider::http_client::reqwest_client::ReqwestClient;
use crate::provider::key_algorithm::KeyAlgorithmError;
use crate::provider::key_algorithm::loader::load_signing_material;
use crate::provider::key_attestation::disabled::DisabledKeyAttestationVerifier;
use crate::provider::key_attestation::platform::{
    PlatformKeyAttestationVerifier, PlatformVerifierInitError,
};
use crate::provider::key_attestation::validator::KeyAttestationValidatorImpl;
use crate::provider::key_attestation::{KeyAttestationValidator, KeyAttestationVerifier};
use crate::provider::status_list::StatusListTokenProvider;
use crate::provider::status_list::token_status_list::TokenStatusListService;
use crate::service::challenge::{
    CHALLENGE_TYPE, ChallengeService, ChallengeValidator, NoopChallengeValidator,
};
use crate::service::metadata::MetadataService;
use crate::service::wallet_application_attestation::WalletApplicationAttestationService;
use crate::service::wallet_instance_attestation::WalletInstanceAttestationService;
use crate::service::wallet_unit_attestation::WalletUnitAttestationService;
use crate::util::clock::{Clock, DefaultClock};

pub mod config;
pub mod error;
pub mod model;
pub mod proto;
pub mod provider;
pub mod service;
pub mod util;

#[derive(Debug, Error)]
pub enum CoreInitError {
    #[error("Failed to load signing key: {0}")]
    SigningKey(#[from] KeyAlgorithmError),
    #[error("Failed to initialize platform key attestation: {0}")]
    PlatformVerifier(#[from] PlatformVerifierInitError),
}

#[derive(Clone)]
pub struct WalletProviderCore {
    pub challenge_service: ChallengeService,
    pub wallet_instance_attestation_service: WalletInstanceAttestationService,
    pub wallet_application_attestation_service: WalletApplicationAttestationService,
    pub wallet_unit_attestation_service: WalletUnitAttestationService,
    pub metadata_service: MetadataService,
}

impl WalletProviderCore {
    pub async fn new(config: CoreConfig) -> Result<Self, CoreInitError> {
        Self::new_with_clock(config, Arc::new(DefaultClock::new())).await
    }

    pub async fn new_with_clock(
        config: CoreConfig,
        clock: Arc<dyn Clock>,
    ) -> Result<Self, CoreInitError> {
        let config = Arc::new(config);
        let signing_material = Arc::new(load_signing_material(&config.signing_key).await?);

        let challenge_service = ChallengeService::new(
            JwsSigner::new(signing_material.clone(), CHALLENGE_TYPE),
            clock.clone(),
            config.challenge.clone(),
        );

        let (challenge_validator, key_attestation_verifier): (
            Arc<dyn ChallengeValidator>,
            Arc<dyn KeyAttestationVerifier>,
        ) = match &config.platform_key_attestation_validation {
            PlatformKeyAttestationValidationConfig::Disabled => {
                tracing::warn!(
                    "Platform key attestation validation is disabled, challenges and key attestations are accepted without verification"
                );
                (
                    Arc::new(NoopChallengeValidator),
                    Arc::new(DisabledKeyAttestationVerifier),
                )
            }
            PlatformKeyAttestationValidationConfig::Enabled { android, ios } => (
                Arc::new(challenge_service.clone()),
                Arc::new(PlatformKeyAttestationVerifier::new(
                    android.clone(),
                    ios.clone(),
                    clock.clone(),
                )?),
            ),
        };
        let key_attestation_validator: Arc<dyn KeyAttestationValidator> =
            Arc::new(KeyAttestationValidatorImpl::new(key_attestation_verifier));

        let status_list_provider = config.token_status_list_service.as_ref().map(|service| {
            tracing::info!("Using token status list service at {}", service.service_url);
            Arc::new(TokenStatusListService::new(
                Arc::new(ReqwestClient::default()),
                service.service_url.clone(),
                service.api_key.clone(),
                clock.clone(),
            )) as Arc<dyn StatusListTokenProvider>
        });

        Ok(Self {
            wallet_instance_attestation_service: WalletInstanceAttestationService::new(
                challenge_validator.clone(),
                key_attestation_validator.clone(),
                JwsSigner::new(signing_material.clone(), CLIENT_ATTESTATION_TYPE),
                clock.clone(),
                config.clone(),
            ),
            wallet_application_attestation_service: WalletApplicationAttestationService::new(
                challenge_validator.clone(),
                key_attestation_validator.clone(),
                JwsSigner::new(signing_material.clone(), CLIENT_ATTESTATION_TYPE),
                clock.clone(),
                config.clone(),
            ),
            wallet_unit_attestation_service: WalletUnitAttestationService::new(
                challenge_validator,
                key_attestation_validator,
                status_list_provider,
                JwsSigner::new(signing_material.clone(), KEY_ATTESTATION_TYPE),
                clock,
                config.clone(),
            ),
            metadata_service: MetadataService::new(signing_material, config),
            challenge_service,
        })
    }
}
