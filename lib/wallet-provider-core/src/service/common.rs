use crate::config::core_config::WalletInformationConfig;
use crate::error::{ErrorCode, ErrorCodeMixin};
use crate::model::attestation::{GeneralInfo, WscdInfo};
use crate::model::challenge::Challenge;
use crate::model::jwk::PublicJwk;
use crate::provider::key_algorithm::SigningAlgorithm;
use crate::provider::key_attestation::{KeyAttestation, KeyAttestationValidationFailure};

/// Key a wallet asks to have attested, either backed by platform evidence or bare
#[derive(Debug, Clone, PartialEq)]
pub enum ClientKeyDTO {
    PlatformKeyAttestation {
        key_attestation: KeyAttestation,
        challenge: Challenge,
    },
    Jwk(PublicJwk),
}

/// Absent list means the wallet accepts any algorithm
pub(crate) fn accepts_algorithm(requested: Option<&[String]>, algorithm: SigningAlgorithm) -> bool {
    let algorithm = algorithm.to_string();
    requested.is_none_or(|requested| requested.iter().any(|item| *item == algorithm))
}

pub(crate) fn general_info(config: &WalletInformationConfig) -> GeneralInfo {
    let general = &config.general_information;
    GeneralInfo {
        wallet_provider_name: general.provider.to_owned(),
        wallet_solution_id: general.id.to_owned(),
        wallet_solution_version: general.version.to_owned(),
        wallet_solution_certification_information: general.certification.to_owned(),
    }
}

pub(crate) fn wscd_info(config: &WalletInformationConfig) -> WscdInfo {
    let wscd = &config.wallet_secure_cryptographic_device_information;
    WscdInfo {
        wscd_type: wscd.r#type,
        wscd_certification_information: wscd.certification.to_owned(),
    }
}

impl ErrorCodeMixin for KeyAttestationValidationFailure {
    fn error_code(&self) -> ErrorCode {
        match self {
            Self::InvalidKeyAttestation { .. } => ErrorCode::InvalidKeyAttestation,
            Self::UnsupportedAttestedKey { .. } => ErrorCode::UnsupportedAttestedKey,
        }
    }
}
