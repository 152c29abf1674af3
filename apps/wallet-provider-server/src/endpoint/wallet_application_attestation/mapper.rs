use wallet_provider_core::model::attestation::WalletApplicationAttestationClaims;
use wallet_provider_core::proto::jwt::model::SignedJwt;
use wallet_provider_core::service::common::ClientKeyDTO;
use wallet_provider_core::service::wallet_application_attestation::dto::WalletApplicationAttestationRequestDTO;

use super::dto::{
    WalletApplicationAttestationAndroidRequestRestDTO, WalletApplicationAttestationIosRequestRestDTO,
    WalletApplicationAttestationJwkRequestRestDTO, WalletApplicationAttestationResponseRestDTO,
};

impl From<WalletApplicationAttestationAndroidRequestRestDTO> for WalletApplicationAttestationRequestDTO {
    fn from(value: WalletApplicationAttestationAndroidRequestRestDTO) -> Self {
        Self {
            key: ClientKeyDTO::PlatformKeyAttestation {
                key_attestation: value.key_attestation.into(),
                challenge: value.challenge,
            },
            supported_signing_algorithms: value.supported_signing_algorithms,
        }
    }
}

impl From<WalletApplicationAttestationIosRequestRestDTO> for WalletApplicationAttestationRequestDTO {
    fn from(value: WalletApplicationAttestationIosRequestRestDTO) -> Self {
        Self {
            key: ClientKeyDTO::PlatformKeyAttestation {
                key_attestation: value.key_attestation.into(),
                challenge: value.challenge,
            },
            supported_signing_algorithms: value.supported_signing_algorithms,
        }
    }
}

impl From<WalletApplicationAttestationJwkRequestRestDTO> for WalletApplicationAttestationRequestDTO {
    fn from(value: WalletApplicationAttestationJwkRequestRestDTO) -> Self {
        Self {
            key: ClientKeyDTO::Jwk(value.jwk),
            supported_signing_algorithms: value.supported_signing_algorithms,
        }
    }
}

impl From<SignedJwt<WalletApplicationAttestationClaims>> for WalletApplicationAttestationResponseRestDTO {
    fn from(value: SignedJwt<WalletApplicationAttestationClaims>) -> Self {
        Self {
            wallet_application_attestation: value.token,
        }
    }
}
