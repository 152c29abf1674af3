use wallet_provider_core::model::attestation::WalletInstanceAttestationClaims;
use wallet_provider_core::proto::jwt::model::SignedJwt;
use wallet_provider_core::service::common::ClientKeyDTO;
use wallet_provider_core::service::wallet_instance_attestation::dto::WalletInstanceAttestationRequestDTO;

use super::dto::{
    WalletInstanceAttestationAndroidRequestRestDTO, WalletInstanceAttestationIosRequestRestDTO,
    WalletInstanceAttestationJwkRequestRestDTO, WalletInstanceAttestationResponseRestDTO,
};

impl From<WalletInstanceAttestationAndroidRequestRestDTO> for WalletInstanceAttestationRequestDTO {
    fn from(value: WalletInstanceAttestationAndroidRequestRestDTO) -> Self {
        Self {
            key: ClientKeyDTO::PlatformKeyAttestation {
                key_attestation: value.key_attestation.into(),
                challenge: value.challenge,
            },
            supported_signing_algorithms: value.supported_signing_algorithms,
            wallet_metadata: value.wallet_metadata,
        }
    }
}

impl From<WalletInstanceAttestationIosRequestRestDTO> for WalletInstanceAttestationRequestDTO {
    fn from(value: WalletInstanceAttestationIosRequestRestDTO) -> Self {
        Self {
            key: ClientKeyDTO::PlatformKeyAttestation {
                key_attestation: value.key_attestation.into(),
                challenge: value.challenge,
            },
            supported_signing_algorithms: value.supported_signing_algorithms,
            wallet_metadata: value.wallet_metadata,
        }
    }
}

impl From<WalletInstanceAttestationJwkRequestRestDTO> for WalletInstanceAttestationRequestDTO {
    fn from(value: WalletInstanceAttestationJwkRequestRestDTO) -> Self {
        Self {
            key: ClientKeyDTO::Jwk(value.jwk),
            supported_signing_algorithms: value.supported_signing_algorithms,
            wallet_metadata: value.wallet_metadata,
        }
    }
}

impl From<SignedJwt<WalletInstanceAttestationClaims>> for WalletInstanceAttestationResponseRestDTO {
    fn from(value: SignedJwt<WalletInstanceAttestationClaims>) -> Self {
        Self {
            wallet_instance_attestation: value.token,
        }
    }
}
