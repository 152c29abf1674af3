use time::Duration;
use wallet_provider_core::model::attestation::WalletUnitAttestationClaims;
use wallet_provider_core::proto::jwt::model::SignedJwt;
use wallet_provider_core::service::wallet_unit_attestation::dto::{
    WalletUnitAttestationRequestDTO, WalletUnitKeysDTO,
};

use super::dto::{
    WalletUnitAttestationAndroidRequestRestDTO, WalletUnitAttestationIosRequestRestDTO,
    WalletUnitAttestationJwkSetRequestRestDTO, WalletUnitAttestationResponseRestDTO,
};

impl From<WalletUnitAttestationAndroidRequestRestDTO> for WalletUnitAttestationRequestDTO {
    fn from(value: WalletUnitAttestationAndroidRequestRestDTO) -> Self {
        Self {
            keys: WalletUnitKeysDTO::PlatformKeyAttestations {
                key_attestations: value.key_attestations.into_iter().map(Into::into).collect(),
                challenge: value.challenge,
            },
            nonce: value.nonce,
            supported_signing_algorithms: value.supported_signing_algorithms,
            preferred_ttl: value.preferred_ttl.map(Duration::seconds),
        }
    }
}

impl From<WalletUnitAttestationIosRequestRestDTO> for WalletUnitAttestationRequestDTO {
    fn from(value: WalletUnitAttestationIosRequestRestDTO) -> Self {
        Self {
            keys: WalletUnitKeysDTO::PlatformKeyAttestations {
                key_attestations: value.key_attestations.into_iter().map(Into::into).collect(),
                challenge: value.challenge,
            },
            nonce: value.nonce,
            supported_signing_algorithms: value.supported_signing_algorithms,
            preferred_ttl: value.preferred_ttl.map(Duration::seconds),
        }
    }
}

impl From<WalletUnitAttestationJwkSetRequestRestDTO> for WalletUnitAttestationRequestDTO {
    fn from(value: WalletUnitAttestationJwkSetRequestRestDTO) -> Self {
        Self {
            keys: WalletUnitKeysDTO::JwkSet(value.jwk_set.keys),
            nonce: value.nonce,
            supported_signing_algorithms: value.supported_signing_algorithms,
            preferred_ttl: value.preferred_ttl.map(Duration::seconds),
        }
    }
}

impl From<SignedJwt<WalletUnitAttestationClaims>> for WalletUnitAttestationResponseRestDTO {
    fn from(value: SignedJwt<WalletUnitAttestationClaims>) -> Self {
        Self {
            wallet_unit_attestation: value.token,
        }
    }
}
