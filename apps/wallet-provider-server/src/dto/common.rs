use serde::Deserialize;
use utoipa::ToSchema;
use wallet_provider_core::provider::key_attestation::{
    AndroidKeystoreAttestation, IosAppAttestation, KeyAttestation,
};

/// Android Keystore attestation certificate chain
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct AndroidKeystoreAttestationRestDTO {
    /// Standard base64 DER certificates, leaf first
    pub x5c: Vec<String>,
}

/// iOS App Attest attestation object
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct IosAppAttestationRestDTO {
    /// Standard base64 CBOR attestation object
    pub attestation: String,
}

impl From<AndroidKeystoreAttestationRestDTO> for KeyAttestation {
    fn from(value: AndroidKeystoreAttestationRestDTO) -> Self {
        KeyAttestation::Android(AndroidKeystoreAttestation {
            certificate_chain: value.x5c,
        })
    }
}

impl From<IosAppAttestationRestDTO> for KeyAttestation {
    fn from(value: IosAppAttestationRestDTO) -> Self {
        KeyAttestation::Ios(IosAppAttestation {
            attestation: value.attestation,
        })
    }
}
