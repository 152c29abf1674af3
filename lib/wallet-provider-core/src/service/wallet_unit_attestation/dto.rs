use time::Duration;

use crate::model::challenge::Challenge;
use crate::model::jwk::PublicJwk;
use crate::provider::key_attestation::KeyAttestation;

#[derive(Debug, Clone, PartialEq)]
pub enum WalletUnitKeysDTO {
    PlatformKeyAttestations {
        key_attestations: Vec<KeyAttestation>,
        challenge: Challenge,
    },
    JwkSet(Vec<PublicJwk>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct WalletUnitAttestationRequestDTO {
    pub keys: WalletUnitKeysDTO,
    pub nonce: Option<String>,
    pub supported_signing_algorithms: Option<Vec<String>>,
    pub preferred_ttl: Option<Duration>,
}
