use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use wallet_provider_core::model::challenge::Challenge;
use wallet_provider_core::model::jwk::PublicJwk;

use crate::dto::common::{AndroidKeystoreAttestationRestDTO, IosAppAttestationRestDTO};

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct WalletUnitAttestationAndroidRequestRestDTO {
    pub key_attestations: Vec<AndroidKeystoreAttestationRestDTO>,
    #[schema(value_type = String)]
    pub challenge: Challenge,
    pub nonce: Option<String>,
    pub supported_signing_algorithms: Option<Vec<String>>,
    /// Requested validity in seconds
    pub preferred_ttl: Option<i64>,
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct WalletUnitAttestationIosRequestRestDTO {
    pub key_attestations: Vec<IosAppAttestationRestDTO>,
    #[schema(value_type = String)]
    pub challenge: Challenge,
    pub nonce: Option<String>,
    pub supported_signing_algorithms: Option<Vec<String>>,
    /// Requested validity in seconds
    pub preferred_ttl: Option<i64>,
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct WalletUnitAttestationJwkSetRequestRestDTO {
    pub jwk_set: JwkSetRequestRestDTO,
    pub nonce: Option<String>,
    pub supported_signing_algorithms: Option<Vec<String>>,
    /// Requested validity in seconds
    pub preferred_ttl: Option<i64>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct JwkSetRequestRestDTO {
    #[schema(value_type = Vec<Object>)]
    pub keys: Vec<PublicJwk>,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct WalletUnitAttestationResponseRestDTO {
    /// Compact JWS of type `key-attestation+jwt`
    pub wallet_unit_attestation: String,
}
