use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use wallet_provider_core::model::challenge::Challenge;
use wallet_provider_core::model::jwk::PublicJwk;

use crate::dto::common::{AndroidKeystoreAttestationRestDTO, IosAppAttestationRestDTO};

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct WalletInstanceAttestationAndroidRequestRestDTO {
    pub key_attestation: AndroidKeystoreAttestationRestDTO,
    #[schema(value_type = String)]
    pub challenge: Challenge,
    pub supported_signing_algorithms: Option<Vec<String>>,
    #[schema(value_type = Option<Object>)]
    pub wallet_metadata: Option<serde_json::Value>,
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct WalletInstanceAttestationIosRequestRestDTO {
    pub key_attestation: IosAppAttestationRestDTO,
    #[schema(value_type = String)]
    pub challenge: Challenge,
    pub supported_signing_algorithms: Option<Vec<String>>,
    #[schema(value_type = Option<Object>)]
    pub wallet_metadata: Option<serde_json::Value>,
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct WalletInstanceAttestationJwkRequestRestDTO {
    #[schema(value_type = Object)]
    pub jwk: PublicJwk,
    pub supported_signing_algorithms: Option<Vec<String>>,
    #[schema(value_type = Option<Object>)]
    pub wallet_metadata: Option<serde_json::Value>,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct WalletInstanceAttestationResponseRestDTO {
    /// Compact JWS of type `oauth-client-attestation+jwt`
    pub wallet_instance_attestation: String,
}
