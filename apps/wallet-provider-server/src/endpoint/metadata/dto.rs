use one_dto_mapper::From;
use serde::Serialize;
use utoipa::ToSchema;
use wallet_provider_core::model::jwk::PublicJwk;
use wallet_provider_core::service::metadata::dto::{JwkSetDTO, ProtectedResourceMetadataDTO};

#[derive(Debug, Serialize, From, ToSchema)]
#[from(JwkSetDTO)]
pub struct JwkSetRestDTO {
    #[schema(value_type = Vec<Object>)]
    pub keys: Vec<PublicJwk>,
}

#[derive(Debug, Serialize, From, ToSchema)]
#[from(ProtectedResourceMetadataDTO)]
pub struct ProtectedResourceMetadataRestDTO {
    pub resource: String,
    pub jwks_uri: String,
    pub resource_name: String,
    pub resource_signing_alg_values_supported: Vec<String>,
    pub client_attestation_signing_alg_values_supported: Vec<String>,
    pub proof_signing_alg_values_supported: Vec<String>,
}
