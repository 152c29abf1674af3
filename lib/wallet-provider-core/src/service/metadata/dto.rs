use crate::model::jwk::PublicJwk;

#[derive(Debug, Clone, PartialEq)]
pub struct JwkSetDTO {
    pub keys: Vec<PublicJwk>,
}

/// <https://www.rfc-editor.org/rfc/rfc9728.html#section-2>
#[derive(Debug, Clone, PartialEq)]
pub struct ProtectedResourceMetadataDTO {
    pub resource: String,
    pub jwks_uri: String,
    pub resource_name: String,
    pub resource_signing_alg_values_supported: Vec<String>,
    pub client_attestation_signing_alg_values_supported: Vec<String>,
    pub proof_signing_alg_values_supported: Vec<String>,
}
