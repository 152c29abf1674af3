use super::MetadataService;
use super::dto::{JwkSetDTO, ProtectedResourceMetadataDTO};
use crate::provider::key_algorithm::KeyAlgorithmError;

impl MetadataService {
    /// Public key of the service, carrying the certificate chain when one is configured
    pub fn jwks(&self) -> Result<JwkSetDTO, KeyAlgorithmError> {
        let mut key = self.signing_material.public_jwk()?;
        let x5c = self.signing_material.x5c()?;
        if !x5c.is_empty() {
            key.metadata_mut().x5c = Some(x5c);
        }

        Ok(JwkSetDTO { keys: vec![key] })
    }

    pub fn protected_resource_metadata(&self) -> ProtectedResourceMetadataDTO {
        let resource = self.config.issuer.identifier();
        let algorithms = vec![self.signing_material.algorithm().to_string()];

        ProtectedResourceMetadataDTO {
            jwks_uri: format!("{resource}/jwks"),
            resource,
            resource_name: self.config.issuer.name.to_owned(),
            resource_signing_alg_values_supported: algorithms.clone(),
            client_attestation_signing_alg_values_supported: algorithms.clone(),
            proof_signing_alg_values_supported: algorithms,
        }
    }
}
