use std::path::Path;

use wallet_provider_crypto::signer::es256::ES256Signer;
use wallet_provider_crypto::signer::es384::ES384Signer;
use x509_parser::pem::Pem;
use x509_parser::prelude::{FromDer, X509Certificate};

use super::{KeyAlgorithmError, SigningAlgorithm, SigningMaterial};
use crate::config::core_config::SigningKeyConfig;

pub async fn load_signing_material(
    config: &SigningKeyConfig,
) -> Result<SigningMaterial, KeyAlgorithmError> {
    match config {
        SigningKeyConfig::GenerateRandom => {
            tracing::warn!("Using a randomly generated signing key, issued attestations will not verify after restart");
            Ok(SigningMaterial::generate(SigningAlgorithm::Es256))
        }
        SigningKeyConfig::LoadFromFile {
            private_key_file,
            certificate_chain_file,
            algorithm,
        } => {
            let private_key_pem = read_to_string(private_key_file).await?;
            let certificate_chain = match certificate_chain_file {
                Some(path) => parse_pem_chain(read_to_string(path).await?.as_bytes())?,
                None => vec![],
            };
            signing_material_from_pem(*algorithm, &private_key_pem, certificate_chain)
        }
    }
}

pub(crate) fn signing_material_from_pem(
    algorithm: SigningAlgorithm,
    private_key_pem: &str,
    certificate_chain: Vec<Vec<u8>>,
) -> Result<SigningMaterial, KeyAlgorithmError> {
    let (private_key, public_key) = match algorithm {
        SigningAlgorithm::Es256 => ES256Signer::parse_private_key_pem(private_key_pem),
        SigningAlgorithm::Es384 => ES384Signer::parse_private_key_pem(private_key_pem),
    }
    .map_err(KeyAlgorithmError::InvalidPrivateKey)?;

    let certificate_chain = trim_self_signed_root(certificate_chain)?;

    if let Some(leaf) = certificate_chain.first() {
        let (_, leaf) = X509Certificate::from_der(leaf)
            .map_err(|err| KeyAlgorithmError::InvalidCertificateChain(err.to_string()))?;
        let leaf_public_key = match algorithm {
            SigningAlgorithm::Es256 => ES256Signer::parse_public_key_der(leaf.public_key().raw),
            SigningAlgorithm::Es384 => ES384Signer::parse_public_key_der(leaf.public_key().raw),
        }
        .map_err(|_| KeyAlgorithmError::CertificateKeyMismatch)?;

        if leaf_public_key != public_key {
            return Err(KeyAlgorithmError::CertificateKeyMismatch);
        }
    }

    tracing::info!(
        "Loaded {algorithm} signing key with {} certificate(s)",
        certificate_chain.len()
    );
    Ok(SigningMaterial::new(
        algorithm,
        public_key,
        private_key,
        certificate_chain,
    ))
}

/// Parses concatenated PEM certificates into DER, preserving order
pub(crate) fn parse_pem_chain(pem: &[u8]) -> Result<Vec<Vec<u8>>, KeyAlgorithmError> {
    let chain = Pem::iter_from_buffer(pem)
        .map(|pem| {
            let pem =
                pem.map_err(|err| KeyAlgorithmError::InvalidCertificateChain(err.to_string()))?;
            if pem.label != "CERTIFICATE" {
                return Err(KeyAlgorithmError::InvalidCertificateChain(format!(
                    "unexpected PEM block `{}`",
                    pem.label
                )));
            }
            Ok(pem.contents)
        })
        .collect::<Result<Vec<_>, _>>()?;

    if chain.is_empty() {
        return Err(KeyAlgorithmError::InvalidCertificateChain(
            "no certificates found".to_string(),
        ));
    }
    Ok(chain)
}

/// Drops a self-signed trust anchor from the end of a chain of more than one certificate
pub(crate) fn trim_self_signed_root(
    mut chain: Vec<Vec<u8>>,
) -> Result<Vec<Vec<u8>>, KeyAlgorithmError> {
    if chain.len() < 2 {
        return Ok(chain);
    }

    let self_signed = match chain.last() {
        Some(last) => {
            let (_, certificate) = X509Certificate::from_der(last)
                .map_err(|err| KeyAlgorithmError::InvalidCertificateChain(err.to_string()))?;
            certificate.issuer().as_raw() == certificate.subject().as_raw()
        }
        None => false,
    };

    if self_signed {
        chain.pop();
    }
    Ok(chain)
}

async fn read_to_string(path: &Path) -> Result<String, KeyAlgorithmError> {
    tokio::fs::read_to_string(path)
        .await
        .map_err(|source| KeyAlgorithmError::Io {
            path: path.display().to_string(),
            source,
        })
}
