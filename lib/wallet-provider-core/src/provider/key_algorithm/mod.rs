use std::sync::Arc;

use ct_codecs::{Base64, Base64UrlSafeNoPadding, Encoder};
use secrecy::SecretSlice;
use serde::{Deserialize, Serialize};
use strum::Display;
use thiserror::Error;
use wallet_provider_crypto::signer::es256::ES256Signer;
use wallet_provider_crypto::signer::es384::ES384Signer;
use wallet_provider_crypto::{Signer, SignerError};

use crate::error::{ErrorCode, ErrorCodeMixin};
use crate::model::jwk::{JwkMetadata, PublicJwk, PublicJwkEc};

pub mod loader;


#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
pub enum SigningAlgorithm {
    #[serde(rename = "ES256")]
    #[strum(serialize = "ES256")]
    Es256,
    #[serde(rename = "ES384")]
    #[strum(serialize = "ES384")]
    Es384,
}

impl SigningAlgorithm {
    pub fn curve(&self) -> &'static str {
        match self {
            SigningAlgorithm::Es256 => "P-256",
            SigningAlgorithm::Es384 => "P-384",
        }
    }

    fn signer(&self) -> &'static dyn Signer {
        match self {
            SigningAlgorithm::Es256 => &ES256Signer {},
            SigningAlgorithm::Es384 => &ES384Signer {},
        }
    }

    fn public_key_coordinates(&self, public_key: &[u8]) -> Result<(Vec<u8>, Vec<u8>), SignerError> {
        match self {
            SigningAlgorithm::Es256 => ES256Signer::public_key_coordinates(public_key),
            SigningAlgorithm::Es384 => ES384Signer::public_key_coordinates(public_key),
        }
    }
}

#[derive(Debug, Error)]
pub enum KeyAlgorithmError {
    #[error("Failed to read `{path}`: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("Invalid private key: {0}")]
    InvalidPrivateKey(SignerError),
    #[error("Invalid certificate chain: {0}")]
    InvalidCertificateChain(String),
    #[error("Certificate does not match the signing key")]
    CertificateKeyMismatch,
    #[error("Unsupported public key: {0}")]
    UnsupportedPublicKey(String),
    #[error("Encoding failure: {0}")]
    Encoding(String),
}

impl ErrorCodeMixin for KeyAlgorithmError {
    fn error_code(&self) -> ErrorCode {
        ErrorCode::InternalError
    }
}

/// Private signing key of the service with its optional certificate chain
pub struct SigningMaterial {
    algorithm: SigningAlgorithm,
    public_key: Vec<u8>,
    private_key: SecretSlice<u8>,
    certificate_chain: Vec<Vec<u8>>,
}

impl SigningMaterial {
    pub fn new(
        algorithm: SigningAlgorithm,
        public_key: Vec<u8>,
        private_key: SecretSlice<u8>,
        certificate_chain: Vec<Vec<u8>>,
    ) -> Self {
        Self {
            algorithm,
            public_key,
            private_key,
            certificate_chain,
        }
    }

    pub fn generate(algorithm: SigningAlgorithm) -> Self {
        let (private_key, public_key) = match algorithm {
            SigningAlgorithm::Es256 => ES256Signer::generate_key_pair(),
            SigningAlgorithm::Es384 => ES384Signer::generate_key_pair(),
        };
        Self::new(algorithm, public_key, private_key, vec![])
    }

    pub fn algorithm(&self) -> SigningAlgorithm {
        self.algorithm
    }

    /// SEC1 uncompressed public key
    pub fn public_key(&self) -> &[u8] {
        &self.public_key
    }

    /// DER certificates, leaf first
    pub fn certificate_chain(&self) -> &[Vec<u8>] {
        &self.certificate_chain
    }

    pub fn x5c(&self) -> Result<Vec<String>, KeyAlgorithmError> {
        self.certificate_chain
            .iter()
            .map(|der| {
                Base64::encode_to_string(der)
                    .map_err(|err| KeyAlgorithmError::Encoding(err.to_string()))
            })
            .collect()
    }

    pub fn sign(&self, input: &[u8]) -> Result<Vec<u8>, SignerError> {
        self.algorithm
            .signer()
            .sign(input, &self.public_key, &self.private_key)
    }

    pub fn verify(&self, input: &[u8], signature: &[u8]) -> Result<(), SignerError> {
        self.algorithm
            .signer()
            .verify(input, signature, &self.public_key)
    }

    pub fn public_jwk(&self) -> Result<PublicJwk, KeyAlgorithmError> {
        let (x, y) = self
            .algorithm
            .public_key_coordinates(&self.public_key)
            .map_err(|err| KeyAlgorithmError::UnsupportedPublicKey(err.to_string()))?;
        ec_jwk(self.algorithm.curve(), &x, &y)
    }
}

pub type SharedSigningMaterial = Arc<SigningMaterial>;

/// Converts a DER SubjectPublicKeyInfo into a public JWK
///
/// Only the NIST P-256 and P-384 curves are recognized.
pub fn public_jwk_from_spki(spki: &[u8]) -> Result<PublicJwk, KeyAlgorithmError> {
    if let Ok(public_key) = ES256Signer::parse_public_key_der(spki) {
        let (x, y) = ES256Signer::public_key_coordinates(&public_key)
            .map_err(|err| KeyAlgorithmError::UnsupportedPublicKey(err.to_string()))?;
        return ec_jwk(SigningAlgorithm::Es256.curve(), &x, &y);
    }

    match ES384Signer::parse_public_key_der(spki) {
        Ok(public_key) => {
            let (x, y) = ES384Signer::public_key_coordinates(&public_key)
                .map_err(|err| KeyAlgorithmError::UnsupportedPublicKey(err.to_string()))?;
            ec_jwk(SigningAlgorithm::Es384.curve(), &x, &y)
        }
        Err(err) => Err(KeyAlgorithmError::UnsupportedPublicKey(err.to_string())),
    }
}

fn ec_jwk(crv: &str, x: &[u8], y: &[u8]) -> Result<PublicJwk, KeyAlgorithmError> {
    Ok(PublicJwk::Ec(PublicJwkEc {
        crv: crv.to_string(),
        x: Base64UrlSafeNoPadding::encode_to_string(x)
            .map_err(|err| KeyAlgorithmError::Encoding(err.to_string()))?,
        y: Base64UrlSafeNoPadding::encode_to_string(y)
            .map_err(|err| KeyAlgorithmError::Encoding(err.to_string()))?,
        metadata: JwkMetadata::default(),
    }))
}
