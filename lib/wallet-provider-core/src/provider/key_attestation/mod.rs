use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::challenge::Challenge;
use crate::model::jwk::PublicJwk;

pub mod disabled;
pub mod platform;
pub mod validator;

/// Platform evidence that a key lives in a genuine device keystore
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyAttestation {
    Android(AndroidKeystoreAttestation),
    Ios(IosAppAttestation),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AndroidKeystoreAttestation {
    /// Standard base64 DER certificates, leaf first
    #[serde(rename = "x5c")]
    pub certificate_chain: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IosAppAttestation {
    /// Standard base64 CBOR App Attest attestation object
    pub attestation: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AttestedKey {
    pub public_key: PublicJwk,
    pub details: serde_json::Value,
}

/// Successful platform verification
#[derive(Debug, Clone, PartialEq)]
pub struct VerifiedAttestation {
    /// DER SubjectPublicKeyInfo of the attested key
    pub public_key: Vec<u8>,
    pub details: serde_json::Value,
}

#[derive(Debug, Clone, PartialEq)]
pub struct VerificationFailure {
    pub explanation: String,
    pub debug_info: Option<serde_json::Value>,
    pub cause: Option<String>,
}

impl VerificationFailure {
    pub fn new(explanation: impl Into<String>) -> Self {
        Self {
            explanation: explanation.into(),
            debug_info: None,
            cause: None,
        }
    }

    pub fn with_cause(mut self, cause: impl ToString) -> Self {
        self.cause = Some(cause.to_string());
        self
    }

    pub fn with_debug_info(mut self, debug_info: serde_json::Value) -> Self {
        self.debug_info = Some(debug_info);
        self
    }
}

/// Platform specific verification of key attestation evidence against a nonce
#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
#[async_trait::async_trait]
pub trait KeyAttestationVerifier: Send + Sync {
    async fn verify(
        &self,
        attestation: &KeyAttestation,
        nonce: &[u8],
    ) -> Result<VerifiedAttestation, VerificationFailure>;
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KeyAttestationValidationFailure {
    #[error("{message}")]
    InvalidKeyAttestation {
        message: String,
        cause: Option<String>,
    },
    #[error("{message}")]
    UnsupportedAttestedKey {
        message: String,
        cause: Option<String>,
    },
}

#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
#[async_trait::async_trait]
pub trait KeyAttestationValidator: Send + Sync {
    async fn validate(
        &self,
        attestation: &KeyAttestation,
        challenge: &Challenge,
    ) -> Result<AttestedKey, KeyAttestationValidationFailure>;
}
