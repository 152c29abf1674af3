use std::marker::PhantomData;

use ct_codecs::{Base64UrlSafeNoPadding, Decoder, Encoder};
use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;
use wallet_provider_crypto::SignerError;

use self::model::{JwtHeader, SignedJwt};
use crate::error::{ErrorCode, ErrorCodeMixin};
use crate::provider::key_algorithm::{KeyAlgorithmError, SharedSigningMaterial, SigningAlgorithm};

pub mod model;


#[derive(Debug, Error)]
pub enum JwtError {
    #[error("JWT serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("JWT encoding failed: {0}")]
    Encoding(String),
    #[error("JWT signing failed: {0}")]
    Signing(#[from] SignerError),
    #[error("JWT key material failure: {0}")]
    KeyAlgorithm(#[from] KeyAlgorithmError),
    #[error("JWT timestamp out of range")]
    TimestampOutOfRange,
}

impl ErrorCodeMixin for JwtError {
    fn error_code(&self) -> ErrorCode {
        ErrorCode::InternalError
    }
}

#[derive(Debug, Error)]
pub enum JwtValidationFailure {
    #[error("Unparsable document: {0}")]
    UnparsableDocument(String),
    #[error("Invalid signature")]
    InvalidSignature,
    #[error("Unparsable payload: {0}")]
    UnparsablePayload(serde_json::Error),
}

/// Signs and validates compact JWS documents carrying claims of type `T`
///
/// The header references the signing key through `x5c` when a certificate
/// chain is configured, otherwise through `jwk`.
pub struct JwsSigner<T> {
    material: SharedSigningMaterial,
    r#type: String,
    payload: PhantomData<fn() -> T>,
}

impl<T> Clone for JwsSigner<T> {
    fn clone(&self) -> Self {
        Self {
            material: self.material.clone(),
            r#type: self.r#type.clone(),
            payload: PhantomData,
        }
    }
}

impl<T> JwsSigner<T>
where
    T: Serialize + DeserializeOwned,
{
    pub fn new(material: SharedSigningMaterial, r#type: impl Into<String>) -> Self {
        Self {
            material,
            r#type: r#type.into(),
            payload: PhantomData,
        }
    }

    pub fn algorithm(&self) -> SigningAlgorithm {
        self.material.algorithm()
    }

    pub fn sign(&self, claims: T) -> Result<SignedJwt<T>, JwtError> {
        let x5c = self.material.x5c()?;
        let header = JwtHeader {
            algorithm: self.algorithm().to_string(),
            r#type: Some(self.r#type.clone()),
            jwk: if x5c.is_empty() {
                Some(self.material.public_jwk()?)
            } else {
                None
            },
            x5c: if x5c.is_empty() { None } else { Some(x5c) },
        };

        let header_b64 = encode_b64url(&serde_json::to_vec(&header)?)?;
        let payload_b64 = encode_b64url(&serde_json::to_vec(&claims)?)?;
        let signing_input = format!("{header_b64}.{payload_b64}");

        let signature = self.material.sign(signing_input.as_bytes())?;
        let token = format!("{signing_input}.{}", encode_b64url(&signature)?);

        Ok(SignedJwt {
            header,
            payload: claims,
            signature,
            signing_input,
            token,
        })
    }

    pub fn validate(&self, token: &str) -> Result<SignedJwt<T>, JwtValidationFailure> {
        let mut parts = token.split('.');
        let (Some(header_b64), Some(payload_b64), Some(signature_b64), None) =
            (parts.next(), parts.next(), parts.next(), parts.next())
        else {
            return Err(JwtValidationFailure::UnparsableDocument(
                "expected three segments".to_string(),
            ));
        };

        let header: JwtHeader = serde_json::from_slice(&decode_b64url(header_b64)?)
            .map_err(|err| JwtValidationFailure::UnparsableDocument(err.to_string()))?;
        let payload = decode_b64url(payload_b64)?;
        let signature = decode_b64url(signature_b64)?;

        if header.algorithm != self.algorithm().to_string() {
            tracing::debug!(
                "JWT algorithm mismatch: expected {}, found {}",
                self.algorithm(),
                header.algorithm
            );
            return Err(JwtValidationFailure::InvalidSignature);
        }

        let signing_input = format!("{header_b64}.{payload_b64}");
        self.material
            .verify(signing_input.as_bytes(), &signature)
            .map_err(|_| JwtValidationFailure::InvalidSignature)?;

        let payload =
            serde_json::from_slice(&payload).map_err(JwtValidationFailure::UnparsablePayload)?;

        Ok(SignedJwt {
            header,
            payload,
            signature,
            signing_input,
            token: token.to_string(),
        })
    }
}

fn encode_b64url(bytes: &[u8]) -> Result<String, JwtError> {
    Base64UrlSafeNoPadding::encode_to_string(bytes).map_err(|err| JwtError::Encoding(err.to_string()))
}

fn decode_b64url(value: &str) -> Result<Vec<u8>, JwtValidationFailure> {
    Base64UrlSafeNoPadding::decode_to_vec(value, None)
        .map_err(|err| JwtValidationFailure::UnparsableDocument(err.to_string()))
}
