use p256::ecdsa::signature::{Signer as _, Verifier as _};
use p256::ecdsa::{Signature, SigningKey, VerifyingKey};
use p256::elliptic_curve::sec1::ToEncodedPoint;
use p256::pkcs8::{DecodePrivateKey, DecodePublicKey};
use p256::{EncodedPoint, FieldBytes};
use secrecy::{ExposeSecret, SecretSlice};

use crate::utilities::get_rng;
use crate::{Signer, SignerError};


const COORDINATE_LENGTH: usize = 32;

pub struct ES256Signer {}

impl ES256Signer {
    pub fn generate_key_pair() -> (SecretSlice<u8>, Vec<u8>) {
        let signing_key = SigningKey::random(&mut get_rng());
        let public_key = signing_key
            .verifying_key()
            .to_encoded_point(false)
            .as_bytes()
            .to_vec();

        (signing_key.to_bytes().to_vec().into(), public_key)
    }

    /// Parses a PKCS#8 PEM private key, returns the raw scalar and the SEC1 uncompressed public key
    pub fn parse_private_key_pem(pem: &str) -> Result<(SecretSlice<u8>, Vec<u8>), SignerError> {
        let signing_key =
            SigningKey::from_pkcs8_pem(pem).map_err(|_| SignerError::CouldNotExtractKeyPair)?;
        let public_key = signing_key
            .verifying_key()
            .to_encoded_point(false)
            .as_bytes()
            .to_vec();

        Ok((signing_key.to_bytes().to_vec().into(), public_key))
    }

    /// SubjectPublicKeyInfo DER into SEC1 uncompressed point
    pub fn parse_public_key_der(public_key_der: &[u8]) -> Result<Vec<u8>, SignerError> {
        let key = VerifyingKey::from_public_key_der(public_key_der)
            .map_err(|e| SignerError::CouldNotExtractPublicKey(e.to_string()))?;
        Ok(key.to_encoded_point(false).as_bytes().to_vec())
    }

    pub fn parse_public_key_coordinates(x: &[u8], y: &[u8]) -> Result<Vec<u8>, SignerError> {
        if x.len() != COORDINATE_LENGTH || y.len() != COORDINATE_LENGTH {
            return Err(SignerError::CouldNotExtractPublicKey(format!(
                "invalid P-256 coordinate length: x={}, y={}",
                x.len(),
                y.len()
            )));
        }

        let point = EncodedPoint::from_affine_coordinates(
            FieldBytes::from_slice(x),
            FieldBytes::from_slice(y),
            false,
        );
        let key = VerifyingKey::from_encoded_point(&point)
            .map_err(|e| SignerError::CouldNotExtractPublicKey(e.to_string()))?;
        Ok(key.to_encoded_point(false).as_bytes().to_vec())
    }

    pub fn public_key_coordinates(public_key: &[u8]) -> Result<(Vec<u8>, Vec<u8>), SignerError> {
        let key = VerifyingKey::from_sec1_bytes(public_key)
            .map_err(|e| SignerError::CouldNotExtractPublicKey(e.to_string()))?;
        let point = key.to_encoded_point(false);
        let x = point
            .x()
            .ok_or(SignerError::CouldNotExtractPublicKey("X is missing".to_string()))?;
        let y = point
            .y()
            .ok_or(SignerError::CouldNotExtractPublicKey("Y is missing".to_string()))?;
        Ok((x.to_vec(), y.to_vec()))
    }
}

impl Signer for ES256Signer {
    fn sign(
        &self,
        input: &[u8],
        public_key: &[u8],
        private_key: &SecretSlice<u8>,
    ) -> Result<Vec<u8>, SignerError> {
        let signing_key = SigningKey::from_slice(private_key.expose_secret())
            .map_err(|_| SignerError::CouldNotExtractKeyPair)?;

        if signing_key.verifying_key().to_encoded_point(false).as_bytes() != public_key {
            return Err(SignerError::CouldNotExtractKeyPair);
        }

        let signature: Signature = signing_key
            .try_sign(input)
            .map_err(|_| SignerError::CouldNotSign)?;
        Ok(signature.to_bytes().to_vec())
    }

    fn verify(
        &self,
        input: &[u8],
        signature: &[u8],
        public_key: &[u8],
    ) -> Result<(), SignerError> {
        let verifying_key = VerifyingKey::from_sec1_bytes(public_key)
            .map_err(|e| SignerError::CouldNotExtractPublicKey(e.to_string()))?;
        let signature =
            Signature::from_slice(signature).map_err(|_| SignerError::InvalidSignature)?;

        verifying_key
            .verify(input, &signature)
            .map_err(|_| SignerError::InvalidSignature)
    }
}
