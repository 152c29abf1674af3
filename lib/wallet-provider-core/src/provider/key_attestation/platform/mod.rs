//! Verification of Android Keystore and iOS App Attest evidence

use std::sync::Arc;

use thiserror::Error;

use self::android::AndroidKeyAttestationVerifier;
use self::ios::IosAppAttestationVerifier;
use self::x509::parse_trusted_roots;
use super::{KeyAttestation, KeyAttestationVerifier, VerificationFailure, VerifiedAttestation};
use crate::config::core_config::{AndroidKeyAttestationConfig, IosKeyAttestationConfig};
use crate::util::clock::Clock;

mod android;
mod ios;
mod x509;


#[derive(Debug, Error)]
pub enum PlatformVerifierInitError {
    #[error("Invalid Android key attestation configuration: {0}")]
    Android(String),
    #[error("Invalid iOS app attestation configuration: {0}")]
    Ios(String),
}

pub struct PlatformKeyAttestationVerifier {
    android: AndroidKeyAttestationVerifier,
    ios: IosAppAttestationVerifier,
    clock: Arc<dyn Clock>,
}

impl PlatformKeyAttestationVerifier {
    pub fn new(
        android: AndroidKeyAttestationConfig,
        ios: IosKeyAttestationConfig,
        clock: Arc<dyn Clock>,
    ) -> Result<Self, PlatformVerifierInitError> {
        let android_roots =
            parse_trusted_roots(&android.trusted_roots).map_err(PlatformVerifierInitError::Android)?;
        let ios_roots =
            parse_trusted_roots(&ios.trusted_roots).map_err(PlatformVerifierInitError::Ios)?;

        tracing::info!(
            "Platform key attestation enabled for {} Android and {} iOS applications",
            android.applications.len(),
            ios.applications.len()
        );

        Ok(Self {
            android: AndroidKeyAttestationVerifier::new(android, android_roots)
                .map_err(PlatformVerifierInitError::Android)?,
            ios: IosAppAttestationVerifier::new(ios, ios_roots)
                .map_err(PlatformVerifierInitError::Ios)?,
            clock,
        })
    }
}

#[async_trait::async_trait]
impl KeyAttestationVerifier for PlatformKeyAttestationVerifier {
    async fn verify(
        &self,
        attestation: &KeyAttestation,
        nonce: &[u8],
    ) -> Result<VerifiedAttestation, VerificationFailure> {
        let now = self.clock.now_utc();
        match attestation {
            KeyAttestation::Android(attestation) => self.android.verify(attestation, nonce, now),
            KeyAttestation::Ios(attestation) => self.ios.verify(attestation, nonce, now),
        }
    }
}
