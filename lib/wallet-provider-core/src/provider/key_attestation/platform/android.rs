use ct_codecs::{Base64, Base64UrlSafeNoPadding, Decoder};
use serde_json::json;
use strum::Display;
use time::OffsetDateTime;
use x509_parser::certificate::X509Certificate;
use x509_parser::der_parser::ber::{BerObject, Tag};
use x509_parser::der_parser::error::BerError;
use x509_parser::der_parser::parse_der;

use super::x509::{ChainValidationOptions, parse_chain, validate_chain};
use crate::config::core_config::AndroidKeyAttestationConfig;
use crate::provider::key_attestation::{
    AndroidKeystoreAttestation, VerificationFailure, VerifiedAttestation,
};


// https://source.android.com/docs/security/features/keystore/attestation#attestation-extension
static ATTESTATION_EXTENSION_OID: &str = "1.3.6.1.4.1.11129.2.1.17";

const TAG_ROLLBACK_RESISTANCE: Tag = Tag(703);
const TAG_ROOT_OF_TRUST: Tag = Tag(704);
const TAG_ATTESTATION_APPLICATION_ID: Tag = Tag(709);

const VERIFIED_BOOT_STATE_VERIFIED: u32 = 0;

struct AndroidApplication {
    package_name: String,
    signing_certificate_digests: Vec<Vec<u8>>,
}

pub(super) struct AndroidKeyAttestationVerifier {
    config: AndroidKeyAttestationConfig,
    applications: Vec<AndroidApplication>,
    trusted_roots: Vec<Vec<u8>>,
}

impl AndroidKeyAttestationVerifier {
    pub fn new(
        config: AndroidKeyAttestationConfig,
        trusted_roots: Vec<Vec<u8>>,
    ) -> Result<Self, String> {
        let applications = config
            .applications
            .iter()
            .map(|application| {
                let signing_certificate_digests = application
                    .signing_certificate_digests
                    .iter()
                    .map(|digest| {
                        Base64UrlSafeNoPadding::decode_to_vec(digest.trim_end_matches('='), None)
                            .map_err(|err| format!("invalid digest `{digest}`: {err}"))
                    })
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(AndroidApplication {
                    package_name: application.package_name.clone(),
                    signing_certificate_digests,
                })
            })
            .collect::<Result<Vec<_>, String>>()?;

        Ok(Self {
            config,
            applications,
            trusted_roots,
        })
    }

    pub fn verify(
        &self,
        attestation: &AndroidKeystoreAttestation,
        nonce: &[u8],
        at: OffsetDateTime,
    ) -> Result<VerifiedAttestation, VerificationFailure> {
        let der_chain = attestation
            .certificate_chain
            .iter()
            .map(|certificate| {
                Base64::decode_to_vec(certificate, None).map_err(|err| {
                    VerificationFailure::new("Invalid base64 in certificate chain").with_cause(err)
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let chain = parse_chain(&der_chain)?;
        validate_chain(
            &chain,
            &self.trusted_roots,
            &ChainValidationOptions {
                at,
                skew: self.config.verification_skew,
                leaf_validity_ignored: self.config.leaf_certificate_validity_ignored,
            },
        )?;

        let leaf = chain
            .first()
            .ok_or_else(|| VerificationFailure::new("Empty certificate chain"))?;
        let description = find_key_description(leaf)?;

        self.check_security_level(description.keymaster_security_level)?;

        if description.attestation_challenge != nonce {
            return Err(VerificationFailure::new("Attestation challenge mismatch"));
        }

        let application = self.check_application(&description)?;

        if !self.config.unlocked_bootloader_allowed {
            match &description.root_of_trust {
                Some(root_of_trust)
                    if root_of_trust.device_locked
                        && root_of_trust.verified_boot_state == VERIFIED_BOOT_STATE_VERIFIED => {}
                Some(root_of_trust) => {
                    return Err(VerificationFailure::new("Device bootloader is unlocked")
                        .with_debug_info(json!({
                            "deviceLocked": root_of_trust.device_locked,
                            "verifiedBootState": root_of_trust.verified_boot_state,
                        })));
                }
                None => {
                    return Err(VerificationFailure::new("Missing root of trust"));
                }
            }
        }

        if self.config.rollback_resistance_required && !description.rollback_resistance {
            return Err(VerificationFailure::new("Key is not rollback resistant"));
        }

        Ok(VerifiedAttestation {
            public_key: leaf.public_key().raw.to_vec(),
            details: json!({
                "platform": "android",
                "securityLevel": description.keymaster_security_level.to_string(),
                "packageName": application,
            }),
        })
    }

    fn check_security_level(&self, level: SecurityLevel) -> Result<(), VerificationFailure> {
        let allowed = match level {
            SecurityLevel::Software => self.config.software_attestation_enabled,
            SecurityLevel::TrustedEnvironment | SecurityLevel::StrongBox => {
                self.config.hardware_attestation_enabled
            }
        };

        if !allowed || (self.config.strong_box_required && level != SecurityLevel::StrongBox) {
            return Err(VerificationFailure::new("Insufficient security level")
                .with_debug_info(json!({ "securityLevel": level.to_string() })));
        }
        Ok(())
    }

    fn check_application(
        &self,
        description: &KeyDescription,
    ) -> Result<String, VerificationFailure> {
        let application = self
            .applications
            .iter()
            .find(|application| application.package_name == description.package_name)
            .ok_or_else(|| {
                VerificationFailure::new("Application not allowed")
                    .with_debug_info(json!({ "packageName": description.package_name }))
            })?;

        let digests_allowed = description
            .signature_digests
            .iter()
            .all(|digest| application.signing_certificate_digests.contains(digest));
        if description.signature_digests.is_empty() || !digests_allowed {
            return Err(VerificationFailure::new("Invalid signing certificate digests")
                .with_debug_info(json!({
                    "digests": description
                        .signature_digests
                        .iter()
                        .map(hex::encode_upper)
                        .collect::<Vec<_>>(),
                })));
        }

        Ok(application.package_name.clone())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub(super) enum SecurityLevel {
    Software,
    TrustedEnvironment,
    StrongBox,
}

impl TryFrom<u32> for SecurityLevel {
    type Error = BerError;
    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Ok(match value {
            0 => SecurityLevel::Software,
            1 => SecurityLevel::TrustedEnvironment,
            2 => SecurityLevel::StrongBox,
            _ => return Err(BerError::BerValueError),
        })
    }
}

#[derive(Debug)]
pub(super) struct RootOfTrust {
    pub device_locked: bool,
    pub verified_boot_state: u32,
}

#[derive(Debug)]
pub(super) struct KeyDescription {
    pub keymaster_security_level: SecurityLevel,
    pub attestation_challenge: Vec<u8>,
    pub package_name: String,
    pub signature_digests: Vec<Vec<u8>>,
    pub root_of_trust: Option<RootOfTrust>,
    pub rollback_resistance: bool,
}

fn find_key_description(leaf: &X509Certificate) -> Result<KeyDescription, VerificationFailure> {
    let extension = leaf
        .extensions()
        .iter()
        .find(|extension| extension.oid.to_id_string() == ATTESTATION_EXTENSION_OID)
        .ok_or_else(|| {
            VerificationFailure::new(format!(
                "Failed to find mandatory attestation extension {ATTESTATION_EXTENSION_OID}"
            ))
        })?;

    parse_key_description(extension.value).map_err(|err| {
        VerificationFailure::new("Failed to decode attestation extension").with_cause(err)
    })
}

pub(super) fn parse_key_description(extension_data: &[u8]) -> Result<KeyDescription, BerError> {
    let (_, parsed_ext) = parse_der(extension_data)?;
    let key_description = parsed_ext.as_sequence()?;
    if key_description.len() != 8 {
        return Err(BerError::InvalidLength);
    }

    let element = |index: usize| key_description.get(index).ok_or(BerError::InvalidLength);

    let keymaster_security_level = element(3)?.as_u32()?.try_into()?;
    let attestation_challenge = element(4)?.as_slice()?.to_vec();

    let software_enforced = element(6)?.as_sequence()?;
    let hardware_enforced = element(7)?.as_sequence()?;

    let (package_name, signature_digests) = software_enforced
        .iter()
        .chain(hardware_enforced.iter())
        .find(|elem| elem.tag() == TAG_ATTESTATION_APPLICATION_ID)
        .ok_or(BerError::BerValueError)
        .and_then(parse_application_id)?;

    let root_of_trust = hardware_enforced
        .iter()
        .find(|elem| elem.tag() == TAG_ROOT_OF_TRUST)
        .map(parse_root_of_trust)
        .transpose()?;

    let rollback_resistance = hardware_enforced
        .iter()
        .any(|elem| elem.tag() == TAG_ROLLBACK_RESISTANCE);

    Ok(KeyDescription {
        keymaster_security_level,
        attestation_challenge,
        package_name,
        signature_digests,
        root_of_trust,
        rollback_resistance,
    })
}

fn parse_application_id(element: &BerObject) -> Result<(String, Vec<Vec<u8>>), BerError> {
    // Explicitly tagged octet string wrapping the DER encoded AttestationApplicationId
    let (_, app_id_octet_string) = parse_der(element.content.as_slice()?)?;
    let (_, parsed_app_id) = parse_der(app_id_octet_string.as_slice()?)?;

    // sequence of package_infos and signature_digests
    let app_id = parsed_app_id.as_sequence()?;
    if app_id.len() != 2 {
        return Err(BerError::InvalidLength);
    }

    // set of (package name, version) sequences, a single package is expected
    let package_infos = app_id.first().ok_or(BerError::InvalidLength)?.as_set()?;
    if package_infos.len() != 1 {
        return Err(BerError::InvalidLength);
    }

    let package_info = package_infos
        .first()
        .ok_or(BerError::InvalidLength)?
        .as_sequence()?;
    if package_info.len() != 2 {
        return Err(BerError::InvalidLength);
    }
    let package_name = String::from_utf8_lossy(
        package_info
            .first()
            .ok_or(BerError::InvalidLength)?
            .as_slice()?,
    )
    .into_owned();

    let signature_digests = app_id
        .get(1)
        .ok_or(BerError::InvalidLength)?
        .as_set()?
        .iter()
        .map(|digest| digest.as_slice().map(<[u8]>::to_vec))
        .collect::<Result<Vec<_>, _>>()?;

    Ok((package_name, signature_digests))
}

fn parse_root_of_trust(element: &BerObject) -> Result<RootOfTrust, BerError> {
    let (_, root_of_trust) = parse_der(element.content.as_slice()?)?;
    let root_of_trust = root_of_trust.as_sequence()?;
    if root_of_trust.len() < 3 {
        return Err(BerError::InvalidLength);
    }

    Ok(RootOfTrust {
        device_locked: root_of_trust[1].as_bool()?,
        verified_boot_state: root_of_trust[2].as_u32()?,
    })
}
