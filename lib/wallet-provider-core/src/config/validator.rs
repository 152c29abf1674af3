use ct_codecs::{Base64UrlSafeNoPadding, Decoder};
use time::Duration;
use x509_parser::pem::parse_x509_pem;

use super::ConfigValidationError;
use super::core_config::{
    ClientAttestationConfig, CoreConfig, PlatformKeyAttestationValidationConfig,
};

const MAX_CHALLENGE_VALIDITY: Duration = Duration::hours(24);
const MAX_CLIENT_ATTESTATION_VALIDITY: Duration = Duration::hours(24);
const MIN_WALLET_UNIT_VALIDITY: Duration = Duration::days(31);
const MAX_WALLET_UNIT_VALIDITY: Duration = Duration::days(3 * 366);

impl CoreConfig {
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        not_blank("clientId", &self.client_id)?;
        not_blank("issuer.name", &self.issuer.name)?;

        if self.challenge.length == 0 {
            return Err(ConfigValidationError::NotPositive("challenge.length"));
        }
        if !self.challenge.validity.is_positive() {
            return Err(ConfigValidationError::NotPositive("challenge.validity"));
        }
        if self.challenge.validity > MAX_CHALLENGE_VALIDITY {
            return Err(ConfigValidationError::TooLarge {
                field: "challenge.validity",
                max: MAX_CHALLENGE_VALIDITY.to_string(),
            });
        }

        validate_client_attestation(
            "walletInstanceAttestation.validity",
            &self.wallet_instance_attestation,
        )?;
        validate_client_attestation(
            "walletApplicationAttestation.validity",
            &self.wallet_application_attestation,
        )?;

        let unit = &self.wallet_unit_attestation;
        if unit.validity.minimum < MIN_WALLET_UNIT_VALIDITY {
            return Err(ConfigValidationError::TooSmall {
                field: "walletUnitAttestation.validity.minimum",
                min: MIN_WALLET_UNIT_VALIDITY.to_string(),
            });
        }
        if unit.validity.minimum >= unit.validity.maximum {
            return Err(ConfigValidationError::InvalidRange(
                "walletUnitAttestation.validity",
            ));
        }
        if unit.validity.maximum > MAX_WALLET_UNIT_VALIDITY {
            return Err(ConfigValidationError::TooLarge {
                field: "walletUnitAttestation.validity.maximum",
                max: MAX_WALLET_UNIT_VALIDITY.to_string(),
            });
        }
        if unit.key_storage.as_ref().is_some_and(Vec::is_empty) {
            return Err(ConfigValidationError::Empty("walletUnitAttestation.keyStorage"));
        }
        if unit.user_authentication.as_ref().is_some_and(Vec::is_empty) {
            return Err(ConfigValidationError::Empty(
                "walletUnitAttestation.userAuthentication",
            ));
        }

        let general = &self.wallet_information.general_information;
        not_blank("walletInformation.generalInformation.provider", &general.provider)?;
        not_blank("walletInformation.generalInformation.id", &general.id)?;
        not_blank("walletInformation.generalInformation.version", &general.version)?;
        if general.certification.is_blank() {
            return Err(ConfigValidationError::Blank(
                "walletInformation.generalInformation.certification",
            ));
        }
        if self
            .wallet_information
            .wallet_secure_cryptographic_device_information
            .certification
            .is_blank()
        {
            return Err(ConfigValidationError::Blank(
                "walletInformation.walletSecureCryptographicDeviceInformation.certification",
            ));
        }

        if let PlatformKeyAttestationValidationConfig::Enabled { android, ios } =
            &self.platform_key_attestation_validation
        {
            for root in android.trusted_roots.iter().chain(&ios.trusted_roots) {
                parse_x509_pem(root.as_bytes())
                    .map_err(|err| ConfigValidationError::InvalidTrustedRoot(err.to_string()))?;
            }

            for application in &android.applications {
                not_blank(
                    "platformKeyAttestationValidation.android.applications.packageName",
                    &application.package_name,
                )?;
                for digest in &application.signing_certificate_digests {
                    Base64UrlSafeNoPadding::decode_to_vec(digest.trim_end_matches('='), None)
                        .map_err(|_| ConfigValidationError::InvalidDigest(digest.to_owned()))?;
                }
            }

            for application in &ios.applications {
                not_blank(
                    "platformKeyAttestationValidation.ios.applications.team",
                    &application.team,
                )?;
                not_blank(
                    "platformKeyAttestationValidation.ios.applications.bundle",
                    &application.bundle,
                )?;
            }
        }

        Ok(())
    }
}

fn validate_client_attestation(
    field: &'static str,
    config: &ClientAttestationConfig,
) -> Result<(), ConfigValidationError> {
    if !config.validity.is_positive() {
        return Err(ConfigValidationError::NotPositive(field));
    }
    if config.validity > MAX_CLIENT_ATTESTATION_VALIDITY {
        return Err(ConfigValidationError::TooLarge {
            field,
            max: MAX_CLIENT_ATTESTATION_VALIDITY.to_string(),
        });
    }
    Ok(())
}

fn not_blank(field: &'static str, value: &str) -> Result<(), ConfigValidationError> {
    if value.trim().is_empty() {
        return Err(ConfigValidationError::Blank(field));
    }
    Ok(())
}
