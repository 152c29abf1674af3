use std::any::type_name;

use ct_codecs::{Base64, Decoder};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::json;
use time::OffsetDateTime;
use wallet_provider_crypto::Hasher;
use wallet_provider_crypto::hasher::sha256::SHA256;
use x509_parser::certificate::X509Certificate;

use super::x509::{ChainValidationOptions, parse_chain, validate_chain};
use crate::config::core_config::{IosEnvironment, IosKeyAttestationConfig};
use crate::provider::key_attestation::{IosAppAttestation, VerificationFailure, VerifiedAttestation};


static CRED_CERT_EXTENSION_OID: &str = "1.2.840.113635.100.8.2";

static APPATTEST_DEVELOP: &[u8] = b"appattestdevelop";
static APPATTEST_PRODUCTION: &[u8] = b"appattest\0\0\0\0\0\0\0";

// rpIdHash (32) | flags (1) | counter (4) | aaguid (16) | credentialIdLength (2)
const AUTH_DATA_MIN_LENGTH: usize = 55;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Attestation {
    #[allow(unused)]
    fmt: String,
    #[serde(rename = "attStmt")]
    attestation_statement: AttestationStatement,
    auth_data: Vec<u8>,
}

#[derive(Debug, Deserialize)]
struct AttestationStatement {
    x5c: Vec<Vec<u8>>,
    #[allow(unused)]
    receipt: Vec<u8>,
}

struct IosApplication {
    app_id: String,
    app_id_hash: Vec<u8>,
    environment: IosEnvironment,
}

pub(super) struct IosAppAttestationVerifier {
    applications: Vec<IosApplication>,
    trusted_roots: Vec<Vec<u8>>,
    validity_skew: time::Duration,
}

impl IosAppAttestationVerifier {
    pub fn new(config: IosKeyAttestationConfig, trusted_roots: Vec<Vec<u8>>) -> Result<Self, String> {
        let applications = config
            .applications
            .iter()
            .map(|application| {
                let app_id = application.app_id();
                let app_id_hash = SHA256
                    .hash(app_id.as_bytes())
                    .map_err(|err| format!("failed to hash app id `{app_id}`: {err}"))?;
                Ok(IosApplication {
                    app_id,
                    app_id_hash,
                    environment: application.environment,
                })
            })
            .collect::<Result<Vec<_>, String>>()?;

        Ok(Self {
            applications,
            trusted_roots,
            validity_skew: config.attestation_statement_validity_skew,
        })
    }

    pub fn verify(
        &self,
        attestation: &IosAppAttestation,
        nonce: &[u8],
        at: OffsetDateTime,
    ) -> Result<VerifiedAttestation, VerificationFailure> {
        let attestation = decode_cbor_base64::<Attestation>(&attestation.attestation)?;
        let auth_data = &attestation.auth_data;

        if auth_data.len() < AUTH_DATA_MIN_LENGTH {
            return Err(VerificationFailure::new(format!(
                "Invalid auth data length: must be at least {AUTH_DATA_MIN_LENGTH} bytes but was only {} bytes",
                auth_data.len()
            )));
        }

        let chain = parse_chain(&attestation.attestation_statement.x5c)?;
        validate_chain(
            &chain,
            &self.trusted_roots,
            &ChainValidationOptions {
                at,
                skew: self.validity_skew,
                leaf_validity_ignored: false,
            },
        )?;
        let leaf = chain
            .first()
            .ok_or_else(|| VerificationFailure::new("Empty certificate chain"))?;

        validate_nonce(auth_data, nonce, leaf)?;

        // https://www.w3.org/TR/webauthn/#sctn-authenticator-data
        let rp_id_hash = &auth_data[..32];
        let application = self
            .applications
            .iter()
            .find(|application| application.app_id_hash == rp_id_hash)
            .ok_or_else(|| {
                VerificationFailure::new("App id mismatch")
                    .with_debug_info(json!({ "rpIdHash": hex::encode(rp_id_hash) }))
            })?;

        let counter = u32::from_be_bytes([auth_data[33], auth_data[34], auth_data[35], auth_data[36]]);
        if counter != 0 {
            return Err(VerificationFailure::new(format!(
                "Invalid signature counter: must be 0 but was {counter}"
            )));
        }

        let aaguid = &auth_data[37..53];
        let expected_aaguid = match application.environment {
            IosEnvironment::Production => APPATTEST_PRODUCTION,
            IosEnvironment::Sandbox => APPATTEST_DEVELOP,
        };
        if aaguid != expected_aaguid {
            return Err(VerificationFailure::new("Invalid AAGUID").with_debug_info(json!({
                "aaguid": String::from_utf8_lossy(aaguid).trim_end_matches('\0'),
                "environment": application.environment.to_string(),
            })));
        }

        let credential_id_length = u16::from_be_bytes([auth_data[53], auth_data[54]]) as usize;
        let credential_id = auth_data
            .get(AUTH_DATA_MIN_LENGTH..AUTH_DATA_MIN_LENGTH + credential_id_length)
            .ok_or_else(|| {
                VerificationFailure::new(format!(
                    "Invalid credential id length: {credential_id_length} bytes do not fit in auth data"
                ))
            })?;

        let common_name = leaf
            .subject()
            .iter_common_name()
            .next()
            .and_then(|cn| cn.as_str().ok())
            .ok_or_else(|| {
                VerificationFailure::new("Missing common name in attestation certificate")
            })?;
        let expected_credential_id = hex::decode(common_name).map_err(|err| {
            VerificationFailure::new("Failed to decode common name").with_cause(err)
        })?;
        if credential_id != expected_credential_id {
            return Err(VerificationFailure::new("Credential id mismatch"));
        }

        Ok(VerifiedAttestation {
            public_key: leaf.public_key().raw.to_vec(),
            details: json!({
                "platform": "ios",
                "environment": application.environment.to_string(),
                "appId": application.app_id,
            }),
        })
    }
}

fn validate_nonce(
    auth_data: &[u8],
    nonce: &[u8],
    leaf: &X509Certificate,
) -> Result<(), VerificationFailure> {
    let hash = |input: &[u8]| {
        SHA256
            .hash(input)
            .map_err(|err| VerificationFailure::new("Failed to hash").with_cause(err))
    };

    let client_data_hash = hash(nonce)?;
    let expected = hash(&[auth_data, client_data_hash.as_slice()].concat())?;

    let extension = leaf
        .extensions()
        .iter()
        .find(|extension| extension.oid.to_id_string() == CRED_CERT_EXTENSION_OID)
        .ok_or_else(|| {
            VerificationFailure::new(format!(
                "Failed to find mandatory cred cert extension {CRED_CERT_EXTENSION_OID}"
            ))
        })?;

    // DER encoded nested octet string, the last 32 bytes hold the nonce
    let value = extension.value;
    if value.len() < 32 {
        return Err(VerificationFailure::new(format!(
            "Unexpected payload of cred cert extension: {}",
            hex::encode(value)
        )));
    }
    if value[value.len() - 32..] != expected[..] {
        return Err(VerificationFailure::new("Nonce mismatch"));
    }
    Ok(())
}

fn decode_cbor_base64<T: DeserializeOwned>(s: &str) -> Result<T, VerificationFailure> {
    let bytes = Base64::decode_to_vec(s, None)
        .map_err(|err| VerificationFailure::new("Base64 decoding failed").with_cause(err))?;
    let type_name = type_name::<T>();
    ciborium::de::from_reader(&bytes[..]).map_err(|err| {
        VerificationFailure::new(format!("CBOR deserialization into `{type_name}` failed"))
            .with_cause(err)
    })
}
