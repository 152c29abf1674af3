use time::{Duration, OffsetDateTime};
use x509_parser::certificate::X509Certificate;
use x509_parser::pem::parse_x509_pem;
use x509_parser::prelude::FromDer;

use crate::provider::key_attestation::VerificationFailure;

pub(super) struct ChainValidationOptions {
    pub at: OffsetDateTime,
    pub skew: Duration,
    pub leaf_validity_ignored: bool,
}

/// Parses PEM trust anchors into DER
pub(super) fn parse_trusted_roots(pems: &[String]) -> Result<Vec<Vec<u8>>, String> {
    pems.iter()
        .map(|pem| {
            let (_, pem) = parse_x509_pem(pem.as_bytes()).map_err(|err| err.to_string())?;
            X509Certificate::from_der(&pem.contents).map_err(|err| err.to_string())?;
            Ok(pem.contents)
        })
        .collect()
}

pub(super) fn parse_chain(chain: &[Vec<u8>]) -> Result<Vec<X509Certificate<'_>>, VerificationFailure> {
    if chain.is_empty() {
        return Err(VerificationFailure::new("Empty certificate chain"));
    }

    chain
        .iter()
        .map(|der| {
            X509Certificate::from_der(der)
                .map(|(_, certificate)| certificate)
                .map_err(|err| {
                    VerificationFailure::new("Failed to parse attestation certificate")
                        .with_cause(err)
                })
        })
        .collect()
}

/// Checks that every certificate is signed by its successor and that the chain
/// terminates in one of the trusted roots.
pub(super) fn validate_chain(
    chain: &[X509Certificate],
    trusted_roots: &[Vec<u8>],
    options: &ChainValidationOptions,
) -> Result<(), VerificationFailure> {
    for (index, certificate) in chain.iter().enumerate() {
        if index == 0 && options.leaf_validity_ignored {
            continue;
        }
        check_validity(certificate, options)?;
    }

    for (child, parent) in chain.iter().zip(chain.iter().skip(1)) {
        child
            .verify_signature(Some(parent.public_key()))
            .map_err(|err| {
                VerificationFailure::new("Invalid certificate chain signature").with_cause(err)
            })?;
    }

    let last = chain
        .last()
        .ok_or_else(|| VerificationFailure::new("Empty certificate chain"))?;

    let anchored = trusted_roots.iter().any(|root| {
        let Ok((_, root)) = X509Certificate::from_der(root) else {
            return false;
        };
        root.subject().as_raw() == last.issuer().as_raw()
            && last.verify_signature(Some(root.public_key())).is_ok()
    });

    if !anchored {
        return Err(VerificationFailure::new(
            "Certificate chain does not terminate in a trusted root",
        )
        .with_debug_info(serde_json::json!({ "issuer": last.issuer().to_string() })));
    }

    Ok(())
}

fn check_validity(
    certificate: &X509Certificate,
    options: &ChainValidationOptions,
) -> Result<(), VerificationFailure> {
    let validity = certificate.validity();
    let at = options.at.unix_timestamp();
    let skew = options.skew.whole_seconds();

    if at + skew < validity.not_before.timestamp() {
        return Err(VerificationFailure::new("Certificate not yet valid")
            .with_debug_info(serde_json::json!({ "subject": certificate.subject().to_string() })));
    }
    if at - skew > validity.not_after.timestamp() {
        return Err(VerificationFailure::new("Certificate expired")
            .with_debug_info(serde_json::json!({ "subject": certificate.subject().to_string() })));
    }
    Ok(())
}
