pub mod challenge;
pub mod common;
pub mod metadata;
pub mod wallet_application_attestation;
pub mod wallet_instance_attestation;
pub mod wallet_unit_attestation;

#[cfg(test)]
pub(crate) mod test_utilities;
