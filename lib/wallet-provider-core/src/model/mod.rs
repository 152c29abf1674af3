pub mod attestation;
pub mod challenge;
pub mod jwk;
