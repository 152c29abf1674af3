pub mod http_client;
pub mod key_algorithm;
pub mod key_attestation;
pub mod status_list;
