use crate::service::common::ClientKeyDTO;

#[derive(Debug, Clone, PartialEq)]
pub struct WalletApplicationAttestationRequestDTO {
    pub key: ClientKeyDTO,
    pub supported_signing_algorithms: Option<Vec<String>>,
}
