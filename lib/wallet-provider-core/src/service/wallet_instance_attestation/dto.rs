use crate::service::common::ClientKeyDTO;

#[derive(Debug, Clone, PartialEq)]
pub struct WalletInstanceAttestationRequestDTO {
    pub key: ClientKeyDTO,
    pub supported_signing_algorithms: Option<Vec<String>>,
    pub wallet_metadata: Option<serde_json::Value>,
}
