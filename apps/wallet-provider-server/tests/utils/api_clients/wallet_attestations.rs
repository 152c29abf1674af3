use serde_json::Value;

use crate::utils::api_clients::{HttpClient, Response};

/// Issuance endpoints of one attestation kind, all sharing a path prefix
pub struct WalletAttestationsApi {
    client: HttpClient,
    prefix: &'static str,
}

impl WalletAttestationsApi {
    pub fn new(client: HttpClient, prefix: &'static str) -> Self {
        Self { client, prefix }
    }

    pub async fn android(&self, body: Value) -> Response {
        self.post("/platform-key-attestation/android", body).await
    }

    pub async fn ios(&self, body: Value) -> Response {
        self.post("/platform-key-attestation/ios", body).await
    }

    pub async fn jwk(&self, body: Value) -> Response {
        self.post("/jwk", body).await
    }

    pub async fn jwk_set(&self, body: Value) -> Response {
        self.post("/jwk-set", body).await
    }

    async fn post(&self, path: &str, body: Value) -> Response {
        self.client
            .post(&format!("{}{path}", self.prefix), body)
            .await
    }
}
