use crate::utils::api_clients::{HttpClient, Response};

pub struct MetadataApi {
    client: HttpClient,
}

impl MetadataApi {
    pub fn new(client: HttpClient) -> Self {
        Self { client }
    }

    pub async fn protected_resource(&self) -> Response {
        self.client
            .get("/.well-known/oauth-protected-resource")
            .await
    }

    pub async fn jwks(&self) -> Response {
        self.client.get("/jwks").await
    }

    pub async fn openapi(&self) -> Response {
        self.client.get("/api-docs/openapi.json").await
    }
}
