use crate::utils::api_clients::{HttpClient, Response};

pub struct ChallengeApi {
    client: HttpClient,
}

impl ChallengeApi {
    pub fn new(client: HttpClient) -> Self {
        Self { client }
    }

    pub async fn generate(&self) -> Response {
        self.client.post("/challenge", None).await
    }

    /// Requests a challenge and returns its wire encoding
    pub async fn generate_value(&self) -> String {
        let resp = self.generate().await;
        assert_eq!(resp.status(), 200);
        let body = resp.json_value().await;
        body["challenge"].as_str().unwrap().to_owned()
    }
}
