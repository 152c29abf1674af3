use std::sync::OnceLock;

use serde::de::DeserializeOwned;
use serde_json::Value;

use self::challenge::ChallengeApi;
use self::metadata::MetadataApi;
use self::wallet_attestations::WalletAttestationsApi;

pub mod challenge;
pub mod metadata;
pub mod wallet_attestations;

pub fn http_client() -> &'static reqwest::Client {
    static CLIENT: OnceLock<reqwest::Client> = OnceLock::new();
    CLIENT.get_or_init(|| reqwest::ClientBuilder::new().build().unwrap())
}

#[derive(Clone)]
pub struct HttpClient {
    base_url: String,
}

impl HttpClient {
    pub async fn get(&self, url: &str) -> Response {
        let url = format!("{}{url}", self.base_url);

        let resp = http_client().get(url).send().await.unwrap();

        Response { resp }
    }

    pub async fn post(&self, url: &str, body: impl Into<Option<Value>>) -> Response {
        let url = format!("{}{url}", self.base_url);

        let mut request = http_client().post(url);
        if let Some(body) = body.into() {
            request = request.json(&body);
        }
        let resp = request.send().await.unwrap();

        Response { resp }
    }
}

pub struct Response {
    resp: reqwest::Response,
}

impl Response {
    pub fn status(&self) -> u16 {
        self.resp.status().into()
    }

    pub async fn json<T: DeserializeOwned>(self) -> T {
        let full = self.resp.bytes().await.unwrap();
        serde_json::from_slice(&full).unwrap()
    }

    pub async fn json_value(self) -> Value {
        self.json().await
    }
}

pub struct Client {
    pub challenge: ChallengeApi,
    pub metadata: MetadataApi,
    pub wallet_instance_attestations: WalletAttestationsApi,
    pub wallet_application_attestations: WalletAttestationsApi,
    pub wallet_unit_attestations: WalletAttestationsApi,
}

impl Client {
    pub fn new(base_url: String) -> Self {
        let client = HttpClient { base_url };

        Self {
            challenge: ChallengeApi::new(client.clone()),
            metadata: MetadataApi::new(client.clone()),
            wallet_instance_attestations: WalletAttestationsApi::new(
                client.clone(),
                "/wallet-instance-attestation",
            ),
            wallet_application_attestations: WalletAttestationsApi::new(
                client.clone(),
                "/wallet-application-attestation",
            ),
            wallet_unit_attestations: WalletAttestationsApi::new(
                client,
                "/wallet-unit-attestation",
            ),
        }
    }
}
