use std::sync::Arc;

use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;
use time::OffsetDateTime;
use time::macros::format_description;
use url::Url;

use super::{StatusListError, StatusListTokenProvider};
use crate::model::attestation::{KEY_ATTESTATION_TYPE, Status};
use crate::provider::http_client::HttpClient;
use crate::util::clock::Clock;


const COUNTRY: &str = "FC";

#[derive(Serialize)]
struct GenerateStatusListTokenRequest<'a> {
    country: &'a str,
    doctype: &'a str,
    expiry_date: String,
}

/// Client of the token status list service
pub struct TokenStatusListService {
    client: Arc<dyn HttpClient>,
    service_url: Url,
    api_key: SecretString,
    clock: Arc<dyn Clock>,
}

impl TokenStatusListService {
    pub fn new(
        client: Arc<dyn HttpClient>,
        service_url: Url,
        api_key: SecretString,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            client,
            service_url,
            api_key,
            clock,
        }
    }
}

#[async_trait::async_trait]
impl StatusListTokenProvider for TokenStatusListService {
    async fn generate(&self, expires_at: OffsetDateTime) -> Result<Status, StatusListError> {
        let expiry_date = expires_at
            .to_offset(self.clock.offset())
            .format(format_description!("[year]-[month]-[day]"))?;

        let status = self
            .client
            .post(self.service_url.as_str())
            .header("Accept", "application/json")
            .header("X-API-Key", self.api_key.expose_secret())
            .form(GenerateStatusListTokenRequest {
                country: COUNTRY,
                doctype: KEY_ATTESTATION_TYPE,
                expiry_date,
            })?
            .send()
            .await?
            .error_for_status()?
            .json::<Status>()?;

        tracing::debug!(
            "Allocated status list entry {} in {}",
            status.status_list.idx,
            status.status_list.uri
        );
        Ok(status)
    }
}
