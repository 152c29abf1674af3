use thiserror::Error;
use time::OffsetDateTime;

use crate::model::attestation::Status;
use crate::provider::http_client::HttpClientError;

pub mod token_status_list;

#[derive(Debug, Error)]
pub enum StatusListError {
    #[error("Unable to generate StatusListToken: {0}")]
    HttpClient(#[from] HttpClientError),
    #[error("Unable to format expiry date: {0}")]
    Formatting(#[from] time::error::Format),
}

/// Allocates an entry in an external status list for a document expiring at `expires_at`
#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
#[async_trait::async_trait]
pub trait StatusListTokenProvider: Send + Sync {
    async fn generate(&self, expires_at: OffsetDateTime) -> Result<Status, StatusListError>;
}
