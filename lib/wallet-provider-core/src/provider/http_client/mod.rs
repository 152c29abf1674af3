//! Outbound form POSTs to the status list service

pub mod reqwest_client;


use std::fmt::Display;
use std::sync::Arc;

use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
#[async_trait::async_trait]
pub trait HttpClient: Send + Sync {
    fn post(&self, url: &str) -> RequestBuilder;

    async fn send(&self, request: Request) -> Result<Response, HttpClientError>;
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct StatusCode(pub u16);

/// A POST request ready to be sent
#[derive(Debug, Default)]
pub struct Request {
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<Vec<u8>>,
}

#[derive(Debug)]
pub struct Response {
    pub url: String,
    pub status: StatusCode,
    pub body: Vec<u8>,
}

#[derive(Debug, Error)]
pub enum HttpClientError {
    #[error("HTTP error: {0}")]
    HttpError(String),
    #[error("Invalid header `{name}`: {reason}")]
    InvalidHeader { name: String, reason: String },
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
    #[error("HTTP status code is error: {0}")]
    StatusCodeIsError(StatusCode),
    #[error("Url encoding error: {0}")]
    UrlEncode(#[from] serde_urlencoded::ser::Error),
}

impl StatusCode {
    pub fn is_error(&self) -> bool {
        (400..600).contains(&self.0)
    }
}

impl Display for StatusCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Response {
    pub fn error_for_status(self) -> Result<Self, HttpClientError> {
        if self.status.is_error() {
            tracing::warn!("POST {} answered with {}", self.url, self.status);
            return Err(HttpClientError::StatusCodeIsError(self.status));
        }
        Ok(self)
    }

    pub fn json<T: DeserializeOwned>(self) -> Result<T, HttpClientError> {
        serde_json::from_slice(&self.body).map_err(|err| {
            tracing::warn!("POST {} returned an unexpected body: {err}", self.url);
            HttpClientError::JsonError(err)
        })
    }
}

pub struct RequestBuilder {
    client: Arc<dyn HttpClient>,
    request: Request,
}

impl RequestBuilder {
    pub fn new(client: Arc<dyn HttpClient>, url: &str) -> Self {
        Self {
            client,
            request: Request {
                url: url.to_string(),
                ..Default::default()
            },
        }
    }

    pub fn header(mut self, name: &str, value: &str) -> Self {
        self.request
            .headers
            .push((name.to_string(), value.to_string()));
        self
    }

    /// Sets an `application/x-www-form-urlencoded` body
    pub fn form<T: Serialize>(self, value: T) -> Result<Self, HttpClientError> {
        let body = serde_urlencoded::to_string(value)?;

        let mut builder = self.header("Content-Type", "application/x-www-form-urlencoded");
        builder.request.body = Some(body.into_bytes());
        Ok(builder)
    }

    pub async fn send(self) -> Result<Response, HttpClientError> {
        let url = self.request.url.clone();
        let response = self.client.send(self.request).await.inspect_err(|err| {
            tracing::warn!("POST {url} failed: {err}");
        })?;

        tracing::debug!("POST {url} - {}", response.status);
        Ok(response)
    }
}
