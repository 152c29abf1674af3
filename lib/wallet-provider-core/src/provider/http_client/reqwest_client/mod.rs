use std::sync::Arc;

use reqwest::header::{HeaderName, HeaderValue};

use super::{HttpClient, HttpClientError, Request, RequestBuilder, Response, StatusCode};

#[derive(Clone, Default)]
pub struct ReqwestClient {
    client: reqwest::Client,
}

#[async_trait::async_trait]
impl HttpClient for ReqwestClient {
    fn post(&self, url: &str) -> RequestBuilder {
        RequestBuilder::new(Arc::new(self.clone()), url)
    }

    async fn send(&self, request: Request) -> Result<Response, HttpClientError> {
        let mut builder = self.client.post(&request.url);
        for (name, value) in &request.headers {
            let invalid = |reason: String| HttpClientError::InvalidHeader {
                name: name.to_owned(),
                reason,
            };
            let header_name =
                HeaderName::from_bytes(name.as_bytes()).map_err(|err| invalid(err.to_string()))?;
            let header_value =
                HeaderValue::from_str(value).map_err(|err| invalid(err.to_string()))?;
            builder = builder.header(header_name, header_value);
        }
        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let response = builder
            .send()
            .await
            .map_err(|err| HttpClientError::HttpError(err.to_string()))?;
        let status = StatusCode(response.status().as_u16());
        let body = response
            .bytes()
            .await
            .map_err(|err| HttpClientError::HttpError(err.to_string()))?;

        Ok(Response {
            url: request.url,
            status,
            body: body.to_vec(),
        })
    }
}
