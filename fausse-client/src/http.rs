//! HTTP client for the remote reservation service

use async_trait::async_trait;
use serde::de::DeserializeOwned;

use crate::{ClientConfig, ClientError, ClientResult, SiteApi};
use shared::{
    NewsletterAck, NewsletterRequest, ReservationConfirmation, ReservationRequest, ServiceError,
};

/// HTTP client for making network requests to the reservation service
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: reqwest::Client,
    base_url: String,
}

impl HttpClient {
    /// Create a new HTTP client from configuration
    pub fn new(config: &ClientConfig) -> ClientResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout))
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Make a POST request with JSON body
    async fn post<T: DeserializeOwned, B: serde::Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let url = format!("{}{}", self.base_url, path);
        tracing::debug!(%url, "dispatching request");

        let response = self.client.post(&url).json(body).send().await?;
        Self::handle_response(response).await
    }

    /// Handle the HTTP response
    ///
    /// Non-2xx bodies must carry `{ "error": ... }`; anything else is
    /// treated the same as not reaching the service at all.
    async fn handle_response<T: DeserializeOwned>(response: reqwest::Response) -> ClientResult<T> {
        let status = response.status();

        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return match serde_json::from_str::<ServiceError>(&text) {
                Ok(body) => Err(ClientError::Service {
                    message: body.error,
                }),
                Err(_) => Err(ClientError::InvalidResponse(format!("{}: {}", status, text))),
            };
        }

        response.json().await.map_err(Into::into)
    }
}

#[async_trait]
impl SiteApi for HttpClient {
    async fn subscribe_newsletter(
        &self,
        request: &NewsletterRequest,
    ) -> ClientResult<NewsletterAck> {
        self.post("/api/newsletter", request).await
    }

    async fn create_reservation(
        &self,
        request: &ReservationRequest,
    ) -> ClientResult<ReservationConfirmation> {
        self.post("/api/reservations", request).await
    }
}
