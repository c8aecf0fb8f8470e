//! HTTP client for communicating with trailforward-server

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Response, StatusCode};
use serde::Deserialize;
use tracing::debug;
use trailforward_core::store::{ImageStore, RecordStore};
use trailforward_core::{CoreError, CoreResult, EventRecord, NewEvent};

/// HTTP client for trailforward-server
pub struct Client {
    http: reqwest::Client,
    base_url: String,
}

#[derive(Deserialize)]
struct ErrorResponse {
    error: String,
}

impl Client {
    pub fn new(base_url: &str, timeout: Duration) -> anyhow::Result<Self> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Client {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn send(&self, request: reqwest::RequestBuilder) -> Result<Response, String> {
        request
            .send()
            .await
            .map_err(|e| format!("Failed to connect to server at {}: {e}", self.base_url))
    }
}

/// The server's `{"error": ...}` message, or the bare status.
async fn error_message(resp: Response) -> String {
    let status = resp.status();
    match resp.json::<ErrorResponse>().await {
        Ok(err) => err.error,
        Err(_) => format!("Server responded with {status}"),
    }
}

#[async_trait]
impl RecordStore for Client {
    /// GET /events
    async fn list(&self) -> CoreResult<Vec<EventRecord>> {
        let resp = self.send(self.http.get(self.url("/events"))).await.map_err(CoreError::Store)?;

        if !resp.status().is_success() {
            return Err(CoreError::Store(error_message(resp).await));
        }

        let records: Vec<EventRecord> = resp.json().await.map_err(|e| CoreError::Store(e.to_string()))?;
        debug!(count = records.len(), "Fetched events from server");
        Ok(records)
    }

    /// POST /events
    async fn create(&self, event: &NewEvent) -> CoreResult<()> {
        let resp = self
            .send(self.http.post(self.url("/events")).json(event))
            .await
            .map_err(CoreError::Store)?;

        if !resp.status().is_success() {
            return Err(CoreError::Store(error_message(resp).await));
        }

        Ok(())
    }

    /// DELETE /events/{id}
    async fn delete(&self, id: i64) -> CoreResult<()> {
        let resp = self
            .send(self.http.delete(self.url(&format!("/events/{id}"))))
            .await
            .map_err(CoreError::Store)?;

        match resp.status() {
            status if status.is_success() => Ok(()),
            StatusCode::NOT_FOUND => Err(CoreError::NotFound(id)),
            _ => Err(CoreError::Store(error_message(resp).await)),
        }
    }
}

#[async_trait]
impl ImageStore for Client {
    /// GET /gallery-images
    async fn list(&self) -> CoreResult<Vec<String>> {
        let resp = self
            .send(self.http.get(self.url("/gallery-images")))
            .await
            .map_err(CoreError::ImagesUnreadable)?;

        match resp.status() {
            status if status.is_success() => resp
                .json()
                .await
                .map_err(|e| CoreError::ImagesUnreadable(e.to_string())),
            StatusCode::NOT_FOUND => Err(CoreError::ImagesNotFound),
            _ => Err(CoreError::ImagesUnreadable(error_message(resp).await)),
        }
    }
}
