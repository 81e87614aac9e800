//! HTTP transport for network-based API calls
//!
//! Every request is a single attempt: no retry, no caching, no
//! response reuse. The bearer token is supplied per call by the API
//! layer, which has already refused to proceed without one.

use crate::{ClientConfig, ClientError, ClientResult};
use async_trait::async_trait;
use http::StatusCode;
use reqwest::Client;
use serde::de::DeserializeOwned;
use tokio_util::sync::CancellationToken;

/// HTTP transport trait
///
/// Mutation verbs resolve to `()` on any 2xx status; their response
/// bodies are never inspected.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    async fn get<T: DeserializeOwned>(&self, path: &str, token: &str) -> ClientResult<T>;
    async fn get_with_query<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
        token: &str,
    ) -> ClientResult<T>;
    async fn post<T: DeserializeOwned, B: serde::Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
        token: &str,
    ) -> ClientResult<T>;
    async fn post_unit<B: serde::Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
        token: &str,
    ) -> ClientResult<()>;
    async fn post_bytes(&self, path: &str, token: &str) -> ClientResult<Vec<u8>>;
    async fn put_unit<B: serde::Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
        token: &str,
    ) -> ClientResult<()>;
    async fn put_empty(&self, path: &str, token: &str) -> ClientResult<()>;
    async fn delete_unit(&self, path: &str, token: &str) -> ClientResult<()>;
}

/// Network HTTP transport over reqwest
#[derive(Debug, Clone)]
pub struct NetworkHttpClient {
    client: Client,
    base_url: String,
    auth_header_name: String,
    cancel: CancellationToken,
}

impl NetworkHttpClient {
    pub fn new(config: &ClientConfig) -> ClientResult<Self> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout))
            .build()?;
        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            auth_header_name: config.auth_header_name.clone(),
            cancel: CancellationToken::new(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Token tied to this transport's lifetime; `cancel()` makes every
    /// in-flight and future request resolve to `ClientError::Cancelled`.
    pub fn cancellation_token(&self) -> CancellationToken {
        self.cancel.clone()
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    async fn send(&self, request: reqwest::RequestBuilder) -> ClientResult<reqwest::Response> {
        tokio::select! {
            biased;
            _ = self.cancel.cancelled() => Err(ClientError::Cancelled),
            response = request.send() => Ok(response?),
        }
    }

    async fn handle_json<T: DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> ClientResult<T> {
        let response = Self::check_status(response).await?;
        response
            .json()
            .await
            .map_err(|e| ClientError::InvalidResponse(e.to_string()))
    }

    async fn handle_unit(&self, response: reqwest::Response) -> ClientResult<()> {
        Self::check_status(response).await.map(|_| ())
    }

    /// Collapse any non-2xx status into one error carrying the status
    /// and the server's `message` field when the body has one.
    async fn check_status(response: reqwest::Response) -> ClientResult<reqwest::Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let text = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<serde_json::Value>(&text)
            .ok()
            .and_then(|v| v.get("message")?.as_str().map(str::to_string))
            .or_else(|| (!text.is_empty()).then(|| text.clone()));

        tracing::warn!(status = %status, message = ?message, "Request failed");
        Err(ClientError::Server {
            status: StatusCode::from_u16(status.as_u16())
                .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
            message,
        })
    }
}

#[async_trait]
impl HttpTransport for NetworkHttpClient {
    async fn get<T: DeserializeOwned>(&self, path: &str, token: &str) -> ClientResult<T> {
        let req = self
            .client
            .get(self.url(path))
            .header(&self.auth_header_name, format!("Bearer {token}"));
        let response = self.send(req).await?;
        self.handle_json(response).await
    }

    async fn get_with_query<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
        token: &str,
    ) -> ClientResult<T> {
        let req = self
            .client
            .get(self.url(path))
            .query(query)
            .header(&self.auth_header_name, format!("Bearer {token}"));
        let response = self.send(req).await?;
        self.handle_json(response).await
    }

    async fn post<T: DeserializeOwned, B: serde::Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
        token: &str,
    ) -> ClientResult<T> {
        let req = self
            .client
            .post(self.url(path))
            .json(body)
            .header(&self.auth_header_name, format!("Bearer {token}"));
        let response = self.send(req).await?;
        self.handle_json(response).await
    }

    async fn post_unit<B: serde::Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
        token: &str,
    ) -> ClientResult<()> {
        let req = self
            .client
            .post(self.url(path))
            .json(body)
            .header(&self.auth_header_name, format!("Bearer {token}"));
        let response = self.send(req).await?;
        self.handle_unit(response).await
    }

    async fn post_bytes(&self, path: &str, token: &str) -> ClientResult<Vec<u8>> {
        let req = self
            .client
            .post(self.url(path))
            .header(&self.auth_header_name, format!("Bearer {token}"));
        let response = self.send(req).await?;
        let response = Self::check_status(response).await?;
        Ok(response.bytes().await?.to_vec())
    }

    async fn put_unit<B: serde::Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
        token: &str,
    ) -> ClientResult<()> {
        let req = self
            .client
            .put(self.url(path))
            .json(body)
            .header(&self.auth_header_name, format!("Bearer {token}"));
        let response = self.send(req).await?;
        self.handle_unit(response).await
    }

    async fn put_empty(&self, path: &str, token: &str) -> ClientResult<()> {
        // Mirrors the dashboard's `put(url, {})` calls
        self.put_unit(path, &serde_json::json!({}), token).await
    }

    async fn delete_unit(&self, path: &str, token: &str) -> ClientResult<()> {
        let req = self
            .client
            .delete(self.url(path))
            .header(&self.auth_header_name, format!("Bearer {token}"));
        let response = self.send(req).await?;
        self.handle_unit(response).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_joins_without_duplicate_slash() {
        let client =
            NetworkHttpClient::new(&ClientConfig::new("http://localhost:8085/")).unwrap();
        assert_eq!(
            client.url("/api/admin/historial-tickets"),
            "http://localhost:8085/api/admin/historial-tickets"
        );
        assert_eq!(
            client.url("api-user/historial-solicitud"),
            "http://localhost:8085/api-user/historial-solicitud"
        );
    }

    #[tokio::test]
    async fn cancelled_transport_rejects_requests() {
        let client = NetworkHttpClient::new(&ClientConfig::new("http://localhost:1")).unwrap();
        client.cancellation_token().cancel();
        let result: ClientResult<serde_json::Value> =
            client.get("api/admin/historial-tickets", "tok").await;
        assert!(matches!(result, Err(ClientError::Cancelled)));
    }
}
