//! HTTP transport shared by the remote gateways.

use crate::clients::{ApiError, ApiResult};
use crate::config::StoreConfig;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tokio_util::sync::CancellationToken;

/// Thin wrapper over [`reqwest::Client`] with a fixed base URL.
///
/// Every request is raced against a [`CancellationToken`] so that a view
/// being torn down aborts its in-flight work instead of completing it in
/// the background. A client built without an explicit token carries a
/// fresh one that is never cancelled.
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
    base_url: String,
    cancel: CancellationToken,
}

impl HttpClient {
    /// Create a new HTTP client from configuration.
    pub fn new(config: &StoreConfig) -> Self {
        let client = Client::builder()
            .timeout(config.timeout())
            .build()
            .expect("Failed to build HTTP client");

        Self {
            client,
            base_url: config.api_url.clone(),
            cancel: CancellationToken::new(),
        }
    }

    /// Tie every future request to the given cancellation token.
    pub fn with_cancellation(mut self, cancel: CancellationToken) -> Self {
        self.cancel = cancel;
        self
    }

    fn url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    /// Make a GET request.
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        let request = self.client.get(self.url(path));
        let response = self.execute(request).await?;
        Self::handle_response(response).await
    }

    /// Make a GET request with a query string.
    pub async fn get_with_query<T, Q>(&self, path: &str, query: &Q) -> ApiResult<T>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        let request = self.client.get(self.url(path)).query(query);
        let response = self.execute(request).await?;
        Self::handle_response(response).await
    }

    /// Make a POST request with a JSON body.
    pub async fn post<T, B>(&self, path: &str, body: &B) -> ApiResult<T>
    where
        T: DeserializeOwned,
        B: Serialize,
    {
        let request = self.client.post(self.url(path)).json(body);
        let response = self.execute(request).await?;
        Self::handle_response(response).await
    }

    /// Make a POST request carrying only a query string.
    pub async fn post_with_query<T, Q>(&self, path: &str, query: &Q) -> ApiResult<T>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        let request = self.client.post(self.url(path)).query(query);
        let response = self.execute(request).await?;
        Self::handle_response(response).await
    }

    /// Make a PUT request with a JSON body.
    pub async fn put<T, B>(&self, path: &str, body: &B) -> ApiResult<T>
    where
        T: DeserializeOwned,
        B: Serialize,
    {
        let request = self.client.put(self.url(path)).json(body);
        let response = self.execute(request).await?;
        Self::handle_response(response).await
    }

    /// Make a PUT request with a JSON body, discarding any response body.
    pub async fn put_no_content<B: Serialize>(&self, path: &str, body: &B) -> ApiResult<()> {
        let request = self.client.put(self.url(path)).json(body);
        let response = self.execute(request).await?;
        Self::handle_empty(response).await
    }

    /// Make a DELETE request, discarding any response body.
    pub async fn delete(&self, path: &str) -> ApiResult<()> {
        let request = self.client.delete(self.url(path));
        let response = self.execute(request).await?;
        Self::handle_empty(response).await
    }

    /// Send the request unless the token was cancelled first.
    async fn execute(&self, request: reqwest::RequestBuilder) -> ApiResult<reqwest::Response> {
        tokio::select! {
            biased;
            _ = self.cancel.cancelled() => Err(ApiError::Cancelled),
            response = request.send() => Ok(response?),
        }
    }

    /// Map a non-success status to the error taxonomy, decode otherwise.
    async fn handle_response<T: DeserializeOwned>(response: reqwest::Response) -> ApiResult<T> {
        let status = response.status();

        if !status.is_success() {
            let text = response.text().await?;
            return match status {
                StatusCode::NOT_FOUND => Err(ApiError::NotFound(text)),
                StatusCode::BAD_REQUEST => Err(ApiError::Validation(text)),
                _ => Err(ApiError::Internal(text)),
            };
        }

        response.json().await.map_err(Into::into)
    }

    /// Like [`Self::handle_response`] for endpoints that return no body.
    async fn handle_empty(response: reqwest::Response) -> ApiResult<()> {
        let status = response.status();

        if !status.is_success() {
            let text = response.text().await?;
            return match status {
                StatusCode::NOT_FOUND => Err(ApiError::NotFound(text)),
                StatusCode::BAD_REQUEST => Err(ApiError::Validation(text)),
                _ => Err(ApiError::Internal(text)),
            };
        }

        Ok(())
    }
}
