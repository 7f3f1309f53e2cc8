//! Client for the two read-only stock endpoints.

use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::{
    ApiConfig, FetchError, HttpClient, HttpRequest, HttpResponse, ReqwestHttpClient, StockBar,
    StockSummary,
};

/// Error body shape returned by the API on non-success statuses.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

#[derive(Clone)]
pub struct StockApi {
    config: ApiConfig,
    http: Arc<dyn HttpClient>,
}

impl StockApi {
    pub fn new(config: ApiConfig) -> Self {
        let http = Arc::new(ReqwestHttpClient::new(config.user_agent()));
        Self { config, http }
    }

    pub fn with_http_client(config: ApiConfig, http: Arc<dyn HttpClient>) -> Self {
        Self { config, http }
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// `GET /all`, reduced to symbol, name and industry.
    pub async fn fetch_listings(&self) -> Result<Vec<StockSummary>, FetchError> {
        self.get_json(self.config.endpoint("/all")).await
    }

    /// `GET /history<search>`, with `search` forwarded verbatim from the page URL.
    pub async fn fetch_history(&self, search: &str) -> Result<Vec<StockBar>, FetchError> {
        self.get_json(self.config.endpoint(&format!("/history{search}")))
            .await
    }

    async fn get_json<T: DeserializeOwned>(&self, url: String) -> Result<T, FetchError> {
        log::debug!("GET {url}");
        let request = HttpRequest::get(url.as_str())
            .with_header("accept", "application/json")
            .with_timeout_ms(self.config.timeout_ms());

        let response = self
            .http
            .execute(request)
            .await
            .map_err(|e| FetchError::transport(e.message()))?;

        decode_response(&url, response)
    }
}

impl std::fmt::Debug for StockApi {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StockApi")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

fn decode_response<T: DeserializeOwned>(url: &str, response: HttpResponse) -> Result<T, FetchError> {
    if !response.is_success() {
        return Err(status_error(&response));
    }

    serde_json::from_str(&response.body).map_err(|e| {
        log::warn!("undecodable body from {url}: {e}");
        FetchError::decode(format!("malformed response body: {e}"))
    })
}

/// Structured `message` when the body has one, otherwise just the status.
fn status_error(response: &HttpResponse) -> FetchError {
    let message = serde_json::from_str::<ErrorBody>(&response.body)
        .ok()
        .and_then(|body| body.message);
    FetchError::http_status(response.status, message)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{FetchErrorKind, ScriptedHttpClient};

    fn api(client: ScriptedHttpClient) -> (StockApi, Arc<ScriptedHttpClient>) {
        let client = Arc::new(client);
        let config = ApiConfig::new("http://stocks.test").expect("valid url");
        (StockApi::with_http_client(config, client.clone()), client)
    }

    #[tokio::test]
    async fn history_forwards_search_verbatim() {
        let (api, client) = api(ScriptedHttpClient::new().respond(200, "[]"));

        let bars = api.fetch_history("?symbol=abc").await.expect("empty history");

        assert!(bars.is_empty());
        assert_eq!(client.requested_urls(), vec!["http://stocks.test/history?symbol=abc"]);
    }

    #[tokio::test]
    async fn history_search_is_not_reencoded() {
        let (api, client) = api(ScriptedHttpClient::new().respond(200, "[]"));

        api.fetch_history("?symbol=aal&from=2020-03-01T00:00:00.000Z")
            .await
            .expect("empty history");

        assert_eq!(
            client.requested_urls(),
            vec!["http://stocks.test/history?symbol=aal&from=2020-03-01T00:00:00.000Z"]
        );
    }

    #[tokio::test]
    async fn message_field_is_preferred_over_status() {
        let (api, _) = api(ScriptedHttpClient::new().respond(404, r#"{"message":"not found"}"#));

        let error = api.fetch_listings().await.expect_err("must fail");

        assert_eq!(error.kind(), FetchErrorKind::HttpStatus);
        assert_eq!(error.status(), Some(404));
        assert_eq!(error.identifier(), "not found");
    }

    #[tokio::test]
    async fn non_json_error_body_falls_back_to_status() {
        let (api, _) = api(ScriptedHttpClient::new().respond(503, "<html>down</html>"));

        let error = api.fetch_listings().await.expect_err("must fail");

        assert_eq!(error.identifier(), "503");
    }

    #[tokio::test]
    async fn numeric_message_is_not_a_message() {
        let (api, _) = api(ScriptedHttpClient::new().respond(400, r#"{"message":42}"#));

        let error = api.fetch_listings().await.expect_err("must fail");

        assert_eq!(error.identifier(), "400");
    }

    #[tokio::test]
    async fn malformed_success_body_is_a_decode_error() {
        let (api, _) = api(ScriptedHttpClient::new().respond(200, r#"[{"symbol":"ABC"}]"#));

        let error = api.fetch_listings().await.expect_err("must fail");

        assert_eq!(error.kind(), FetchErrorKind::Decode);
    }

    #[tokio::test]
    async fn transport_failure_keeps_its_message() {
        let (api, _) = api(ScriptedHttpClient::new().fail("connection failed: refused"));

        let error = api.fetch_history("?symbol=abc").await.expect_err("must fail");

        assert_eq!(error.kind(), FetchErrorKind::Transport);
        assert_eq!(error.identifier(), "connection failed: refused");
    }
}
