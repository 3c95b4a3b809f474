//! Blocking HTTP client for endpoint checks.

use std::time::Duration;

use reqwest::blocking::{Client, Response};

/// Default timeout for endpoint requests.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// HTTP client wrapper for probing the API under test.
///
/// All requests go to paths below a single base URL, typically the
/// local development server at `http://localhost:8000`.
pub struct ApiClient {
    client: Client,
    base_url: String,
    timeout: Duration,
}

impl ApiClient {
    /// Create a new client with the default timeout.
    pub fn new(base_url: &str) -> Self {
        Self::with_timeout(base_url, DEFAULT_TIMEOUT)
    }

    /// Create a new client with a custom timeout.
    pub fn with_timeout(base_url: &str, timeout: Duration) -> Self {
        let client = Client::builder()
            .user_agent("turnstile")
            .timeout(timeout)
            .build()
            .expect("Failed to build HTTP client");

        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            timeout,
        }
    }

    /// The configured base URL, without a trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// The configured timeout.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Build a full URL from a path starting with `/`.
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Send a GET request to a path.
    pub fn get(&self, path: &str) -> reqwest::Result<Response> {
        let url = self.url(path);
        tracing::debug!(%url, "GET");
        self.client.get(url).send()
    }

    /// Send a POST request with an empty body to a path.
    pub fn post(&self, path: &str) -> reqwest::Result<Response> {
        let url = self.url(path);
        tracing::debug!(%url, "POST");
        self.client.post(url).send()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;

    #[test]
    fn url_joins_base_and_path() {
        let client = ApiClient::new("http://localhost:8000");
        assert_eq!(client.url("/api/alerts"), "http://localhost:8000/api/alerts");
    }

    #[test]
    fn trailing_slash_on_base_is_trimmed() {
        let client = ApiClient::new("http://localhost:8000/");
        assert_eq!(client.base_url(), "http://localhost:8000");
        assert_eq!(client.url("/"), "http://localhost:8000/");
    }

    #[test]
    fn custom_timeout_is_stored() {
        let client = ApiClient::with_timeout("http://localhost:8000", Duration::from_secs(5));
        assert_eq!(client.timeout(), Duration::from_secs(5));
    }

    #[test]
    fn get_reaches_the_server() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET).path("/api/incidents");
            then.status(200).json_body(serde_json::json!([]));
        });

        let client = ApiClient::new(&server.base_url());
        let response = client.get("/api/incidents").unwrap();

        mock.assert();
        assert_eq!(response.status(), 200);
    }

    #[test]
    fn post_sends_an_empty_body() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(POST).path("/api/research/trigger");
            then.status(200).json_body(serde_json::json!({"status": "started"}));
        });

        let client = ApiClient::new(&server.base_url());
        let response = client.post("/api/research/trigger").unwrap();

        mock.assert();
        assert_eq!(response.status(), 200);
    }
}
