use std::sync::RwLock;

use http::header::{HeaderMap, HeaderName, HeaderValue, AUTHORIZATION};
use tracing::debug;

/// The default headers applied to every outgoing HTTP request.
///
/// One instance is created at startup and shared between the session store
/// (the single writer) and the application's request layer (readers), so
/// nothing reaches for a process-wide global. The session store keeps the
/// `Authorization` entry in sync with the current token.
pub struct HttpDefaults {
    headers: RwLock<HeaderMap>,
}

impl HttpDefaults {
    /// Create an empty default-header map.
    pub fn new() -> Self {
        HttpDefaults {
            headers: RwLock::new(HeaderMap::new()),
        }
    }

    /// Set the default `Authorization` header to `Bearer <token>`.
    ///
    /// The token is not validated; a token that cannot form a header value
    /// (e.g. containing control characters) is reported as an error.
    pub fn set_bearer(&self, token: &str) -> Result<(), String> {
        let value = HeaderValue::from_str(&format!("Bearer {}", token))
            .map_err(|e| format!("Failed to build Authorization header: {}", e))?;

        let mut headers = self.headers.write().expect("default header lock poisoned");
        headers.insert(AUTHORIZATION, value);
        debug!("Default Authorization header updated.");
        Ok(())
    }

    /// Set an arbitrary default header, for collaborators that configure
    /// defaults other than Authorization.
    pub fn insert(&self, name: HeaderName, value: HeaderValue) {
        let mut headers = self.headers.write().expect("default header lock poisoned");
        headers.insert(name, value);
    }

    /// Drop ALL default headers, not just Authorization. Logout relies on
    /// this; collaborating code must not expect other defaults to survive.
    pub fn clear(&self) {
        let mut headers = self.headers.write().expect("default header lock poisoned");
        headers.clear();
        debug!("Cleared all default headers.");
    }

    /// A snapshot of the current default headers.
    pub fn headers(&self) -> HeaderMap {
        self.headers.read().expect("default header lock poisoned").clone()
    }

    /// Build an HTTP client that attaches the current defaults to every
    /// request it sends. Clients built before a header change keep the old
    /// defaults, so the request layer should build one per login state.
    pub fn client(&self) -> Result<reqwest::Client, String> {
        reqwest::Client::builder()
            .user_agent(concat!("mealstash/", env!("CARGO_PKG_VERSION")))
            .default_headers(self.headers())
            .build()
            .map_err(|e| format!("Failed to build HTTP client: {}", e))
    }
}

impl Default for HttpDefaults {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Server;

    /// Test that set_bearer writes the expected Authorization value.
    #[test]
    fn test_set_bearer_writes_authorization() {
        let defaults = HttpDefaults::new();
        defaults.set_bearer("xyz").expect("set bearer");

        let headers = defaults.headers();
        assert_eq!(
            headers.get(AUTHORIZATION).and_then(|v| v.to_str().ok()),
            Some("Bearer xyz")
        );
    }

    /// Test that a later token replaces the earlier Authorization value.
    #[test]
    fn test_set_bearer_overwrites() {
        let defaults = HttpDefaults::new();
        defaults.set_bearer("first").expect("set first bearer");
        defaults.set_bearer("second").expect("set second bearer");

        let headers = defaults.headers();
        assert_eq!(headers.len(), 1);
        assert_eq!(
            headers.get(AUTHORIZATION).and_then(|v| v.to_str().ok()),
            Some("Bearer second")
        );
    }

    /// Test that clear drops every default header, not just Authorization.
    #[test]
    fn test_clear_drops_all_headers() {
        let defaults = HttpDefaults::new();
        defaults.set_bearer("xyz").expect("set bearer");
        defaults.insert(
            HeaderName::from_static("x-client-locale"),
            HeaderValue::from_static("en-US"),
        );
        assert_eq!(defaults.headers().len(), 2);

        defaults.clear();
        assert!(defaults.headers().is_empty());
    }

    /// Test that a token with control characters is rejected as an error.
    #[test]
    fn test_invalid_token_is_an_error() {
        let defaults = HttpDefaults::new();
        let result = defaults.set_bearer("bad\ntoken");
        assert!(result.is_err(), "Expected an unencodable token to fail");
        assert!(defaults.headers().is_empty());
    }

    /// Test that a client built from the defaults sends the Authorization
    /// header on the wire.
    #[tokio::test]
    async fn test_client_attaches_bearer_header() {
        let defaults = HttpDefaults::new();
        defaults.set_bearer("abc123").expect("set bearer");

        let mut server = Server::new_async().await;
        let m = server
            .mock("GET", "/recipes")
            .match_header("authorization", "Bearer abc123")
            .with_status(200)
            .create_async()
            .await;

        let client = defaults.client().expect("build client");
        let url = format!("{}/recipes", server.url());
        let response = client.get(&url).send().await.expect("send request");
        m.assert_async().await;
        assert!(response.status().is_success());
    }
}
