use std::sync::Arc;

use rubi_prefs::{KEY_API_KEY, PrefStore};
use serde_json::json;

use crate::error::JpdbError;

pub const JPDB_PARSE_URL: &str = "https://jpdb.io/api/v1/parse";

#[derive(Clone)]
pub struct JpdbClient {
    client: reqwest::Client,
    base_url: String,
    prefs: Arc<dyn PrefStore>,
}

impl JpdbClient {
    pub fn new(prefs: Arc<dyn PrefStore>) -> Self {
        Self::with_base_url(prefs, JPDB_PARSE_URL)
    }

    /// Point the client at a different parse endpoint (tests).
    pub fn with_base_url(prefs: Arc<dyn PrefStore>, base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
            prefs,
        }
    }

    /// Send `text` to the JPDB parse endpoint.
    ///
    /// Returns the raw response body on success; turning it into a display
    /// annotation is a separate step (`format_response`). A blank stored API
    /// key fails before any network I/O.
    pub async fn parse(&self, text: &str) -> Result<String, JpdbError> {
        let api_key = self.prefs.get(KEY_API_KEY);
        if api_key.trim().is_empty() {
            tracing::error!("JPDB API key is not set");
            return Err(JpdbError::MissingApiKey);
        }

        let body = json!({
            "text": text,
            "token_fields": ["vocabulary_index", "furigana"],
            "vocabulary_fields": ["reading", "spelling", "meanings"],
        });

        let response = self
            .client
            .post(&self.base_url)
            .header("Authorization", format!("Bearer {api_key}"))
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("jpdb request failed: {e}");
                JpdbError::Connection(e)
            })?;

        let status = response.status();
        let body = response.text().await.map_err(JpdbError::Connection)?;

        if status.is_success() {
            tracing::debug!("jpdb parse succeeded, {} byte response", body.len());
            return Ok(body);
        }

        Err(match status.as_u16() {
            401 => JpdbError::InvalidApiKey,
            403 => JpdbError::Forbidden,
            429 => JpdbError::RateLimited,
            code => JpdbError::Api { code, body },
        })
    }
}

#[cfg(test)]
mod tests {
    use rubi_prefs::MemoryPrefs;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    fn prefs_with_key(key: &str) -> Arc<dyn PrefStore> {
        let prefs = MemoryPrefs::new();
        prefs.set(KEY_API_KEY, key);
        Arc::new(prefs)
    }

    #[tokio::test]
    async fn success_returns_raw_body_unmodified() {
        let server = MockServer::start().await;
        let raw = r#"{"tokens":[],"vocabulary":[]}"#;

        Mock::given(method("POST"))
            .and(path("/"))
            .and(header("authorization", "Bearer test-key"))
            .and(body_json(json!({
                "text": "猫を見た",
                "token_fields": ["vocabulary_index", "furigana"],
                "vocabulary_fields": ["reading", "spelling", "meanings"],
            })))
            .respond_with(ResponseTemplate::new(200).set_body_string(raw))
            .expect(1)
            .mount(&server)
            .await;

        let client = JpdbClient::with_base_url(prefs_with_key("test-key"), server.uri());
        assert_eq!(client.parse("猫を見た").await.unwrap(), raw);
    }

    #[tokio::test]
    async fn text_with_quotes_is_encoded_structurally() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(body_json(json!({
                "text": "he said \"やめろ\"\n",
                "token_fields": ["vocabulary_index", "furigana"],
                "vocabulary_fields": ["reading", "spelling", "meanings"],
            })))
            .respond_with(ResponseTemplate::new(200).set_body_string("{}"))
            .expect(1)
            .mount(&server)
            .await;

        let client = JpdbClient::with_base_url(prefs_with_key("test-key"), server.uri());
        client.parse("he said \"やめろ\"\n").await.unwrap();
    }

    #[tokio::test]
    async fn blank_key_short_circuits_without_io() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        for key in ["", "   "] {
            let client = JpdbClient::with_base_url(prefs_with_key(key), server.uri());
            let err = client.parse("猫").await.unwrap_err();
            assert!(matches!(err, JpdbError::MissingApiKey));
        }
    }

    #[tokio::test]
    async fn auth_and_throttle_statuses_map_to_dedicated_errors() {
        for (status, check) in [
            (401u16, JpdbError::InvalidApiKey.to_string()),
            (403, JpdbError::Forbidden.to_string()),
            (429, JpdbError::RateLimited.to_string()),
        ] {
            let server = MockServer::start().await;
            Mock::given(method("POST"))
                .respond_with(ResponseTemplate::new(status))
                .mount(&server)
                .await;

            let client = JpdbClient::with_base_url(prefs_with_key("test-key"), server.uri());
            let err = client.parse("猫").await.unwrap_err();
            assert_eq!(err.to_string(), check);
        }
    }

    #[tokio::test]
    async fn other_statuses_carry_code_and_body() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(500).set_body_string("out of cheese"))
            .mount(&server)
            .await;

        let client = JpdbClient::with_base_url(prefs_with_key("test-key"), server.uri());
        match client.parse("猫").await.unwrap_err() {
            JpdbError::Api { code, body } => {
                assert_eq!(code, 500);
                assert_eq!(body, "out of cheese");
            }
            other => panic!("expected Api error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn unreachable_endpoint_is_a_connection_error() {
        // Port 1 is never listening locally
        let client = JpdbClient::with_base_url(prefs_with_key("test-key"), "http://127.0.0.1:1");
        let err = client.parse("猫").await.unwrap_err();
        assert!(matches!(err, JpdbError::Connection(_)));
        assert_eq!(
            err.to_string(),
            "Failed to connect to JPDB API. Check your internet connection."
        );
    }
}
