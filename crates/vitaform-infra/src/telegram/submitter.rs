//! TelegramSubmitter -- concrete [`ReportSubmitter`] for the Telegram
//! Bot API.
//!
//! Issues a single `sendMessage` call per submission with a 30-second
//! client timeout. Every failure path -- missing configuration, endpoint
//! rejection, timeout, transport failure -- resolves to a classified
//! [`SubmitError`]; nothing panics past the trait boundary and no retry
//! happens here.
//!
//! The bot token is wrapped in [`secrecy::SecretString`] and is never
//! logged or included in `Debug` output.

use std::time::Duration;

use secrecy::{ExposeSecret, SecretString};

use vitaform_core::submit::ReportSubmitter;
use vitaform_types::error::SubmitError;

use super::types::{SendMessageRequest, SendMessageResponse};

/// Client-side bound on a delivery attempt; the in-flight request is
/// aborted when it elapses.
pub const SUBMIT_TIMEOUT: Duration = Duration::from_secs(30);

const BOT_TOKEN_ENV: &str = "VITAFORM_BOT_TOKEN";
const CHAT_ID_ENV: &str = "VITAFORM_CHAT_ID";

/// Placeholder sentinels from config templates count as unset.
const TOKEN_PLACEHOLDER: &str = "YOUR_BOT_TOKEN";
const CHAT_ID_PLACEHOLDER: &str = "YOUR_CHAT_ID";

/// Destination credentials for the Bot API.
pub struct TelegramConfig {
    pub token: SecretString,
    pub chat_id: String,
}

impl TelegramConfig {
    /// Read token and chat id from the environment.
    ///
    /// Returns `None` when either variable is unset, blank, or still a
    /// placeholder sentinel -- the submitter then short-circuits with
    /// [`SubmitError::MissingConfiguration`] before any request.
    pub fn from_env() -> Option<Self> {
        let token = read_configured(BOT_TOKEN_ENV, TOKEN_PLACEHOLDER)?;
        let chat_id = read_configured(CHAT_ID_ENV, CHAT_ID_PLACEHOLDER)?;
        Some(Self {
            token: SecretString::from(token),
            chat_id,
        })
    }
}

/// Read an env var, treating blank values and the placeholder as unset.
fn read_configured(var: &str, placeholder: &str) -> Option<String> {
    match std::env::var(var) {
        Ok(value) if !value.trim().is_empty() && value.trim() != placeholder => {
            Some(value.trim().to_string())
        }
        _ => None,
    }
}

/// Telegram Bot API report submitter.
// No Debug derive: the config holds the bot token.
pub struct TelegramSubmitter {
    client: reqwest::Client,
    config: Option<TelegramConfig>,
    base_url: String,
}

impl TelegramSubmitter {
    /// Create a submitter with the default endpoint and timeout.
    ///
    /// `config: None` models an unconfigured deployment: construction
    /// succeeds and every submit resolves to the configuration-missing
    /// failure.
    pub fn new(config: Option<TelegramConfig>) -> Self {
        Self::with_timeout_internal(config, SUBMIT_TIMEOUT)
    }

    /// Create a submitter configured from the environment.
    pub fn from_env() -> Self {
        Self::new(TelegramConfig::from_env())
    }

    /// Override the base URL (useful for testing or proxies).
    pub fn with_base_url(mut self, base_url: String) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    /// Override the request timeout (tests shorten it; production keeps
    /// [`SUBMIT_TIMEOUT`]).
    pub fn with_timeout(self, timeout: Duration) -> Self {
        let mut rebuilt = Self::with_timeout_internal(self.config, timeout);
        rebuilt.base_url = self.base_url;
        rebuilt
    }

    fn with_timeout_internal(config: Option<TelegramConfig>, timeout: Duration) -> Self {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .expect("failed to create reqwest client");

        Self {
            client,
            config,
            base_url: "https://api.telegram.org".to_string(),
        }
    }
}

/// Map a transport-level reqwest failure onto the normalized taxonomy.
fn classify_transport_error(err: reqwest::Error) -> SubmitError {
    if err.is_timeout() {
        SubmitError::Timeout
    } else if err.is_connect() || err.is_request() {
        SubmitError::Network(err.to_string())
    } else {
        SubmitError::Unknown(err.to_string())
    }
}

impl ReportSubmitter for TelegramSubmitter {
    async fn submit(&self, report: &str) -> Result<(), SubmitError> {
        let Some(config) = &self.config else {
            return Err(SubmitError::MissingConfiguration);
        };

        let url = format!(
            "{}/bot{}/sendMessage",
            self.base_url,
            config.token.expose_secret()
        );
        let body = SendMessageRequest {
            chat_id: &config.chat_id,
            text: report,
            parse_mode: "Markdown",
        };

        let response = self
            .client
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(classify_transport_error)?;

        let status = response.status();
        let raw = response
            .text()
            .await
            .map_err(classify_transport_error)?;
        let parsed: Option<SendMessageResponse> = serde_json::from_str(&raw).ok();

        if !status.is_success() {
            let description = parsed
                .and_then(|p| p.description)
                .unwrap_or_else(|| format!("HTTP {status}"));
            return Err(SubmitError::Rejected { description });
        }

        match parsed {
            Some(payload) if payload.ok => Ok(()),
            Some(payload) => Err(SubmitError::Rejected {
                description: payload
                    .description
                    .unwrap_or_else(|| "endpoint reported failure".to_string()),
            }),
            None => Err(SubmitError::Unknown(format!(
                "unparseable endpoint response: {raw}"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{body_partial_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn configured(server_uri: &str) -> TelegramSubmitter {
        TelegramSubmitter::new(Some(TelegramConfig {
            token: SecretString::from("test-token"),
            chat_id: "42".to_string(),
        }))
        .with_base_url(server_uri.to_string())
    }

    #[tokio::test]
    async fn test_unconfigured_submitter_short_circuits() {
        let submitter = TelegramSubmitter::new(None);
        let result = submitter.submit("report").await;
        assert!(matches!(result, Err(SubmitError::MissingConfiguration)));
    }

    #[tokio::test]
    async fn test_successful_delivery() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/bottest-token/sendMessage"))
            .and(body_partial_json(serde_json::json!({
                "chat_id": "42",
                "text": "report body",
                "parse_mode": "Markdown",
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "ok": true,
                "result": {"message_id": 7}
            })))
            .expect(1)
            .mount(&server)
            .await;

        let result = configured(&server.uri()).submit("report body").await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_rejection_carries_endpoint_description() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/bottest-token/sendMessage"))
            .respond_with(ResponseTemplate::new(400).set_body_json(serde_json::json!({
                "ok": false,
                "description": "Bad Request: chat not found"
            })))
            .mount(&server)
            .await;

        let result = configured(&server.uri()).submit("report").await;
        match result {
            Err(SubmitError::Rejected { description }) => {
                assert_eq!(description, "Bad Request: chat not found");
            }
            other => panic!("expected Rejected, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_ok_false_with_http_200_is_rejected() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/bottest-token/sendMessage"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "ok": false,
                "description": "Flood control exceeded"
            })))
            .mount(&server)
            .await;

        let result = configured(&server.uri()).submit("report").await;
        assert!(matches!(result, Err(SubmitError::Rejected { .. })));
    }

    #[tokio::test]
    async fn test_timeout_classification() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/bottest-token/sendMessage"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({"ok": true}))
                    .set_delay(Duration::from_secs(5)),
            )
            .mount(&server)
            .await;

        let submitter = configured(&server.uri()).with_timeout(Duration::from_millis(100));
        let result = submitter.submit("report").await;
        assert!(matches!(result, Err(SubmitError::Timeout)));
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_is_network_failure() {
        // Nothing listens on this port
        let submitter = configured("http://127.0.0.1:9");
        let result = submitter.submit("report").await;
        assert!(matches!(result, Err(SubmitError::Network(_))));
    }

    #[test]
    fn test_read_configured_filters_placeholder_and_blank() {
        // SAFETY: test-local env vars with unique names, removed below.
        unsafe { std::env::set_var("VITAFORM_TEST_PLACEHOLDER", "YOUR_BOT_TOKEN") };
        assert!(read_configured("VITAFORM_TEST_PLACEHOLDER", TOKEN_PLACEHOLDER).is_none());

        unsafe { std::env::set_var("VITAFORM_TEST_BLANK", "   ") };
        assert!(read_configured("VITAFORM_TEST_BLANK", TOKEN_PLACEHOLDER).is_none());

        unsafe { std::env::set_var("VITAFORM_TEST_SET", " 123:abc ") };
        assert_eq!(
            read_configured("VITAFORM_TEST_SET", TOKEN_PLACEHOLDER).as_deref(),
            Some("123:abc")
        );

        assert!(read_configured("VITAFORM_TEST_UNSET_XYZ", TOKEN_PLACEHOLDER).is_none());

        // SAFETY: removing what this test just set.
        unsafe {
            std::env::remove_var("VITAFORM_TEST_PLACEHOLDER");
            std::env::remove_var("VITAFORM_TEST_BLANK");
            std::env::remove_var("VITAFORM_TEST_SET");
        }
    }
}
