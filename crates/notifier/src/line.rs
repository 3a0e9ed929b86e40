//! LINE Messaging API push notifications.

use crate::error::NotifyError;
use crate::Notifier;
use async_trait::async_trait;
use rest_client::{HttpTransport, RestClient};
use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;
use std::sync::Arc;

/// Messaging API host.
pub const LINE_API_URL: &str = "https://api.line.me";

const PUSH_PATH: &str = "/v2/bot/message/push";

const ACCESS_TOKEN_VAR: &str = "LINE_ACCESS_TOKEN";
const USER_ID_VAR: &str = "LINE_USER_ID";

#[derive(Serialize)]
struct PushRequest<'a> {
    to: &'a str,
    messages: [TextMessage<'a>; 1],
}

#[derive(Serialize)]
struct TextMessage<'a> {
    #[serde(rename = "type")]
    kind: &'static str,
    text: &'a str,
}

/// Pushes text messages to a single LINE user.
pub struct LineNotifier {
    client: RestClient,
    access_token: SecretString,
    user_id: String,
}

impl LineNotifier {
    /// Build a notifier from `LINE_ACCESS_TOKEN` and `LINE_USER_ID`.
    ///
    /// # Errors
    /// Returns `NotifyError::MissingEnvVar` if either is unset or empty, or
    /// `NotifyError::Rest` if the HTTP client cannot be built.
    pub fn from_env() -> Result<Self, NotifyError> {
        dotenvy::dotenv().ok();

        let access_token = required_var(ACCESS_TOKEN_VAR)?;
        let user_id = required_var(USER_ID_VAR)?;
        let client = RestClient::with_default_timeout(LINE_API_URL)?;

        Ok(Self::new(client, access_token, user_id))
    }

    /// Build a notifier on top of an existing transport.
    pub fn with_transport(
        transport: Arc<dyn HttpTransport>,
        access_token: String,
        user_id: String,
    ) -> Self {
        Self::new(
            RestClient::with_transport(LINE_API_URL, transport),
            access_token,
            user_id,
        )
    }

    fn new(client: RestClient, access_token: String, user_id: String) -> Self {
        Self {
            client,
            access_token: SecretString::from(access_token),
            user_id,
        }
    }
}

#[async_trait]
impl Notifier for LineNotifier {
    async fn notify(&self, message: &str) -> Result<(), NotifyError> {
        let body = serde_json::to_string(&PushRequest {
            to: &self.user_id,
            messages: [TextMessage {
                kind: "text",
                text: message,
            }],
        })?;

        let authorization = format!("Bearer {}", self.access_token.expose_secret());
        let headers = [("Authorization", authorization.as_str())];

        let response = self
            .client
            .post_json(PUSH_PATH, body, Some(&headers[..]))
            .await?;

        if !response.is_success() {
            return Err(NotifyError::Rejected {
                status: response.status,
                message: response.body,
            });
        }

        tracing::info!("Notification pushed");
        Ok(())
    }
}

impl std::fmt::Debug for LineNotifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LineNotifier")
            .field("user_id", &self.user_id)
            .field("access_token", &"[REDACTED]")
            .finish()
    }
}

fn required_var(name: &str) -> Result<String, NotifyError> {
    std::env::var(name)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .ok_or_else(|| NotifyError::MissingEnvVar(name.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rest_client::mock::MockTransport;

    fn notifier(mock: &Arc<MockTransport>) -> LineNotifier {
        LineNotifier::with_transport(mock.clone(), "token-123".into(), "U0123".into())
    }

    #[tokio::test]
    async fn test_push_request() {
        let mock = Arc::new(MockTransport::new());
        mock.push_response(200, "{}");

        notifier(&mock).notify("hello\nworld").await.unwrap();

        let request = &mock.requests()[0];
        assert_eq!(request.url, "https://api.line.me/v2/bot/message/push");
        assert_eq!(request.header("Authorization"), Some("Bearer token-123"));

        let body: serde_json::Value =
            serde_json::from_str(request.body.as_deref().unwrap()).unwrap();
        assert_eq!(body["to"], "U0123");
        assert_eq!(body["messages"][0]["type"], "text");
        assert_eq!(body["messages"][0]["text"], "hello\nworld");
    }

    #[tokio::test]
    async fn test_push_rejected() {
        let mock = Arc::new(MockTransport::new());
        mock.push_response(401, r#"{"message":"Authentication failed"}"#);

        let err = notifier(&mock).notify("hi").await.unwrap_err();
        match err {
            NotifyError::Rejected { status, message } => {
                assert_eq!(status, 401);
                assert!(message.contains("Authentication failed"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_debug_redacts_token() {
        let mock = Arc::new(MockTransport::new());
        let debug = format!("{:?}", notifier(&mock));
        assert!(!debug.contains("token-123"));
        assert!(debug.contains("U0123"));
    }
}
