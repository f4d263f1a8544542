use async_trait::async_trait;
use reqwest::StatusCode;
use serde_json::Value;

use super::GenerationBackend;
use crate::config::BackendConfig;
use crate::core::lifecycle::{error_message, GenerationRequest};
use crate::error::GenerationError;

const FUNCTIONS_PATH: &str = "functions/v1";

/// Client for Supabase Edge Functions.
pub struct SupabaseFunctions {
    client: reqwest::Client,
    base_url: Option<String>,
    anon_key: Option<String>,
}

impl SupabaseFunctions {
    pub fn new(config: &BackendConfig) -> Self {
        let client = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()
            .unwrap_or_else(|err| {
                tracing::warn!(error = %err, "falling back to default HTTP client");
                reqwest::Client::new()
            });
        Self {
            client,
            base_url: config.functions_url.clone(),
            anon_key: config.anon_key.clone(),
        }
    }

    fn function_url(&self, function: &str) -> Result<String, GenerationError> {
        let base = self.base_url.as_deref().ok_or_else(|| {
            GenerationError::Transport(
                "Generation backend is not configured. Set SUPABASE_URL.".to_string(),
            )
        })?;
        Ok(format!(
            "{}/{}/{}",
            base.trim_end_matches('/'),
            FUNCTIONS_PATH,
            function
        ))
    }
}

#[async_trait]
impl GenerationBackend for SupabaseFunctions {
    async fn invoke(
        &self,
        function: &str,
        request: &GenerationRequest,
    ) -> Result<Value, GenerationError> {
        let url = self.function_url(function)?;
        tracing::debug!(%url, "invoking edge function");

        let mut builder = self.client.post(&url).json(request);
        if let Some(key) = self.anon_key.as_deref() {
            builder = builder.bearer_auth(key).header("apikey", key);
        }

        let response = builder.send().await.map_err(|err| {
            GenerationError::Transport(format!(
                "Failed to send a request to the Edge Function: {}",
                err
            ))
        })?;
        let status = response.status();
        let body = response.text().await.map_err(|err| {
            GenerationError::Transport(format!("Failed to read Edge Function response: {}", err))
        })?;

        interpret_response(status, &body)
    }
}

/// Turns a raw HTTP status and body into the decoded JSON response.
///
/// An `error` field in the body wins over the status so the endpoint's own
/// diagnostic reaches the user.
fn interpret_response(status: StatusCode, body: &str) -> Result<Value, GenerationError> {
    let parsed = serde_json::from_str::<Value>(body);

    if !status.is_success() {
        if let Ok(payload) = parsed.as_ref() {
            if let Some(message) = error_message(payload) {
                return Err(GenerationError::Application(message));
            }
        }
        return Err(GenerationError::Transport(format!(
            "Edge Function returned a non-2xx status code ({})",
            status
        )));
    }

    parsed.map_err(|err| {
        GenerationError::Transport(format!("Failed to parse Edge Function response: {}", err))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::time::Duration;

    #[test]
    fn test_function_url_joins_base() {
        let functions = SupabaseFunctions::new(&BackendConfig {
            functions_url: Some("https://demo.supabase.co/".to_string()),
            anon_key: None,
            request_timeout: Duration::from_secs(5),
        });
        assert_eq!(
            functions.function_url("generate-code").unwrap(),
            "https://demo.supabase.co/functions/v1/generate-code"
        );
    }

    #[tokio::test]
    async fn test_unconfigured_backend_reports_transport_error() {
        let functions = SupabaseFunctions::new(&BackendConfig::default());
        let err = functions
            .invoke("generate-text", &GenerationRequest::new("hi"))
            .await
            .unwrap_err();
        assert!(matches!(err, GenerationError::Transport(message) if message.contains("SUPABASE_URL")));
    }

    #[test]
    fn test_success_body_is_decoded() {
        let value = interpret_response(StatusCode::OK, r#"{"text":"hello"}"#).unwrap();
        assert_eq!(value, json!({ "text": "hello" }));
    }

    #[test]
    fn test_error_status_prefers_body_message() {
        let err = interpret_response(StatusCode::TOO_MANY_REQUESTS, r#"{"error":"rate limited"}"#)
            .unwrap_err();
        assert_eq!(err, GenerationError::Application("rate limited".to_string()));

        let err = interpret_response(StatusCode::BAD_GATEWAY, "upstream down").unwrap_err();
        assert!(matches!(err, GenerationError::Transport(message) if message.contains("502")));
    }

    #[test]
    fn test_error_status_reads_structured_error() {
        let err = interpret_response(
            StatusCode::PAYMENT_REQUIRED,
            r#"{"error":{"message":"quota"}}"#,
        )
        .unwrap_err();
        assert_eq!(err, GenerationError::Application("quota".to_string()));

        let err = interpret_response(StatusCode::INTERNAL_SERVER_ERROR, r#"{"error":42}"#).unwrap_err();
        assert_eq!(err, GenerationError::Application("42".to_string()));
    }

    #[test]
    fn test_invalid_json_is_transport_error() {
        let err = interpret_response(StatusCode::OK, "<html>").unwrap_err();
        assert!(matches!(err, GenerationError::Transport(_)));
    }
}
