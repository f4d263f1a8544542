//! Prompt submission lifecycle shared by the text, image and code pages.
//!
//! Each page owns one [`RequestLifecycle`]. The flow is:
//!
//! 1. [`RequestLifecycle::submit`] validates the prompt and moves to `Pending`,
//!    handing back a [`Submission`] carrying a ticket.
//! 2. The page runs [`execute`] against a [`GenerationBackend`].
//! 3. [`RequestLifecycle::settle`] applies the outcome, unless a newer
//!    submission has superseded the ticket in the meantime.

use serde::Serialize;
use serde_json::Value;

use crate::error::GenerationError;
use crate::icons::IconId;
use crate::providers::GenerationBackend;

/// The three generation forms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GenerationKind {
    Text,
    Image,
    Code,
}

impl GenerationKind {
    /// Edge Function invoked for this kind.
    pub fn function_name(self) -> &'static str {
        match self {
            GenerationKind::Text => "generate-text",
            GenerationKind::Image => "generate-image",
            GenerationKind::Code => "generate-code",
        }
    }

    /// JSON field carrying the payload in a successful response.
    pub fn response_field(self) -> &'static str {
        match self {
            GenerationKind::Text => "text",
            GenerationKind::Image => "imageUrl",
            GenerationKind::Code => "code",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            GenerationKind::Text => "Generate Text",
            GenerationKind::Image => "Generate Image",
            GenerationKind::Code => "Generate Code",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            GenerationKind::Text => "Enter your prompt here... What would you like me to write?",
            GenerationKind::Image => {
                "Describe the image you want to create... Be as detailed as possible!"
            }
            GenerationKind::Code => {
                "Describe the code you need... What function or feature should it implement?"
            }
        }
    }

    pub fn empty_message(self) -> &'static str {
        match self {
            GenerationKind::Text => "Your generated text will appear here.",
            GenerationKind::Image => "Your generated image will appear here.",
            GenerationKind::Code => "Your generated code will appear here.",
        }
    }

    pub fn pending_label(self) -> &'static str {
        match self {
            GenerationKind::Image => "Creating...",
            GenerationKind::Text | GenerationKind::Code => "Generating...",
        }
    }

    pub fn empty_payload_message(self) -> &'static str {
        match self {
            GenerationKind::Text => "No text generated",
            GenerationKind::Image => "No image was generated",
            GenerationKind::Code => "No code generated",
        }
    }

    pub fn icon(self) -> IconId {
        match self {
            GenerationKind::Text => IconId::Sparkles,
            GenerationKind::Image => IconId::Image,
            GenerationKind::Code => IconId::Code,
        }
    }
}

/// Body sent to the generation endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenerationRequest {
    pub prompt: String,
}

impl GenerationRequest {
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
        }
    }
}

/// An image URL or `data:` URI returned by the image endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageReference(pub String);

impl ImageReference {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_data_uri(&self) -> bool {
        self.0.trim_start().starts_with("data:")
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerationPayload {
    Text(String),
    Code(String),
    Image(ImageReference),
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum GenerationResult {
    #[default]
    Empty,
    Success(GenerationPayload),
    Failure(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LifecycleState {
    #[default]
    Idle,
    Pending,
    Settled(GenerationResult),
}

/// Handed out by an accepted submit; the ticket must come back with the outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub ticket: u64,
    pub kind: GenerationKind,
    pub request: GenerationRequest,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RequestLifecycle {
    kind: GenerationKind,
    state: LifecycleState,
    latest_ticket: u64,
}

impl RequestLifecycle {
    pub fn new(kind: GenerationKind) -> Self {
        Self {
            kind,
            state: LifecycleState::Idle,
            latest_ticket: 0,
        }
    }

    pub fn state(&self) -> &LifecycleState {
        &self.state
    }

    pub fn is_pending(&self) -> bool {
        matches!(self.state, LifecycleState::Pending)
    }

    /// Starts a request for `prompt`. Blank prompts are ignored and leave state untouched.
    pub fn submit(&mut self, prompt: &str) -> Option<Submission> {
        if prompt.trim().is_empty() {
            tracing::debug!(kind = ?self.kind, "ignoring blank prompt");
            return None;
        }

        self.latest_ticket += 1;
        self.state = LifecycleState::Pending;
        tracing::info!(kind = ?self.kind, ticket = self.latest_ticket, "generation submitted");

        Some(Submission {
            ticket: self.latest_ticket,
            kind: self.kind,
            request: GenerationRequest::new(prompt),
        })
    }

    /// Applies the outcome for `ticket`. Returns the new result, or `None` if the
    /// ticket was superseded by a later submit.
    pub fn settle(
        &mut self,
        ticket: u64,
        outcome: Result<GenerationPayload, GenerationError>,
    ) -> Option<GenerationResult> {
        if ticket != self.latest_ticket || !self.is_pending() {
            tracing::debug!(
                kind = ?self.kind,
                ticket,
                latest = self.latest_ticket,
                "discarding stale generation response"
            );
            return None;
        }

        let result = match outcome {
            Ok(payload) => GenerationResult::Success(payload),
            Err(err) => {
                tracing::warn!(kind = ?self.kind, ticket, error = %err, "generation failed");
                GenerationResult::Failure(err.user_message())
            }
        };
        self.state = LifecycleState::Settled(result.clone());
        Some(result)
    }
}

/// Runs one request against the backend and decodes the response.
pub async fn execute(
    backend: &dyn GenerationBackend,
    kind: GenerationKind,
    request: &GenerationRequest,
) -> Result<GenerationPayload, GenerationError> {
    let response = backend.invoke(kind.function_name(), request).await?;
    decode_response(kind, &response)
}

/// Message carried by a response's `error` field, if any.
///
/// Strings are used as-is; objects contribute their `message` string when
/// present. Any other non-null value is rendered as JSON.
pub fn error_message(response: &Value) -> Option<String> {
    match response.get("error")? {
        Value::Null => None,
        Value::String(message) => Some(message.clone()),
        Value::Object(fields) => match fields.get("message") {
            Some(Value::String(message)) => Some(message.clone()),
            _ => Some(Value::Object(fields.clone()).to_string()),
        },
        other => Some(other.to_string()),
    }
}

/// Maps a decoded endpoint response to a payload for `kind`.
pub fn decode_response(kind: GenerationKind, response: &Value) -> Result<GenerationPayload, GenerationError> {
    if let Some(message) = error_message(response) {
        return Err(GenerationError::Application(message));
    }

    let value = response
        .get(kind.response_field())
        .and_then(|value| value.as_str())
        .filter(|value| !value.is_empty())
        .ok_or(GenerationError::EmptyPayload(kind))?
        .to_string();

    Ok(match kind {
        GenerationKind::Text => GenerationPayload::Text(value),
        GenerationKind::Code => GenerationPayload::Code(value),
        GenerationKind::Image => GenerationPayload::Image(ImageReference(value)),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use serde_json::json;
    use std::sync::Mutex;

    /// Replays a canned response and records every call.
    struct FakeBackend {
        response: Result<Value, GenerationError>,
        calls: Mutex<Vec<(String, String)>>,
    }

    impl FakeBackend {
        fn new(response: Result<Value, GenerationError>) -> Self {
            Self {
                response,
                calls: Mutex::new(Vec::new()),
            }
        }

        fn call_count(&self) -> usize {
            self.calls.lock().unwrap().len()
        }
    }

    #[async_trait]
    impl GenerationBackend for FakeBackend {
        async fn invoke(
            &self,
            function: &str,
            request: &GenerationRequest,
        ) -> Result<Value, GenerationError> {
            self.calls
                .lock()
                .unwrap()
                .push((function.to_string(), request.prompt.clone()));
            self.response.clone()
        }
    }

    async fn run(lifecycle: &mut RequestLifecycle, backend: &FakeBackend, prompt: &str) -> Option<GenerationResult> {
        let submission = lifecycle.submit(prompt)?;
        let outcome = execute(backend, submission.kind, &submission.request).await;
        lifecycle.settle(submission.ticket, outcome)
    }

    #[tokio::test]
    async fn test_blank_prompt_is_ignored() {
        let backend = FakeBackend::new(Ok(json!({ "text": "unused" })));
        let mut lifecycle = RequestLifecycle::new(GenerationKind::Text);

        assert!(run(&mut lifecycle, &backend, "").await.is_none());
        assert!(run(&mut lifecycle, &backend, "  \n\t ").await.is_none());
        assert_eq!(lifecycle.state(), &LifecycleState::Idle);
        assert_eq!(backend.call_count(), 0);
    }

    #[test]
    fn test_submit_clears_previous_result() {
        let mut lifecycle = RequestLifecycle::new(GenerationKind::Code);
        let first = lifecycle.submit("fizzbuzz").unwrap();
        lifecycle.settle(first.ticket, Ok(GenerationPayload::Code("fn main() {}".into())));
        assert!(matches!(lifecycle.state(), LifecycleState::Settled(GenerationResult::Success(_))));

        let second = lifecycle.submit("quicksort").unwrap();
        assert_eq!(lifecycle.state(), &LifecycleState::Pending);
        assert!(second.ticket > first.ticket);
        assert_eq!(second.request.prompt, "quicksort");
    }

    #[test]
    fn test_blank_submit_keeps_settled_result() {
        let mut lifecycle = RequestLifecycle::new(GenerationKind::Text);
        let submission = lifecycle.submit("hi").unwrap();
        lifecycle.settle(submission.ticket, Ok(GenerationPayload::Text("hello".into())));
        let before = lifecycle.state().clone();

        assert!(lifecycle.submit("   ").is_none());
        assert_eq!(lifecycle.state(), &before);
    }

    #[tokio::test]
    async fn test_text_success() {
        let backend = FakeBackend::new(Ok(json!({ "text": "hello" })));
        let mut lifecycle = RequestLifecycle::new(GenerationKind::Text);

        let result = run(&mut lifecycle, &backend, "say hello").await;
        let expected = GenerationResult::Success(GenerationPayload::Text("hello".into()));
        assert_eq!(result, Some(expected.clone()));
        assert_eq!(lifecycle.state(), &LifecycleState::Settled(expected));
        assert_eq!(
            backend.calls.lock().unwrap().as_slice(),
            &[("generate-text".to_string(), "say hello".to_string())]
        );
    }

    #[tokio::test]
    async fn test_application_error_becomes_failure() {
        let backend = FakeBackend::new(Ok(json!({ "error": "rate limited" })));
        let mut lifecycle = RequestLifecycle::new(GenerationKind::Text);

        run(&mut lifecycle, &backend, "anything").await;
        assert_eq!(
            lifecycle.state(),
            &LifecycleState::Settled(GenerationResult::Failure("rate limited".into()))
        );
    }

    #[tokio::test]
    async fn test_transport_error_without_message_uses_fallback() {
        let backend = FakeBackend::new(Err(GenerationError::Transport(String::new())));
        let mut lifecycle = RequestLifecycle::new(GenerationKind::Image);

        run(&mut lifecycle, &backend, "a red fox").await;
        assert_eq!(
            lifecycle.state(),
            &LifecycleState::Settled(GenerationResult::Failure("Please try again.".into()))
        );
    }

    #[tokio::test]
    async fn test_empty_payload_becomes_failure() {
        let backend = FakeBackend::new(Ok(json!({ "code": "" })));
        let mut lifecycle = RequestLifecycle::new(GenerationKind::Code);

        run(&mut lifecycle, &backend, "hello world").await;
        assert_eq!(
            lifecycle.state(),
            &LifecycleState::Settled(GenerationResult::Failure("No code generated".into()))
        );
    }

    #[test]
    fn test_stale_response_is_discarded() {
        let mut lifecycle = RequestLifecycle::new(GenerationKind::Text);
        let first = lifecycle.submit("one").unwrap();
        let second = lifecycle.submit("two").unwrap();

        assert!(lifecycle
            .settle(first.ticket, Ok(GenerationPayload::Text("late".into())))
            .is_none());
        assert!(lifecycle.is_pending());

        lifecycle.settle(second.ticket, Ok(GenerationPayload::Text("fresh".into())));
        assert_eq!(
            lifecycle.state(),
            &LifecycleState::Settled(GenerationResult::Success(GenerationPayload::Text("fresh".into())))
        );
    }

    #[test]
    fn test_decode_image_and_non_string_error() {
        let payload = decode_response(
            GenerationKind::Image,
            &json!({ "imageUrl": "data:image/png;base64,AAAA" }),
        )
        .unwrap();
        match payload {
            GenerationPayload::Image(reference) => assert!(reference.is_data_uri()),
            other => panic!("unexpected payload {:?}", other),
        }

        let err = decode_response(GenerationKind::Image, &json!({ "error": 42 })).unwrap_err();
        assert_eq!(err, GenerationError::Application("42".into()));

        let err = decode_response(GenerationKind::Image, &json!({ "error": null })).unwrap_err();
        assert_eq!(err, GenerationError::EmptyPayload(GenerationKind::Image));
    }

    #[test]
    fn test_error_object_uses_its_message() {
        let err = decode_response(GenerationKind::Text, &json!({ "error": { "message": "quota" } }))
            .unwrap_err();
        assert_eq!(err, GenerationError::Application("quota".into()));

        assert_eq!(
            error_message(&json!({ "error": { "code": 7 } })),
            Some(r#"{"code":7}"#.to_string())
        );
        assert_eq!(error_message(&json!({ "text": "ok" })), None);
    }
}
