//! Error types for generation requests, presenter actions and startup config.

use crate::core::lifecycle::GenerationKind;

/// Shown when a failure carries no usable diagnostic.
pub const FALLBACK_FAILURE_MESSAGE: &str = "Please try again.";

/// Why a generation request did not produce a payload.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GenerationError {
    /// The request never got a usable HTTP response.
    #[error("{0}")]
    Transport(String),

    /// The endpoint answered but flagged an error.
    #[error("{0}")]
    Application(String),

    /// The endpoint answered without the field this kind expects.
    #[error("{}", .0.empty_payload_message())]
    EmptyPayload(GenerationKind),
}

impl GenerationError {
    /// The message surfaced to the user, never blank.
    pub fn user_message(&self) -> String {
        let message = self.to_string();
        if message.trim().is_empty() {
            FALLBACK_FAILURE_MESSAGE.to_string()
        } else {
            message
        }
    }
}

/// Failures of the secondary presenter actions. These never touch lifecycle state.
#[derive(Debug, thiserror::Error)]
pub enum ActionError {
    #[error("Clipboard write failed: {0}")]
    Clipboard(String),

    #[error("Image download failed: {0}")]
    Download(String),

    #[error("Could not open browser: {0}")]
    Export(String),
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable {0}")]
    Missing(&'static str),

    #[error("Invalid value for {name}: {value}")]
    Invalid { name: &'static str, value: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_transport_message_falls_back() {
        let err = GenerationError::Transport(String::new());
        assert_eq!(err.user_message(), FALLBACK_FAILURE_MESSAGE);

        let err = GenerationError::Application("   ".to_string());
        assert_eq!(err.user_message(), FALLBACK_FAILURE_MESSAGE);
    }

    #[test]
    fn specific_messages_are_kept() {
        let err = GenerationError::Application("rate limited".to_string());
        assert_eq!(err.user_message(), "rate limited");

        let err = GenerationError::EmptyPayload(GenerationKind::Image);
        assert_eq!(err.user_message(), "No image was generated");
    }
}
