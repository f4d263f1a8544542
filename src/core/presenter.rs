//! Maps a lifecycle state to what the output card shows.

use crate::core::lifecycle::{GenerationPayload, GenerationResult, ImageReference, LifecycleState};
use crate::state::Severity;

/// Secondary actions offered next to a successful result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PresenterAction {
    Copy,
    ShareGist,
    Download,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PresenterView {
    Placeholder(String),
    Text {
        body: String,
        actions: Vec<PresenterAction>,
    },
    Code {
        source: String,
        actions: Vec<PresenterAction>,
    },
    Image {
        reference: ImageReference,
        actions: Vec<PresenterAction>,
    },
}

impl PresenterView {
    pub fn actions(&self) -> &[PresenterAction] {
        match self {
            PresenterView::Placeholder(_) => &[],
            PresenterView::Text { actions, .. }
            | PresenterView::Code { actions, .. }
            | PresenterView::Image { actions, .. } => actions,
        }
    }
}

/// Failures render as the placeholder; they reach the user as notifications.
pub fn present(state: &LifecycleState, empty_message: &str) -> PresenterView {
    let payload = match state {
        LifecycleState::Settled(GenerationResult::Success(payload)) => payload,
        LifecycleState::Idle
        | LifecycleState::Pending
        | LifecycleState::Settled(GenerationResult::Empty)
        | LifecycleState::Settled(GenerationResult::Failure(_)) => {
            return PresenterView::Placeholder(empty_message.to_string());
        }
    };

    match payload {
        GenerationPayload::Text(body) => PresenterView::Text {
            body: body.clone(),
            actions: vec![PresenterAction::Copy],
        },
        GenerationPayload::Code(source) => PresenterView::Code {
            source: source.clone(),
            actions: vec![PresenterAction::Copy, PresenterAction::ShareGist],
        },
        GenerationPayload::Image(reference) => PresenterView::Image {
            reference: reference.clone(),
            actions: vec![PresenterAction::Download],
        },
    }
}

/// Toast raised when a request settles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettleNotice {
    pub title: &'static str,
    pub description: String,
    pub severity: Severity,
}

/// Failures and image results announce themselves; text and code do not.
pub fn settle_notice(result: &GenerationResult) -> Option<SettleNotice> {
    match result {
        GenerationResult::Failure(message) => Some(SettleNotice {
            title: "Generation failed",
            description: message.clone(),
            severity: Severity::Destructive,
        }),
        GenerationResult::Success(GenerationPayload::Image(_)) => Some(SettleNotice {
            title: "Image generated!",
            description: "Your AI-generated image is ready.".to_string(),
            severity: Severity::Normal,
        }),
        GenerationResult::Success(_) | GenerationResult::Empty => None,
    }
}
