use dioxus::prelude::*;

use crate::constants::*;
use crate::core::actions::copy_to_clipboard;
use crate::icons::{Icon, IconId};
use crate::state::{expire_after_delay, CopyFeedback, NotificationCenter, Severity};
use super::notify;

#[component]
pub fn CopyButton(text: String, notifications: Signal<NotificationCenter>) -> Element {
    let mut feedback = use_signal(CopyFeedback::default);
    let copied = feedback.read().is_acknowledged();
    let (icon, label) = if copied {
        (IconId::Check, "Copied")
    } else {
        (IconId::Copy, "Copy")
    };

    let on_copy = move |_: MouseEvent| {
        let text = text.clone();
        spawn(async move {
            match copy_to_clipboard(&text).await {
                Ok(()) => {
                    let token = feedback.write().acknowledge();
                    notify(notifications, "Copied!", "Content copied to clipboard.", Severity::Normal);
                    expire_after_delay(token, move |token| feedback.write().expire(token)).await;
                }
                Err(err) => {
                    tracing::warn!(error = %err, "copy failed");
                    notify(notifications, "Failed to copy", "Please try again.", Severity::Destructive);
                }
            }
        });
    };

    rsx! {
        button {
            class: "action-btn",
            style: "
                display: flex; align-items: center; gap: 6px;
                padding: 6px 12px; border-radius: 8px; cursor: pointer;
                border: 1px solid {BORDER_DEFAULT}; background-color: {BG_SURFACE};
                color: {TEXT_PRIMARY}; font-size: 12px;
            ",
            onclick: on_copy,
            Icon { id: icon, size: 14.0 }
            "{label}"
        }
    }
}
