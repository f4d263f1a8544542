use std::time::Duration;

use dioxus::core::spawn_forever;
use dioxus::prelude::*;

use crate::constants::*;
use crate::icons::{Icon, IconId};
use crate::state::{NotificationCenter, Severity};

/// Pushes a toast and schedules its removal.
pub fn notify(
    mut center: Signal<NotificationCenter>,
    title: &str,
    description: &str,
    severity: Severity,
) {
    match severity {
        Severity::Destructive => tracing::warn!(title, description, "notification"),
        Severity::Normal => tracing::info!(title, description, "notification"),
    }
    let id = center.write().push(title, description, severity);
    // Outlives the page that raised it.
    let _ = spawn_forever(async move {
        tokio::time::sleep(Duration::from_millis(NOTIFICATION_DURATION_MS)).await;
        center.write().dismiss(id);
    });
}

#[component]
pub fn Toaster(center: Signal<NotificationCenter>) -> Element {
    let entries = center.read().entries().to_vec();

    rsx! {
        div {
            style: "
                position: fixed; bottom: 16px; right: 16px;
                display: flex; flex-direction: column; gap: 8px;
                width: 360px; max-width: calc(100vw - 32px);
                z-index: 200;
            ",
            for entry in entries {
                {
                    let (background, border, title_color) = match entry.severity {
                        Severity::Normal => (BG_ELEVATED, BORDER_DEFAULT, TEXT_PRIMARY),
                        Severity::Destructive => ("#450a0a", ACCENT_DESTRUCTIVE, "#fecaca"),
                    };
                    let id = entry.id;
                    let mut center = center;
                    rsx! {
                        div {
                            key: "{entry.id}",
                            class: "fade-in",
                            style: "
                                display: flex; align-items: flex-start; gap: 12px;
                                padding: 14px 16px; border-radius: 10px;
                                background-color: {background}; border: 1px solid {border};
                                box-shadow: 0 12px 28px rgba(0,0,0,0.45);
                            ",
                            div {
                                style: "display: flex; flex-direction: column; gap: 4px; flex: 1;",
                                span { style: "font-size: 13px; font-weight: 600; color: {title_color};", "{entry.title}" }
                                if !entry.description.is_empty() {
                                    span { style: "font-size: 12px; color: {TEXT_SECONDARY};", "{entry.description}" }
                                }
                            }
                            button {
                                class: "collapse-btn",
                                style: "
                                    border: none; background: transparent; color: {TEXT_MUTED};
                                    cursor: pointer; padding: 2px; border-radius: 4px;
                                ",
                                onclick: move |_| center.write().dismiss(id),
                                Icon { id: IconId::Close, size: 12.0 }
                            }
                        }
                    }
                }
            }
        }
    }
}
