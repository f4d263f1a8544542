use dioxus::prelude::*;

use crate::constants::*;
use crate::core::actions::{download_image, share_to_gist};
use crate::core::lifecycle::{
    execute, GenerationKind, GenerationPayload, GenerationResult, LifecycleState, RequestLifecycle,
};
use crate::core::presenter::{present, settle_notice};
use crate::icons::{Icon, IconId};
use crate::providers::BackendHandle;
use crate::state::{NotificationCenter, Severity};
use super::{notify, Header, OutputCard};

/// One generation form: prompt input, submit control and output card.
///
/// The page owns its [`RequestLifecycle`]; the App keys it by route so each
/// kind gets a fresh lifecycle.
#[component]
pub fn GeneratePage(
    kind: GenerationKind,
    backend: BackendHandle,
    notifications: Signal<NotificationCenter>,
    show_menu: bool,
    on_menu_click: EventHandler<()>,
) -> Element {
    let mut prompt = use_signal(String::new);
    let mut lifecycle = use_signal(move || RequestLifecycle::new(kind));

    let is_pending = lifecycle.read().is_pending();
    let can_submit = !is_pending && !prompt.read().trim().is_empty();
    let view = present(lifecycle.read().state(), kind.empty_message());
    let (button_icon, button_label) = if is_pending {
        (IconId::Spinner, kind.pending_label())
    } else {
        (kind.icon(), "Generate")
    };
    let button_accent = if kind == GenerationKind::Image { ACCENT_IMAGE } else { ACCENT_PRIMARY };
    let button_opacity = if can_submit { "1" } else { "0.5" };

    let on_generate = move |_: MouseEvent| {
        let Some(submission) = lifecycle.write().submit(&prompt.read()) else {
            return;
        };
        let backend = backend.clone();
        spawn(async move {
            let outcome = execute(backend.get(), submission.kind, &submission.request).await;
            let settled = lifecycle.write().settle(submission.ticket, outcome);
            if let Some(notice) = settled.as_ref().and_then(settle_notice) {
                notify(notifications, notice.title, &notice.description, notice.severity);
            }
        });
    };

    let on_share_gist = move |code: String| {
        if code.is_empty() {
            return;
        }
        match share_to_gist(&code) {
            Ok(()) => notify(
                notifications,
                "Opening GitHub Gist",
                "Create a new gist with your code.",
                Severity::Normal,
            ),
            Err(err) => {
                tracing::warn!(error = %err, "gist export failed");
                notify(notifications, "Failed to open GitHub", "Please try again.", Severity::Destructive);
            }
        }
    };

    let on_download = move |_: ()| {
        let reference = match lifecycle.read().state() {
            LifecycleState::Settled(GenerationResult::Success(GenerationPayload::Image(reference))) => {
                reference.clone()
            }
            _ => return,
        };
        spawn(async move {
            match download_image(&reference).await {
                Ok(Some(_)) => notify(
                    notifications,
                    "Downloaded!",
                    "Image saved to your device.",
                    Severity::Normal,
                ),
                Ok(None) => {}
                Err(err) => {
                    tracing::warn!(error = %err, "image download failed");
                    notify(notifications, "Download failed", "Please try again.", Severity::Destructive);
                }
            }
        });
    };

    rsx! {
        div {
            style: "display: flex; flex-direction: column; height: 100%;",
            Header { title: kind.title(), show_menu, on_menu_click }

            div {
                style: "
                    flex: 1; overflow-y: auto; padding: 24px;
                    display: flex; flex-direction: column; gap: 24px;
                    max-width: {CONTENT_MAX_WIDTH}px; width: 100%; margin: 0 auto;
                ",
                div {
                    style: "display: flex; flex-direction: column; gap: 16px;",
                    textarea {
                        placeholder: kind.placeholder(),
                        value: "{prompt}",
                        style: "
                            min-height: 130px; padding: 12px 14px; resize: vertical;
                            border-radius: 12px; border: 1px solid {BORDER_DEFAULT};
                            background-color: {BG_SURFACE}; color: {TEXT_PRIMARY};
                            font-family: inherit; font-size: 14px; outline: none;
                        ",
                        oninput: move |e| prompt.set(e.value()),
                    }
                    button {
                        disabled: !can_submit,
                        style: "
                            align-self: flex-start;
                            display: flex; align-items: center; gap: 8px;
                            padding: 10px 22px; border-radius: 10px; border: none;
                            background-color: {button_accent}; color: {TEXT_PRIMARY};
                            font-size: 14px; font-weight: 600; cursor: pointer;
                            opacity: {button_opacity};
                        ",
                        onclick: on_generate,
                        Icon { id: button_icon, size: 18.0 }
                        "{button_label}"
                    }
                }

                OutputCard {
                    view,
                    notifications,
                    on_share_gist,
                    on_download,
                }
            }
        }
    }
}
