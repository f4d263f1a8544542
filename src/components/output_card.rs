use dioxus::prelude::*;

use crate::constants::*;
use crate::core::presenter::{PresenterAction, PresenterView};
use crate::icons::{Icon, IconId};
use crate::state::NotificationCenter;
use super::CopyButton;

#[component]
pub fn OutputCard(
    view: PresenterView,
    notifications: Signal<NotificationCenter>,
    on_share_gist: EventHandler<String>,
    on_download: EventHandler<()>,
) -> Element {
    let actions = view.actions().to_vec();
    let copy_text = match &view {
        PresenterView::Text { body, .. } => Some(body.clone()),
        PresenterView::Code { source, .. } => Some(source.clone()),
        PresenterView::Placeholder(_) | PresenterView::Image { .. } => None,
    };

    rsx! {
        div {
            class: "fade-in",
            style: "
                min-height: 200px; padding: 24px; border-radius: 16px;
                background-color: {BG_ELEVATED}; border: 1px solid {BORDER_DEFAULT};
                display: flex; flex-direction: column; gap: 16px;
            ",

            if !actions.is_empty() {
                div {
                    style: "display: flex; gap: 8px; justify-content: flex-end; flex-wrap: wrap;",
                    for action in actions {
                        {match action {
                            PresenterAction::Copy => {
                                let key = "copy";
                                rsx! {
                                    CopyButton {
                                        key: "{key}",
                                        text: copy_text.clone().unwrap_or_default(),
                                        notifications,
                                    }
                                }
                            }
                            PresenterAction::ShareGist => {
                                let source = copy_text.clone().unwrap_or_default();
                                let key = "gist";
                                rsx! {
                                    button {
                                        key: "{key}",
                                        class: "action-btn",
                                        style: "
                                            display: flex; align-items: center; gap: 6px;
                                            padding: 6px 12px; border-radius: 8px; cursor: pointer;
                                            border: 1px solid {BORDER_STRONG}; background: transparent;
                                            color: {TEXT_PRIMARY}; font-size: 12px;
                                        ",
                                        onclick: move |_| on_share_gist.call(source.clone()),
                                        Icon { id: IconId::Github, size: 14.0 }
                                        "Share to GitHub"
                                    }
                                }
                            }
                            PresenterAction::Download => {
                                let key = "download";
                                rsx! {
                                    button {
                                        key: "{key}",
                                        class: "action-btn",
                                        style: "
                                            display: flex; align-items: center; gap: 6px;
                                            padding: 6px 12px; border-radius: 8px; cursor: pointer;
                                            border: 1px solid {BORDER_DEFAULT}; background-color: {BG_SURFACE};
                                            color: {TEXT_PRIMARY}; font-size: 12px;
                                        ",
                                        onclick: move |_| on_download.call(()),
                                        Icon { id: IconId::Download, size: 14.0 }
                                        "Download"
                                    }
                                }
                            }
                        }}
                    }
                }
            }

            {match view {
                PresenterView::Placeholder(message) => rsx! {
                    div {
                        style: "display: flex; align-items: center; justify-content: center; flex: 1; min-height: 150px;",
                        p { style: "color: {TEXT_MUTED}; text-align: center; margin: 0;", "{message}" }
                    }
                },
                PresenterView::Text { body, .. } => rsx! {
                    p {
                        style: "
                            margin: 0; white-space: pre-wrap; line-height: 1.7;
                            color: {TEXT_PRIMARY}; font-size: 14px;
                        ",
                        "{body}"
                    }
                },
                PresenterView::Code { source, .. } => rsx! {
                    pre {
                        style: "
                            margin: 0; padding: 16px; border-radius: 12px; overflow-x: auto;
                            background-color: {BG_BASE}; border: 1px solid {BORDER_SUBTLE};
                        ",
                        code {
                            style: "
                                font-family: 'SF Mono', Consolas, monospace; font-size: 13px;
                                white-space: pre; color: {TEXT_PRIMARY};
                            ",
                            "{source}"
                        }
                    }
                },
                PresenterView::Image { reference, .. } => {
                    let src = reference.as_str().to_string();
                    rsx! {
                        div {
                            style: "border-radius: 12px; overflow: hidden;",
                            img {
                                src: "{src}",
                                alt: "AI Generated",
                                style: "width: 100%; height: auto; object-fit: cover; display: block;",
                            }
                        }
                    }
                }
            }}
        }
    }
}
