use dioxus::prelude::*;

use crate::constants::*;
use crate::icons::{Icon, IconId};
use crate::state::{Route, TutorialState};
use super::Header;

#[component]
pub fn TutorialPage(show_menu: bool, on_menu_click: EventHandler<()>) -> Element {
    let mut tutorial = use_signal(TutorialState::default);

    let state = *tutorial.read();
    let Some(step) = state.step() else {
        return rsx! {};
    };
    let progress = state.progress_percent();
    let position_label = state.position_label();
    let prev_opacity = if state.is_first() { "0.4" } else { "1" };
    let next_opacity = if state.is_last() { "0.4" } else { "1" };

    rsx! {
        div {
            style: "display: flex; flex-direction: column; height: 100%;",
            Header { title: Route::Tutorial.title(), show_menu, on_menu_click }

            div {
                style: "
                    flex: 1; overflow-y: auto; padding: 24px;
                    display: flex; flex-direction: column; gap: 24px;
                    max-width: {CONTENT_MAX_WIDTH}px; width: 100%; margin: 0 auto;
                ",
                div {
                    style: "text-align: center; display: flex; flex-direction: column; gap: 6px;",
                    span { style: "font-size: 24px; font-weight: 700; color: {ACCENT_PRIMARY};", "Learn AI Studio" }
                    span { style: "font-size: 13px; color: {TEXT_MUTED};", "{position_label}" }
                }

                div {
                    style: "height: 8px; border-radius: 999px; background-color: {BG_SURFACE}; overflow: hidden;",
                    div {
                        style: "height: 100%; width: {progress}%; background-color: {ACCENT_PRIMARY}; transition: width 0.3s ease;",
                    }
                }

                div {
                    class: "fade-in",
                    style: "
                        padding: 32px; border-radius: 16px;
                        background-color: {BG_ELEVATED}; border: 1px solid {BORDER_DEFAULT};
                        display: flex; flex-direction: column; gap: 20px;
                    ",
                    div {
                        style: "display: flex; align-items: center; gap: 16px;",
                        if let Some(icon) = step.icon {
                            div {
                                style: "padding: 12px; border-radius: 12px; background-color: {BG_HOVER}; color: {ACCENT_PRIMARY};",
                                Icon { id: icon, size: 28.0 }
                            }
                        }
                        span { style: "font-size: 20px; font-weight: 600; color: {TEXT_PRIMARY};", "{step.title}" }
                    }
                    p { style: "margin: 0; font-size: 16px; line-height: 1.7; color: {TEXT_SECONDARY};", "{step.body}" }
                }

                div {
                    style: "display: flex; justify-content: space-between; gap: 16px;",
                    button {
                        class: "action-btn",
                        disabled: state.is_first(),
                        style: "
                            display: flex; align-items: center; gap: 6px;
                            padding: 8px 16px; border-radius: 10px; cursor: pointer;
                            border: 1px solid {BORDER_STRONG}; background: transparent;
                            color: {TEXT_PRIMARY}; opacity: {prev_opacity};
                        ",
                        onclick: move |_| tutorial.write().previous(),
                        Icon { id: IconId::ChevronLeft, size: 18.0 }
                        "Previous"
                    }
                    button {
                        class: "action-btn",
                        disabled: state.is_last(),
                        style: "
                            display: flex; align-items: center; gap: 6px;
                            padding: 8px 16px; border-radius: 10px; cursor: pointer; border: none;
                            background-color: {ACCENT_PRIMARY}; color: {TEXT_PRIMARY};
                            opacity: {next_opacity};
                        ",
                        onclick: move |_| tutorial.write().next(),
                        "Next"
                        Icon { id: IconId::ChevronRight, size: 18.0 }
                    }
                }

                div {
                    style: "padding-top: 24px; border-top: 1px solid {BORDER_DEFAULT};",
                    button {
                        style: "
                            width: 100%; padding: 14px; border-radius: 12px; cursor: pointer;
                            border: 1px solid {BORDER_ACCENT}; background-color: {BG_SURFACE};
                            color: {TEXT_PRIMARY}; font-size: 15px; font-weight: 600;
                            box-shadow: 0 0 24px rgba(59,130,246,0.25);
                        ",
                        onclick: move |_| tutorial.write().open_overlay(),
                        "Try Interactive Walkthrough"
                    }
                }
            }

            if state.overlay_open {
                TutorialOverlay { tutorial }
            }
        }
    }
}

/// Full-screen walkthrough reading the same [`TutorialState`] as the card view.
#[component]
fn TutorialOverlay(tutorial: Signal<TutorialState>) -> Element {
    let state = *tutorial.read();
    let Some(step) = state.step() else {
        return rsx! {};
    };
    let counter = format!("{} / {}", state.current() + 1, state.len());
    let highlight = if state.is_first() { BORDER_ACCENT } else { BORDER_DEFAULT };
    let mut tutorial = tutorial;

    rsx! {
        div {
            class: "fade-in",
            style: "
                position: fixed; top: 0; left: 0; right: 0; bottom: 0; z-index: 60;
                background-color: rgba(10,10,11,0.95);
                display: flex; align-items: center; justify-content: center; padding: 24px;
            ",
            button {
                class: "collapse-btn",
                style: "
                    position: absolute; top: 16px; right: 16px;
                    width: 36px; height: 36px; border: none; border-radius: 8px;
                    background: transparent; color: {TEXT_PRIMARY}; cursor: pointer;
                ",
                onclick: move |_| tutorial.write().close_overlay(),
                Icon { id: IconId::Close, size: 20.0 }
            }

            div {
                style: "max-width: 448px; display: flex; flex-direction: column; gap: 24px; text-align: center;",
                div {
                    style: "padding: 16px; border-radius: 16px; border: 2px dashed {highlight};",
                    if let Some(icon) = step.icon {
                        div {
                            style: "display: flex; justify-content: center; margin-bottom: 16px; color: {ACCENT_PRIMARY};",
                            Icon { id: icon, size: 64.0 }
                        }
                    }
                    h3 { style: "margin: 0 0 8px 0; font-size: 24px; color: {TEXT_PRIMARY};", "{step.title}" }
                    p { style: "margin: 0; color: {TEXT_MUTED};", "{step.body}" }
                }

                div {
                    style: "display: flex; gap: 16px; justify-content: center;",
                    button {
                        class: "action-btn",
                        disabled: state.is_first(),
                        style: "
                            padding: 8px 14px; border-radius: 10px; cursor: pointer;
                            border: 1px solid {BORDER_STRONG}; background: transparent; color: {TEXT_PRIMARY};
                        ",
                        onclick: move |_| tutorial.write().previous(),
                        Icon { id: IconId::ChevronLeft, size: 18.0 }
                    }
                    if state.is_last() {
                        button {
                            class: "action-btn",
                            style: "
                                padding: 8px 18px; border-radius: 10px; cursor: pointer; border: none;
                                background-color: {ACCENT_PRIMARY}; color: {TEXT_PRIMARY};
                            ",
                            onclick: move |_| tutorial.write().close_overlay(),
                            "Finish"
                        }
                    } else {
                        button {
                            class: "action-btn",
                            style: "
                                padding: 8px 14px; border-radius: 10px; cursor: pointer; border: none;
                                background-color: {ACCENT_PRIMARY}; color: {TEXT_PRIMARY};
                            ",
                            onclick: move |_| tutorial.write().next(),
                            Icon { id: IconId::ChevronRight, size: 18.0 }
                        }
                    }
                }

                span { style: "font-size: 13px; color: {TEXT_MUTED};", "{counter}" }
            }
        }
    }
}
