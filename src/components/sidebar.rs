use dioxus::prelude::*;
use crate::constants::*;
use crate::icons::{Icon, IconId};
use crate::state::{NavShellState, Route, Viewport, NAV_ENTRIES};

#[component]
pub fn Sidebar(
    shell: NavShellState,
    viewport: Viewport,
    active: Route,
    on_navigate: EventHandler<Route>,
    on_close: EventHandler<()>,
    on_toggle_collapse: EventHandler<()>,
) -> Element {
    let is_mobile = viewport.is_mobile();
    let show_labels = shell.labels_visible(viewport);
    let width = if show_labels { SIDEBAR_WIDTH } else { SIDEBAR_COLLAPSED_WIDTH };
    let collapse_icon = if shell.collapsed { IconId::ChevronRight } else { IconId::ChevronLeft };

    // Mobile: fixed overlay sliding in from the left. Desktop: static rail.
    let position = if is_mobile {
        let offset = if shell.is_open { 0.0 } else { -width };
        format!("position: fixed; top: 0; left: {offset}px; height: 100%; z-index: 50;")
    } else {
        "position: relative;".to_string()
    };

    rsx! {
        if is_mobile && shell.is_open {
            div {
                style: "
                    position: fixed; top: 0; left: 0; right: 0; bottom: 0;
                    background-color: rgba(10,10,11,0.8); z-index: 40;
                ",
                onclick: move |_| on_close.call(()),
            }
        }

        div {
            style: "
                {position}
                display: flex; flex-direction: column;
                width: {width}px; min-width: {width}px;
                background-color: {BG_ELEVATED}; border-right: 1px solid {BORDER_DEFAULT};
                transition: width 0.2s ease, min-width 0.2s ease, left 0.3s ease-out;
                overflow: hidden;
            ",

            div {
                style: "
                    display: flex; align-items: center; justify-content: space-between;
                    height: {HEADER_HEIGHT}px; padding: 0 16px; flex-shrink: 0;
                    background-color: {BG_SURFACE}; border-bottom: 1px solid {BORDER_DEFAULT};
                ",
                if show_labels {
                    span { style: "font-size: 18px; font-weight: 600; color: {ACCENT_PRIMARY};", "AI Studio" }
                }
                if is_mobile {
                    button {
                        class: "collapse-btn",
                        style: "
                            width: 28px; height: 28px; border: none; border-radius: 6px;
                            background: transparent; color: {TEXT_MUTED}; cursor: pointer;
                            display: flex; align-items: center; justify-content: center;
                        ",
                        onclick: move |_| on_close.call(()),
                        Icon { id: IconId::Close, size: 16.0 }
                    }
                } else {
                    button {
                        class: "collapse-btn",
                        style: "
                            width: 28px; height: 28px; border: none; border-radius: 6px;
                            background: transparent; color: {TEXT_MUTED}; cursor: pointer;
                            display: flex; align-items: center; justify-content: center;
                        ",
                        onclick: move |_| on_toggle_collapse.call(()),
                        Icon { id: collapse_icon, size: 16.0 }
                    }
                }
            }

            div {
                style: "display: flex; flex-direction: column; gap: 6px; flex: 1; padding: 12px; overflow-y: auto;",
                for entry in NAV_ENTRIES.iter() {
                    {
                        let is_active = entry.route == active;
                        let background = if is_active { BG_HOVER } else { "transparent" };
                        let color = if is_active { ACCENT_PRIMARY } else { TEXT_SECONDARY };
                        let justify = if show_labels { "flex-start" } else { "center" };
                        let route = entry.route;
                        let key = route.path();
                        rsx! {
                            div {
                                key: "{key}",
                                class: "nav-item",
                                title: "{entry.label}",
                                style: "
                                    display: flex; align-items: center; justify-content: {justify}; gap: 12px;
                                    padding: 10px 12px; border-radius: 10px; cursor: pointer;
                                    background-color: {background}; color: {color};
                                ",
                                onclick: move |_| on_navigate.call(route),
                                Icon { id: entry.icon, size: 18.0 }
                                if show_labels {
                                    span { style: "font-size: 14px; font-weight: 500;", "{entry.label}" }
                                }
                            }
                        }
                    }
                }
            }

            if show_labels {
                div {
                    style: "padding: 16px; border-top: 1px solid {BORDER_DEFAULT}; text-align: center;",
                    span { style: "font-size: 11px; color: {TEXT_DIM};", "Powered by AI" }
                }
            }
        }
    }
}
