use dioxus::prelude::*;
use crate::constants::*;
use crate::icons::{Icon, IconId};

#[component]
pub fn Header(title: &'static str, show_menu: bool, on_menu_click: EventHandler<()>) -> Element {
    rsx! {
        div {
            style: "
                position: sticky; top: 0; z-index: 30;
                display: flex; align-items: center; gap: 16px;
                height: {HEADER_HEIGHT}px; padding: 0 24px; flex-shrink: 0;
                background-color: {BG_SURFACE}; border-bottom: 1px solid {BORDER_DEFAULT};
                user-select: none;
            ",
            if show_menu {
                button {
                    class: "collapse-btn",
                    style: "
                        width: 32px; height: 32px; border: none; border-radius: 6px;
                        background: transparent; color: {TEXT_PRIMARY}; cursor: pointer;
                        display: flex; align-items: center; justify-content: center;
                    ",
                    onclick: move |_| on_menu_click.call(()),
                    Icon { id: IconId::Menu, size: 20.0 }
                }
            }
            span { style: "font-size: 16px; font-weight: 600; color: {TEXT_PRIMARY};", "{title}" }
        }
    }
}
