//! Root application component
//!
//! Owns the sidebar state, the active route, the viewport class and the
//! notification list, and hands each page what it needs as props.

use std::time::Duration;

use dioxus::prelude::*;

use crate::components::{GeneratePage, Sidebar, Toaster, TutorialPage};
use crate::constants::*;
use crate::providers::BackendHandle;
use crate::state::{NavShellState, NotificationCenter, Route, Viewport};

#[component]
pub fn App() -> Element {
    let backend = use_context::<BackendHandle>();

    let mut shell = use_signal(NavShellState::default);
    let mut route = use_signal(Route::default);
    let mut viewport = use_signal(Viewport::default);
    let notifications = use_signal(NotificationCenter::default);
    let mut viewport_eval = use_signal(|| None::<document::Eval>);

    use_effect(move || {
        if viewport_eval().is_some() {
            return;
        }
        let eval = document::eval(VIEWPORT_WIDTH_SCRIPT);
        viewport_eval.set(Some(eval));
    });

    use_future(move || async move {
        loop {
            let Some(eval) = viewport_eval() else {
                tokio::time::sleep(Duration::from_millis(100)).await;
                continue;
            };
            let mut eval = eval;
            loop {
                match eval.recv::<f64>().await {
                    Ok(width) => {
                        let next = Viewport::from_width(width.max(0.0));
                        if viewport() != next {
                            tracing::debug!(width, ?next, "viewport class changed");
                            viewport.set(next);
                        }
                    }
                    Err(err) => {
                        tracing::warn!(error = ?err, "viewport width bridge closed; re-arming");
                        viewport_eval.set(None);
                        break;
                    }
                }
            }
            tokio::time::sleep(Duration::from_millis(100)).await;
        }
    });

    let current_viewport = viewport();
    let current_route = route();
    let page_key = current_route.path();
    let show_menu = current_viewport.is_mobile();
    let open_sidebar = move |_: ()| shell.write().open();

    rsx! {
        style {
            r#"
            *, *::before, *::after {{ box-sizing: border-box; }}
            html, body {{ margin: 0; padding: 0; overflow: hidden; background-color: {BG_BASE}; }}
            body {{ -webkit-font-smoothing: antialiased; }}
            ::-webkit-scrollbar {{ width: 6px; height: 6px; }}
            ::-webkit-scrollbar-track {{ background: transparent; }}
            ::-webkit-scrollbar-thumb {{ background: {BORDER_DEFAULT}; border-radius: 3px; }}
            ::-webkit-scrollbar-thumb:hover {{ background: {BORDER_STRONG}; }}
            button:disabled {{ cursor: not-allowed !important; }}
            textarea::placeholder {{ color: {TEXT_DIM}; }}
            .collapse-btn {{ opacity: 0.6; transition: opacity 0.15s ease, background-color 0.15s ease; }}
            .collapse-btn:hover {{ opacity: 1; background-color: {BG_HOVER} !important; }}
            .nav-item {{ transition: background-color 0.2s ease, color 0.2s ease; }}
            .nav-item:hover {{ background-color: {BG_HOVER} !important; color: {TEXT_PRIMARY} !important; }}
            .action-btn {{ transition: background-color 0.15s ease; }}
            .action-btn:hover:enabled {{ background-color: {BG_HOVER} !important; }}
            .fade-in {{ animation: fade-in 0.25s ease-out; }}
            .spin {{ animation: spin 1s linear infinite; }}
            @keyframes fade-in {{ from {{ opacity: 0; transform: translateY(4px); }} to {{ opacity: 1; transform: none; }} }}
            @keyframes spin {{ to {{ transform: rotate(360deg); }} }}
            "#
        }

        div {
            style: "
                display: flex; flex-direction: row;
                width: 100vw; height: 100vh;
                background-color: {BG_BASE}; color: {TEXT_PRIMARY};
                font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, Oxygen, Ubuntu, sans-serif;
                overflow: hidden; position: fixed; top: 0; left: 0;
            ",

            Sidebar {
                shell: shell(),
                viewport: current_viewport,
                active: current_route,
                on_navigate: move |next: Route| {
                    tracing::debug!(path = next.path(), "navigate");
                    route.set(next);
                    shell.write().on_navigate(viewport());
                },
                on_close: move |_: ()| shell.write().close(),
                on_toggle_collapse: move |_: ()| shell.write().toggle_collapsed(viewport()),
            }

            div {
                style: "flex: 1; display: flex; flex-direction: column; min-width: 0; height: 100%;",
                {match current_route.generation_kind() {
                    Some(kind) => rsx! {
                        GeneratePage {
                            key: "{page_key}",
                            kind,
                            backend: backend.clone(),
                            notifications,
                            show_menu,
                            on_menu_click: open_sidebar,
                        }
                    },
                    None => rsx! {
                        TutorialPage { show_menu, on_menu_click: open_sidebar }
                    },
                }}
            }
        }

        Toaster { center: notifications }
    }
}
