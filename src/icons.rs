//! Icon identifiers and their glyphs.

use dioxus::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IconId {
    Type,
    Image,
    Code,
    HelpCircle,
    Sparkles,
    Copy,
    Check,
    Download,
    Github,
    Menu,
    Close,
    ChevronLeft,
    ChevronRight,
    Spinner,
}

const ICON_GLYPHS: &[(IconId, &str)] = &[
    (IconId::Type, "T"),
    (IconId::Image, "▣"),
    (IconId::Code, "</>"),
    (IconId::HelpCircle, "?"),
    (IconId::Sparkles, "✦"),
    (IconId::Copy, "⧉"),
    (IconId::Check, "✓"),
    (IconId::Download, "⤓"),
    (IconId::Github, "◎"),
    (IconId::Menu, "☰"),
    (IconId::Close, "✕"),
    (IconId::ChevronLeft, "‹"),
    (IconId::ChevronRight, "›"),
    (IconId::Spinner, "◌"),
];

impl IconId {
    pub fn glyph(self) -> &'static str {
        ICON_GLYPHS
            .iter()
            .find(|(id, _)| *id == self)
            .map(|(_, glyph)| *glyph)
            .unwrap_or("•")
    }
}

#[component]
pub fn Icon(id: IconId, #[props(default = 16.0)] size: f64) -> Element {
    let glyph = id.glyph();
    let spin = if id == IconId::Spinner { "spin" } else { "" };
    let font_size = size * 0.8;
    rsx! {
        span {
            class: "{spin}",
            style: "
                display: inline-flex; align-items: center; justify-content: center;
                width: {size}px; height: {size}px; font-size: {font_size}px;
                line-height: 1; flex-shrink: 0;
            ",
            "{glyph}"
        }
    }
}
