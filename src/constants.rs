//! Shared UI constants such as colors, layout sizing, timings and scripts.

pub const BG_BASE: &str = "#0a0a0b";
pub const BG_ELEVATED: &str = "#141414";
pub const BG_SURFACE: &str = "#1a1a1a";
pub const BG_HOVER: &str = "#262626";

pub const BORDER_SUBTLE: &str = "#1f1f1f";
pub const BORDER_DEFAULT: &str = "#27272a";
pub const BORDER_STRONG: &str = "#3f3f46";
pub const BORDER_ACCENT: &str = "#3b82f6";

pub const TEXT_PRIMARY: &str = "#fafafa";
pub const TEXT_SECONDARY: &str = "#a1a1aa";
pub const TEXT_MUTED: &str = "#71717a";
pub const TEXT_DIM: &str = "#52525b";

pub const ACCENT_PRIMARY: &str = "#3b82f6";
pub const ACCENT_IMAGE: &str = "#a855f7";
pub const ACCENT_DESTRUCTIVE: &str = "#ef4444";

pub const SIDEBAR_WIDTH: f64 = 288.0;
pub const SIDEBAR_COLLAPSED_WIDTH: f64 = 64.0;
pub const HEADER_HEIGHT: f64 = 56.0;
pub const CONTENT_MAX_WIDTH: f64 = 896.0;

/// Below this webview width the sidebar becomes an overlay.
pub const MOBILE_BREAKPOINT_PX: f64 = 1024.0;

pub const COPY_ACK_DURATION_MS: u64 = 2000;
pub const NOTIFICATION_DURATION_MS: u64 = 5000;
pub const NOTIFICATION_LIMIT: usize = 1;

pub const VIEWPORT_WIDTH_SCRIPT: &str = r#"
let lastWidth = null;

function sendWidth() {
    const width = window.innerWidth || 0;
    if (lastWidth !== null && Math.abs(lastWidth - width) < 0.5) {
        return;
    }
    lastWidth = width;
    dioxus.send(width);
}

window.addEventListener("resize", sendWidth, { passive: true });
sendWidth();
await new Promise(() => {});
"#;

pub const COPY_TO_CLIPBOARD_SCRIPT: &str = r#"
const text = await dioxus.recv();
try {
    await navigator.clipboard.writeText(text);
    dioxus.send({ ok: true });
} catch (err) {
    dioxus.send({ ok: false, error: String(err) });
}
"#;
