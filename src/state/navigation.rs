use crate::constants::MOBILE_BREAKPOINT_PX;
use crate::core::lifecycle::GenerationKind;
use crate::icons::IconId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Route {
    #[default]
    Text,
    Image,
    Code,
    Tutorial,
}

impl Route {
    pub fn path(self) -> &'static str {
        match self {
            Route::Text => "/",
            Route::Image => "/image",
            Route::Code => "/code",
            Route::Tutorial => "/tutorial",
        }
    }

    pub fn title(self) -> &'static str {
        match self.generation_kind() {
            Some(kind) => kind.title(),
            None => "Tutorial",
        }
    }

    pub fn generation_kind(self) -> Option<GenerationKind> {
        match self {
            Route::Text => Some(GenerationKind::Text),
            Route::Image => Some(GenerationKind::Image),
            Route::Code => Some(GenerationKind::Code),
            Route::Tutorial => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavEntry {
    pub label: &'static str,
    pub icon: IconId,
    pub route: Route,
}

pub const NAV_ENTRIES: &[NavEntry] = &[
    NavEntry { label: "Generate Text", icon: IconId::Type, route: Route::Text },
    NavEntry { label: "Generate Image", icon: IconId::Image, route: Route::Image },
    NavEntry { label: "Generate Code", icon: IconId::Code, route: Route::Code },
    NavEntry { label: "Tutorial", icon: IconId::HelpCircle, route: Route::Tutorial },
];

/// Layout class derived from the webview width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Viewport {
    Mobile,
    #[default]
    Desktop,
}

impl Viewport {
    pub fn from_width(width: f64) -> Self {
        if width < MOBILE_BREAKPOINT_PX {
            Viewport::Mobile
        } else {
            Viewport::Desktop
        }
    }

    pub fn is_mobile(self) -> bool {
        self == Viewport::Mobile
    }
}

/// Sidebar display state. `is_open` drives the mobile overlay and
/// `collapsed` the desktop icon-only rail; the two never affect each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NavShellState {
    pub is_open: bool,
    pub collapsed: bool,
}

impl NavShellState {
    pub fn open(&mut self) {
        self.is_open = true;
    }

    pub fn close(&mut self) {
        self.is_open = false;
    }

    /// No-op on mobile.
    pub fn toggle_collapsed(&mut self, viewport: Viewport) {
        if viewport.is_mobile() {
            return;
        }
        self.collapsed = !self.collapsed;
    }

    /// Called when a destination is picked; closes the overlay on mobile.
    pub fn on_navigate(&mut self, viewport: Viewport) {
        if viewport.is_mobile() {
            self.close();
        }
    }

    pub fn labels_visible(&self, viewport: Viewport) -> bool {
        viewport.is_mobile() || !self.collapsed
    }
}
