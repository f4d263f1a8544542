use crate::icons::IconId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TutorialStep {
    pub title: &'static str,
    pub icon: Option<IconId>,
    pub body: &'static str,
}

pub const TUTORIAL_STEPS: &[TutorialStep] = &[
    TutorialStep {
        title: "Welcome to AI Studio",
        icon: None,
        body: "This tutorial will guide you through all the features of AI Studio. You can access this tutorial anytime from the sidebar menu.",
    },
    TutorialStep {
        title: "Generate Text",
        icon: Some(IconId::Type),
        body: "Enter a prompt describing what you want to write, then click Generate. The AI will create text content based on your description. Use this for articles, stories, emails, or any written content.",
    },
    TutorialStep {
        title: "Generate Images",
        icon: Some(IconId::Image),
        body: "Describe the image you want to create in detail. The more specific your description, the better the results. Click Generate to create your image.",
    },
    TutorialStep {
        title: "Generate Code",
        icon: Some(IconId::Code),
        body: "Describe the functionality you need, and the AI will generate code for you. Specify the programming language and any specific requirements in your prompt.",
    },
    TutorialStep {
        title: "Copy Content",
        icon: Some(IconId::Copy),
        body: "After generating text or code, click the Copy button to copy the content to your clipboard. You can then paste it anywhere you need.",
    },
    TutorialStep {
        title: "Download Images",
        icon: Some(IconId::Download),
        body: "Generated images can be downloaded directly to your device. Click the Download button to save the image file.",
    },
    TutorialStep {
        title: "Share to GitHub",
        icon: Some(IconId::Github),
        body: "Share your generated code directly to GitHub Gist. This opens your browser where you can create a public or private gist with your code.",
    },
];

/// Walkthrough position. The card list and the overlay both read `current`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TutorialState {
    steps: &'static [TutorialStep],
    current: usize,
    pub overlay_open: bool,
}

impl Default for TutorialState {
    fn default() -> Self {
        Self::new(TUTORIAL_STEPS)
    }
}

impl TutorialState {
    pub fn new(steps: &'static [TutorialStep]) -> Self {
        Self {
            steps,
            current: 0,
            overlay_open: false,
        }
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn step(&self) -> Option<&'static TutorialStep> {
        self.steps.get(self.current)
    }

    pub fn is_first(&self) -> bool {
        self.current == 0
    }

    pub fn is_last(&self) -> bool {
        self.current + 1 >= self.steps.len()
    }

    pub fn next(&mut self) {
        if !self.is_last() {
            self.current += 1;
        }
    }

    pub fn previous(&mut self) {
        self.current = self.current.saturating_sub(1);
    }

    pub fn open_overlay(&mut self) {
        self.overlay_open = true;
    }

    /// Closes the overlay; the position is kept for the card view.
    pub fn close_overlay(&mut self) {
        self.overlay_open = false;
    }

    pub fn position_label(&self) -> String {
        format!("Step {} of {}", self.current + 1, self.steps.len())
    }

    pub fn progress_percent(&self) -> f64 {
        if self.steps.is_empty() {
            return 0.0;
        }
        (self.current + 1) as f64 / self.steps.len() as f64 * 100.0
    }
}
