//! UI components: layout shell, generation pages, output presentation and toasts.
mod header;
mod sidebar;
mod toaster;
mod copy_button;
mod output_card;
mod generate_page;
mod tutorial_page;

pub use header::Header;
pub use sidebar::Sidebar;
pub use toaster::{notify, Toaster};
pub use copy_button::CopyButton;
pub use output_card::OutputCard;
pub use generate_page::GeneratePage;
pub use tutorial_page::TutorialPage;
