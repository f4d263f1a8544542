//! State management module
//!
//! Plain data structures behind the UI, each owned by the component that uses it:
//! - Navigation: routes, sidebar entries and sidebar display state
//! - Tutorial: walkthrough steps and the shared current position
//! - Notifications: the toast list
//! - Copy feedback: the transient "Copied" flag

mod navigation;
mod tutorial;
mod notifications;
mod copy_feedback;

pub use navigation::*;
pub use tutorial::*;
pub use notifications::*;
pub use copy_feedback::*;
