pub mod lifecycle;
pub mod presenter;
pub mod export;
pub mod actions;
