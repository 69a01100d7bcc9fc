//! Reusable widgets shared across screens.

pub mod placeholder;
pub mod sentiment_bar;
