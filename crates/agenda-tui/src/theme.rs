//! Warm-green palette and semantic styling for the TUI.

use agenda_core::Sentiment;
use agenda_core::present::{self, Rgb};
use ratatui::style::{Color, Modifier, Style};

// ── Core Palette ──────────────────────────────────────────────────────

pub const LEAF_GREEN: Color = rgb(present::WARM_PALETTE[0]); // #4caf50
pub const LIME: Color = rgb(present::WARM_PALETTE[1]); // #8bc34a
pub const MINT: Color = rgb(present::WARM_PALETTE[2]); // #a5d6a7
pub const PALE_MINT: Color = rgb(present::WARM_PALETTE[3]); // #c8e6c9
pub const ERROR_RED: Color = rgb(present::RED); // #b71c1c
pub const AMBER: Color = Color::Rgb(255, 193, 7); // #ffc107

// ── Extended Palette ──────────────────────────────────────────────────

pub const DIM_WHITE: Color = Color::Rgb(224, 224, 224); // #e0e0e0
pub const BORDER_GRAY: Color = rgb(present::GRAY); // #9e9e9e
pub const BG_HIGHLIGHT: Color = Color::Rgb(38, 50, 56); // #263238

/// Bar colors for the job type chart, cycled by index.
pub const BAR_SERIES: [Color; 4] = [LEAF_GREEN, LIME, MINT, PALE_MINT];

pub const fn rgb(c: Rgb) -> Color {
    Color::Rgb(c.0, c.1, c.2)
}

pub fn bar_color(index: usize) -> Color {
    BAR_SERIES[present::bar_palette_slot(index)]
}

pub fn sentiment_color(sentiment: Sentiment) -> Color {
    rgb(present::sentiment_color(sentiment))
}

// ── Semantic Styles ───────────────────────────────────────────────────

/// Title text for blocks/panels.
pub fn title_style() -> Style {
    Style::default().fg(LEAF_GREEN).add_modifier(Modifier::BOLD)
}

/// Border for a focused panel.
pub fn border_focused() -> Style {
    Style::default().fg(LIME)
}

/// Border for an unfocused panel.
pub fn border_default() -> Style {
    Style::default().fg(BORDER_GRAY)
}

/// Table header row.
pub fn table_header() -> Style {
    Style::default()
        .fg(LEAF_GREEN)
        .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
}

/// Normal table row text.
pub fn table_row() -> Style {
    Style::default().fg(DIM_WHITE)
}

/// Selected / highlighted table row.
pub fn table_selected() -> Style {
    Style::default()
        .fg(LIME)
        .bg(BG_HIGHLIGHT)
        .add_modifier(Modifier::BOLD)
}

/// Active tab in the tab bar.
pub fn tab_active() -> Style {
    Style::default().fg(LIME).add_modifier(Modifier::BOLD)
}

/// Inactive tab in the tab bar.
pub fn tab_inactive() -> Style {
    Style::default().fg(DIM_WHITE)
}

/// Key hint text (e.g., "q quit  r reload").
pub fn key_hint() -> Style {
    Style::default().fg(BORDER_GRAY)
}

/// Key hint key character.
pub fn key_hint_key() -> Style {
    Style::default().fg(LEAF_GREEN).add_modifier(Modifier::BOLD)
}

/// Big number on a metric card.
pub fn metric_value() -> Style {
    Style::default().fg(DIM_WHITE).add_modifier(Modifier::BOLD)
}

/// Failure message in place of a tab's content.
pub fn error_text() -> Style {
    Style::default().fg(ERROR_RED).add_modifier(Modifier::BOLD)
}
