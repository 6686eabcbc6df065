//! Semantic style builders.

use labtrack_app::HealthStatus;
use labtrack_core::TestStatus;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders};

use super::palette;

// --- Text styles ---
pub fn text_primary() -> Style {
    Style::default().fg(palette::TEXT_PRIMARY)
}

pub fn text_secondary() -> Style {
    Style::default().fg(palette::TEXT_SECONDARY)
}

pub fn text_muted() -> Style {
    Style::default().fg(palette::TEXT_MUTED)
}

pub fn error_text() -> Style {
    Style::default().fg(palette::STATUS_RED)
}

// --- Border styles ---
pub fn border_inactive() -> Style {
    Style::default().fg(palette::BORDER_DIM)
}

pub fn border_active() -> Style {
    Style::default().fg(palette::BORDER_ACTIVE)
}

// --- Accent styles ---
pub fn accent() -> Style {
    Style::default().fg(palette::ACCENT)
}

pub fn accent_bold() -> Style {
    Style::default()
        .fg(palette::ACCENT)
        .add_modifier(Modifier::BOLD)
}

// --- Keybinding hint style ---
pub fn keybinding() -> Style {
    Style::default().fg(palette::STATUS_YELLOW)
}

/// "Black on Cyan" - used for focused buttons and selected options
pub fn focused_selected() -> Style {
    Style::default()
        .fg(palette::CONTRAST_FG)
        .bg(palette::ACCENT)
        .add_modifier(Modifier::BOLD)
}

// --- Form controls ---
pub fn input_field(focused: bool) -> Style {
    if focused {
        Style::default()
            .fg(palette::TEXT_PRIMARY)
            .bg(palette::INPUT_ACTIVE_BG)
    } else {
        Style::default()
            .fg(palette::TEXT_SECONDARY)
            .bg(palette::INPUT_BG)
    }
}

pub fn field_label(focused: bool) -> Style {
    if focused {
        accent_bold()
    } else {
        text_secondary()
    }
}

/// Button style; a disabled button is dimmed whatever its focus
pub fn button(focused: bool, enabled: bool) -> Style {
    match (focused, enabled) {
        (_, false) => text_muted(),
        (true, true) => focused_selected(),
        (false, true) => accent(),
    }
}

// --- Block builders ---
pub fn card_block(focused: bool) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(if focused {
            border_active()
        } else {
            border_inactive()
        })
}

// --- Indicators ---

/// Backend health indicator for the header.
///
/// Returns `(icon_char, label, Style)`.
pub fn health_indicator(health: HealthStatus) -> (&'static str, &'static str, Style) {
    match health {
        HealthStatus::Online => (
            "●",
            "online",
            Style::default()
                .fg(palette::STATUS_GREEN)
                .add_modifier(Modifier::BOLD),
        ),
        HealthStatus::Offline => (
            "●",
            "offline",
            Style::default()
                .fg(palette::STATUS_RED)
                .add_modifier(Modifier::BOLD),
        ),
        HealthStatus::Checking => ("○", "checking", text_muted()),
    }
}

/// Color for a test status badge
pub fn test_status(status: &TestStatus) -> Style {
    match status {
        TestStatus::Pending => Style::default().fg(palette::STATUS_YELLOW),
        TestStatus::InProgress => Style::default().fg(palette::STATUS_BLUE),
        TestStatus::Completed => Style::default().fg(palette::STATUS_GREEN),
        TestStatus::Other(_) => text_secondary(),
    }
}
