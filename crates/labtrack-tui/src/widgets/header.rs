//! Header bar widget
//!
//! Shows the app title and backend URL; on the dashboard also the backend
//! health indicator and the logout hint.

use labtrack_app::HealthStatus;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Widget,
};

use crate::theme::{palette, styles};

pub const APP_TITLE: &str = "Lab Test Tracker";

/// Main header with title, base URL and (when logged in) health + logout
pub struct MainHeader<'a> {
    base_url: &'a str,
    health: Option<HealthStatus>,
}

impl<'a> MainHeader<'a> {
    pub fn new(base_url: &'a str) -> Self {
        Self {
            base_url,
            health: None,
        }
    }

    /// Show the backend health indicator and logout hint
    pub fn with_health(mut self, health: HealthStatus) -> Self {
        self.health = Some(health);
        self
    }
}

impl Widget for MainHeader<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::card_block(false).style(Style::default().bg(palette::CARD_BG));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let left_line = Line::from(vec![
            Span::raw(" "),
            Span::styled(APP_TITLE, styles::accent_bold()),
            Span::raw(" "),
            Span::styled("/", styles::text_muted()),
            Span::raw(" "),
            Span::styled(self.base_url, styles::text_secondary()),
        ]);
        let left_width = left_line.width() as u16;

        let right_line = self.health.map(|health| {
            let (icon, label, style) = styles::health_indicator(health);
            Line::from(vec![
                Span::styled(format!("{} {}", icon, label), style),
                Span::raw("  "),
                Span::styled("[", styles::text_muted()),
                Span::styled("L", styles::keybinding()),
                Span::styled("] Logout ", styles::text_muted()),
            ])
        });

        buf.set_line(inner.x, inner.y, &left_line, inner.width);

        // Right-aligned section only when it doesn't overlap the title
        if let Some(right_line) = right_line {
            let right_width = right_line.width() as u16;
            if left_width + right_width + 2 <= inner.width {
                let right_x = inner.x + inner.width - right_width;
                buf.set_line(right_x, inner.y, &right_line, right_width);
            }
        }
    }
}
