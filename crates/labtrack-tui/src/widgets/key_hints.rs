//! Bottom key-hint bar, contextual to the focused component

use labtrack_app::{AppState, DashboardFocus, Screen};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::Widget,
};

use crate::theme::styles;

pub struct KeyHints<'a> {
    state: &'a AppState,
}

impl<'a> KeyHints<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    /// `(key, action)` pairs for the current focus
    pub fn hints(&self) -> Vec<(&'static str, String)> {
        match &self.state.screen {
            Screen::Login(_) => fixed(&[
                ("Tab", "next field"),
                ("Enter", "sign in"),
                ("Esc", "quit"),
            ]),
            Screen::Dashboard(dash) => match dash.focus() {
                DashboardFocus::Table => {
                    let mut hints = fixed(&[
                        ("↑↓", "select"),
                        ("Enter", "edit"),
                        ("n", "new test"),
                        ("r", "refresh"),
                    ]);
                    hints.push(("f", format!("filter: {}", dash.status_filter.label())));
                    hints.extend(fixed(&[("L", "logout"), ("q", "quit")]));
                    hints
                }
                DashboardFocus::CreateForm => fixed(&[
                    ("Tab", "next field"),
                    ("←→", "change"),
                    ("Enter", "activate"),
                    ("Esc", "cancel"),
                ]),
                DashboardFocus::EditRow => fixed(&[
                    ("Tab", "status/result"),
                    ("←→", "status"),
                    ("Enter", "save"),
                    ("Esc", "cancel"),
                ]),
            },
        }
    }
}

fn fixed(pairs: &[(&'static str, &str)]) -> Vec<(&'static str, String)> {
    pairs.iter().map(|(k, a)| (*k, a.to_string())).collect()
}

impl Widget for KeyHints<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut spans = vec![Span::raw(" ")];
        for (key, action) in self.hints() {
            spans.push(Span::styled(key, styles::keybinding()));
            spans.push(Span::styled(format!(" {}  ", action), styles::text_muted()));
        }
        buf.set_line(area.x, area.y, &Line::from(spans), area.width);
    }
}
