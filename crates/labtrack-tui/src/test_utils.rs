//! Rendering helpers for widget and screen tests
//!
//! [`TestTerminal`] renders into ratatui's `TestBackend` and exposes the
//! result as plain text rows, so tests assert on what an operator would see.

use labtrack_api::test_utils::sample_record;
use labtrack_app::{AppState, DashboardState, Screen};
use labtrack_core::{TestRecord, TestStatus};
use ratatui::backend::TestBackend;
use ratatui::layout::Rect;
use ratatui::widgets::Widget;
use ratatui::Terminal;

use crate::render;

pub struct TestTerminal {
    terminal: Terminal<TestBackend>,
}

impl TestTerminal {
    /// 80x24, the smallest screen the layout is designed for
    pub fn new() -> Self {
        Self::sized(80, 24)
    }

    pub fn sized(width: u16, height: u16) -> Self {
        let terminal = Terminal::new(TestBackend::new(width, height))
            .expect("TestBackend terminal is infallible");
        Self { terminal }
    }

    pub fn area(&self) -> Rect {
        self.terminal.backend().buffer().area
    }

    pub fn render_widget<W: Widget>(&mut self, widget: W, area: Rect) {
        self.terminal
            .draw(|frame| frame.render_widget(widget, area))
            .expect("widget render");
    }

    /// Render the whole application screen
    pub fn draw_app(&mut self, state: &AppState) {
        self.terminal
            .draw(|frame| render::view(frame, state))
            .expect("view render");
    }

    /// Rendered text, one string per terminal row
    pub fn rows(&self) -> Vec<String> {
        let buffer = self.terminal.backend().buffer();
        let width = usize::from(buffer.area.width).max(1);
        buffer
            .content()
            .chunks(width)
            .map(|cells| cells.iter().map(|cell| cell.symbol()).collect())
            .collect()
    }

    pub fn buffer_contains(&self, text: &str) -> bool {
        self.rows().iter().any(|row| row.contains(text))
    }

    pub fn line_contains(&self, y: u16, text: &str) -> bool {
        self.rows()
            .get(usize::from(y))
            .is_some_and(|row| row.contains(text))
    }

    /// Index of the first row containing `text`
    pub fn find_line(&self, text: &str) -> Option<u16> {
        self.rows()
            .iter()
            .position(|row| row.contains(text))
            .and_then(|y| u16::try_from(y).ok())
    }

    /// All rows joined, for failure messages
    pub fn content(&self) -> String {
        self.rows().join("\n")
    }
}

impl Default for TestTerminal {
    fn default() -> Self {
        Self::new()
    }
}

/// Ann (Pending) then Bob (Completed)
pub fn two_records() -> Vec<TestRecord> {
    vec![
        sample_record(1, "Ann", TestStatus::Pending),
        sample_record(2, "Bob", TestStatus::Completed),
    ]
}

/// A dashboard whose initial fetch has completed with `tests`
pub fn loaded_dashboard(tests: Vec<TestRecord>) -> DashboardState {
    DashboardState {
        tests,
        loading: false,
        ..Default::default()
    }
}

pub fn dashboard_app(dash: DashboardState) -> AppState {
    let mut state = AppState::new();
    state.screen = Screen::Dashboard(dash);
    state
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::widgets::Paragraph;

    #[test]
    fn test_rows_match_terminal_size() {
        let term = TestTerminal::sized(12, 3);
        let rows = term.rows();
        assert_eq!(rows.len(), 3);
        assert!(rows.iter().all(|r| r.chars().count() == 12));
    }

    #[test]
    fn test_text_lookup() {
        let mut term = TestTerminal::sized(20, 4);
        term.render_widget(Paragraph::new("first\nsecond"), term.area());

        assert!(term.buffer_contains("second"));
        assert!(!term.buffer_contains("third"));
        assert!(term.line_contains(0, "first"));
        assert!(!term.line_contains(0, "second"));
        assert!(!term.line_contains(10, "first"));
        assert_eq!(term.find_line("second"), Some(1));
    }
}
