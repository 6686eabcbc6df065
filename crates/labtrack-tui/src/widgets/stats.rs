//! Summary cards: total and per-status counts

use labtrack_core::{TestStatus, TestSummary};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::Span,
    widgets::{Paragraph, Widget},
};

use crate::theme::styles;

pub struct StatsCards<'a> {
    summary: &'a TestSummary,
}

impl<'a> StatsCards<'a> {
    pub fn new(summary: &'a TestSummary) -> Self {
        Self { summary }
    }

    fn cards(&self) -> [(&'static str, usize, Style); 4] {
        [
            ("Total Tests", self.summary.total, styles::text_primary()),
            (
                "Pending",
                self.summary.pending,
                styles::test_status(&TestStatus::Pending),
            ),
            (
                "In Progress",
                self.summary.in_progress,
                styles::test_status(&TestStatus::InProgress),
            ),
            (
                "Completed",
                self.summary.completed,
                styles::test_status(&TestStatus::Completed),
            ),
        ]
    }
}

impl Widget for StatsCards<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let columns = Layout::horizontal([Constraint::Fill(1); 4]).split(area);

        for ((label, count, style), column) in self.cards().into_iter().zip(columns.iter()) {
            let block = styles::card_block(false)
                .title(format!(" {} ", label))
                .title_style(styles::text_secondary());
            Paragraph::new(Span::styled(
                count.to_string(),
                style.add_modifier(Modifier::BOLD),
            ))
            .alignment(Alignment::Center)
            .block(block)
            .render(*column, buf);
        }
    }
}
