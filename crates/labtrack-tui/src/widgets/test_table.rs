//! Lab test table with inline status/result editing

use labtrack_app::{DashboardState, EditFocus, EditState};
use labtrack_core::{format_created_at, TestRecord};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{
        Cell, HighlightSpacing, Paragraph, Row, StatefulWidget, Table, TableState as ViewState,
        Widget,
    },
};

use super::input::{input_span, select_span};
use crate::theme::{palette, styles};

pub const LOADING_TEXT: &str = "Loading tests...";
pub const EMPTY_TEXT: &str = "No lab tests found. Create your first test above.";
pub const NO_MATCH_TEXT: &str = "No lab tests match the current filter.";
pub const NO_RESULT: &str = "No result";

const HEADERS: [&str; 7] = [
    "ID", "Patient", "Doctor", "Type", "Status", "Result", "Created",
];

/// Width of the inline result editor
const RESULT_EDITOR_WIDTH: u16 = 16;

pub struct TestTable<'a> {
    dash: &'a DashboardState,
    spinner: char,
}

impl<'a> TestTable<'a> {
    pub fn new(dash: &'a DashboardState) -> Self {
        Self { dash, spinner: ' ' }
    }

    pub fn spinner(mut self, frame: char) -> Self {
        self.spinner = frame;
        self
    }

    fn title(&self) -> Line<'static> {
        let mut spans = vec![Span::styled(
            format!(" Lab Tests ({}) ", self.dash.tests.len()),
            styles::accent_bold(),
        )];
        if self.dash.status_filter.is_active() {
            spans.push(Span::styled(
                format!("filter: {} ", self.dash.status_filter.label()),
                styles::keybinding(),
            ));
        }
        if self.dash.is_refreshing() && !self.dash.loading {
            spans.push(Span::styled(
                format!("{} refreshing ", self.spinner),
                styles::text_muted(),
            ));
        }
        Line::from(spans)
    }

    fn status_line(&self) -> Option<Line<'static>> {
        if let Some(error) = &self.dash.table.error {
            return Some(Line::from(Span::styled(
                format!(" {} ", error),
                styles::error_text(),
            )));
        }
        if self.dash.table.edit.is_saving() {
            return Some(Line::from(Span::styled(
                format!(" {} Saving... ", self.spinner),
                styles::text_muted(),
            )));
        }
        None
    }

    fn row(&self, record: &TestRecord) -> Row<'static> {
        let mut cells = vec![
            Cell::from(record.id.to_string()).style(styles::text_muted()),
            Cell::from(record.patient_name.clone()).style(styles::text_primary()),
            Cell::from(record.doctor_name.clone()).style(styles::text_secondary()),
            Cell::from(record.test_type.as_str().to_string()).style(styles::text_secondary()),
        ];

        match &self.dash.table.edit {
            EditState::Editing {
                id,
                draft_status,
                draft_result,
                focus,
                ..
            } if id == &record.id => {
                cells.push(Cell::from(select_span(
                    draft_status.as_str(),
                    *focus == EditFocus::Status,
                )));
                cells.push(Cell::from(input_span(
                    draft_result,
                    *focus == EditFocus::Result,
                    false,
                    RESULT_EDITOR_WIDTH,
                )));
                cells.push(Cell::from(format_created_at(record.created_at.as_deref())));
                return Row::new(cells).style(Style::default().bg(palette::ROW_EDITING_BG));
            }
            _ => {}
        }

        cells.push(
            Cell::from(record.status.as_str().to_string())
                .style(styles::test_status(&record.status)),
        );
        cells.push(match record.result_text() {
            Some(result) => Cell::from(result.to_string()).style(styles::text_primary()),
            None => Cell::from(NO_RESULT).style(styles::text_muted()),
        });
        cells.push(
            Cell::from(format_created_at(record.created_at.as_deref()))
                .style(styles::text_muted()),
        );
        Row::new(cells)
    }
}

impl Widget for TestTable<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut block = styles::card_block(false)
            .title(self.title())
            .style(Style::default().bg(palette::CARD_BG));
        if let Some(status) = self.status_line() {
            block = block.title_bottom(status);
        }

        let visible = self.dash.visible_tests();
        let placeholder = if self.dash.loading {
            Some(LOADING_TEXT)
        } else if self.dash.tests.is_empty() {
            Some(EMPTY_TEXT)
        } else if visible.is_empty() {
            Some(NO_MATCH_TEXT)
        } else {
            None
        };

        if let Some(text) = placeholder {
            Paragraph::new(Span::styled(text, styles::text_secondary()))
                .alignment(Alignment::Center)
                .block(block)
                .render(area, buf);
            return;
        }

        let header = Row::new(HEADERS.iter().map(|h| Cell::from(*h)))
            .style(styles::text_secondary().add_modifier(Modifier::BOLD));
        let rows: Vec<Row> = visible.iter().map(|record| self.row(record)).collect();
        let widths = [
            Constraint::Length(4),
            Constraint::Fill(2),
            Constraint::Fill(2),
            Constraint::Length(6),
            Constraint::Length(15),
            Constraint::Fill(2),
            Constraint::Length(19),
        ];

        let highlight = if self.dash.table.edit.is_editing() {
            Style::default()
        } else {
            Style::default().bg(palette::ROW_SELECTED_BG)
        };
        let table = Table::new(rows, widths)
            .header(header)
            .block(block)
            .column_spacing(1)
            .row_highlight_style(highlight)
            .highlight_symbol("▶ ")
            .highlight_spacing(HighlightSpacing::Always);

        let mut view_state = ViewState::default().with_selected(Some(self.dash.table.selected));
        StatefulWidget::render(table, area, buf, &mut view_state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{loaded_dashboard, two_records, TestTerminal};
    use labtrack_app::{RequestId, StatusFilter};
    use labtrack_core::{TestId, TestStatus};

    const WIDTH: u16 = 110;

    fn render(dash: &DashboardState) -> TestTerminal {
        let mut term = TestTerminal::sized(WIDTH, 10);
        term.render_widget(TestTable::new(dash), term.area());
        term
    }

    #[test]
    fn test_loading_placeholder() {
        let dash = DashboardState::default();
        let term = render(&dash);
        assert!(term.buffer_contains(LOADING_TEXT));
        assert!(!term.buffer_contains("Patient"));
    }

    #[test]
    fn test_empty_list_prompt() {
        let dash = loaded_dashboard(Vec::new());
        let term = render(&dash);
        assert!(term.buffer_contains(EMPTY_TEXT));
        assert!(term.buffer_contains("Lab Tests (0)"));
    }

    #[test]
    fn test_filter_without_matches_prompt() {
        let mut dash = loaded_dashboard(two_records());
        dash.status_filter = StatusFilter::Only(TestStatus::InProgress);
        let term = render(&dash);

        assert!(term.buffer_contains(NO_MATCH_TEXT));
        assert!(term.buffer_contains("filter: In Progress"));
    }

    #[test]
    fn test_rows_in_given_order() {
        let dash = loaded_dashboard(two_records());
        let term = render(&dash);

        let ann = term.find_line("Ann").expect("Ann row");
        let bob = term.find_line("Bob").expect("Bob row");
        assert!(ann < bob, "rows must keep backend order");
        assert!(term.line_contains(ann, "Pending"));
        assert!(term.line_contains(bob, "Completed"));
        assert!(term.buffer_contains("Lab Tests (2)"));
    }

    #[test]
    fn test_missing_result_placeholder() {
        let mut records = two_records();
        records[1].result = Some("Normal".into());
        records[0].result = Some(String::new());
        let dash = loaded_dashboard(records);
        let term = render(&dash);

        let ann = term.find_line("Ann").expect("Ann row");
        let bob = term.find_line("Bob").expect("Bob row");
        assert!(term.line_contains(ann, NO_RESULT));
        assert!(term.line_contains(bob, "Normal"));
    }

    #[test]
    fn test_missing_created_at_renders_na() {
        let mut records = two_records();
        records[0].created_at = None;
        let dash = loaded_dashboard(records);
        let term = render(&dash);

        let ann = term.find_line("Ann").expect("Ann row");
        assert!(term.line_contains(ann, "N/A"));
    }

    #[test]
    fn test_selected_row_has_marker() {
        let mut dash = loaded_dashboard(two_records());
        dash.table.selected = 1;
        let term = render(&dash);

        let bob = term.find_line("Bob").expect("Bob row");
        assert!(term.line_contains(bob, "▶"));
    }

    #[test]
    fn test_editing_row_shows_draft_controls() {
        let mut dash = loaded_dashboard(two_records());
        dash.table.edit = EditState::Editing {
            id: TestId::Number(2),
            draft_status: TestStatus::InProgress,
            draft_result: "Borderline".into(),
            focus: EditFocus::Result,
            saving: None,
        };
        let term = render(&dash);

        let bob = term.find_line("Bob").expect("Bob row");
        assert!(term.line_contains(bob, "◂ In Progress ▸"));
        assert!(term.line_contains(bob, "Borderline▏"));

        // Other rows render normally
        let ann = term.find_line("Ann").expect("Ann row");
        assert!(term.line_contains(ann, NO_RESULT));
    }

    #[test]
    fn test_saving_and_error_footer() {
        let mut dash = loaded_dashboard(two_records());
        dash.table.edit = EditState::Editing {
            id: TestId::Number(1),
            draft_status: TestStatus::Completed,
            draft_result: String::new(),
            focus: EditFocus::Status,
            saving: Some(RequestId::new(8)),
        };
        let term = render(&dash);
        assert!(term.buffer_contains("Saving..."));

        dash.table.edit = EditState::NotEditing;
        dash.table.error = Some("Failed to update test".into());
        let term = render(&dash);
        assert!(term.buffer_contains("Failed to update test"));
    }
}
