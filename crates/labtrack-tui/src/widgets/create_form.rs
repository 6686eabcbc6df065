//! Create-test form: text inputs, select cyclers and action buttons

use labtrack_app::{CreateField, CreateFormState};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use super::input::{input_span, select_span};
use crate::theme::{palette, styles};

/// Width of the label column, including the gap before the control
const LABEL_WIDTH: u16 = 19;

pub struct CreateForm<'a> {
    state: &'a CreateFormState,
    spinner: char,
}

impl<'a> CreateForm<'a> {
    pub fn new(state: &'a CreateFormState) -> Self {
        Self { state, spinner: ' ' }
    }

    pub fn spinner(mut self, frame: char) -> Self {
        self.spinner = frame;
        self
    }

    fn label(field: CreateField) -> &'static str {
        match field {
            CreateField::PatientName => "Patient Name *",
            CreateField::DoctorName => "Doctor Name *",
            CreateField::Result => "Result (optional)",
            other => other.label(),
        }
    }

    fn field_line(&self, field: CreateField, control_width: u16) -> Line<'static> {
        let focused = self.state.focus == field;
        let draft = &self.state.draft;
        let label = format!("{:<width$}", Self::label(field), width = LABEL_WIDTH as usize);

        let control = match field {
            CreateField::PatientName => {
                input_span(&draft.patient_name, focused, false, control_width)
            }
            CreateField::DoctorName => input_span(&draft.doctor_name, focused, false, control_width),
            CreateField::Result => input_span(&draft.result, focused, false, control_width),
            CreateField::TestType => select_span(draft.test_type.as_str(), focused),
            CreateField::Status => select_span(draft.status.as_str(), focused),
            CreateField::Submit | CreateField::Cancel => Span::raw(""),
        };

        Line::from(vec![
            Span::styled(label, styles::field_label(focused)),
            control,
        ])
    }

    fn button_line(&self) -> Line<'static> {
        if self.state.is_loading() {
            return Line::from(Span::styled(
                format!("{} Creating...", self.spinner),
                styles::text_muted(),
            ));
        }
        let focus = self.state.focus;
        Line::from(vec![
            Span::styled(
                "[ Create Test ]",
                styles::button(focus == CreateField::Submit, true),
            ),
            Span::raw("  "),
            Span::styled(
                "[ Cancel ]",
                styles::button(focus == CreateField::Cancel, true),
            ),
        ])
    }
}

impl Widget for CreateForm<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::card_block(true)
            .title(" New Lab Test ")
            .title_style(styles::accent_bold())
            .style(Style::default().bg(palette::CARD_BG));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width < 4 {
            return;
        }

        let content = Rect {
            x: inner.x + 1,
            width: inner.width - 2,
            ..inner
        };
        let control_width = content.width.saturating_sub(LABEL_WIDTH);

        let mut lines: Vec<Line> = CreateField::ALL
            .iter()
            .filter(|f| !matches!(f, CreateField::Submit | CreateField::Cancel))
            .map(|&f| self.field_line(f, control_width))
            .collect();
        lines.push(self.button_line());
        if let Some(error) = &self.state.error {
            lines.push(Line::from(Span::styled(error.clone(), styles::error_text())));
        }

        Paragraph::new(lines).render(content, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::CREATE_FORM_HEIGHT;
    use crate::test_utils::TestTerminal;
    use labtrack_app::RequestId;
    use labtrack_core::{TestStatus, TestType};

    fn render(form: CreateForm<'_>) -> TestTerminal {
        let mut term = TestTerminal::sized(80, CREATE_FORM_HEIGHT);
        term.render_widget(form, term.area());
        term
    }

    #[test]
    fn test_renders_default_draft() {
        let state = CreateFormState::default();
        let term = render(CreateForm::new(&state));

        assert!(term.buffer_contains("New Lab Test"));
        assert!(term.buffer_contains("Patient Name *"));
        assert!(term.buffer_contains("Doctor Name *"));
        assert!(term.buffer_contains("◂ Blood ▸"));
        assert!(term.buffer_contains("◂ Pending ▸"));
        assert!(term.buffer_contains("Result (optional)"));
        assert!(term.buffer_contains("[ Create Test ]"));
        assert!(term.buffer_contains("[ Cancel ]"));
    }

    #[test]
    fn test_renders_draft_values() {
        let mut state = CreateFormState::default();
        state.draft.patient_name = "Jane Doe".into();
        state.draft.doctor_name = "Dr. Smith".into();
        state.draft.test_type = TestType::XRay;
        state.draft.status = TestStatus::InProgress;
        let term = render(CreateForm::new(&state));

        assert!(term.buffer_contains("Jane Doe"));
        assert!(term.buffer_contains("Dr. Smith"));
        assert!(term.buffer_contains("◂ X-Ray ▸"));
        assert!(term.buffer_contains("◂ In Progress ▸"));
    }

    #[test]
    fn test_error_is_shown() {
        let state = CreateFormState {
            error: Some("patient_name is required".into()),
            ..Default::default()
        };
        let term = render(CreateForm::new(&state));
        assert!(term.buffer_contains("patient_name is required"));
    }

    #[test]
    fn test_loading_replaces_buttons() {
        let state = CreateFormState {
            pending: Some(RequestId::new(3)),
            ..Default::default()
        };
        let term = render(CreateForm::new(&state).spinner('-'));

        assert!(term.buffer_contains("- Creating..."));
        assert!(!term.buffer_contains("[ Create Test ]"));
    }
}
