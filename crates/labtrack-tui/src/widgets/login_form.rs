//! Login card: username, masked password, sign-in button and demo hint

use labtrack_app::{LoginField, LoginState};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use super::input::input_span;
use crate::theme::{palette, styles};

pub const DEMO_USERNAME: &str = "admin";
pub const DEMO_PASSWORD: &str = "password123";

pub struct LoginForm<'a> {
    state: &'a LoginState,
    show_demo_hint: bool,
    spinner: char,
}

impl<'a> LoginForm<'a> {
    pub fn new(state: &'a LoginState) -> Self {
        Self {
            state,
            show_demo_hint: false,
            spinner: ' ',
        }
    }

    pub fn demo_hint(mut self, show: bool) -> Self {
        self.show_demo_hint = show;
        self
    }

    /// Spinner glyph shown on the button while signing in
    pub fn spinner(mut self, frame: char) -> Self {
        self.spinner = frame;
        self
    }

    fn field_lines(&self, field: LoginField, width: u16) -> [Line<'static>; 2] {
        let focused = self.state.focus == field;
        let (value, masked) = match field {
            LoginField::Username => (&self.state.username, false),
            LoginField::Password => (&self.state.password, true),
        };
        [
            Line::from(Span::styled(field.label(), styles::field_label(focused))),
            Line::from(input_span(value, focused, masked, width)),
        ]
    }

    fn button_line(&self) -> Line<'static> {
        if self.state.is_loading() {
            Line::from(Span::styled(
                format!("{} Signing in...", self.spinner),
                styles::text_muted(),
            ))
        } else {
            Line::from(Span::styled("[ Sign In ]", styles::button(true, true)))
        }
    }
}

impl Widget for LoginForm<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::card_block(true)
            .title(" Sign In ")
            .title_style(styles::accent_bold())
            .style(Style::default().bg(palette::CARD_BG));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width < 4 {
            return;
        }

        // One column of margin on each side
        let content = Rect {
            x: inner.x + 1,
            width: inner.width - 2,
            ..inner
        };

        let mut lines = vec![Line::default()];
        lines.extend(self.field_lines(LoginField::Username, content.width));
        lines.extend(self.field_lines(LoginField::Password, content.width));
        lines.push(Line::default());
        lines.push(self.button_line());

        match &self.state.error {
            Some(error) => lines.push(Line::from(Span::styled(
                error.clone(),
                styles::error_text(),
            ))),
            None => lines.push(Line::default()),
        }

        if self.show_demo_hint {
            lines.push(Line::default());
            lines.push(Line::from(Span::styled(
                "Demo credentials",
                styles::text_muted(),
            )));
            lines.push(Line::from(vec![
                Span::styled(DEMO_USERNAME, styles::accent()),
                Span::styled(" / ", styles::text_muted()),
                Span::styled(DEMO_PASSWORD, styles::accent()),
            ]));
        }

        Paragraph::new(lines).render(content, buf);
    }
}
