//! Main render/view function (View in TEA pattern)


use labtrack_app::{AppState, DashboardState, LoginState, Screen};
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::Frame;

use crate::layout;
use crate::theme::palette;
use crate::widgets;

/// Render the complete UI (View function in TEA)
///
/// Pure: reads the state, never modifies it.
pub fn view(frame: &mut Frame, state: &AppState) {
    let area = frame.area();

    // Fill entire terminal with deepest background color
    let bg_block = Block::default().style(Style::default().bg(palette::DEEPEST_BG));
    frame.render_widget(bg_block, area);

    let areas = layout::create(area);

    let mut header = widgets::MainHeader::new(&state.base_url);
    if let Some(dash) = state.dashboard() {
        header = header.with_health(dash.health);
    }
    frame.render_widget(header, areas.header);

    match &state.screen {
        Screen::Login(login) => render_login(frame, state, login, areas.body),
        Screen::Dashboard(dash) => render_dashboard(frame, state, dash, areas.body),
    }

    frame.render_widget(widgets::KeyHints::new(state), areas.status_bar);
}

fn render_login(frame: &mut Frame, state: &AppState, login: &LoginState, body: Rect) {
    let card = layout::centered(body, layout::LOGIN_WIDTH, layout::LOGIN_HEIGHT);
    let form = widgets::LoginForm::new(login)
        .demo_hint(state.show_demo_hint)
        .spinner(state.spinner_frame());
    frame.render_widget(form, card);
}

fn render_dashboard(frame: &mut Frame, state: &AppState, dash: &DashboardState, body: Rect) {
    let areas = layout::dashboard(body, dash.create_form.is_some());

    let summary = dash.summary();
    frame.render_widget(widgets::StatsCards::new(&summary), areas.stats);

    if let (Some(form), Some(form_area)) = (&dash.create_form, areas.create_form) {
        frame.render_widget(
            widgets::CreateForm::new(form).spinner(state.spinner_frame()),
            form_area,
        );
    }

    frame.render_widget(
        widgets::TestTable::new(dash).spinner(state.spinner_frame()),
        areas.table,
    );
}
