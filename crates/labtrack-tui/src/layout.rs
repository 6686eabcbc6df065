//! Screen layout definitions for the TUI

use ratatui::layout::{Constraint, Flex, Layout, Rect};

/// Create form: 5 field rows + button row + error row inside borders
pub const CREATE_FORM_HEIGHT: u16 = 9;

/// Stats cards: one value row inside borders
pub const STATS_HEIGHT: u16 = 3;

/// Login card dimensions (clamped to the screen)
pub const LOGIN_WIDTH: u16 = 52;
pub const LOGIN_HEIGHT: u16 = 14;

/// Screen areas shared by every screen
#[derive(Debug, Clone, Copy)]
pub struct ScreenAreas {
    /// Header (title, backend health, base URL)
    pub header: Rect,

    /// Screen content
    pub body: Rect,

    /// Single-line key hints
    pub status_bar: Rect,
}

/// Dashboard body areas
#[derive(Debug, Clone, Copy)]
pub struct DashboardAreas {
    pub stats: Rect,

    /// Present only while the create form is shown
    pub create_form: Option<Rect>,

    pub table: Rect,
}

/// Split the whole terminal into header, body and status bar
pub fn create(area: Rect) -> ScreenAreas {
    let chunks = Layout::vertical([
        Constraint::Length(3), // Header (glass container)
        Constraint::Min(3),    // Body
        Constraint::Length(1), // Key hints
    ])
    .split(area);

    ScreenAreas {
        header: chunks[0],
        body: chunks[1],
        status_bar: chunks[2],
    }
}

/// Split the dashboard body into stats, optional form and table
pub fn dashboard(body: Rect, show_form: bool) -> DashboardAreas {
    if show_form {
        let chunks = Layout::vertical([
            Constraint::Length(STATS_HEIGHT),
            Constraint::Length(CREATE_FORM_HEIGHT),
            Constraint::Min(3),
        ])
        .split(body);
        DashboardAreas {
            stats: chunks[0],
            create_form: Some(chunks[1]),
            table: chunks[2],
        }
    } else {
        let chunks =
            Layout::vertical([Constraint::Length(STATS_HEIGHT), Constraint::Min(3)]).split(body);
        DashboardAreas {
            stats: chunks[0],
            create_form: None,
            table: chunks[1],
        }
    }
}

/// Center a `width` x `height` rect inside `area`, shrinking to fit
pub fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let [row] = Layout::vertical([Constraint::Length(height.min(area.height))])
        .flex(Flex::Center)
        .areas(area);
    let [rect] = Layout::horizontal([Constraint::Length(width.min(area.width))])
        .flex(Flex::Center)
        .areas(row);
    rect
}
