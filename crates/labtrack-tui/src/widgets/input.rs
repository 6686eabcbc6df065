//! Single-line text input rendering shared by the forms

use ratatui::text::Span;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::theme::styles;

const CURSOR: char = '▏';
const MASK: char = '•';

/// The longest suffix of `text` that fits in `max_width` columns
pub fn visible_tail(text: &str, max_width: usize) -> &str {
    if text.width() <= max_width {
        return text;
    }
    let mut width = 0;
    let mut start = text.len();
    for (idx, c) in text.char_indices().rev() {
        let w = c.width().unwrap_or(0);
        if width + w > max_width {
            break;
        }
        width += w;
        start = idx;
    }
    &text[start..]
}

/// A filled input box `width` columns wide.
///
/// Focused inputs show a cursor after the text; long values scroll so the
/// end stays visible.
pub fn input_span(value: &str, focused: bool, masked: bool, width: u16) -> Span<'static> {
    let width = usize::from(width);
    let shown: String = if masked {
        std::iter::repeat(MASK).take(value.chars().count()).collect()
    } else {
        value.to_string()
    };

    // Reserve a column for the cursor
    let room = if focused {
        width.saturating_sub(1)
    } else {
        width
    };
    let mut text = visible_tail(&shown, room).to_string();
    if focused {
        text.push(CURSOR);
    }
    let pad = width.saturating_sub(text.width());
    text.extend(std::iter::repeat(' ').take(pad));

    Span::styled(text, styles::input_field(focused))
}

/// A select control: `◂ value ▸`, highlighted while focused
pub fn select_span(value: &str, focused: bool) -> Span<'static> {
    let style = if focused {
        styles::focused_selected()
    } else {
        styles::input_field(false)
    };
    Span::styled(format!("◂ {} ▸", value), style)
}
