//! Terminal event polling

use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use labtrack_app::message::Message;
use labtrack_app::InputKey;
use labtrack_core::prelude::*;
use std::time::Duration;

/// Poll timeout; a timeout produces a tick (20 FPS spinner)
const POLL_TIMEOUT: Duration = Duration::from_millis(50);

/// Convert crossterm KeyEvent to InputKey
pub fn key_event_to_input(key: crossterm::event::KeyEvent) -> Option<InputKey> {
    match key.code {
        KeyCode::Char(c) if key.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(InputKey::CharCtrl(c))
        }
        KeyCode::Char(c) => Some(InputKey::Char(c)),
        KeyCode::Enter => Some(InputKey::Enter),
        KeyCode::Esc => Some(InputKey::Esc),
        KeyCode::Tab if key.modifiers.contains(KeyModifiers::SHIFT) => Some(InputKey::BackTab),
        KeyCode::Tab => Some(InputKey::Tab),
        KeyCode::BackTab => Some(InputKey::BackTab),
        KeyCode::Backspace => Some(InputKey::Backspace),
        KeyCode::Up => Some(InputKey::Up),
        KeyCode::Down => Some(InputKey::Down),
        KeyCode::Left => Some(InputKey::Left),
        KeyCode::Right => Some(InputKey::Right),
        KeyCode::Home => Some(InputKey::Home),
        KeyCode::End => Some(InputKey::End),
        _ => None,
    }
}

/// Translate one terminal event into a message, ignoring key releases
fn event_to_message(event: Event) -> Option<Message> {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => {
            key_event_to_input(key).map(Message::Key)
        }
        _ => None,
    }
}

/// Poll for terminal events with timeout
pub fn poll() -> Result<Option<Message>> {
    if event::poll(POLL_TIMEOUT)? {
        Ok(event_to_message(event::read()?))
    } else {
        Ok(Some(Message::Tick))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEvent;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_char_conversion() {
        assert_eq!(
            key_event_to_input(key(KeyCode::Char('a'))),
            Some(InputKey::Char('a'))
        );
    }

    #[test]
    fn test_char_with_ctrl_conversion() {
        let event = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(key_event_to_input(event), Some(InputKey::CharCtrl('c')));
    }

    #[test]
    fn test_uppercase_letters_keep_case() {
        let event = KeyEvent::new(KeyCode::Char('L'), KeyModifiers::SHIFT);
        assert_eq!(key_event_to_input(event), Some(InputKey::Char('L')));
    }

    #[test]
    fn test_navigation_keys() {
        assert_eq!(key_event_to_input(key(KeyCode::Up)), Some(InputKey::Up));
        assert_eq!(key_event_to_input(key(KeyCode::Down)), Some(InputKey::Down));
        assert_eq!(key_event_to_input(key(KeyCode::Left)), Some(InputKey::Left));
        assert_eq!(
            key_event_to_input(key(KeyCode::Right)),
            Some(InputKey::Right)
        );
        assert_eq!(key_event_to_input(key(KeyCode::Home)), Some(InputKey::Home));
        assert_eq!(key_event_to_input(key(KeyCode::End)), Some(InputKey::End));
    }

    #[test]
    fn test_form_keys() {
        assert_eq!(
            key_event_to_input(key(KeyCode::Enter)),
            Some(InputKey::Enter)
        );
        assert_eq!(key_event_to_input(key(KeyCode::Esc)), Some(InputKey::Esc));
        assert_eq!(key_event_to_input(key(KeyCode::Tab)), Some(InputKey::Tab));
        assert_eq!(
            key_event_to_input(key(KeyCode::Backspace)),
            Some(InputKey::Backspace)
        );
    }

    #[test]
    fn test_backtab_variants() {
        let shift_tab = KeyEvent::new(KeyCode::Tab, KeyModifiers::SHIFT);
        assert_eq!(key_event_to_input(shift_tab), Some(InputKey::BackTab));
        assert_eq!(
            key_event_to_input(key(KeyCode::BackTab)),
            Some(InputKey::BackTab)
        );
    }

    #[test]
    fn test_unsupported_key_returns_none() {
        assert_eq!(key_event_to_input(key(KeyCode::Insert)), None);
        assert_eq!(key_event_to_input(key(KeyCode::F(5))), None);
    }

    #[test]
    fn test_key_release_is_ignored() {
        let mut release = key(KeyCode::Char('x'));
        release.kind = KeyEventKind::Release;
        assert_eq!(event_to_message(Event::Key(release)), None);

        let press = key(KeyCode::Char('x'));
        assert_eq!(
            event_to_message(Event::Key(press)),
            Some(Message::Key(InputKey::Char('x')))
        );
    }

    #[test]
    fn test_non_key_events_are_ignored() {
        assert_eq!(event_to_message(Event::Resize(80, 24)), None);
        assert_eq!(event_to_message(Event::FocusGained), None);
    }
}
