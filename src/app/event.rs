use crate::catalog::{index_of, CATALOG_SIZE};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Application events
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum AppEvent {
    TapLetter(i64),
    TapNext,
    TapPrevious,
    TapPlay,
    SwipeLeft,
    SwipeRight,
    ToggleHelp,
    Quit,
    None,
}

impl AppEvent {
    /// Key bindings: letters jump, arrows/Tab step, Space/Enter replay
    pub fn from_key(key: KeyEvent) -> Self {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return match key.code {
                KeyCode::Char('c') | KeyCode::Char('C') => AppEvent::Quit,
                _ => AppEvent::None,
            };
        }

        match key.code {
            KeyCode::Right | KeyCode::Down | KeyCode::Tab | KeyCode::PageDown => AppEvent::TapNext,
            KeyCode::Left | KeyCode::Up | KeyCode::BackTab | KeyCode::PageUp => {
                AppEvent::TapPrevious
            }
            KeyCode::Home => AppEvent::TapLetter(0),
            KeyCode::End => AppEvent::TapLetter((CATALOG_SIZE - 1) as i64),
            KeyCode::Char(' ') | KeyCode::Enter => AppEvent::TapPlay,
            KeyCode::Char('?') | KeyCode::F(1) => AppEvent::ToggleHelp,
            KeyCode::Esc => AppEvent::Quit,
            KeyCode::Char(c) => match index_of(c) {
                Some(index) => AppEvent::TapLetter(index as i64),
                None => AppEvent::None,
            },
            _ => AppEvent::None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_letters_jump() {
        assert_eq!(AppEvent::from_key(key(KeyCode::Char('a'))), AppEvent::TapLetter(0));
        assert_eq!(AppEvent::from_key(key(KeyCode::Char('Q'))), AppEvent::TapLetter(16));
        assert_eq!(AppEvent::from_key(key(KeyCode::Char('z'))), AppEvent::TapLetter(25));
    }

    #[test]
    fn test_home_and_end_jump_to_the_ends() {
        assert_eq!(AppEvent::from_key(key(KeyCode::Home)), AppEvent::TapLetter(0));
        assert_eq!(
            AppEvent::from_key(key(KeyCode::End)),
            AppEvent::TapLetter(CATALOG_SIZE as i64 - 1)
        );
    }

    #[test]
    fn test_arrows_step() {
        assert_eq!(AppEvent::from_key(key(KeyCode::Right)), AppEvent::TapNext);
        assert_eq!(AppEvent::from_key(key(KeyCode::Left)), AppEvent::TapPrevious);
    }

    #[test]
    fn test_play_help_and_quit() {
        assert_eq!(AppEvent::from_key(key(KeyCode::Char(' '))), AppEvent::TapPlay);
        assert_eq!(AppEvent::from_key(key(KeyCode::Enter)), AppEvent::TapPlay);
        assert_eq!(AppEvent::from_key(key(KeyCode::Char('?'))), AppEvent::ToggleHelp);
        assert_eq!(AppEvent::from_key(key(KeyCode::Esc)), AppEvent::Quit);
        assert_eq!(
            AppEvent::from_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            AppEvent::Quit
        );
    }

    #[test]
    fn test_unbound_keys() {
        assert_eq!(AppEvent::from_key(key(KeyCode::Char('1'))), AppEvent::None);
        assert_eq!(
            AppEvent::from_key(KeyEvent::new(KeyCode::Char('a'), KeyModifiers::CONTROL)),
            AppEvent::None
        );
    }
}
