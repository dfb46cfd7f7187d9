use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// User intents from keyboard events.
///
/// The mapping is screen-independent; [`super::App`] decides what each intent
/// means for the screen or overlay that currently has focus.
#[derive(Debug, PartialEq)]
pub enum Action {
    Quit,
    Back,
    GoHome,
    OpenSearch,
    MoveUp,
    MoveDown,
    PageUp,
    PageDown,
    Submit,
    CopySource,
    ToggleFocus,
    Refresh,
    InsertChar(char),
    DeleteChar,
    None,
}

/// Poll for keyboard events and convert to actions
pub fn poll_event(timeout: Duration) -> anyhow::Result<Action> {
    if event::poll(timeout)?
        && let Event::Key(key) = event::read()?
        && key.kind != KeyEventKind::Release
    {
        return Ok(key_to_action(key));
    }
    Ok(Action::None)
}

fn key_to_action(key: KeyEvent) -> Action {
    match (key.code, key.modifiers) {
        (KeyCode::Char('c'), KeyModifiers::CONTROL) => Action::Quit,
        (KeyCode::Esc, _) => Action::Back,

        // Overlays and screens
        (KeyCode::Char('k'), KeyModifiers::CONTROL) => Action::OpenSearch,
        (KeyCode::Char('b'), KeyModifiers::CONTROL) => Action::GoHome,
        (KeyCode::Home, _) => Action::GoHome,

        // Navigation (Vim/Emacs style)
        (KeyCode::Char('p'), KeyModifiers::CONTROL) => Action::MoveUp,
        (KeyCode::Char('n'), KeyModifiers::CONTROL) => Action::MoveDown,
        (KeyCode::Up, _) => Action::MoveUp,
        (KeyCode::Down, _) => Action::MoveDown,
        (KeyCode::PageUp, _) => Action::PageUp,
        (KeyCode::PageDown, _) => Action::PageDown,

        // Actions
        (KeyCode::Enter, _) => Action::Submit,
        (KeyCode::Char('y'), KeyModifiers::CONTROL) => Action::CopySource,
        (KeyCode::Tab, _) => Action::ToggleFocus,
        (KeyCode::Char('r'), KeyModifiers::CONTROL) => Action::Refresh,

        // Text input
        (KeyCode::Char(c), KeyModifiers::NONE) | (KeyCode::Char(c), KeyModifiers::SHIFT) => {
            Action::InsertChar(c)
        }
        (KeyCode::Backspace, _) => Action::DeleteChar,

        _ => Action::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode, modifiers: KeyModifiers) -> Action {
        key_to_action(KeyEvent::new(code, modifiers))
    }

    #[test]
    fn test_quit_and_back() {
        assert_eq!(key(KeyCode::Char('c'), KeyModifiers::CONTROL), Action::Quit);
        assert_eq!(key(KeyCode::Esc, KeyModifiers::NONE), Action::Back);
    }

    #[test]
    fn test_search_shortcut() {
        assert_eq!(key(KeyCode::Char('k'), KeyModifiers::CONTROL), Action::OpenSearch);
    }

    #[test]
    fn test_go_home_keys() {
        assert_eq!(key(KeyCode::Home, KeyModifiers::NONE), Action::GoHome);
        assert_eq!(key(KeyCode::Char('b'), KeyModifiers::CONTROL), Action::GoHome);
    }

    #[test]
    fn test_navigation() {
        assert_eq!(key(KeyCode::Char('p'), KeyModifiers::CONTROL), Action::MoveUp);
        assert_eq!(key(KeyCode::Char('n'), KeyModifiers::CONTROL), Action::MoveDown);
        assert_eq!(key(KeyCode::Up, KeyModifiers::NONE), Action::MoveUp);
        assert_eq!(key(KeyCode::Down, KeyModifiers::NONE), Action::MoveDown);
        assert_eq!(key(KeyCode::PageUp, KeyModifiers::NONE), Action::PageUp);
        assert_eq!(key(KeyCode::PageDown, KeyModifiers::NONE), Action::PageDown);
    }

    #[test]
    fn test_action_keys() {
        assert_eq!(key(KeyCode::Enter, KeyModifiers::NONE), Action::Submit);
        assert_eq!(key(KeyCode::Char('y'), KeyModifiers::CONTROL), Action::CopySource);
        assert_eq!(key(KeyCode::Tab, KeyModifiers::NONE), Action::ToggleFocus);
        assert_eq!(key(KeyCode::Char('r'), KeyModifiers::CONTROL), Action::Refresh);
    }

    #[test]
    fn test_text_input() {
        assert_eq!(key(KeyCode::Char('a'), KeyModifiers::NONE), Action::InsertChar('a'));
        assert_eq!(key(KeyCode::Char('A'), KeyModifiers::SHIFT), Action::InsertChar('A'));
        assert_eq!(key(KeyCode::Char('/'), KeyModifiers::NONE), Action::InsertChar('/'));
        assert_eq!(key(KeyCode::Backspace, KeyModifiers::NONE), Action::DeleteChar);
    }

    #[test]
    fn test_unknown_key() {
        assert_eq!(key(KeyCode::F(1), KeyModifiers::NONE), Action::None);
        assert_eq!(key(KeyCode::Char('x'), KeyModifiers::ALT), Action::None);
    }
}
