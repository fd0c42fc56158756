//! Input handling - key translation

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// What a key press asks the viewer to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    NextCard,
    Explain,
    ClosePanel,
    ToggleLineNumbers,
    ScrollUp,
    ScrollDown,
    Quit,
}

impl Action {
    /// Key hint shown on the bottom line
    pub fn hint(&self) -> &'static str {
        match self {
            Action::NextCard => "n next",
            Action::Explain => "e explain",
            Action::ClosePanel => "x close",
            Action::ToggleLineNumbers => "l lines",
            Action::ScrollUp | Action::ScrollDown => "↑↓ scroll",
            Action::Quit => "q quit",
        }
    }
}

/// Translate a crossterm KeyEvent to an Action
pub fn translate_key(event: KeyEvent) -> Option<Action> {
    let KeyEvent {
        code, modifiers, kind, ..
    } = event;

    // Only process key press events, ignore release and repeat
    // This is critical on Windows where crossterm sends all event types
    if kind != KeyEventKind::Press {
        return None;
    }

    if modifiers.contains(KeyModifiers::CONTROL) {
        return match code {
            KeyCode::Char('c') | KeyCode::Char('q') => Some(Action::Quit),
            _ => None,
        };
    }

    match code {
        KeyCode::Char('n') | KeyCode::Char(' ') | KeyCode::Right | KeyCode::Enter => {
            Some(Action::NextCard)
        }
        KeyCode::Char('e') => Some(Action::Explain),
        KeyCode::Char('x') | KeyCode::Esc => Some(Action::ClosePanel),
        KeyCode::Char('l') => Some(Action::ToggleLineNumbers),
        KeyCode::Up | KeyCode::Char('k') => Some(Action::ScrollUp),
        KeyCode::Down | KeyCode::Char('j') => Some(Action::ScrollDown),
        KeyCode::Char('q') => Some(Action::Quit),
        _ => None,
    }
}
