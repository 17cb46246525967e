use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::app::{Action, App, Command};

/// Map a key press to a browser action.
pub fn action_for(key: KeyEvent) -> Option<Action> {
    if key.kind != KeyEventKind::Press {
        return None;
    }
    match key.code {
        KeyCode::Char('h') | KeyCode::Left => Some(Action::Left),
        KeyCode::Char('j') | KeyCode::Down => Some(Action::Down),
        KeyCode::Char('k') | KeyCode::Up => Some(Action::Up),
        KeyCode::Char('l') | KeyCode::Right => Some(Action::Right),
        KeyCode::Enter => Some(Action::Select),
        KeyCode::Backspace => Some(Action::Parent),
        KeyCode::Char('q') => Some(Action::Quit),
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Some(Action::Quit),
        _ => None,
    }
}

/// Handle a key event, returning any follow-up command for the event loop.
pub fn handle_key_event(app: &mut App, key: KeyEvent) -> Option<Command> {
    action_for(key).and_then(|action| app.handle_action(action))
}
