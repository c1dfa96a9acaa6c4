//! Key bindings from terminal events to game intents.
//!
//! Every intent, quitting included, comes out of one table. The driver forwards the result
//! straight into `GameState::apply_action`, and the help text is rendered from the same
//! table. Letters match case-insensitively; Ctrl-C always quits.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::types::GameAction;

/// An intent and the keys that trigger it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Binding {
    pub action: GameAction,
    /// Letters are listed lowercase
    pub keys: &'static [KeyCode],
}

/// Default key table, in help order
pub const BINDINGS: &[Binding] = &[
    Binding {
        action: GameAction::MoveLeft,
        keys: &[KeyCode::Left, KeyCode::Char('a'), KeyCode::Char('h')],
    },
    Binding {
        action: GameAction::MoveRight,
        keys: &[KeyCode::Right, KeyCode::Char('d'), KeyCode::Char('l')],
    },
    Binding {
        action: GameAction::SoftDrop,
        keys: &[KeyCode::Down, KeyCode::Char('s'), KeyCode::Char('j')],
    },
    Binding {
        action: GameAction::HardDrop,
        keys: &[KeyCode::Char(' ')],
    },
    Binding {
        action: GameAction::RotateCw,
        keys: &[KeyCode::Up, KeyCode::Char('w'), KeyCode::Char('k')],
    },
    Binding {
        action: GameAction::RotateCcw,
        keys: &[KeyCode::Char('z'), KeyCode::Char('y')],
    },
    Binding {
        action: GameAction::Pause,
        keys: &[KeyCode::Char('p')],
    },
    Binding {
        action: GameAction::Restart,
        keys: &[KeyCode::Char('r')],
    },
    Binding {
        action: GameAction::Quit,
        keys: &[KeyCode::Char('q')],
    },
];

/// Intent for a key event, if it is bound
///
/// Release events map to nothing so terminals that report them do not double a press.
pub fn action_for_key(key: KeyEvent) -> Option<GameAction> {
    if key.kind == KeyEventKind::Release {
        return None;
    }

    let code = match key.code {
        KeyCode::Char(c) => KeyCode::Char(c.to_ascii_lowercase()),
        other => other,
    };

    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return (code == KeyCode::Char('c')).then_some(GameAction::Quit);
    }

    BINDINGS
        .iter()
        .find(|binding| binding.keys.contains(&code))
        .map(|binding| binding.action)
}

fn key_name(code: KeyCode) -> String {
    match code {
        KeyCode::Left => "left".to_string(),
        KeyCode::Right => "right".to_string(),
        KeyCode::Up => "up".to_string(),
        KeyCode::Down => "down".to_string(),
        KeyCode::Char(' ') => "space".to_string(),
        KeyCode::Char(c) => c.to_string(),
        other => format!("{:?}", other).to_lowercase(),
    }
}

/// One line per intent, e.g. `moveLeft: left, a, h`
pub fn key_help() -> String {
    let mut lines: Vec<String> = BINDINGS
        .iter()
        .map(|binding| {
            let keys: Vec<String> = binding.keys.iter().map(|&code| key_name(code)).collect();
            format!("{}: {}", binding.action.as_str(), keys.join(", "))
        })
        .collect();
    // not in the table: it needs a modifier
    lines.push("quit: ctrl-c".to_string());
    lines.join("\n")
}
