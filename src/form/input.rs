use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::field::KeyboardKind;

pub fn handle_text_edit(buffer: &mut String, keyboard: KeyboardKind, key: &KeyEvent) -> bool {
    match key.code {
        KeyCode::Char(ch) => {
            if key.modifiers.contains(KeyModifiers::CONTROL) || !keyboard.accepts(ch) {
                return false;
            }
            buffer.push(ch);
            true
        }
        KeyCode::Backspace => buffer.pop().is_some(),
        KeyCode::Delete => {
            if buffer.is_empty() {
                return false;
            }
            buffer.clear();
            true
        }
        _ => false,
    }
}
