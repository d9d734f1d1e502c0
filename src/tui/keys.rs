use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Key binding configuration
#[derive(Debug, Clone)]
pub struct KeyBinding {
    pub key: KeyCode,
    pub modifiers: KeyModifiers,
    pub label: String,
    pub description: String,
}

impl KeyBinding {
    pub fn new(key: KeyCode, modifiers: KeyModifiers, label: &str, description: &str) -> Self {
        Self {
            key,
            modifiers,
            label: label.to_string(),
            description: description.to_string(),
        }
    }

    pub fn matches(&self, event: &KeyEvent) -> bool {
        event.kind == KeyEventKind::Press
            && self.key == event.code
            && self.modifiers == event.modifiers
    }
}

/// Application key mappings
#[derive(Debug, Clone)]
pub struct KeyMap {
    /// Quit application
    pub quit: KeyBinding,

    /// Bindings the comment modal handles, shown in the help line
    pub modal_hints: Vec<KeyBinding>,
}

impl Default for KeyMap {
    fn default() -> Self {
        Self {
            quit: KeyBinding::new(
                KeyCode::Char('c'),
                KeyModifiers::CONTROL,
                "Ctrl+C",
                "quit",
            ),
            modal_hints: vec![
                KeyBinding::new(KeyCode::Esc, KeyModifiers::NONE, "Esc", "close"),
                KeyBinding::new(KeyCode::Enter, KeyModifiers::NONE, "Enter", "close"),
                KeyBinding::new(KeyCode::Up, KeyModifiers::NONE, "↑/↓", "scroll"),
            ],
        }
    }
}

impl KeyMap {
    /// Check if the event should quit the application
    pub fn should_quit(&self, event: &KeyEvent) -> bool {
        self.quit.matches(event)
    }

    /// One-line help text for all key bindings
    pub fn help_text(&self) -> String {
        self.modal_hints
            .iter()
            .chain(std::iter::once(&self.quit))
            .map(|binding| format!("{}: {}", binding.label, binding.description))
            .collect::<Vec<_>>()
            .join(" • ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_should_quit() {
        let key_map = KeyMap::default();
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert!(key_map.should_quit(&ctrl_c));

        let plain_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::NONE);
        assert!(!key_map.should_quit(&plain_c));

        let release = KeyEvent::new_with_kind(KeyCode::Char('c'), KeyModifiers::CONTROL, KeyEventKind::Release);
        assert!(!key_map.should_quit(&release));
    }

    #[test]
    fn test_help_text() {
        let help = KeyMap::default().help_text();
        assert_eq!(help, "Esc: close • Enter: close • ↑/↓: scroll • Ctrl+C: quit");
    }
}
