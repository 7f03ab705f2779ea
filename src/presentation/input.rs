use crate::application::{App, EditAction};
use crossterm::event::{KeyCode, KeyModifiers};

pub struct InputHandler;

impl InputHandler {
    pub fn handle_key_event(app: &mut App, key: KeyCode, modifiers: KeyModifiers) {
        if modifiers.contains(KeyModifiers::CONTROL) {
            match key {
                KeyCode::Char('c') => app.quit(),
                KeyCode::Char('u') => {
                    app.controller.edit(EditAction::Clear);
                }
                _ => {}
            }
            return;
        }

        match key {
            KeyCode::Esc => app.quit(),
            KeyCode::Enter if modifiers.contains(KeyModifiers::ALT) => {
                app.controller.edit(EditAction::Newline);
            }
            KeyCode::Enter => {
                // Rejections are already visible through the disabled button.
                let _ = app.controller.submit();
            }
            KeyCode::Backspace => {
                app.controller.edit(EditAction::Backspace);
            }
            KeyCode::Char(c) => {
                app.controller.edit(EditAction::Insert(c));
            }
            _ => {}
        }
    }
}
