// ABOUTME: Keyboard input mapping for the interactive wizard
// Converts crossterm key events into user events and keeps the name input buffer

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::onboarding::{CareerKey, WizardStep};
use crate::session::UserEvent;

/// Key handler holding the text typed into the name field.
///
/// The buffer survives step changes, so going back shows the same name.
#[derive(Debug, Default)]
pub struct KeyInput {
    buffer: String,
}

impl KeyInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    /// Map a key press on the given step to a user event
    pub fn handle_key_event(&mut self, key: KeyEvent, step: WizardStep) -> Option<UserEvent> {
        if key.kind != KeyEventKind::Press {
            return None;
        }

        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return Some(UserEvent::Quit);
        }

        match step {
            WizardStep::Name => self.handle_name_key(key),
            WizardStep::Career => match key.code {
                KeyCode::Char(c @ '1'..='9') => {
                    let position = c.to_digit(10).map_or(0, |d| d as usize);
                    CareerKey::from_position(position)
                        .map(|career| UserEvent::SelectCareer(career.to_string()))
                }
                KeyCode::Esc | KeyCode::Left | KeyCode::Backspace => Some(UserEvent::Back),
                KeyCode::Char('q') => Some(UserEvent::Quit),
                _ => None,
            },
            WizardStep::Summary => match key.code {
                KeyCode::Enter | KeyCode::Char('r') => Some(UserEvent::ViewRoadmap),
                KeyCode::Esc | KeyCode::Char('q') => Some(UserEvent::Quit),
                _ => None,
            },
        }
    }

    fn handle_name_key(&mut self, key: KeyEvent) -> Option<UserEvent> {
        match key.code {
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.buffer.push(c);
                Some(UserEvent::NameChanged(self.buffer.clone()))
            }
            KeyCode::Backspace => {
                self.buffer.pop()?;
                Some(UserEvent::NameChanged(self.buffer.clone()))
            }
            // Enter only counts while the continue control would be enabled
            KeyCode::Enter if !self.buffer.trim().is_empty() => Some(UserEvent::Continue),
            KeyCode::Esc => Some(UserEvent::Quit),
            _ => None,
        }
    }
}
