use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::view::{CHECKBOX_LABEL, SEARCH_LABEL, SearchControlView};

/// Handlers a search control forwards its raw events to.
pub trait SearchEvents {
    fn on_filter_text_changed(&mut self, new_text: String);
    fn on_stock_only_toggled(&mut self);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOutcome {
    Handled,
    Ignored,
}

/// Controlled text field plus checkbox. Displays whatever it is given and
/// never decides new state; every edit goes out through `SearchEvents`.
pub struct SearchControl<'a> {
    filter_text: &'a str,
    in_stock_only: bool,
}

impl<'a> SearchControl<'a> {
    pub fn new(filter_text: &'a str, in_stock_only: bool) -> Self {
        SearchControl { filter_text, in_stock_only }
    }

    pub fn view(&self) -> SearchControlView {
        SearchControlView {
            label: SEARCH_LABEL.to_string(),
            filter_text: self.filter_text.to_string(),
            checkbox_label: CHECKBOX_LABEL.to_string(),
            in_stock_only: self.in_stock_only,
        }
    }

    pub fn handle_key(&self, key: KeyEvent, events: &mut dyn SearchEvents) -> KeyOutcome {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        let alt = key.modifiers.contains(KeyModifiers::ALT);
        // Ctrl+Alt together is how AltGr characters arrive on Windows.
        let ctrl_only = ctrl && !alt;
        match key.code {
            KeyCode::Tab => {
                events.on_stock_only_toggled();
                KeyOutcome::Handled
            }
            KeyCode::Char('t') if ctrl_only => {
                events.on_stock_only_toggled();
                KeyOutcome::Handled
            }
            KeyCode::Char('u') if ctrl_only => {
                if !self.filter_text.is_empty() {
                    events.on_filter_text_changed(String::new());
                }
                KeyOutcome::Handled
            }
            KeyCode::Char(_) if ctrl != alt => KeyOutcome::Ignored,
            KeyCode::Char(c) => {
                let mut new_text = self.filter_text.to_string();
                new_text.push(c);
                events.on_filter_text_changed(new_text);
                KeyOutcome::Handled
            }
            KeyCode::Backspace => {
                let mut new_text = self.filter_text.to_string();
                if new_text.pop().is_some() {
                    events.on_filter_text_changed(new_text);
                }
                KeyOutcome::Handled
            }
            _ => KeyOutcome::Ignored,
        }
    }
}
