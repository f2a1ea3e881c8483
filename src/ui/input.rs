use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use crate::container::FilterableTable;
use crate::search::{KeyOutcome, SearchControl};

/// Handle a key press. Returns true when the user asked to quit.
pub fn handle_key_event(table: &mut FilterableTable, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Esc => return true,
        KeyCode::Char('c') if key.modifiers == KeyModifiers::CONTROL => return true,
        _ => {}
    }

    let filter_text = table.state().filter_text.clone();
    let in_stock_only = table.state().in_stock_only;
    let control = SearchControl::new(&filter_text, in_stock_only);
    if control.handle_key(key, table) == KeyOutcome::Ignored {
        log::trace!("ignored key {:?}", key.code);
    }
    false
}
