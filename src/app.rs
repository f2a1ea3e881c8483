use std::cell::Cell;
use std::io;
use std::rc::Rc;
use std::time::Duration;

use crossterm::event::{self, Event, KeyEventKind};
use ratatui::{backend::Backend, Terminal};

use crate::container::FilterableTable;
use crate::ui;

const TICK_RATE: Duration = Duration::from_millis(250);

/// Drive the widget until the user quits. The table is redrawn once up front
/// and afterwards only when a transition was reported or the terminal resized.
pub fn run<B: Backend>(table: &mut FilterableTable, terminal: &mut Terminal<B>) -> Result<(), io::Error> {
    let dirty = Rc::new(Cell::new(true));
    let flag = Rc::clone(&dirty);
    let subscription = table.subscribe(move |_| flag.set(true));
    let total = table.catalog().len();

    let result = loop {
        // --- Draw UI ---
        if dirty.replace(false) {
            if let Err(e) = ui::render_ui(&table.view(), total, terminal) {
                break Err(e);
            }
        }

        // --- Input Handling ---
        match event::poll(TICK_RATE) {
            Ok(false) => continue,
            Ok(true) => {}
            Err(e) => break Err(e),
        }
        match event::read() {
            Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => {
                if ui::input::handle_key_event(table, key) {
                    break Ok(()); // Exit condition
                }
            }
            Ok(Event::Resize(width, height)) => {
                log::debug!("terminal resized to {}x{}", width, height);
                dirty.set(true);
            }
            Ok(_) => {}
            Err(e) => break Err(e),
        }
    };

    table.unsubscribe(subscription);
    result
}
