pub mod terminal;
pub mod utils;
pub mod input;
pub mod renderers;

use std::io;
use ratatui::{
    backend::Backend,
    widgets::{Block, Borders, Paragraph},
    layout::{Layout, Constraint, Direction},
    Frame, Terminal,
};
use crate::view::FilterableTableView;

// Re-export the main public functions
pub use terminal::{setup_terminal, restore_terminal};

pub const TITLE: &str = "Product Table";
pub const FOOTER_TEXT: &str = "type: search | Backspace: delete | Ctrl+U: clear | Tab: in stock only | Esc: quit";

/// Draw one frame of the whole widget from its render tree
pub fn render_ui<B: Backend>(view: &FilterableTableView, total: usize, terminal: &mut Terminal<B>) -> Result<(), io::Error> {
    terminal.draw(|f| draw(f, view, total))?;
    Ok(())
}

pub fn draw(f: &mut Frame, view: &FilterableTableView, total: usize) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints(
            [
                Constraint::Length(3), // Title
                Constraint::Length(4), // Search box
                Constraint::Min(0),    // Table
                Constraint::Length(3), // Footer
            ]
            .as_ref(),
        )
        .split(f.size());

    let title = Block::default().title(TITLE).borders(Borders::ALL);
    f.render_widget(title, chunks[0]);

    renderers::search::render(f, &view.search, chunks[1]);
    renderers::table::render(f, &view.table, total, chunks[2]);

    let footer = Paragraph::new(FOOTER_TEXT).block(Block::default().borders(Borders::ALL));
    f.render_widget(footer, chunks[3]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::container::FilterableTable;
    use crate::search::SearchEvents;
    use ratatui::backend::TestBackend;

    fn screen(table: &FilterableTable) -> String {
        let mut terminal = Terminal::new(TestBackend::new(90, 30)).unwrap();
        render_ui(&table.view(), table.catalog().len(), &mut terminal).unwrap();
        let buffer = terminal.backend().buffer();
        let width = buffer.area.width as usize;
        buffer
            .content
            .chunks(width)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn reference_table() -> FilterableTable {
        FilterableTable::new(Catalog::reference(), &Catalog::reference_layout())
    }

    #[test]
    fn draws_every_product_by_default() {
        let out = screen(&reference_table());
        assert!(out.contains(TITLE));
        assert!(out.contains("Search for Products"));
        assert!(out.contains("[ ] Only show products in stock"));
        for name in ["Football", "Baseball", "Basketball", "iPod Touch", "iPhone 5", "Nexus 7"] {
            assert!(out.contains(name), "missing {name}");
        }
        assert!(out.contains("$399.99"));
        assert!(out.contains("6 of 6"));
    }

    #[test]
    fn draws_filtered_rows_only() {
        let mut table = reference_table();
        table.on_filter_text_changed("BALL".to_string());
        table.on_stock_only_toggled();
        let out = screen(&table);
        assert!(out.contains("[x] Only show products in stock"));
        assert!(out.contains("BALL"));
        assert!(out.contains("Football"));
        assert!(out.contains("Baseball"));
        assert!(!out.contains("Basketball"));
        assert!(!out.contains("Nexus 7"));
        assert!(out.contains("2 of 6"));
    }

    #[test]
    fn empty_sections_keep_their_headers() {
        let mut table = reference_table();
        table.on_filter_text_changed("zzz-no-match".to_string());
        let out = screen(&table);
        assert!(out.contains("Sporting Goods"));
        assert!(out.contains("Electronics"));
        assert_eq!(out.matches(renderers::table::EMPTY_SECTION).count(), 2);
    }
}
