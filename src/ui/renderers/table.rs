use ratatui::{
    widgets::{Block, Borders, Table, Row, Cell},
    layout::{Alignment, Constraint, Rect},
    style::{Style, Color, Modifier},
    text::Line,
    Frame
};
use crate::view::{CategorySectionView, ProductTableView};
use crate::ui::utils::match_summary;

pub const EMPTY_SECTION: &str = "(no matching products)";

/// Render the product table: one header row per category followed by its entries
pub fn render(f: &mut Frame, view: &ProductTableView, total: usize, area: Rect) {
    let header_cells = vec![
        Cell::from(view.header.0.as_str()),
        Cell::from(Line::from(view.header.1.as_str()).alignment(Alignment::Right)),
    ];
    let header = Row::new(header_cells)
        .style(Style::default().fg(Color::Red).add_modifier(Modifier::BOLD))
        .bottom_margin(1);

    let rows: Vec<Row> = view.sections.iter().flat_map(section_rows).collect();

    let widths = [
        Constraint::Percentage(70), // Name
        Constraint::Percentage(30), // Price
    ];
    let title = format!("Products ({})", match_summary(view.entry_count(), total));
    let table = Table::new(rows, widths)
        .header(header)
        .block(Block::default().borders(Borders::ALL).title(title));
    f.render_widget(table, area);
}

fn section_rows(section: &CategorySectionView) -> Vec<Row<'_>> {
    let mut rows = vec![Row::new(vec![Cell::from(section.category.as_str())])
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))];

    if section.entries.is_empty() {
        rows.push(
            Row::new(vec![Cell::from(format!("  {}", EMPTY_SECTION))])
                .style(Style::default().fg(Color::DarkGray)),
        );
    }

    rows.extend(section.entries.iter().map(|entry| {
        Row::new(vec![
            Cell::from(format!("  {}", entry.name)),
            Cell::from(Line::from(entry.price.as_str()).alignment(Alignment::Right)),
        ])
    }));
    rows
}
