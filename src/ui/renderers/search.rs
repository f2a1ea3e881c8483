use ratatui::{
    widgets::{Block, Borders, Paragraph},
    layout::Rect,
    style::{Style, Color, Modifier},
    text::{Line, Span},
    Frame
};
use crate::view::SearchControlView;
use crate::ui::utils::checkbox;

/// Render the search field and the in-stock checkbox, with the cursor at the end of the text
pub fn render(f: &mut Frame, view: &SearchControlView, area: Rect) {
    let label = Span::styled(format!("{}: ", view.label), Style::default().fg(Color::Cyan));
    let value = Span::styled(view.filter_text.as_str(), Style::default().add_modifier(Modifier::BOLD));
    let cursor_offset = (label.width() + value.width()) as u16;

    let box_style = if view.in_stock_only {
        Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };
    let lines = vec![
        Line::from(vec![label, value]),
        Line::from(vec![
            Span::styled(checkbox(view.in_stock_only), box_style),
            Span::raw(" "),
            Span::raw(view.checkbox_label.as_str()),
        ]),
    ];

    let block = Block::default().borders(Borders::ALL).title("Search");
    let inner = block.inner(area);
    f.render_widget(Paragraph::new(lines).block(block), area);

    if inner.width > 0 && inner.height > 0 {
        let x = inner.x + cursor_offset.min(inner.width - 1);
        f.set_cursor(x, inner.y);
    }
}
