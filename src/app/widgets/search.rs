use ratatui::{
    Frame,
    layout::{Position, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph},
};

use crate::app::search::SearchState;

const PLACEHOLDER: &str = "Search stocks (e.g., AAPL, TSLA)";
const MAX_PANEL_ROWS: u16 = 10;

pub fn render_input(frame: &mut Frame, area: Rect, search: &SearchState) {
    let border = if search.is_open() {
        Color::Cyan
    } else {
        Color::DarkGray
    };

    let text = if search.query().is_empty() {
        Line::styled(format!("🔍 {}", PLACEHOLDER), Style::default().fg(Color::DarkGray))
    } else {
        Line::from(format!("🔍 {}", search.query()))
    };

    let input = Paragraph::new(text).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border)),
    );
    frame.render_widget(input, area);

    if search.is_open() {
        // "🔍 " occupies three columns.
        let x = area.x + 1 + 3 + search.query().chars().count() as u16;
        frame.set_cursor_position(Position::new(
            x.min(area.right().saturating_sub(2)),
            area.y + 1,
        ));
    }
}

/// Draws the result dropdown under `anchor` and returns the area it occupies.
pub fn render_results(
    frame: &mut Frame,
    anchor: Rect,
    search: &mut SearchState,
    selected_symbol: &str,
) -> Rect {
    let bounds = frame.area();
    let rows = if search.is_loading() || search.visible_results().is_empty() {
        1
    } else {
        (search.visible_results().len() as u16).min(MAX_PANEL_ROWS)
    };
    let top = anchor.bottom().min(bounds.bottom());
    let area = Rect::new(
        anchor.x,
        top,
        anchor.width,
        (rows + 2).min(bounds.bottom().saturating_sub(top)),
    );

    frame.render_widget(Clear, area);

    let title = if search.query().is_empty() {
        " Popular Stocks "
    } else {
        " Results "
    };
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    if search.is_loading() {
        let searching = Paragraph::new("⠿ Searching…")
            .style(Style::default().fg(Color::DarkGray))
            .block(block);
        frame.render_widget(searching, area);
        return area;
    }

    if search.visible_results().is_empty() {
        let empty = Paragraph::new(format!("No stocks found for \"{}\"", search.query()))
            .style(Style::default().fg(Color::DarkGray))
            .block(block);
        frame.render_widget(empty, area);
        return area;
    }

    let items: Vec<ListItem> = search
        .visible_results()
        .iter()
        .map(|result| {
            let symbol_style = if result.symbol() == selected_symbol {
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
            } else {
                Style::default().add_modifier(Modifier::BOLD)
            };
            ListItem::new(Line::from(vec![
                Span::styled(format!("{:<8}", result.symbol()), symbol_style),
                Span::styled(result.name().to_string(), Style::default().fg(Color::Gray)),
            ]))
        })
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED));

    frame.render_stateful_widget(list, area, search.list_state_mut());
    area
}

/// Maps a click inside the dropdown to a result index.
pub fn row_at(panel: Rect, row: u16, offset: usize) -> Option<usize> {
    if row <= panel.y || row >= panel.bottom().saturating_sub(1) {
        return None;
    }
    Some(offset + (row - panel.y - 1) as usize)
}
