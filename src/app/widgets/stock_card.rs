use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Cell, Paragraph, Row, Table},
};

use super::{panel, skeleton_lines, trend_color};
use crate::{
    app::{
        remote::{Loadable, Remote},
        utils::{
            format_large_number, format_percent_change, format_price, format_signed_price,
            format_volume,
        },
    },
    models::StockSnapshot,
};

fn metric_cell(label: &str, value: String) -> Cell<'static> {
    Cell::from(Text::from(vec![
        Line::styled(label.to_uppercase(), Style::default().fg(Color::Yellow)),
        Line::styled(value, Style::default().add_modifier(Modifier::BOLD)),
    ]))
}

pub fn render(frame: &mut Frame, area: Rect, snapshot: &Remote<StockSnapshot>) {
    let stock = match snapshot.state() {
        Loadable::Ready(stock) => stock,
        _ => {
            let skeleton = Paragraph::new(skeleton_lines(&[12, 24, 18, 30, 30]))
                .block(panel(" Overview ".to_string()));
            frame.render_widget(skeleton, area);
            return;
        }
    };

    let block = panel(format!(" {} ", stock.symbol()));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(5), Constraint::Min(0)])
        .split(inner);

    let positive = stock.is_positive();
    let color = trend_color(positive);
    let arrow = if positive { "▲" } else { "▼" };

    let heading = Paragraph::new(vec![
        Line::from(vec![
            Span::styled(
                stock.symbol().to_string(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
            Span::styled(
                format!("{} {}", arrow, format_percent_change(*stock.change_percent())),
                Style::default().fg(color),
            ),
        ]),
        Line::styled(stock.name().to_string(), Style::default().fg(Color::Gray)),
        Line::from(""),
        Line::from(vec![
            Span::styled(
                format_price(*stock.current_price()),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
            Span::styled(
                format_signed_price(*stock.change()),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            ),
        ]),
    ]);
    frame.render_widget(heading, chunks[0]);

    let market_cap = (*stock.market_cap())
        .map(format_large_number)
        .unwrap_or_else(|| "N/A".to_string());

    let rows = [
        Row::new([
            metric_cell(
                "Day Range",
                format!(
                    "{} - {}",
                    format_price(*stock.day_low()),
                    format_price(*stock.day_high())
                ),
            ),
            metric_cell("Volume", format_volume(*stock.volume())),
        ])
        .height(3),
        Row::new([
            metric_cell(
                "52W Range",
                format!(
                    "{} - {}",
                    format_price(*stock.fifty_two_week_low()),
                    format_price(*stock.fifty_two_week_high())
                ),
            ),
            metric_cell("Market Cap", market_cap),
        ])
        .height(3),
    ];

    let table = Table::new(rows, [Constraint::Percentage(50), Constraint::Percentage(50)]);
    frame.render_widget(table, chunks[1]);
}
