pub mod chart;
pub mod news;
pub mod prediction;
pub mod search;
pub mod stock_card;

use ratatui::{
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders},
};

pub const UP_COLOR: Color = Color::Green;
pub const DOWN_COLOR: Color = Color::Red;

pub fn panel(title: String) -> Block<'static> {
    Block::default()
        .title(title)
        .title_style(Style::default().add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
}

/// Placeholder bars shown while a widget waits for its first response.
pub fn skeleton_lines(widths: &[u16]) -> Vec<Line<'static>> {
    widths
        .iter()
        .flat_map(|width| {
            [
                Line::styled(
                    "░".repeat(*width as usize),
                    Style::default().fg(Color::DarkGray),
                ),
                Line::from(""),
            ]
        })
        .collect()
}

pub fn trend_color(positive: bool) -> Color {
    if positive { UP_COLOR } else { DOWN_COLOR }
}
