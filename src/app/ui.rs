use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, ListState, Paragraph, Wrap},
};

use crate::app::{
    dashboard::Dashboard,
    utils::format_clock,
    widgets::{chart, news, prediction, search, stock_card},
};

/// Screen areas the mouse handler needs from the last frame.
#[derive(Clone, Copy, Debug, Default)]
pub struct Regions {
    pub search_input: Rect,
    pub search_panel: Option<Rect>,
}

pub fn render(
    frame: &mut Frame,
    dashboard: &mut Dashboard,
    news_state: &mut ListState,
    regions: &mut Regions,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(frame.area());

    let symbol = dashboard.symbol();

    render_header(frame, chunks[0], dashboard, &symbol, regions);

    if dashboard.snapshot().is_failed() {
        render_error_page(frame, chunks[1], &symbol);
    } else {
        render_main(frame, chunks[1], dashboard, &symbol, news_state);
    }

    render_footer(frame, chunks[2], dashboard);

    regions.search_panel = if dashboard.search().is_open() {
        Some(search::render_results(
            frame,
            regions.search_input,
            dashboard.search_mut(),
            &symbol,
        ))
    } else {
        None
    };
}

fn render_header(
    frame: &mut Frame,
    area: Rect,
    dashboard: &Dashboard,
    symbol: &str,
    regions: &mut Regions,
) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(32),
            Constraint::Min(20),
            Constraint::Length(14),
        ])
        .split(area);

    let brand = Paragraph::new(Line::from(vec![
        Span::styled(
            "◆ MarketPulse",
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ),
        Span::styled(" AI-Powered Analysis", Style::default().fg(Color::DarkGray)),
    ]))
    .block(Block::default().borders(Borders::ALL));
    frame.render_widget(brand, chunks[0]);

    regions.search_input = chunks[1];
    search::render_input(frame, chunks[1], dashboard.search());

    let selected = Paragraph::new(Span::styled(
        symbol.to_string(),
        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
    ))
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL));
    frame.render_widget(selected, chunks[2]);
}

fn render_main(
    frame: &mut Frame,
    area: Rect,
    dashboard: &Dashboard,
    symbol: &str,
    news_state: &mut ListState,
) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let top = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(rows[0]);

    let bottom = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(rows[1]);

    stock_card::render(frame, top[0], dashboard.snapshot());
    chart::render(frame, top[1], dashboard.snapshot(), symbol);
    prediction::render(frame, bottom[0], dashboard.prediction(), symbol);
    news::render(frame, bottom[1], dashboard.news(), symbol, news_state);
}

fn render_error_page(frame: &mut Frame, area: Rect, symbol: &str) {
    let lines = vec![
        Line::from(""),
        Line::styled("⚠", Style::default().fg(Color::Red)),
        Line::from(""),
        Line::styled(
            "Unable to Load Data",
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Line::from(""),
        Line::styled(
            format!(
                "Failed to fetch data for {}. Please try again or select a different stock.",
                symbol
            ),
            Style::default().fg(Color::Gray),
        ),
    ];

    let page = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(page, area);
}

fn render_footer(frame: &mut Frame, area: Rect, dashboard: &Dashboard) {
    let mut spans = Vec::new();

    if let Some(stock) = dashboard.snapshot().data() {
        spans.push(Span::styled(
            "Real-time data from market APIs",
            Style::default().fg(Color::Cyan),
        ));
        spans.push(Span::styled(
            format!(" | Last updated: {}", format_clock(stock.timestamp(), true)),
            Style::default().fg(Color::DarkGray),
        ));
        spans.push(Span::raw("   "));
    }

    let hints = if dashboard.search().is_open() {
        "[↑↓] move  [Enter] select  [Esc] close"
    } else {
        "[/] search  [a] analyze  [r] risk  [↑↓] news  [F5] refresh  [q] quit"
    };
    spans.push(Span::styled(hints, Style::default().fg(Color::DarkGray)));

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
