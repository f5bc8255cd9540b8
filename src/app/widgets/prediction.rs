use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
};

use super::panel;
use crate::{
    app::{prediction::PredictionPanel, remote::Loadable},
    models::Recommendation,
};

const DISCLAIMER: &str =
    "AI predictions are for informational purposes only. Always do your own research.";

fn recommendation_line(recommendation: Recommendation) -> Line<'static> {
    let (icon, color) = match recommendation {
        Recommendation::Buy => ("▲", Color::Green),
        Recommendation::Sell => ("▼", Color::Red),
        Recommendation::Hold => ("■", Color::Yellow),
    };
    Line::styled(
        format!("{} {}", icon, recommendation),
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    )
    .alignment(Alignment::Center)
}

pub fn render(frame: &mut Frame, area: Rect, panel_state: &PredictionPanel, symbol: &str) {
    let block = panel(" AI Prediction ✦ ".to_string());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Min(0)])
        .split(inner);

    let action = if panel_state.remote().is_fetching() {
        Span::styled("⠿ Analyzing…", Style::default().fg(Color::Cyan))
    } else {
        Span::styled(
            "[a] Analyze",
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )
    };
    let controls = Paragraph::new(Line::from(vec![
        Span::raw("Risk: "),
        Span::styled(
            panel_state.risk_profile().label(),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::styled("  [r] change  ", Style::default().fg(Color::DarkGray)),
        action,
    ]));
    frame.render_widget(controls, chunks[0]);

    let mut lines = Vec::new();

    if let Loadable::Failed(_) = panel_state.remote().state() {
        lines.push(Line::styled(
            "⚠ Failed to generate prediction",
            Style::default().fg(Color::Red),
        ));
        lines.push(Line::from(""));
    }

    match panel_state.remote().data() {
        Some(prediction) if !prediction.prediction().is_empty() => {
            if let Some(recommendation) = prediction.recommendation() {
                lines.push(recommendation_line(recommendation));
                lines.push(Line::from(""));
            }
            lines.push(Line::styled(
                "AI Analysis",
                Style::default().fg(Color::Gray).add_modifier(Modifier::BOLD),
            ));
            lines.extend(
                prediction
                    .prediction()
                    .lines()
                    .map(|line| Line::from(line.to_string())),
            );
            lines.push(Line::from(""));
            lines.push(
                Line::styled(DISCLAIMER, Style::default().fg(Color::DarkGray))
                    .alignment(Alignment::Center),
            );
        }
        _ => {
            if !panel_state.remote().is_failed() && !panel_state.remote().is_fetching() {
                lines.push(
                    Line::styled(
                        format!(
                            "Select your risk profile and press [a] to get AI-powered insights for {}",
                            symbol
                        ),
                        Style::default().fg(Color::DarkGray),
                    )
                    .alignment(Alignment::Center),
                );
            }
        }
    }

    let body = Paragraph::new(lines).wrap(Wrap { trim: false });
    frame.render_widget(body, chunks[1]);
}
