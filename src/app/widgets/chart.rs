use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Style},
    symbols,
    text::Span,
    widgets::{Axis, Chart, Dataset, GraphType, Paragraph},
};
use rust_decimal::{Decimal, prelude::ToPrimitive};
use rust_decimal_macros::dec;

use super::{DOWN_COLOR, UP_COLOR, panel, skeleton_lines};
use crate::{
    app::{
        remote::{Loadable, Remote},
        utils::format_clock,
    },
    models::{ChartPoint, StockSnapshot},
};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Trend {
    Up,
    Down,
}

impl Trend {
    /// Up unless the last price is below the first; short series count as up.
    pub fn of(points: &[ChartPoint]) -> Self {
        match (points.first(), points.last()) {
            (Some(first), Some(last)) if points.len() >= 2 && last.price() < first.price() => {
                Trend::Down
            }
            _ => Trend::Up,
        }
    }

    pub fn color(&self) -> Color {
        match self {
            Trend::Up => UP_COLOR,
            Trend::Down => DOWN_COLOR,
        }
    }
}

/// Vertical bounds padded by 10% of the price span on each side.
pub fn axis_domain(prices: &[Decimal]) -> (Decimal, Decimal) {
    let (Some(min), Some(max)) = (prices.iter().min(), prices.iter().max()) else {
        return (Decimal::ZERO, dec!(100));
    };
    let padding = (*max - *min) * dec!(0.1);
    (*min - padding, *max + padding)
}

fn plot_bounds(domain: (Decimal, Decimal)) -> [f64; 2] {
    let low = domain.0.to_f64().unwrap_or_default();
    let high = domain.1.to_f64().unwrap_or_default();
    if high > low {
        [low, high]
    } else {
        // A flat series still needs a visible band.
        [low - 1.0, high + 1.0]
    }
}

pub fn render(frame: &mut Frame, area: Rect, snapshot: &Remote<StockSnapshot>, symbol: &str) {
    let title = format!(" {} Price Chart ", symbol);

    let stock = match snapshot.state() {
        Loadable::Ready(stock) => stock,
        _ => {
            let skeleton = Paragraph::new(skeleton_lines(&[16, 40, 40, 40]))
                .block(panel(" Price Chart ".to_string()));
            frame.render_widget(skeleton, area);
            return;
        }
    };

    let points = stock.chart_data();
    if points.is_empty() {
        let empty = Paragraph::new("No chart data available")
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center)
            .block(panel(title));
        frame.render_widget(empty, area);
        return;
    }

    let data: Vec<(f64, f64)> = points
        .iter()
        .enumerate()
        .map(|(i, point)| (i as f64, point.price().to_f64().unwrap_or_default()))
        .collect();

    let color = Trend::of(points).color();
    let bounds = plot_bounds(axis_domain(&stock.prices()));
    let max_x = (points.len().saturating_sub(1)).max(1) as f64;

    let first_time = points.first().map(|p| format_clock(p.time(), false));
    let last_time = points.last().map(|p| format_clock(p.time(), false));

    let datasets = vec![
        Dataset::default()
            .marker(symbols::Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(color))
            .data(&data),
    ];

    let chart = Chart::new(datasets)
        .block(panel(title))
        .x_axis(
            Axis::default()
                .style(Style::default().fg(Color::Gray))
                .bounds([0.0, max_x])
                .labels(vec![
                    Span::raw(first_time.unwrap_or_default()),
                    Span::raw(last_time.unwrap_or_default()),
                ]),
        )
        .y_axis(
            Axis::default()
                .style(Style::default().fg(Color::Gray))
                .bounds(bounds)
                .labels(vec![
                    Span::raw(format!("${:.0}", bounds[0])),
                    Span::raw(format!("${:.0}", (bounds[0] + bounds[1]) / 2.0)),
                    Span::raw(format!("${:.0}", bounds[1])),
                ]),
        );

    frame.render_widget(chart, area);
}
