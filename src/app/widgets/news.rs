use chrono::Utc;
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem, ListState, Paragraph},
};

use super::{panel, skeleton_lines};
use crate::{
    app::{
        remote::{Loadable, Remote},
        utils::format_time_ago,
    },
    models::{NewsArticle, NewsFeed},
};

fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    let kept: String = text.chars().take(width.saturating_sub(1)).collect();
    format!("{}…", kept)
}

fn article_item(article: &NewsArticle, width: usize) -> ListItem<'static> {
    let mut lines = vec![Line::styled(
        truncate(article.title(), width),
        Style::default().add_modifier(Modifier::BOLD),
    )];

    if let Some(description) = article.description().as_deref().filter(|d| !d.is_empty()) {
        lines.push(Line::styled(
            truncate(description, width),
            Style::default().fg(Color::Gray),
        ));
    }

    let mut meta = vec![Span::styled(
        format!("🕒 {}", format_time_ago(article.published_at().as_deref(), Utc::now())),
        Style::default().fg(Color::DarkGray),
    )];
    if let Some(source) = article.source().as_deref().filter(|s| !s.is_empty()) {
        meta.push(Span::styled(
            format!("  ↗ {}", source),
            Style::default().fg(Color::DarkGray),
        ));
    }
    lines.push(Line::from(meta));

    if !article.url().is_empty() {
        lines.push(Line::styled(
            truncate(article.url(), width),
            Style::default()
                .fg(Color::Blue)
                .add_modifier(Modifier::UNDERLINED),
        ));
    }
    lines.push(Line::from(""));

    ListItem::new(lines)
}

fn message(frame: &mut Frame, area: Rect, title: String, text: &str) {
    let paragraph = Paragraph::new(text.to_string())
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center)
        .block(panel(title));
    frame.render_widget(paragraph, area);
}

pub fn render(
    frame: &mut Frame,
    area: Rect,
    news: &Remote<NewsFeed>,
    symbol: &str,
    list_state: &mut ListState,
) {
    let feed = match news.state() {
        Loadable::Ready(feed) => feed,
        Loadable::Failed(_) => {
            message(
                frame,
                area,
                " Latest News ".to_string(),
                "Unable to load news at this time",
            );
            return;
        }
        Loadable::Idle | Loadable::Loading => {
            let skeleton = Paragraph::new(skeleton_lines(&[36, 20, 36, 20, 36, 20]))
                .block(panel(" Latest News ".to_string()));
            frame.render_widget(skeleton, area);
            return;
        }
    };

    let title = format!(" Latest News for {} ", symbol);
    if feed.articles().is_empty() {
        message(frame, area, title, "No news articles found");
        return;
    }

    let width = area.width.saturating_sub(4) as usize;
    let items: Vec<ListItem> = feed
        .articles()
        .iter()
        .map(|article| article_item(article, width))
        .collect();

    let list = List::new(items)
        .block(panel(title))
        .highlight_symbol("▌")
        .highlight_style(Style::default().fg(Color::Cyan));

    frame.render_stateful_widget(list, area, list_state);
}
