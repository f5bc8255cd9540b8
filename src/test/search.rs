#[cfg(test)]
mod tests {
    use anyhow::anyhow;
    use ratatui::layout::Rect;

    use crate::{
        app::{
            remote::RequestTicket,
            search::{QueryChange, SearchState},
            widgets::search::row_at,
        },
        models::{SearchResult, popular_stocks},
    };

    fn result(symbol: &str) -> SearchResult {
        SearchResult::new(symbol.to_string(), format!("{} Inc.", symbol))
    }

    #[test]
    fn empty_query_shows_popular_list() {
        let mut search = SearchState::new();
        assert_eq!(search.visible_results(), popular_stocks().as_slice());

        assert_eq!(search.push_char('a'), QueryChange::Debounce("A".to_string()));
        assert_eq!(search.pop_char(), QueryChange::ShowPopular);
        assert_eq!(search.visible_results().len(), 5);
    }

    #[test]
    fn empty_query_ignores_failed_search() {
        let mut search = SearchState::new();
        search.push_char('x');
        let ticket = RequestTicket::new(1, "X".to_string());
        assert!(search.begin("X", ticket.clone()));
        search.set_query("");

        assert!(!search.resolve(&ticket, Err(anyhow!("offline"))));
        assert_eq!(search.visible_results(), popular_stocks().as_slice());
    }

    #[test]
    fn query_is_uppercased_and_results_replace() {
        let mut search = SearchState::new();
        search.push_char('m');
        search.push_char('s');
        assert_eq!(search.query(), "MS");

        let ticket = RequestTicket::new(7, "MS".to_string());
        assert!(search.begin("MS", ticket.clone()));
        assert!(search.is_loading());
        assert!(search.resolve(&ticket, Ok(vec![result("MSFT"), result("MS")])));

        assert!(!search.is_loading());
        assert_eq!(search.visible_results().len(), 2);
        assert_eq!(search.highlighted(), Some(0));
    }

    #[test]
    fn failed_search_clears_results_silently() {
        let mut search = SearchState::new();
        search.push_char('m');
        let ticket = RequestTicket::new(1, "M".to_string());
        search.begin("M", ticket.clone());
        search.resolve(&ticket, Ok(vec![result("MSFT")]));

        search.push_char('z');
        let ticket = RequestTicket::new(2, "MZ".to_string());
        search.begin("MZ", ticket.clone());
        assert!(search.resolve(&ticket, Err(anyhow!("503"))));
        assert!(search.visible_results().is_empty());
    }

    #[test]
    fn outdated_timer_does_not_search() {
        let mut search = SearchState::new();
        search.push_char('a');
        search.push_char('b');
        assert!(!search.begin("A", RequestTicket::new(1, "A".to_string())));
        assert!(!search.is_loading());
    }

    #[test]
    fn selection_clears_query_and_closes() {
        let mut search = SearchState::new();
        search.open();
        assert!(search.is_open());
        search.next();
        search.next();
        search.previous();

        assert_eq!(search.take_selection().as_deref(), Some("GOOGL"));
        assert!(!search.is_open());
        assert_eq!(search.query(), "");
    }

    #[test]
    fn highlight_wraps_around() {
        let mut search = SearchState::new();
        search.open();
        search.previous();
        assert_eq!(search.highlighted(), Some(4));
        search.next();
        assert_eq!(search.highlighted(), Some(0));
    }

    #[test]
    fn rows_are_not_selectable_while_searching() {
        let mut search = SearchState::new();
        search.push_char('m');
        let ticket = RequestTicket::new(1, "M".to_string());
        search.begin("M", ticket.clone());
        search.resolve(&ticket, Ok(vec![result("MSFT")]));

        search.push_char('z');
        let ticket = RequestTicket::new(2, "MZ".to_string());
        assert!(search.begin("MZ", ticket.clone()));

        search.next();
        search.highlight(0);
        assert_eq!(search.take_selection(), None);
        assert!(search.is_open());

        search.resolve(&ticket, Ok(vec![result("MZX")]));
        assert_eq!(search.take_selection().as_deref(), Some("MZX"));
    }

    #[test]
    fn click_rows_skip_borders_and_follow_scroll() {
        let panel = Rect::new(2, 3, 40, 7);

        assert_eq!(row_at(panel, 3, 0), None);
        assert_eq!(row_at(panel, 4, 0), Some(0));
        assert_eq!(row_at(panel, 8, 0), Some(4));
        assert_eq!(row_at(panel, 9, 0), None);
        assert_eq!(row_at(panel, 12, 0), None);
        assert_eq!(row_at(panel, 4, 5), Some(5));
        assert_eq!(row_at(panel, 6, 5), Some(7));
    }
}
