use std::{
    io::{self, Stdout},
    time::Duration,
};

use anyhow::{Context, Result};
use crossterm::{
    event::{
        DisableMouseCapture, EnableMouseCapture, Event, EventStream, KeyCode, KeyEvent,
        KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Terminal,
    backend::{Backend, CrosstermBackend},
    layout::Position,
    widgets::ListState,
};
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tokio_stream::StreamExt;

use crate::{
    api::MarketPulseApi,
    app::{
        dashboard::Dashboard,
        debounce::Debouncer,
        dispatch::dispatch,
        event::{AppEvent, Command},
        refresh::spawn_refresh,
        search::QueryChange,
        ui::{self, Regions},
        widgets::search::row_at,
    },
};

const REDRAW_INTERVAL: Duration = Duration::from_millis(500);

pub struct App {
    dashboard: Dashboard,
    api: MarketPulseApi,
    events_tx: UnboundedSender<AppEvent>,
    events_rx: Option<UnboundedReceiver<AppEvent>>,
    debouncer: Debouncer,
    refresh_interval: Duration,
    news_state: ListState,
    regions: Regions,
    should_quit: bool,
}

impl App {
    pub fn new(
        dashboard: Dashboard,
        api: MarketPulseApi,
        refresh_interval: Duration,
        search_debounce: Duration,
    ) -> Self {
        let (events_tx, events_rx) = mpsc::unbounded_channel();
        Self {
            dashboard,
            api,
            events_tx,
            events_rx: Some(events_rx),
            debouncer: Debouncer::new(search_debounce),
            refresh_interval,
            news_state: ListState::default(),
            regions: Regions::default(),
            should_quit: false,
        }
    }

    pub fn dashboard(&self) -> &Dashboard {
        &self.dashboard
    }

    pub async fn run(&mut self) -> Result<()> {
        let mut terminal = or_restore(setup_terminal(), restore_terminal)?;

        let result = self.run_app(&mut terminal).await;

        restore_terminal()?;
        terminal.show_cursor()?;

        result
    }

    async fn run_app<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        let mut app_events = self
            .events_rx
            .take()
            .context("Event loop is already running")?;
        let refresh = spawn_refresh(
            self.refresh_interval,
            self.dashboard.store().subscribe(),
            self.events_tx.clone(),
        );

        for command in self.dashboard.start() {
            self.dispatch(command);
        }

        let mut terminal_events = EventStream::new();
        let mut redraw = tokio::time::interval(REDRAW_INTERVAL);

        let result = loop {
            if let Err(e) = terminal.draw(|frame| {
                ui::render(
                    frame,
                    &mut self.dashboard,
                    &mut self.news_state,
                    &mut self.regions,
                )
            }) {
                break Err(e.into());
            }

            tokio::select! {
                maybe_event = terminal_events.next() => match maybe_event {
                    Some(Ok(event)) => self.handle_terminal_event(event),
                    Some(Err(e)) => break Err(e.into()),
                    None => break Ok(()),
                },
                Some(event) = app_events.recv() => self.handle_app_event(event),
                _ = redraw.tick() => {}
            }

            if self.should_quit {
                break Ok(());
            }
        };

        refresh.abort();
        self.debouncer.cancel();
        self.events_rx = Some(app_events);
        result
    }

    fn dispatch(&self, command: Command) {
        dispatch(&self.api, &self.events_tx, command);
    }

    pub(crate) fn handle_app_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::Fetched(outcome) => {
                self.dashboard.apply(outcome);
            }
            AppEvent::SearchDue(query) => {
                if let Some(command) = self.dashboard.begin_search(&query) {
                    self.dispatch(command);
                }
            }
            AppEvent::RefreshDue(symbol) => {
                if let Some(command) = self.dashboard.refresh(&symbol) {
                    self.dispatch(command);
                }
            }
        }
    }

    pub(crate) fn handle_terminal_event(&mut self, event: Event) {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key(key),
            Event::Mouse(mouse) => self.handle_mouse(mouse),
            _ => {}
        }
    }

    fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        if self.dashboard.search().is_open() {
            self.handle_search_key(key);
            return;
        }

        match key.code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Char('/') | KeyCode::Char('s') => self.dashboard.search_mut().open(),
            KeyCode::Char('a') => {
                if let Some(command) = self.dashboard.analyze() {
                    self.dispatch(command);
                }
            }
            KeyCode::Char('r') => self.dashboard.prediction_mut().cycle_risk_profile(),
            KeyCode::F(5) => {
                let symbol = self.dashboard.symbol();
                if let Some(command) = self.dashboard.refresh(&symbol) {
                    self.dispatch(command);
                }
            }
            KeyCode::Down => self.scroll_news(true),
            KeyCode::Up => self.scroll_news(false),
            _ => {}
        }
    }

    fn handle_search_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => self.dashboard.search_mut().close(),
            KeyCode::Enter => self.select_highlighted(),
            KeyCode::Down => self.dashboard.search_mut().next(),
            KeyCode::Up => self.dashboard.search_mut().previous(),
            KeyCode::Backspace => {
                let change = self.dashboard.search_mut().pop_char();
                self.apply_query_change(change);
            }
            KeyCode::Char(c) if !c.is_control() => {
                let change = self.dashboard.search_mut().push_char(c);
                self.apply_query_change(change);
            }
            _ => {}
        }
    }

    fn apply_query_change(&mut self, change: QueryChange) {
        match change {
            QueryChange::ShowPopular => self.debouncer.cancel(),
            QueryChange::Debounce(query) => {
                let events = self.events_tx.clone();
                self.debouncer.schedule(async move {
                    let _ = events.send(AppEvent::SearchDue(query));
                });
            }
        }
    }

    fn select_highlighted(&mut self) {
        let Some(symbol) = self.dashboard.search_mut().take_selection() else {
            return;
        };
        self.debouncer.cancel();
        self.news_state.select(None);
        for command in self.dashboard.select_symbol(&symbol) {
            self.dispatch(command);
        }
    }

    fn handle_mouse(&mut self, mouse: MouseEvent) {
        match mouse.kind {
            MouseEventKind::Down(button) => {
                let position = Position::new(mouse.column, mouse.row);

                if self.regions.search_input.contains(position) {
                    self.dashboard.search_mut().open();
                    return;
                }

                if !self.dashboard.search().is_open() {
                    return;
                }

                // Any button closes the panel from outside; only the left one picks a row.
                match self.regions.search_panel {
                    Some(panel) if panel.contains(position) => {
                        if button != MouseButton::Left {
                            return;
                        }
                        let offset = self.dashboard.search_mut().list_state_mut().offset();
                        if let Some(index) = row_at(panel, mouse.row, offset) {
                            self.dashboard.search_mut().highlight(index);
                            self.select_highlighted();
                        }
                    }
                    _ => self.dashboard.search_mut().close(),
                }
            }
            MouseEventKind::ScrollDown if !self.dashboard.search().is_open() => {
                self.scroll_news(true)
            }
            MouseEventKind::ScrollUp if !self.dashboard.search().is_open() => {
                self.scroll_news(false)
            }
            _ => {}
        }
    }

    fn scroll_news(&mut self, down: bool) {
        let count = self
            .dashboard
            .news()
            .data()
            .map(|feed| feed.articles().len())
            .unwrap_or(0);
        if count == 0 {
            return;
        }

        let i = match self.news_state.selected() {
            Some(i) if down => (i + 1).min(count - 1),
            Some(i) => i.saturating_sub(1),
            None => 0,
        };
        self.news_state.select(Some(i));
    }
}

fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    Ok(Terminal::new(CrosstermBackend::new(stdout))?)
}

fn restore_terminal() -> Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture)?;
    Ok(())
}

/// Runs `restore` when `setup` failed part way, then hands back the setup error.
pub(crate) fn or_restore<T>(setup: Result<T>, restore: impl FnOnce() -> Result<()>) -> Result<T> {
    setup.or_else(|e| {
        if let Err(restore_error) = restore() {
            tracing::warn!(error = %restore_error, "failed to restore terminal");
        }
        Err(e)
    })
}

#[cfg(test)]
impl App {
    pub(crate) fn set_regions(&mut self, regions: Regions) {
        self.regions = regions;
    }

    pub(crate) fn try_next_event(&mut self) -> Option<AppEvent> {
        self.events_rx.as_mut()?.try_recv().ok()
    }

    pub(crate) async fn next_event(&mut self) -> Option<AppEvent> {
        self.events_rx.as_mut()?.recv().await
    }
}
