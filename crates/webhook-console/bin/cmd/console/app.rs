use clap::Args;
use crossbeam_channel::{unbounded, Receiver, Sender};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use eyre::Result;
use ratatui::{
    layout::{Constraint, Layout},
    style::Stylize,
    symbols::border,
    text::Line,
    widgets::Block,
    DefaultTerminal, Frame,
};
use std::io;
use std::path::PathBuf;
use std::time::{Duration, Instant};
use tracing::{debug, info};
use webhook_console::events::{spawn_health_check, spawn_load, spawn_save_merge_map};
use webhook_console::logging::{init_logging, LogConfig, LogTarget};
use webhook_console::rows::Panel;
use webhook_console::{
    dispatch_replay, AdminClient, ConsoleEvent, LoadEvent, LoadPayload, LoadToken, SaveStatus,
    Tab, TabController,
};

use super::state::{CacheView, DashboardView, InputMode, LoadState, LogsView, MergeMapView};
use super::views::bottom_bar::controls_line;
use super::views::cache::render_cache_panel;
use super::views::dashboard::render_dashboard;
use super::views::details::render_detail_popup;
use super::views::logs::render_logs_panel;
use super::views::merge_map::render_merge_map_panel;
use super::views::tabs::render_tab_bar;
use crate::cmd::ConnectionArgs;

#[derive(Debug, Args)]
pub struct ConsoleArgs {
    #[command(flatten)]
    pub connection: ConnectionArgs,

    /// File receiving diagnostic logs while the console owns the terminal
    #[arg(long, env = "WEBHOOK_CONSOLE_LOG_FILE", default_value = "webhook-console.log")]
    pub log_file: PathBuf,
}

pub(crate) struct App {
    client: AdminClient,
    tx: Sender<ConsoleEvent>,
    rx: Receiver<ConsoleEvent>,
    tabs: TabController,
    dashboard: DashboardView,
    logs: LogsView,
    cache: CacheView,
    merge_map: MergeMapView,
    input_mode: InputMode,
    page_input: String,
    healthy: Option<bool>,
    exit: bool,
    last_render_duration: Duration,
}

impl ConsoleArgs {
    pub fn run(&self) -> Result<()> {
        init_logging(&LogConfig {
            level: self.connection.log_level.clone(),
            target: LogTarget::File(self.log_file.clone()),
        })?;

        let config = self.connection.config();
        info!(url = %config.base_url, "starting console");
        let mut app = App::new(AdminClient::new(config));

        let mut terminal = ratatui::init();
        let app_result = app.run(&mut terminal);
        ratatui::restore();
        app_result.map_err(|e| eyre::eyre!("TUI error: {}", e))
    }
}

impl App {
    pub(crate) fn new(client: AdminClient) -> Self {
        let (tx, rx) = unbounded::<ConsoleEvent>();
        Self {
            client,
            tx,
            rx,
            tabs: TabController::new(),
            dashboard: DashboardView::new(),
            logs: LogsView::new(),
            cache: CacheView::new(),
            merge_map: MergeMapView::new(),
            input_mode: InputMode::Normal,
            page_input: String::new(),
            healthy: None,
            exit: false,
            last_render_duration: Duration::from_millis(0),
        }
    }

    pub fn run(&mut self, terminal: &mut DefaultTerminal) -> io::Result<()> {
        spawn_health_check(&self.client, self.tx.clone());
        let startup = self.tabs.start();
        self.start_load(startup);

        while !self.exit {
            self.drain_events();

            let render_start = Instant::now();
            terminal.draw(|frame| self.draw(frame))?;
            self.last_render_duration = render_start.elapsed();

            self.handle_events()?;
        }
        Ok(())
    }

    fn start_load(&mut self, token: Option<LoadToken>) {
        let Some(token) = token else {
            return;
        };
        match token.tab {
            Tab::Dashboard => self.dashboard.state = LoadState::Loading,
            Tab::Logs => self.logs.state = LoadState::Loading,
            Tab::Cache => self.cache.state = LoadState::Loading,
            Tab::MergeMap => self.merge_map.state = LoadState::Loading,
        }
        spawn_load(&self.client, token, self.tx.clone());
    }

    fn drain_events(&mut self) {
        while let Ok(event) = self.rx.try_recv() {
            match event {
                ConsoleEvent::Loaded(load) => self.apply_load(load),
                ConsoleEvent::MergeMapSaved(save) => {
                    let generation = save.generation;
                    if !self.merge_map.finish_save(save) {
                        debug!(generation, "dropping save result for a reloaded form");
                    }
                }
                ConsoleEvent::Replay(replay) => self.logs.replays.finish(replay),
                ConsoleEvent::Health(healthy) => self.healthy = Some(healthy),
            }
        }
    }

    fn apply_load(&mut self, load: LoadEvent) {
        let LoadEvent { token, payload } = load;
        if !self.tabs.is_current(token) {
            debug!(tab = %token.tab, generation = token.generation, "dropping stale response");
            return;
        }
        match (token.tab, payload) {
            (Tab::Dashboard, LoadPayload::Logs(result)) => self.dashboard.apply(result),
            (Tab::Logs, LoadPayload::Logs(result)) => {
                self.logs.apply(result, token.generation);
                if self.input_mode == InputMode::Search {
                    self.input_mode = InputMode::Normal;
                }
            }
            (Tab::Cache, LoadPayload::Cache(result)) => self.cache.apply(result),
            (Tab::MergeMap, LoadPayload::MergeMap(result)) => {
                self.merge_map.apply(result, token.generation);
                if self.input_mode == InputMode::Edit {
                    self.input_mode = InputMode::Normal;
                }
            }
            (tab, _) => debug!(%tab, "ignoring mismatched payload"),
        }
    }

    fn draw(&mut self, frame: &mut Frame) {
        self.render_ui(frame);
    }

    fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key_event) = event::read()? {
                if key_event.kind == KeyEventKind::Press {
                    self.handle_key_event(key_event);
                }
            }
        }
        Ok(())
    }

    fn handle_key_event(&mut self, key_event: KeyEvent) {
        match self.input_mode {
            InputMode::Search => self.handle_search_key(key_event),
            InputMode::Edit => self.handle_edit_key(key_event),
            InputMode::PageJump => self.handle_page_jump_key(key_event),
            InputMode::Normal => {
                if self.tabs.active() == Tab::Logs && self.logs.detail.is_some() {
                    self.handle_detail_key(key_event);
                } else {
                    self.handle_normal_key(key_event);
                }
            }
        }
    }

    fn handle_normal_key(&mut self, key_event: KeyEvent) {
        match key_event.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => self.exit(),
            KeyCode::Tab => self.select_tab(self.tabs.active().next()),
            KeyCode::BackTab => self.select_tab(self.tabs.active().previous()),
            KeyCode::Char(c @ '1'..='4') => {
                let index = c as usize - '1' as usize;
                self.select_tab(Tab::ALL[index]);
            }
            KeyCode::Char('R') => self.reload(),
            _ => match self.tabs.active() {
                Tab::Dashboard => {}
                Tab::Logs => self.handle_logs_key(key_event),
                Tab::Cache => self.handle_cache_key(key_event),
                Tab::MergeMap => self.handle_merge_map_key(key_event),
            },
        }
    }

    fn handle_logs_key(&mut self, key_event: KeyEvent) {
        match key_event.code {
            KeyCode::Up | KeyCode::Char('k') => self.logs.select_previous(),
            KeyCode::Down | KeyCode::Char('j') => self.logs.select_next(),
            KeyCode::Left | KeyCode::Char('h') => self.logs.previous_page(),
            KeyCode::Right | KeyCode::Char('l') => self.logs.next_page(),
            KeyCode::Home => self.logs.go_to_page(1),
            KeyCode::End => self.logs.go_to_page(self.logs.last_page()),
            KeyCode::Char('g') => self.start_page_jump(),
            KeyCode::Char('/') => {
                if self.logs.state.loaded().is_some() {
                    self.input_mode = InputMode::Search;
                }
            }
            KeyCode::Char('f') => self.logs.cycle_status(),
            KeyCode::Char('x') => self.logs.clear_filters(),
            KeyCode::Enter | KeyCode::Char('i') => self.logs.open_detail(),
            KeyCode::Char('r') => {
                if let Some(index) = self.logs.selected_index() {
                    self.replay(index);
                }
            }
            _ => {}
        }
    }

    fn handle_detail_key(&mut self, key_event: KeyEvent) {
        match key_event.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => self.exit(),
            KeyCode::Esc | KeyCode::Enter | KeyCode::Char('i') => self.logs.close_detail(),
            KeyCode::Up | KeyCode::Char('k') => self.logs.select_previous(),
            KeyCode::Down | KeyCode::Char('j') => self.logs.select_next(),
            KeyCode::Char('e') => self.logs.toggle_panel(Panel::MailchimpError),
            KeyCode::Char('c') => self.logs.toggle_panel(Panel::Changes),
            KeyCode::Char('p') => self.logs.toggle_panel(Panel::Payload),
            KeyCode::Char('r') => {
                if let Some(detail) = self.logs.detail {
                    self.replay(detail.index);
                }
            }
            _ => {}
        }
    }

    fn handle_cache_key(&mut self, key_event: KeyEvent) {
        match key_event.code {
            KeyCode::Up | KeyCode::Char('k') => self.cache.select_previous(),
            KeyCode::Down | KeyCode::Char('j') => self.cache.select_next(),
            KeyCode::Left | KeyCode::Char('h') => self.cache.previous_page(),
            KeyCode::Right | KeyCode::Char('l') => self.cache.next_page(),
            KeyCode::Home => self.cache.go_to_page(1),
            KeyCode::End => self.cache.go_to_page(self.cache.last_page()),
            KeyCode::Char('g') => self.start_page_jump(),
            KeyCode::Char('/') => {
                if self.cache.state.loaded().is_some() {
                    self.input_mode = InputMode::Search;
                }
            }
            KeyCode::Char('x') => {
                self.cache.query.clear();
                self.cache.refilter();
            }
            _ => {}
        }
    }

    fn handle_merge_map_key(&mut self, key_event: KeyEvent) {
        match key_event.code {
            KeyCode::Up | KeyCode::Char('k') => self.merge_map.select_previous(),
            KeyCode::Down | KeyCode::Char('j') => self.merge_map.select_next(),
            KeyCode::Enter => {
                if self.merge_map.selected_value_mut().is_some() {
                    self.input_mode = InputMode::Edit;
                }
            }
            KeyCode::Char('s') => self.save_merge_map(),
            _ => {}
        }
    }

    fn handle_search_key(&mut self, key_event: KeyEvent) {
        let tab = self.tabs.active();
        let query = match tab {
            Tab::Logs => &mut self.logs.query,
            Tab::Cache => &mut self.cache.query,
            _ => {
                self.input_mode = InputMode::Normal;
                return;
            }
        };
        match key_event.code {
            KeyCode::Enter | KeyCode::Esc => {
                self.input_mode = InputMode::Normal;
                return;
            }
            KeyCode::Backspace => {
                query.pop();
            }
            KeyCode::Char(c) => query.push(c),
            _ => return,
        }
        match tab {
            Tab::Logs => self.logs.refilter(),
            _ => self.cache.refilter(),
        }
    }

    fn handle_edit_key(&mut self, key_event: KeyEvent) {
        let Some(value) = self.merge_map.selected_value_mut() else {
            self.input_mode = InputMode::Normal;
            return;
        };
        match key_event.code {
            KeyCode::Enter | KeyCode::Esc => self.input_mode = InputMode::Normal,
            KeyCode::Backspace => {
                value.pop();
            }
            KeyCode::Char(c) => value.push(c),
            _ => {}
        }
    }

    fn start_page_jump(&mut self) {
        self.page_input.clear();
        self.input_mode = InputMode::PageJump;
    }

    fn handle_page_jump_key(&mut self, key_event: KeyEvent) {
        match key_event.code {
            KeyCode::Char(c) if c.is_ascii_digit() && self.page_input.len() < 6 => {
                self.page_input.push(c)
            }
            KeyCode::Backspace => {
                self.page_input.pop();
            }
            KeyCode::Enter => {
                if let Ok(page) = self.page_input.parse::<usize>() {
                    match self.tabs.active() {
                        Tab::Logs => self.logs.go_to_page(page),
                        Tab::Cache => self.cache.go_to_page(page),
                        _ => {}
                    }
                }
                self.page_input.clear();
                self.input_mode = InputMode::Normal;
            }
            KeyCode::Esc => {
                self.page_input.clear();
                self.input_mode = InputMode::Normal;
            }
            _ => {}
        }
    }

    fn select_tab(&mut self, tab: Tab) {
        let token = self.tabs.select(tab);
        self.start_load(token);
    }

    fn reload(&mut self) {
        let token = self.tabs.reload();
        info!(tab = %token.tab, "reload requested");
        self.start_load(Some(token));
    }

    fn replay(&mut self, index: usize) {
        let Some(payload) = self.logs.entry(index).and_then(|entry| entry.payload.clone()) else {
            return;
        };
        let key = self.logs.row_key(index);
        if !dispatch_replay(
            &self.client,
            &mut self.logs.replays,
            key,
            payload,
            self.tx.clone(),
        ) {
            debug!(row = index, "replay already in flight");
        }
    }

    fn save_merge_map(&mut self) {
        if self.merge_map.save == SaveStatus::Saving {
            return;
        }
        let Some(form) = self.merge_map.state.loaded() else {
            return;
        };
        let map = form.submission();
        self.merge_map.save = SaveStatus::Saving;
        spawn_save_merge_map(
            &self.client,
            map,
            self.merge_map.generation,
            self.tx.clone(),
        );
    }

    fn exit(&mut self) {
        self.exit = true;
    }
}

impl App {
    fn render_ui(&mut self, frame: &mut Frame) {
        let area = frame.area();
        let title = Line::from(" Webhook Console ".bold());

        let health = match self.healthy {
            Some(true) => " ● online ".green(),
            Some(false) => " ● unreachable ".red(),
            None => " ○ checking ".yellow(),
        };

        let detail_open = self.logs.detail.is_some() && self.tabs.active() == Tab::Logs;
        let bottom_line = controls_line(
            self.tabs.active(),
            self.input_mode,
            detail_open,
            &self.page_input,
        );

        #[cfg(feature = "dev")]
        let block = {
            let render_time_ms = self.last_render_duration.as_millis();
            Block::bordered()
                .title(title.centered())
                .title(Line::from(health).right_aligned())
                .title_bottom(bottom_line.centered())
                .title_bottom(Line::from(format!(" {}ms ", render_time_ms)).cyan().right_aligned())
                .border_set(border::THICK)
        };

        #[cfg(not(feature = "dev"))]
        let block = Block::bordered()
            .title(title.centered())
            .title(Line::from(health).right_aligned())
            .title_bottom(bottom_line.centered())
            .border_set(border::THICK);

        let inner_area = block.inner(area);
        frame.render_widget(block, area);

        let chunks = Layout::vertical([Constraint::Length(3), Constraint::Min(0)]).split(inner_area);
        render_tab_bar(
            frame,
            chunks[0],
            self.tabs.active(),
            &self.client.config().base_url,
        );

        let content = chunks[1];
        match self.tabs.active() {
            Tab::Dashboard => render_dashboard(frame, content, &self.dashboard),
            Tab::Logs => {
                render_logs_panel(frame, content, &mut self.logs, self.input_mode);
                if let Some(detail) = self.logs.detail {
                    if let Some(entry) = self.logs.entry(detail.index) {
                        let key = self.logs.row_key(detail.index);
                        render_detail_popup(
                            frame,
                            area,
                            entry,
                            detail.toggles,
                            self.logs.replays.status(key),
                        );
                    }
                }
            }
            Tab::Cache => render_cache_panel(frame, content, &mut self.cache, self.input_mode),
            Tab::MergeMap => {
                render_merge_map_panel(frame, content, &self.merge_map, self.input_mode)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;
    use webhook_console::{ConsoleConfig, LogEntry, SaveEvent};

    fn app() -> App {
        App::new(AdminClient::new(ConsoleConfig::default()))
    }

    fn logs(count: usize) -> Vec<LogEntry> {
        (0..count)
            .map(|i| LogEntry {
                timestamp: format!("2024-01-01T00:{:02}:00Z", i % 60),
                event: "member_signup".to_string(),
                email: None,
                status: "success".to_string(),
                changes: None,
                payload: None,
            })
            .collect()
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key_event(KeyEvent::new(code, KeyModifiers::NONE));
    }

    #[test]
    fn test_stale_load_is_dropped() {
        let mut app = app();
        let stale = app.tabs.select(Tab::Logs).unwrap();
        let current = app.tabs.reload();

        app.apply_load(LoadEvent {
            token: stale,
            payload: LoadPayload::Logs(Ok(logs(3))),
        });
        assert!(app.logs.state.loaded().is_none());

        app.apply_load(LoadEvent {
            token: current,
            payload: LoadPayload::Logs(Ok(logs(2))),
        });
        assert_eq!(app.logs.state.loaded().map(|store| store.len()), Some(2));
        assert_eq!(app.logs.generation, current.generation);
    }

    #[test]
    fn test_save_from_reloaded_form_is_ignored() {
        let mut app = app();
        let map: webhook_console::MergeMap =
            serde_json::from_value(serde_json::json!({"MERGE_FIELDS": {"FNAME": "first"}}))
                .unwrap();
        let first = app.tabs.select(Tab::MergeMap).unwrap();
        app.apply_load(LoadEvent {
            token: first,
            payload: LoadPayload::MergeMap(Ok(map.clone())),
        });
        let second = app.tabs.reload();
        app.apply_load(LoadEvent {
            token: second,
            payload: LoadPayload::MergeMap(Ok(map)),
        });

        app.tx
            .send(ConsoleEvent::MergeMapSaved(SaveEvent {
                generation: first.generation,
                status: SaveStatus::Saved,
            }))
            .unwrap();
        app.drain_events();
        assert_eq!(app.merge_map.save, SaveStatus::Idle);
    }

    #[test]
    fn test_page_keys() {
        let mut app = app();
        let token = app.tabs.select(Tab::Logs).unwrap();
        app.apply_load(LoadEvent {
            token,
            payload: LoadPayload::Logs(Ok(logs(95))),
        });

        press(&mut app, KeyCode::End);
        assert_eq!(app.logs.pagination.page(), 10);
        press(&mut app, KeyCode::Home);
        assert_eq!(app.logs.pagination.page(), 1);

        press(&mut app, KeyCode::Char('g'));
        assert_eq!(app.input_mode, InputMode::PageJump);
        press(&mut app, KeyCode::Char('7'));
        press(&mut app, KeyCode::Char('x'));
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.input_mode, InputMode::Normal);
        assert_eq!(app.logs.pagination.page(), 7);

        press(&mut app, KeyCode::Char('g'));
        press(&mut app, KeyCode::Char('4'));
        press(&mut app, KeyCode::Char('2'));
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.logs.pagination.page(), 10);

        press(&mut app, KeyCode::Char('g'));
        press(&mut app, KeyCode::Char('3'));
        press(&mut app, KeyCode::Esc);
        assert_eq!(app.logs.pagination.page(), 10);
    }
}
