use crate::core::airports::{AIRPORTS, by_code};
use crate::core::fares::{parse_price_usd, under_ceiling};
use crate::core::flight_url::FlightQuery;
use crate::fuzzy::fuzzy_filter;
use crate::store::alerts::{self, FareAlerts};
use crate::store::history::{self, SearchRecord};
use crate::ui::alerts_panel::AlertRow;
use crate::ui::search_panel::SearchView;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::layout::{Constraint, Layout};
use ratatui::prelude::*;
use std::path::{Path, PathBuf};

/// The three top-level views. Exactly one is active at any time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Tab {
    Search,
    Alerts,
    History,
}

impl Tab {
    pub const ALL: [Tab; 3] = [Tab::Search, Tab::Alerts, Tab::History];

    pub fn label(self) -> &'static str {
        match self {
            Tab::Search => "Search",
            Tab::Alerts => "Alerts",
            Tab::History => "History",
        }
    }

    pub fn index(self) -> usize {
        match self {
            Tab::Search => 0,
            Tab::Alerts => 1,
            Tab::History => 2,
        }
    }

    fn next(self) -> Tab {
        Tab::ALL[(self.index() + 1) % Tab::ALL.len()]
    }

    fn prev(self) -> Tab {
        Tab::ALL[(self.index() + Tab::ALL.len() - 1) % Tab::ALL.len()]
    }
}

/// Route-builder steps on the Search tab, in order. Esc walks back one step;
/// Enter commits the current one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SearchStep {
    PickOrigin,
    PickDestination,
    DepartDate,
    ReturnDate,
    Ready,
    AlertCeiling,
}

/// Stages of logging a spotted fare on the History tab: the price first,
/// then an optional carrier name.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FareEntry {
    Price,
    Airline { price_usd: u32 },
}

pub enum Action {
    Continue,
    /// Leave the TUI and open the built search URL in the browser.
    LaunchSearch {
        url: String,
    },
    Quit,
}

pub struct App {
    // Navigation
    pub active_tab: Tab,

    // Persisted state
    pub alerts: FareAlerts,
    pub history: Vec<SearchRecord>,
    pub config_dir: PathBuf,

    // Layout
    visible_height: usize,

    // Search tab: route builder
    pub search_step: SearchStep,
    pub airport_query: String,
    pub airport_filtered_indices: Vec<usize>,
    pub airport_selected_index: usize,
    pub airport_scroll_offset: usize,
    pub origin_code: String,
    pub destination_code: String,
    pub depart_input: String,
    pub return_input: String,
    pub ceiling_input: String,
    pub built_query: Option<FlightQuery>,
    pub search_error: Option<String>,
    pub search_notice: Option<String>,

    // Alerts tab UI state
    pub alert_selected_index: usize,
    pub alert_scroll_offset: usize,

    // History tab UI state
    pub hist_query: String,
    pub hist_filtered_indices: Vec<usize>,
    pub hist_selected_index: usize,
    pub hist_scroll_offset: usize,
    /// `Some` while the user logs a spotted fare for the selected record.
    pub fare_entry: Option<FareEntry>,
    pub fare_input: String,
}

impl App {
    pub fn new(config_dir: &Path) -> Self {
        let alerts = alerts::load_alerts(config_dir).unwrap_or_default();
        let history = history::load_history(config_dir);
        let hist_filtered_indices = history::sorted_indices(&history);

        App {
            active_tab: Tab::Search,

            alerts,
            history,
            config_dir: config_dir.to_path_buf(),

            visible_height: 20,

            search_step: SearchStep::PickOrigin,
            airport_query: String::new(),
            airport_filtered_indices: (0..AIRPORTS.len()).collect(),
            airport_selected_index: 0,
            airport_scroll_offset: 0,
            origin_code: String::new(),
            destination_code: String::new(),
            depart_input: String::new(),
            return_input: String::new(),
            ceiling_input: String::new(),
            built_query: None,
            search_error: None,
            search_notice: None,

            alert_selected_index: 0,
            alert_scroll_offset: 0,

            hist_query: String::new(),
            hist_filtered_indices,
            hist_selected_index: 0,
            hist_scroll_offset: 0,
            fare_entry: None,
            fare_input: String::new(),
        }
    }

    /// Activates `tab`. Idempotent; any tab can be reached from any other.
    pub fn select_tab(&mut self, tab: Tab) {
        self.active_tab = tab;
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                return Action::Quit;
            }
            // With three tabs, one press of Left or Right reaches either
            // other tab, so every transition is a single discrete event.
            KeyCode::Left | KeyCode::BackTab => {
                self.select_tab(self.active_tab.prev());
                return Action::Continue;
            }
            KeyCode::Right | KeyCode::Tab => {
                self.select_tab(self.active_tab.next());
                return Action::Continue;
            }
            _ => {}
        }

        match self.active_tab {
            Tab::Search => self.handle_search_key(key),
            Tab::Alerts => self.handle_alerts_key(key),
            Tab::History => self.handle_history_key(key),
        }
    }

    pub fn render(&mut self, frame: &mut Frame) {
        let area = frame.area();

        let chunks = Layout::vertical([
            Constraint::Length(2), // nav bar
            Constraint::Min(1),    // main content
            Constraint::Length(1), // status bar
        ])
        .split(area);

        let tab_labels: Vec<&str> = Tab::ALL.iter().map(|t| t.label()).collect();
        crate::ui::nav_bar::render_nav_bar(
            frame,
            chunks[0],
            &tab_labels,
            self.active_tab.index(),
        );

        let content = chunks[1];
        match self.active_tab {
            Tab::Search => {
                // Suggestion list sits below three fixed lines
                self.visible_height = (content.height as usize).saturating_sub(3);
                let built_url = self.built_query.as_ref().map(|q| q.url());
                let view = SearchView {
                    step: self.search_step,
                    airport_query: &self.airport_query,
                    suggestions: &self.airport_filtered_indices,
                    selected_index: self.airport_selected_index,
                    scroll_offset: self.airport_scroll_offset,
                    origin_code: &self.origin_code,
                    destination_code: &self.destination_code,
                    depart_input: &self.depart_input,
                    return_input: &self.return_input,
                    ceiling_input: &self.ceiling_input,
                    built_url: built_url.as_deref(),
                    error: self.search_error.as_deref(),
                    notice: self.search_notice.as_deref(),
                };
                crate::ui::search_panel::render_search_panel(frame, content, &view);
            }
            Tab::Alerts => {
                self.visible_height = content.height as usize;
                let rows = self.alert_rows();
                crate::ui::alerts_panel::render_alerts_panel(
                    frame,
                    content,
                    &rows,
                    self.alert_selected_index,
                    self.alert_scroll_offset,
                );
            }
            Tab::History => {
                self.visible_height = (content.height as usize).saturating_sub(1);
                let fare_prompt = self.fare_entry.map(|stage| match stage {
                    FareEntry::Price => ("fare seen (USD)", self.fare_input.as_str()),
                    FareEntry::Airline { .. } => ("airline (optional)", self.fare_input.as_str()),
                });
                crate::ui::history_panel::render_history_panel(
                    frame,
                    content,
                    &self.history,
                    &self.hist_filtered_indices,
                    self.hist_selected_index,
                    self.hist_scroll_offset,
                    &self.hist_query,
                    fare_prompt,
                );
            }
        }

        crate::ui::status_bar::render_status_bar(frame, chunks[2], self.active_tab);
    }

    /// Alerts resolved against the logged fares, in storage order.
    pub fn alert_rows(&self) -> Vec<AlertRow> {
        self.alerts
            .values()
            .map(|alert| {
                let route_key = format!(
                    "{}:{}:{}:{}",
                    alert.origin,
                    alert.destination,
                    alert.depart_date,
                    alert.return_date.as_deref().unwrap_or("-")
                );
                let best_price_usd = history::best_price_for(&self.history, &route_key);
                let triggered = !alert.paused
                    && best_price_usd.is_some_and(|p| under_ceiling(p, alert.ceiling_usd));
                AlertRow {
                    route_label: alert.route_label(),
                    ceiling_usd: alert.ceiling_usd,
                    paused: alert.paused,
                    best_price_usd,
                    triggered,
                }
            })
            .collect()
    }

    // -- Search tab --

    fn handle_search_key(&mut self, key: KeyEvent) -> Action {
        match self.search_step {
            SearchStep::PickOrigin | SearchStep::PickDestination => self.handle_pick_key(key),
            SearchStep::DepartDate | SearchStep::ReturnDate => self.handle_date_key(key),
            SearchStep::Ready => self.handle_ready_key(key),
            SearchStep::AlertCeiling => self.handle_ceiling_key(key),
        }
    }

    fn handle_pick_key(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Esc => {
                if self.search_step == SearchStep::PickDestination {
                    self.reset_airport_picker();
                    self.search_step = SearchStep::PickOrigin;
                    Action::Continue
                } else {
                    Action::Quit
                }
            }
            KeyCode::Enter => {
                if let Some(code) = self.picked_airport_code() {
                    match self.search_step {
                        SearchStep::PickOrigin => {
                            self.origin_code = code;
                            self.search_step = SearchStep::PickDestination;
                        }
                        _ => {
                            self.destination_code = code;
                            self.search_step = SearchStep::DepartDate;
                        }
                    }
                    self.reset_airport_picker();
                    self.search_error = None;
                } else {
                    self.search_error = Some(format!(
                        "No airport matches '{}'; enter a 3-letter IATA code",
                        self.airport_query
                    ));
                }
                Action::Continue
            }
            KeyCode::Up => {
                self.move_airport_selection(-1);
                Action::Continue
            }
            KeyCode::Down => {
                self.move_airport_selection(1);
                Action::Continue
            }
            KeyCode::Char(c) => {
                self.airport_query.push(c);
                self.update_airport_filtered();
                Action::Continue
            }
            KeyCode::Backspace => {
                self.airport_query.pop();
                self.update_airport_filtered();
                Action::Continue
            }
            _ => Action::Continue,
        }
    }

    /// The highlighted suggestion, or the query itself when it is a valid
    /// IATA code absent from the embedded table.
    fn picked_airport_code(&self) -> Option<String> {
        if let Some(&airport_i) = self
            .airport_filtered_indices
            .get(self.airport_selected_index)
        {
            return Some(AIRPORTS[airport_i].code.to_string());
        }
        let q = self.airport_query.trim();
        if let Some(airport) = by_code(q) {
            return Some(airport.code.to_string());
        }
        if q.len() == 3 && q.chars().all(|c| c.is_ascii_alphabetic()) {
            return Some(q.to_ascii_uppercase());
        }
        None
    }

    fn handle_date_key(&mut self, key: KeyEvent) -> Action {
        let is_return = self.search_step == SearchStep::ReturnDate;
        match key.code {
            KeyCode::Esc => {
                self.search_step = if is_return {
                    SearchStep::DepartDate
                } else {
                    SearchStep::PickDestination
                };
                self.search_error = None;
                Action::Continue
            }
            KeyCode::Enter => {
                if is_return {
                    self.try_build_query();
                } else {
                    // Validate the departure date alone before moving on
                    match FlightQuery::new(
                        &self.origin_code,
                        &self.destination_code,
                        &self.depart_input,
                        None,
                    ) {
                        Ok(_) => {
                            self.search_step = SearchStep::ReturnDate;
                            self.search_error = None;
                        }
                        Err(e) => self.search_error = Some(e.to_string()),
                    }
                }
                Action::Continue
            }
            KeyCode::Char(c) if c.is_ascii_digit() || c == '-' => {
                let input = if is_return {
                    &mut self.return_input
                } else {
                    &mut self.depart_input
                };
                if input.len() < 10 {
                    input.push(c);
                }
                Action::Continue
            }
            KeyCode::Backspace => {
                if is_return {
                    self.return_input.pop();
                } else {
                    self.depart_input.pop();
                }
                Action::Continue
            }
            _ => Action::Continue,
        }
    }

    fn try_build_query(&mut self) {
        let return_date = if self.return_input.is_empty() {
            None
        } else {
            Some(self.return_input.as_str())
        };
        match FlightQuery::new(
            &self.origin_code,
            &self.destination_code,
            &self.depart_input,
            return_date,
        ) {
            Ok(query) => {
                self.built_query = Some(query);
                self.search_step = SearchStep::Ready;
                self.search_error = None;
            }
            Err(e) => {
                self.built_query = None;
                self.search_error = Some(e.to_string());
            }
        }
    }

    fn handle_ready_key(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Esc => {
                self.search_step = SearchStep::ReturnDate;
                self.search_notice = None;
                Action::Continue
            }
            KeyCode::Enter => {
                if let Some(query) = &self.built_query {
                    let url = query.url();
                    history::record_search(&mut self.history, query);
                    history::save_history(&self.config_dir, &self.history);
                    self.update_hist_filtered();
                    Action::LaunchSearch { url }
                } else {
                    Action::Continue
                }
            }
            KeyCode::Char('w') => {
                if self.built_query.is_some() {
                    self.ceiling_input.clear();
                    self.search_notice = None;
                    self.search_step = SearchStep::AlertCeiling;
                }
                Action::Continue
            }
            _ => Action::Continue,
        }
    }

    fn handle_ceiling_key(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Esc => {
                self.ceiling_input.clear();
                self.search_step = SearchStep::Ready;
                Action::Continue
            }
            KeyCode::Enter => {
                let Some(query) = self.built_query.clone() else {
                    self.search_step = SearchStep::Ready;
                    return Action::Continue;
                };
                match parse_price_usd(&self.ceiling_input) {
                    Some(ceiling) if ceiling > 0 => {
                        alerts::upsert_alert(&mut self.alerts, &query, ceiling);
                        let _ = alerts::save_alerts(&self.config_dir, &self.alerts);
                        self.search_notice =
                            Some(format!("Watching {} at or under ${ceiling}", query.route_label()));
                        self.search_error = None;
                        self.ceiling_input.clear();
                        self.search_step = SearchStep::Ready;
                    }
                    _ => {
                        self.search_error = Some("Enter a whole USD amount".to_string());
                    }
                }
                Action::Continue
            }
            KeyCode::Char(c) if c.is_ascii_digit() => {
                if self.ceiling_input.len() < 5 {
                    self.ceiling_input.push(c);
                }
                Action::Continue
            }
            KeyCode::Backspace => {
                self.ceiling_input.pop();
                Action::Continue
            }
            _ => Action::Continue,
        }
    }

    // -- Alerts tab --

    fn handle_alerts_key(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Esc => Action::Quit,
            KeyCode::Up => {
                self.move_alert_selection(-1);
                Action::Continue
            }
            KeyCode::Down => {
                self.move_alert_selection(1);
                Action::Continue
            }
            KeyCode::Char(' ') => {
                if let Some((id, _)) = self.alerts.get_index(self.alert_selected_index) {
                    let id = id.clone();
                    alerts::toggle_paused(&mut self.alerts, &id);
                    let _ = alerts::save_alerts(&self.config_dir, &self.alerts);
                }
                Action::Continue
            }
            KeyCode::Delete | KeyCode::Char('d') => {
                if self.alerts.shift_remove_index(self.alert_selected_index).is_some() {
                    let _ = alerts::save_alerts(&self.config_dir, &self.alerts);
                    if self.alert_selected_index >= self.alerts.len() && !self.alerts.is_empty() {
                        self.alert_selected_index = self.alerts.len() - 1;
                    }
                }
                Action::Continue
            }
            KeyCode::Enter => {
                let query = self
                    .alerts
                    .get_index(self.alert_selected_index)
                    .and_then(|(_, alert)| {
                        FlightQuery::new(
                            &alert.origin,
                            &alert.destination,
                            &alert.depart_date,
                            alert.return_date.as_deref(),
                        )
                        .ok()
                    });
                if let Some(query) = query {
                    self.load_query_into_search(query);
                    self.select_tab(Tab::Search);
                }
                Action::Continue
            }
            _ => Action::Continue,
        }
    }

    // -- History tab --

    fn handle_history_key(&mut self, key: KeyEvent) -> Action {
        if let Some(stage) = self.fare_entry {
            return self.handle_fare_entry_key(key, stage);
        }

        match key.code {
            KeyCode::Esc => Action::Quit,
            KeyCode::Up => {
                self.move_hist_selection(-1);
                Action::Continue
            }
            KeyCode::Down => {
                self.move_hist_selection(1);
                Action::Continue
            }
            KeyCode::Char(' ') => {
                if self.selected_history_index().is_some() {
                    self.fare_entry = Some(FareEntry::Price);
                    self.fare_input.clear();
                }
                Action::Continue
            }
            KeyCode::Delete => {
                if let Some(record_i) = self.selected_history_index() {
                    self.history.remove(record_i);
                    history::save_history(&self.config_dir, &self.history);
                    self.update_hist_filtered();
                }
                Action::Continue
            }
            KeyCode::Enter => {
                if let Some(record_i) = self.selected_history_index() {
                    if let Some(query) = parse_route_key(&self.history[record_i].route_key) {
                        self.load_query_into_search(query);
                        self.select_tab(Tab::Search);
                    }
                }
                Action::Continue
            }
            KeyCode::Char(c) => {
                self.hist_query.push(c);
                self.update_hist_filtered();
                Action::Continue
            }
            KeyCode::Backspace => {
                self.hist_query.pop();
                self.update_hist_filtered();
                Action::Continue
            }
            _ => Action::Continue,
        }
    }

    fn handle_fare_entry_key(&mut self, key: KeyEvent, stage: FareEntry) -> Action {
        match key.code {
            KeyCode::Esc => {
                match stage {
                    FareEntry::Price => self.fare_entry = None,
                    // Back out of the airline question, not the whole entry
                    FareEntry::Airline { .. } => self.fare_entry = Some(FareEntry::Price),
                }
                self.fare_input.clear();
                Action::Continue
            }
            KeyCode::Enter => {
                match stage {
                    FareEntry::Price => match parse_price_usd(&self.fare_input) {
                        Some(price_usd) => {
                            self.fare_entry = Some(FareEntry::Airline { price_usd });
                        }
                        None => self.fare_entry = None,
                    },
                    FareEntry::Airline { price_usd } => {
                        if let Some(record_i) = self.selected_history_index() {
                            let route_key = self.history[record_i].route_key.clone();
                            let airline = self.fare_input.trim().to_string();
                            let airline = (!airline.is_empty()).then_some(airline);
                            history::record_price(
                                &mut self.history,
                                &route_key,
                                price_usd,
                                airline.as_deref(),
                            );
                            history::save_history(&self.config_dir, &self.history);
                        }
                        self.fare_entry = None;
                    }
                }
                self.fare_input.clear();
                Action::Continue
            }
            KeyCode::Char(c) => {
                let accepted = match stage {
                    FareEntry::Price => c.is_ascii_digit() && self.fare_input.len() < 5,
                    FareEntry::Airline { .. } => self.fare_input.len() < 24,
                };
                if accepted {
                    self.fare_input.push(c);
                }
                Action::Continue
            }
            KeyCode::Backspace => {
                self.fare_input.pop();
                Action::Continue
            }
            _ => Action::Continue,
        }
    }

    // -- Private helpers --

    fn load_query_into_search(&mut self, query: FlightQuery) {
        self.origin_code = query.origin().to_string();
        self.destination_code = query.destination().to_string();
        self.depart_input = query.depart_date().to_string();
        self.return_input = query.return_date().unwrap_or("").to_string();
        self.built_query = Some(query);
        self.search_step = SearchStep::Ready;
        self.search_error = None;
        self.search_notice = None;
    }

    fn reset_airport_picker(&mut self) {
        self.airport_query.clear();
        self.airport_filtered_indices = (0..AIRPORTS.len()).collect();
        self.airport_selected_index = 0;
        self.airport_scroll_offset = 0;
    }

    fn update_airport_filtered(&mut self) {
        self.airport_filtered_indices =
            fuzzy_filter(AIRPORTS, &self.airport_query, |a| a.search_label());
        self.airport_selected_index = 0;
        self.airport_scroll_offset = 0;
    }

    fn update_hist_filtered(&mut self) {
        let ordered = history::sorted_indices(&self.history);
        if self.hist_query.is_empty() {
            self.hist_filtered_indices = ordered;
        } else {
            let matched = fuzzy_filter(&self.history, &self.hist_query, |r| {
                r.route_label.clone()
            });
            // Keep relevance order from the matcher
            self.hist_filtered_indices = matched;
        }
        self.hist_selected_index = 0;
        self.hist_scroll_offset = 0;
    }

    fn selected_history_index(&self) -> Option<usize> {
        self.hist_filtered_indices
            .get(self.hist_selected_index)
            .copied()
    }

    fn move_airport_selection(&mut self, delta: i32) {
        let len = self.airport_filtered_indices.len();
        if len == 0 {
            return;
        }
        self.airport_selected_index = wrap_index(self.airport_selected_index, delta, len);
        ensure_scroll(
            &mut self.airport_scroll_offset,
            self.airport_selected_index,
            self.visible_height,
        );
    }

    fn move_alert_selection(&mut self, delta: i32) {
        let len = self.alerts.len();
        if len == 0 {
            return;
        }
        self.alert_selected_index = wrap_index(self.alert_selected_index, delta, len);
        ensure_scroll(
            &mut self.alert_scroll_offset,
            self.alert_selected_index,
            self.visible_height,
        );
    }

    fn move_hist_selection(&mut self, delta: i32) {
        let len = self.hist_filtered_indices.len();
        if len == 0 {
            return;
        }
        self.hist_selected_index = wrap_index(self.hist_selected_index, delta, len);
        ensure_scroll(
            &mut self.hist_scroll_offset,
            self.hist_selected_index,
            self.visible_height,
        );
    }
}

/// Rebuilds a `FlightQuery` from a stored route key
/// (`ORIGIN:DEST:DEPART:RETURN`, `-` meaning one-way).
fn parse_route_key(route_key: &str) -> Option<FlightQuery> {
    let parts: Vec<&str> = route_key.split(':').collect();
    let [origin, destination, depart, ret] = parts.as_slice() else {
        return None;
    };
    let return_date = (*ret != "-").then_some(*ret);
    FlightQuery::new(origin, destination, depart, return_date).ok()
}

/// Wrap index with delta, cycling around `len`.
fn wrap_index(current: usize, delta: i32, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    let new = current as i32 + delta;
    if new < 0 {
        len - 1
    } else if new >= len as i32 {
        0
    } else {
        new as usize
    }
}

/// Adjust scroll_offset so that `selected` stays visible within the given height.
fn ensure_scroll(scroll_offset: &mut usize, selected: usize, visible_height: usize) {
    if selected < *scroll_offset {
        *scroll_offset = selected;
    }
    let height = visible_height.max(1);
    if selected >= *scroll_offset + height {
        *scroll_offset = selected.saturating_sub(height - 1);
    }
}
