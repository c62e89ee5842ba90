//! Application state management for Skyglance
//!
//! This module holds the single weather snapshot on display, the city search
//! box, and the keyboard handling that drives both. Network work is handed to
//! the [`Fetcher`]; its completions come back through [`App::handle_message`].

use chrono::{DateTime, Local};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::cli::StartupConfig;
use crate::data::{
    default_locations, CityWeather, GeocodingClient, Location, LocationQuery, WeatherClient,
    WeatherError,
};
use crate::fetch::{FetchMessage, Fetcher};
use crate::theme::{Theme, ThemeStore};
use crate::ui::icons::IconSlot;

/// Where a city search stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchStatus {
    /// Showing results (or the default cities)
    Idle,
    /// Waiting for the geocoder
    Searching,
    /// The geocoder found nothing
    NoResults,
    /// The request failed
    Failed,
}

impl SearchStatus {
    /// Message shown in place of the result list, if any
    pub fn message(&self) -> Option<&'static str> {
        match self {
            SearchStatus::Idle => None,
            SearchStatus::Searching => Some("Searching..."),
            SearchStatus::NoResults => Some("No cities found."),
            SearchStatus::Failed => Some("Search failed. Please try again."),
        }
    }
}

/// State of the city search modal
#[derive(Debug, Clone)]
pub struct SearchState {
    /// Whether the modal is open
    pub visible: bool,
    /// Text typed so far
    pub query: String,
    /// Candidates on display; the default cities until a search succeeds
    pub results: Vec<Location>,
    /// Highlighted row in `results`
    pub selected: usize,
    pub status: SearchStatus,
    /// Query edited since it was last submitted
    dirty: bool,
}

impl Default for SearchState {
    fn default() -> Self {
        Self {
            visible: false,
            query: String::new(),
            results: default_locations(),
            selected: 0,
            status: SearchStatus::Idle,
            dirty: false,
        }
    }
}

impl SearchState {
    /// A freshly opened search showing the default cities
    pub fn opened() -> Self {
        Self {
            visible: true,
            ..Self::default()
        }
    }

    /// The highlighted result, when results are on display
    pub fn selected_location(&self) -> Option<&Location> {
        match self.status {
            SearchStatus::Idle => self.results.get(self.selected),
            _ => None,
        }
    }

    fn move_up(&mut self) {
        let count = self.results.len();
        if count > 0 {
            self.selected = if self.selected == 0 {
                count - 1
            } else {
                self.selected - 1
            };
        }
    }

    fn move_down(&mut self) {
        let count = self.results.len();
        if count > 0 {
            self.selected = (self.selected + 1) % count;
        }
    }
}

/// Main application struct managing state and data
pub struct App {
    /// City the current (or pending) forecast belongs to
    pub location: Location,
    /// Last successfully loaded snapshot
    pub weather: Option<CityWeather>,
    /// A forecast request is in flight
    pub loading: bool,
    /// Message for the full-screen error view
    pub error: Option<String>,
    /// When `weather` was last replaced
    pub last_updated: Option<DateTime<Local>>,
    pub search: SearchState,
    /// Flag to show help overlay
    pub show_help: bool,
    /// Flag indicating the application should quit
    pub should_quit: bool,
    /// Scroll offset of the daily forecast list
    pub daily_scroll: u16,
    /// Current-conditions icon
    pub icon: IconSlot,
    themes: ThemeStore,
    fetcher: Fetcher,
}

impl App {
    /// Creates a new App talking to the public Open-Meteo endpoints
    pub fn new(config: StartupConfig) -> Self {
        Self::with_clients(config, WeatherClient::new(), GeocodingClient::new())
    }

    /// Creates a new App with custom clients (mock servers in tests)
    pub fn with_clients(
        config: StartupConfig,
        weather_client: WeatherClient,
        geocoding_client: GeocodingClient,
    ) -> Self {
        Self {
            location: config.location,
            weather: None,
            loading: false,
            error: None,
            last_updated: None,
            search: SearchState::default(),
            show_help: false,
            should_quit: false,
            daily_scroll: 0,
            icon: IconSlot::new(),
            themes: ThemeStore::new(config.dark_theme),
            fetcher: Fetcher::new(weather_client, geocoding_client),
        }
    }

    /// Current theme
    pub fn theme(&self) -> Theme {
        self.themes.snapshot()
    }

    /// The theme store, for subscribing to toggles
    pub fn themes(&self) -> &ThemeStore {
        &self.themes
    }

    /// Starts loading the forecast for `location`, superseding any fetch in
    /// flight. The previous snapshot stays on screen until the new one lands.
    pub fn load_weather(&mut self, location: Location) {
        self.location = location.clone();
        self.loading = true;
        self.error = None;
        self.fetcher.spawn_forecast(location);
    }

    /// Reloads the forecast for the current location
    pub fn refresh(&mut self) {
        self.load_weather(self.location.clone());
    }

    /// Applies every completed request. Returns whether anything arrived.
    pub fn poll_messages(&mut self) -> bool {
        let mut received = false;
        while let Some(message) = self.fetcher.try_recv() {
            self.handle_message(message);
            received = true;
        }
        received
    }

    /// Applies one completed request
    ///
    /// Answers to superseded requests are dropped without touching any state.
    pub fn handle_message(&mut self, message: FetchMessage) {
        match message {
            FetchMessage::Forecast {
                generation,
                location,
                outcome,
            } => {
                if matches!(outcome, Err(WeatherError::Aborted)) {
                    tracing::debug!(generation, "forecast request aborted");
                    return;
                }
                if !self.fetcher.accept_forecast(generation) {
                    tracing::debug!(generation, city = %location.name, "discarding stale forecast");
                    return;
                }
                self.apply_forecast(location, outcome);
            }
            FetchMessage::Search {
                generation,
                query,
                outcome,
            } => {
                if !self.fetcher.accept_search(generation) {
                    tracing::debug!(generation, query = %query, "discarding stale search results");
                    return;
                }
                match outcome {
                    Ok(results) => {
                        tracing::info!(query = %query, count = results.len(), "search finished");
                        self.search.status = if results.is_empty() {
                            SearchStatus::NoResults
                        } else {
                            SearchStatus::Idle
                        };
                        self.search.results = results;
                        self.search.selected = 0;
                    }
                    Err(err) => {
                        tracing::warn!(query = %query, error = %err, "search failed");
                        self.search.status = SearchStatus::Failed;
                    }
                }
            }
        }
    }

    fn apply_forecast(&mut self, location: Location, outcome: Result<CityWeather, WeatherError>) {
        self.loading = false;
        match outcome {
            Ok(weather) => {
                tracing::info!(city = %location.name, temp = weather.temp, "forecast loaded");
                self.icon.show(&weather.icon);
                self.daily_scroll = self
                    .daily_scroll
                    .min(weather.daily.len().saturating_sub(1) as u16);
                self.weather = Some(weather);
                self.error = None;
                self.last_updated = Some(Local::now());
            }
            Err(err) if self.weather.is_some() => {
                tracing::warn!(city = %location.name, error = %err, "refresh failed, keeping previous forecast");
            }
            Err(err) => {
                tracing::error!(city = %location.name, error = %err, "forecast failed");
                self.error = Some(err.to_string());
            }
        }
    }

    /// Opens the search modal showing the default cities
    pub fn open_search(&mut self) {
        self.search = SearchState::opened();
    }

    /// Closes the search modal and forgets its state
    pub fn close_search(&mut self) {
        self.fetcher.cancel_search();
        self.search = SearchState::default();
    }

    /// Runs the query in the search box
    ///
    /// Blank input shows the default cities without touching the network.
    pub fn submit_search(&mut self) {
        self.search.dirty = false;
        self.search.selected = 0;
        match LocationQuery::from_input(&self.search.query) {
            LocationQuery::Defaults => {
                self.fetcher.cancel_search();
                self.search.results = default_locations();
                self.search.status = SearchStatus::Idle;
            }
            LocationQuery::Remote(query) => {
                self.search.status = SearchStatus::Searching;
                self.fetcher.spawn_search(query);
            }
        }
    }

    /// Picks a city: closes the search and loads its forecast
    pub fn select_location(&mut self, location: Location) {
        tracing::info!(city = %location.name, "city selected");
        self.close_search();
        self.load_weather(location);
    }

    /// Flips the theme
    pub fn toggle_theme(&mut self) -> Theme {
        self.themes.toggle()
    }

    /// Handles keyboard input and updates state accordingly
    ///
    /// # Key Bindings
    /// - `q` or `Esc`: Quit (or close the help overlay)
    /// - `s` or `/`: Open city search
    /// - `r`: Refresh the forecast
    /// - `t`: Toggle dark/light theme
    /// - `j`/`k`: Scroll the daily forecast
    /// - `?`: Toggle help
    ///
    /// While the search modal is open, keys edit the query; `Enter` searches,
    /// or picks the highlighted city when the query has not changed.
    pub fn handle_key(&mut self, key_event: KeyEvent) {
        if key_event.modifiers.contains(KeyModifiers::CONTROL)
            && key_event.code == KeyCode::Char('c')
        {
            self.should_quit = true;
            return;
        }

        if self.show_help {
            match key_event.code {
                KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q') => {
                    self.show_help = false;
                }
                _ => {}
            }
            return;
        }

        if self.search.visible {
            self.handle_search_key(key_event);
            return;
        }

        match key_event.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Char('s') | KeyCode::Char('/') => {
                self.open_search();
            }
            KeyCode::Char('r') => {
                self.refresh();
            }
            KeyCode::Char('t') => {
                self.toggle_theme();
            }
            KeyCode::Char('j') | KeyCode::Down => {
                self.scroll_down();
            }
            KeyCode::Char('k') | KeyCode::Up => {
                self.scroll_up();
            }
            KeyCode::Char('?') => {
                self.show_help = true;
            }
            _ => {}
        }
    }

    fn handle_search_key(&mut self, key_event: KeyEvent) {
        match key_event.code {
            KeyCode::Esc => {
                self.close_search();
            }
            KeyCode::Enter => {
                if self.search.dirty {
                    self.submit_search();
                } else if let Some(location) = self.search.selected_location().cloned() {
                    self.select_location(location);
                }
            }
            KeyCode::Up => {
                self.search.move_up();
            }
            KeyCode::Down => {
                self.search.move_down();
            }
            KeyCode::Backspace => {
                if self.search.query.pop().is_some() {
                    self.search.dirty = true;
                }
            }
            KeyCode::Char(c) => {
                self.search.query.push(c);
                self.search.dirty = true;
            }
            _ => {}
        }
    }

    /// Scrolls the daily list up, stopping at 0
    pub fn scroll_up(&mut self) {
        self.daily_scroll = self.daily_scroll.saturating_sub(1);
    }

    /// Scrolls the daily list down, stopping at the last day
    pub fn scroll_down(&mut self) {
        let max = self
            .weather
            .as_ref()
            .map(|weather| weather.daily.len().saturating_sub(1))
            .unwrap_or(0) as u16;
        if self.daily_scroll < max {
            self.daily_scroll += 1;
        }
    }

    /// Waits for the next completed request and applies it
    #[cfg(test)]
    pub(crate) async fn next_message(&mut self) {
        let message = tokio::time::timeout(std::time::Duration::from_secs(5), self.fetcher.recv())
            .await
            .expect("timed out waiting for a fetch message")
            .expect("fetch channel closed");
        self.handle_message(message);
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(StartupConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::weather::fixtures::VALID_RESPONSE;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use std::time::Duration;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    /// Helper to create a KeyEvent for testing
    fn key_event(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            app.handle_key(key_event(KeyCode::Char(c)));
        }
    }

    fn app_for(server: &MockServer) -> App {
        App::with_clients(
            StartupConfig::default(),
            WeatherClient::new().with_base_url(format!("{}/v1/forecast", server.uri())),
            GeocodingClient::new().with_base_url(format!("{}/v1/search", server.uri())),
        )
    }

    async fn mount_forecast(server: &MockServer, template: ResponseTemplate) {
        Mock::given(method("GET"))
            .and(path("/v1/forecast"))
            .respond_with(template)
            .mount(server)
            .await;
    }

    fn offline_app() -> App {
        App::with_clients(
            StartupConfig::default(),
            WeatherClient::new().with_base_url("http://127.0.0.1:9/v1/forecast"),
            GeocodingClient::new().with_base_url("http://127.0.0.1:9/v1/search"),
        )
    }

    // ========================================================================
    // Key handling
    // ========================================================================

    #[test]
    fn test_initial_state() {
        let app = offline_app();
        assert_eq!(app.location.name, "Kraków");
        assert!(app.weather.is_none());
        assert!(!app.loading);
        assert!(app.error.is_none());
        assert!(!app.search.visible);
        assert!(app.theme().is_dark);
    }

    #[test]
    fn test_q_quits() {
        let mut app = offline_app();
        app.handle_key(key_event(KeyCode::Char('q')));
        assert!(app.should_quit);
    }

    #[test]
    fn test_ctrl_c_quits_from_search() {
        let mut app = offline_app();
        app.handle_key(key_event(KeyCode::Char('s')));
        app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app.should_quit);
    }

    #[test]
    fn test_help_toggle_intercepts_keys() {
        let mut app = offline_app();
        app.handle_key(key_event(KeyCode::Char('?')));
        assert!(app.show_help);

        app.handle_key(key_event(KeyCode::Char('t')));
        assert!(app.theme().is_dark, "keys are ignored while help is shown");

        app.handle_key(key_event(KeyCode::Char('q')));
        assert!(!app.show_help);
        assert!(!app.should_quit);
    }

    #[test]
    fn test_t_toggles_theme() {
        let mut app = offline_app();
        let mut receiver = app.themes().subscribe();

        app.handle_key(key_event(KeyCode::Char('t')));
        assert!(!app.theme().is_dark);
        assert!(receiver.has_changed().unwrap());
        assert!(!receiver.borrow_and_update().is_dark);
    }

    #[test]
    fn test_s_and_slash_open_search_with_defaults() {
        for key in ['s', '/'] {
            let mut app = offline_app();
            app.handle_key(key_event(KeyCode::Char(key)));
            assert!(app.search.visible);
            assert!(app.search.query.is_empty());
            assert_eq!(app.search.results.len(), 5);
            assert_eq!(app.search.status, SearchStatus::Idle);
        }
    }

    #[test]
    fn test_typing_in_search_does_not_trigger_shortcuts() {
        let mut app = offline_app();
        app.handle_key(key_event(KeyCode::Char('s')));
        type_text(&mut app, "quest");

        assert_eq!(app.search.query, "quest");
        assert!(!app.should_quit);
        assert!(app.theme().is_dark);

        app.handle_key(key_event(KeyCode::Backspace));
        assert_eq!(app.search.query, "ques");
    }

    #[test]
    fn test_search_navigation_wraps() {
        let mut app = offline_app();
        app.handle_key(key_event(KeyCode::Char('s')));

        app.handle_key(key_event(KeyCode::Up));
        assert_eq!(app.search.selected, 4);
        app.handle_key(key_event(KeyCode::Down));
        assert_eq!(app.search.selected, 0);
        app.handle_key(key_event(KeyCode::Down));
        assert_eq!(app.search.selected, 1);
    }

    #[test]
    fn test_esc_closes_search_and_resets() {
        let mut app = offline_app();
        app.handle_key(key_event(KeyCode::Char('s')));
        type_text(&mut app, "Ber");
        app.handle_key(key_event(KeyCode::Esc));

        assert!(!app.search.visible);
        assert!(app.search.query.is_empty());
        assert!(!app.should_quit);
    }

    #[test]
    fn test_blank_search_restores_defaults_synchronously() {
        let mut app = offline_app();
        app.handle_key(key_event(KeyCode::Char('s')));
        app.search.results.clear();
        app.search.status = SearchStatus::NoResults;
        type_text(&mut app, "   ");

        app.handle_key(key_event(KeyCode::Enter));

        assert_eq!(app.search.status, SearchStatus::Idle);
        assert_eq!(app.search.results, default_locations());
        assert!(!app.fetcher.search_pending());
    }

    #[test]
    fn test_scroll_is_bounded_without_weather() {
        let mut app = offline_app();
        app.handle_key(key_event(KeyCode::Char('j')));
        assert_eq!(app.daily_scroll, 0);
        app.handle_key(key_event(KeyCode::Char('k')));
        assert_eq!(app.daily_scroll, 0);
    }

    #[test]
    fn test_search_status_messages() {
        assert_eq!(SearchStatus::Idle.message(), None);
        assert_eq!(SearchStatus::NoResults.message(), Some("No cities found."));
        assert_eq!(
            SearchStatus::Failed.message(),
            Some("Search failed. Please try again.")
        );
    }

    // ========================================================================
    // Fetch orchestration
    // ========================================================================

    #[tokio::test]
    async fn test_load_weather_success() {
        let server = MockServer::start().await;
        mount_forecast(&server, ResponseTemplate::new(200).set_body_string(VALID_RESPONSE)).await;

        let mut app = app_for(&server);
        app.refresh();
        assert!(app.loading);

        app.next_message().await;

        assert!(!app.loading);
        assert!(app.error.is_none());
        assert!(app.last_updated.is_some());
        let weather = app.weather.as_ref().expect("weather should be loaded");
        assert_eq!(weather.city, "Kraków");
        assert_eq!(weather.condition, "Partly Cloudy");
        assert_eq!(app.icon.glyph(), "⛅");
    }

    #[tokio::test]
    async fn test_load_failure_without_snapshot_shows_error() {
        let server = MockServer::start().await;
        mount_forecast(&server, ResponseTemplate::new(500)).await;

        let mut app = app_for(&server);
        app.refresh();
        app.next_message().await;

        assert!(!app.loading);
        assert!(app.weather.is_none());
        assert_eq!(app.error.as_deref(), Some("Weather fetch failed: 500"));
    }

    #[tokio::test]
    async fn test_refresh_failure_keeps_previous_snapshot() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v1/forecast"))
            .respond_with(ResponseTemplate::new(200).set_body_string(VALID_RESPONSE))
            .up_to_n_times(1)
            .mount(&server)
            .await;
        mount_forecast(&server, ResponseTemplate::new(503)).await;

        let mut app = app_for(&server);
        app.refresh();
        app.next_message().await;
        let snapshot = app.weather.clone();
        assert!(snapshot.is_some());

        app.handle_key(key_event(KeyCode::Char('r')));
        app.next_message().await;

        assert_eq!(app.weather, snapshot);
        assert!(app.error.is_none());
        assert!(!app.loading);
    }

    #[tokio::test]
    async fn test_superseded_fetch_leaves_state_unchanged() {
        let server = MockServer::start().await;
        mount_forecast(
            &server,
            ResponseTemplate::new(500).set_delay(Duration::from_millis(100)),
        )
        .await;

        let mut app = app_for(&server);
        app.refresh();
        let warsaw = crate::data::find_default("Warszawa").expect("default city");
        app.load_weather(warsaw);

        // The aborted first request reports back, then the second one
        app.next_message().await;
        assert!(app.error.is_none(), "aborted fetch must not surface");
        assert!(app.loading);

        app.next_message().await;
        assert_eq!(app.location.name, "Warszawa");
        assert!(app.error.is_some());
    }

    #[tokio::test]
    async fn test_stale_forecast_message_is_discarded() {
        let server = MockServer::start().await;
        let mut app = app_for(&server);
        let stale = app.fetcher.spawn_forecast(app.location.clone());
        app.load_weather(app.location.clone());

        app.handle_message(FetchMessage::Forecast {
            generation: stale,
            location: app.location.clone(),
            outcome: Err(WeatherError::WeatherFetchFailed(500)),
        });

        assert!(app.error.is_none());
        assert!(app.weather.is_none());
        assert!(app.loading);
    }

    #[tokio::test]
    async fn test_search_then_select() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v1/search"))
            .and(query_param("name", "Oslo"))
            .respond_with(ResponseTemplate::new(200).set_body_string(
                r#"{"results": [{"name": "Oslo", "latitude": 59.91, "longitude": 10.75, "country": "Norway"}]}"#,
            ))
            .expect(1)
            .mount(&server)
            .await;
        mount_forecast(&server, ResponseTemplate::new(200).set_body_string(VALID_RESPONSE)).await;

        let mut app = app_for(&server);
        app.handle_key(key_event(KeyCode::Char('s')));
        type_text(&mut app, " Oslo ");
        app.handle_key(key_event(KeyCode::Enter));
        assert_eq!(app.search.status, SearchStatus::Searching);

        app.next_message().await;
        assert_eq!(app.search.status, SearchStatus::Idle);
        assert_eq!(app.search.results[0].label(), "Oslo, Norway");

        // Unchanged query: Enter picks the highlighted city
        app.handle_key(key_event(KeyCode::Enter));
        assert!(!app.search.visible);
        assert_eq!(app.location.name, "Oslo");
        assert!(app.loading);

        app.next_message().await;
        assert_eq!(app.weather.as_ref().map(|w| w.city.as_str()), Some("Oslo"));
    }

    #[tokio::test]
    async fn test_search_with_no_results() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v1/search"))
            .respond_with(ResponseTemplate::new(200).set_body_string("{}"))
            .mount(&server)
            .await;

        let mut app = app_for(&server);
        app.open_search();
        type_text(&mut app, "Qwxyzzy");
        app.submit_search();
        app.next_message().await;

        assert_eq!(app.search.status, SearchStatus::NoResults);
        assert!(app.search.selected_location().is_none());

        // Enter without editing does nothing
        app.handle_key(key_event(KeyCode::Enter));
        assert!(app.search.visible);
    }

    #[tokio::test]
    async fn test_search_failure_stays_in_modal() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v1/search"))
            .respond_with(ResponseTemplate::new(502))
            .mount(&server)
            .await;

        let mut app = app_for(&server);
        app.open_search();
        type_text(&mut app, "Berlin");
        app.submit_search();
        app.next_message().await;

        assert_eq!(app.search.status, SearchStatus::Failed);
        assert!(app.error.is_none(), "search errors never reach the main view");
    }

    #[tokio::test]
    async fn test_blank_search_makes_no_request() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v1/search"))
            .respond_with(ResponseTemplate::new(200).set_body_string("{}"))
            .expect(0)
            .mount(&server)
            .await;

        let mut app = app_for(&server);
        app.open_search();
        app.submit_search();
        tokio::time::sleep(Duration::from_millis(50)).await;

        assert!(!app.poll_messages());
        assert_eq!(app.search.results.len(), 5);
    }

    #[tokio::test]
    async fn test_selecting_default_city_loads_it() {
        let server = MockServer::start().await;
        mount_forecast(&server, ResponseTemplate::new(200).set_body_string(VALID_RESPONSE)).await;

        let mut app = app_for(&server);
        app.handle_key(key_event(KeyCode::Char('s')));
        app.handle_key(key_event(KeyCode::Down));
        app.handle_key(key_event(KeyCode::Enter));

        assert_eq!(app.location.name, "Warszawa");
        assert!(app.loading);
        app.next_message().await;
        assert_eq!(app.weather.as_ref().map(|w| w.city.as_str()), Some("Warszawa"));
    }

    #[tokio::test]
    async fn test_scroll_bounded_by_daily_entries() {
        let server = MockServer::start().await;
        mount_forecast(&server, ResponseTemplate::new(200).set_body_string(VALID_RESPONSE)).await;

        let mut app = app_for(&server);
        app.refresh();
        app.next_message().await;

        // The fixture has two days
        for _ in 0..5 {
            app.handle_key(key_event(KeyCode::Char('j')));
        }
        assert_eq!(app.daily_scroll, 1);
        app.handle_key(key_event(KeyCode::Char('k')));
        assert_eq!(app.daily_scroll, 0);
    }
}
