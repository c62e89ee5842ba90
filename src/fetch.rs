//! Background forecast and city-search requests
//!
//! Requests run as tokio tasks and report back over an mpsc channel that the
//! event loop drains without blocking. Each kind of request has its own
//! [`FetchTracker`]: starting a new request aborts the one in flight and
//! bumps a generation counter, so a late answer to an older request can be
//! recognised and dropped.

use futures::future::{AbortHandle, AbortRegistration, Abortable, Aborted};
use tokio::sync::mpsc;

use crate::data::{CityWeather, GeocodingClient, Location, SearchError, WeatherClient, WeatherError};

/// Capacity of the completion channel
const CHANNEL_CAPACITY: usize = 32;

/// Generation counter plus the abort handle of the request in flight
#[derive(Debug, Default)]
pub struct FetchTracker {
    generation: u64,
    in_flight: Option<AbortHandle>,
}

impl FetchTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a new request, superseding the previous one
    ///
    /// Aborts the in-flight request (if any) before handing out the new
    /// generation.
    ///
    /// # Returns
    /// The generation of the new request and the registration to wrap its
    /// future with
    pub fn begin(&mut self) -> (u64, AbortRegistration) {
        if let Some(previous) = self.in_flight.take() {
            previous.abort();
            tracing::debug!(generation = self.generation, "superseded in-flight request");
        }

        self.generation += 1;
        let (handle, registration) = AbortHandle::new_pair();
        self.in_flight = Some(handle);
        (self.generation, registration)
    }

    /// True if `generation` belongs to the most recently started request
    pub fn is_current(&self, generation: u64) -> bool {
        generation == self.generation
    }

    /// Marks `generation` as finished. Returns whether it was current.
    pub fn complete(&mut self, generation: u64) -> bool {
        let current = self.is_current(generation);
        if current {
            self.in_flight = None;
        }
        current
    }

    /// Aborts the request in flight and makes any late answer stale
    pub fn cancel(&mut self) {
        if let Some(previous) = self.in_flight.take() {
            previous.abort();
        }
        self.generation += 1;
    }

    /// Whether the current request has not reported back yet
    pub fn is_pending(&self) -> bool {
        self.in_flight.is_some()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }
}

/// Completion of a background request
#[derive(Debug)]
pub enum FetchMessage {
    /// A forecast request finished (or was aborted)
    Forecast {
        generation: u64,
        location: Location,
        outcome: Result<CityWeather, WeatherError>,
    },
    /// A city search finished
    Search {
        generation: u64,
        query: String,
        outcome: Result<Vec<Location>, SearchError>,
    },
}

/// Spawns requests and collects their completions
pub struct Fetcher {
    sender: mpsc::Sender<FetchMessage>,
    receiver: mpsc::Receiver<FetchMessage>,
    weather: WeatherClient,
    geocoding: GeocodingClient,
    forecasts: FetchTracker,
    searches: FetchTracker,
}

impl Fetcher {
    /// Creates a fetcher around the given API clients
    pub fn new(weather: WeatherClient, geocoding: GeocodingClient) -> Self {
        let (sender, receiver) = mpsc::channel(CHANNEL_CAPACITY);
        Self {
            sender,
            receiver,
            weather,
            geocoding,
            forecasts: FetchTracker::new(),
            searches: FetchTracker::new(),
        }
    }

    /// Fetches and normalizes the forecast for `location` in the background
    ///
    /// Must be called from within a tokio runtime.
    ///
    /// # Returns
    /// The generation assigned to this request
    pub fn spawn_forecast(&mut self, location: Location) -> u64 {
        let (generation, registration) = self.forecasts.begin();
        let client = self.weather.clone();
        let sender = self.sender.clone();

        tracing::info!(generation, city = %location.name, "fetching forecast");
        tokio::spawn(async move {
            let request = Abortable::new(client.fetch_city_weather(&location), registration);
            let outcome = match request.await {
                Ok(result) => result,
                Err(Aborted) => Err(WeatherError::Aborted),
            };
            let _ = sender
                .send(FetchMessage::Forecast {
                    generation,
                    location,
                    outcome,
                })
                .await;
        });

        generation
    }

    /// Searches the geocoder for `query` in the background
    ///
    /// Aborted searches report nothing; only the newest search answers.
    pub fn spawn_search(&mut self, query: String) -> u64 {
        let (generation, registration) = self.searches.begin();
        let client = self.geocoding.clone();
        let sender = self.sender.clone();

        tracing::info!(generation, query = %query, "searching cities");
        tokio::spawn(async move {
            let request = Abortable::new(client.search(&query), registration);
            let Ok(outcome) = request.await else {
                return;
            };
            let _ = sender
                .send(FetchMessage::Search {
                    generation,
                    query,
                    outcome,
                })
                .await;
        });

        generation
    }

    /// Stops waiting for the current search, e.g. when the search box closes
    pub fn cancel_search(&mut self) {
        self.searches.cancel();
    }

    /// Returns the next completion without blocking
    pub fn try_recv(&mut self) -> Option<FetchMessage> {
        self.receiver.try_recv().ok()
    }

    /// Waits for the next completion
    pub async fn recv(&mut self) -> Option<FetchMessage> {
        self.receiver.recv().await
    }

    /// Whether a forecast message should be applied, consuming its slot
    pub fn accept_forecast(&mut self, generation: u64) -> bool {
        self.forecasts.complete(generation)
    }

    /// Whether a search message should be applied, consuming its slot
    pub fn accept_search(&mut self, generation: u64) -> bool {
        self.searches.complete(generation)
    }

    /// Whether the newest forecast request is still outstanding
    pub fn forecast_pending(&self) -> bool {
        self.forecasts.is_pending()
    }

    /// Whether the newest search is still outstanding
    pub fn search_pending(&self) -> bool {
        self.searches.is_pending()
    }
}
