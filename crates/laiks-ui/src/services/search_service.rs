//! Search backend: debounced place-name lookups.
//!
//! Each keystroke aborts the pending lookup and schedules a new one after the
//! debounce delay. Lookups report back over a channel tagged with the input
//! generation that started them; anything older than the latest input is
//! ignored.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use laiks_weather::{GeoResult, WeatherProvider};

use crate::error_mapping::IntoAppError;
use crate::router::Route;

/// What the search overlay is showing
#[derive(Debug, Clone, PartialEq, Default)]
pub enum SearchState {
    #[default]
    Idle,
    /// Waiting out the debounce delay
    Typing(String),
    Searching(String),
    Results(Vec<GeoResult>),
    /// The lookup succeeded with no matches
    Empty,
    Failed(String),
}

impl SearchState {
    /// True while a lookup is scheduled or in flight
    pub fn is_pending(&self) -> bool {
        matches!(self, SearchState::Typing(_) | SearchState::Searching(_))
    }
}

#[derive(Debug)]
enum SearchEvent {
    Started {
        generation: u64,
        query: String,
    },
    Finished {
        generation: u64,
        result: Result<Vec<GeoResult>, String>,
    },
}

impl SearchEvent {
    fn generation(&self) -> u64 {
        match self {
            SearchEvent::Started { generation, .. } | SearchEvent::Finished { generation, .. } => *generation,
        }
    }
}

pub struct SearchController {
    provider: Arc<WeatherProvider>,
    debounce: Duration,
    state: SearchState,
    overlay_open: bool,
    generation: u64,
    pending: Option<JoinHandle<()>>,
    tx: mpsc::UnboundedSender<SearchEvent>,
    rx: mpsc::UnboundedReceiver<SearchEvent>,
}

impl SearchController {
    pub fn new(provider: Arc<WeatherProvider>, debounce: Duration) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            provider,
            debounce,
            state: SearchState::Idle,
            overlay_open: false,
            generation: 0,
            pending: None,
            tx,
            rx,
        }
    }

    pub fn state(&self) -> &SearchState {
        &self.state
    }

    /// Current matches; empty unless the state is `Results`
    pub fn results(&self) -> &[GeoResult] {
        match &self.state {
            SearchState::Results(list) => list,
            _ => &[],
        }
    }

    pub fn is_overlay_open(&self) -> bool {
        self.overlay_open
    }

    pub fn toggle_overlay(&mut self) -> bool {
        self.overlay_open = !self.overlay_open;
        self.overlay_open
    }

    /// Handle a change of the search field. Must be called inside a tokio runtime.
    pub fn on_input(&mut self, text: &str) {
        self.cancel_pending();

        if text.is_empty() {
            self.state = SearchState::Idle;
            return;
        }

        let query = text.to_string();
        self.state = SearchState::Typing(query.clone());

        let generation = self.generation;
        let provider = self.provider.clone();
        let debounce = self.debounce;
        let tx = self.tx.clone();

        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(debounce).await;

            let _ = tx.send(SearchEvent::Started {
                generation,
                query: query.clone(),
            });

            let result = provider.search_locations(&query).await.map_err(|e| {
                tracing::error!("Location search for {:?} failed: {}", query, e);
                e.into_app_error().user_message().to_string()
            });

            let _ = tx.send(SearchEvent::Finished { generation, result });
        }));
    }

    /// Apply every event that has already arrived. Returns true if the state changed.
    pub fn poll(&mut self) -> bool {
        let mut changed = false;
        while let Ok(event) = self.rx.try_recv() {
            changed |= self.apply(event);
        }
        changed
    }

    /// Wait until the latest input has produced a result (or was cleared).
    pub async fn settle(&mut self) -> &SearchState {
        while self.state.is_pending() {
            match self.rx.recv().await {
                Some(event) => {
                    self.apply(event);
                }
                None => break,
            }
        }
        &self.state
    }

    /// Pick a result: closes the overlay, clears the search and returns where to navigate.
    pub fn select(&mut self, index: usize) -> Option<Route> {
        let route = self
            .results()
            .get(index)
            .map(|place| Route::Weather(place.coordinate))?;

        tracing::debug!("Selected search result {} -> {}", index, route);
        self.cancel_pending();
        self.state = SearchState::Idle;
        self.overlay_open = false;
        Some(route)
    }

    fn cancel_pending(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
        self.generation += 1;
    }

    fn apply(&mut self, event: SearchEvent) -> bool {
        if event.generation() != self.generation {
            tracing::debug!("Ignoring search event from generation {}", event.generation());
            return false;
        }

        self.state = match event {
            SearchEvent::Started { query, .. } => SearchState::Searching(query),
            SearchEvent::Finished { result, .. } => match result {
                Ok(list) if list.is_empty() => SearchState::Empty,
                Ok(list) => {
                    tracing::info!("Location search returned {} results", list.len());
                    SearchState::Results(list)
                }
                Err(message) => SearchState::Failed(message),
            },
        };
        true
    }
}

impl Drop for SearchController {
    fn drop(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }
}
