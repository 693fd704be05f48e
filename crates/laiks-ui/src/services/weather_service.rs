//! Weather backend: the chained fetch pipeline behind the dashboard.
//!
//! One invocation runs current weather → (reverse geocode, detached) →
//! forecast and publishes each section into the shared [`WeatherModel`].
//! Every invocation gets a sequence number; a newer invocation cancels the
//! older one and any response carrying a stale number is dropped, so the
//! model always reflects the most recently requested location.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use parking_lot::{Mutex, RwLock};
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

use laiks_weather::{reverse_geocode, Coordinate, DateFormatter, WeatherError, WeatherProvider};

use crate::error_mapping::IntoAppError;
use crate::models::weather_model::{
    daily_items, hourly_items, CurrentCard, LoadStatus, WeatherModel,
};

/// How an invocation ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PipelineOutcome {
    Completed,
    /// A stage failed; holds the user-facing message
    Failed(String),
    /// A newer invocation took over before this one finished
    Superseded,
    NotFound,
}

struct PipelineState {
    provider: Arc<WeatherProvider>,
    formatter: DateFormatter,
    model: RwLock<WeatherModel>,
    /// Sequence number of the newest invocation; only written under the model lock
    sequence: AtomicU64,
    /// Token of the newest invocation; only replaced under the model lock
    cancel: Mutex<Option<CancellationToken>>,
    location_task: Mutex<Option<JoinHandle<()>>>,
    changed: watch::Sender<u64>,
}

impl PipelineState {
    /// Start a new invocation: cancel the previous one and reset the sections.
    fn begin(
        &self,
        coord: Option<Coordinate>,
        from_current_location: bool,
        status: LoadStatus,
    ) -> (u64, CancellationToken) {
        // Token swap and sequence bump share the model lock so the newest
        // sequence always owns the live token.
        let mut model = self.model.write();
        let token = CancellationToken::new();
        if let Some(previous) = self.cancel.lock().replace(token.clone()) {
            previous.cancel();
        }
        let seq = self.sequence.fetch_add(1, Ordering::SeqCst) + 1;
        model.clear_sections();
        model.coordinate = coord;
        model.current_location_active = from_current_location;
        model.status = status;
        model.revision += 1;
        let revision = model.revision;
        drop(model);

        self.changed.send_replace(revision);
        (seq, token)
    }

    /// Apply `update` if `seq` is still the newest invocation.
    fn publish(&self, seq: u64, update: impl FnOnce(&mut WeatherModel)) -> bool {
        let mut model = self.model.write();
        if self.sequence.load(Ordering::SeqCst) != seq {
            tracing::debug!("Dropping stale response from invocation {}", seq);
            return false;
        }
        update(&mut model);
        model.revision += 1;
        let revision = model.revision;
        drop(model);

        self.changed.send_replace(revision);
        true
    }

    fn fail(&self, seq: u64, stage: &str, error: WeatherError) -> PipelineOutcome {
        tracing::error!("Failed to fetch {}: {}", stage, error);
        let message = error.into_app_error().user_message().to_string();

        let published = self.publish(seq, |m| m.status = LoadStatus::Failed(message.clone()));
        if published {
            PipelineOutcome::Failed(message)
        } else {
            PipelineOutcome::Superseded
        }
    }
}

/// Orchestrates dashboard updates. Cheap to clone; clones share state.
#[derive(Clone)]
pub struct WeatherPipeline {
    state: Arc<PipelineState>,
}

impl WeatherPipeline {
    pub fn new(provider: Arc<WeatherProvider>, formatter: DateFormatter) -> Self {
        let (changed, _) = watch::channel(0);
        Self {
            state: Arc::new(PipelineState {
                provider,
                formatter,
                model: RwLock::new(WeatherModel::default()),
                sequence: AtomicU64::new(0),
                cancel: Mutex::new(None),
                location_task: Mutex::new(None),
                changed,
            }),
        }
    }

    /// Snapshot of the current view-model
    pub fn model(&self) -> WeatherModel {
        self.state.model.read().clone()
    }

    /// Receives the model revision after every change
    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.state.changed.subscribe()
    }

    /// Show the not-found panel, abandoning any running invocation
    pub fn show_not_found(&self) {
        self.state.begin(None, false, LoadStatus::NotFound);
    }

    /// Run the full fetch chain for `coord`.
    ///
    /// Returns once the forecast is published (or a stage fails); the place
    /// name may arrive later, see [`WeatherPipeline::location_settled`].
    pub async fn update(&self, coord: Coordinate, from_current_location: bool) -> PipelineOutcome {
        let (seq, token) = self
            .state
            .begin(Some(coord), from_current_location, LoadStatus::Loading);
        tracing::info!("Weather update #{} for {}", seq, coord);

        tokio::select! {
            _ = token.cancelled() => {
                tracing::debug!("Weather update #{} cancelled", seq);
                PipelineOutcome::Superseded
            }
            outcome = self.run(seq, coord, token.clone()) => outcome,
        }
    }

    async fn run(&self, seq: u64, coord: Coordinate, token: CancellationToken) -> PipelineOutcome {
        let state = &self.state;

        let current = match state.provider.current_weather(coord).await {
            Ok(c) => c,
            Err(e) => return state.fail(seq, "current weather", e),
        };

        let card = CurrentCard::from_weather(&current, &state.formatter);
        if !state.publish(seq, |m| m.current = Some(card)) {
            return PipelineOutcome::Superseded;
        }

        self.spawn_location_lookup(seq, coord, token);

        let series = match state.provider.forecast(coord).await {
            Ok(s) => s,
            Err(e) => return state.fail(seq, "forecast", e),
        };

        let hourly = hourly_items(&series, &state.formatter);
        let forecast = daily_items(&series, &state.formatter);

        let published = state.publish(seq, |m| {
            m.hourly = hourly;
            m.forecast = forecast;
            m.status = LoadStatus::Ready;
        });

        if published {
            tracing::info!("Weather update #{} complete", seq);
            PipelineOutcome::Completed
        } else {
            PipelineOutcome::Superseded
        }
    }

    /// Fill in the place name without holding up the forecast
    fn spawn_location_lookup(&self, seq: u64, coord: Coordinate, token: CancellationToken) {
        let state = self.state.clone();

        let handle = tokio::spawn(async move {
            let label = tokio::select! {
                _ = token.cancelled() => return,
                label = reverse_geocode(&state.provider, coord) => label,
            };

            if let Some(label) = label {
                state.publish(seq, |m| {
                    if let Some(card) = m.current.as_mut() {
                        card.location = Some(label);
                    }
                });
            }
        });

        if let Some(previous) = self.state.location_task.lock().replace(handle) {
            previous.abort();
        }
    }

    /// Wait for the latest place-name lookup to finish
    pub async fn location_settled(&self) {
        let handle = self.state.location_task.lock().take();
        if let Some(handle) = handle {
            if let Err(e) = handle.await {
                if !e.is_cancelled() {
                    tracing::warn!("Location lookup task failed: {}", e);
                }
            }
        }
    }
}
