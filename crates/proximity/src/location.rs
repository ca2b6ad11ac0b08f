//! Live device location.
//!
//! The device's geolocation service sits behind [`LocationProvider`]: a
//! one-shot fix plus a watch subscription that reports fixes and failures on
//! separate callbacks. [`LocationTracker`] keeps only the latest fix and
//! turns any failure into "location unknown", which the proximity pipeline
//! handles by showing every spot.

use parkease_geo::UserLocation;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, VecDeque};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use thiserror::Error;

/// Failures reported by a location provider.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LocationError {
    #[error("location permission denied")]
    PermissionDenied,

    #[error("position unavailable")]
    PositionUnavailable,

    #[error("location request timed out")]
    Timeout,

    #[error("geolocation is not supported on this device")]
    Unsupported,
}

/// Identifies an active watch subscription.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct WatchHandle(u64);

impl WatchHandle {
    pub fn id(self) -> u64 {
        self.0
    }
}

/// Receives each new fix from a watch.
pub type PositionCallback = Box<dyn FnMut(UserLocation) + Send>;

/// Receives failures from a watch.
pub type ErrorCallback = Box<dyn FnMut(LocationError) + Send>;

/// Source of device positions.
pub trait LocationProvider {
    /// Requests a single fix.
    fn current_position(&self) -> Result<UserLocation, LocationError>;

    /// Starts delivering fixes to `on_update` and failures to `on_error`
    /// until the returned handle is cleared.
    fn watch_position(&self, on_update: PositionCallback, on_error: ErrorCallback) -> WatchHandle;

    /// Stops a watch. Unknown or already cleared handles are ignored.
    fn clear_watch(&self, handle: WatchHandle);
}

/// One scripted provider output.
#[derive(Debug, Clone, PartialEq)]
pub enum LocationEvent {
    Fix(UserLocation),
    Failure(LocationError),
}

impl From<UserLocation> for LocationEvent {
    fn from(location: UserLocation) -> Self {
        LocationEvent::Fix(location)
    }
}

impl From<LocationError> for LocationEvent {
    fn from(error: LocationError) -> Self {
        LocationEvent::Failure(error)
    }
}

struct Watcher {
    on_update: PositionCallback,
    on_error: ErrorCallback,
}

impl Watcher {
    fn deliver(&mut self, event: &LocationEvent) {
        match event {
            LocationEvent::Fix(location) => (self.on_update)(*location),
            LocationEvent::Failure(error) => (self.on_error)(error.clone()),
        }
    }
}

#[derive(Default)]
struct ReplayState {
    script: VecDeque<LocationEvent>,
    watchers: BTreeMap<WatchHandle, Arc<Mutex<Watcher>>>,
    next_id: u64,
}

/// Provider that plays back a fixed sequence of fixes and failures.
///
/// Used for recorded tracks and tests. Nothing happens on its own: each call
/// to [`advance`](Self::advance) delivers the next scripted event to every
/// active watch, and [`current_position`](LocationProvider::current_position)
/// consumes the next event as a one-shot answer.
#[derive(Default)]
pub struct ReplayLocationProvider {
    state: Mutex<ReplayState>,
}

impl ReplayLocationProvider {
    pub fn new<I, E>(events: I) -> Self
    where
        I: IntoIterator<Item = E>,
        E: Into<LocationEvent>,
    {
        Self {
            state: Mutex::new(ReplayState {
                script: events.into_iter().map(Into::into).collect(),
                ..ReplayState::default()
            }),
        }
    }

    /// Appends an event to the end of the script.
    pub fn push(&self, event: impl Into<LocationEvent>) {
        self.lock().script.push_back(event.into());
    }

    /// Number of events not yet played.
    pub fn remaining(&self) -> usize {
        self.lock().script.len()
    }

    /// Number of watches that have not been cleared.
    pub fn active_watches(&self) -> usize {
        self.lock().watchers.len()
    }

    /// Delivers the next scripted event to every active watch.
    ///
    /// Returns `false` once the script is exhausted. Callbacks run without
    /// the provider lock held, so they may clear their own watch.
    pub fn advance(&self) -> bool {
        let (event, watchers) = {
            let mut state = self.lock();
            let Some(event) = state.script.pop_front() else {
                return false;
            };
            let watchers: Vec<_> = state.watchers.values().cloned().collect();
            (event, watchers)
        };

        for watcher in watchers {
            watcher
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .deliver(&event);
        }
        true
    }

    fn lock(&self) -> MutexGuard<'_, ReplayState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl LocationProvider for ReplayLocationProvider {
    fn current_position(&self) -> Result<UserLocation, LocationError> {
        match self.lock().script.pop_front() {
            Some(LocationEvent::Fix(location)) => Ok(location),
            Some(LocationEvent::Failure(error)) => Err(error),
            None => Err(LocationError::PositionUnavailable),
        }
    }

    fn watch_position(&self, on_update: PositionCallback, on_error: ErrorCallback) -> WatchHandle {
        let mut state = self.lock();
        let handle = WatchHandle(state.next_id);
        state.next_id += 1;
        state
            .watchers
            .insert(handle, Arc::new(Mutex::new(Watcher { on_update, on_error })));
        handle
    }

    fn clear_watch(&self, handle: WatchHandle) {
        if self.lock().watchers.remove(&handle).is_none() {
            tracing::trace!(watch = handle.id(), "clear_watch on inactive handle");
        }
    }
}

#[derive(Debug, Default)]
struct TrackerState {
    latest: Option<UserLocation>,
    last_error: Option<LocationError>,
}

impl TrackerState {
    fn record_fix(&mut self, location: UserLocation) {
        if let Err(e) = location.validate() {
            tracing::warn!(error = %e, "Discarding invalid location fix");
            self.latest = None;
            self.last_error = Some(LocationError::PositionUnavailable);
            return;
        }
        self.latest = Some(location);
        self.last_error = None;
    }

    fn record_error(&mut self, error: LocationError) {
        tracing::warn!(error = %error, "Location unavailable");
        self.latest = None;
        self.last_error = Some(error);
    }
}

fn lock_state(state: &Mutex<TrackerState>) -> MutexGuard<'_, TrackerState> {
    state.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Holds the user's latest location from a [`LocationProvider`].
///
/// Provider failures never surface as errors here; they clear the stored
/// fix so [`origin`](Self::origin) reports the location as unknown.
pub struct LocationTracker<P: LocationProvider> {
    provider: P,
    state: Arc<Mutex<TrackerState>>,
    watch: Option<WatchHandle>,
}

impl<P: LocationProvider> LocationTracker<P> {
    pub fn new(provider: P) -> Self {
        Self {
            provider,
            state: Arc::new(Mutex::new(TrackerState::default())),
            watch: None,
        }
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Takes a one-shot fix and returns the resulting origin.
    pub fn request(&self) -> Option<UserLocation> {
        let result = self.provider.current_position();
        let mut state = lock_state(&self.state);
        match result {
            Ok(location) => state.record_fix(location),
            Err(error) => state.record_error(error),
        }
        state.latest
    }

    /// Starts a continuous watch. Does nothing if one is already running.
    pub fn start(&mut self) {
        if self.watch.is_some() {
            return;
        }

        let on_fix = Arc::clone(&self.state);
        let on_failure = Arc::clone(&self.state);
        let handle = self.provider.watch_position(
            Box::new(move |location| lock_state(&on_fix).record_fix(location)),
            Box::new(move |error| lock_state(&on_failure).record_error(error)),
        );

        tracing::debug!(watch = handle.id(), "Started location watch");
        self.watch = Some(handle);
    }

    /// Stops the watch. Safe to call when no watch is running.
    pub fn stop(&mut self) {
        if let Some(handle) = self.watch.take() {
            self.provider.clear_watch(handle);
            tracing::debug!(watch = handle.id(), "Stopped location watch");
        }
    }

    pub fn is_watching(&self) -> bool {
        self.watch.is_some()
    }

    /// Latest known location, or `None` if unknown or the last update failed.
    pub fn origin(&self) -> Option<UserLocation> {
        lock_state(&self.state).latest
    }

    /// The failure behind the current unknown state, if any.
    pub fn last_error(&self) -> Option<LocationError> {
        lock_state(&self.state).last_error.clone()
    }
}

impl<P: LocationProvider> Drop for LocationTracker<P> {
    fn drop(&mut self) {
        self.stop();
    }
}
