//! The SOS trigger controller.

use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use location::{LocationProvider, LocationSnapshot};
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::{self, Instant};
use tracing::{debug, info, warn};

use crate::config::SosConfig;
use crate::dispatch::{SosDispatcher, SosRequest};
use crate::state::{FailureReason, SosPhase, SosSnapshot};

/// Seconds counted down before dispatch.
const COUNTDOWN_START: u8 = 3;

/// Interval between countdown ticks.
const TICK: Duration = Duration::from_secs(1);

/// Converts a sustained press into a single confirmed emergency dispatch.
///
/// The controller owns the countdown timer, the pulse flag, and the send
/// state. All transitions are serialized under one lock; the countdown is
/// a single cancellable task handle, aborted synchronously on every exit
/// from `Arming`. At most one dispatch request is outstanding at a time,
/// and a dropped controller abandons (never aborts) an in-flight request.
pub struct SosController {
    config: SosConfig,
    dispatcher: Arc<dyn SosDispatcher>,
    inner: Arc<Mutex<Inner>>,
    watch_tx: watch::Sender<SosSnapshot>,
}

struct Inner {
    phase: SosPhase,
    pulsing: bool,
    location: Option<LocationSnapshot>,
    location_text: String,
    timer: Option<JoinHandle<()>>,
}

impl Inner {
    fn snapshot(&self) -> SosSnapshot {
        SosSnapshot {
            phase: self.phase.clone(),
            pulsing: self.pulsing,
            location_text: self.location_text.clone(),
        }
    }
}

impl SosController {
    /// Create a controller with the given configuration and dispatcher.
    pub fn new(config: SosConfig, dispatcher: Arc<dyn SosDispatcher>) -> Self {
        let initial = SosSnapshot::initial();
        let (watch_tx, _) = watch::channel(initial.clone());

        let inner = Inner {
            phase: initial.phase,
            pulsing: initial.pulsing,
            location: None,
            location_text: initial.location_text,
            timer: None,
        };

        Self {
            config,
            dispatcher,
            inner: Arc::new(Mutex::new(inner)),
            watch_tx,
        }
    }

    /// Refresh the location snapshot.
    ///
    /// Called once when the SOS screen becomes active; there is no update
    /// loop. On failure the header text reflects the outcome and dispatch
    /// stays blocked.
    pub async fn activate(&self, provider: &dyn LocationProvider) {
        match provider.current_location().await {
            Ok(snapshot) => {
                info!(place = %snapshot.display_name, "Location snapshot obtained");
                let mut inner = lock_inner(&self.inner);
                inner.location_text = snapshot.display_name.clone();
                inner.location = Some(snapshot);
                publish(&inner, &self.watch_tx);
            }
            Err(err) => {
                warn!(error = %err, "Location lookup failed");
                let mut inner = lock_inner(&self.inner);
                inner.location = None;
                inner.location_text = err.display_text().to_string();
                publish(&inner, &self.watch_tx);
            }
        }
    }

    /// Begin the countdown.
    ///
    /// Ignored unless the controller is in `Idle` or `Failed`; in
    /// particular, presses while `Dispatching` or after `Sent` do nothing.
    pub fn press_start(&self) {
        let mut inner = lock_inner(&self.inner);
        match inner.phase {
            SosPhase::Idle | SosPhase::Failed { .. } => {}
            _ => {
                debug!(phase = ?inner.phase, "Press ignored");
                return;
            }
        }

        inner.phase = SosPhase::Arming {
            remaining: COUNTDOWN_START,
        };
        inner.pulsing = true;
        inner.timer = Some(self.spawn_countdown());
        publish(&inner, &self.watch_tx);
        info!("SOS countdown started");
    }

    /// Cancel the countdown.
    ///
    /// Aborts the pending timer synchronously so no late tick can land
    /// after cancellation. Ignored outside of `Arming`.
    pub fn press_release(&self) {
        let mut inner = lock_inner(&self.inner);
        if !matches!(inner.phase, SosPhase::Arming { .. }) {
            return;
        }

        if let Some(timer) = inner.timer.take() {
            timer.abort();
        }
        inner.phase = SosPhase::Idle;
        inner.pulsing = false;
        publish(&inner, &self.watch_tx);
        debug!("SOS countdown cancelled");
    }

    /// Return from `Sent` to `Idle`. For testing/demo purposes only.
    pub fn reset(&self) {
        let mut inner = lock_inner(&self.inner);
        if inner.phase != SosPhase::Sent {
            return;
        }

        inner.phase = SosPhase::Idle;
        publish(&inner, &self.watch_tx);
        debug!("SOS state reset");
    }

    /// Current observable state.
    pub fn snapshot(&self) -> SosSnapshot {
        lock_inner(&self.inner).snapshot()
    }

    /// Subscribe to state changes.
    pub fn subscribe(&self) -> watch::Receiver<SosSnapshot> {
        self.watch_tx.subscribe()
    }

    /// Get the configuration.
    pub fn config(&self) -> &SosConfig {
        &self.config
    }

    fn spawn_countdown(&self) -> JoinHandle<()> {
        let inner = Arc::clone(&self.inner);
        let watch_tx = self.watch_tx.clone();
        let dispatcher = Arc::clone(&self.dispatcher);
        let config = self.config.clone();

        tokio::spawn(async move {
            let mut interval = time::interval_at(Instant::now() + TICK, TICK);
            loop {
                interval.tick().await;
                match countdown_tick(&inner, &watch_tx) {
                    Tick::Continue => {}
                    Tick::Dispatch => break,
                    Tick::Halt => return,
                }
            }

            run_dispatch(&inner, &watch_tx, dispatcher.as_ref(), &config).await;
        })
    }
}

impl Drop for SosController {
    fn drop(&mut self) {
        // A countdown must not outlive its screen. The handle is already
        // None once Dispatching, so an in-flight request keeps running.
        let mut inner = lock_inner(&self.inner);
        if let Some(timer) = inner.timer.take() {
            timer.abort();
        }
    }
}

enum Tick {
    Continue,
    Dispatch,
    Halt,
}

fn lock_inner(inner: &Mutex<Inner>) -> MutexGuard<'_, Inner> {
    inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

fn publish(inner: &Inner, watch_tx: &watch::Sender<SosSnapshot>) {
    watch_tx.send_replace(inner.snapshot());
}

/// One countdown tick. Returns what the timer task should do next.
fn countdown_tick(inner: &Mutex<Inner>, watch_tx: &watch::Sender<SosSnapshot>) -> Tick {
    let mut inner = lock_inner(inner);

    // A release can win the lock race against an already-fired tick; the
    // phase check makes that tick a no-op.
    let SosPhase::Arming { remaining } = inner.phase else {
        return Tick::Halt;
    };

    let next = remaining.saturating_sub(1);
    if next == 0 {
        inner.phase = SosPhase::Dispatching;
        inner.pulsing = false;
        inner.timer = None;
        publish(&inner, watch_tx);
        Tick::Dispatch
    } else {
        inner.phase = SosPhase::Arming { remaining: next };
        publish(&inner, watch_tx);
        Tick::Continue
    }
}

async fn run_dispatch(
    inner: &Mutex<Inner>,
    watch_tx: &watch::Sender<SosSnapshot>,
    dispatcher: &dyn SosDispatcher,
    config: &SosConfig,
) {
    let location = lock_inner(inner).location.clone();

    let Some(location) = location else {
        warn!("No location snapshot, SOS not sent");
        let mut guard = lock_inner(inner);
        guard.phase = SosPhase::Failed {
            reason: FailureReason::LocationUnavailable,
        };
        publish(&guard, watch_tx);
        return;
    };

    let request = SosRequest {
        recipient_phone_number: config.emergency_contact.clone(),
        message_body: message_body(&location.display_name),
        latitude: location.latitude,
        longitude: location.longitude,
    };

    info!(recipient = %request.recipient_phone_number, "Dispatching SOS");
    let outcome = dispatcher.dispatch(request).await;

    let mut guard = lock_inner(inner);
    match outcome {
        Ok(receipt) => {
            info!(message_id = ?receipt.message_id, "SOS sent");
            guard.phase = SosPhase::Sent;
        }
        Err(err) => {
            warn!(error = %err, "SOS dispatch failed");
            guard.phase = SosPhase::Failed {
                reason: FailureReason::from(&err),
            };
        }
    }
    publish(&guard, watch_tx);
}

/// Emergency message text with the interpolated place name.
fn message_body(display_name: &str) -> String {
    format!(
        "EMERGENCY ALERT! I need immediate assistance. This is an automated SOS from TRACE app. Current location: {}",
        display_name
    )
}
