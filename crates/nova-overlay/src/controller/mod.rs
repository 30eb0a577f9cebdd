//! The overlay widget controller.
//!
//! An actor that owns the widget state and its render surface. Host
//! commands, key presses and timer firings all arrive as `OverlayEvent`s on
//! one channel and are handled strictly one at a time, so the controller
//! never needs a lock. Timer tasks only post events; the state they act on
//! is touched here, after checking the event still belongs to the armed
//! deferred operation.

mod handle;


use std::time::Duration;

use serde_json::Value;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior};
use tracing::{debug, info, trace};

use crate::callback::CallbackClient;
use crate::command::InboundCommand;
use crate::keys::{is_close_key, CLOSE_UI_CALLBACK};
use crate::progress::{Phase, ProgressRun};
use crate::surface::OverlaySurface;
use crate::timer::{DeferredKind, TimerSlot, TimerStats};

pub use handle::OverlayHandle;

/// Shortest tick period accepted; `tokio::time::interval` rejects zero.
const MIN_TICK_INTERVAL: Duration = Duration::from_millis(1);

/// Timing knobs for the progress widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OverlaySettings {
    pub tick_interval: Duration,
    /// How long the full bar stays visible before hiding.
    pub completion_delay: Duration,
}

impl Default for OverlaySettings {
    fn default() -> Self {
        Self {
            tick_interval: Duration::from_millis(50),
            completion_delay: Duration::from_millis(200),
        }
    }
}

/// Everything the controller reacts to.
#[derive(Debug, Clone)]
pub enum OverlayEvent {
    Command(InboundCommand),
    /// A raw host message, decoded on arrival.
    HostMessage(Value),
    /// A key-down, by key name.
    Key(String),
    Tick { generation: u64 },
    CompletionElapsed { generation: u64 },
    Shutdown,
}

pub struct OverlayController<S: OverlaySurface> {
    surface: S,
    callbacks: CallbackClient,
    settings: OverlaySettings,
    phase: Phase,
    run: Option<ProgressRun>,
    timer: TimerSlot,
    /// Keeps the channel open until `run` starts; after that only handles do.
    tx: Option<mpsc::UnboundedSender<OverlayEvent>>,
    /// Timer tasks post through this so they never keep the channel alive.
    weak_tx: mpsc::WeakUnboundedSender<OverlayEvent>,
    rx: mpsc::UnboundedReceiver<OverlayEvent>,
}

impl<S: OverlaySurface> OverlayController<S> {
    pub fn new(surface: S, callbacks: CallbackClient, settings: OverlaySettings) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        let weak_tx = tx.downgrade();
        Self {
            surface,
            callbacks,
            settings,
            phase: Phase::Hidden,
            run: None,
            timer: TimerSlot::new(),
            tx: Some(tx),
            weak_tx,
            rx,
        }
    }

    /// A sender for feeding events into this controller.
    pub fn handle(&self) -> OverlayHandle {
        let tx = match &self.tx {
            Some(tx) => tx.clone(),
            // Only reachable once every handle is gone, so hand out a closed one.
            None => self
                .weak_tx
                .upgrade()
                .unwrap_or_else(|| mpsc::unbounded_channel().0),
        };
        OverlayHandle::new(tx)
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn timer_stats(&self) -> TimerStats {
        self.timer.stats()
    }

    // -------------------------------------------------------------------------
    // Operations
    // -------------------------------------------------------------------------

    /// Show `label` and start filling over `duration`, superseding any run.
    pub fn display_progress(&mut self, label: &str, duration: Duration) {
        let now = Instant::now();

        self.surface.set_label(label);
        self.surface.set_fill(0.0);
        self.surface.set_visible(true);

        self.run = Some(ProgressRun::new(label, duration, now));
        self.phase = Phase::Showing;
        self.arm_ticks(now);

        debug!(label = %label, duration_ms = duration.as_millis() as u64, "progress shown");
    }

    /// Hide immediately, dropping any pending tick or completion hold.
    pub fn hide_progress(&mut self) {
        self.timer.cancel();
        self.run = None;
        self.phase = Phase::Hidden;
        self.surface.set_visible(false);
        debug!("progress hidden");
    }

    pub fn handle_inbound_command(&mut self, command: InboundCommand) {
        match command {
            InboundCommand::Show { label, duration } => self.display_progress(&label, duration),
            InboundCommand::Hide => self.hide_progress(),
            InboundCommand::Unknown(action) => {
                trace!(?action, "ignoring unknown host action");
            }
        }
    }

    /// React to a key-down. Escape sends `closeUI`; every press sends one call.
    pub fn handle_key(&mut self, key: &str) -> Option<JoinHandle<Value>> {
        if !is_close_key(key) {
            return None;
        }
        debug!("escape pressed, asking host to close UI");
        Some(self.callbacks.spawn_callback(CLOSE_UI_CALLBACK, None))
    }

    /// Handle one event. Returns `false` once the controller should stop.
    pub fn handle_event(&mut self, event: OverlayEvent) -> bool {
        match event {
            OverlayEvent::Command(command) => self.handle_inbound_command(command),
            OverlayEvent::HostMessage(message) => {
                self.handle_inbound_command(InboundCommand::from_value(&message));
            }
            OverlayEvent::Key(key) => {
                self.handle_key(&key);
            }
            OverlayEvent::Tick { generation } => self.on_tick(generation),
            OverlayEvent::CompletionElapsed { generation } => self.on_completion(generation),
            OverlayEvent::Shutdown => return false,
        }
        true
    }

    /// Wait for the next event and handle it.
    pub async fn step(&mut self) -> bool {
        match self.rx.recv().await {
            Some(event) => self.handle_event(event),
            None => {
                debug!("all overlay handles dropped");
                false
            }
        }
    }

    /// Handle every event already queued without waiting. Returns how many ran.
    pub fn process_pending(&mut self) -> usize {
        let mut handled = 0;
        while let Ok(event) = self.rx.try_recv() {
            handled += 1;
            if !self.handle_event(event) {
                break;
            }
        }
        handled
    }

    /// Process events until `Shutdown` or until every handle is dropped.
    pub async fn run(mut self) {
        info!(resource = %self.callbacks.resource(), "overlay controller started");
        self.tx = None;
        while self.step().await {}
        self.timer.cancel();
        info!("overlay controller stopped");
    }

    // -------------------------------------------------------------------------
    // Deferred work
    // -------------------------------------------------------------------------

    fn arm_ticks(&mut self, start: Instant) {
        let period = self.settings.tick_interval.max(MIN_TICK_INTERVAL);
        let weak_tx = self.weak_tx.clone();
        self.timer.replace_with(DeferredKind::Tick, move |generation| {
            tokio::spawn(async move {
                let mut interval = tokio::time::interval_at(start + period, period);
                interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
                loop {
                    interval.tick().await;
                    let Some(tx) = weak_tx.upgrade() else {
                        break;
                    };
                    if tx.send(OverlayEvent::Tick { generation }).is_err() {
                        break;
                    }
                }
            })
            .abort_handle()
        });
    }

    fn arm_completion_hide(&mut self) {
        let delay = self.settings.completion_delay;
        let weak_tx = self.weak_tx.clone();
        self.timer
            .replace_with(DeferredKind::CompletionHide, move |generation| {
                tokio::spawn(async move {
                    tokio::time::sleep(delay).await;
                    if let Some(tx) = weak_tx.upgrade() {
                        let _ = tx.send(OverlayEvent::CompletionElapsed { generation });
                    }
                })
                .abort_handle()
            });
    }

    fn on_tick(&mut self, generation: u64) {
        if !self.timer.is_current(DeferredKind::Tick, generation) {
            trace!(generation, "stale tick dropped");
            return;
        }
        let Some(run) = &self.run else {
            return;
        };

        let fill = run.fill_at(Instant::now());
        self.surface.set_fill(fill);

        if fill >= 100.0 {
            debug!(label = %run.label, "progress complete");
            self.run = None;
            self.phase = Phase::CompletingDelay;
            self.arm_completion_hide();
        }
    }

    fn on_completion(&mut self, generation: u64) {
        if !self.timer.complete(generation) {
            trace!(generation, "stale completion dropped");
            return;
        }
        self.surface.set_visible(false);
        self.surface.set_fill(0.0);
        self.phase = Phase::Hidden;
    }
}
