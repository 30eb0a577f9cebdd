//! The single deferred-operation slot.
//!
//! The repeating progress tick and the one-shot completion hide compete for
//! one slot. Arming a new operation always releases the current one first,
//! so at most one deferred operation is alive at any instant. Each armed
//! operation gets a fresh generation; events carrying an older generation
//! are stale and must be dropped by the caller.

use tokio::task::AbortHandle;
use tracing::trace;

/// What kind of deferred work occupies the slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeferredKind {
    Tick,
    CompletionHide,
}

/// Lifetime counters for the slot.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TimerStats {
    pub created: u64,
    pub cancelled: u64,
    /// One-shot operations that ran to completion.
    pub completed: u64,
}

impl TimerStats {
    /// Operations created but not yet released. Never more than one.
    pub fn pending(&self) -> u64 {
        self.created - self.cancelled - self.completed
    }
}

#[derive(Debug)]
struct DeferredOp {
    kind: DeferredKind,
    generation: u64,
    abort: AbortHandle,
}

#[derive(Debug, Default)]
pub struct TimerSlot {
    current: Option<DeferredOp>,
    last_generation: u64,
    stats: TimerStats,
}

impl TimerSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Release whatever is armed, then arm the operation built by `spawn`.
    ///
    /// `spawn` receives the new generation and returns the abort handle of
    /// the task it started. Returns that generation.
    pub fn replace_with<F>(&mut self, kind: DeferredKind, spawn: F) -> u64
    where
        F: FnOnce(u64) -> AbortHandle,
    {
        self.cancel();

        self.last_generation += 1;
        let generation = self.last_generation;
        let abort = spawn(generation);

        self.current = Some(DeferredOp {
            kind,
            generation,
            abort,
        });
        self.stats.created += 1;
        debug_assert!(self.stats.pending() <= 1);
        trace!(?kind, generation, "deferred operation armed");
        generation
    }

    /// Abort and release the armed operation. Returns `false` if the slot was empty.
    pub fn cancel(&mut self) -> bool {
        match self.current.take() {
            Some(op) => {
                op.abort.abort();
                self.stats.cancelled += 1;
                trace!(kind = ?op.kind, generation = op.generation, "deferred operation cancelled");
                true
            }
            None => false,
        }
    }

    /// Release a one-shot operation that fired. Ignored unless `generation` is current.
    pub fn complete(&mut self, generation: u64) -> bool {
        if self.current.as_ref().map(|op| op.generation) != Some(generation) {
            return false;
        }
        self.current = None;
        self.stats.completed += 1;
        true
    }

    /// Whether an event from (`kind`, `generation`) belongs to the armed operation.
    pub fn is_current(&self, kind: DeferredKind, generation: u64) -> bool {
        self.current
            .as_ref()
            .is_some_and(|op| op.kind == kind && op.generation == generation)
    }

    pub fn active_kind(&self) -> Option<DeferredKind> {
        self.current.as_ref().map(|op| op.kind)
    }

    pub fn stats(&self) -> TimerStats {
        self.stats
    }
}

impl Drop for TimerSlot {
    fn drop(&mut self) {
        self.cancel();
    }
}
