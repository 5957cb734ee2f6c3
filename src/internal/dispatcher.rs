use std::{sync::Arc, time::Duration};

use tokio_util::sync::CancellationToken;

use crate::internal::{Latch, Pruned, Registry};

/// Background loop delivering posted events to live subscribers.
///
/// Each pass waits for a wake-up (or the wake interval), then runs a dispatch
/// round if the latch was set: prune dead entries, then invoke the survivors
/// in registration order. Cancellation is checked between rounds only, so a
/// round that has started always completes.
pub(crate) struct Dispatcher {
    latch: Arc<Latch>,
    registry: Arc<Registry>,
    cancel_token: Arc<CancellationToken>,
    wake_interval: Duration,
}

impl Dispatcher {
    pub fn new(
        latch: Arc<Latch>,
        registry: Arc<Registry>,
        cancel_token: Arc<CancellationToken>,
        wake_interval: Duration,
    ) -> Self {
        Self {
            latch,
            registry,
            cancel_token,
            wake_interval,
        }
    }

    pub async fn run(&mut self) {
        tracing::debug!(wake_interval = ?self.wake_interval, "dispatcher started");
        loop {
            tokio::select! {
                _ = self.cancel_token.cancelled() => {}
                _ = self.latch.wait(self.wake_interval) => {}
            }
            if self.latch.take() {
                self.dispatch();
            }
            if self.cancel_token.is_cancelled() {
                break;
            }
        }
        tracing::debug!("dispatcher stopped");
    }

    /// Runs one dispatch round.
    ///
    /// Only the entries that survived the prune are visited; subscriptions
    /// added while the round runs wait for the next one. The registry lock is
    /// taken for the prune and then briefly per entry, never while a callback
    /// executes, so callbacks may subscribe, post or drop handles themselves.
    pub(crate) fn dispatch(&self) -> usize {
        let Pruned { removed, survivors } = self.registry.prune();
        let mut invoked = 0;
        for index in 0..survivors {
            let Some(entry) = self.registry.entry(index) else {
                break;
            };
            // Handle dropped after the prune.
            let Some(callback) = entry.upgrade() else {
                continue;
            };
            tracing::trace!(subscription = %entry.id(), "invoking subscriber");
            callback();
            invoked += 1;
        }
        tracing::debug!(removed, invoked, "dispatch round complete");
        invoked
    }
}
