use std::{
    sync::atomic::{AtomicBool, Ordering},
    time::Duration,
};

use tokio::{select, sync::Notify};

/// Coalescing "event pending" flag plus the signal that wakes the dispatcher.
///
/// The flag is not guarded by any lock. A wake-up racing the dispatcher's
/// drain may go unnoticed until the next wake interval elapses.
#[derive(Debug, Default)]
pub(crate) struct Latch {
    pending: AtomicBool,
    wake: Notify,
}

impl Latch {
    pub fn set(&self) {
        self.pending.store(true, Ordering::Release);
        self.wake.notify_one();
    }

    /// Clears the flag, returning whether an event was pending.
    pub fn take(&self) -> bool {
        self.pending.swap(false, Ordering::AcqRel)
    }

    /// Marks an event as pending without waking the dispatcher.
    #[cfg(test)]
    pub fn set_without_wake(&self) {
        self.pending.store(true, Ordering::Release);
    }

    #[cfg(test)]
    pub fn is_set(&self) -> bool {
        self.pending.load(Ordering::Acquire)
    }

    /// Resolves when woken by [`Latch::set`] or once `interval` has elapsed.
    pub async fn wait(&self, interval: Duration) {
        select! {
            _ = self.wake.notified() => {}
            _ = tokio::time::sleep(interval) => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_posts_coalesce() {
        let latch = Latch::default();
        latch.set();
        latch.set();
        latch.set();
        assert!(latch.take());
        assert!(!latch.take());
        assert!(!latch.is_set());
    }

    #[tokio::test]
    async fn test_wait_returns_early_when_set() {
        let latch = Latch::default();
        latch.set();
        let start = tokio::time::Instant::now();
        latch.wait(Duration::from_secs(10)).await;
        assert!(start.elapsed() < Duration::from_secs(5));
        assert!(latch.is_set());
    }

    #[tokio::test]
    async fn test_wait_is_bounded_by_interval() {
        let latch = Latch::default();
        let start = tokio::time::Instant::now();
        latch.wait(Duration::from_millis(20)).await;
        assert!(start.elapsed() >= Duration::from_millis(20));
        assert!(!latch.is_set());
    }
}
