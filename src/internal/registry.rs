use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};

use crate::{
    Subscription, SubscriptionId,
    subscription::Callback,
};

/// Non-owning reference to a subscriber's callback.
#[derive(Clone)]
pub(crate) struct Entry {
    id: SubscriptionId,
    callback: Weak<Callback>,
}

impl Entry {
    pub fn id(&self) -> SubscriptionId {
        self.id
    }

    pub fn upgrade(&self) -> Option<Arc<Callback>> {
        self.callback.upgrade()
    }

    fn is_expired(&self) -> bool {
        self.callback.strong_count() == 0
    }
}

/// Outcome of [`Registry::prune`].
///
/// The survivors occupy indices `0..survivors` until the next prune.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Pruned {
    pub removed: usize,
    pub survivors: usize,
}

#[derive(Default)]
struct Inner {
    entries: Vec<Entry>,
    next_id: u64,
}

/// Ordered set of weak subscriptions.
///
/// Entries are appended by [`Registry::subscribe`] and only ever removed by
/// [`Registry::prune`], which keeps survivors in their original order. Pruning
/// is done by the dispatch thread alone, so indices stay valid for the
/// duration of a dispatch round.
#[derive(Default)]
pub(crate) struct Registry {
    inner: Mutex<Inner>,
}

impl Registry {
    pub fn subscribe(&self, callback: Arc<Callback>) -> Subscription {
        let mut inner = self.lock();
        let id = SubscriptionId::new(inner.next_id);
        inner.next_id += 1;
        inner.entries.push(Entry {
            id,
            callback: Arc::downgrade(&callback),
        });
        Subscription::new(id, callback)
    }

    /// Drops the entries whose handle is gone.
    pub fn prune(&self) -> Pruned {
        let mut inner = self.lock();
        let before = inner.entries.len();
        inner.entries.retain(|entry| !entry.is_expired());
        let survivors = inner.entries.len();
        Pruned {
            removed: before - survivors,
            survivors,
        }
    }

    pub fn entry(&self, index: usize) -> Option<Entry> {
        self.lock().entries.get(index).cloned()
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.lock().entries.len()
    }

    // No user code runs under this lock, so a poisoned guard is still consistent.
    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
