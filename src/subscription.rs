use std::{fmt, sync::Arc};

pub(crate) type Callback = dyn Fn() + Send + Sync + 'static;

/// Identifies a [`Subscription`] within the queue that issued it.
///
/// Ids are handed out in subscription order and never reused by the same
/// queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SubscriptionId(u64);

impl SubscriptionId {
    pub(crate) fn new(id: u64) -> Self {
        Self(id)
    }

    #[inline(always)]
    pub fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for SubscriptionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// An active subscription, returned by
/// [`EventQueue::subscribe`](crate::EventQueue::subscribe).
///
/// The handle is the sole owner of the registered callback; the queue only
/// keeps a weak reference to it. Dropping the handle unsubscribes:
///
/// - no invocation of the callback starts after the drop,
/// - an invocation already running on the dispatch thread completes,
/// - the queue forgets the entry during its next dispatch round.
///
/// Handles are deliberately not `Clone`. Two handles never compare equal,
/// even when they wrap identical callback logic.
///
/// A handle may outlive the queue that issued it.
#[must_use = "dropping a Subscription immediately unsubscribes it"]
pub struct Subscription {
    id: SubscriptionId,
    callback: Arc<Callback>,
}

impl Subscription {
    pub(crate) fn new(id: SubscriptionId, callback: Arc<Callback>) -> Self {
        Self { id, callback }
    }

    #[inline]
    pub fn id(&self) -> SubscriptionId {
        self.id
    }
}

impl PartialEq for Subscription {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.callback, &other.callback)
    }
}

impl Eq for Subscription {}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription").field("id", &self.id).finish()
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        tracing::trace!(subscription = %self.id, "unsubscribed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_handles_with_identical_logic_are_distinct() {
        let a = Subscription::new(SubscriptionId::new(0), Arc::new(|| {}));
        let b = Subscription::new(SubscriptionId::new(0), Arc::new(|| {}));
        assert_ne!(a, b);
    }

    #[test]
    fn test_dropping_handle_expires_weak_reference() {
        let callback: Arc<Callback> = Arc::new(|| {});
        let weak = Arc::downgrade(&callback);
        let subscription = Subscription::new(SubscriptionId::new(7), callback);
        assert!(weak.upgrade().is_some());
        drop(subscription);
        assert!(weak.upgrade().is_none());
    }

    #[test]
    fn test_id_display() {
        assert_eq!(SubscriptionId::new(3).to_string(), "#3");
        assert_eq!(SubscriptionId::new(3).value(), 3);
    }
}
