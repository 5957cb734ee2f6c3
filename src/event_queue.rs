use std::{
    any::Any,
    sync::Arc,
    thread::{self, JoinHandle},
};

use tokio_util::sync::CancellationToken;

use crate::{
    Config, Error, Result, Subscription,
    internal::{Dispatcher, Latch, Registry},
};

/// Broadcasts a payload-less event to every live subscriber.
///
/// - `new()` / `with_config()` start the dispatch thread immediately.
/// - `post()` marks an event as pending and wakes the dispatch thread; it
///   never blocks on delivery.
/// - `subscribe(callback)` registers a callback and returns the
///   [`Subscription`] that owns it. Drop the subscription to unsubscribe.
/// - Dropping the queue stops the dispatch thread and blocks until it exits.
///
/// Posts coalesce: any number of posts issued before the next dispatch round
/// result in one round. Within a round, callbacks run one after another on
/// the dispatch thread, in subscription order.
///
/// A panicking callback is not caught: it ends the dispatch thread, and later
/// posts are silently ignored.
pub struct EventQueue {
    config: Config,
    latch: Arc<Latch>,
    registry: Arc<Registry>,
    cancel_token: Arc<CancellationToken>,
    dispatcher_handle: Option<JoinHandle<()>>,
}

impl EventQueue {
    /// Create a queue with the default configuration.
    pub fn new() -> Result<Self> {
        Self::with_config(Config::default())
    }

    /// Create a queue with the given configuration.
    ///
    /// Fails if `config.wake_interval` is zero, or if the dispatch thread (or
    /// the timer runtime it drives) can't be started.
    pub fn with_config(config: Config) -> Result<Self> {
        if config.wake_interval.is_zero() {
            return Err(Error::ZeroWakeInterval);
        }

        let latch = Arc::new(Latch::default());
        let registry = Arc::new(Registry::default());
        let cancel_token = Arc::new(CancellationToken::new());

        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_time()
            .build()
            .map_err(Error::RuntimeBuild)?;
        let mut dispatcher = Dispatcher::new(
            latch.clone(),
            registry.clone(),
            cancel_token.clone(),
            config.wake_interval,
        );
        let handle = thread::Builder::new()
            .name(config.thread_name.clone())
            .spawn(move || runtime.block_on(dispatcher.run()))
            .map_err(Error::ThreadSpawn)?;

        tracing::debug!(thread = %config.thread_name, "event queue started");
        Ok(Self {
            config,
            latch,
            registry,
            cancel_token,
            dispatcher_handle: Some(handle),
        })
    }

    /// Signal that an event occurred.
    ///
    /// Safe to call from any thread, including from inside a subscriber
    /// callback, in which case another round follows the current one.
    pub fn post(&self) {
        tracing::trace!("event posted");
        self.latch.set();
    }

    /// Register `callback` to be invoked on the dispatch thread after each
    /// post.
    ///
    /// The returned [`Subscription`] owns the callback; keep it alive for as
    /// long as notifications are wanted.
    pub fn subscribe<F>(&self, callback: F) -> Subscription
    where
        F: Fn() + Send + Sync + 'static,
    {
        let subscription = self.registry.subscribe(Arc::new(callback));
        tracing::trace!(subscription = %subscription.id(), "subscribed");
        subscription
    }

    /// The configuration this queue was created with.
    pub fn config(&self) -> &Config {
        &self.config
    }
}

impl Drop for EventQueue {
    fn drop(&mut self) {
        self.cancel_token.cancel();
        let Some(handle) = self.dispatcher_handle.take() else {
            return;
        };
        if handle.thread().id() == thread::current().id() {
            tracing::warn!("event queue dropped on its own dispatch thread, not joining");
            return;
        }
        match handle.join() {
            Ok(()) => tracing::debug!("event queue stopped"),
            Err(panic) => tracing::error!(
                reason = panic_message(panic.as_ref()),
                "dispatch thread panicked"
            ),
        }
    }
}

fn panic_message(panic: &(dyn Any + Send)) -> &str {
    if let Some(s) = panic.downcast_ref::<&str>() {
        s
    } else if let Some(s) = panic.downcast_ref::<String>() {
        s
    } else {
        "unknown"
    }
}
