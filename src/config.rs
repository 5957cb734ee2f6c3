use std::time::Duration;

/// Configuration of an [`EventQueue`](crate::EventQueue).
///
/// Use the builder methods to customize, or use [`Default`] for sensible
/// defaults.
///
/// # Examples
///
/// ```rust
/// use std::time::Duration;
/// use event_queue::Config;
///
/// let config = Config::default()
///     .with_wake_interval(Duration::from_millis(20))  // Faster lost-wake recovery
///     .with_thread_name("ui-refresh");                // Shows up in debuggers and logs
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// Upper bound on how long the dispatch loop sleeps between checks of the
    /// pending flag and the shutdown signal.
    /// A posted event is normally delivered as soon as the loop is woken; this
    /// interval only matters when a wake-up is missed, and it also bounds how
    /// long dropping the queue can block.
    /// Default: 100 ms. A zero interval is rejected by
    /// [`EventQueue::with_config`](crate::EventQueue::with_config).
    pub wake_interval: Duration,

    /// Name given to the dispatch thread.
    /// Default: `"event-queue"`
    pub thread_name: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            wake_interval: Duration::from_millis(100),
            thread_name: String::from("event-queue"),
        }
    }
}

impl Config {
    /// Set the fallback wake interval of the dispatch loop.
    ///
    /// Trade-offs:
    /// - Shorter intervals: quicker recovery from a missed wake-up and faster
    ///   teardown, at the cost of more idle wake-ups
    /// - Longer intervals: a quieter idle thread, slower worst-case delivery
    pub fn with_wake_interval(mut self, interval: Duration) -> Self {
        self.wake_interval = interval;
        self
    }

    /// Set the name of the dispatch thread.
    pub fn with_thread_name(mut self, name: impl Into<String>) -> Self {
        self.thread_name = name.into();
        self
    }
}
