//! event-queue - coalescing broadcast events
//!
//! A payload-less "something happened" signal. Producers call
//! [`EventQueue::post`]; subscribers register zero-argument callbacks with
//! [`EventQueue::subscribe`] and are invoked on a dedicated dispatch thread,
//! never on the producer's call stack.
//!
//! - Posts coalesce: several posts before the next dispatch round produce a
//!   single round.
//! - Within a round, callbacks run in subscription order.
//! - The registry only holds weak references. Dropping the returned
//!   [`Subscription`] is the one and only way to unsubscribe.
//! - Dropping the queue stops the dispatch thread and waits for it to exit.
//!
//! ```rust
//! use std::sync::{Arc, atomic::{AtomicUsize, Ordering}};
//! use event_queue::EventQueue;
//!
//! # fn main() -> event_queue::Result {
//! let queue = EventQueue::new()?;
//! let hits = Arc::new(AtomicUsize::new(0));
//!
//! let counter = hits.clone();
//! let subscription = queue.subscribe(move || {
//!     counter.fetch_add(1, Ordering::SeqCst);
//! });
//!
//! queue.post();
//! std::thread::sleep(std::time::Duration::from_millis(300));
//! assert_eq!(hits.load(Ordering::SeqCst), 1);
//!
//! drop(subscription); // unsubscribed
//! # Ok(())
//! # }
//! ```
//!
//! See `demos/hello-world.rs`.

mod config;
mod error;
mod event_queue;
mod subscription;

mod internal;

pub use config::Config;
pub use error::Error;
pub use event_queue::EventQueue;
pub use subscription::{Subscription, SubscriptionId};

pub type Result<T = ()> = std::result::Result<T, Error>;
