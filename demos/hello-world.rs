use std::{thread, time::Duration};

use event_queue::{EventQueue, Result};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let queue = EventQueue::new()?;

    // Subscribe two listeners; each keeps receiving events while its handle lives
    let greeter = queue.subscribe(|| println!("Hello, World!"));
    let counter = queue.subscribe({
        let count = std::sync::atomic::AtomicUsize::new(0);
        move || {
            let n = count.fetch_add(1, std::sync::atomic::Ordering::Relaxed) + 1;
            println!("Events seen so far: {n}");
        }
    });

    // Several posts in a row coalesce into a single dispatch round
    queue.post();
    queue.post();
    thread::sleep(Duration::from_millis(200));

    // Dropping a handle unsubscribes it
    drop(greeter);
    queue.post();
    thread::sleep(Duration::from_millis(200));

    drop(counter);
    // Dropping the queue waits for the dispatch thread to finish
    Ok(())
}
