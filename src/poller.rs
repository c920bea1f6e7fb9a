//! Background Polling
//!
//! Fixed-interval refresh of notifications and stats. The loop ticks once
//! immediately, then once per interval, until its handle is cancelled.

use std::future::Future;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use leptos::task::spawn_local;

/// Cancellation handle for a running poll loop
#[derive(Clone, Debug, Default)]
pub struct PollHandle {
    cancelled: Arc<AtomicBool>,
}

impl PollHandle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Relaxed)
    }
}

/// Run `tick` now and after every `interval` until `handle` is cancelled.
///
/// The timer for the next tick is armed before the current tick starts, so
/// request latency does not stretch the period. A failed tick is the tick's
/// own business; the schedule never retries early or backs off.
pub async fn run_poll_loop<S, SF, T, TF>(handle: PollHandle, interval: Duration, mut sleep: S, mut tick: T)
where
    S: FnMut(Duration) -> SF,
    SF: Future<Output = ()>,
    T: FnMut() -> TF,
    TF: Future<Output = ()>,
{
    while !handle.is_cancelled() {
        let next = sleep(interval);
        tick().await;
        next.await;
    }
}

/// Spawn a poll loop on the browser event loop using real timers
pub fn spawn_poller<T, TF>(interval: Duration, tick: T) -> PollHandle
where
    T: FnMut() -> TF + 'static,
    TF: Future<Output = ()> + 'static,
{
    let handle = PollHandle::new();
    spawn_local(run_poll_loop(handle.clone(), interval, gloo_timers::future::sleep, tick));
    handle
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    #[test]
    fn test_ticks_at_start_then_every_interval() {
        let handle = PollHandle::new();
        let ticks = Rc::new(Cell::new(0));
        let sleeps = Rc::new(RefCell::new(Vec::new()));
        // Interleaved record of what happened, in order
        let events = Rc::new(RefCell::new(Vec::new()));

        let sleep = {
            let sleeps = sleeps.clone();
            let events = events.clone();
            move |d: Duration| {
                sleeps.borrow_mut().push(d);
                events.borrow_mut().push("sleep");
                async {}
            }
        };
        let tick = {
            let ticks = ticks.clone();
            let events = events.clone();
            let handle = handle.clone();
            move || {
                ticks.set(ticks.get() + 1);
                events.borrow_mut().push("tick");
                if ticks.get() == 3 {
                    handle.cancel();
                }
                async {}
            }
        };

        tokio_test::block_on(run_poll_loop(handle.clone(), Duration::from_secs(30), sleep, tick));

        assert_eq!(ticks.get(), 3);
        assert_eq!(*sleeps.borrow(), vec![Duration::from_secs(30); 3]);
        // Each period's timer starts before its tick runs
        assert_eq!(*events.borrow(), vec!["sleep", "tick", "sleep", "tick", "sleep", "tick"]);
    }

    #[test]
    fn test_cancelled_before_start_never_ticks() {
        let handle = PollHandle::new();
        handle.cancel();
        let ticks = Rc::new(Cell::new(0));
        let counter = ticks.clone();

        tokio_test::block_on(run_poll_loop(
            handle,
            Duration::from_secs(30),
            |_| async {},
            move || {
                counter.set(counter.get() + 1);
                async {}
            },
        ));

        assert_eq!(ticks.get(), 0);
    }
}
