//! Bridging push sources into pull traversals.
//!
//! A push driver owns its control flow: once called, it runs until it has
//! handed every item to its action. Two bridges turn that into step-by-step
//! pulls:
//!
//! - [`Buffered`] runs the driver to completion into a queue on the first pull,
//!   then drains the queue. Works for any item type on the current thread.
//! - [`Handoff`] runs the driver on a dedicated thread. Every pull sends one
//!   demand token over a zero-capacity channel and receives exactly one item
//!   back; between pulls the driver is parked inside its action. Dropping the
//!   traversal unwinds the driver.

use std::{
    collections::VecDeque,
    panic::{self, AssertUnwindSafe},
    rc::Rc,
    sync::Arc,
    thread::{self, JoinHandle},
};

use crossbeam::channel::{self, Receiver, Sender};
use tracing::{debug, trace, warn};

use crate::{
    config::BridgeConfig,
    pull::Pull,
    seq::{Driver, SendDriver},
    step::Step,
};

/// Pull traversal over a push driver, buffered up front.
pub struct Buffered<T> {
    driver: Option<Driver<T>>,
    queue: VecDeque<T>,
}

impl<T> Buffered<T> {
    pub fn new(driver: Driver<T>) -> Self {
        Self {
            driver: Some(driver),
            queue: VecDeque::new(),
        }
    }
}

impl<T> Pull<T> for Buffered<T> {
    fn next(&mut self) -> Step<T> {
        if let Some(driver) = self.driver.take() {
            let queue = &mut self.queue;
            driver(&mut |item| queue.push_back(item));
            trace!(buffered = self.queue.len(), "push driver drained into buffer");
        }
        Step::from(self.queue.pop_front())
    }
}

/// Unwind payload used to stop a driver whose consumer went away.
struct Detached;

struct Link<T> {
    demand: Sender<()>,
    items: Receiver<T>,
    worker: JoinHandle<()>,
}

enum HandoffState<T> {
    Idle,
    Running(Link<T>),
    Fallback(Buffered<T>),
    Finished,
}

/// Pull traversal over a push driver running on its own parked thread.
pub struct Handoff<T> {
    driver: SendDriver<T>,
    config: BridgeConfig,
    state: HandoffState<T>,
}

impl<T: Send + 'static> Handoff<T> {
    pub fn new(driver: SendDriver<T>, config: BridgeConfig) -> Self {
        Self {
            driver,
            config,
            state: HandoffState::Idle,
        }
    }

    fn spawn(&self) -> std::io::Result<Link<T>> {
        let (demand, demand_rx) = channel::bounded::<()>(0);
        let (items_tx, items) = channel::bounded::<T>(0);
        let driver = Arc::clone(&self.driver);

        let mut builder = thread::Builder::new().name(self.config.thread_name.clone());
        if let Some(stack_size) = self.config.stack_size {
            builder = builder.stack_size(stack_size);
        }

        let worker = builder.spawn(move || {
            if demand_rx.recv().is_err() {
                return;
            }
            let outcome = panic::catch_unwind(AssertUnwindSafe(|| {
                driver(&mut |item| {
                    if items_tx.send(item).is_err() || demand_rx.recv().is_err() {
                        panic::resume_unwind(Box::new(Detached));
                    }
                });
            }));
            if let Err(payload) = outcome {
                if payload.is::<Detached>() {
                    trace!("push driver detached by its consumer");
                } else {
                    panic::resume_unwind(payload);
                }
            }
        })?;

        debug!(thread = %self.config.thread_name, "spawned push handoff thread");
        Ok(Link {
            demand,
            items,
            worker,
        })
    }

    fn local_fallback(&self) -> Buffered<T> {
        let driver = Arc::clone(&self.driver);
        Buffered::new(Rc::new(move |action: &mut dyn FnMut(T)| driver(action)))
    }

    fn finish(&mut self) -> Step<T> {
        if let HandoffState::Running(link) =
            std::mem::replace(&mut self.state, HandoffState::Finished)
        {
            drop(link.demand);
            if let Err(payload) = link.worker.join() {
                panic::resume_unwind(payload);
            }
            trace!("push handoff thread finished");
        }
        Step::End
    }
}

impl<T: Send + 'static> Pull<T> for Handoff<T> {
    fn next(&mut self) -> Step<T> {
        if let HandoffState::Idle = self.state {
            self.state = match self.spawn() {
                Ok(link) => HandoffState::Running(link),
                Err(error) => {
                    warn!(%error, "could not spawn push handoff thread, buffering instead");
                    HandoffState::Fallback(self.local_fallback())
                }
            };
        }

        match &mut self.state {
            HandoffState::Running(link) => {
                if link.demand.send(()).is_err() {
                    return self.finish();
                }
                match link.items.recv() {
                    Ok(item) => Step::Yielded(item),
                    Err(_) => self.finish(),
                }
            }
            HandoffState::Fallback(buffered) => buffered.next(),
            HandoffState::Idle | HandoffState::Finished => Step::End,
        }
    }
}

impl<T> Drop for Handoff<T> {
    fn drop(&mut self) {
        if let HandoffState::Running(link) =
            std::mem::replace(&mut self.state, HandoffState::Finished)
        {
            let Link {
                demand,
                items,
                worker,
            } = link;
            drop(demand);
            drop(items);
            if worker.join().is_err() && !thread::panicking() {
                warn!("push driver panicked after its consumer stopped pulling");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn init_tracing() {
        let _ = tracing_subscriber::fmt()
            .with_env_filter("lazyseq=trace")
            .with_test_writer()
            .try_init();
    }

    fn counting_driver(produced: Arc<AtomicUsize>, limit: Option<usize>) -> SendDriver<usize> {
        Arc::new(move |action: &mut dyn FnMut(usize)| {
            let mut n = 0;
            while limit.map_or(true, |limit| n < limit) {
                n += 1;
                produced.fetch_add(1, Ordering::SeqCst);
                action(n);
            }
        })
    }

    #[test]
    fn test_buffered_preserves_order() {
        let driver: Driver<i32> = Rc::new(|action: &mut dyn FnMut(i32)| {
            for item in [3, 1, 2] {
                action(item);
            }
        });
        let mut pull = Buffered::new(driver);
        assert_eq!(pull.next(), Step::Yielded(3));
        assert_eq!(pull.next(), Step::Yielded(1));
        assert_eq!(pull.next(), Step::Yielded(2));
        assert_eq!(pull.next(), Step::End);
        assert_eq!(pull.next(), Step::End);
    }

    #[test]
    fn test_handoff_does_not_start_before_first_pull() {
        init_tracing();
        let produced = Arc::new(AtomicUsize::new(0));
        let pull = Handoff::new(
            counting_driver(Arc::clone(&produced), None),
            BridgeConfig::default(),
        );
        drop(pull);
        assert_eq!(produced.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_handoff_never_runs_ahead_of_demand() {
        init_tracing();
        let produced = Arc::new(AtomicUsize::new(0));
        let mut pull = Handoff::new(
            counting_driver(Arc::clone(&produced), None),
            BridgeConfig::default(),
        );

        assert_eq!(pull.next(), Step::Yielded(1));
        assert_eq!(pull.next(), Step::Yielded(2));
        assert_eq!(produced.load(Ordering::SeqCst), 2);
        drop(pull);
        assert_eq!(produced.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_handoff_reports_end_when_driver_returns() {
        init_tracing();
        let produced = Arc::new(AtomicUsize::new(0));
        let mut pull = Handoff::new(
            counting_driver(Arc::clone(&produced), Some(2)),
            BridgeConfig::default(),
        );

        assert_eq!(pull.next(), Step::Yielded(1));
        assert_eq!(pull.next(), Step::Yielded(2));
        assert_eq!(pull.next(), Step::End);
        assert_eq!(pull.next(), Step::End);
    }

    #[test]
    fn test_handoff_uses_configured_thread_name() {
        let seen = Arc::new(std::sync::Mutex::new(None));
        let driver: SendDriver<u8> = Arc::new({
            let seen = Arc::clone(&seen);
            move |action: &mut dyn FnMut(u8)| {
                if let Ok(mut slot) = seen.lock() {
                    *slot = thread::current().name().map(str::to_owned);
                }
                action(1);
            }
        });
        let config = BridgeConfig {
            thread_name: "bridge-under-test".to_string(),
            ..BridgeConfig::default()
        };

        let mut pull = Handoff::new(driver, config);
        assert_eq!(pull.next(), Step::Yielded(1));
        assert_eq!(pull.next(), Step::End);
        assert_eq!(
            seen.lock().map(|slot| slot.clone()).ok().flatten().as_deref(),
            Some("bridge-under-test")
        );
    }

    #[test]
    fn test_handoff_fallback_buffers_on_the_current_thread() {
        init_tracing();
        let produced = Arc::new(AtomicUsize::new(0));
        let mut pull = Handoff::new(
            counting_driver(Arc::clone(&produced), Some(3)),
            BridgeConfig::default(),
        );
        pull.state = HandoffState::Fallback(pull.local_fallback());

        assert_eq!(produced.load(Ordering::SeqCst), 0);
        assert_eq!(pull.next(), Step::Yielded(1));
        assert_eq!(produced.load(Ordering::SeqCst), 3);
        assert_eq!(pull.next(), Step::Yielded(2));
        assert_eq!(pull.next(), Step::Yielded(3));
        assert_eq!(pull.next(), Step::End);
        assert_eq!(pull.next(), Step::End);
    }

    #[test]
    #[should_panic(expected = "driver failed")]
    fn test_handoff_rethrows_driver_panic() {
        let driver: SendDriver<u8> = Arc::new(|action: &mut dyn FnMut(u8)| {
            action(1);
            panic!("driver failed");
        });
        let mut pull = Handoff::new(driver, BridgeConfig::default());
        assert_eq!(pull.next(), Step::Yielded(1));
        pull.next();
    }
}
