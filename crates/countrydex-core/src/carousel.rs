// crates/countrydex-core/src/carousel.rs

//! # Flag Carousel
//!
//! A rotating index over the full country list, independent of any filter.
//!
//! The stepping rule is the pure [`next_index`]. With the `driver` feature,
//! `CarouselDriver` runs it as a tokio task every [`DEFAULT_INTERVAL`], asking
//! for the list length on every tick, and stops as soon as it is cancelled or
//! dropped.

use crate::model::Country;
use serde::Serialize;
use std::time::Duration;

#[cfg(feature = "driver")]
pub use driver::CarouselDriver;

/// Time between two carousel steps.
pub const DEFAULT_INTERVAL: Duration = Duration::from_millis(3000);

/// The index after `current` on a list of `len` items.
///
/// Wraps to `0` at the end. An empty list freezes the index at `0`.
#[inline]
pub fn next_index(current: usize, len: usize) -> usize {
    if len == 0 {
        0
    } else {
        current.wrapping_add(1) % len
    }
}

/// Carousel position as a plain value, for hosts that own their own timer
/// (the browser calls [`Carousel::advance`] from `setInterval`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Carousel {
    index: usize,
}

impl Carousel {
    pub fn index(&self) -> usize {
        self.index
    }

    /// Step once against the current list length.
    pub fn advance(&mut self, len: usize) -> usize {
        self.index = next_index(self.index, len);
        self.index
    }

    /// Keep the index inside a list of `len` items, e.g. after a reload.
    pub fn fit(&mut self, len: usize) {
        self.index = if len == 0 { 0 } else { self.index % len };
    }

    /// The country under the carousel, if any.
    ///
    /// A list that shrank below the stored index yields its first entry
    /// instead of going out of bounds.
    pub fn current<'a>(&self, countries: &'a [Country]) -> Option<&'a Country> {
        countries.get(self.index).or_else(|| countries.first())
    }
}

#[cfg(feature = "driver")]
mod driver {
    use super::next_index;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use std::time::Duration;
    use tokio::sync::mpsc;
    use tokio::time::{self, Instant, MissedTickBehavior};
    use tokio_util::sync::CancellationToken;

    /// A cancellable recurring task that advances a carousel index.
    ///
    /// `len` is called on every tick, so a list replaced while the driver runs
    /// is picked up at the next step. Steps are read with [`CarouselDriver::next`].
    /// Dropping the driver cancels the task.
    pub struct CarouselDriver {
        rx: mpsc::UnboundedReceiver<usize>,
        cancel: CancellationToken,
        index: Arc<AtomicUsize>,
    }

    impl CarouselDriver {
        /// Spawn the ticking task on the current tokio runtime.
        ///
        /// The first step comes one full `interval` after the call.
        pub fn spawn<L>(interval: Duration, len: L) -> Self
        where
            L: Fn() -> usize + Send + 'static,
        {
            let (tx, rx) = mpsc::unbounded_channel();
            let cancel = CancellationToken::new();
            let index = Arc::new(AtomicUsize::new(0));
            let period = interval.max(Duration::from_millis(1));

            let task_cancel = cancel.clone();
            let shared = Arc::clone(&index);
            tokio::spawn(async move {
                let mut ticker = time::interval_at(Instant::now() + period, period);
                // Don't burst steps if we fall behind
                ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

                loop {
                    tokio::select! {
                        biased;
                        _ = task_cancel.cancelled() => break,
                        _ = ticker.tick() => {}
                    }
                    if task_cancel.is_cancelled() {
                        break;
                    }
                    let next = next_index(shared.load(Ordering::Acquire), len());
                    shared.store(next, Ordering::Release);
                    if tx.send(next).is_err() {
                        break;
                    }
                }
                tracing::debug!("carousel driver stopped");
            });

            tracing::debug!(interval_ms = period.as_millis() as u64, "carousel driver started");
            CarouselDriver { rx, cancel, index }
        }

        /// Last published index.
        pub fn index(&self) -> usize {
            self.index.load(Ordering::Acquire)
        }

        /// Wait for the next step. `None` once cancelled.
        pub async fn next(&mut self) -> Option<usize> {
            if self.cancel.is_cancelled() {
                return None;
            }
            tokio::select! {
                biased;
                _ = self.cancel.cancelled() => None,
                step = self.rx.recv() => step,
            }
        }

        /// Stop ticking. No step is delivered afterwards.
        pub fn cancel(&self) {
            self.cancel.cancel();
        }

        pub fn is_cancelled(&self) -> bool {
            self.cancel.is_cancelled()
        }
    }

    impl Drop for CarouselDriver {
        fn drop(&mut self) {
            self.cancel.cancel();
        }
    }

}
