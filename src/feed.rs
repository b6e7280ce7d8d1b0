//! Handoff queue for phase observations.
//!
//! Phases are produced on a processing thread and consumed by the refresh tick that owns the
//! [`CircularHistogram`][crate::CircularHistogram]. The producer side never blocks and never
//! allocates, so it can be used from a real-time thread. When the queue is full new phases are
//! dropped and counted instead of waiting for the consumer to catch up.

use crossbeam::channel::{self, Receiver, Sender, TrySendError};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Create a bounded phase queue that can hold `capacity` pending phases. A capacity of zero is
/// treated as one.
pub fn phase_feed(capacity: usize) -> (PhaseSender, PhaseReceiver) {
    let (sender, receiver) = channel::bounded(capacity.max(1));
    let dropped = Arc::new(AtomicUsize::new(0));

    (
        PhaseSender {
            sender,
            dropped: dropped.clone(),
        },
        PhaseReceiver { receiver, dropped },
    )
}

/// The producing end of the phase queue.
#[derive(Debug, Clone)]
pub struct PhaseSender {
    sender: Sender<f64>,
    /// Shared with the receiver.
    dropped: Arc<AtomicUsize>,
}

/// The consuming end of the phase queue.
#[derive(Debug)]
pub struct PhaseReceiver {
    receiver: Receiver<f64>,
    dropped: Arc<AtomicUsize>,
}

impl PhaseSender {
    /// Queue a phase in radians. Returns `false` and counts the phase as dropped if the queue is
    /// full or if the receiver is gone.
    pub fn try_push(&self, angle: f64) -> bool {
        match self.sender.try_send(angle) {
            Ok(()) => true,
            Err(TrySendError::Full(_) | TrySendError::Disconnected(_)) => {
                self.dropped.fetch_add(1, Ordering::Relaxed);
                false
            }
        }
    }

    /// The number of phases dropped so far.
    pub fn dropped(&self) -> usize {
        self.dropped.load(Ordering::Relaxed)
    }
}

impl PhaseReceiver {
    /// Call `f` for every phase that is pending right now, in the order they were pushed. Phases
    /// pushed while draining are left for the next call. Returns the number of phases consumed.
    pub fn drain<F: FnMut(f64)>(&self, mut f: F) -> usize {
        let pending = self.receiver.len();
        let mut consumed = 0;
        for angle in self.receiver.try_iter().take(pending) {
            f(angle);
            consumed += 1;
        }

        consumed
    }

    /// The number of pending phases.
    pub fn len(&self) -> usize {
        self.receiver.len()
    }

    pub fn is_empty(&self) -> bool {
        self.receiver.is_empty()
    }

    /// The number of phases the producer had to drop so far.
    pub fn dropped(&self) -> usize {
        self.dropped.load(Ordering::Relaxed)
    }
}
