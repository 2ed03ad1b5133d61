//! # One-shot readiness latch with queued continuations.
//!
//! [`Latch`] is the suspension primitive behind both readiness gates of the
//! gateway: "channel ready" and "provider ready". It has exactly two states:
//!
//! ```text
//! Pending(waiters: FIFO queue) ──resolve(value)──► Resolved(value)
//! ```
//!
//! ## Rules
//! - **Non-blocking registration**: [`Latch::when_resolved`] never blocks.
//!   While pending it queues the continuation; once resolved it runs the
//!   continuation immediately — the condition has become permanently true,
//!   so late registrants must not wait for a signal that already fired.
//! - **Idempotent resolve**: the first [`Latch::resolve`] stores the value
//!   and fires all queued continuations exactly once, in registration order
//!   (FIFO). Later calls are no-ops and their value is dropped.
//! - **No cancellation**: a queued continuation fires when/if the latch
//!   resolves; there is no way to abandon it.
//!
//! Continuations run synchronously on the resolving (or registering) call
//! stack, outside the internal lock. A continuation may therefore call back
//! into the latch or into the gateway that owns it.

use std::collections::VecDeque;
use std::sync::{Mutex, MutexGuard, PoisonError};

type Continuation<T> = Box<dyn FnOnce(&T) + Send>;

enum State<T> {
    Pending(VecDeque<Continuation<T>>),
    Resolved(T),
}

/// One-time-settable readiness signal; once resolved, stays resolved.
///
/// # Example
/// ```
/// use std::sync::Arc;
/// use std::sync::atomic::{AtomicUsize, Ordering};
/// use loggate::Latch;
///
/// let latch: Latch<u32> = Latch::new();
/// let fired = Arc::new(AtomicUsize::new(0));
///
/// let f = fired.clone();
/// latch.when_resolved(move |v| { f.fetch_add(*v as usize, Ordering::SeqCst); });
/// assert_eq!(fired.load(Ordering::SeqCst), 0); // still pending
///
/// latch.resolve(2);
/// assert_eq!(fired.load(Ordering::SeqCst), 2);
///
/// // Late registrants fire immediately.
/// let f = fired.clone();
/// latch.when_resolved(move |v| { f.fetch_add(*v as usize, Ordering::SeqCst); });
/// assert_eq!(fired.load(Ordering::SeqCst), 4);
/// ```
pub struct Latch<T> {
    state: Mutex<State<T>>,
}

impl<T: Clone + Send + 'static> Latch<T> {
    /// Creates a latch in the pending state.
    pub fn new() -> Self {
        Self {
            state: Mutex::new(State::Pending(VecDeque::new())),
        }
    }

    /// True once [`Latch::resolve`] has been called.
    pub fn is_resolved(&self) -> bool {
        matches!(&*self.lock(), State::Resolved(_))
    }

    /// Returns a clone of the resolved value, if any.
    pub fn get(&self) -> Option<T> {
        match &*self.lock() {
            State::Resolved(value) => Some(value.clone()),
            State::Pending(_) => None,
        }
    }

    /// Registers a one-shot continuation and returns immediately.
    ///
    /// Pending: the continuation is queued (FIFO). Resolved: the
    /// continuation runs right here on the caller's stack.
    pub fn when_resolved(&self, f: impl FnOnce(&T) + Send + 'static) {
        let resolved = {
            let mut state = self.lock();
            match &mut *state {
                State::Pending(waiters) => {
                    waiters.push_back(Box::new(f));
                    return;
                }
                State::Resolved(value) => value.clone(),
            }
        };
        // Run outside the lock so the continuation can re-enter.
        f(&resolved);
    }

    /// Resolves the latch, firing all queued continuations FIFO.
    ///
    /// Idempotent: only the first call has effect.
    pub fn resolve(&self, value: T) {
        let waiters = {
            let mut state = self.lock();
            match &mut *state {
                State::Resolved(_) => return,
                State::Pending(waiters) => {
                    let drained = std::mem::take(waiters);
                    *state = State::Resolved(value.clone());
                    drained
                }
            }
        };
        for waiter in waiters {
            waiter(&value);
        }
    }

    /// Number of continuations currently queued.
    pub fn pending(&self) -> usize {
        match &*self.lock() {
            State::Pending(waiters) => waiters.len(),
            State::Resolved(_) => 0,
        }
    }

    // A poisoned lock means a continuation panicked mid-drain; the state
    // itself is still coherent, so keep serving it rather than wedging
    // every log call in the process.
    fn lock(&self) -> MutexGuard<'_, State<T>> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<T: Clone + Send + 'static> Default for Latch<T> {
    fn default() -> Self {
        Self::new()
    }
}
