//! Monitor primitives.
//!
//! A [`Monitor`] pairs a mutex-protected state with a condition variable. Waiters
//! always re-check their predicate after waking, so a wakeup that arrives without
//! the state having changed (spurious or otherwise) puts them straight back to
//! sleep instead of letting them proceed.

use std::fmt;

use parking_lot::{Condvar, Mutex, MutexGuard};

/// Guard returned by the monitor's wait operations. The lock is held until it drops.
pub type MonitorGuard<'a, T> = MutexGuard<'a, T>;

/// Mutex-protected state plus the condition variable used to announce changes to it.
pub struct Monitor<T> {
    state: Mutex<T>,
    changed: Condvar,
}

impl<T> Monitor<T> {
    /// Creates a monitor around `initial`.
    pub fn new(initial: T) -> Self {
        Self {
            state: Mutex::new(initial),
            changed: Condvar::new(),
        }
    }

    /// Locks the state without waiting for any condition.
    pub fn lock(&self) -> MonitorGuard<'_, T> {
        self.state.lock()
    }

    /// Blocks until `ready` holds for the state and returns with the lock held.
    ///
    /// The lock is released while blocked and re-acquired on every wakeup before
    /// `ready` is evaluated again.
    pub fn wait_until<F>(&self, mut ready: F) -> MonitorGuard<'_, T>
    where
        F: FnMut(&T) -> bool,
    {
        let mut guard = self.state.lock();
        while !ready(&*guard) {
            self.changed.wait(&mut guard);
            if !ready(&*guard) {
                log::trace!("monitor woke with predicate still false, waiting again");
            }
        }
        guard
    }

    /// Applies `update` under the lock, releases it and wakes every waiter.
    pub fn modify_and_notify_all<R, F>(&self, update: F) -> R
    where
        F: FnOnce(&mut T) -> R,
    {
        let result = {
            let mut guard = self.state.lock();
            update(&mut guard)
        };
        self.changed.notify_all();
        result
    }

    /// Wakes every waiter without touching the state.
    ///
    /// Waiters re-check their predicate, so this only ever costs them a wakeup.
    /// Useful for exercising the re-check path.
    pub fn notify_all_unchanged(&self) -> usize {
        self.changed.notify_all()
    }
}

impl<T: fmt::Debug> fmt::Debug for Monitor<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.state.try_lock() {
            Some(state) => f.debug_struct("Monitor").field("state", &*state).finish(),
            None => f.debug_struct("Monitor").field("state", &"<locked>").finish(),
        }
    }
}

/// One-shot completion flag: starts false, becomes true once and stays true.
#[derive(Debug)]
pub struct CompletionFlag {
    monitor: Monitor<bool>,
}

impl Default for CompletionFlag {
    fn default() -> Self {
        Self::new()
    }
}

impl CompletionFlag {
    /// Creates an unset flag.
    pub fn new() -> Self {
        Self {
            monitor: Monitor::new(false),
        }
    }

    /// Sets the flag and wakes all waiters. Returns `false` if it was already set.
    pub fn complete(&self) -> bool {
        self.monitor.modify_and_notify_all(|done| !std::mem::replace(done, true))
    }

    /// Whether the flag has been set.
    pub fn is_complete(&self) -> bool {
        *self.monitor.lock()
    }

    /// Blocks until the flag is set. The returned guard keeps the lock held.
    pub fn wait(&self) -> MonitorGuard<'_, bool> {
        self.monitor.wait_until(|done| *done)
    }

    /// Wakes every waiter while leaving the flag unset.
    pub fn wake_waiters(&self) -> usize {
        self.monitor.notify_all_unchanged()
    }
}
