//! Timer scopes. Every timer a view arms is owned by that view's scope and is
//! cancelled when the scope closes, so nothing fires into a torn-down view.

use std::collections::HashMap;

/// Source of repeating and one-shot timers. Dropping a handle cancels its timer.
pub trait Scheduler {
    type Handle;

    fn every(&self, millis: u32, tick: Box<dyn FnMut()>) -> Self::Handle;

    fn after(&self, millis: u32, fire: Box<dyn FnOnce()>) -> Self::Handle;
}

/// Keyed set of live timers belonging to one view.
///
/// Re-arming a key replaces (and thereby cancels) the timer that held it. Once
/// closed, the scope refuses new timers.
pub struct TimerScope<S: Scheduler> {
    scheduler: S,
    timers: HashMap<&'static str, S::Handle>,
    closed: bool,
}

impl<S: Scheduler> TimerScope<S> {
    pub fn new(scheduler: S) -> Self {
        Self {
            scheduler,
            timers: HashMap::new(),
            closed: false,
        }
    }

    /// Arms a repeating timer under `key`. Returns false if the scope is closed.
    pub fn every<F>(&mut self, key: &'static str, millis: u32, tick: F) -> bool
    where
        F: FnMut() + 'static,
    {
        if self.closed {
            return false;
        }
        let handle = self.scheduler.every(millis, Box::new(tick));
        self.timers.insert(key, handle);
        true
    }

    /// Arms a one-shot timer under `key`. Returns false if the scope is closed.
    pub fn after<F>(&mut self, key: &'static str, millis: u32, fire: F) -> bool
    where
        F: FnOnce() + 'static,
    {
        if self.closed {
            return false;
        }
        let handle = self.scheduler.after(millis, Box::new(fire));
        self.timers.insert(key, handle);
        true
    }

    pub fn cancel(&mut self, key: &'static str) {
        self.timers.remove(key);
    }

    /// Cancels every timer and refuses new ones.
    pub fn close(&mut self) {
        self.closed = true;
        self.timers.clear();
    }
}

impl<S: Scheduler> Drop for TimerScope<S> {
    fn drop(&mut self) {
        self.close();
    }
}
