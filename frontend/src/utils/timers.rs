use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::{Interval, Timeout};
use yew::prelude::*;

use crate::engine::schedule::{Scheduler, TimerScope};

/// A live browser timer. Dropping it clears the interval or timeout.
#[allow(dead_code)] // held only for its Drop
pub enum BrowserTimer {
    Interval(Interval),
    Timeout(Timeout),
}

/// `setInterval` / `setTimeout` through gloo.
#[derive(Clone, Copy, Default)]
pub struct BrowserScheduler;

impl Scheduler for BrowserScheduler {
    type Handle = BrowserTimer;

    fn every(&self, millis: u32, tick: Box<dyn FnMut()>) -> BrowserTimer {
        BrowserTimer::Interval(Interval::new(millis, tick))
    }

    fn after(&self, millis: u32, fire: Box<dyn FnOnce()>) -> BrowserTimer {
        BrowserTimer::Timeout(Timeout::new(millis, fire))
    }
}

pub type ViewTimers = Rc<RefCell<TimerScope<BrowserScheduler>>>;

/// Timer scope tied to the calling component: closed when it unmounts.
#[hook]
pub fn use_timer_scope() -> ViewTimers {
    let scope = use_mut_ref(|| TimerScope::new(BrowserScheduler));
    {
        let scope = scope.clone();
        use_effect_with_deps(
            move |_| {
                move || {
                    scope.borrow_mut().close();
                }
            },
            (),
        );
    }
    scope
}
