//! Story sequencer: a cursor stepping through a fixed script on a timer, with
//! the outgoing phase held until its exit animation has played.

/// Cursor over a fixed, cyclically replayed list of phases.
///
/// The index only moves forward through [`PhaseSequencer::tick`] and always
/// stays inside `0..len` (or at 0 for an empty script).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhaseSequencer {
    index: usize,
    len: usize,
    outgoing: Option<usize>,
}

impl PhaseSequencer {
    pub fn new(len: usize) -> Self {
        Self {
            index: 0,
            len,
            outgoing: None,
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    /// Advances one phase. The phase left behind stays outgoing until
    /// [`PhaseSequencer::settle`]; a one-phase script never changes index and
    /// so never has one.
    pub fn tick(&mut self) {
        if self.len > 1 {
            self.outgoing = Some(self.index);
            self.index = (self.index + 1) % self.len;
        }
    }

    /// Phase still playing its exit animation, if any.
    pub fn outgoing(&self) -> Option<usize> {
        self.outgoing
    }

    pub fn settle(&mut self) {
        self.outgoing = None;
    }

    pub fn is_current(&self, index: usize) -> bool {
        self.len > 0 && self.index == index
    }

    /// The current entry of `script`, or `None` if the script is shorter than
    /// the sequencer was built for.
    pub fn select<'a, T>(&self, script: &'a [T]) -> Option<&'a T> {
        script.get(self.index)
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;
    use crate::engine::schedule::manual::ManualScheduler;
    use crate::config::{PHASE_EXIT_MS, PHASE_INTERVAL_MS};
    use crate::engine::schedule::TimerScope;

    #[test]
    fn index_after_k_ticks_is_k_mod_n() {
        for n in 1..=7 {
            let mut sequencer = PhaseSequencer::new(n);
            for k in 1..=30 {
                sequencer.tick();
                assert_eq!(sequencer.index(), k % n, "n={n} k={k}");
            }
        }
    }

    #[test]
    fn empty_script_never_moves_or_selects() {
        let mut sequencer = PhaseSequencer::new(0);
        sequencer.tick();
        assert_eq!(sequencer.index(), 0);
        assert!(!sequencer.is_current(0));
        assert_eq!(sequencer.select::<u8>(&[]), None);
    }

    #[test]
    fn select_is_guarded_against_short_scripts() {
        let mut sequencer = PhaseSequencer::new(4);
        for _ in 0..3 {
            sequencer.tick();
        }
        assert_eq!(sequencer.select(&["a", "b"]), None);
        assert_eq!(sequencer.select(&["a", "b", "c", "d"]), Some(&"d"));
    }

    #[test]
    fn timer_drives_the_sequencer_until_the_scope_closes() {
        let clock = ManualScheduler::new();
        let mut scope = TimerScope::new(clock.clone());
        let sequencer = Rc::new(RefCell::new(PhaseSequencer::new(5)));

        let driven = sequencer.clone();
        scope.every("phase-advance", 4_000, move || driven.borrow_mut().tick());

        clock.advance(3_999);
        assert_eq!(sequencer.borrow().index(), 0);
        clock.advance(1);
        assert_eq!(sequencer.borrow().index(), 1);
        clock.advance(4_000 * 6);
        assert_eq!(sequencer.borrow().index(), 7 % 5);

        scope.close();
        let frozen = *sequencer.borrow();
        clock.advance(60_000);
        assert_eq!(*sequencer.borrow(), frozen);
    }

    #[test]
    fn ticking_holds_the_previous_phase_until_settled() {
        let mut sequencer = PhaseSequencer::new(5);
        assert_eq!(sequencer.outgoing(), None);

        sequencer.tick();
        assert_eq!(sequencer.index(), 1);
        assert_eq!(sequencer.outgoing(), Some(0));
        assert!(!sequencer.is_current(0));

        sequencer.settle();
        assert_eq!(sequencer.outgoing(), None);
        assert_eq!(sequencer.index(), 1);

        for _ in 0..4 {
            sequencer.tick();
        }
        assert_eq!(sequencer.index(), 0);
        assert_eq!(sequencer.outgoing(), Some(4));
    }

    #[test]
    fn single_phase_script_has_no_transition() {
        let mut sequencer = PhaseSequencer::new(1);
        sequencer.tick();
        assert_eq!(sequencer.index(), 0);
        assert_eq!(sequencer.outgoing(), None);
    }

    #[test]
    fn exit_settles_well_before_the_next_tick() {
        let clock = ManualScheduler::new();
        let scope = Rc::new(RefCell::new(TimerScope::new(clock.clone())));
        let sequencer = Rc::new(RefCell::new(PhaseSequencer::new(5)));

        let driven = sequencer.clone();
        let settle_scope = scope.clone();
        scope.borrow_mut().every("phase-advance", PHASE_INTERVAL_MS, move || {
            driven.borrow_mut().tick();
            let settled = driven.clone();
            settle_scope.borrow_mut().after("phase-settle", PHASE_EXIT_MS, move || {
                settled.borrow_mut().settle()
            });
        });

        clock.advance(u64::from(PHASE_INTERVAL_MS));
        assert_eq!(sequencer.borrow().outgoing(), Some(0));
        clock.advance(u64::from(PHASE_EXIT_MS) - 1);
        assert_eq!(sequencer.borrow().outgoing(), Some(0));
        clock.advance(1);
        assert_eq!(sequencer.borrow().outgoing(), None);
        assert_eq!(sequencer.borrow().index(), 1);

        scope.borrow_mut().close();
    }

    #[test]
    fn a_fresh_sequencer_starts_over() {
        let mut first = PhaseSequencer::new(5);
        first.tick();
        first.tick();
        let remounted = PhaseSequencer::new(5);
        assert_eq!(remounted.index(), 0);
        assert!(remounted.is_current(0));
    }
}
