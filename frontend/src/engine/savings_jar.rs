//! Savings jar: coins dropped by the user, each removing itself once its
//! flight animation completes.

use std::fmt;

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Coins it takes to fill the jar.
pub const JAR_CAPACITY: u32 = 20;
/// Height of the coin stack in a full jar.
pub const FULL_FILL_PX: f64 = 230.0;

pub const CONFETTI_PIECES: usize = 30;
const CONFETTI_PALETTE: [&str; 4] = ["#10b981", "#fbbf24", "#f59e0b", "#34d399"];

/// Identity of one in-flight coin: creation time plus a per-jar sequence so two
/// coins committed in the same millisecond stay distinct.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CoinId {
    created_at: u64,
    seq: u32,
}

impl CoinId {
    pub fn created_at(&self) -> u64 {
        self.created_at
    }
}

impl fmt::Display for CoinId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.created_at, self.seq)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    /// The id was not in flight (already completed, or never committed).
    Unknown,
    Saved { celebrate: bool },
}

/// Celebration policy, evaluated at each increment with the counter value
/// before it: the first save, then every save landing on a multiple of five.
pub fn celebrates(before: u32) -> bool {
    before.checked_add(1).is_some_and(|after| after % 5 == 0) || before == 0
}

pub fn fill_level(savings: u32) -> f64 {
    (f64::from(savings) / f64::from(JAR_CAPACITY)).min(1.0)
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SavingsJar {
    in_flight: Vec<CoinId>,
    savings: u32,
    next_seq: u32,
    shaking: bool,
    celebrating: bool,
    commits: u32,
    celebrations: u32,
}

impl SavingsJar {
    /// Drops a new coin and starts the shake.
    pub fn commit(&mut self, now_ms: u64) -> CoinId {
        let id = CoinId {
            created_at: now_ms,
            seq: self.next_seq,
        };
        self.next_seq = self.next_seq.wrapping_add(1);
        self.in_flight.push(id);
        self.shaking = true;
        self.commits = self.commits.wrapping_add(1);
        id
    }

    pub fn stop_shaking(&mut self) {
        self.shaking = false;
    }

    /// Lands the coin `id`. Removal is by identity so overlapping flights never
    /// take each other's place; unknown ids change nothing.
    pub fn complete(&mut self, id: CoinId) -> Completion {
        let Some(pos) = self.in_flight.iter().position(|c| *c == id) else {
            return Completion::Unknown;
        };
        self.in_flight.remove(pos);

        let before = self.savings;
        self.savings = self.savings.saturating_add(1);
        let celebrate = celebrates(before);
        if celebrate {
            self.celebrating = true;
            self.celebrations = self.celebrations.wrapping_add(1);
        }
        Completion::Saved { celebrate }
    }

    pub fn dismiss_celebration(&mut self) {
        self.celebrating = false;
    }

    pub fn in_flight(&self) -> &[CoinId] {
        &self.in_flight
    }

    pub fn savings(&self) -> u32 {
        self.savings
    }

    pub fn is_shaking(&self) -> bool {
        self.shaking
    }

    pub fn is_celebrating(&self) -> bool {
        self.celebrating
    }

    /// Bumped on every commit; views re-arm the shake reset when it changes.
    pub fn commits(&self) -> u32 {
        self.commits
    }

    /// Bumped on every celebration; views re-arm the dismiss timer when it changes.
    pub fn celebrations(&self) -> u32 {
        self.celebrations
    }

    pub fn fill_level(&self) -> f64 {
        fill_level(self.savings)
    }

    pub fn fill_height_px(&self) -> f64 {
        self.fill_level() * FULL_FILL_PX
    }

    pub fn stacked_coins(&self) -> u32 {
        self.savings.min(JAR_CAPACITY)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConfettiPiece {
    pub x_pct: f64,
    pub y_pct: f64,
    pub rotate_deg: f64,
    pub color: &'static str,
}

/// Scatter targets for one burst. The same seed always yields the same burst.
pub fn confetti(seed: u64) -> Vec<ConfettiPiece> {
    let mut rng = SmallRng::seed_from_u64(seed);
    (0..CONFETTI_PIECES)
        .map(|i| ConfettiPiece {
            x_pct: rng.gen_range(0.0..100.0),
            y_pct: rng.gen_range(0.0..100.0),
            rotate_deg: rng.gen_range(0.0..360.0),
            color: CONFETTI_PALETTE[i % CONFETTI_PALETTE.len()],
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;
    use crate::engine::schedule::manual::ManualScheduler;
    use crate::engine::schedule::TimerScope;

    #[test]
    fn counter_equals_commits_regardless_of_landing_order() {
        let mut jar = SavingsJar::default();
        let ids: Vec<CoinId> = (0..12).map(|i| jar.commit(1_000 + i / 3)).collect();
        assert_eq!(jar.in_flight().len(), 12);

        for id in ids.iter().rev().step_by(2).chain(ids.iter().step_by(2)) {
            jar.complete(*id);
        }
        assert_eq!(jar.savings(), 12);
        assert!(jar.in_flight().is_empty());
    }

    #[test]
    fn same_millisecond_commits_get_distinct_ids() {
        let mut jar = SavingsJar::default();
        let a = jar.commit(42);
        let b = jar.commit(42);
        assert_ne!(a, b);
        assert_eq!(a.created_at(), b.created_at());
        assert_ne!(a.to_string(), b.to_string());
    }

    #[test]
    fn removal_is_by_identity() {
        let mut jar = SavingsJar::default();
        let first = jar.commit(1);
        let second = jar.commit(2);
        let third = jar.commit(3);

        jar.complete(second);
        assert_eq!(jar.in_flight(), &[first, third]);
    }

    #[test]
    fn completing_twice_or_an_unknown_id_is_a_no_op() {
        let mut jar = SavingsJar::default();
        let id = jar.commit(7);
        assert_eq!(jar.complete(id), Completion::Saved { celebrate: true });
        assert_eq!(jar.complete(id), Completion::Unknown);
        assert_eq!(jar.savings(), 1);

        let mut other = SavingsJar::default();
        let foreign = other.commit(99);
        let before = jar.clone();
        assert_eq!(jar.complete(foreign), Completion::Unknown);
        assert_eq!(jar, before);
    }

    #[test]
    fn celebrates_on_first_save_and_every_fifth() {
        let mut jar = SavingsJar::default();
        let mut celebrated_at = Vec::new();
        for t in 0..26 {
            let id = jar.commit(t);
            if let Completion::Saved { celebrate: true } = jar.complete(id) {
                celebrated_at.push(jar.savings());
            }
        }
        assert_eq!(celebrated_at, vec![1, 5, 10, 15, 20, 25]);
        assert_eq!(jar.celebrations(), 6);
    }

    #[test]
    fn a_saturated_counter_stops_celebrating() {
        let mut jar = SavingsJar {
            savings: u32::MAX,
            ..SavingsJar::default()
        };
        for t in 0..3 {
            let id = jar.commit(t);
            assert_eq!(jar.complete(id), Completion::Saved { celebrate: false });
        }
        assert_eq!(jar.savings(), u32::MAX);
        assert_eq!(jar.celebrations(), 0);
        assert!(!celebrates(u32::MAX));
    }

    #[test]
    fn celebration_policy_matches_the_trigger_formula() {
        for before in 0..200u32 {
            let after = before + 1;
            assert_eq!(celebrates(before), after == 1 || after % 5 == 0, "before={before}");
        }
    }

    #[test]
    fn fill_level_is_monotonic_and_clamps() {
        let mut last = 0.0;
        for savings in 0..60 {
            let level = fill_level(savings);
            assert!(level >= last);
            assert!(level <= 1.0);
            if savings >= JAR_CAPACITY {
                assert_eq!(level, 1.0);
            }
            last = level;
        }
        assert_eq!(fill_level(10), 0.5);
    }

    #[test]
    fn stack_and_height_track_the_counter() {
        let mut jar = SavingsJar::default();
        for t in 0..25 {
            let id = jar.commit(t);
            jar.complete(id);
        }
        assert_eq!(jar.stacked_coins(), JAR_CAPACITY);
        assert_eq!(jar.fill_height_px(), FULL_FILL_PX);
    }

    #[test]
    fn shake_and_celebration_clear_on_their_timers() {
        let clock = ManualScheduler::new();
        let mut scope = TimerScope::new(clock.clone());
        let jar = Rc::new(RefCell::new(SavingsJar::default()));

        let id = jar.borrow_mut().commit(0);
        let shaken = jar.clone();
        scope.after("shake-reset", 500, move || shaken.borrow_mut().stop_shaking());
        assert!(jar.borrow().is_shaking());

        clock.advance(500);
        assert!(!jar.borrow().is_shaking());

        clock.advance(700);
        let landed = jar.borrow_mut().complete(id);
        assert_eq!(landed, Completion::Saved { celebrate: true });
        let dismissed = jar.clone();
        scope.after("celebration-dismiss", 3_000, move || {
            dismissed.borrow_mut().dismiss_celebration()
        });
        assert!(jar.borrow().is_celebrating());

        clock.advance(2_999);
        assert!(jar.borrow().is_celebrating());
        clock.advance(1);
        assert!(!jar.borrow().is_celebrating());
    }

    #[test]
    fn no_updates_land_after_teardown() {
        let clock = ManualScheduler::new();
        let mut scope = TimerScope::new(clock.clone());
        let jar = Rc::new(RefCell::new(SavingsJar::default()));

        jar.borrow_mut().commit(0);
        let shaken = jar.clone();
        scope.after("shake-reset", 500, move || shaken.borrow_mut().stop_shaking());
        scope.close();

        let snapshot = jar.borrow().clone();
        clock.advance(10_000);
        assert_eq!(*jar.borrow(), snapshot);
    }

    #[test]
    fn confetti_is_seeded_and_in_bounds() {
        let burst = confetti(3);
        assert_eq!(burst.len(), CONFETTI_PIECES);
        assert_eq!(burst, confetti(3));
        assert_ne!(burst, confetti(4));
        for piece in &burst {
            assert!((0.0..100.0).contains(&piece.x_pct));
            assert!((0.0..100.0).contains(&piece.y_pct));
            assert!((0.0..360.0).contains(&piece.rotate_deg));
        }
        assert_eq!(burst[0].color, "#10b981");
        assert_eq!(burst[5].color, "#fbbf24");
    }
}
