//! Bill split simulator: two slider-bounded inputs and a share derived from them.

/// Inclusive slider bounds with a step size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SliderRange {
    pub min: u32,
    pub max: u32,
    pub step: u32,
}

impl SliderRange {
    /// Clamps `raw` into range and snaps it to the nearest step.
    /// Non-finite input falls back to the minimum.
    pub fn snap(&self, raw: f64) -> u32 {
        if !raw.is_finite() {
            return self.min;
        }
        let clamped = raw.clamp(f64::from(self.min), f64::from(self.max));
        let steps = ((clamped - f64::from(self.min)) / f64::from(self.step)).round() as u32;
        (self.min + steps * self.step).min(self.max)
    }

    /// Snaps the value of a range `<input>`.
    pub fn parse(&self, raw: &str) -> u32 {
        self.snap(raw.trim().parse::<f64>().unwrap_or(f64::NAN))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BillAmount(u32);

impl BillAmount {
    pub const RANGE: SliderRange = SliderRange {
        min: 100,
        max: 5_000,
        step: 50,
    };

    pub fn from_slider(raw: f64) -> Self {
        Self(Self::RANGE.snap(raw))
    }

    pub fn parse(raw: &str) -> Self {
        Self(Self::RANGE.parse(raw))
    }

    pub fn get(self) -> u32 {
        self.0
    }
}

impl Default for BillAmount {
    fn default() -> Self {
        Self(1_200)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RiderCount(u32);

impl RiderCount {
    pub const RANGE: SliderRange = SliderRange {
        min: 2,
        max: 10,
        step: 1,
    };

    /// Labels drawn under the rider slider.
    pub const TICKS: [u32; 5] = [2, 4, 6, 8, 10];

    pub fn from_slider(raw: f64) -> Self {
        Self(Self::RANGE.snap(raw))
    }

    pub fn parse(raw: &str) -> Self {
        Self(Self::RANGE.parse(raw))
    }

    pub fn get(self) -> u32 {
        self.0
    }
}

impl Default for RiderCount {
    fn default() -> Self {
        Self(4)
    }
}

/// `ceil(total / parts)` in whole currency units. `parts` of zero yields `total`.
pub fn split_ceil(total: u32, parts: u32) -> u32 {
    if parts == 0 {
        return total;
    }
    total.div_ceil(parts)
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SplitInputs {
    pub bill: BillAmount,
    pub riders: RiderCount,
}

impl SplitInputs {
    pub fn per_person_share(&self) -> u32 {
        split_ceil(self.bill.get(), self.riders.get())
    }
}

/// Gap between successive recipients popping in.
pub const RECIPIENT_STAGGER_MS: u32 = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecipientSlot {
    pub index: usize,
    /// Playing its exit animation; no longer counted as a recipient.
    pub leaving: bool,
}

impl RecipientSlot {
    /// Delay before this slot's animation starts. Entries are staggered by
    /// index; exits all start at once so they finish before the prune.
    pub fn animation_delay_ms(&self) -> u32 {
        if self.leaving {
            0
        } else {
            self.index as u32 * RECIPIENT_STAGGER_MS
        }
    }
}

/// Rendered recipient icons, including ones still animating out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecipientRoster {
    slots: Vec<RecipientSlot>,
}

impl RecipientRoster {
    pub fn new(count: usize) -> Self {
        Self {
            slots: (0..count)
                .map(|index| RecipientSlot {
                    index,
                    leaving: false,
                })
                .collect(),
        }
    }

    /// Marks slots at or past `count` as leaving and appends missing ones.
    /// A leaving slot that falls back inside `count` is revived.
    pub fn resize(&mut self, count: usize) {
        for slot in &mut self.slots {
            slot.leaving = slot.index >= count;
        }
        while self.slots.len() < count {
            let index = self.slots.len();
            self.slots.push(RecipientSlot {
                index,
                leaving: false,
            });
        }
    }

    /// Drops slots whose exit animation has finished.
    pub fn prune(&mut self) {
        self.slots.retain(|slot| !slot.leaving);
    }

    pub fn slots(&self) -> &[RecipientSlot] {
        &self.slots
    }

    pub fn active(&self) -> usize {
        self.slots.iter().filter(|slot| !slot.leaving).count()
    }
}

/// Inputs plus the recipients currently on screen. The share is never stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitSimulator {
    inputs: SplitInputs,
    roster: RecipientRoster,
}

impl Default for SplitSimulator {
    fn default() -> Self {
        let inputs = SplitInputs::default();
        Self {
            roster: RecipientRoster::new(inputs.riders.get() as usize),
            inputs,
        }
    }
}

impl SplitSimulator {
    pub fn inputs(&self) -> SplitInputs {
        self.inputs
    }

    pub fn share(&self) -> u32 {
        self.inputs.per_person_share()
    }

    pub fn roster(&self) -> &RecipientRoster {
        &self.roster
    }

    pub fn set_bill(&mut self, bill: BillAmount) {
        self.inputs.bill = bill;
    }

    pub fn set_riders(&mut self, riders: RiderCount) {
        self.inputs.riders = riders;
        self.roster.resize(riders.get() as usize);
    }

    pub fn prune_departed(&mut self) {
        self.roster.prune();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn share_rounds_up() {
        assert_eq!(split_ceil(1_200, 4), 300);
        assert_eq!(split_ceil(1_201, 4), 301);
        assert_eq!(split_ceil(100, 3), 34);
        assert_eq!(split_ceil(5_000, 10), 500);
    }

    #[test]
    fn share_is_ceiling_over_the_whole_input_space() {
        for bill in (100..=5_000).step_by(50) {
            for riders in 2..=10 {
                let mut sim = SplitSimulator::default();
                sim.set_bill(BillAmount::from_slider(f64::from(bill)));
                sim.set_riders(RiderCount::from_slider(f64::from(riders)));
                let expected = (f64::from(bill) / f64::from(riders)).ceil() as u32;
                assert_eq!(sim.share(), expected, "bill={bill} riders={riders}");
                assert_eq!(sim.roster().active(), riders as usize);
            }
        }
    }

    #[test]
    fn sliders_clamp_and_snap() {
        assert_eq!(BillAmount::from_slider(20.0).get(), 100);
        assert_eq!(BillAmount::from_slider(9_999.0).get(), 5_000);
        assert_eq!(BillAmount::from_slider(1_224.0).get(), 1_200);
        assert_eq!(BillAmount::from_slider(1_226.0).get(), 1_250);
        assert_eq!(BillAmount::parse("not a number").get(), 100);
        assert_eq!(RiderCount::from_slider(0.0).get(), 2);
        assert_eq!(RiderCount::from_slider(42.0).get(), 10);
        assert_eq!(RiderCount::parse(" 7 ").get(), 7);
        assert_eq!(RiderCount::from_slider(f64::INFINITY).get(), 2);
    }

    #[test]
    fn defaults_match_the_demo_scenario() {
        let sim = SplitSimulator::default();
        assert_eq!(sim.inputs().bill.get(), 1_200);
        assert_eq!(sim.inputs().riders.get(), 4);
        assert_eq!(sim.share(), 300);
        assert_eq!(sim.roster().slots().len(), 4);
    }

    #[test]
    fn share_follows_every_input_change() {
        let mut sim = SplitSimulator::default();
        sim.set_riders(RiderCount::from_slider(3.0));
        assert_eq!(sim.share(), 400);
        sim.set_bill(BillAmount::from_slider(1_000.0));
        assert_eq!(sim.share(), 334);
    }

    #[test]
    fn shrinking_keeps_departing_slots_until_pruned() {
        let mut sim = SplitSimulator::default();
        sim.set_riders(RiderCount::from_slider(2.0));

        let leaving: Vec<usize> = sim
            .roster()
            .slots()
            .iter()
            .filter(|s| s.leaving)
            .map(|s| s.index)
            .collect();
        assert_eq!(leaving, vec![2, 3]);
        assert_eq!(sim.roster().active(), 2);

        sim.prune_departed();
        assert_eq!(sim.roster().slots().len(), 2);
    }

    #[test]
    fn departing_slots_exit_before_the_prune() {
        let mut sim = SplitSimulator::default();
        sim.set_riders(RiderCount::from_slider(10.0));
        sim.prune_departed();
        assert_eq!(sim.roster().slots()[9].animation_delay_ms(), 450);

        sim.set_riders(RiderCount::from_slider(2.0));
        let leaving: Vec<&RecipientSlot> =
            sim.roster().slots().iter().filter(|s| s.leaving).collect();
        assert_eq!(leaving.len(), 8);
        for slot in leaving {
            assert_eq!(slot.animation_delay_ms(), 0, "slot {}", slot.index);
        }
        assert_eq!(sim.roster().slots()[1].animation_delay_ms(), 50);
    }

    #[test]
    fn regrowing_before_prune_revives_slots() {
        let mut roster = RecipientRoster::new(6);
        roster.resize(3);
        roster.resize(5);
        assert_eq!(roster.active(), 5);
        assert_eq!(roster.slots().len(), 6);
        assert!(roster.slots()[5].leaving);

        roster.prune();
        let indices: Vec<usize> = roster.slots().iter().map(|s| s.index).collect();
        assert_eq!(indices, vec![0, 1, 2, 3, 4]);
    }
}
