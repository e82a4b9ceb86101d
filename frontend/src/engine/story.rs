//! The five-beat ride story shown on the How It Works page.

/// Which visual scene a phase renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoryBeat {
    Alone,
    Scan,
    Token,
    Match,
    Savings,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Phase {
    pub beat: StoryBeat,
    pub title: &'static str,
    pub description: &'static str,
}

pub static STORY: [Phase; 5] = [
    Phase {
        beat: StoryBeat::Alone,
        title: "Traveling Alone",
        description: "Ravi is looking for an auto. It's expensive alone.",
    },
    Phase {
        beat: StoryBeat::Scan,
        title: "AI Scan (500m)",
        description: "Spllit AI scans 500m radius for riders going to the same place.",
    },
    Phase {
        beat: StoryBeat::Token,
        title: "₹1 Token",
        description: "Ravi deposits ₹1 (Gold Coin) to confirm intent.",
    },
    Phase {
        beat: StoryBeat::Match,
        title: "The Match",
        description: "AI finds Priya nearby. Same route, same time.",
    },
    Phase {
        beat: StoryBeat::Savings,
        title: "Big Savings",
        description: "They share the ride and save 40% instantly!",
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::sequencer::PhaseSequencer;

    #[test]
    fn every_beat_appears_once_in_order() {
        let beats: Vec<StoryBeat> = STORY.iter().map(|p| p.beat).collect();
        assert_eq!(
            beats,
            vec![
                StoryBeat::Alone,
                StoryBeat::Scan,
                StoryBeat::Token,
                StoryBeat::Match,
                StoryBeat::Savings,
            ]
        );
    }

    #[test]
    fn story_wraps_back_to_the_first_beat() {
        let mut sequencer = PhaseSequencer::new(STORY.len());
        for _ in 0..STORY.len() {
            sequencer.tick();
        }
        assert_eq!(sequencer.select(&STORY).map(|p| p.beat), Some(StoryBeat::Alone));
    }
}
