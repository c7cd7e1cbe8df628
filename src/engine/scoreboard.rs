//! Score tallies across restarts within one session.
//!
//! Pure counters; the presentation layer reads them after each terminal
//! transition and resets them on the way back to the menu.

use serde::{Deserialize, Serialize};

use crate::engine::board::Side;

/// Snapshot of the three counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreCounts {
    pub circle_wins: u32,
    pub cross_wins: u32,
    pub draws: u32,
}

#[derive(Debug, Clone, Default)]
pub struct Scoreboard {
    counts: ScoreCounts,
}

impl Scoreboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_win(&mut self, side: Side) {
        match side {
            Side::Circle => self.counts.circle_wins += 1,
            Side::Cross => self.counts.cross_wins += 1,
        }
    }

    pub fn record_draw(&mut self) {
        self.counts.draws += 1;
    }

    pub fn counts(&self) -> ScoreCounts {
        self.counts
    }

    /// Zero all counters. The menu path calls this; restart does not.
    pub fn reset(&mut self) {
        self.counts = ScoreCounts::default();
    }
}
