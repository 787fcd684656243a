//! Hit counting and phase advancement

/// Counts hits toward the next phase
#[derive(Debug, Clone)]
pub struct PhaseController {
    phase: u32,
    hits_this_phase: u32,
    hits_per_phase: u32,
}

impl PhaseController {
    pub fn new(hits_per_phase: u32) -> Self {
        Self {
            phase: 1,
            hits_this_phase: 0,
            hits_per_phase,
        }
    }

    pub fn phase(&self) -> u32 {
        self.phase
    }

    pub fn hits_this_phase(&self) -> u32 {
        self.hits_this_phase
    }

    pub fn record_hits(&mut self, count: u32) {
        self.hits_this_phase = self.hits_this_phase.saturating_add(count);
    }

    /// Advance the phase if enough hits landed. Called once per tick, after
    /// collisions. Returns the new phase number on a transition.
    pub fn evaluate(&mut self) -> Option<u32> {
        if self.hits_this_phase < self.hits_per_phase {
            return None;
        }
        self.hits_this_phase = 0;
        self.phase = self.phase.saturating_add(1);
        Some(self.phase)
    }
}
