/// Sequence number of one submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Generation(u64);

impl Generation {
    pub fn get(self) -> u64 {
        self.0
    }
}

/// Orders submissions so that only the most recent one may update the display.
///
/// Each submit takes a new [`Generation`]. When an outcome arrives it is
/// accepted only if it belongs to the latest generation and that generation
/// has not already settled. Older outcomes are stale and must be dropped.
#[derive(Debug, Default)]
pub struct SubmissionTracker {
    next: u64,
    pending: Option<Generation>,
    latest: Option<Generation>,
}

impl SubmissionTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issues the generation for a new submission, superseding any in flight.
    pub fn begin(&mut self) -> Generation {
        let generation = Generation(self.next);
        self.next += 1;
        self.latest = Some(generation);
        self.pending = Some(generation);
        generation
    }

    /// Marks `generation` as settled.
    ///
    /// Returns `true` if its outcome should be applied.
    pub fn settle(&mut self, generation: Generation) -> bool {
        if self.pending == Some(generation) {
            self.pending = None;
            true
        } else {
            false
        }
    }

    /// Returns `true` while the latest submission has not settled.
    pub fn in_flight(&self) -> bool {
        self.pending.is_some()
    }

    /// The most recently issued generation, if any.
    pub fn latest(&self) -> Option<Generation> {
        self.latest
    }
}
