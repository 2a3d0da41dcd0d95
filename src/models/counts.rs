//! Run accounting
//!
//! `LocationCounts` is created fresh per location by the pagination walk;
//! `RunTotals` absorbs them one location at a time and is never decremented.

/// Per-location counters. Invariant: `chosen <= considered`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LocationCounts {
    /// Job cards seen across every page of the location.
    pub considered: u64,
    /// Cards that passed the criterion.
    pub chosen: u64,
}

/// Run-wide totals, zero at run start, monotonically incremented as each
/// location finishes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunTotals {
    pub considered: u64,
    pub chosen: u64,
}

impl RunTotals {
    /// Fold one finished location into the totals.
    pub fn absorb(&mut self, counts: &LocationCounts) {
        self.considered += counts.considered;
        self.chosen += counts.chosen;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn totals_are_the_exact_sum_over_locations() {
        let locations = [
            LocationCounts { considered: 25, chosen: 2 },
            LocationCounts { considered: 0, chosen: 0 },
            LocationCounts { considered: 7, chosen: 7 },
        ];

        let mut totals = RunTotals::default();
        for counts in &locations {
            totals.absorb(counts);
        }

        assert_eq!(totals.considered, 32);
        assert_eq!(totals.chosen, 9);
    }
}
