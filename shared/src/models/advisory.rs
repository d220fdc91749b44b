//! Advisory bundle model

use serde::{Deserialize, Serialize};

/// Categorized recommendation lists for one forecast horizon.
///
/// Entries are fixed template strings with a leading emoji marker. Any list
/// may be empty except `general`, which always carries exactly one entry.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Advisory {
    /// Next ~24h, derived from the first day entry
    pub immediate: Vec<String>,
    /// Next 3 days
    pub short_term: Vec<String>,
    /// Full horizon
    pub long_term: Vec<String>,
    /// Crop-suitability hints
    pub crop_specific: Vec<String>,
    /// Overall risk framing
    pub general: Vec<String>,
}

impl Advisory {
    /// Total number of messages across all buckets
    pub fn message_count(&self) -> usize {
        self.immediate.len()
            + self.short_term.len()
            + self.long_term.len()
            + self.crop_specific.len()
            + self.general.len()
    }
}
