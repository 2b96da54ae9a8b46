//! Side-by-side compare selection
//!
//! At most `MAX_COMPARE` results, kept in selection order and keyed by
//! faculty id. The selection outlives the result set it was picked from.

use advisor_common::api::{FacultyId, SearchResult};

pub const MAX_COMPARE: usize = 3;

/// Outcome of `CompareSelection::toggle`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompareToggle {
    Added,
    Removed,
    /// Selection already holds `MAX_COMPARE` entries; nothing changed
    Full,
}

#[derive(Debug, Clone, Default)]
pub struct CompareSelection {
    selected: Vec<SearchResult>,
}

impl CompareSelection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle(&mut self, result: &SearchResult) -> CompareToggle {
        let id = result.faculty.id;
        if self.remove(id) {
            return CompareToggle::Removed;
        }
        if self.selected.len() >= MAX_COMPARE {
            tracing::debug!(faculty_id = id, "Compare selection full, ignoring add");
            return CompareToggle::Full;
        }
        self.selected.push(result.clone());
        CompareToggle::Added
    }

    /// Returns true if `id` was selected
    pub fn remove(&mut self, id: FacultyId) -> bool {
        let before = self.selected.len();
        self.selected.retain(|r| r.faculty.id != id);
        self.selected.len() != before
    }

    pub fn clear(&mut self) {
        self.selected.clear();
    }

    pub fn contains(&self, id: FacultyId) -> bool {
        self.selected.iter().any(|r| r.faculty.id == id)
    }

    pub fn len(&self) -> usize {
        self.selected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.selected.len() >= MAX_COMPARE
    }

    /// Comparing needs at least two entries
    pub fn can_compare(&self) -> bool {
        self.selected.len() >= 2
    }

    /// A card's compare toggle is disabled when the selection is full and
    /// the card is not part of it
    pub fn is_toggle_disabled(&self, id: FacultyId) -> bool {
        self.is_full() && !self.contains(id)
    }

    pub fn selected(&self) -> &[SearchResult] {
        &self.selected
    }
}
