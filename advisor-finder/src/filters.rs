//! Search filter state
//!
//! Thresholds mirror the home-screen sliders: minimum h-index 0..=100 and
//! result count 5..=20, both in steps of 5. Setters clamp and snap, so a
//! `Filters` value is always something the sliders could show.

/// Universities offered in the filter list
pub const KNOWN_UNIVERSITIES: [&str; 10] = [
    "MIT",
    "Stanford",
    "CMU",
    "UC Berkeley",
    "UIUC",
    "Cornell",
    "UW",
    "Georgia Tech",
    "Princeton",
    "UT Austin",
];

pub const MIN_H_INDEX_MAX: u32 = 100;
pub const RESULT_COUNT_MIN: u32 = 5;
pub const RESULT_COUNT_MAX: u32 = 20;
pub const SLIDER_STEP: u32 = 5;

pub const DEFAULT_RESULT_COUNT: u32 = 5;

/// Snap `value` to the nearest multiple of `SLIDER_STEP` within [lo, hi]
fn snap(value: u32, lo: u32, hi: u32) -> u32 {
    let clamped = value.max(lo).min(hi);
    let snapped = (clamped + SLIDER_STEP / 2) / SLIDER_STEP * SLIDER_STEP;
    snapped.max(lo).min(hi)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Filters {
    min_h_index: u32,
    result_count: u32,
    universities: Vec<String>,
}

impl Default for Filters {
    fn default() -> Self {
        Self {
            min_h_index: 0,
            result_count: DEFAULT_RESULT_COUNT,
            universities: Vec::new(),
        }
    }
}

impl Filters {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn min_h_index(&self) -> u32 {
        self.min_h_index
    }

    pub fn result_count(&self) -> u32 {
        self.result_count
    }

    pub fn universities(&self) -> &[String] {
        &self.universities
    }

    pub fn set_min_h_index(&mut self, value: u32) {
        self.min_h_index = snap(value, 0, MIN_H_INDEX_MAX);
    }

    pub fn set_result_count(&mut self, value: u32) {
        self.result_count = snap(value, RESULT_COUNT_MIN, RESULT_COUNT_MAX);
    }

    pub fn is_university_selected(&self, name: &str) -> bool {
        self.universities.iter().any(|u| u == name)
    }

    /// Add `name` if absent, remove it if present. Returns whether it is now selected.
    pub fn toggle_university(&mut self, name: &str) -> bool {
        if let Some(pos) = self.universities.iter().position(|u| u == name) {
            self.universities.remove(pos);
            false
        } else {
            self.universities.push(name.to_string());
            true
        }
    }

    pub fn clear_universities(&mut self) {
        self.universities.clear();
    }

    /// University filter as sent to the backend: `None` when nothing is selected
    pub fn universities_param(&self) -> Option<&[String]> {
        if self.universities.is_empty() {
            None
        } else {
            Some(&self.universities)
        }
    }
}
