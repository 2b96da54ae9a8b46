//! Presentation of backend results
//!
//! Pure mappings from wire types to view structs. Nothing here reorders
//! results: card order is backend order.

pub mod text;

use advisor_common::api::{ExploreFinish, ExplorePaper, FacultyMatch, Paper, SearchResult};

/// Placeholder cards shown while a search is in flight
pub const SKELETON_COUNT: usize = 3;

/// Shown for absent numeric fields
pub const NOT_AVAILABLE: &str = "N/A";

/// Tags shown on a result card before collapsing into "+N more"
pub const CARD_TAG_LIMIT: usize = 5;
/// Tags shown in compare columns and direction matches
pub const COMPACT_TAG_LIMIT: usize = 3;

pub const COMPARE_PAPER_LIMIT: usize = 3;
pub const COMPARE_TITLE_CHARS: usize = 60;
pub const ABSTRACT_PREVIEW_CHARS: usize = 200;
pub const VENUE_CHARS: usize = 30;

const HIGH_MATCH_THRESHOLD: f64 = 0.5;
const MEDIUM_MATCH_THRESHOLD: f64 = 0.35;

const JUNIOR_H_INDEX: u32 = 30;
const RISING_H_INDEX: u32 = 60;

/// Cut `s` to `max` characters, appending "..." when anything was dropped
pub fn truncate_chars(s: &str, max: usize) -> String {
    match s.char_indices().nth(max) {
        Some((byte_idx, _)) => format!("{}...", &s[..byte_idx]),
        None => s.to_string(),
    }
}

/// Similarity as a whole percentage
pub fn match_percent(similarity: f64) -> u32 {
    (similarity * 100.0).round().clamp(0.0, 100.0) as u32
}

pub fn profile_url(semantic_scholar_id: &str) -> String {
    format!("https://semanticscholar.org/author/{}", semantic_scholar_id)
}

fn or_not_available(value: Option<u32>) -> String {
    value
        .map(|v| v.to_string())
        .unwrap_or_else(|| NOT_AVAILABLE.to_string())
}

// ========================================
// Bands & Badges
// ========================================

/// Color band of a similarity score
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchBand {
    High,
    Medium,
    Low,
}

impl MatchBand {
    /// Strictly above 0.5 is High, strictly above 0.35 is Medium
    pub fn from_similarity(similarity: f64) -> Self {
        if similarity > HIGH_MATCH_THRESHOLD {
            MatchBand::High
        } else if similarity > MEDIUM_MATCH_THRESHOLD {
            MatchBand::Medium
        } else {
            MatchBand::Low
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            MatchBand::High => "high",
            MatchBand::Medium => "medium",
            MatchBand::Low => "low",
        }
    }
}

/// Career-stage badge derived from h-index
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeniorityBadge {
    Junior,
    RisingJunior,
    Established,
}

impl SeniorityBadge {
    /// Both boundaries are exclusive: an h-index of exactly 30 or 60 gets
    /// no badge.
    pub fn from_h_index(h_index: Option<u32>) -> Option<Self> {
        let h = h_index?;
        if h < JUNIOR_H_INDEX {
            Some(SeniorityBadge::Junior)
        } else if h > JUNIOR_H_INDEX && h < RISING_H_INDEX {
            Some(SeniorityBadge::RisingJunior)
        } else if h > RISING_H_INDEX {
            Some(SeniorityBadge::Established)
        } else {
            None
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SeniorityBadge::Junior => "Junior Faculty",
            SeniorityBadge::RisingJunior => "Rising Junior Faculty",
            SeniorityBadge::Established => "Established Faculty",
        }
    }
}

/// Research tags capped at a display limit
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TagChips {
    pub shown: Vec<String>,
    pub hidden: usize,
}

impl TagChips {
    pub fn new(tags: &[String], max_display: usize) -> Self {
        let shown: Vec<String> = tags.iter().take(max_display).cloned().collect();
        Self {
            hidden: tags.len() - shown.len(),
            shown,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.shown.is_empty()
    }

    /// Chip labels, ending with "+N more" when tags were hidden
    pub fn labels(&self) -> Vec<String> {
        let mut labels = self.shown.clone();
        if self.hidden > 0 {
            labels.push(format!("+{} more", self.hidden));
        }
        labels
    }
}

// ========================================
// Search Result Cards
// ========================================

#[derive(Debug, Clone, PartialEq)]
pub struct PaperLine {
    pub title: String,
    pub year: Option<i32>,
    /// Present only for a positive citation count
    pub citations: Option<u32>,
}

impl PaperLine {
    fn from_paper(paper: &Paper, title_chars: Option<usize>) -> Self {
        let title = match title_chars {
            Some(max) => truncate_chars(&paper.title, max),
            None => paper.title.clone(),
        };
        Self {
            title,
            year: paper.year,
            citations: paper.citation_count.filter(|c| *c > 0),
        }
    }
}

/// One ranked search result as shown in the result list
#[derive(Debug, Clone, PartialEq)]
pub struct ResultCard {
    /// 1-based position in backend order
    pub rank: usize,
    pub faculty_id: i64,
    pub name: String,
    pub affiliation: Option<String>,
    pub match_percent: u32,
    pub band: MatchBand,
    pub badge: Option<SeniorityBadge>,
    pub tags: TagChips,
    pub h_index: String,
    pub paper_count: String,
    pub profile_url: Option<String>,
    pub papers: Vec<PaperLine>,
}

impl ResultCard {
    pub fn from_result(rank: usize, result: &SearchResult) -> Self {
        let faculty = &result.faculty;
        Self {
            rank,
            faculty_id: faculty.id,
            name: faculty.name.clone(),
            affiliation: faculty.affiliation.clone(),
            match_percent: match_percent(result.similarity),
            band: MatchBand::from_similarity(result.similarity),
            badge: SeniorityBadge::from_h_index(faculty.h_index),
            tags: TagChips::new(&faculty.research_tags, CARD_TAG_LIMIT),
            h_index: or_not_available(faculty.h_index),
            paper_count: or_not_available(faculty.paper_count),
            profile_url: faculty.semantic_scholar_id.as_deref().map(profile_url),
            papers: result
                .papers
                .iter()
                .map(|p| PaperLine::from_paper(p, None))
                .collect(),
        }
    }
}

/// Cards for a whole result list, ranked from 1
pub fn result_cards(results: &[SearchResult]) -> Vec<ResultCard> {
    results
        .iter()
        .enumerate()
        .map(|(i, r)| ResultCard::from_result(i + 1, r))
        .collect()
}

/// One column of the side-by-side compare view
#[derive(Debug, Clone, PartialEq)]
pub struct CompareColumn {
    pub name: String,
    pub affiliation: Option<String>,
    pub match_percent: u32,
    pub band: MatchBand,
    pub badge: Option<SeniorityBadge>,
    pub tags: TagChips,
    pub h_index: String,
    pub paper_count: String,
    pub profile_url: Option<String>,
    pub papers: Vec<PaperLine>,
}

impl CompareColumn {
    pub fn from_result(result: &SearchResult) -> Self {
        let faculty = &result.faculty;
        Self {
            name: faculty.name.clone(),
            affiliation: faculty.affiliation.clone(),
            match_percent: match_percent(result.similarity),
            band: MatchBand::from_similarity(result.similarity),
            badge: SeniorityBadge::from_h_index(faculty.h_index),
            tags: TagChips::new(&faculty.research_tags, COMPACT_TAG_LIMIT),
            h_index: or_not_available(faculty.h_index),
            paper_count: or_not_available(faculty.paper_count),
            profile_url: faculty.semantic_scholar_id.as_deref().map(profile_url),
            papers: result
                .papers
                .iter()
                .take(COMPARE_PAPER_LIMIT)
                .map(|p| PaperLine::from_paper(p, Some(COMPARE_TITLE_CHARS)))
                .collect(),
        }
    }
}

pub fn compare_columns(selected: &[SearchResult]) -> Vec<CompareColumn> {
    selected.iter().map(CompareColumn::from_result).collect()
}

// ========================================
// Exploration
// ========================================

/// A paper in the current exploration round
#[derive(Debug, Clone, PartialEq)]
pub struct ExplorePaperCard {
    /// 1-based position within the round
    pub index: usize,
    pub title: String,
    pub faculty_name: Option<String>,
    pub year: Option<i32>,
    pub venue: Option<String>,
    /// Cut to 200 characters, ending in `...` when shortened
    pub abstract_preview: Option<String>,
}

impl ExplorePaperCard {
    pub fn from_paper(index: usize, paper: &ExplorePaper) -> Self {
        Self {
            index,
            title: paper.title.clone(),
            faculty_name: paper.faculty_name.clone(),
            year: paper.year,
            venue: paper.venue.as_deref().map(|v| truncate_chars(v, VENUE_CHARS)),
            abstract_preview: paper
                .abstract_text
                .as_deref()
                .map(|a| truncate_chars(a, ABSTRACT_PREVIEW_CHARS)),
        }
    }
}

pub fn explore_paper_cards(papers: &[ExplorePaper]) -> Vec<ExplorePaperCard> {
    papers
        .iter()
        .enumerate()
        .map(|(i, p)| ExplorePaperCard::from_paper(i + 1, p))
        .collect()
}

/// A faculty member matched to the synthesized direction
#[derive(Debug, Clone, PartialEq)]
pub struct MatchCard {
    pub rank: usize,
    pub name: String,
    pub affiliation: Option<String>,
    pub match_percent: u32,
    pub tags: TagChips,
    pub h_index: String,
    pub paper_count: String,
    pub profile_url: Option<String>,
    pub explanation: String,
    pub key_paper: Option<String>,
}

impl MatchCard {
    pub fn from_match(rank: usize, m: &FacultyMatch) -> Self {
        let faculty = &m.faculty;
        Self {
            rank,
            name: faculty.name.clone(),
            affiliation: faculty.affiliation.clone(),
            match_percent: match_percent(m.similarity),
            tags: TagChips::new(&faculty.research_tags, COMPACT_TAG_LIMIT),
            h_index: or_not_available(faculty.h_index),
            paper_count: or_not_available(faculty.paper_count),
            profile_url: faculty.semantic_scholar_id.as_deref().map(profile_url),
            explanation: m.explanation.clone(),
            key_paper: m.key_paper.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum DirectionMatches {
    Matches(Vec<MatchCard>),
    /// Zero matches is a normal outcome, not an error
    NoMatches,
}

/// Final view of a finished exploration
#[derive(Debug, Clone, PartialEq)]
pub struct DirectionView {
    pub summary: String,
    pub description: String,
    pub matches: DirectionMatches,
}

impl DirectionView {
    pub fn from_finish(finish: &ExploreFinish) -> Self {
        let matches = if finish.faculty_matches.is_empty() {
            DirectionMatches::NoMatches
        } else {
            DirectionMatches::Matches(
                finish
                    .faculty_matches
                    .iter()
                    .enumerate()
                    .map(|(i, m)| MatchCard::from_match(i + 1, m))
                    .collect(),
            )
        };
        Self {
            summary: finish.direction_summary.clone(),
            description: finish.direction_description.clone(),
            matches,
        }
    }
}
