//! Plain-text rendering for the terminal front end

use advisor_common::api::Explanation;

use super::{
    CompareColumn, DirectionMatches, DirectionView, ExplorePaperCard, MatchCard, PaperLine,
    ResultCard, TagChips,
};

fn tags_line(tags: &TagChips) -> Option<String> {
    if tags.is_empty() {
        None
    } else {
        Some(format!("    Tags: {}", tags.labels().join(" | ")))
    }
}

fn paper_line(paper: &PaperLine) -> String {
    let mut line = format!("      - {}", paper.title);
    if let Some(year) = paper.year {
        line.push_str(&format!(" ({})", year));
    }
    if let Some(citations) = paper.citations {
        line.push_str(&format!(" [{} cites]", citations));
    }
    line
}

pub fn result_card(card: &ResultCard) -> String {
    let mut lines = vec![format!(
        "#{} {}  {}% match ({})",
        card.rank,
        card.name,
        card.match_percent,
        card.band.label()
    )];
    if let Some(affiliation) = &card.affiliation {
        lines.push(format!("    {}", affiliation));
    }
    if let Some(badge) = card.badge {
        lines.push(format!("    [{}]", badge.label()));
    }
    lines.extend(tags_line(&card.tags));
    lines.push(format!(
        "    H-Index: {}  Papers: {}  Faculty id: {}",
        card.h_index, card.paper_count, card.faculty_id
    ));
    if let Some(url) = &card.profile_url {
        lines.push(format!("    Profile: {}", url));
    }
    if !card.papers.is_empty() {
        lines.push("    Top papers:".to_string());
        lines.extend(card.papers.iter().map(paper_line));
    }
    lines.join("\n")
}

pub fn result_list(cards: &[ResultCard]) -> String {
    cards
        .iter()
        .map(result_card)
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Loading placeholders
pub fn skeletons(count: usize) -> String {
    (0..count)
        .map(|_| "  ░░░░░░░░░░░░░░░░░░░░░░░░".to_string())
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn compare(columns: &[CompareColumn]) -> String {
    let mut blocks = vec![format!("Compare Faculty ({})", columns.len())];
    for col in columns {
        let mut lines = vec![format!(
            "== {}  {}% ({})",
            col.name,
            col.match_percent,
            col.band.label()
        )];
        if let Some(badge) = col.badge {
            lines.push(format!("    [{}]", badge.label()));
        }
        if let Some(affiliation) = &col.affiliation {
            lines.push(format!("    {}", affiliation));
        }
        lines.extend(tags_line(&col.tags));
        lines.push(format!("    H-Index: {}  Papers: {}", col.h_index, col.paper_count));
        if let Some(url) = &col.profile_url {
            lines.push(format!("    Semantic Scholar: {}", url));
        }
        if !col.papers.is_empty() {
            lines.push("    Top papers:".to_string());
            lines.extend(col.papers.iter().map(paper_line));
        }
        blocks.push(lines.join("\n"));
    }
    blocks.join("\n\n")
}

pub fn explanation(explanation: &Explanation) -> String {
    let mut lines = vec![format!("  Why this match: {}", explanation.explanation)];
    if let Some(breakdown) = &explanation.breakdown {
        for (label, item) in breakdown.axes() {
            lines.push(format!("    {} [{:?}]: {}", label, item.level, item.reason));
        }
    }
    lines.join("\n")
}

pub fn explore_paper(card: &ExplorePaperCard) -> String {
    let mut lines = vec![format!("[{}] {}", card.index, card.title)];

    let meta: Vec<String> = [
        card.faculty_name.clone(),
        card.year.map(|y| y.to_string()),
        card.venue.clone(),
    ]
    .into_iter()
    .flatten()
    .collect();
    if !meta.is_empty() {
        lines.push(format!("    {}", meta.join(" · ")));
    }
    if let Some(preview) = &card.abstract_preview {
        lines.push(format!("    {}", preview));
    }
    lines.join("\n")
}

pub fn explore_round(number: u32, prompt: &str, cards: &[ExplorePaperCard]) -> String {
    let mut blocks = vec![format!("Round {}", number)];
    blocks.extend(cards.iter().map(explore_paper));
    blocks.push(format!("> {}", prompt));
    blocks.join("\n\n")
}

fn match_card(card: &MatchCard) -> String {
    let mut lines = vec![format!("#{} {}  {}% match", card.rank, card.name, card.match_percent)];
    if let Some(affiliation) = &card.affiliation {
        lines.push(format!("    {}", affiliation));
    }
    lines.extend(tags_line(&card.tags));
    let mut stats = format!("    H-Index: {}  Papers: {}", card.h_index, card.paper_count);
    if let Some(url) = &card.profile_url {
        stats.push_str(&format!("  Profile: {}", url));
    }
    lines.push(stats);
    lines.push(format!("    Why this matches: {}", card.explanation));
    if let Some(key_paper) = &card.key_paper {
        lines.push(format!("    Key paper: {}", key_paper));
    }
    lines.join("\n")
}

pub fn direction(view: &DirectionView) -> String {
    let mut blocks = vec![format!(
        "Your Research Direction\n  {}\n  {}",
        view.summary, view.description
    )];
    match &view.matches {
        DirectionMatches::Matches(cards) => {
            blocks.push(format!("Matched Faculty ({})", cards.len()));
            blocks.extend(cards.iter().map(match_card));
        }
        DirectionMatches::NoMatches => {
            blocks.push("No matching faculty were found for this direction.".to_string());
        }
    }
    blocks.join("\n\n")
}
