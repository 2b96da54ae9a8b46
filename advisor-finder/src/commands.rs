//! Subcommand handlers for the terminal front end

use std::io::Write;
use std::path::Path;

use advisor_common::api::FacultyId;
use advisor_finder::explore::{ActionOutcome, ExploreState, Explorer};
use advisor_finder::render::{self, text, DirectionView};
use advisor_finder::compare::{CompareToggle, MAX_COMPARE};
use advisor_finder::search::{SearchScreen, SearchView, EXPLAIN_FAILED};
use advisor_finder::{resources as guide, AdvisorBackend, ApiClient};
use anyhow::{anyhow, Result};
use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};

use crate::FilterArgs;

fn apply_filters(screen: &mut SearchScreen, args: &FilterArgs) {
    let filters = screen.filters_mut();
    filters.set_result_count(args.limit);
    filters.set_min_h_index(args.min_h_index);
    for university in &args.universities {
        if !filters.is_university_selected(university) {
            filters.toggle_university(university);
        }
    }
}

/// Print the screen's view; an error view becomes the command's error
fn print_view(view: SearchView) -> Result<()> {
    match view {
        SearchView::Idle => {}
        SearchView::Loading { skeletons } => println!("{}", text::skeletons(skeletons)),
        SearchView::Error(message) => return Err(anyhow!(message)),
        SearchView::Empty {
            echo,
            suggestions,
            examples,
        } => {
            println!("No faculty found matching your search");
            if let Some(echo) = echo {
                println!("  \"{}\"", echo);
            }
            println!("\nSuggestions:");
            for suggestion in suggestions {
                println!("  • {}", suggestion);
            }
            println!("\nTry these searches:");
            for example in examples {
                println!("  advisor-finder search \"{}\"", example);
            }
        }
        SearchView::Results(cards) => println!("{}", text::result_list(&cards)),
    }
    Ok(())
}

/// Pick results for comparison and print the side-by-side view
fn print_compare(screen: &mut SearchScreen, ids: &[FacultyId]) {
    if ids.is_empty() {
        return;
    }

    for &id in ids {
        match screen.toggle_compare(id) {
            Some(CompareToggle::Added) => {}
            Some(CompareToggle::Removed) => {
                eprintln!("Faculty {} was listed twice; left out of the comparison", id)
            }
            Some(CompareToggle::Full) => {
                eprintln!("Compare holds at most {} faculty; skipping {}", MAX_COMPARE, id)
            }
            None => eprintln!("Faculty {} is not in these results; skipping", id),
        }
    }

    match screen.compare_view() {
        Some(columns) => println!("\n{}", text::compare(&columns)),
        None => eprintln!("Select at least 2 faculty from the results to compare."),
    }
}

pub async fn search(client: &ApiClient, query: String, filters: &FilterArgs) -> Result<()> {
    let mut screen = SearchScreen::new();
    screen.set_query(query);
    apply_filters(&mut screen, filters);

    screen.search(client).await;
    print_view(screen.view())?;
    print_compare(&mut screen, &filters.compare);
    Ok(())
}

pub async fn upload(client: &ApiClient, file: &Path, filters: &FilterArgs) -> Result<()> {
    let mut screen = SearchScreen::new();
    apply_filters(&mut screen, filters);

    screen.upload(client, file).await;
    if let Some(interests) = screen.extracted_interests() {
        println!("Extracted interests: {}\n", interests);
    }
    print_view(screen.view())?;
    print_compare(&mut screen, &filters.compare);
    Ok(())
}

pub async fn explain(client: &ApiClient, faculty_id: FacultyId, interests: &str) -> Result<()> {
    match client.get_explanation(interests, faculty_id).await {
        Ok(explanation) => {
            println!("{}", text::explanation(&explanation));
            Ok(())
        }
        Err(e) => {
            tracing::debug!(error = %e, "Explain command failed");
            Err(anyhow!(e.user_message(EXPLAIN_FAILED)))
        }
    }
}

pub fn resources() {
    println!("{}", guide::render_text());
}

// ========================================
// Interactive exploration
// ========================================

const EXPLORE_HELP: &str =
    "Type a response and press Enter. Commands: :finish (when ready), :reset, :quit";

fn prompt(label: &str) {
    print!("{}", label);
    let _ = std::io::stdout().flush();
}

async fn read_line(lines: &mut Lines<BufReader<Stdin>>) -> Result<Option<String>> {
    Ok(lines.next_line().await?)
}

fn print_round(explorer: &Explorer) {
    if let Some(round) = explorer.state().round() {
        let cards = render::explore_paper_cards(&round.papers);
        println!("\n{}", text::explore_round(round.number, &round.prompt, &cards));
        if matches!(explorer.state(), ExploreState::Ready(_)) {
            println!("\nYour direction is focused enough. Type :finish to see matched faculty.");
        }
    }
}

/// Why `:finish` did nothing in `state`
fn finish_skipped_message(state: &ExploreState) -> &'static str {
    match state {
        ExploreState::Finished { .. } => {
            "Exploration already finished. Type :reset to explore again."
        }
        _ => "Not ready yet. Keep responding to narrow your direction.",
    }
}

fn report_failure(explorer: &Explorer) {
    if let Some(error) = explorer.error() {
        eprintln!("{}", error);
    }
}

/// Drive an `Explorer` from stdin until `:quit` or end of input
pub async fn explore(backend: &dyn AdvisorBackend, initial_interest: String) -> Result<()> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut explorer = Explorer::new();
    explorer.set_interest(initial_interest);

    println!("{}", EXPLORE_HELP);

    loop {
        if matches!(explorer.state(), ExploreState::Start) {
            if explorer.interest().trim().is_empty() {
                prompt("\nWhat are you interested in? ");
                let Some(line) = read_line(&mut lines).await? else {
                    break;
                };
                if line.trim() == ":quit" {
                    break;
                }
                explorer.set_interest(line);
            }

            match explorer.start(backend).await {
                ActionOutcome::Applied => print_round(&explorer),
                ActionOutcome::Failed => {
                    report_failure(&explorer);
                    explorer.set_interest("");
                }
                ActionOutcome::Skipped => {}
            }
            continue;
        }

        if matches!(explorer.state(), ExploreState::Finished { .. }) {
            prompt("\n:reset to explore again, :quit to exit > ");
        } else {
            prompt("\n> ");
        }

        let Some(line) = read_line(&mut lines).await? else {
            break;
        };

        match line.trim() {
            ":quit" => break,
            ":reset" => {
                explorer.reset();
            }
            ":finish" => match explorer.finish(backend).await {
                ActionOutcome::Applied => {
                    if let Some(result) = explorer.state().result() {
                        println!("\n{}", text::direction(&DirectionView::from_finish(result)));
                    }
                }
                ActionOutcome::Failed => report_failure(&explorer),
                ActionOutcome::Skipped => {
                    println!("{}", finish_skipped_message(explorer.state()));
                }
            },
            _ => {
                explorer.set_response(line);
                match explorer.respond(backend).await {
                    ActionOutcome::Applied => print_round(&explorer),
                    ActionOutcome::Failed => report_failure(&explorer),
                    ActionOutcome::Skipped => println!("{}", EXPLORE_HELP),
                }
            }
        }
    }

    Ok(())
}
