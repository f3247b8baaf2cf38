//! Marketplace command handler

use crate::args::GoalTypeArg;
use plan_board::boardfile::{parse_board_toml, write_board_toml};
use plan_board::error;
use plan_board::marketplace::{self, Listing};
use std::path::Path;

/// Run the marketplace command.
///
/// # Arguments
/// * `query` - Optional search text
/// * `listing_type` - Optional type restriction
/// * `add` - Optional listing id to add to a board document
/// * `file` - Board document for `--add`
/// * `semester` - Target semester id for `--add`
pub fn run(
    query: Option<&str>,
    listing_type: Option<GoalTypeArg>,
    add: Option<&str>,
    file: Option<&Path>,
    semester: Option<&str>,
) {
    if let Some(listing_id) = add {
        let (Some(file), Some(semester)) = (file, semester) else {
            eprintln!("✗ --add requires both --file and --semester.");
            std::process::exit(1);
        };
        add_listing(listing_id, file, semester);
        return;
    }

    let mut catalog = marketplace::listings();

    if let Some(arg) = listing_type {
        catalog = marketplace::of_type(&catalog, arg.into());
    }

    let hits = marketplace::search(&catalog, query.unwrap_or(""));

    if hits.is_empty() {
        println!("No listings match.");
        return;
    }

    println!("=== Marketplace ({} listings) ===\n", hits.len());
    for listing in &hits {
        print_listing(listing);
    }
}

fn add_listing(listing_id: &str, file: &Path, semester: &str) {
    let catalog = marketplace::listings();
    let Some(listing) = catalog.iter().find(|l| l.id == listing_id) else {
        eprintln!("✗ No marketplace listing with id '{listing_id}'");
        std::process::exit(1);
    };

    let mut store = match parse_board_toml(file) {
        Ok(store) => store,
        Err(e) => {
            error!("Failed to load board {}: {e}", file.display());
            eprintln!("✗ Failed to load {}: {e}", file.display());
            std::process::exit(1);
        }
    };

    match store.add_goal(listing.to_draft(semester.to_string())) {
        Ok(id) => {
            if let Err(e) = write_board_toml(file, store.goals()) {
                error!("Failed to save board {}: {e}", file.display());
                eprintln!("✗ Failed to save {}: {e}", file.display());
                std::process::exit(1);
            }
            println!("✓ Added '{}' as {id}", listing.title);
        }
        Err(e) => {
            eprintln!("✗ {e}");
            std::process::exit(1);
        }
    }
}

fn print_listing(listing: &Listing) {
    println!(
        "{} — {} [{}]",
        listing.title, listing.provider, listing.goal_type
    );
    println!("    {}", listing.description);
    println!("    {} · {}\n", listing.id, listing.url);
}
