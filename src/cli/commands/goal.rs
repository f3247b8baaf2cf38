//! Goal command handler
//!
//! Mutates a board document in place: load, apply one store operation, save.

use crate::args::GoalSubcommand;
use plan_board::boardfile::{parse_board_toml, write_board_toml};
use plan_board::error;
use plan_board::models::{CellRef, GoalDraft, GoalPatch, GoalType};
use plan_board::store::GoalStore;
use std::path::Path;

/// Dispatch goal subcommands
pub fn run(subcommand: GoalSubcommand) {
    match subcommand {
        GoalSubcommand::Add {
            file,
            title,
            goal_type,
            category,
            semester,
            description,
            status,
        } => {
            // Title validation happens here at the boundary, not in the store.
            if title.trim().is_empty() {
                eprintln!("✗ Goal title must not be blank.");
                std::process::exit(1);
            }

            let goal_type: GoalType = goal_type.into();
            let category =
                category.unwrap_or_else(|| goal_type.default_category().to_string());

            let mut store = load_or_exit(&file);
            let mut draft = GoalDraft::new(title.clone(), goal_type, category, semester);
            draft.description = description;
            draft.status = status.into();

            match store.add_goal(draft) {
                Ok(id) => {
                    save_or_exit(&file, &store);
                    println!("✓ Added goal '{title}' as {id}");
                }
                Err(e) => {
                    eprintln!("✗ {e}");
                    std::process::exit(1);
                }
            }
        }
        GoalSubcommand::Remove { file, id } => {
            let mut store = load_or_exit(&file);

            if store.remove_goal(&id) {
                save_or_exit(&file, &store);
                println!("✓ Removed {id}");
            } else {
                println!("✗ No goal with id '{id}'");
            }
        }
        GoalSubcommand::Update {
            file,
            id,
            title,
            goal_type,
            category,
            semester,
            description,
            status,
        } => {
            if title.as_deref().is_some_and(|t| t.trim().is_empty()) {
                eprintln!("✗ Goal title must not be blank.");
                std::process::exit(1);
            }

            let mut store = load_or_exit(&file);
            let patch = GoalPatch {
                title,
                goal_type: goal_type.map(Into::into),
                category,
                semester,
                description,
                status: status.map(Into::into),
                ..GoalPatch::default()
            };

            match store.update_goal(&id, patch) {
                Ok(true) => {
                    save_or_exit(&file, &store);
                    println!("✓ Updated {id}");
                }
                Ok(false) => println!("✗ No goal with id '{id}'"),
                Err(e) => {
                    eprintln!("✗ {e}");
                    std::process::exit(1);
                }
            }
        }
        GoalSubcommand::Move {
            file,
            id,
            category,
            semester,
        } => {
            let mut store = load_or_exit(&file);
            let target = CellRef::new(category, semester);

            match store.move_goal(&id, &target) {
                Ok(true) => {
                    save_or_exit(&file, &store);
                    println!("✓ Moved {id} to {target}");
                }
                Ok(false) => println!("✗ No goal with id '{id}'"),
                Err(e) => {
                    eprintln!("✗ {e}");
                    std::process::exit(1);
                }
            }
        }
    }
}

fn load_or_exit(file: &Path) -> GoalStore {
    match parse_board_toml(file) {
        Ok(store) => store,
        Err(e) => {
            error!("Failed to load board {}: {e}", file.display());
            eprintln!("✗ Failed to load {}: {e}", file.display());
            std::process::exit(1);
        }
    }
}

fn save_or_exit(file: &Path, store: &GoalStore) {
    if let Err(e) = write_board_toml(file, store.goals()) {
        error!("Failed to save board {}: {e}", file.display());
        eprintln!("✗ Failed to save {}: {e}", file.display());
        std::process::exit(1);
    }
}
