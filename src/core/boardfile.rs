//! Board document parser
//!
//! Loads and saves a goal list as a TOML `[[goals]]` array. This is the
//! CLI's input format; the in-memory store itself never persists anything.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fs;
use std::path::Path;

use crate::core::models::Goal;
use crate::core::seed;
use crate::core::store::GoalStore;

/// On-disk shape of a board document
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct BoardDoc {
    /// The goals placed on the board
    #[serde(default)]
    goals: Vec<Goal>,
}

/// Parse a board document into a store over the seed categories/semesters
///
/// Every loaded goal passes the store's reference validation, so a document
/// pointing at unknown category or semester ids is rejected rather than
/// silently producing goals invisible to every cell.
///
/// # Errors
/// Returns an error if the file cannot be read, the TOML cannot be parsed,
/// or any goal fails reference validation.
pub fn parse_board_toml<P: AsRef<Path>>(path: P) -> Result<GoalStore, Box<dyn Error>> {
    let content = fs::read_to_string(&path)?;
    let doc: BoardDoc = toml::from_str(&content)?;

    let mut store = GoalStore::new(seed::categories(), seed::semesters());
    for goal in doc.goals {
        store.insert_goal(goal)?;
    }
    Ok(store)
}

/// Write a goal list as a board document
///
/// # Errors
/// Returns an error if serialization or the filesystem write fails.
pub fn write_board_toml<P: AsRef<Path>>(path: P, goals: &[Goal]) -> Result<(), Box<dyn Error>> {
    let doc = BoardDoc {
        goals: goals.to_vec(),
    };
    let toml_str = toml::to_string_pretty(&doc)?;
    fs::write(path, toml_str)?;
    Ok(())
}
