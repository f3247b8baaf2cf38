//! Report generation for board exports
//!
//! Renders the current board as a shareable document in Markdown or HTML,
//! by placeholder substitution into compiled-in templates.

pub mod formats;

use std::error::Error;
use std::path::Path;

use crate::core::board::BoardGrid;
use crate::core::profile::UserProfile;
use crate::core::store::GoalStore;

pub use formats::{HtmlReporter, MarkdownReporter, ReportFormat};

/// Data context for report generation
///
/// Aggregates everything a board report needs, providing a single source of
/// truth for templates.
#[derive(Debug, Clone)]
pub struct BoardContext<'a> {
    /// The store backing the board
    pub store: &'a GoalStore,
    /// The derived grid under the current filters
    pub grid: &'a BoardGrid,
    /// The student's profile
    pub profile: &'a UserProfile,
}

impl<'a> BoardContext<'a> {
    /// Create a new board context
    #[must_use]
    pub const fn new(store: &'a GoalStore, grid: &'a BoardGrid, profile: &'a UserProfile) -> Self {
        Self {
            store,
            grid,
            profile,
        }
    }

    /// The name to credit the board to
    #[must_use]
    pub fn owner_name(&self) -> &str {
        if self.profile.name.is_empty() {
            "Student"
        } else {
            &self.profile.name
        }
    }

    /// Number of goals on the grid
    #[must_use]
    pub fn goal_count(&self) -> usize {
        self.grid.goal_count()
    }

    /// Human-readable summary of the active filters
    #[must_use]
    pub fn filter_summary(&self) -> String {
        let filters = self.store.filters();
        format!(
            "category: {}, semester: {}",
            filters.category, filters.semester
        )
    }
}

/// Trait for report generators
pub trait ReportGenerator {
    /// Generate a report to a file
    ///
    /// # Errors
    /// Returns an error if report generation or file writing fails
    fn generate(&self, ctx: &BoardContext, output_path: &Path) -> Result<(), Box<dyn Error>>;

    /// Generate report content as a string
    ///
    /// # Errors
    /// Returns an error if report generation fails
    fn render(&self, ctx: &BoardContext) -> Result<String, Box<dyn Error>>;
}
