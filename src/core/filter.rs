//! Goal filtering and cell placement
//!
//! Pure derivation functions over a goal list. Cell membership is recomputed
//! from scratch on every query — goal counts are tens, not thousands, so
//! recomputation avoids cache-invalidation bookkeeping. An indexed
//! (category, semester) → goals mapping only becomes worthwhile if the
//! collection grows by orders of magnitude.

use crate::core::models::{CellRef, Goal};

/// One filter selector: everything, or a single id
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FilterSelection {
    /// No restriction
    #[default]
    All,
    /// Restrict to goals matching this id
    Only(String),
}

impl FilterSelection {
    /// Parse user input: the sentinel "all" clears the filter, anything else
    /// selects a specific id
    #[must_use]
    pub fn parse(value: &str) -> Self {
        if value.eq_ignore_ascii_case("all") {
            Self::All
        } else {
            Self::Only(value.to_string())
        }
    }

    /// Whether a goal carrying `id` passes this selector
    #[must_use]
    pub fn matches(&self, id: &str) -> bool {
        match self {
            Self::All => true,
            Self::Only(selected) => selected == id,
        }
    }
}

impl std::fmt::Display for FilterSelection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::All => write!(f, "all"),
            Self::Only(id) => write!(f, "{id}"),
        }
    }
}

/// Which of the two global filters an operation targets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterKey {
    /// The category (row) filter
    Category,
    /// The semester (column) filter
    Semester,
}

/// The two independent global filters, combined as a conjunction
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GoalFilters {
    /// Category selector
    pub category: FilterSelection,
    /// Semester selector
    pub semester: FilterSelection,
}

impl GoalFilters {
    /// Whether a goal passes both selectors
    #[must_use]
    pub fn matches(&self, goal: &Goal) -> bool {
        self.category.matches(&goal.category) && self.semester.matches(&goal.semester)
    }
}

/// Apply the global filters to a goal list
///
/// Order-preserving; every goal passing both selectors appears exactly once.
#[must_use]
pub fn filtered_goals<'a>(goals: &'a [Goal], filters: &GoalFilters) -> Vec<&'a Goal> {
    goals.iter().filter(|g| filters.matches(g)).collect()
}

/// Restrict an already-filtered list to the goals sitting in one cell
#[must_use]
pub fn goals_for_cell<'a>(goals: &[&'a Goal], cell: &CellRef) -> Vec<&'a Goal> {
    goals
        .iter()
        .filter(|g| cell.contains(&g.category, &g.semester))
        .copied()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::seed;

    #[test]
    fn test_all_matches_everything() {
        let selection = FilterSelection::All;
        assert!(selection.matches("school"));
        assert!(selection.matches("anything"));
    }

    #[test]
    fn test_only_matches_exact_id() {
        let selection = FilterSelection::Only("sports".to_string());
        assert!(selection.matches("sports"));
        assert!(!selection.matches("school"));
    }

    #[test]
    fn test_parse_all_sentinel() {
        assert_eq!(FilterSelection::parse("all"), FilterSelection::All);
        assert_eq!(FilterSelection::parse("ALL"), FilterSelection::All);
        assert_eq!(
            FilterSelection::parse("career"),
            FilterSelection::Only("career".to_string())
        );
    }

    #[test]
    fn test_identity_law() {
        // Both filters at All return the input list exactly.
        let goals = seed::goals();
        let filters = GoalFilters::default();

        let filtered = filtered_goals(&goals, &filters);
        assert_eq!(filtered.len(), goals.len());
        for (filtered_goal, goal) in filtered.iter().zip(goals.iter()) {
            assert_eq!(filtered_goal.id, goal.id);
        }
    }

    #[test]
    fn test_filters_are_a_conjunction() {
        let goals = seed::goals();
        let filters = GoalFilters {
            category: FilterSelection::Only("sports".to_string()),
            semester: FilterSelection::Only("summer-2026".to_string()),
        };

        // The sports goal is in fall-2025, so the conjunction excludes it.
        assert!(filtered_goals(&goals, &filters).is_empty());
    }

    #[test]
    fn test_filter_preserves_order() {
        let goals = seed::goals();
        let filters = GoalFilters {
            semester: FilterSelection::Only("fall-2025".to_string()),
            ..Default::default()
        };

        let filtered = filtered_goals(&goals, &filters);
        let ids: Vec<&str> = filtered.iter().map(|g| g.id.as_str()).collect();
        assert_eq!(ids, vec!["goal-1", "goal-3"]);
    }

    #[test]
    fn test_goals_for_cell() {
        let goals = seed::goals();
        let filters = GoalFilters::default();
        let filtered = filtered_goals(&goals, &filters);

        let cell = CellRef::new("sports".to_string(), "fall-2025".to_string());
        let in_cell = goals_for_cell(&filtered, &cell);

        assert_eq!(in_cell.len(), 1);
        assert_eq!(in_cell[0].title, "Varsity Basketball");
    }

    #[test]
    fn test_cells_partition_filtered_set() {
        // Every filtered goal lands in exactly one cell; the union of all
        // cells equals the filtered set.
        let goals = seed::goals();
        let filtered = filtered_goals(&goals, &GoalFilters::default());

        let mut seen = 0;
        for category in seed::categories() {
            for semester in seed::semesters() {
                let cell = CellRef::new(category.id.clone(), semester.id.clone());
                seen += goals_for_cell(&filtered, &cell).len();
            }
        }
        assert_eq!(seen, filtered.len());
    }
}
