//! Board grid derivation and drop handling
//!
//! Builds the category × semester grid from a store and translates drag-end
//! events into store mutations.

use serde::{Deserialize, Serialize};

use crate::core::filter;
use crate::core::models::{Category, CellRef, Semester};
use crate::core::store::{GoalStore, StoreError};

/// One grid cell with the ids of the goals it holds
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardCell {
    /// The (category, semester) pair this cell sits at
    pub cell: CellRef,
    /// Ids of the filtered goals in this cell, in insertion order
    pub goal_ids: Vec<String>,
}

/// One grid row: a category and its cell per semester
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardRow {
    /// The category labelling this row
    pub category: Category,
    /// One cell per semester, in column order
    pub cells: Vec<BoardCell>,
}

/// The complete category × semester grid under the current filters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardGrid {
    /// Column labels in display order
    pub semesters: Vec<Semester>,
    /// Rows in category seed order
    pub rows: Vec<BoardRow>,
}

impl BoardGrid {
    /// Derive the grid from the store's filtered goal list
    #[must_use]
    pub fn build(store: &GoalStore) -> Self {
        let filtered = store.filtered();

        let rows = store
            .categories()
            .iter()
            .map(|category| {
                let cells = store
                    .semesters()
                    .iter()
                    .map(|semester| {
                        let cell = CellRef::new(category.id.clone(), semester.id.clone());
                        let goal_ids = filter::goals_for_cell(&filtered, &cell)
                            .iter()
                            .map(|g| g.id.clone())
                            .collect();
                        BoardCell { cell, goal_ids }
                    })
                    .collect();
                BoardRow {
                    category: category.clone(),
                    cells,
                }
            })
            .collect();

        Self {
            semesters: store.semesters().to_vec(),
            rows,
        }
    }

    /// Total number of goals placed on the grid
    #[must_use]
    pub fn goal_count(&self) -> usize {
        self.rows
            .iter()
            .flat_map(|row| &row.cells)
            .map(|cell| cell.goal_ids.len())
            .sum()
    }
}

/// The payload of a drag-end event: which goal was dropped where
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DropEvent {
    /// Id of the dragged goal
    pub goal_id: String,
    /// Cell the goal was dropped on
    pub target: CellRef,
}

/// Apply a drop event to the store
///
/// Dropping a goal back onto its own cell is skipped before touching the
/// store; the move itself is an unconditional overwrite, so the guard is an
/// optimization rather than a correctness requirement.
///
/// # Returns
/// `Ok(true)` if the goal moved, `Ok(false)` if the drop was a no-op (goal
/// absent, or already in the target cell).
///
/// # Errors
/// Returns an error if the target cell references unknown ids.
pub fn apply_drop(store: &mut GoalStore, event: &DropEvent) -> Result<bool, StoreError> {
    if let Some(goal) = store.goal(&event.goal_id) {
        if goal.cell() == event.target {
            return Ok(false);
        }
    }
    store.move_goal(&event.goal_id, &event.target)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::filter::{FilterKey, FilterSelection};

    #[test]
    fn test_grid_shape() {
        let store = GoalStore::seeded();
        let grid = BoardGrid::build(&store);

        assert_eq!(grid.rows.len(), 5);
        for row in &grid.rows {
            assert_eq!(row.cells.len(), 6);
        }
        assert_eq!(grid.goal_count(), 3);
    }

    #[test]
    fn test_grid_respects_filters() {
        let mut store = GoalStore::seeded();
        store.set_filter(
            FilterKey::Category,
            FilterSelection::Only("sports".to_string()),
        );

        let grid = BoardGrid::build(&store);
        assert_eq!(grid.goal_count(), 1);
    }

    #[test]
    fn test_apply_drop_moves_goal() {
        let mut store = GoalStore::seeded();
        let event = DropEvent {
            goal_id: "goal-1".to_string(),
            target: CellRef::new("career".to_string(), "spring-2026".to_string()),
        };

        assert_eq!(apply_drop(&mut store, &event), Ok(true));
        let goal = store.goal("goal-1").unwrap();
        assert_eq!(goal.category, "career");
        assert_eq!(goal.semester, "spring-2026");
    }

    #[test]
    fn test_apply_drop_same_cell_is_guarded() {
        let mut store = GoalStore::seeded();
        let event = DropEvent {
            goal_id: "goal-1".to_string(),
            target: CellRef::new("school".to_string(), "fall-2025".to_string()),
        };

        assert_eq!(apply_drop(&mut store, &event), Ok(false));
        assert_eq!(store.goal("goal-1").unwrap().semester, "fall-2025");
    }

    #[test]
    fn test_apply_drop_absent_goal_is_noop() {
        let mut store = GoalStore::seeded();
        let event = DropEvent {
            goal_id: "goal-99".to_string(),
            target: CellRef::new("career".to_string(), "spring-2026".to_string()),
        };

        assert_eq!(apply_drop(&mut store, &event), Ok(false));
    }

    #[test]
    fn test_apply_drop_unknown_target_is_rejected() {
        let mut store = GoalStore::seeded();
        let event = DropEvent {
            goal_id: "goal-1".to_string(),
            target: CellRef::new("career".to_string(), "fall-2031".to_string()),
        };

        assert_eq!(
            apply_drop(&mut store, &event),
            Err(StoreError::UnknownSemester("fall-2031".to_string()))
        );
    }
}
