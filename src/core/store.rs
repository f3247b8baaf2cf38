//! Goal store
//!
//! The single mutable collection behind a board: goals plus the two global
//! filters. The store is owned by the composition root and passed down by
//! reference; exclusive `&mut` access is what serializes mutations — there
//! is no shared-state locking and no design for concurrent writers.

use thiserror::Error;

use crate::core::filter::{self, FilterKey, FilterSelection, GoalFilters};
use crate::core::models::{Category, CellRef, Goal, GoalDraft, GoalPatch, Semester};
use crate::core::seed;

/// Errors raised by store mutations
///
/// Mutating a goal id that does not exist is a benign no-op, not an error;
/// these variants cover reference validation only.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    /// A goal referenced a category id that is not seeded
    #[error("unknown category id: '{0}'")]
    UnknownCategory(String),

    /// A goal referenced a semester id that is not seeded
    #[error("unknown semester id: '{0}'")]
    UnknownSemester(String),

    /// An inserted goal reused an existing id
    #[error("duplicate goal id: '{0}'")]
    DuplicateGoal(String),
}

/// In-memory collection of goals, fixed categories/semesters, and filters
#[derive(Debug, Clone)]
pub struct GoalStore {
    categories: Vec<Category>,
    semesters: Vec<Semester>,
    goals: Vec<Goal>,
    filters: GoalFilters,
    next_id: u64,
}

impl GoalStore {
    /// Create an empty store over the given categories and semesters
    #[must_use]
    pub fn new(categories: Vec<Category>, semesters: Vec<Semester>) -> Self {
        Self {
            categories,
            semesters,
            goals: Vec::new(),
            filters: GoalFilters::default(),
            next_id: 1,
        }
    }

    /// Create a store with the seed categories, semesters, and starter goals
    ///
    /// # Panics
    /// Panics if the compiled-in seed data is internally inconsistent. This
    /// should never happen in practice since the seeds are covered by tests.
    #[must_use]
    pub fn seeded() -> Self {
        let mut store = Self::new(seed::categories(), seed::semesters());
        for goal in seed::goals() {
            store
                .insert_goal(goal)
                .expect("seed goals reference seed categories and semesters");
        }
        store
    }

    /// Add a new goal from a draft, assigning the next generated id
    ///
    /// The goal is appended, so insertion order is display order within a
    /// cell.
    ///
    /// # Errors
    /// Returns an error if the draft's category or semester id is unknown.
    pub fn add_goal(&mut self, draft: GoalDraft) -> Result<String, StoreError> {
        self.check_placement(&draft.category, &draft.semester)?;

        let id = format!("goal-{}", self.next_id);
        self.next_id += 1;
        self.goals.push(Goal::from_draft(id.clone(), draft));
        Ok(id)
    }

    /// Insert a fully-formed goal (seed and board-document path)
    ///
    /// Advances the id counter past any numeric `goal-<n>` id so later
    /// `add_goal` calls cannot collide.
    ///
    /// # Errors
    /// Returns an error if the goal's category or semester id is unknown, or
    /// if a goal with the same id already exists.
    pub fn insert_goal(&mut self, goal: Goal) -> Result<(), StoreError> {
        self.check_placement(&goal.category, &goal.semester)?;
        if self.goal(&goal.id).is_some() {
            return Err(StoreError::DuplicateGoal(goal.id));
        }

        if let Some(n) = goal
            .id
            .strip_prefix("goal-")
            .and_then(|suffix| suffix.parse::<u64>().ok())
        {
            self.next_id = self.next_id.max(n + 1);
        }
        self.goals.push(goal);
        Ok(())
    }

    /// Remove the goal with the given id
    ///
    /// # Returns
    /// `true` if a goal was removed, `false` if no goal had that id.
    pub fn remove_goal(&mut self, id: &str) -> bool {
        if let Some(pos) = self.goals.iter().position(|g| g.id == id) {
            self.goals.remove(pos);
            true
        } else {
            false
        }
    }

    /// Shallow-merge a patch into the goal with the given id
    ///
    /// # Returns
    /// `Ok(true)` if a goal was updated, `Ok(false)` if no goal had that id.
    ///
    /// # Errors
    /// Returns an error if the patch carries an unknown category or semester
    /// id; the goal is left untouched in that case.
    pub fn update_goal(&mut self, id: &str, patch: GoalPatch) -> Result<bool, StoreError> {
        if let Some(category) = &patch.category {
            if self.category(category).is_none() {
                return Err(StoreError::UnknownCategory(category.clone()));
            }
        }
        if let Some(semester) = &patch.semester {
            if self.semester(semester).is_none() {
                return Err(StoreError::UnknownSemester(semester.clone()));
            }
        }

        match self.goals.iter_mut().find(|g| g.id == id) {
            Some(goal) => {
                goal.apply_patch(patch);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Move a goal to the given cell
    ///
    /// Exactly equivalent to `update_goal` with the category and semester
    /// fields set; this is the mutation a drag-and-drop action lands on.
    ///
    /// # Returns
    /// `Ok(true)` if a goal was moved, `Ok(false)` if no goal had that id.
    ///
    /// # Errors
    /// Returns an error if the target cell references unknown ids.
    pub fn move_goal(&mut self, id: &str, cell: &CellRef) -> Result<bool, StoreError> {
        self.update_goal(
            id,
            GoalPatch {
                category: Some(cell.category.clone()),
                semester: Some(cell.semester.clone()),
                ..GoalPatch::default()
            },
        )
    }

    /// Set one of the two global filters
    pub fn set_filter(&mut self, key: FilterKey, selection: FilterSelection) {
        match key {
            FilterKey::Category => self.filters.category = selection,
            FilterKey::Semester => self.filters.semester = selection,
        }
    }

    /// All goals in insertion order
    #[must_use]
    pub fn goals(&self) -> &[Goal] {
        &self.goals
    }

    /// Goals passing the current filters, in insertion order
    #[must_use]
    pub fn filtered(&self) -> Vec<&Goal> {
        filter::filtered_goals(&self.goals, &self.filters)
    }

    /// Look up a goal by id
    #[must_use]
    pub fn goal(&self, id: &str) -> Option<&Goal> {
        self.goals.iter().find(|g| g.id == id)
    }

    /// Look up a category by id
    #[must_use]
    pub fn category(&self, id: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.id == id)
    }

    /// Look up a semester by id
    #[must_use]
    pub fn semester(&self, id: &str) -> Option<&Semester> {
        self.semesters.iter().find(|s| s.id == id)
    }

    /// The fixed board rows
    #[must_use]
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// The fixed board columns
    #[must_use]
    pub fn semesters(&self) -> &[Semester] {
        &self.semesters
    }

    /// The current global filters
    #[must_use]
    pub const fn filters(&self) -> &GoalFilters {
        &self.filters
    }

    fn check_placement(&self, category: &str, semester: &str) -> Result<(), StoreError> {
        if self.category(category).is_none() {
            return Err(StoreError::UnknownCategory(category.to_string()));
        }
        if self.semester(semester).is_none() {
            return Err(StoreError::UnknownSemester(semester.to_string()));
        }
        Ok(())
    }
}

impl Default for GoalStore {
    fn default() -> Self {
        Self::seeded()
    }
}
