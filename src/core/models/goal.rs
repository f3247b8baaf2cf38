//! Goal model

use super::CellRef;
use serde::{Deserialize, Serialize};

/// Kind of planning item a goal represents
///
/// A tag only — every variant carries the same fields on [`Goal`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GoalType {
    /// An academic course
    Course,
    /// A summer program
    Summer,
    /// An extracurricular activity
    Extracurricular,
    /// A career target (internship, job shadow, certification)
    Career,
    /// An athletic commitment
    Sports,
}

impl GoalType {
    /// Default board category for goals of this type
    #[must_use]
    pub const fn default_category(self) -> &'static str {
        match self {
            Self::Course => "school",
            Self::Summer => "summer",
            Self::Extracurricular => "extracurricular",
            Self::Career => "career",
            Self::Sports => "sports",
        }
    }
}

impl std::fmt::Display for GoalType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let as_str = match self {
            Self::Course => "course",
            Self::Summer => "summer",
            Self::Extracurricular => "extracurricular",
            Self::Career => "career",
            Self::Sports => "sports",
        };
        write!(f, "{as_str}")
    }
}

/// Progress state of a goal
///
/// Freely settable — any status may change to any other.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GoalStatus {
    /// Not started yet
    #[default]
    Planned,
    /// Currently being worked on
    InProgress,
    /// Done
    Completed,
}

impl std::fmt::Display for GoalStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let as_str = match self {
            Self::Planned => "planned",
            Self::InProgress => "in-progress",
            Self::Completed => "completed",
        };
        write!(f, "{as_str}")
    }
}

/// Represents a single planning item placed on the board
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Goal {
    /// Unique identifier, immutable after creation (e.g., "goal-1")
    pub id: String,

    /// Kind of planning item
    pub goal_type: GoalType,

    /// Display title (non-empty; enforced at the input boundary)
    pub title: String,

    /// Category id determining the grid row
    pub category: String,

    /// Semester id determining the grid column
    pub semester: String,

    /// Optional longer description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Where the goal came from (e.g., a marketplace listing id)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,

    /// Optional display color override
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,

    /// Optional display icon override
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,

    /// Ids of goals this one builds on — carried but not interpreted
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub dependencies: Vec<String>,

    /// Progress state
    #[serde(default)]
    pub status: GoalStatus,
}

impl Goal {
    /// Materialize a draft into a goal under the given id
    #[must_use]
    pub fn from_draft(id: String, draft: GoalDraft) -> Self {
        Self {
            id,
            goal_type: draft.goal_type,
            title: draft.title,
            category: draft.category,
            semester: draft.semester,
            description: draft.description,
            source: draft.source,
            color: draft.color,
            icon: draft.icon,
            dependencies: Vec::new(),
            status: draft.status,
        }
    }

    /// The cell this goal currently occupies
    #[must_use]
    pub fn cell(&self) -> CellRef {
        CellRef::new(self.category.clone(), self.semester.clone())
    }

    /// Shallow-merge the set fields of a patch into this goal
    pub fn apply_patch(&mut self, patch: GoalPatch) {
        if let Some(goal_type) = patch.goal_type {
            self.goal_type = goal_type;
        }
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(category) = patch.category {
            self.category = category;
        }
        if let Some(semester) = patch.semester {
            self.semester = semester;
        }
        if let Some(description) = patch.description {
            self.description = Some(description);
        }
        if let Some(source) = patch.source {
            self.source = Some(source);
        }
        if let Some(color) = patch.color {
            self.color = Some(color);
        }
        if let Some(icon) = patch.icon {
            self.icon = Some(icon);
        }
        if let Some(dependencies) = patch.dependencies {
            self.dependencies = dependencies;
        }
        if let Some(status) = patch.status {
            self.status = status;
        }
    }
}

/// A goal record without an id, as collected from the creation form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GoalDraft {
    /// Kind of planning item
    pub goal_type: GoalType,
    /// Display title
    pub title: String,
    /// Target category id
    pub category: String,
    /// Target semester id
    pub semester: String,
    /// Optional longer description
    pub description: Option<String>,
    /// Where the goal came from
    pub source: Option<String>,
    /// Optional display color override
    pub color: Option<String>,
    /// Optional display icon override
    pub icon: Option<String>,
    /// Initial progress state
    pub status: GoalStatus,
}

impl GoalDraft {
    /// Create a draft with the required fields; metadata starts unset
    #[must_use]
    pub const fn new(
        title: String,
        goal_type: GoalType,
        category: String,
        semester: String,
    ) -> Self {
        Self {
            goal_type,
            title,
            category,
            semester,
            description: None,
            source: None,
            color: None,
            icon: None,
            status: GoalStatus::Planned,
        }
    }
}

/// Partial update applied to an existing goal
///
/// Only `Some` fields are merged; everything else is left untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GoalPatch {
    /// Replace the goal type
    pub goal_type: Option<GoalType>,
    /// Replace the title
    pub title: Option<String>,
    /// Replace the category id
    pub category: Option<String>,
    /// Replace the semester id
    pub semester: Option<String>,
    /// Replace the description
    pub description: Option<String>,
    /// Replace the source
    pub source: Option<String>,
    /// Replace the display color
    pub color: Option<String>,
    /// Replace the display icon
    pub icon: Option<String>,
    /// Replace the dependency list
    pub dependencies: Option<Vec<String>>,
    /// Replace the progress state
    pub status: Option<GoalStatus>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_goal() -> Goal {
        Goal::from_draft(
            "goal-9".to_string(),
            GoalDraft::new(
                "AP Chemistry".to_string(),
                GoalType::Course,
                "school".to_string(),
                "fall-2025".to_string(),
            ),
        )
    }

    #[test]
    fn test_from_draft() {
        let goal = sample_goal();

        assert_eq!(goal.id, "goal-9");
        assert_eq!(goal.title, "AP Chemistry");
        assert_eq!(goal.goal_type, GoalType::Course);
        assert_eq!(goal.status, GoalStatus::Planned);
        assert!(goal.description.is_none());
        assert!(goal.dependencies.is_empty());
    }

    #[test]
    fn test_cell() {
        let goal = sample_goal();
        let cell = goal.cell();

        assert_eq!(cell.category, "school");
        assert_eq!(cell.semester, "fall-2025");
    }

    #[test]
    fn test_apply_patch_only_set_fields() {
        let mut goal = sample_goal();
        goal.apply_patch(GoalPatch {
            status: Some(GoalStatus::Completed),
            ..Default::default()
        });

        assert_eq!(goal.status, GoalStatus::Completed);
        assert_eq!(goal.title, "AP Chemistry");
        assert_eq!(goal.category, "school");
        assert_eq!(goal.semester, "fall-2025");
    }

    #[test]
    fn test_apply_patch_placement() {
        let mut goal = sample_goal();
        goal.apply_patch(GoalPatch {
            category: Some("career".to_string()),
            semester: Some("spring-2026".to_string()),
            ..Default::default()
        });

        assert_eq!(goal.category, "career");
        assert_eq!(goal.semester, "spring-2026");
        assert_eq!(goal.status, GoalStatus::Planned);
    }

    #[test]
    fn test_default_category() {
        assert_eq!(GoalType::Course.default_category(), "school");
        assert_eq!(GoalType::Sports.default_category(), "sports");
        assert_eq!(GoalType::Career.default_category(), "career");
    }

    #[test]
    fn test_status_display() {
        assert_eq!(GoalStatus::Planned.to_string(), "planned");
        assert_eq!(GoalStatus::InProgress.to_string(), "in-progress");
        assert_eq!(GoalStatus::Completed.to_string(), "completed");
    }

    #[test]
    fn test_goal_toml_round_trip() {
        let mut goal = sample_goal();
        goal.description = Some("Honors track".to_string());

        let encoded = toml::to_string(&goal).expect("goal should serialize");
        let decoded: Goal = toml::from_str(&encoded).expect("goal should deserialize");
        assert_eq!(decoded, goal);
    }
}
