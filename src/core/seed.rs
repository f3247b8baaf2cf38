//! Seed data for a fresh board
//!
//! Categories and semesters are fixed for the lifetime of a store; the three
//! starter goals give a new board something to show before the user adds
//! their own.

use crate::core::models::{Category, Goal, GoalStatus, GoalType, Season, Semester};

/// The fixed board rows
#[must_use]
pub fn categories() -> Vec<Category> {
    vec![
        Category::new(
            "school".to_string(),
            "School".to_string(),
            "#3b82f6".to_string(),
            "book-open".to_string(),
        ),
        Category::new(
            "summer".to_string(),
            "Summer Programs".to_string(),
            "#f97316".to_string(),
            "sun".to_string(),
        ),
        Category::new(
            "extracurricular".to_string(),
            "Extracurriculars".to_string(),
            "#8b5cf6".to_string(),
            "music".to_string(),
        ),
        Category::new(
            "career".to_string(),
            "Career".to_string(),
            "#10b981".to_string(),
            "briefcase".to_string(),
        ),
        Category::new(
            "sports".to_string(),
            "Sports".to_string(),
            "#ef4444".to_string(),
            "trophy".to_string(),
        ),
    ]
}

/// The fixed board columns, in chronological display order
#[must_use]
pub fn semesters() -> Vec<Semester> {
    vec![
        Semester::new(
            "fall-2025".to_string(),
            "Fall 2025".to_string(),
            2025,
            Season::Fall,
        ),
        Semester::new(
            "spring-2026".to_string(),
            "Spring 2026".to_string(),
            2026,
            Season::Spring,
        ),
        Semester::new(
            "summer-2026".to_string(),
            "Summer 2026".to_string(),
            2026,
            Season::Summer,
        ),
        Semester::new(
            "fall-2026".to_string(),
            "Fall 2026".to_string(),
            2026,
            Season::Fall,
        ),
        Semester::new(
            "spring-2027".to_string(),
            "Spring 2027".to_string(),
            2027,
            Season::Spring,
        ),
        Semester::new(
            "summer-2027".to_string(),
            "Summer 2027".to_string(),
            2027,
            Season::Summer,
        ),
    ]
}

/// The three starter goals
#[must_use]
pub fn goals() -> Vec<Goal> {
    vec![
        Goal {
            id: "goal-1".to_string(),
            goal_type: GoalType::Course,
            title: "AP Computer Science A".to_string(),
            category: "school".to_string(),
            semester: "fall-2025".to_string(),
            description: Some("College Board AP course with the end-of-year exam".to_string()),
            source: None,
            color: None,
            icon: None,
            dependencies: Vec::new(),
            status: GoalStatus::Planned,
        },
        Goal {
            id: "goal-2".to_string(),
            goal_type: GoalType::Summer,
            title: "Robotics Summer Intensive".to_string(),
            category: "summer".to_string(),
            semester: "summer-2026".to_string(),
            description: Some("Four-week residential engineering program".to_string()),
            source: None,
            color: None,
            icon: None,
            dependencies: Vec::new(),
            status: GoalStatus::Planned,
        },
        Goal {
            id: "goal-3".to_string(),
            goal_type: GoalType::Sports,
            title: "Varsity Basketball".to_string(),
            category: "sports".to_string(),
            semester: "fall-2025".to_string(),
            description: None,
            source: None,
            color: None,
            icon: None,
            dependencies: Vec::new(),
            status: GoalStatus::InProgress,
        },
    ]
}
