//! Integration tests for the goal store and filtering laws

use plan_board::filter::{self, FilterKey, FilterSelection, GoalFilters};
use plan_board::models::{CellRef, Goal, GoalDraft, GoalPatch, GoalStatus, GoalType};
use plan_board::store::{GoalStore, StoreError};

fn draft(title: &str, goal_type: GoalType, category: &str, semester: &str) -> GoalDraft {
    GoalDraft::new(
        title.to_string(),
        goal_type,
        category.to_string(),
        semester.to_string(),
    )
}

#[test]
fn test_filtered_goals_is_a_subset_respecting_both_predicates() {
    let mut store = GoalStore::seeded();
    store
        .add_goal(draft(
            "Internship Applications",
            GoalType::Career,
            "career",
            "spring-2026",
        ))
        .unwrap();

    let filters = GoalFilters {
        category: FilterSelection::Only("career".to_string()),
        semester: FilterSelection::Only("spring-2026".to_string()),
    };
    let filtered = filter::filtered_goals(store.goals(), &filters);

    for goal in &filtered {
        assert_eq!(goal.category, "career");
        assert_eq!(goal.semester, "spring-2026");
        assert!(store.goals().iter().any(|g| g.id == goal.id));
    }
    assert_eq!(filtered.len(), 1);
}

#[test]
fn test_all_all_filter_is_identity() {
    let store = GoalStore::seeded();
    let filtered = filter::filtered_goals(store.goals(), &GoalFilters::default());

    let filtered_ids: Vec<&str> = filtered.iter().map(|g| g.id.as_str()).collect();
    let all_ids: Vec<&str> = store.goals().iter().map(|g| g.id.as_str()).collect();
    assert_eq!(filtered_ids, all_ids);
}

#[test]
fn test_cells_partition_the_filtered_set() {
    let mut store = GoalStore::seeded();
    store
        .add_goal(draft("Debate Club", GoalType::Extracurricular, "extracurricular", "fall-2026"))
        .unwrap();
    store
        .add_goal(draft("Statistics", GoalType::Course, "school", "fall-2025"))
        .unwrap();

    let filtered = store.filtered();
    let mut union: Vec<String> = Vec::new();

    for category in store.categories() {
        for semester in store.semesters() {
            let cell = CellRef::new(category.id.clone(), semester.id.clone());
            for goal in filter::goals_for_cell(&filtered, &cell) {
                // Each goal may appear in one cell only.
                assert!(!union.contains(&goal.id));
                union.push(goal.id.clone());
            }
        }
    }

    assert_eq!(union.len(), filtered.len());
}

#[test]
fn test_add_remove_round_trip_law() {
    let mut store = GoalStore::seeded();
    let before: Vec<Goal> = store.goals().to_vec();

    let id = store
        .add_goal(draft("Statistics", GoalType::Course, "school", "fall-2025"))
        .unwrap();
    assert_eq!(store.goals().len(), before.len() + 1);

    assert!(store.remove_goal(&id));
    assert_eq!(store.goals(), before.as_slice());
}

#[test]
fn test_update_status_touches_nothing_else() {
    let mut store = GoalStore::seeded();
    let others_before: Vec<Goal> = store
        .goals()
        .iter()
        .filter(|g| g.id != "goal-2")
        .cloned()
        .collect();
    let target_before = store.goal("goal-2").unwrap().clone();

    store
        .update_goal(
            "goal-2",
            GoalPatch {
                status: Some(GoalStatus::Completed),
                ..GoalPatch::default()
            },
        )
        .unwrap();

    let target_after = store.goal("goal-2").unwrap();
    assert_eq!(target_after.status, GoalStatus::Completed);
    assert_eq!(target_after.title, target_before.title);
    assert_eq!(target_after.category, target_before.category);
    assert_eq!(target_after.semester, target_before.semester);
    assert_eq!(target_after.description, target_before.description);

    let others_after: Vec<Goal> = store
        .goals()
        .iter()
        .filter(|g| g.id != "goal-2")
        .cloned()
        .collect();
    assert_eq!(others_after, others_before);
}

#[test]
fn test_move_is_update_with_placement_fields() {
    let mut moved = GoalStore::seeded();
    let mut updated = GoalStore::seeded();

    moved
        .move_goal(
            "goal-3",
            &CellRef::new("summer".to_string(), "summer-2026".to_string()),
        )
        .unwrap();
    updated
        .update_goal(
            "goal-3",
            GoalPatch {
                category: Some("summer".to_string()),
                semester: Some("summer-2026".to_string()),
                ..GoalPatch::default()
            },
        )
        .unwrap();

    assert_eq!(moved.goals(), updated.goals());
}

#[test]
fn test_sports_filter_scenario() {
    let mut store = GoalStore::seeded();

    store.set_filter(
        FilterKey::Category,
        FilterSelection::Only("sports".to_string()),
    );

    let filtered = store.filtered();
    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0].title, "Varsity Basketball");

    // The two filters are independent: resetting semester keeps category.
    store.set_filter(FilterKey::Semester, FilterSelection::All);
    let filtered = store.filtered();
    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0].title, "Varsity Basketball");
}

#[test]
fn test_move_scenario_updates_cells() {
    let mut store = GoalStore::seeded();
    let target = CellRef::new("career".to_string(), "spring-2026".to_string());

    store.move_goal("goal-1", &target).unwrap();

    let filtered = store.filtered();
    let old_cell = CellRef::new("school".to_string(), "fall-2025".to_string());

    assert!(filter::goals_for_cell(&filtered, &old_cell)
        .iter()
        .all(|g| g.id != "goal-1"));
    assert!(filter::goals_for_cell(&filtered, &target)
        .iter()
        .any(|g| g.id == "goal-1"));
}

#[test]
fn test_mutations_on_absent_ids_are_benign() {
    let mut store = GoalStore::seeded();
    let before: Vec<Goal> = store.goals().to_vec();

    assert!(!store.remove_goal("goal-404"));
    assert!(!store
        .update_goal(
            "goal-404",
            GoalPatch {
                status: Some(GoalStatus::Completed),
                ..GoalPatch::default()
            }
        )
        .unwrap());
    assert!(!store
        .move_goal(
            "goal-404",
            &CellRef::new("career".to_string(), "spring-2026".to_string())
        )
        .unwrap());

    assert_eq!(store.goals(), before.as_slice());
}

#[test]
fn test_reference_validation_at_every_mutation_boundary() {
    let mut store = GoalStore::seeded();

    assert!(matches!(
        store.add_goal(draft("X", GoalType::Course, "nope", "fall-2025")),
        Err(StoreError::UnknownCategory(_))
    ));
    assert!(matches!(
        store.move_goal(
            "goal-1",
            &CellRef::new("school".to_string(), "winter-2099".to_string())
        ),
        Err(StoreError::UnknownSemester(_))
    ));
    assert!(matches!(
        store.update_goal(
            "goal-1",
            GoalPatch {
                category: Some("nope".to_string()),
                ..GoalPatch::default()
            }
        ),
        Err(StoreError::UnknownCategory(_))
    ));
}
