//! Integration tests for board documents, drop handling, and report export

use plan_board::board::{apply_drop, BoardGrid, DropEvent};
use plan_board::boardfile::{parse_board_toml, write_board_toml};
use plan_board::models::CellRef;
use plan_board::profile::UserProfile;
use plan_board::report::{BoardContext, HtmlReporter, MarkdownReporter, ReportGenerator};
use plan_board::store::GoalStore;
use tempfile::TempDir;

#[test]
fn test_board_document_survives_a_drag_session() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("board.toml");

    // Save the starter board, reload it, drag a goal, save again.
    let store = GoalStore::seeded();
    write_board_toml(&path, store.goals()).expect("board should save");

    let mut store = parse_board_toml(&path).expect("board should load");
    let event = DropEvent {
        goal_id: "goal-1".to_string(),
        target: CellRef::new("career".to_string(), "spring-2026".to_string()),
    };
    assert_eq!(apply_drop(&mut store, &event), Ok(true));
    write_board_toml(&path, store.goals()).expect("board should save");

    let reloaded = parse_board_toml(&path).expect("board should load");
    let goal = reloaded.goal("goal-1").expect("goal should exist");
    assert_eq!(goal.category, "career");
    assert_eq!(goal.semester, "spring-2026");
}

#[test]
fn test_repeated_drop_is_stable() {
    let mut store = GoalStore::seeded();
    let event = DropEvent {
        goal_id: "goal-2".to_string(),
        target: CellRef::new("summer".to_string(), "summer-2027".to_string()),
    };

    assert_eq!(apply_drop(&mut store, &event), Ok(true));
    // Second drop on the same cell is guarded into a no-op.
    assert_eq!(apply_drop(&mut store, &event), Ok(false));

    let goal = store.goal("goal-2").unwrap();
    assert_eq!(goal.semester, "summer-2027");
}

#[test]
fn test_grid_reflects_document_contents() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("board.toml");

    std::fs::write(
        &path,
        r#"
[[goals]]
id = "goal-1"
goal_type = "course"
title = "Precalculus"
category = "school"
semester = "spring-2026"
status = "in-progress"

[[goals]]
id = "goal-2"
goal_type = "career"
title = "Job Shadow Week"
category = "career"
semester = "spring-2026"
"#,
    )
    .expect("write should succeed");

    let store = parse_board_toml(&path).expect("board should load");
    let grid = BoardGrid::build(&store);

    assert_eq!(grid.goal_count(), 2);
    let school_row = grid
        .rows
        .iter()
        .find(|r| r.category.id == "school")
        .expect("school row should exist");
    let spring_cell = school_row
        .cells
        .iter()
        .find(|c| c.cell.semester == "spring-2026")
        .expect("spring cell should exist");
    assert_eq!(spring_cell.goal_ids, vec!["goal-1".to_string()]);
}

#[test]
fn test_markdown_report_export_to_file() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let output = temp_dir.path().join("board.md");

    let store = GoalStore::seeded();
    let grid = BoardGrid::build(&store);
    let profile = UserProfile::default();
    let ctx = BoardContext::new(&store, &grid, &profile);

    MarkdownReporter::new()
        .generate(&ctx, &output)
        .expect("report should generate");

    let content = std::fs::read_to_string(&output).expect("report should be readable");
    assert!(content.contains("Varsity Basketball"));
    assert!(content.contains("| Category |"));
}

#[test]
fn test_html_report_export_to_file() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let output = temp_dir.path().join("board.html");

    let store = GoalStore::seeded();
    let grid = BoardGrid::build(&store);
    let mut profile = UserProfile::default();
    profile.name = "Jordan Avery".to_string();
    let ctx = BoardContext::new(&store, &grid, &profile);

    HtmlReporter::new()
        .generate(&ctx, &output)
        .expect("report should generate");

    let content = std::fs::read_to_string(&output).expect("report should be readable");
    assert!(content.contains("Jordan Avery"));
    assert!(content.contains("</html>"));
}
