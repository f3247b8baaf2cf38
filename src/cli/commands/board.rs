//! Board command handler

use plan_board::board::BoardGrid;
use plan_board::boardfile::parse_board_toml;
use plan_board::config::Config;
use plan_board::filter::{FilterKey, FilterSelection};
use plan_board::profile::UserProfile;
use plan_board::report::{BoardContext, HtmlReporter, MarkdownReporter, ReportFormat, ReportGenerator};
use plan_board::store::GoalStore;
use plan_board::{error, info};
use std::path::{Path, PathBuf};

/// Run the board command.
///
/// # Arguments
/// * `board_file` - Optional board document; the starter board is shown when omitted
/// * `category` - Category filter (an id, or "all")
/// * `semester` - Semester filter (an id, or "all")
/// * `report` - Optional report format to export
/// * `output` - Optional report output path
/// * `config` - Configuration containing the default export directory
/// * `verbose` - Whether to show detailed output
pub fn run(
    board_file: Option<&Path>,
    category: &str,
    semester: &str,
    report: Option<&str>,
    output: Option<&Path>,
    config: &Config,
    verbose: bool,
) {
    let mut store = match load_store(board_file) {
        Ok(store) => store,
        Err(message) => {
            eprintln!("{message}");
            return;
        }
    };

    store.set_filter(FilterKey::Category, FilterSelection::parse(category));
    store.set_filter(FilterKey::Semester, FilterSelection::parse(semester));

    let grid = BoardGrid::build(&store);
    print_board(&store, &grid);

    if verbose {
        println!(
            "\n{} of {} goals shown.",
            grid.goal_count(),
            store.goals().len()
        );
    } else {
        info!("Board rendered: {} goals shown", grid.goal_count());
    }

    if let Some(format_str) = report {
        if let Err(message) = export_report(&store, &grid, format_str, output, config) {
            error!("Report export failed: {message}");
            eprintln!("{message}");
        }
    }
}

fn load_store(board_file: Option<&Path>) -> Result<GoalStore, String> {
    board_file.map_or_else(
        || Ok(GoalStore::seeded()),
        |path| {
            parse_board_toml(path).map_err(|e| {
                error!("Failed to load board {}: {e}", path.display());
                format!("✗ Failed to load {}: {e}", path.display())
            })
        },
    )
}

fn print_board(store: &GoalStore, grid: &BoardGrid) {
    println!("=== Planning Board ===");

    if grid.goal_count() == 0 {
        println!("\nNo goals match the current filters.");
        return;
    }

    for row in &grid.rows {
        let row_total: usize = row.cells.iter().map(|c| c.goal_ids.len()).sum();
        if row_total == 0 {
            continue;
        }

        println!("\n{}", row.category.name);
        for (cell, semester) in row.cells.iter().zip(&grid.semesters) {
            if cell.goal_ids.is_empty() {
                continue;
            }
            println!("  {}:", semester.name);
            for id in &cell.goal_ids {
                if let Some(goal) = store.goal(id) {
                    println!("    - {} [{}] ({id})", goal.title, goal.status);
                }
            }
        }
    }
}

fn export_report(
    store: &GoalStore,
    grid: &BoardGrid,
    format_str: &str,
    output: Option<&Path>,
    config: &Config,
) -> Result<(), String> {
    let format: ReportFormat = format_str
        .parse()
        .map_err(|e| format!("✗ {e} (expected markdown or html)"))?;

    let output_path: PathBuf = if let Some(path) = output {
        path.to_path_buf()
    } else {
        let export_dir = PathBuf::from(&config.paths.export_dir);
        std::fs::create_dir_all(&export_dir).map_err(|e| {
            format!(
                "✗ Failed to create export directory {}: {e}",
                export_dir.display()
            )
        })?;
        export_dir.join(format!("board.{}", format.extension()))
    };

    let profile = UserProfile::load();
    let ctx = BoardContext::new(store, grid, &profile);

    let result = match format {
        ReportFormat::Markdown => MarkdownReporter::new().generate(&ctx, &output_path),
        ReportFormat::Html => HtmlReporter::new().generate(&ctx, &output_path),
    };

    match result {
        Ok(()) => {
            println!("✓ Report generated: {}", output_path.display());
            info!("Exported board report to: {}", output_path.display());
            Ok(())
        }
        Err(e) => Err(format!(
            "✗ Failed to export report to {}: {e}",
            output_path.display()
        )),
    }
}
