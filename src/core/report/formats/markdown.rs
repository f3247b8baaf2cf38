//! Markdown report generator
//!
//! Renders the board as a Markdown document with the grid as a table. These
//! reports read well in GitHub, GitLab, and VS Code.

use crate::core::report::{BoardContext, ReportGenerator};
use std::error::Error;
use std::fmt::Write;
use std::fs;
use std::path::Path;

/// Embedded Markdown report template
const MARKDOWN_TEMPLATE: &str = include_str!("../templates/board.md");

/// Markdown report generator
#[derive(Default)]
pub struct MarkdownReporter;

impl MarkdownReporter {
    /// Create a new Markdown reporter
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Render the report using template substitution
    #[allow(clippy::unused_self)]
    fn render_template(&self, ctx: &BoardContext) -> String {
        let mut output = MARKDOWN_TEMPLATE.to_string();

        output = output.replace("{{owner}}", ctx.owner_name());
        output = output.replace("{{filters}}", &ctx.filter_summary());
        output = output.replace("{{goal_count}}", &ctx.goal_count().to_string());
        output = output.replace("{{board_table}}", &Self::generate_board_table(ctx));
        output = output.replace("{{goal_list}}", &Self::generate_goal_list(ctx));
        output = output.replace("{{version}}", crate::core::get_version());

        output
    }

    /// Generate the category × semester table
    fn generate_board_table(ctx: &BoardContext) -> String {
        let mut table = String::new();

        let headers: Vec<String> = ctx
            .grid
            .semesters
            .iter()
            .map(|s| s.name.clone())
            .collect();
        let _ = writeln!(table, "| Category | {} |", headers.join(" | "));
        table.push_str(&format!("|---|{}\n", "---|".repeat(headers.len())));

        for row in &ctx.grid.rows {
            let cells: Vec<String> = row
                .cells
                .iter()
                .map(|cell| {
                    let titles: Vec<&str> = cell
                        .goal_ids
                        .iter()
                        .filter_map(|id| ctx.store.goal(id))
                        .map(|g| g.title.as_str())
                        .collect();
                    titles.join(", ")
                })
                .collect();

            let _ = writeln!(table, "| {} | {} |", row.category.name, cells.join(" | "));
        }

        table
    }

    /// Generate the per-goal detail list
    fn generate_goal_list(ctx: &BoardContext) -> String {
        let mut list = String::new();

        for goal in ctx.store.filtered() {
            let semester_name = ctx
                .store
                .semester(&goal.semester)
                .map_or(goal.semester.as_str(), |s| s.name.as_str());

            let _ = writeln!(
                list,
                "- **{}** ({}, {}) — {semester_name}",
                goal.title, goal.goal_type, goal.status
            );
            if let Some(description) = &goal.description {
                let _ = writeln!(list, "  {description}");
            }
        }

        if list.is_empty() {
            list.push_str("No goals match the current filters.\n");
        }
        list
    }
}

impl ReportGenerator for MarkdownReporter {
    fn generate(&self, ctx: &BoardContext, output_path: &Path) -> Result<(), Box<dyn Error>> {
        let content = self.render(ctx)?;
        fs::write(output_path, content)?;
        Ok(())
    }

    fn render(&self, ctx: &BoardContext) -> Result<String, Box<dyn Error>> {
        Ok(self.render_template(ctx))
    }
}
