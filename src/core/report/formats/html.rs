//! HTML report generator
//!
//! Renders the board as a self-contained HTML page suitable for printing or
//! sharing.

use crate::core::report::{BoardContext, ReportGenerator};
use std::error::Error;
use std::fmt::Write;
use std::fs;
use std::path::Path;

/// Embedded HTML report template
const HTML_TEMPLATE: &str = include_str!("../templates/board.html");

/// HTML report generator
#[derive(Default)]
pub struct HtmlReporter;

impl HtmlReporter {
    /// Create a new HTML reporter
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Escape text for safe embedding in HTML
    fn escape(text: &str) -> String {
        text.replace('&', "&amp;")
            .replace('<', "&lt;")
            .replace('>', "&gt;")
    }

    /// Render the report using template substitution
    #[allow(clippy::unused_self)]
    fn render_template(&self, ctx: &BoardContext) -> String {
        let mut output = HTML_TEMPLATE.to_string();

        output = output.replace("{{owner}}", &Self::escape(ctx.owner_name()));
        output = output.replace("{{filters}}", &Self::escape(&ctx.filter_summary()));
        output = output.replace("{{goal_count}}", &ctx.goal_count().to_string());
        output = output.replace("{{board_table}}", &Self::generate_board_table(ctx));
        output = output.replace("{{goal_list}}", &Self::generate_goal_list(ctx));
        output = output.replace("{{version}}", crate::core::get_version());

        output
    }

    /// Generate the category × semester table
    fn generate_board_table(ctx: &BoardContext) -> String {
        let mut table = String::from("<table>\n<tr><th>Category</th>");
        for semester in &ctx.grid.semesters {
            let _ = write!(table, "<th>{}</th>", Self::escape(&semester.name));
        }
        table.push_str("</tr>\n");

        for row in &ctx.grid.rows {
            let _ = write!(table, "<tr><th>{}</th>", Self::escape(&row.category.name));
            for cell in &row.cells {
                let titles: Vec<String> = cell
                    .goal_ids
                    .iter()
                    .filter_map(|id| ctx.store.goal(id))
                    .map(|g| Self::escape(&g.title))
                    .collect();
                let _ = write!(table, "<td>{}</td>", titles.join("<br>"));
            }
            table.push_str("</tr>\n");
        }

        table.push_str("</table>");
        table
    }

    /// Generate the per-goal detail list
    fn generate_goal_list(ctx: &BoardContext) -> String {
        let goals = ctx.store.filtered();
        if goals.is_empty() {
            return "<p>No goals match the current filters.</p>".to_string();
        }

        let mut list = String::from("<ul class=\"goals\">\n");
        for goal in goals {
            let semester_name = ctx
                .store
                .semester(&goal.semester)
                .map_or(goal.semester.as_str(), |s| s.name.as_str());

            let _ = write!(
                list,
                "<li><strong>{}</strong> ({}, {}) — {}",
                Self::escape(&goal.title),
                goal.goal_type,
                goal.status,
                Self::escape(semester_name)
            );
            if let Some(description) = &goal.description {
                let _ = write!(list, "<br>{}", Self::escape(description));
            }
            list.push_str("</li>\n");
        }
        list.push_str("</ul>");
        list
    }
}

impl ReportGenerator for HtmlReporter {
    fn generate(&self, ctx: &BoardContext, output_path: &Path) -> Result<(), Box<dyn Error>> {
        let content = self.render(ctx)?;
        fs::write(output_path, content)?;
        Ok(())
    }

    fn render(&self, ctx: &BoardContext) -> Result<String, Box<dyn Error>> {
        Ok(self.render_template(ctx))
    }
}
