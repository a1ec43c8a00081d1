//! Project configuration summary box

use crate::project::ProjectConfig;
use colored::Colorize;

const MIN_WIDTH: usize = 60;
const PADDING_X: usize = 2;

/// Render the rounded summary box printed after a project is created
pub fn render_summary(config: &ProjectConfig) -> String {
    let keyword = |s: &str| s.bright_blue().to_string();
    let logging = config.logging().to_string();

    let lines = vec![
        "Project Configuration Summary"
            .bold()
            .magenta()
            .to_string(),
        String::new(),
        format!("GitHub UserID: {}", keyword(config.github_user_id())),
        format!("Project Name: {}", keyword(config.project_name())),
        format!("Framework: {}", keyword(config.framework().id())),
        format!("Database: {}", keyword(config.database().id())),
        format!("Logging Middleware: {}", keyword(&logging)),
    ];

    boxed(&lines)
}

/// Draw a rounded border around `lines`, with one blank line of vertical padding
fn boxed(lines: &[String]) -> String {
    let content_width = lines
        .iter()
        .map(|l| console::measure_text_width(l))
        .max()
        .unwrap_or(0);
    let inner = (content_width + 2 * PADDING_X).max(MIN_WIDTH);

    let border = |s: &str| s.bright_purple().to_string();
    let empty_row = format!("{}{}{}", border("│"), " ".repeat(inner), border("│"));

    let mut out = Vec::with_capacity(lines.len() + 4);
    out.push(border(&format!("╭{}╮", "─".repeat(inner))));
    out.push(empty_row.clone());
    for line in lines {
        let fill = inner - PADDING_X - console::measure_text_width(line);
        out.push(format!(
            "{}{}{}{}{}",
            border("│"),
            " ".repeat(PADDING_X),
            line,
            " ".repeat(fill),
            border("│")
        ));
    }
    out.push(empty_row);
    out.push(border(&format!("╰{}╯", "─".repeat(inner))));

    out.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::project::{Database, Framework};

    fn plain(config: &ProjectConfig) -> String {
        console::strip_ansi_codes(&render_summary(config)).to_string()
    }

    #[test]
    fn test_summary_lists_every_field() {
        let config =
            ProjectConfig::new("bob", "demo2", Framework::Echo, Database::Mongodb, true).unwrap();
        let text = plain(&config);

        assert!(text.contains("Project Configuration Summary"));
        assert!(text.contains("GitHub UserID: bob"));
        assert!(text.contains("Project Name: demo2"));
        assert!(text.contains("Framework: echo"));
        assert!(text.contains("Database: mongodb"));
        assert!(text.contains("Logging Middleware: true"));
    }

    #[test]
    fn test_box_rows_have_equal_width() {
        let config = ProjectConfig::new(
            "someone-with-a-long-handle",
            "a-project-name-long-enough-to-widen-the-box-past-sixty",
            Framework::Gin,
            Database::Sqlite,
            false,
        )
        .unwrap();
        let text = plain(&config);

        let widths: Vec<usize> = text.lines().map(console::measure_text_width).collect();
        assert!(widths.iter().all(|w| *w == widths[0]), "{widths:?}");
        assert!(widths[0] > MIN_WIDTH + 2);
    }
}
