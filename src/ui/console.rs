// Wed Jan 15 2026 - Alex

use crate::orchestrator::RunSummary;
use crate::utils::{format_duration, pluralize};
use colored::*;

const RULE_WIDTH: usize = 50;

/// Colored status lines on stdout. Errors go to stderr.
#[derive(Debug, Clone, Copy)]
pub struct Console;

impl Console {
    pub fn new(use_color: bool) -> Self {
        if !use_color {
            colored::control::set_override(false);
        }
        Self
    }

    pub fn header(&self, title: &str) {
        let rule = "=".repeat(RULE_WIDTH);
        let centered = format!("{:^width$}", title, width = RULE_WIDTH);
        println!("{}", rule.cyan());
        println!("{}", centered.cyan());
        println!("{}", rule.cyan());
    }

    pub fn info(&self, message: &str) {
        println!("{}", message.green());
    }

    pub fn warning(&self, message: &str) {
        println!("{}", message.yellow());
    }

    pub fn error(&self, message: &str) {
        eprintln!("{}", message.red());
    }

    pub fn summary(&self, summary: &RunSummary) {
        self.header("Summary");

        self.info(&format!(
            "Indexed {} ({} lookup keys)",
            pluralize(summary.categories, "category", "categories"),
            summary.suffix_keys
        ));

        for artifact in &summary.write_report.written {
            self.info(&format!(
                "  {} -> {}",
                artifact.category,
                pluralize(artifact.struct_count, "struct", "structs")
            ));
        }

        if let Some(path) = &summary.aggregator {
            self.info(&format!("Include list: \"{}\"", path.display()));
        }

        for failure in &summary.write_report.failures {
            self.error(&failure.to_string());
        }

        self.warning(&summary.stats.struct_line());
        self.warning(&summary.stats.class_line());
        self.warning(&format!("Program execution time: {}", format_duration(summary.elapsed)));

        if summary.write_report.has_failures() {
            self.warning(&format!(
                "Finished with {}",
                pluralize(summary.write_report.failures.len(), "write error", "write errors")
            ));
        } else {
            self.info("Structures successfully written to files.");
        }
    }
}
