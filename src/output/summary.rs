//! Console summary printed after a run

use crate::processing::record::RunResult;
use colored::{Color, Colorize};
use std::path::Path;

pub struct SummaryFormatter {
    use_colors: bool,
}

impl SummaryFormatter {
    pub fn new(use_colors: bool) -> Self {
        Self { use_colors }
    }

    fn colorize(&self, text: &str, color: Color) -> String {
        if self.use_colors {
            text.color(color).to_string()
        } else {
            text.to_string()
        }
    }

    fn mark(&self, ok: bool) -> String {
        match (ok, self.use_colors) {
            (true, true) => "✓".green().bold().to_string(),
            (false, true) => "✗".red().bold().to_string(),
            (true, false) => "[ok]".to_string(),
            (false, false) => "[x]".to_string(),
        }
    }

    /// `saved_to` is `None` when nothing was exported.
    pub fn format(&self, result: &RunResult, saved_to: Option<&Path>) -> String {
        let mut output = String::new();

        match saved_to {
            Some(path) => {
                output.push_str(&format!(
                    "\n{} Successfully extracted data from {} of {} CVs\n",
                    self.mark(true),
                    self.colorize(&result.len().to_string(), Color::Green),
                    result.files_found()
                ));
                output.push_str(&format!("{} Results saved to: {}\n", self.mark(true), path.display()));
            }
            None => {
                output.push_str(&format!("\n{} No data was extracted\n", self.mark(false)));
            }
        }

        if !result.skipped().is_empty() {
            output.push_str(&format!(
                "\n{}\n",
                self.colorize(&format!("Skipped {} file(s):", result.skipped().len()), Color::Yellow)
            ));
            for skipped in result.skipped() {
                output.push_str(&format!("  • {}: {}\n", skipped.filename, skipped.reason));
            }
        }

        output
    }
}
