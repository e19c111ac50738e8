//! Console output formatter for category suggestions

use colored::Colorize;
use triage_domain::Suggestion;

/// Formats suggestions for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format a suggestion as a short, colored summary
    pub fn format(suggestion: &Suggestion) -> String {
        let mut output = String::new();

        output.push_str(&format!(
            "{} {}\n",
            "Category:".cyan().bold(),
            suggestion.category.label().green().bold()
        ));
        output.push_str(&format!(
            "{} {}\n",
            "Model:   ".cyan().bold(),
            suggestion.model
        ));

        let coerced = if suggestion.coerced {
            format!("{} {}", "yes".yellow(), "(model output mapped onto the taxonomy)".dimmed())
        } else {
            "no".to_string()
        };
        output.push_str(&format!("{} {}\n", "Coerced: ".cyan().bold(), coerced));

        output
    }

    /// Format as JSON, the same shape the HTTP API returns
    pub fn format_json(suggestion: &Suggestion) -> String {
        serde_json::to_string_pretty(suggestion).unwrap_or_else(|_| "{}".to_string())
    }
}
