//! Console output formatter for keyword extraction results

use colored::Colorize;
use prospie_application::ExtractKeywordsOutput;
use prospie_domain::core::string::truncate;
use prospie_domain::{DiagnosticKind, KeywordBonus, RuleTable};
use serde::Serialize;

const PATTERN_WIDTH: usize = 48;

/// Formats extraction results for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Turn off ANSI colors for everything formatted afterwards
    pub fn disable_color() {
        colored::control::set_override(false);
    }

    /// Keywords only, one per line
    pub fn format_tags(output: &ExtractKeywordsOutput) -> String {
        output
            .keywords()
            .iter()
            .map(|k| format!("{}\n", k))
            .collect()
    }

    /// Keywords with sources, rule counts and diagnostics
    pub fn format_full(output: &ExtractKeywordsOutput) -> String {
        let report = &output.report;
        let mut text = String::new();

        text.push_str(&Self::header("Keyword Extraction"));
        text.push('\n');

        text.push_str(&format!(
            "{} {} rules ({} matched, {} excluded)\n",
            "Taxonomy:".cyan().bold(),
            output.rule_count,
            report.matched_rules,
            report.excluded_rules
        ));
        text.push_str(&format!(
            "{} {}\n",
            "Areas matched:".cyan().bold(),
            report.matched_areas
        ));

        text.push_str(&Self::section_header("Keywords"));
        if report.entries.is_empty() {
            text.push_str(&format!("  {}\n", "(none)".dimmed()));
        }
        for entry in &report.entries {
            text.push_str(&format!(
                "  * {} {}\n",
                entry.keyword.green(),
                format!("[{}]", entry.source).dimmed()
            ));
        }

        if !report.diagnostics.is_empty() {
            text.push_str(&Self::section_header("Diagnostics"));
            for diagnostic in &report.diagnostics {
                let label = match diagnostic.kind {
                    DiagnosticKind::InvalidInclude => "invalid include".red(),
                    DiagnosticKind::InvalidExclude => "invalid exclude".yellow(),
                    DiagnosticKind::AreaFallback => "area fallback".yellow(),
                };
                text.push_str(&format!(
                    "  {} {}: {}\n",
                    label,
                    diagnostic.subject.bold(),
                    truncate(&diagnostic.message, 120)
                ));
            }
        }

        text.push_str(&Self::footer());
        text
    }

    /// Format any serializable value as pretty JSON
    pub fn format_json<T: Serialize>(value: &T) -> String {
        serde_json::to_string_pretty(value).unwrap_or_else(|_| "{}".to_string())
    }

    /// Format a value as a single JSON line (for batch output)
    pub fn format_json_line<T: Serialize>(value: &T) -> String {
        serde_json::to_string(value).unwrap_or_else(|_| "{}".to_string())
    }

    /// Keyword list of one batch entry, comma-separated on a single line
    pub fn format_tags_line(output: &ExtractKeywordsOutput) -> String {
        output.keywords().keywords().join(", ")
    }

    /// Keyword specificity bonus breakdown
    pub fn format_bonus(bonus: &KeywordBonus) -> String {
        let mut text = String::new();
        text.push_str(&Self::section_header("Keyword Specificity"));
        for keyword in &bonus.keywords {
            let level = match (keyword.known_tag, keyword.level) {
                (false, _) => "not in taxonomy".dimmed().to_string(),
                (true, Some(level)) => format!("level {}", level),
                (true, None) => "no level".to_string(),
            };
            text.push_str(&format!(
                "  {:<32} score {:.2}  weight {:.1}  ({})\n",
                truncate(&keyword.keyword, 32),
                keyword.score,
                keyword.weight,
                level
            ));
        }
        text.push_str(&format!(
            "\n{} {:.3}\n{} {}\n",
            "Average weighted score:".cyan().bold(),
            bonus.average_weighted,
            "Bonus:".cyan().bold(),
            format!("x{:.3}", bonus.bonus).green().bold()
        ));
        text
    }

    /// Taxonomy rule listing, optionally filtered by tag substring
    pub fn format_rules(rules: &RuleTable, filter: Option<&str>) -> String {
        let needle = filter.map(str::to_lowercase);
        let mut text = String::new();
        let mut shown = 0;

        for rule in rules.iter() {
            if let Some(needle) = &needle
                && !rule.tag.to_lowercase().contains(needle.as_str())
            {
                continue;
            }
            shown += 1;
            text.push_str(&format!(
                "{} {}\n    {} {}\n",
                rule.code.as_deref().unwrap_or("-").dimmed(),
                rule.tag.bold(),
                "include:".cyan(),
                truncate(&rule.include_pattern, PATTERN_WIDTH)
            ));
            if let Some(exclude) = rule.exclude_pattern() {
                text.push_str(&format!(
                    "    {} {}\n",
                    "exclude:".yellow(),
                    truncate(exclude, PATTERN_WIDTH)
                ));
            }
        }

        text.push_str(&format!("\n{} of {} rules\n", shown, rules.len()));
        text
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{:^60}\n{}", line.cyan(), title.bold(), line.cyan())
    }

    fn section_header(title: &str) -> String {
        format!("\n{}\n{}\n", title.cyan().bold(), "-".repeat(40))
    }

    fn footer() -> String {
        format!("\n{}\n", "=".repeat(60).cyan())
    }
}
