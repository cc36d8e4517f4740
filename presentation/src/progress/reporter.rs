//! Progress reporting for taxonomy loading

use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use prospie_application::TaxonomyProgressNotifier;
use std::sync::Mutex;
use std::time::Duration;

/// Spinner shown on stderr while the taxonomy is fetched
pub struct ProgressReporter {
    spinner: Mutex<Option<ProgressBar>>,
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            spinner: Mutex::new(None),
        }
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {prefix:.bold.cyan} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl TaxonomyProgressNotifier for ProgressReporter {
    fn on_fetch_start(&self, location: &str) {
        let pb = ProgressBar::new_spinner();
        pb.set_style(Self::spinner_style());
        pb.set_prefix("Taxonomy");
        pb.set_message(format!("fetching {}", location));
        pb.enable_steady_tick(Duration::from_millis(100));

        if let Ok(mut slot) = self.spinner.lock() {
            *slot = Some(pb);
        }
    }

    fn on_fetch_complete(&self, rule_count: usize, success: bool) {
        let Some(pb) = self.spinner.lock().ok().and_then(|mut slot| slot.take()) else {
            return;
        };
        if success {
            pb.finish_with_message(format!("{} rules loaded", rule_count.to_string().green()));
        } else {
            pb.finish_with_message("unavailable, continuing without it".red().to_string());
        }
    }
}

/// Simple text-based progress (no fancy UI)
pub struct SimpleProgress;

impl TaxonomyProgressNotifier for SimpleProgress {
    fn on_fetch_start(&self, location: &str) {
        eprintln!("{} Fetching taxonomy from {}", "->".cyan(), location.bold());
    }

    fn on_fetch_complete(&self, rule_count: usize, success: bool) {
        if success {
            eprintln!("  {} {} rules", "v".green(), rule_count);
        } else {
            eprintln!("  {} taxonomy unavailable", "x".red());
        }
    }
}
