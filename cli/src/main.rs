//! CLI entrypoint for prospie-keywords
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, anyhow, bail};
use clap::Parser;
use prospie_application::{
    BehaviorConfig, ExtractKeywordsUseCase, NoTaxonomyProgress, ScoreKeywordsUseCase,
    TaxonomyProgressNotifier, TaxonomyService, TaxonomySourcePort,
};
use prospie_domain::{ClassificationInput, OutputFormat, parse_keyword_score};
use prospie_infrastructure::{ConfigLoader, FileConfig, FileTaxonomyConfig, FileTaxonomySource};
use prospie_presentation::{
    Cli, Command, ConsoleFormatter, OutputConfig, ProgressReporter, SimpleProgress,
};
use std::io::IsTerminal;
use std::path::Path;
use std::sync::Arc;
use tokio::io::AsyncReadExt;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    // Logs go to stderr so stdout stays machine-readable
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    if cli.show_config {
        ConfigLoader::print_config_sources(cli.config.as_ref());
        return Ok(());
    }

    let Some(command) = cli.command.as_ref() else {
        bail!("No command given. Run with --help for usage.");
    };

    // === Configuration ===
    let mut config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())
            .map_err(|e| anyhow!("Failed to load configuration: {}", e))?
    };
    apply_overrides(&mut config, &cli);

    for issue in config.ensure_valid()? {
        warn!("{}", issue.message);
    }

    let output_config = OutputConfig {
        format: config.output.format,
        color: config.output.color,
        show_progress: !cli.quiet,
    };
    if !output_config.color {
        ConsoleFormatter::disable_color();
    }
    let format = output_config.effective_format(cli.output.map(Into::into));

    // === Dependency Injection ===
    let source = taxonomy_source(&config.taxonomy)?;
    info!("Taxonomy source: {}", source.location());
    let behavior = BehaviorConfig::from_timeout_seconds(config.taxonomy.timeout_seconds);
    let taxonomy = Arc::new(TaxonomyService::new(source).with_behavior(behavior));

    let progress: Box<dyn TaxonomyProgressNotifier> =
        match ProgressKind::select(output_config.show_progress, std::io::stderr().is_terminal()) {
            ProgressKind::Spinner => Box::new(ProgressReporter::new()),
            ProgressKind::Plain => Box::new(SimpleProgress),
            ProgressKind::Silent => Box::new(NoTaxonomyProgress),
        };

    match command {
        Command::Extract(args) => {
            let input = match &args.input {
                Some(path) => read_profile(path).await?,
                None => args.to_input(),
            };
            if input.is_empty() {
                warn!("Profile has no text, areas, beneficiaries, causes or keywords");
            }

            let use_case = ExtractKeywordsUseCase::new(taxonomy);
            let output = use_case.execute_with_progress(&input, progress.as_ref()).await;

            match format {
                OutputFormat::Tags => print!("{}", ConsoleFormatter::format_tags(&output)),
                OutputFormat::Full => print!("{}", ConsoleFormatter::format_full(&output)),
                OutputFormat::Json => println!("{}", ConsoleFormatter::format_json(&output)),
            }
        }

        Command::Batch { path } => {
            let text = tokio::fs::read_to_string(path)
                .await
                .with_context(|| format!("Failed to read {}", path.display()))?;
            let inputs = parse_profiles(&text, path)?;

            let use_case = ExtractKeywordsUseCase::new(taxonomy);
            let outputs = use_case.execute_batch(&inputs, progress.as_ref()).await;

            for output in &outputs {
                match format {
                    OutputFormat::Tags => println!("{}", ConsoleFormatter::format_tags_line(output)),
                    OutputFormat::Full => print!("{}", ConsoleFormatter::format_full(output)),
                    OutputFormat::Json => println!("{}", ConsoleFormatter::format_json_line(output)),
                }
            }
        }

        Command::Rules { count, filter } => {
            let rules = taxonomy
                .try_load_with_progress(progress.as_ref())
                .await
                .with_context(|| format!("Failed to load taxonomy from {}", taxonomy.location()))?;

            if *count {
                println!("{}", rules.len());
            } else if format == OutputFormat::Json {
                println!("{}", ConsoleFormatter::format_json(&rules.rules()));
            } else {
                print!("{}", ConsoleFormatter::format_rules(&rules, filter.as_deref()));
            }
        }

        Command::Bonus { matches } => {
            let strong_matches = matches
                .iter()
                .map(|m| parse_keyword_score(m))
                .collect::<Result<Vec<_>, _>>()?;

            let use_case = ScoreKeywordsUseCase::new(taxonomy);
            match use_case.execute(&strong_matches, progress.as_ref()).await {
                Some(bonus) if format == OutputFormat::Json => {
                    println!("{}", ConsoleFormatter::format_json(&bonus))
                }
                Some(bonus) => print!("{}", ConsoleFormatter::format_bonus(&bonus)),
                None => println!("No strong matches, no bonus"),
            }
        }
    }

    Ok(())
}

/// How taxonomy load progress is shown on stderr
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ProgressKind {
    Spinner,
    Plain,
    Silent,
}

impl ProgressKind {
    /// Spinner on a terminal, plain lines when stderr is redirected.
    fn select(show_progress: bool, interactive: bool) -> Self {
        match (show_progress, interactive) {
            (false, _) => Self::Silent,
            (true, true) => Self::Spinner,
            (true, false) => Self::Plain,
        }
    }
}

/// Command-line taxonomy flags replace whatever the config files chose.
fn apply_overrides(config: &mut FileConfig, cli: &Cli) {
    if let Some(url) = &cli.taxonomy_url {
        config.taxonomy.url = Some(url.clone());
        config.taxonomy.path = None;
    }
    if let Some(path) = &cli.taxonomy_file {
        config.taxonomy.path = Some(path.clone());
        config.taxonomy.url = None;
    }
    if let Some(seconds) = cli.timeout {
        config.taxonomy.timeout_seconds = Some(seconds);
    }
}

/// A local path wins over a URL; with neither, the published taxonomy is used.
fn taxonomy_source(config: &FileTaxonomyConfig) -> Result<Arc<dyn TaxonomySourcePort>> {
    if let Some(path) = &config.path {
        return Ok(Arc::new(FileTaxonomySource::new(path)));
    }
    remote_source(config)
}

#[cfg(feature = "remote")]
fn remote_source(config: &FileTaxonomyConfig) -> Result<Arc<dyn TaxonomySourcePort>> {
    use prospie_infrastructure::{DEFAULT_TAXONOMY_URL, HttpTaxonomySource};

    let url = config.url.as_deref().unwrap_or(DEFAULT_TAXONOMY_URL);
    let mut source = HttpTaxonomySource::new(url);
    if let Some(user_agent) = &config.user_agent {
        source = source.with_user_agent(user_agent);
    }
    Ok(Arc::new(source))
}

#[cfg(not(feature = "remote"))]
fn remote_source(_config: &FileTaxonomyConfig) -> Result<Arc<dyn TaxonomySourcePort>> {
    bail!("Built without remote taxonomy support; pass --taxonomy-file or set taxonomy.path")
}

/// Read one profile from a JSON file, or from stdin when the path is `-`.
async fn read_profile(path: &Path) -> Result<ClassificationInput> {
    let text = if path == Path::new("-") {
        let mut text = String::new();
        tokio::io::stdin()
            .read_to_string(&mut text)
            .await
            .context("Failed to read profile from stdin")?;
        text
    } else {
        tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read {}", path.display()))?
    };
    serde_json::from_str(&text).with_context(|| format!("Invalid profile in {}", path.display()))
}

/// One profile per non-blank line.
fn parse_profiles(text: &str, path: &Path) -> Result<Vec<ClassificationInput>> {
    text.lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(n, line)| {
            serde_json::from_str(line)
                .with_context(|| format!("{}:{}: invalid profile", path.display(), n + 1))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_progress_kind_selection() {
        assert_eq!(ProgressKind::select(true, true), ProgressKind::Spinner);
        assert_eq!(ProgressKind::select(true, false), ProgressKind::Plain);
        assert_eq!(ProgressKind::select(false, true), ProgressKind::Silent);
        assert_eq!(ProgressKind::select(false, false), ProgressKind::Silent);
    }

    #[tokio::test]
    async fn test_read_profile_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("profile.json");
        std::fs::write(&path, r#"{"activities": "Youth theatre", "areas": ["Leeds"]}"#).unwrap();

        let input = read_profile(&path).await.unwrap();
        assert_eq!(input.activities.as_deref(), Some("Youth theatre"));
        assert_eq!(input.areas, vec!["Leeds"]);
    }

    #[test]
    fn test_parse_profiles_skips_blank_lines() {
        let text = r#"{"activities": "Arts for young people", "areas": ["Bristol"]}

{"objectives": "Relief of poverty", "existingKeywords": ["Poverty"]}
"#;
        let inputs = parse_profiles(text, Path::new("batch.jsonl")).unwrap();
        assert_eq!(inputs.len(), 2);
        assert_eq!(inputs[0].areas, vec!["Bristol"]);
        assert_eq!(inputs[1].existing_keywords, vec!["Poverty"]);
    }

    #[test]
    fn test_parse_profiles_reports_line_number() {
        let text = "{\"activities\": \"ok\"}\n{not json}\n";
        let err = parse_profiles(text, Path::new("batch.jsonl")).unwrap_err();
        assert!(err.to_string().contains("batch.jsonl:2"));
    }

    #[test]
    fn test_cli_file_overrides_configured_url() {
        let cli = Cli::parse_from([
            "prospie-keywords",
            "--taxonomy-file",
            "ukcat.csv",
            "--timeout",
            "5",
            "rules",
        ]);
        let mut config = FileConfig::default();
        config.taxonomy.url = Some("https://example.org/ukcat.csv".to_string());

        apply_overrides(&mut config, &cli);

        assert_eq!(config.taxonomy.path, Some(PathBuf::from("ukcat.csv")));
        assert!(config.taxonomy.url.is_none());
        assert_eq!(config.taxonomy.timeout_seconds, Some(5));
    }

    #[test]
    fn test_path_source_wins() {
        let config = FileTaxonomyConfig {
            url: Some("https://example.org/ukcat.csv".to_string()),
            path: Some(PathBuf::from("ukcat.csv")),
            ..Default::default()
        };
        let source = taxonomy_source(&config).unwrap();
        assert_eq!(source.location(), "ukcat.csv");
    }
}
