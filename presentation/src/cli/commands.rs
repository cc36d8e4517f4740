//! CLI command definitions

use clap::{Args, Parser, Subcommand, ValueEnum};
use prospie_domain::ClassificationInput;
use std::path::PathBuf;

/// Output format for extraction results
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Keywords only, one per line
    Tags,
    /// Keywords with their sources, matched rules and diagnostics
    Full,
    /// JSON output
    Json,
}

impl From<OutputFormat> for prospie_domain::OutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Tags => Self::Tags,
            OutputFormat::Full => Self::Full,
            OutputFormat::Json => Self::Json,
        }
    }
}

/// CLI arguments for prospie-keywords
#[derive(Parser, Debug)]
#[command(name = "prospie-keywords")]
#[command(author, version, about = "Tag charity profiles with UK charity activity keywords")]
#[command(long_about = r#"
prospie-keywords reads a charity's activities, objectives, areas of
operation, beneficiaries and causes, and tags it with keywords from the
UK Charity Activity Tags taxonomy.

The taxonomy is downloaded once per run (or read from --taxonomy-file).

Configuration files are loaded from (in priority order):
1. PROSPIE_* environment variables
2. --config <path>     Explicit config file
3. ./prospie.toml      Project-level config
4. ~/.config/prospie/config.toml   Global config

Example:
  prospie-keywords extract --activities "Mentoring for care leavers" --area Bristol
  prospie-keywords -o json batch charities.jsonl
  prospie-keywords bonus "Care Experienced=0.9" "Education=0.8"
"#)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// URL of the taxonomy CSV
    #[arg(long, value_name = "URL", global = true)]
    pub taxonomy_url: Option<String>,

    /// Read the taxonomy from a local CSV file instead of the network
    #[arg(long, value_name = "PATH", global = true, conflicts_with = "taxonomy_url")]
    pub taxonomy_file: Option<PathBuf>,

    /// Taxonomy load timeout in seconds
    #[arg(long, value_name = "SECONDS", global = true)]
    pub timeout: Option<u64>,

    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub output: Option<OutputFormat>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long, global = true)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Extract keywords for one charity profile
    Extract(ExtractArgs),

    /// Extract keywords for every profile in a JSON-lines file
    Batch {
        /// File with one JSON profile per line
        #[arg(value_name = "FILE")]
        path: PathBuf,
    },

    /// Load the taxonomy and list its rules
    Rules {
        /// Print only the number of rules
        #[arg(long)]
        count: bool,

        /// Only show rules whose tag contains this text
        #[arg(long, value_name = "TEXT")]
        filter: Option<String>,
    },

    /// Compute the keyword specificity bonus for strong matches
    Bonus {
        /// Keyword and match score, e.g. "Care Experienced=0.9"
        #[arg(value_name = "KEYWORD=SCORE", required = true)]
        matches: Vec<String>,
    },
}

/// Profile fields for `extract`
#[derive(Args, Debug, Default)]
pub struct ExtractArgs {
    /// Free-text description of activities
    #[arg(long, value_name = "TEXT")]
    pub activities: Option<String>,

    /// Free-text statement of objectives
    #[arg(long, value_name = "TEXT")]
    pub objectives: Option<String>,

    /// Area of operation (can be specified multiple times)
    #[arg(long, value_name = "AREA")]
    pub area: Vec<String>,

    /// Beneficiary group (can be specified multiple times)
    #[arg(long, value_name = "GROUP")]
    pub beneficiary: Vec<String>,

    /// Cause (can be specified multiple times)
    #[arg(long, value_name = "CAUSE")]
    pub cause: Vec<String>,

    /// Existing keyword to keep (can be specified multiple times)
    #[arg(short, long, value_name = "KEYWORD")]
    pub keyword: Vec<String>,

    /// Read the profile from a JSON file instead ("-" for stdin)
    #[arg(
        long,
        value_name = "FILE",
        conflicts_with_all = ["activities", "objectives", "area", "beneficiary", "cause", "keyword"]
    )]
    pub input: Option<PathBuf>,
}

impl ExtractArgs {
    /// Build a profile from the individual field flags.
    pub fn to_input(&self) -> ClassificationInput {
        let mut input = ClassificationInput::new()
            .with_areas(&self.area)
            .with_beneficiaries(&self.beneficiary)
            .with_causes(&self.cause)
            .with_existing_keywords(&self.keyword);
        if let Some(activities) = &self.activities {
            input = input.with_activities(activities);
        }
        if let Some(objectives) = &self.objectives {
            input = input.with_objectives(objectives);
        }
        input
    }
}
