//! negari: scholarship readiness self-assessment
//!
//! Take the readiness quiz in a terminal, or score a saved answers file.

use anyhow::{Context, Result};
use clap::{Args, CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use negari_readiness::{
    cli,
    config::{self, AppConfig, ConfigPreset, Validatable},
    pipeline::exit_codes,
    reports::ReportFormat,
};
use std::io;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "negari")]
#[command(version)]
#[command(about = "Scholarship readiness self-assessment", long_about = None)]
#[command(after_help = "EXIT CODES:
    0  Success
    1  Readiness score below --min-score
    3  Error occurred

EXAMPLES:
    # Take the quiz and record the result
    negari assess --user-id student-123 --records-file assessments.jsonl

    # Score saved answers for a script
    negari score answers.yaml -o json --min-score 60

    # Review the questions and point values
    negari questions -o markdown")]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Disable colored output (also respects `NO_COLOR` env)
    #[arg(long, global = true)]
    no_color: bool,

    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Start from a named preset (default, ci, mentor) before applying the config file
    #[arg(long, global = true, value_parser = parse_preset)]
    preset: Option<ConfigPreset>,

    /// YAML or JSON question asset to use instead of the built-in set
    #[arg(long, global = true, env = "NEGARI_QUESTIONS")]
    questions: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

/// Output and scoring flags shared by the scoring subcommands
#[derive(Args)]
struct ReportArgs {
    /// Output format [default: summary, or the config file's format]
    #[arg(short, long, value_enum)]
    output: Option<ReportFormat>,

    /// Write the report to a file instead of stdout
    #[arg(long)]
    output_file: Option<PathBuf>,

    /// Also advise on a weak Academic subtotal
    #[arg(long)]
    academic_advisory: bool,

    /// Exit with code 1 when the percentage score is below this value
    #[arg(long)]
    min_score: Option<f64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Take the readiness assessment interactively
    Assess {
        #[command(flatten)]
        report: ReportArgs,

        /// User id to attach to the recorded result
        #[arg(long, env = "NEGARI_USER_ID")]
        user_id: Option<String>,

        /// JSON-lines file completed assessments are appended to
        #[arg(long)]
        records_file: Option<PathBuf>,
    },

    /// Score a YAML or JSON map of question id to option value
    Score {
        /// Answers file
        answers: PathBuf,

        #[command(flatten)]
        report: ReportArgs,
    },

    /// List the active question set
    Questions {
        /// Output format
        #[arg(short, long, value_enum)]
        output: Option<ReportFormat>,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },

    /// Generate JSON Schema for the config file format
    ConfigSchema {
        /// Write schema to file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show, discover, or initialize configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Sub-subcommands for the `config` command
#[derive(Subcommand)]
enum ConfigAction {
    /// Print current effective configuration (merged from defaults + file)
    Show,
    /// Print config file search paths and discovered config file
    Path,
    /// Generate an example .negari.yaml in the current directory
    Init,
}

fn main() {
    let cli = Cli::parse();

    // Logs go to stderr so reports on stdout stay clean
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| log_level.to_string()),
        ))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(io::stderr),
        )
        .init();

    let code = match run(&cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e:#}");
            exit_codes::ERROR
        }
    };
    std::process::exit(code);
}

fn run(cli: &Cli) -> Result<i32> {
    match &cli.command {
        Commands::Assess {
            report,
            user_id,
            records_file,
        } => {
            let overrides = report_overrides(cli, report)
                .user_id(user_id.clone())
                .records_file(records_file.clone())
                .build();
            cli::run_assess(&effective_config(cli, &overrides))
        }

        Commands::Score { answers, report } => {
            let overrides = report_overrides(cli, report).build();
            cli::run_score(answers, &effective_config(cli, &overrides))
        }

        Commands::Questions { output } => {
            let mut overrides = global_overrides(cli);
            if let Some(format) = *output {
                overrides = overrides.output_format(format);
            }
            cli::run_questions(&effective_config(cli, &overrides.build()))
        }

        Commands::Completions { shell } => {
            generate(*shell, &mut Cli::command(), "negari", &mut io::stdout());
            Ok(exit_codes::SUCCESS)
        }

        Commands::ConfigSchema { output } => {
            let schema = config::generate_json_schema();
            match output {
                Some(path) => {
                    std::fs::write(path, &schema)
                        .with_context(|| format!("failed to write {}", path.display()))?;
                    eprintln!("Schema written to {}", path.display());
                }
                None => println!("{schema}"),
            }
            Ok(exit_codes::SUCCESS)
        }

        Commands::Config { action } => match action {
            ConfigAction::Show => {
                let (config, loaded_from) = config::load_or_default(cli.config.as_deref());
                if let Some(path) = &loaded_from {
                    eprintln!("# Loaded from: {}", path.display());
                } else {
                    eprintln!("# No config file found; showing defaults");
                }
                let yaml = serde_yaml::to_string(&config).context("failed to serialize config")?;
                print!("{yaml}");
                Ok(exit_codes::SUCCESS)
            }
            ConfigAction::Path => {
                eprintln!("Config file search paths (in order):");
                for dir in config::config_search_dirs() {
                    eprintln!("  {}", dir.display());
                }
                eprintln!();
                eprintln!("Recognized file names:");
                for name in config::CONFIG_FILE_NAMES {
                    eprintln!("  {name}");
                }
                eprintln!();
                match config::discover_config_file(cli.config.as_deref()) {
                    Some(path) => eprintln!("Active config file: {}", path.display()),
                    None => eprintln!("No config file found."),
                }
                Ok(exit_codes::SUCCESS)
            }
            ConfigAction::Init => {
                let target = std::env::current_dir()
                    .context("cannot determine current directory")?
                    .join(".negari.yaml");
                if target.exists() {
                    anyhow::bail!(
                        "{} already exists. Remove it first to re-initialize.",
                        target.display()
                    );
                }
                std::fs::write(&target, config::generate_example_config())
                    .with_context(|| format!("failed to write {}", target.display()))?;
                eprintln!("Created {}", target.display());
                Ok(exit_codes::SUCCESS)
            }
        },
    }
}

/// Flags every command shares.
fn global_overrides(cli: &Cli) -> config::AppConfigBuilder {
    AppConfig::builder()
        .questions_file(cli.questions.clone())
        .quiet(cli.quiet)
        .no_color(cli.no_color)
}

fn report_overrides(cli: &Cli, report: &ReportArgs) -> config::AppConfigBuilder {
    let mut builder = global_overrides(cli)
        .output_file(report.output_file.clone())
        .academic_advisory(report.academic_advisory)
        .min_score(report.min_score);
    if let Some(format) = report.output {
        builder = builder.output_format(format);
    }
    builder
}

/// Layer the preset, the discovered config file and CLI flags, in that order.
fn effective_config(cli: &Cli, overrides: &AppConfig) -> AppConfig {
    let (file_config, loaded_from) = config::load_or_default(cli.config.as_deref());
    if let Some(path) = loaded_from {
        tracing::debug!("Using config file {}", path.display());
    }

    let mut config = cli
        .preset
        .map_or_else(AppConfig::default, AppConfig::from_preset);
    config.merge(&file_config);
    config.merge(overrides);

    for error in config.validate() {
        tracing::warn!("Invalid configuration: {error}");
    }
    config
}

fn parse_preset(name: &str) -> Result<ConfigPreset, String> {
    ConfigPreset::from_name(name).ok_or_else(|| {
        let known: Vec<&str> = ConfigPreset::all().iter().map(ConfigPreset::name).collect();
        format!("unknown preset '{name}' (expected one of: {})", known.join(", "))
    })
}
