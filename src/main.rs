//! pharma-readiness: persona-driven AI compliance assessments
//!
//! Composes pharmaceutical AI readiness assessments from a reference catalog
//! and evaluates answers against production-readiness rules.

#![allow(clippy::needless_pass_by_value)]

use anyhow::Result;
use clap::{Args, CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use pharma_readiness::{
    catalog::DocumentFormat,
    cli::{self, exit_codes},
    config::AppConfig,
    model::AssessmentConfiguration,
    reports::ReportFormat,
};
use std::io;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "pharma-readiness")]
#[command(version)]
#[command(about = "Persona-driven AI compliance assessments for pharmaceutical teams", long_about = None)]
#[command(after_help = "EXIT CODES:
    0  Success (readiness: production ready)
    1  Not production ready / catalog document has issues
    3  Error occurred

EXAMPLES:
    # Preview the assessment a data science lead would receive
    pharma-readiness preview --persona data-science --sub-persona data-head \\
        --therapeutic-area oncology --model-type generative-ai

    # Administrators see every section
    pharma-readiness preview --persona admin -o json

    # Gate a release on readiness
    pharma-readiness readiness answers.yaml --persona regulatory-quality --therapeutic-area oncology

    # Export the built-in catalog for editing, then use it
    pharma-readiness catalog seed -O catalog.yaml
    pharma-readiness --catalog catalog.yaml catalog stats")]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Only log errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    quiet: bool,

    /// Disable colored output (also respects `NO_COLOR` env)
    #[arg(long, global = true)]
    no_color: bool,

    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Catalog document to use instead of the built-in catalog
    #[arg(long, global = true, env = "PHARMA_READINESS_CATALOG")]
    catalog: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

/// Selection of persona and context shared by `preview` and `readiness`
#[derive(Args)]
struct SelectionArgs {
    /// Persona identifier (e.g. data-science, regulatory-quality, admin)
    #[arg(short, long)]
    persona: String,

    /// Sub-persona identifier owned by the persona
    #[arg(short, long)]
    sub_persona: Option<String>,

    /// Primary therapeutic area
    #[arg(short, long)]
    therapeutic_area: Option<String>,

    /// Additional therapeutic areas (repeatable)
    #[arg(long = "additional-area")]
    additional_areas: Vec<String>,

    /// AI model type (repeatable)
    #[arg(short, long = "model-type")]
    model_types: Vec<String>,

    /// Deployment scenario (repeatable)
    #[arg(short, long = "deployment")]
    deployments: Vec<String>,

    /// Company identifier carried into the report
    #[arg(long)]
    company: Option<String>,
}

impl SelectionArgs {
    fn into_configuration(self) -> AssessmentConfiguration {
        let mut builder = AssessmentConfiguration::builder(self.persona)
            .model_types(self.model_types)
            .deployments(self.deployments);
        if let Some(sub) = self.sub_persona {
            builder = builder.sub_persona(sub);
        }
        if let Some(area) = self.therapeutic_area {
            builder = builder.therapeutic_area(area);
        }
        for area in self.additional_areas {
            builder = builder.additional_therapeutic_area(area);
        }
        if let Some(company) = self.company {
            builder = builder.company(company);
        }
        builder.build()
    }
}

/// Report output flags
#[derive(Args)]
struct OutputArgs {
    /// Output format
    #[arg(short, long, default_value = "summary")]
    output: ReportFormat,

    /// Output file path (stdout if not specified)
    #[arg(short = 'O', long)]
    output_file: Option<PathBuf>,

    /// Emit compact single-line JSON
    #[arg(long)]
    compact: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Compose the assessment a persona would receive
    Preview {
        #[command(flatten)]
        selection: SelectionArgs,
        #[command(flatten)]
        output: OutputArgs,
    },

    /// Evaluate answers for production readiness
    Readiness {
        /// Responses file: JSON or YAML with an `answers` map of question id to answer
        responses: PathBuf,
        #[command(flatten)]
        selection: SelectionArgs,
        #[command(flatten)]
        output: OutputArgs,
        /// Required share of points answered, in (0, 1]
        #[arg(long)]
        threshold: Option<f64>,
        /// Lowest passing answer on a 1-5 scale
        #[arg(long)]
        scale_pass: Option<u8>,
    },

    /// Work with catalog documents
    Catalog {
        #[command(subcommand)]
        action: CatalogAction,
    },

    /// Inspect configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Subcommand)]
enum CatalogAction {
    /// Write the built-in catalog as a document
    Seed {
        /// Output file path (stdout if not specified)
        #[arg(short = 'O', long)]
        output_file: Option<PathBuf>,
        /// Document format (defaults to the file extension, then YAML)
        #[arg(short, long, value_enum)]
        format: Option<DocumentFormat>,
    },
    /// Check a catalog document and list every issue
    Validate {
        /// Catalog document (YAML or JSON)
        path: PathBuf,
    },
    /// Show table sizes of the active catalog
    Stats {
        #[command(flatten)]
        output: OutputArgs,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Print the effective configuration
    Show {
        /// Print a starter config file instead
        #[arg(long)]
        example: bool,
    },
    /// Print the JSON Schema of the config file
    Schema {
        /// Output file path (stdout if not specified)
        #[arg(short = 'O', long)]
        output_file: Option<PathBuf>,
    },
}

/// CLI flags expressed as config overrides.
fn overrides(catalog: Option<&PathBuf>, no_color: bool, output: Option<&OutputArgs>) -> AppConfig {
    let mut builder = AppConfig::builder();
    if let Some(path) = catalog {
        builder = builder.catalog_path(path.clone());
    }
    if let Some(output) = output {
        builder = builder
            .output_format(output.output)
            .output_file(output.output_file.clone())
            .pretty(!output.compact);
    }
    let mut config = builder.build();
    config.output.no_color = no_color;
    config
}

fn init_logging(cli: &Cli) {
    let log_level = if cli.verbose {
        "debug"
    } else if cli.quiet {
        "error"
    } else {
        "info"
    };
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
}

fn run(cli: Cli) -> Result<i32> {
    let Cli {
        no_color,
        config: config_path,
        catalog,
        command,
        ..
    } = cli;
    let load = |output: Option<&OutputArgs>| {
        let (config, loaded_from) = AppConfig::from_file_with_overrides(
            config_path.as_deref(),
            &overrides(catalog.as_ref(), no_color, output),
        );
        if let Some(path) = &loaded_from {
            tracing::debug!("Loaded config from {}", path.display());
        }
        (config, loaded_from)
    };

    match command {
        Commands::Preview { selection, output } => {
            let (config, _) = load(Some(&output));
            cli::run_preview(selection.into_configuration(), config)
        }

        Commands::Readiness {
            responses,
            selection,
            output,
            threshold,
            scale_pass,
        } => {
            let (mut config, _) = load(Some(&output));
            if let Some(threshold) = threshold {
                config.readiness.completion_threshold = threshold;
            }
            if let Some(scale_pass) = scale_pass {
                config.readiness.scale_pass_threshold = scale_pass;
            }
            cli::run_readiness(&responses, selection.into_configuration(), config)
        }

        Commands::Catalog { action } => match action {
            CatalogAction::Seed {
                output_file,
                format,
            } => cli::run_catalog_seed(output_file, format),
            CatalogAction::Validate { path } => cli::run_catalog_validate(&path),
            CatalogAction::Stats { output } => {
                let (config, _) = load(Some(&output));
                cli::run_catalog_stats(config)
            }
        },

        Commands::Config { action } => match action {
            ConfigAction::Show { example } => {
                let (config, loaded_from) = load(None);
                cli::run_config_show(&config, loaded_from.as_deref(), example)
            }
            ConfigAction::Schema { output_file } => cli::run_config_schema(output_file),
        },

        Commands::Completions { shell } => {
            generate(shell, &mut Cli::command(), "pharma-readiness", &mut io::stdout());
            Ok(exit_codes::SUCCESS)
        }
    }
}

fn main() {
    let cli = Cli::parse();
    init_logging(&cli);

    match run(cli) {
        Ok(exit_codes::SUCCESS) => {}
        Ok(code) => std::process::exit(code),
        Err(err) => {
            eprintln!("Error: {err:#}");
            std::process::exit(exit_codes::ERROR);
        }
    }
}
