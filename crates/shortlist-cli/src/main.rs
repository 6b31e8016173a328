mod commands;
mod output;
mod telemetry;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use commands::{parse_date, CriteriaArgs, DocumentArgs};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "shortlist",
    version,
    about = "Résumé screening and interview tracking for front-line recruitment"
)]
struct Cli {
    /// Log level or filter (e.g. "info", "shortlist_core=debug"); RUST_LOG overrides
    #[arg(long, global = true, default_value = "warn", value_name = "LEVEL")]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract candidate fields from résumés (without screening)
    Extract {
        #[command(flatten)]
        docs: DocumentArgs,

        /// Output format: table (default) or json
        #[arg(short, long, default_value = "table")]
        output: String,
    },
    /// Extract and screen résumés against eligibility criteria
    Screen {
        #[command(flatten)]
        docs: DocumentArgs,

        #[command(flatten)]
        criteria: CriteriaArgs,

        /// Output format: table (default), json or csv
        #[arg(short, long, default_value = "table")]
        output: String,

        /// Also write the report to a file (.json for JSON, otherwise CSV)
        #[arg(short = 'O', long = "out", value_name = "FILE")]
        out: Option<PathBuf>,

        /// Show the result of every check per candidate
        #[arg(long)]
        verbose: bool,
    },
    /// Manage and inspect eligibility criteria
    Criteria {
        #[command(subcommand)]
        action: CriteriaAction,
    },
    /// Print the field extraction rules
    Rules,
    /// Screen résumés and export an interview tracker for the shortlist
    Interview {
        #[command(flatten)]
        docs: DocumentArgs,

        #[command(flatten)]
        criteria: CriteriaArgs,

        /// Interviewer roster JSON file (default: built-in roster)
        #[arg(long, value_name = "FILE")]
        roster: Option<PathBuf>,

        /// JSON plan with per-candidate interview details
        #[arg(long, value_name = "FILE")]
        plan: Option<PathBuf>,

        /// Default interview date (YYYY-MM-DD, default: the --as-of date)
        #[arg(long, value_name = "DATE", value_parser = parse_date)]
        date: Option<NaiveDate>,

        /// Tracker file to write (.xlsx or .csv)
        #[arg(short = 'O', long = "out", value_name = "FILE")]
        out: PathBuf,
    },
}

#[derive(Subcommand)]
enum CriteriaAction {
    /// List predefined criteria
    List,
    /// Explain a preset in plain language
    Explain {
        /// Preset name (e.g., "front-desk")
        preset: String,
    },
    /// Print the JSON schema with field descriptions and example
    Schema,
    /// Validate a custom criteria file
    Validate {
        /// Path to JSON criteria file
        file: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = telemetry::init(&cli.log_level).and_then(|()| match cli.command {
        Commands::Extract { docs, output } => commands::extract::run(&docs, &output),
        Commands::Screen {
            docs,
            criteria,
            output,
            out,
            verbose,
        } => commands::screen::run(&docs, &criteria, &output, out.as_deref(), verbose),
        Commands::Criteria { action } => match action {
            CriteriaAction::List => commands::criteria::list(),
            CriteriaAction::Explain { preset } => commands::criteria::explain(&preset),
            CriteriaAction::Schema => commands::criteria::schema(),
            CriteriaAction::Validate { file } => commands::criteria::validate(&file),
        },
        Commands::Rules => commands::rules::run(),
        Commands::Interview {
            docs,
            criteria,
            roster,
            plan,
            date,
            out,
        } => commands::interview::run(
            &docs,
            &criteria,
            commands::interview::InterviewOptions {
                roster: roster.as_deref(),
                plan: plan.as_deref(),
                date,
                out: &out,
            },
        ),
    });

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
