mod error;
mod input;
mod logging;
mod model;
mod pipeline;
mod report;

use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};

use crate::error::AppError;
use crate::input::{load_scaling, load_subjects, load_table};
use crate::model::reference::{default_mandatory_subjects, reference_table};
use crate::model::table::AtarTable;
use crate::model::{MandatorySubjects, ScalingLookup};
use crate::pipeline::stage3_convert::convert;
use crate::pipeline::stage4_scenarios::project;
use crate::pipeline::stage5_report::{Stage5Input, build_target, write_reports};
use crate::pipeline::{PredictionContext, predict};
use crate::report::format_f64_2;

#[derive(Debug, Parser)]
#[command(
    name = "atar-predictor",
    version,
    about = "Predict a tertiary admission rank from subject scores"
)]
struct Cli {
    /// Log filter used when RUST_LOG is unset
    #[arg(long, global = true, env = "ATAR_LOG_LEVEL", default_value = "info")]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Predict a rank and write reports
    Run(RunArgs),
    /// Convert a single aggregate to a percentile rank
    Convert {
        aggregate: f64,
        /// Lookup table (TSV or JSON); built-in reference table if omitted
        #[arg(long)]
        table: Option<PathBuf>,
    },
    /// Print the active lookup table
    Table {
        #[arg(long)]
        table: Option<PathBuf>,
    },
}

#[derive(Debug, Clone, Args)]
struct RunArgs {
    /// Subject scores (TSV or JSON, optionally gzipped)
    #[arg(long)]
    subjects: PathBuf,

    /// Per-subject scaling parameters
    #[arg(long)]
    scaling: Option<PathBuf>,

    /// Lookup table (TSV or JSON)
    #[arg(long)]
    table: Option<PathBuf>,

    /// Subject ids satisfying the mandatory requirement (comma-separated)
    #[arg(long, value_delimiter = ',')]
    mandatory: Vec<String>,

    /// Target rank to plan against
    #[arg(long)]
    target: Option<f64>,

    /// Output directory
    #[arg(long)]
    out: PathBuf,

    /// Skip best/worst case projections
    #[arg(long)]
    no_scenarios: bool,
}

#[derive(Debug, Clone)]
struct RunConfig {
    subjects_path: PathBuf,
    scaling_path: Option<PathBuf>,
    table_path: Option<PathBuf>,
    mandatory: MandatorySubjects,
    target: Option<f64>,
    out_dir: PathBuf,
    scenarios: bool,
}

impl RunConfig {
    fn from_args(args: RunArgs) -> Result<Self, AppError> {
        let mandatory: MandatorySubjects = args
            .mandatory
            .iter()
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
            .map(|s| s.to_string())
            .collect();
        let mandatory = if mandatory.is_empty() {
            default_mandatory_subjects()
        } else {
            mandatory
        };

        if let Some(target) = args.target {
            if !(target > 0.0 && target <= 100.0) {
                return Err(AppError::InvalidArgument(format!(
                    "--target must be in (0, 100], got {target}"
                )));
            }
        }

        Ok(Self {
            subjects_path: args.subjects,
            scaling_path: args.scaling,
            table_path: args.table,
            mandatory,
            target: args.target,
            out_dir: args.out,
            scenarios: !args.no_scenarios,
        })
    }
}

fn main() {
    if let Err(err) = try_main(Cli::parse()) {
        eprintln!("{err}");
        std::process::exit(1);
    }
}

fn try_main(cli: Cli) -> Result<(), AppError> {
    logging::init(&cli.log_level)?;
    match cli.command {
        Command::Run(args) => run(&RunConfig::from_args(args)?),
        Command::Convert { aggregate, table } => {
            let table = resolve_table(table.as_deref())?;
            println!("{}", format_f64_2(convert(aggregate, &table)));
            Ok(())
        }
        Command::Table { table } => {
            let table = resolve_table(table.as_deref())?;
            println!("rank\tmin_aggregate");
            for cp in table.checkpoints() {
                println!("{}\t{}", format_f64_2(cp.rank), format_f64_2(cp.min_aggregate));
            }
            Ok(())
        }
    }
}

fn run(config: &RunConfig) -> Result<(), AppError> {
    let subjects = load_subjects(&config.subjects_path)?;
    let scaling = match &config.scaling_path {
        Some(path) => load_scaling(path)?,
        None => {
            tracing::info!("no scaling file given; all subjects use neutral scaling");
            ScalingLookup::new()
        }
    };
    let table = resolve_table(config.table_path.as_deref())?;

    let ctx = PredictionContext {
        scaling: &scaling,
        mandatory: &config.mandatory,
        table: &table,
    };
    let prediction = predict(&subjects, &ctx);
    let scenarios = config.scenarios.then(|| project(&subjects, &ctx));
    let target = config
        .target
        .map(|rank| build_target(rank, &table, prediction.result.aggregate));

    if prediction.result.is_computable() {
        tracing::info!(
            aggregate = prediction.result.aggregate,
            rank = prediction.result.percentile_rank,
            "prediction complete"
        );
    } else if prediction.composition.contributing_subjects.is_empty() {
        tracing::warn!("no prediction possible without a mandatory subject");
    } else {
        tracing::warn!("counted subjects total an aggregate of zero; no prediction possible");
    }

    let input = Stage5Input {
        subjects_path: config.subjects_path.display().to_string(),
        scaling_source: source_label(config.scaling_path.as_deref(), "none"),
        table_source: source_label(config.table_path.as_deref(), "built-in reference"),
        n_scaled_subjects: subjects
            .iter()
            .filter(|s| scaling.contains_key(&s.subject_id))
            .count(),
        mandatory: &config.mandatory,
        prediction: &prediction,
        scenarios: scenarios.as_ref(),
        target,
        tool_name: env!("CARGO_PKG_NAME").to_string(),
        tool_version: env!("CARGO_PKG_VERSION").to_string(),
    };
    write_reports(&input, &config.out_dir)?;

    Ok(())
}

fn resolve_table(path: Option<&Path>) -> Result<AtarTable, AppError> {
    match path {
        Some(path) => Ok(load_table(path)?),
        None => Ok(reference_table()?),
    }
}

fn source_label(path: Option<&Path>, fallback: &str) -> String {
    path.map(|p| p.display().to_string())
        .unwrap_or_else(|| fallback.to_string())
}

#[cfg(test)]
#[path = "../tests/src_inline/main_inline.rs"]
mod tests;
