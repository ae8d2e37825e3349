//! # FanDesign CLI
//!
//! Command-line front end for `fan_core`: size a fan from typed inputs, print
//! the report or full JSON result, write the CAD scripts, and keep a history
//! of past calculations.

mod config;
mod error;
mod form;
mod report;

use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::thread;
use std::time::Duration;

use clap::{Parser, Subcommand};
use fan_core::calculations::advisor;
use fan_core::catalogs::{MaterialCatalog, ProfileCatalog};
use fan_core::file_io::{load_history_with_lock_check, load_or_create_history, save_history, write_scripts};
use fan_core::{design, DesignResult, FanInput, FileLock, HistoryLog};
use serde::Serialize;
use tracing::{info, warn};

use crate::config::Config;
use crate::error::{CliError, CliResult};
use crate::form::RawForm;

/// Extra attempts at the history lock before giving up
const LOCK_RETRIES: u32 = 5;

const LOCK_RETRY_DELAY: Duration = Duration::from_millis(200);

#[derive(Parser)]
#[command(name = "fandesign")]
#[command(about = "FanDesign - centrifugal fan sizing and CAD script generator", long_about = None)]
struct Cli {
    /// Path to a fandesign.toml config file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Size a fan and print the report
    Design {
        #[command(flatten)]
        form: RawForm,
        /// Start from inputs stored as JSON
        #[arg(long, value_name = "JSON")]
        input: Option<PathBuf>,
        /// Print the full result as JSON
        #[arg(long)]
        json: bool,
        /// Write the CAD scripts (defaults to the configured output directory)
        #[arg(long, value_name = "DIR", num_args = 0..=1, default_missing_value = "")]
        scripts: Option<PathBuf>,
        /// Do not record this run in the history log
        #[arg(long)]
        no_history: bool,
    },
    /// Browse recorded calculations
    #[command(subcommand)]
    History(HistoryCommands),
    /// List application profiles
    Profiles,
    /// List construction materials
    Materials,
    /// Recommended blade angles for an application profile
    Suggest {
        #[command(flatten)]
        form: RawForm,
    },
}

#[derive(Subcommand)]
enum HistoryCommands {
    /// List records, newest first
    List,
    /// Show one record as JSON
    Show {
        /// Record id or unique prefix
        id: String,
    },
    /// Recalculate a recorded input
    Rerun {
        /// Record id or unique prefix
        id: String,
        /// Print the full result as JSON
        #[arg(long)]
        json: bool,
    },
    /// Delete a record
    Delete {
        /// Record id or unique prefix
        id: String,
    },
}

fn main() -> ExitCode {
    // stdout carries reports and JSON only
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error [{}]: {}", e.code(), e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> CliResult<()> {
    let config = Config::load(cli.config.as_deref())?;

    match cli.command {
        Commands::Design {
            form,
            input,
            json,
            scripts,
            no_history,
        } => cmd_design(&config, &form, input.as_deref(), json, scripts, !no_history),
        Commands::History(history_cmd) => match history_cmd {
            HistoryCommands::List => cmd_history_list(&config),
            HistoryCommands::Show { id } => cmd_history_show(&config, &id),
            HistoryCommands::Rerun { id, json } => cmd_history_rerun(&config, &id, json),
            HistoryCommands::Delete { id } => cmd_history_delete(&config, &id),
        },
        Commands::Profiles => cmd_profiles(),
        Commands::Materials => cmd_materials(),
        Commands::Suggest { form } => cmd_suggest(&form),
    }
}

fn print_json<T: Serialize>(value: &T) -> CliResult<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn print_result(result: &DesignResult, json: bool) -> CliResult<()> {
    if json {
        print_json(result)
    } else {
        println!("{}", report::render(result));
        Ok(())
    }
}

fn read_input_file(path: &Path) -> CliResult<FanInput> {
    let input_error = |reason: String| CliError::InputFile {
        path: path.to_path_buf(),
        reason,
    };
    let text = fs::read_to_string(path).map_err(|e| input_error(e.to_string()))?;
    serde_json::from_str(&text).map_err(|e| input_error(e.to_string()))
}

/// Take the history lock, retrying while another process holds it
fn acquire_history_lock(config: &Config) -> CliResult<FileLock> {
    let mut attempt = 0;
    loop {
        match FileLock::acquire(&config.history_file, config.user_id.as_str()) {
            Ok(lock) => return Ok(lock),
            Err(e) if e.is_recoverable() && attempt < LOCK_RETRIES => {
                attempt += 1;
                warn!(attempt, error = %e, "history is locked, retrying");
                thread::sleep(LOCK_RETRY_DELAY);
            }
            Err(e) => return Err(e.into()),
        }
    }
}

/// Run `update` on the history log under its file lock, then save it
fn with_history<T>(config: &Config, update: impl FnOnce(&mut HistoryLog) -> CliResult<T>) -> CliResult<T> {
    let path = &config.history_file;
    let _lock = acquire_history_lock(config)?;
    let mut log = load_or_create_history(path)?;
    let value = update(&mut log)?;
    save_history(&log, path)?;
    Ok(value)
}

fn cmd_design(
    config: &Config,
    form: &RawForm,
    input_path: Option<&Path>,
    json: bool,
    scripts: Option<PathBuf>,
    record: bool,
) -> CliResult<()> {
    let base = match input_path {
        Some(path) => read_input_file(path)?,
        None => {
            if form.is_empty() {
                info!("no inputs given, designing the default fan");
            }
            FanInput::default()
        }
    };
    let input = form.apply(&base);
    let result = design(&input);

    print_result(&result, json)?;

    if let Some(dir) = scripts {
        let dir = if dir.as_os_str().is_empty() {
            config.output_dir.clone()
        } else {
            dir
        };
        let written = write_scripts(&result.scripts, &dir)?;
        for path in &written {
            eprintln!("Wrote {}", path.display());
        }
    }

    if record && config.record_history {
        let id = with_history(config, |log| Ok(log.record(&input, &result)))?;
        info!(%id, history = %config.history_file.display(), "design recorded");
    }

    Ok(())
}

fn cmd_history_list(config: &Config) -> CliResult<()> {
    let (log, lock) = load_history_with_lock_check(&config.history_file)?;
    if let Some(lock) = lock {
        eprintln!("(history is being edited by {} on {})", lock.user_id, lock.machine);
    }
    if log.is_empty() {
        println!("No recorded designs.");
        return Ok(());
    }
    for record in &log.records {
        println!("{}", report::history_line(record));
    }
    Ok(())
}

fn cmd_history_show(config: &Config, id: &str) -> CliResult<()> {
    let log = load_or_create_history(&config.history_file)?;
    print_json(log.find_by_prefix(id)?)
}

fn cmd_history_rerun(config: &Config, id: &str, json: bool) -> CliResult<()> {
    let log = load_or_create_history(&config.history_file)?;
    let record = log.find_by_prefix(id)?;
    print_result(&design(&record.inputs), json)
}

fn cmd_history_delete(config: &Config, id: &str) -> CliResult<()> {
    let removed = with_history(config, |log| {
        let record_id = log.find_by_prefix(id)?.id;
        Ok(log.remove(&record_id))
    })?;
    if let Some(record) = removed {
        println!("Deleted {}", record.id);
    }
    Ok(())
}

fn cmd_profiles() -> CliResult<()> {
    for profile in ProfileCatalog::STANDARD.iter() {
        println!(
            "{:<14} {:<26} {:<24} β2 {:>3.0}°  β1 {:>2.0}°",
            profile.key.code(),
            profile.label,
            profile.blade_type.display_name(),
            profile.outlet_angle_deg,
            profile.inlet_angle_deg
        );
        println!("               {}", profile.description);
    }
    Ok(())
}

fn cmd_materials() -> CliResult<()> {
    println!(
        "{:<15} {:<17} {:>8} {:>6} {:>5} {:>5} {:>6}",
        "Key", "Name", "kg/m³", "Fy MPa", "ν", "E GPa", "Price"
    );
    for material in MaterialCatalog::STANDARD.iter() {
        println!(
            "{:<15} {:<17} {:>8.0} {:>6.0} {:>5.2} {:>5.0} {:>6.2}",
            material.key.code(),
            material.name,
            material.density_kgm3,
            material.yield_mpa,
            material.poisson,
            material.youngs_gpa,
            material.unit_price
        );
    }
    Ok(())
}

#[derive(Serialize)]
struct Suggestion {
    advice: advisor::DesignAdvice,
    inputs: FanInput,
}

fn cmd_suggest(form: &RawForm) -> CliResult<()> {
    let input = form.apply(&FanInput::default());
    let suggestion = Suggestion {
        advice: advisor::advise(&input, &ProfileCatalog::STANDARD),
        inputs: advisor::apply_profile(&input, &ProfileCatalog::STANDARD),
    };
    print_json(&suggestion)
}
