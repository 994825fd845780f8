//! Command-line entry point for the version bump tool.
//!
//! Parsing, planning and file updates live in the library; this binary wires
//! them to the terminal and maps the run's status to the exit code.

use std::io::{self, Write};
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt};

use update_version::cli::{CliArgs, resolve_plan};
use update_version::{
    UpdateError, UpdateVersionSettings, WriteMode, run_update, start_message, summary_message,
};

fn main() -> ExitCode {
    if let Err(e) = fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .try_init()
    {
        write_line(
            io::stderr().lock(),
            &format!("Warning: tracing init failed: {e}"),
        );
    }

    let args = CliArgs::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            write_line(io::stderr().lock(), &format!("Error: {err}"));
            ExitCode::FAILURE
        }
    }
}

fn run(args: &CliArgs) -> Result<(), UpdateError> {
    let settings = UpdateVersionSettings::load()?;
    let plan = resolve_plan(args, &settings)?;

    write_line(
        io::stdout().lock(),
        &start_message(plan.identity(), plan.version()),
    );
    let report = run_update(&plan)?;
    write_line(
        io::stdout().lock(),
        &summary_message(&report, plan.identity(), plan.version()),
    );
    if plan.write_mode() == WriteMode::DryRun {
        write_line(io::stdout().lock(), "Dry run: no files were written.");
    }
    report.status()
}

fn write_line(mut out: impl Write, message: &str) {
    if let Err(err) = writeln!(out, "{message}") {
        drop(err);
    }
}
