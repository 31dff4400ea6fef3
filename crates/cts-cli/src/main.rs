use std::process::ExitCode;

use clap::{Parser, Subcommand};
use cts_builtins::{run_with_all_sources, SUITES};
use cts_ref::RefExecutor;
use tracing::info;

#[derive(Parser)]
#[command(name = "cts")]
#[command(about = "Builtin conformance suites against the reference executor")]
struct Args {
    #[command(subcommand)]
    cmd: Cmd,
}

#[derive(Subcommand)]
enum Cmd {
    /// List the registered suites.
    List,
    /// Run suites and print a per-suite summary.
    Run {
        /// Only run suites whose name contains this substring.
        #[arg(long)]
        filter: Option<String>,
        /// Emit the full per-case reports as JSON on stdout.
        #[arg(long)]
        json: bool,
    },
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    match args.cmd {
        Cmd::List => {
            for suite in SUITES {
                println!("{}", suite.name());
            }
            ExitCode::SUCCESS
        }
        Cmd::Run { filter, json } => run(filter.as_deref(), json),
    }
}

fn run(filter: Option<&str>, json: bool) -> ExitCode {
    let executor = RefExecutor::new();
    let mut failed = false;
    let mut selected = 0usize;
    let mut json_reports = serde_json::Map::new();

    for suite in SUITES {
        if let Some(needle) = filter {
            if !suite.name().contains(needle) {
                continue;
            }
        }
        selected += 1;

        let cases = (suite.build)();
        info!(suite = suite.name(), cases = cases.len(), "running");
        let report = run_with_all_sources(&executor, suite.op, &cases);
        failed |= !report.all_passed();

        if json {
            match serde_json::to_value(&report) {
                Ok(value) => {
                    json_reports.insert(suite.name().to_owned(), value);
                }
                Err(err) => {
                    eprintln!("cannot serialize report for {}: {err}", suite.name());
                    failed = true;
                }
            }
        } else {
            println!("{}: {report}", suite.name());
            for failure in report.failures().take(5) {
                println!(
                    "  {}: {}",
                    failure.id,
                    failure.message.as_deref().unwrap_or("(no detail)")
                );
            }
        }
    }

    if selected == 0 {
        eprintln!("no suite matches the filter");
        return ExitCode::FAILURE;
    }

    if json {
        match serde_json::to_string_pretty(&serde_json::Value::Object(json_reports)) {
            Ok(rendered) => println!("{rendered}"),
            Err(err) => {
                eprintln!("cannot render JSON report: {err}");
                failed = true;
            }
        }
    }

    if failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
