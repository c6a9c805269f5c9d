//! Binary entrypoint: read one JSON request from stdin, write one report to stdout.
//!
//! Output is a DiagnosisReport (`--format json`), the bare script text
//! (`--format script`), or the question catalog (`--format catalog`, no stdin).
//! Rejected requests produce an ErrorOutput line and exit code 1.

use clap::{Parser, ValueEnum};
use diagnosis_engine::types::ErrorOutput;
use diagnosis_engine::{Catalog, Config, DiagnosisRequest, Engine, EngineError};
use std::io::{self, Read, Write};
use tracing_subscriber::EnvFilter;

mod exit_code {
  pub const SUCCESS: i32 = 0;
  pub const REJECTED: i32 = 1;
  pub const IO_FAILURE: i32 = 2;
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum OutputFormat {
  Json,
  Script,
  Catalog,
}

#[derive(Parser)]
#[command(
  name = "diagnosis-engine",
  version,
  about = "Corporate risk diagnosis: weighted scoring and consulting script generation"
)]
struct Cli {
  #[arg(short, long, value_enum, default_value = "json")]
  format: OutputFormat,

  /// Max number of priority items (default 5)
  #[arg(long)]
  limit: Option<usize>,

  /// Substitute no-risk answers for categories missing from the request
  #[arg(long)]
  fill_unanswered: bool,
}

fn init_tracing() {
  let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
  tracing_subscriber::fmt()
    .with_env_filter(filter)
    .with_writer(io::stderr)
    .with_target(false)
    .init();
}

fn main() {
  init_tracing();
  let cli = Cli::parse();

  let mut config = Config {
    fill_unanswered: cli.fill_unanswered,
    ..Config::default()
  };
  if let Some(limit) = cli.limit {
    config.priority_limit = limit;
  }
  let engine = Engine::new(config, Catalog::standard());

  let code = match run_binary(&engine, cli.format) {
    Ok(code) => code,
    Err(e) => {
      tracing::error!(error = %e, "i/o failure");
      let _ = writeln!(io::stderr(), "diagnosis-engine error: {}", e);
      exit_code::IO_FAILURE
    }
  };
  std::process::exit(code);
}

fn run_binary(engine: &Engine, format: OutputFormat) -> io::Result<i32> {
  let stdout = io::stdout();
  let mut out = io::BufWriter::new(stdout.lock());

  if let OutputFormat::Catalog = format {
    serde_json::to_writer(&mut out, &engine.catalog_view())?;
    writeln!(out)?;
    out.flush()?;
    return Ok(exit_code::SUCCESS);
  }

  let mut raw = String::new();
  io::stdin().lock().read_to_string(&mut raw)?;

  let now = chrono::Local::now().naive_local();
  let result = serde_json::from_str::<DiagnosisRequest>(&raw)
    .map_err(EngineError::from)
    .and_then(|request| engine.diagnose(&request, now));

  let code = match result {
    Ok(report) => {
      match format {
        OutputFormat::Script => out.write_all(report.script.as_bytes())?,
        _ => serde_json::to_writer(&mut out, &report)?,
      }
      writeln!(out)?;
      exit_code::SUCCESS
    }
    Err(e) => {
      tracing::warn!(error = %e, "rejected request");
      let mut err = ErrorOutput::new(e.to_string());
      if let Some(field) = e.field() {
        err = err.with_field(field);
      }
      serde_json::to_writer(&mut out, &err)?;
      writeln!(out)?;
      exit_code::REJECTED
    }
  };

  out.flush()?;
  Ok(code)
}
