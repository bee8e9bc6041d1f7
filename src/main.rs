mod database;
mod error;
mod frontmatter;

use clap::Parser;
use std::io::{self, IsTerminal, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

const AFTER_HELP: &str = "\
Examples:
  get-database-path docs/api-reference.md

  # In a shell script:
  DB_PATH=$(get-database-path docs/api-reference.md)
  echo \"Database: $DB_PATH\"

Output:
  Prints the database path to stdout with leading slashes removed.
  Prints the default path when the file cannot be read or declares no
  test.local_database. Always exits with status 0.";

#[derive(Parser)]
#[command(
    name = "get-database-path",
    version,
    about = "Extract the test database path from markdown frontmatter",
    after_help = AFTER_HELP
)]
struct Cli {
    #[arg(help = "Path to the markdown file to process")]
    filepath: PathBuf,

    #[arg(
        long,
        env = "GET_DATABASE_PATH_DEFAULT",
        default_value = database::DEFAULT_DATABASE_PATH,
        help = "Path printed when the file declares no database"
    )]
    default: String,

    #[arg(short, long, help = "Log diagnostics to stderr")]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let extracted = database::extract_from_file(&cli.filepath);
    if extracted.as_deref().map_or(true, str::is_empty) {
        info!(path = %cli.filepath.display(), default = %cli.default, "using default database path");
    }

    let db_path = database::resolve(extracted, &cli.default);
    if let Err(err) = write_line(io::stdout().lock(), &db_path) {
        warn!(error = %err, "failed to write database path to stdout");
    }

    ExitCode::SUCCESS
}

fn write_line(mut out: impl Write, line: &str) -> io::Result<()> {
    writeln!(out, "{}", line)?;
    out.flush()
}

// stdout carries the result, so logs go to stderr.
fn init_logging(verbose: bool) {
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .try_init();
}
