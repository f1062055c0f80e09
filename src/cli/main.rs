//! sql-transmuter binary
//!
//! Reads pasted tabular data from a file or stdin and prints the generated
//! SQL to stdout. Diagnostics (parse summary, advisory suggestions, copy
//! acknowledgment) go to stderr so the SQL stays pipeable.

use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;

use sql_transmuter::cli::output;
use sql_transmuter::{GenerationSettings, Session, SqlOperation};

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
enum OperationArg {
    Insert,
    Update,
    Upsert,
}

impl From<OperationArg> for SqlOperation {
    fn from(arg: OperationArg) -> Self {
        match arg {
            OperationArg::Insert => SqlOperation::Insert,
            OperationArg::Update => SqlOperation::Update,
            OperationArg::Upsert => SqlOperation::Upsert,
        }
    }
}

/// Convert pasted spreadsheet or query-result data into SQL statements
#[derive(Debug, Parser)]
#[command(name = "sql-transmuter", version)]
struct Args {
    /// Input file with the pasted data; reads stdin when omitted
    input: Option<PathBuf>,

    /// Target table name
    #[arg(long, default_value = "TargetTable")]
    table: String,

    /// Statement kind to generate
    #[arg(long, value_enum, default_value = "insert")]
    operation: OperationArg,

    /// Primary key column for UPDATE (auto-detected from headers when omitted)
    #[arg(long)]
    primary_key: Option<String>,

    /// Wrap output in SET IDENTITY_INSERT ON/OFF directives
    #[arg(long)]
    identity_insert: bool,

    /// Print a parse summary to stderr
    #[arg(long)]
    summary: bool,

    /// Copy the generated SQL to the system clipboard
    #[cfg(feature = "clipboard")]
    #[arg(long)]
    copy: bool,

    /// Ask the advisory service for table/type suggestions (needs GEMINI_API_KEY)
    #[cfg(feature = "advisory-online")]
    #[arg(long)]
    analyze: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let raw = read_input(args.input.as_deref())?;

    let settings = GenerationSettings::new(&args.table)
        .with_operation(args.operation.into())
        .with_identity_insert(args.identity_insert);

    let mut session = Session::with_settings(settings);
    // An explicit key suppresses auto-detection in set_input.
    if let Some(pk) = &args.primary_key {
        session.set_primary_key(pk);
    }
    session.set_input(raw);

    if args.summary {
        eprint!("{}", output::format_summary(session.parsed(), session.delimiter()));
    }

    println!("{}", session.output());

    #[cfg(feature = "clipboard")]
    if args.copy {
        copy_to_clipboard(&session);
    }

    #[cfg(feature = "advisory-online")]
    if args.analyze {
        run_analysis(&session)?;
    }

    Ok(())
}

fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read input file {}", path.display())),
        None => {
            let mut raw = String::new();
            std::io::stdin()
                .read_to_string(&mut raw)
                .context("failed to read input from stdin")?;
            Ok(raw)
        }
    }
}

#[cfg(feature = "clipboard")]
fn copy_to_clipboard(session: &Session) {
    use sql_transmuter::SystemClipboard;

    // Clipboard trouble is never fatal: report and move on.
    match SystemClipboard::new() {
        Ok(mut clipboard) => {
            if session.copy_output(&mut clipboard) {
                eprintln!("Copied to clipboard.");
            } else {
                eprintln!("Could not copy to clipboard.");
            }
        }
        Err(e) => eprintln!("Could not copy to clipboard: {e}"),
    }
}

#[cfg(feature = "advisory-online")]
fn run_analysis(session: &Session) -> Result<()> {
    use sql_transmuter::advisory::{GeminiClient, suggest};

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("failed to start async runtime for advisory request")?;

    let client = GeminiClient::from_env();
    match runtime.block_on(suggest(&client, session.raw_input())) {
        Some(suggestion) => eprint!("{}", output::format_suggestion(&suggestion)),
        None => eprintln!("No advisory suggestion available."),
    }

    Ok(())
}
