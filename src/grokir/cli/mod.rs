//! # CLI Layer
//!
//! The only place that knows about stdout, stderr and process exit codes.
//!
//! 1. Parse the global flags (`--json`, `--verbose`, `--help`) with clap
//! 2. Initialize logging
//! 3. Build a [`Runtime`] for the selected output mode
//! 4. Hand the command name and its untouched arguments to the registry
//!
//! Errors bubble up to `main`, which prints them and exits non-zero. Usage
//! errors additionally get the top-level help text.

use clap::error::ErrorKind;
use clap::Parser;
use grokir::commands::{self, Runtime};
use grokir::error::{GrokirError, Result};
use grokir::format::OutputMode;
use grokir::logging;
use std::io::Write;

pub mod setup;

use setup::{get_help, Cli};

pub fn run() -> Result<()> {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if e.kind() == ErrorKind::DisplayVersion => e.exit(),
        Err(e) => return Err(e.into()),
    };

    logging::init(cli.verbose);

    if cli.help {
        print!("{}", get_help());
        return Ok(());
    }

    let Some((name, args)) = cli.command.as_ref().and_then(|inv| inv.split()) else {
        return Err(GrokirError::Usage("missing command".to_string()));
    };

    let rt = Runtime::new(OutputMode::from_json_flag(cli.json));
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    commands::run(&rt, name, args, &mut out)?;
    out.flush()?;
    Ok(())
}
