use super::{parse_args, Command, Runtime};
use crate::error::{GrokirError, Result};
use clap::Parser;
use std::io::Write;
use tracing::debug;

pub const DEFAULT_LIMIT: i64 = 10;

#[derive(Parser, Debug)]
#[command(name = "search", no_binary_name = true, disable_help_flag = true)]
struct SearchArgs {
    /// Maximum number of results
    #[arg(short = 'l', long, default_value_t = DEFAULT_LIMIT, allow_negative_numbers = true)]
    limit: i64,

    /// Offset for pagination
    #[arg(short = 'o', long, default_value_t = 0, allow_negative_numbers = true)]
    offset: i64,

    /// Query words, joined with spaces
    query: Vec<String>,
}

pub struct SearchCommand;

impl Command for SearchCommand {
    fn name(&self) -> &'static str {
        "search"
    }

    fn usage(&self) -> &'static str {
        "grokir search <query> [-l <num>] [-o <num>]"
    }

    fn about(&self) -> &'static str {
        "Search articles on Grokipedia"
    }

    fn run(&self, rt: &Runtime, args: &[String], out: &mut dyn Write) -> Result<()> {
        let parsed: SearchArgs = parse_args(args)?;
        if parsed.query.is_empty() {
            return Err(GrokirError::Usage("missing search query".to_string()));
        }
        let query = parsed.query.join(" ");

        let results = rt.client()?.search(&query, parsed.limit, parsed.offset)?;
        debug!(%query, count = results.len(), output = ?rt.output(), "search complete");

        let formatter = rt.formatter();
        if results.is_empty() {
            write!(out, "{}", formatter.no_results())?;
            return Ok(());
        }

        let rendered = formatter.format_search(&results)?;
        write!(out, "{rendered}")?;
        Ok(())
    }
}
