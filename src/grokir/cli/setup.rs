use clap::{Parser, Subcommand};
use grokir::commands;

pub const SEARCH_OPTIONS: &str = "\
  -l, --limit <num>     Maximum number of results (default: 10)
  -o, --offset <num>    Offset for pagination (default: 0)
";

#[derive(Parser, Debug)]
#[command(
    name = "grokir",
    bin_name = "grokir",
    version,
    disable_help_flag = true,
    disable_help_subcommand = true,
    allow_external_subcommands = true
)]
#[command(about = "Command-line client for Grokipedia", long_about = None)]
pub struct Cli {
    /// The command name followed by everything after it, unparsed
    #[command(subcommand)]
    pub command: Option<Invocation>,

    /// JSON output
    #[arg(long, help_heading = "Options")]
    pub json: bool,

    /// Verbose output (debug logging on stderr)
    #[arg(short, long, help_heading = "Options")]
    pub verbose: bool,

    /// Print help
    #[arg(short, long)]
    pub help: bool,
}

/// Every command is resolved through the registry, so clap only splits the
/// global flags from the command name and its own arguments.
#[derive(Subcommand, Debug)]
pub enum Invocation {
    #[command(external_subcommand)]
    Command(Vec<String>),
}

impl Invocation {
    pub fn split(&self) -> Option<(&str, &[String])> {
        let Invocation::Command(argv) = self;
        argv.split_first().map(|(name, args)| (name.as_str(), args))
    }
}

/// Top-level help, built from the command registry.
pub fn get_help() -> String {
    let mut output = String::new();
    output.push_str(&format!(
        "grokir {} - CLI for Grokipedia\n",
        env!("CARGO_PKG_VERSION")
    ));
    output.push('\n');
    output.push_str("Usage:\n");
    output.push_str("  grokir [OPTIONS] <COMMAND> [ARGS]...\n");
    for cmd in commands::all() {
        output.push_str(&format!("  {}\n", cmd.usage()));
    }

    output.push('\n');
    output.push_str("Commands:\n");
    for cmd in commands::all() {
        output.push_str(&format!("  {:<10} {}\n", cmd.name(), cmd.about()));
    }

    output.push('\n');
    output.push_str("Options:\n");
    output.push_str("      --json        JSON output\n");
    output.push_str("  -v, --verbose     Verbose output (debug logging on stderr)\n");
    output.push_str("  -h, --help        Print help\n");
    output.push_str("  -V, --version     Print version\n");

    output.push('\n');
    output.push_str("Search options:\n");
    output.push_str(SEARCH_OPTIONS);

    output
}
