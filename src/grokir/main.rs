//! # grokir
//!
//! The binary is intentionally thin: the CLI lives in `cli/`, and this file
//! only invokes `cli::run()` and handles process termination.
//!
//! ```text
//! grokir [--json] [-v] search <query> [-l <num>] [-o <num>]
//! grokir [--json] [-v] page <slug>
//! grokir version
//! ```

use colored::Colorize;

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("{} {}", "Error:".red(), e);
        if e.is_usage() {
            eprint!("{}", cli::setup::get_help());
        }
        std::process::exit(1);
    }
}
