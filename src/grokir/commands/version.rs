use super::{parse_args, Command, Runtime};
use crate::error::Result;
use clap::Parser;
use std::io::Write;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Parser, Debug)]
#[command(name = "version", no_binary_name = true, disable_help_flag = true)]
struct VersionArgs {}

pub struct VersionCommand;

impl Command for VersionCommand {
    fn name(&self) -> &'static str {
        "version"
    }

    fn usage(&self) -> &'static str {
        "grokir version"
    }

    fn about(&self) -> &'static str {
        "Show version"
    }

    fn run(&self, _rt: &Runtime, args: &[String], out: &mut dyn Write) -> Result<()> {
        let _: VersionArgs = parse_args(args)?;
        writeln!(out, "Version: {VERSION}")?;
        Ok(())
    }
}
