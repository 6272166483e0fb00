//! # Command Layer
//!
//! Each sub-command is a small type implementing [`Command`]. Commands are
//! registered once in a static, name-keyed registry; there is no runtime
//! plugin loading.
//!
//! A command receives the raw argument slice that followed its name and parses
//! it with its own `clap` parser, so per-command flags can never collide with
//! the global ones. It then calls the client, formats the result with the
//! formatter chosen by the [`Runtime`], and writes it to the given sink.
//!
//! Dispatching an unregistered name fails with [`GrokirError::UnknownCommand`],
//! which is not a usage error.

use crate::client::Client;
use crate::config::GrokirConfig;
use crate::error::{GrokirError, Result};
use crate::format::{Formatter, OutputMode};
use clap::Parser;
use once_cell::sync::Lazy;
use once_cell::unsync::OnceCell;
use std::collections::BTreeMap;
use std::io::Write;
use tracing::debug;

pub mod page;
pub mod search;
pub mod version;

pub trait Command: Send + Sync {
    fn name(&self) -> &'static str;

    /// One-line invocation synopsis, e.g. `grokir page <slug>`.
    fn usage(&self) -> &'static str;

    /// Short description shown in the help listing.
    fn about(&self) -> &'static str;

    fn run(&self, rt: &Runtime, args: &[String], out: &mut dyn Write) -> Result<()>;
}

/// Shared dependencies for a single invocation.
///
/// The client is built on first use so commands that never talk to the API
/// (such as `version`) do not need a working configuration.
pub struct Runtime {
    output: OutputMode,
    client: OnceCell<Client>,
}

impl Runtime {
    pub fn new(output: OutputMode) -> Self {
        Self {
            output,
            client: OnceCell::new(),
        }
    }

    pub fn with_client(client: Client, output: OutputMode) -> Self {
        Self {
            output,
            client: OnceCell::from(client),
        }
    }

    pub fn output(&self) -> OutputMode {
        self.output
    }

    pub fn formatter(&self) -> Box<dyn Formatter> {
        self.output.formatter()
    }

    pub fn client(&self) -> Result<&Client> {
        self.client.get_or_try_init(|| {
            let config = GrokirConfig::resolve()?;
            debug!(base_url = %config.base_url, "building client");
            Client::new(&config)
        })
    }
}

static REGISTRY: Lazy<BTreeMap<&'static str, Box<dyn Command>>> = Lazy::new(|| {
    let commands: Vec<Box<dyn Command>> = vec![
        Box::new(search::SearchCommand),
        Box::new(page::PageCommand),
        Box::new(version::VersionCommand),
    ];
    commands.into_iter().map(|cmd| (cmd.name(), cmd)).collect()
});

pub fn get(name: &str) -> Option<&'static dyn Command> {
    REGISTRY.get(name).map(|cmd| cmd.as_ref())
}

/// All registered commands, ordered by name.
pub fn all() -> impl Iterator<Item = &'static dyn Command> {
    REGISTRY.values().map(|cmd| cmd.as_ref())
}

/// Look up `name` and run it with `args`.
pub fn run(rt: &Runtime, name: &str, args: &[String], out: &mut dyn Write) -> Result<()> {
    let cmd = get(name).ok_or_else(|| GrokirError::UnknownCommand(name.to_string()))?;
    debug!(command = name, ?args, "dispatching");
    cmd.run(rt, args, out)
}

/// Parse a command's own argument slice, turning clap failures into usage errors.
pub(crate) fn parse_args<P: Parser>(args: &[String]) -> Result<P> {
    Ok(P::try_parse_from(args)?)
}
