//! # Grokir Architecture
//!
//! Grokir is a small command-line client for the Grokipedia API: it runs a
//! full-text search or fetches a page by slug, and prints the result as plain
//! text or JSON.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses global flags, selects the output mode             │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Static name → command registry                           │
//! │  - Each command parses its own arguments                    │
//! │  - Calls the client, formats, writes to a sink              │
//! └─────────────────────────────────────────────────────────────┘
//!                 │                              │
//!                 ▼                              ▼
//! ┌───────────────────────────────┐  ┌──────────────────────────┐
//! │  Client (client/)             │  │  Formatters (format/)    │
//! │  - Builds GET requests        │  │  - Text and JSON         │
//! │  - Decodes JSON envelopes     │  │  - Pure, no I/O          │
//! │  - Maps statuses to errors    │  │                          │
//! └───────────────────────────────┘  └──────────────────────────┘
//!                 │
//!                 ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Transport (client/http.rs, client/memory.rs)               │
//! │  - Blocking reqwest in production, canned responses in tests│
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! Everything is synchronous: one invocation makes at most one request, with
//! no retries and no caching.
//!
//! ## Testing Strategy
//!
//! 1. **Client** (`client/`): request building and status/envelope handling
//!    against [`client::memory::MemoryTransport`].
//! 2. **Formatters** (`format/`): exact text layout and JSON round-trips.
//! 3. **Commands** (`commands/`): argument parsing and dispatch, again over the
//!    in-memory transport.
//! 4. **Binary** (`tests/`): exit codes, help output, and real HTTP round-trips
//!    against a mock server.
//!
//! ## Module Overview
//!
//! - [`client`]: API client and transports
//! - [`commands`]: Command registry and the `search`, `page`, `version` commands
//! - [`format`]: Output modes and renderers
//! - [`model`]: `SearchResult` and `Page`
//! - [`config`]: Base URL and user agent configuration
//! - [`logging`]: `tracing` subscriber setup
//! - [`error`]: Error types

pub mod client;
pub mod commands;
pub mod config;
pub mod error;
pub mod format;
pub mod logging;
pub mod model;
