use reqwest::StatusCode;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GrokirError {
    /// The request could not be built or sent.
    #[error("{0}")]
    Transport(String),

    /// The server answered with a status other than 200.
    #[error("{action} failed: {}", status_text(.status))]
    Server {
        action: &'static str,
        status: StatusCode,
    },

    #[error("decoding response: {0}")]
    Decode(String),

    /// Raised for a 404 as well as for a 200 carrying `found: false`.
    #[error("page not found: {0}")]
    NotFound(String),

    #[error("{0}")]
    Usage(String),

    #[error("unknown command: {0}")]
    UnknownCommand(String),

    #[error("formatting error: {0}")]
    Format(String),

    #[error("config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl GrokirError {
    /// Usage errors are the only ones that warrant re-printing the help text.
    pub fn is_usage(&self) -> bool {
        matches!(self, GrokirError::Usage(_))
    }
}

/// clap failures on either the global or a per-command parser are usage errors.
/// Only the first line of clap's report is kept; help is printed separately.
impl From<clap::Error> for GrokirError {
    fn from(err: clap::Error) -> Self {
        let rendered = err.to_string();
        let first = rendered.lines().next().unwrap_or_default();
        GrokirError::Usage(first.trim_start_matches("error: ").to_string())
    }
}

/// `500 Internal Server Error` for registered codes, the bare code otherwise.
///
/// reqwest does not expose a server-sent reason phrase, so only the canonical
/// one is available.
fn status_text(status: &StatusCode) -> String {
    match status.canonical_reason() {
        Some(reason) => format!("{} {}", status.as_u16(), reason),
        None => status.as_u16().to_string(),
    }
}

pub type Result<T> = std::result::Result<T, GrokirError>;
