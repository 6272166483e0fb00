//! # Output Formatting
//!
//! Two interchangeable renderers turn client results into the string that is
//! printed: [`text::TextFormatter`] for people and [`json::JsonFormatter`] for
//! scripts. Which one is used is decided once per invocation by [`OutputMode`].
//!
//! Formatters are pure: they never write to stdout and always produce the same
//! string for the same input. Printing is the command's job.

use crate::error::Result;
use crate::model::{Page, SearchResult};

pub mod json;
pub mod text;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    #[default]
    Text,
    Json,
}

impl OutputMode {
    pub fn from_json_flag(json: bool) -> Self {
        if json {
            OutputMode::Json
        } else {
            OutputMode::Text
        }
    }

    pub fn formatter(self) -> Box<dyn Formatter> {
        match self {
            OutputMode::Text => Box::new(text::TextFormatter),
            OutputMode::Json => Box::new(json::JsonFormatter),
        }
    }
}

pub trait Formatter {
    fn format_search(&self, results: &[SearchResult]) -> Result<String>;

    /// `None` stands for a page that could not be produced.
    fn format_page(&self, page: Option<&Page>) -> Result<String>;

    /// Output for a search that matched nothing.
    fn no_results(&self) -> String;
}
