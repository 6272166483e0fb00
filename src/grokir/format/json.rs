use super::Formatter;
use crate::error::{GrokirError, Result};
use crate::model::{Page, SearchResult};
use serde::Serialize;

/// Indented JSON with the complete field set, highlights included.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonFormatter;

fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value).map_err(|e| GrokirError::Format(format!("JSON error: {e}")))
}

impl Formatter for JsonFormatter {
    fn format_search(&self, results: &[SearchResult]) -> Result<String> {
        to_json(results)
    }

    fn format_page(&self, page: Option<&Page>) -> Result<String> {
        to_json(&page)
    }

    fn no_results(&self) -> String {
        "[]".to_string()
    }
}
