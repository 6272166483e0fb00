use super::Formatter;
use crate::error::Result;
use crate::model::{Page, SearchResult};

pub const NO_RESULTS_MESSAGE: &str = "No results found. Try different keywords.\n";

/// Snippets longer than this many characters are cut and get an ellipsis.
pub const SNIPPET_MAX_CHARS: usize = 200;
const ELLIPSIS: &str = "...";
const SEPARATOR_WIDTH: usize = 40;

/// Compact, terminal-friendly plain text.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextFormatter;

impl Formatter for TextFormatter {
    fn format_search(&self, results: &[SearchResult]) -> Result<String> {
        let mut out = String::new();
        for (i, r) in results.iter().enumerate() {
            if i > 0 {
                out.push('\n');
            }
            out.push_str(&format!("{}) {}\n", i + 1, r.title));
            out.push_str(&format!(
                "   slug: {} | relevance: {:.2} | views: {}\n",
                r.slug,
                r.relevance_score,
                format_views(r.view_count)
            ));
            if !r.snippet.is_empty() {
                out.push_str(&format!("   {}\n", truncate(&r.snippet, SNIPPET_MAX_CHARS)));
            }
        }
        Ok(out)
    }

    fn format_page(&self, page: Option<&Page>) -> Result<String> {
        let Some(page) = page else {
            return Ok(String::new());
        };

        let mut out = String::new();
        out.push_str(&format!("Title: {}\n", page.title));
        out.push_str(&format!("Slug: {}\n", page.slug));
        if !page.description.is_empty() {
            out.push_str(&format!("\n{}\n", normalize(&page.description)));
        }
        out.push_str(&"-".repeat(SEPARATOR_WIDTH));
        out.push('\n');
        out.push_str(&page.content);
        Ok(out)
    }

    fn no_results(&self) -> String {
        NO_RESULTS_MESSAGE.to_string()
    }
}

/// Collapse every run of whitespace (newlines and tabs included) into a single space.
pub fn normalize(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Normalize, then cap at `max_chars` characters.
pub fn truncate(s: &str, max_chars: usize) -> String {
    let s = normalize(s);
    if s.chars().count() <= max_chars {
        return s;
    }
    let cut: String = s.chars().take(max_chars).collect();
    format!("{}{}", cut.trim_end_matches(' '), ELLIPSIS)
}

/// Group digits in threes with commas: 1234567 -> "1,234,567".
pub fn format_views(n: u64) -> String {
    let digits = n.to_string();
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(title: &str, slug: &str, snippet: &str) -> SearchResult {
        SearchResult {
            slug: slug.into(),
            title: title.into(),
            snippet: snippet.into(),
            relevance_score: 0.5,
            view_count: 50,
            ..Default::default()
        }
    }

    #[test]
    fn test_format_views() {
        assert_eq!(format_views(0), "0");
        assert_eq!(format_views(999), "999");
        assert_eq!(format_views(1000), "1,000");
        assert_eq!(format_views(12500), "12,500");
        assert_eq!(format_views(100_000), "100,000");
        assert_eq!(format_views(1_234_567), "1,234,567");
        assert_eq!(format_views(u64::MAX), "18,446,744,073,709,551,615");
    }

    #[test]
    fn test_normalize() {
        assert_eq!(normalize("a\nb\tc   d"), "a b c d");
        assert_eq!(normalize("  padded \n"), "padded");
        assert_eq!(normalize(""), "");
    }

    #[test]
    fn test_truncate_short_input_untouched() {
        assert_eq!(truncate("short\nsnippet", 200), "short snippet");
    }

    #[test]
    fn test_truncate_trims_before_ellipsis() {
        assert_eq!(truncate("abcd efgh", 5), "abcd...");
    }

    #[test]
    fn test_truncate_counts_characters_not_bytes() {
        let s = "é".repeat(10);
        assert_eq!(truncate(&s, 4), "éééé...");
    }

    #[test]
    fn single_result_layout() {
        let mut r = result(
            "Kubernetes Scheduling",
            "kubernetes-scheduling",
            "The scheduler decides where pods run.",
        );
        r.relevance_score = 0.95;
        r.view_count = 12500;

        let out = TextFormatter.format_search(&[r]).unwrap();
        assert_eq!(
            out,
            "1) Kubernetes Scheduling\n   slug: kubernetes-scheduling | relevance: 0.95 | views: 12,500\n   The scheduler decides where pods run.\n"
        );
    }

    #[test]
    fn results_are_numbered_and_separated_by_one_blank_line() {
        let out = TextFormatter
            .format_search(&[
                result("First", "first", "Snippet one"),
                result("Second", "second", "Snippet two"),
            ])
            .unwrap();
        assert!(out.contains("1) First"));
        assert!(out.contains("Snippet one\n\n2) Second"));
        assert!(!out.contains("\n\n\n"));
        assert!(out.ends_with("Snippet two\n"));
    }

    #[test]
    fn result_without_snippet_has_no_snippet_line() {
        let out = TextFormatter
            .format_search(&[result("No Snippet", "no-snippet", "")])
            .unwrap();
        assert_eq!(out.lines().count(), 2);
        assert!(!out.contains("   \n"));
    }

    #[test]
    fn long_snippet_is_truncated() {
        // "w000 w001 ..." cut to exactly 250 characters
        let snippet: String = (0..60)
            .map(|i| format!("w{i:03}"))
            .collect::<Vec<_>>()
            .join(" ")
            .chars()
            .take(250)
            .collect();
        assert_eq!(snippet.chars().count(), 250);

        let out = TextFormatter
            .format_search(&[result("Long", "long", &snippet)])
            .unwrap();

        let line = out.lines().nth(2).unwrap();
        let body = line.strip_prefix("   ").unwrap();
        assert!(body.chars().count() <= SNIPPET_MAX_CHARS + 3);
        assert!(body.ends_with("w039..."));
        assert!(body.starts_with(&snippet[..199]));
        assert!(!out.contains("w040"));
    }

    #[test]
    fn snippet_whitespace_is_normalized() {
        let out = TextFormatter
            .format_search(&[result("T", "t", "line one\n\tline   two")])
            .unwrap();
        assert!(out.contains("   line one line two\n"));
    }

    #[test]
    fn page_with_description() {
        let page = Page {
            title: "Kubernetes".into(),
            slug: "kubernetes".into(),
            description: "Container\norchestration   system.".into(),
            content: "Content goes here.\n\n  Indented stays.".into(),
        };
        let out = TextFormatter.format_page(Some(&page)).unwrap();
        let expected = format!(
            "Title: Kubernetes\nSlug: kubernetes\n\nContainer orchestration system.\n{}\nContent goes here.\n\n  Indented stays.",
            "-".repeat(40)
        );
        assert_eq!(out, expected);
    }

    #[test]
    fn page_without_description_skips_blank_line() {
        let page = Page {
            title: "NoDesc".into(),
            slug: "nodesc".into(),
            content: "Just content.".into(),
            ..Default::default()
        };
        let out = TextFormatter.format_page(Some(&page)).unwrap();
        assert!(out.starts_with("Title: NoDesc\nSlug: nodesc\n----"));
        assert!(out.ends_with("Just content."));
    }

    #[test]
    fn absent_page_renders_nothing() {
        assert_eq!(TextFormatter.format_page(None).unwrap(), "");
    }

    #[test]
    fn no_results_message_is_fixed() {
        assert_eq!(
            TextFormatter.no_results(),
            "No results found. Try different keywords.\n"
        );
    }
}
