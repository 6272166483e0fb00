use super::{parse_args, Command, Runtime};
use crate::error::{GrokirError, Result};
use clap::Parser;
use std::io::Write;

#[derive(Parser, Debug)]
#[command(name = "page", no_binary_name = true, disable_help_flag = true)]
struct PageArgs {
    /// Slug of the page to show
    slug: Option<String>,
}

pub struct PageCommand;

impl Command for PageCommand {
    fn name(&self) -> &'static str {
        "page"
    }

    fn usage(&self) -> &'static str {
        "grokir page <slug>"
    }

    fn about(&self) -> &'static str {
        "Show a page by slug"
    }

    fn run(&self, rt: &Runtime, args: &[String], out: &mut dyn Write) -> Result<()> {
        let parsed: PageArgs = parse_args(args)?;
        let slug = parsed
            .slug
            .ok_or_else(|| GrokirError::Usage("missing page slug".to_string()))?;

        let page = rt.client()?.get_page(&slug, true, false)?;
        let rendered = rt.formatter().format_page(Some(&page))?;
        write!(out, "{rendered}")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::memory::MemoryTransport;
    use crate::commands::test_support::{args, runtime};
    use crate::format::OutputMode;
    use crate::model::Page;
    use reqwest::StatusCode;

    const FOUND: &str = r#"{"found":true,"page":{"title":"Kubernetes","slug":"kubernetes","description":"Container orchestration system.","content":"Content goes here."}}"#;

    fn run_page(transport: &MemoryTransport, mode: OutputMode, argv: &[&str]) -> Result<String> {
        let rt = runtime(transport, mode);
        let mut out = Vec::new();
        PageCommand.run(&rt, &args(argv), &mut out)?;
        Ok(String::from_utf8(out).unwrap())
    }

    #[test]
    fn fetches_with_content_and_without_link_validation() {
        let transport = MemoryTransport::responding(StatusCode::OK, FOUND);
        run_page(&transport, OutputMode::Text, &["kubernetes"]).unwrap();

        let query = transport.requests()[0].url.query().unwrap().to_string();
        assert!(query.contains("slug=kubernetes"));
        assert!(query.contains("includeContent=true"));
        assert!(query.contains("validateLinks=false"));
    }

    #[test]
    fn renders_text() {
        let transport = MemoryTransport::responding(StatusCode::OK, FOUND);
        let out = run_page(&transport, OutputMode::Text, &["kubernetes"]).unwrap();
        assert!(out.starts_with("Title: Kubernetes\nSlug: kubernetes\n\nContainer orchestration system.\n"));
        assert!(out.ends_with("Content goes here."));
    }

    #[test]
    fn renders_json() {
        let transport = MemoryTransport::responding(StatusCode::OK, FOUND);
        let out = run_page(&transport, OutputMode::Json, &["kubernetes"]).unwrap();
        let page: Page = serde_json::from_str(&out).unwrap();
        assert_eq!(page.slug, "kubernetes");
        assert_eq!(page.content, "Content goes here.");
    }

    #[test]
    fn logical_not_found_is_an_error_and_prints_nothing() {
        let transport = MemoryTransport::responding(StatusCode::OK, r#"{"found":false,"page":null}"#);
        let rt = runtime(&transport, OutputMode::Json);
        let mut out = Vec::new();
        let err = PageCommand
            .run(&rt, &args(&["ghost"]), &mut out)
            .unwrap_err();
        assert_eq!(err.to_string(), "page not found: ghost");
        assert!(out.is_empty());
    }

    #[test]
    fn missing_slug_is_a_usage_error() {
        let transport = MemoryTransport::new();
        let err = run_page(&transport, OutputMode::Text, &[]).unwrap_err();
        assert!(err.is_usage());
        assert_eq!(err.to_string(), "missing page slug");
    }

    #[test]
    fn extra_arguments_are_a_usage_error() {
        let transport = MemoryTransport::new();
        let err = run_page(&transport, OutputMode::Text, &["a", "b"]).unwrap_err();
        assert!(err.is_usage());
        assert!(transport.requests().is_empty());
    }
}
