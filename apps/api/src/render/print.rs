//! Standalone, print-ready HTML document around a rendered page.
//!
//! The output has no scripts and no interactive affordances; printing it from
//! any browser (or feeding it to a headless HTML-to-PDF tool) yields the page.

use maud::{html, Markup, PreEscaped, DOCTYPE};

use crate::render::page::PageConfig;
use crate::render::VisualDocument;

/// Stylesheet shared by every layout family.
pub const STYLESHEET: &str = include_str!("../../assets/resume.css");

pub fn print_document(doc: &VisualDocument, page: &PageConfig) -> Markup {
    let page_rule = format!(
        "@page {{ size: {}; margin: 0; }}\n.resume-preview {{ max-width: {}px; margin: 0 auto; }}",
        page.size.css_size(),
        page.width_px
    );
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (doc.title) }
                style { (PreEscaped(STYLESHEET)) }
                style { (PreEscaped(page_rule)) }
            }
            body {
                (doc.markup)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::resume::ResumeData;
    use crate::render::page::{default_page_config, PageSize};
    use crate::render::render_resume;

    #[test]
    fn test_document_structure() {
        let page = default_page_config(PageSize::Letter);
        let doc = render_resume(&ResumeData::sample(), &page);
        let html = print_document(&doc, &page).into_string();
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>Alex Johnson — Resume</title>"));
        assert!(html.contains("@page { size: letter; margin: 0; }"));
        assert!(html.contains("id=\"resume-preview\""));
        assert!(!html.contains("<script"));
    }

    #[test]
    fn test_a4_page_rule() {
        let page = default_page_config(PageSize::A4);
        let doc = render_resume(&ResumeData::default(), &page);
        let html = print_document(&doc, &page).into_string();
        assert!(html.contains("size: A4"));
        assert!(html.contains("max-width: 794px"));
        assert!(html.contains("<title>Resume</title>"));
    }

    #[test]
    fn test_stylesheet_is_embedded() {
        let page = default_page_config(PageSize::Letter);
        let doc = render_resume(&ResumeData::default(), &page);
        let html = print_document(&doc, &page).into_string();
        assert!(html.contains(".resume-preview"));
        assert!(html.contains("@media print"));
    }
}
