// Résumé rendering: data model + theme → HTML page fragment.
// Pure and synchronous; callers on the async runtime use spawn_blocking.

pub mod format;
pub mod handlers;
pub mod layouts;
pub mod page;
pub mod parts;
pub mod print;

use maud::{html, Markup};
use serde::Serialize;

use crate::models::resume::ResumeData;
use crate::render::page::PageConfig;
use crate::templates::{family_for, LayoutFamily, Theme};

pub use page::{default_page_config, PageSize};
pub use print::print_document;

/// A rendered page plus the choices that produced it.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VisualDocument {
    pub family: LayoutFamily,
    pub theme: Theme,
    /// Document title for exports, e.g. "Alex Johnson — Resume".
    pub title: String,
    #[serde(skip)]
    pub markup: Markup,
}

impl VisualDocument {
    pub fn html(&self) -> &str {
        &self.markup.0
    }

    pub fn into_html(self) -> String {
        self.markup.into_string()
    }
}

/// Renders with the family selected by `data.selected_template` and the resolved theme.
pub fn render_resume(data: &ResumeData, page: &PageConfig) -> VisualDocument {
    let family = family_for(&data.selected_template);
    let theme = Theme::resolve(data, family);
    render_family(data, family, &theme, page)
}

/// Renders a specific family with an explicit theme.
pub fn render_family(
    data: &ResumeData,
    family: LayoutFamily,
    theme: &Theme,
    page: &PageConfig,
) -> VisualDocument {
    let content = match family {
        LayoutFamily::Classic => layouts::classic::render(data, theme),
        LayoutFamily::Modern => layouts::modern::render(data, theme),
        LayoutFamily::Sidebar => layouts::sidebar::render(data, theme),
        LayoutFamily::Minimal => layouts::minimal::render(data, theme),
        LayoutFamily::Bold => layouts::bold::render(data, theme),
    };

    let markup = html! {
        div #resume-preview.resume-preview data-family=(family.as_str())
            style=(format!(
                "font-family: {}; font-size: {}px; min-height: {}px",
                theme.font_stack(),
                page.base_font_px,
                page.min_height_px
            )) {
            (content)
        }
    };

    let title = format::non_empty(&data.personal_info.full_name)
        .map(|name| format!("{} — Resume", name.trim()))
        .unwrap_or_else(|| "Resume".to_string());

    VisualDocument {
        family,
        theme: theme.clone(),
        title,
        markup,
    }
}
