//! Bold: dark header band, experience drawn as a vertical timeline, solid skill chips.

use maud::{html, Markup};

use crate::models::resume::ResumeData;
use crate::render::format::non_empty;
use crate::render::parts::{
    accent_text, avatar, certification_entry, contact_list, display_name, display_title,
    education_entry, experience_details, experience_heading, level_dots, project_entry, section,
    two_column_row, ContactGlyph, LocationPlacement, Marker, SectionId,
};
use crate::templates::Theme;

const BAND: &str = "#111827";
const CHIP_DOT: &str = "#FFFFFF";

pub fn render(data: &ResumeData, theme: &Theme) -> Markup {
    let info = &data.personal_info;
    let accent = accent_text(theme);

    let projects = (!data.projects.is_empty()).then(|| {
        section(
            SectionId::Projects,
            Some("Projects"),
            &accent,
            html! {
                @for proj in &data.projects {
                    (project_entry(proj))
                }
            },
        )
    });
    let certifications = (!data.certifications.is_empty()).then(|| {
        section(
            SectionId::Certifications,
            Some("Certifications"),
            &accent,
            html! {
                @for cert in &data.certifications {
                    (certification_entry(cert, theme, false))
                }
            },
        )
    });

    html! {
        header.resume-header.dark-header style=(format!("background-color: {BAND}")) {
            div.identity {
                (avatar(info, "avatar-xl", &format!("border: 2px solid {}", theme.accent_color)))
                div.identity-text {
                    h1.full-name.heavy { (display_name(info)) }
                    p.job-title style=(accent) { (display_title(info)) }
                    (contact_list(info, ContactGlyph::Label, "on-dark"))
                }
            }
            @if let Some(summary) = non_empty(&info.summary) {
                (section(SectionId::Summary, None, "", html! {
                    p.summary.summary-on-dark { (summary) }
                }))
            }
        }
        div.resume-body {
            @if !data.experience.is_empty() {
                (section(SectionId::Experience, Some("Experience"), &accent, html! {
                    ol.timeline {
                        @for exp in &data.experience {
                            li.timeline-item {
                                div.timeline-rail aria-hidden="true" {
                                    span.timeline-node style=(format!(
                                        "border-color: {}; background-color: {}",
                                        theme.accent_color,
                                        theme.accent_alpha("33")
                                    )) {}
                                    span.timeline-line {}
                                }
                                div.entry.experience-entry {
                                    (experience_heading(exp, LocationPlacement::Inline(" · "), &accent))
                                    (experience_details(exp, theme, Marker::Arrow))
                                }
                            }
                        }
                    }
                }))
            }
            @if !data.education.is_empty() {
                (section(SectionId::Education, Some("Education"), &accent, html! {
                    @for edu in &data.education {
                        (education_entry(edu, &accent, false))
                    }
                }))
            }
            @if !data.skills.is_empty() {
                (section(SectionId::Skills, Some("Skills"), &accent, html! {
                    ul.pill-list {
                        @for skill in &data.skills {
                            li.skill-pill.solid style=(format!("background-color: {}", theme.accent_color)) {
                                span.skill-name { (skill.name) }
                                (level_dots(skill.level, CHIP_DOT))
                            }
                        }
                    }
                }))
            }
            (two_column_row(projects, certifications))
        }
    }
}
