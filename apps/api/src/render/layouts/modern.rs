//! Modern: full-width accent band with avatar, then a narrow left column
//! (profile, dot-rated skills, certifications) beside a wide right column.

use maud::{html, Markup};

use crate::models::resume::ResumeData;
use crate::render::format::non_empty;
use crate::render::parts::{
    accent_text, avatar, certification_entry, contact_list, display_name, display_title,
    education_entry, experience_details, experience_heading, level_dots, project_entry, section,
    ContactGlyph, LocationPlacement, Marker, SectionId,
};
use crate::templates::Theme;

pub fn render(data: &ResumeData, theme: &Theme) -> Markup {
    let info = &data.personal_info;
    let heading = format!(
        "color: {0}; border-bottom: 2px solid {0}",
        theme.accent_color
    );
    let accent = accent_text(theme);

    html! {
        header.resume-header.band-header style=(format!("background-color: {}", theme.accent_color)) {
            div.identity {
                (avatar(info, "avatar-lg on-color", ""))
                div.identity-text {
                    h1.full-name { (display_name(info)) }
                    p.job-title { (display_title(info)) }
                    (contact_list(info, ContactGlyph::Symbol, "on-color"))
                }
            }
        }
        div.resume-body.split-body {
            div.column.column-narrow {
                @if let Some(summary) = non_empty(&info.summary) {
                    (section(SectionId::Summary, Some("Profile"), &heading, html! {
                        p.summary { (summary) }
                    }))
                }
                @if !data.skills.is_empty() {
                    (section(SectionId::Skills, Some("Skills"), &heading, html! {
                        ul.skill-list {
                            @for skill in &data.skills {
                                li.skill-row.skill-row-inline {
                                    span.skill-name { (skill.name) }
                                    (level_dots(skill.level, &theme.accent_color))
                                }
                            }
                        }
                    }))
                }
                @if !data.certifications.is_empty() {
                    (section(SectionId::Certifications, Some("Certifications"), &heading, html! {
                        @for cert in &data.certifications {
                            (certification_entry(cert, theme, true))
                        }
                    }))
                }
            }
            div.column.column-wide {
                @if !data.experience.is_empty() {
                    (section(SectionId::Experience, Some("Experience"), &heading, html! {
                        @for exp in &data.experience {
                            div.entry.experience-entry {
                                (experience_heading(exp, LocationPlacement::OwnLine, &accent))
                                (experience_details(exp, theme, Marker::Dot))
                            }
                        }
                    }))
                }
                @if !data.education.is_empty() {
                    (section(SectionId::Education, Some("Education"), &heading, html! {
                        @for edu in &data.education {
                            (education_entry(edu, &accent, false))
                        }
                    }))
                }
                @if !data.projects.is_empty() {
                    (section(SectionId::Projects, Some("Projects"), &heading, html! {
                        @for proj in &data.projects {
                            (project_entry(proj))
                        }
                    }))
                }
            }
        }
    }
}
