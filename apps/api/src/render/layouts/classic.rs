//! Classic: centered header, single column; skills and certifications share a row.

use maud::{html, Markup};

use crate::models::resume::ResumeData;
use crate::render::format::non_empty;
use crate::render::parts::{
    accent_text, avatar, certification_entry, contact_list, display_name, display_title,
    education_entry, experience_details, experience_heading, level_bar, project_entry, section,
    two_column_row, ContactGlyph, LocationPlacement, Marker, SectionId, TRACK_COLOR,
};
use crate::templates::Theme;

pub fn render(data: &ResumeData, theme: &Theme) -> Markup {
    let info = &data.personal_info;
    let heading = format!(
        "color: {}; border-bottom: 1px solid {}",
        theme.accent_color,
        theme.accent_alpha("44")
    );
    let accent = accent_text(theme);

    let skills = (!data.skills.is_empty()).then(|| {
        section(
            SectionId::Skills,
            Some("Skills"),
            &heading,
            html! {
                ul.skill-list {
                    @for skill in &data.skills {
                        li.skill-row {
                            span.skill-name { (skill.name) }
                            (level_bar(skill.level, &theme.accent_color, TRACK_COLOR))
                        }
                    }
                }
            },
        )
    });
    let certifications = (!data.certifications.is_empty()).then(|| {
        section(
            SectionId::Certifications,
            Some("Certifications"),
            &heading,
            html! {
                @for cert in &data.certifications {
                    (certification_entry(cert, theme, false))
                }
            },
        )
    });

    html! {
        header.resume-header.classic-header style=(format!("border-bottom: 2px solid {}", theme.accent_color)) {
            div.identity {
                (avatar(info, "avatar-md", &format!("border: 2px solid {}", theme.accent_color)))
                div.identity-text {
                    h1.full-name { (display_name(info)) }
                    p.job-title style=(accent) { (display_title(info)) }
                }
            }
            (contact_list(info, ContactGlyph::Symbol, "contact-centered"))
        }
        div.resume-body {
            @if let Some(summary) = non_empty(&info.summary) {
                (section(SectionId::Summary, Some("Professional Summary"), &heading, html! {
                    p.summary { (summary) }
                }))
            }
            @if !data.experience.is_empty() {
                (section(SectionId::Experience, Some("Experience"), &heading, html! {
                    @for exp in &data.experience {
                        div.entry.experience-entry {
                            (experience_heading(exp, LocationPlacement::Inline(" — "), &accent))
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
            (two_column_row(skills, certifications))
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
