//! Minimal: no color block. Accent appears only as a rule under the header and
//! as left borders on experience and education entries.

use maud::{html, Markup};

use crate::models::resume::ResumeData;
use crate::render::format::non_empty;
use crate::render::parts::{
    avatar, certification_entry, contact_list, display_name, display_title, education_entry,
    experience_details, experience_heading, level_bar, project_entry, section, two_column_row,
    ContactGlyph, LocationPlacement, Marker, SectionId,
};
use crate::templates::Theme;

const HEADING: &str = "color: #9CA3AF";

pub fn render(data: &ResumeData, theme: &Theme) -> Markup {
    let info = &data.personal_info;
    let rule = format!("border-left: 2px solid {}", theme.accent_color);

    let certifications = (!data.certifications.is_empty()).then(|| {
        section(
            SectionId::Certifications,
            Some("Certifications"),
            HEADING,
            html! {
                @for cert in &data.certifications {
                    (certification_entry(cert, theme, false))
                }
            },
        )
    });
    let projects = (!data.projects.is_empty()).then(|| {
        section(
            SectionId::Projects,
            Some("Projects"),
            HEADING,
            html! {
                @for proj in &data.projects {
                    (project_entry(proj))
                }
            },
        )
    });

    html! {
        div.minimal-page {
            header.resume-header.minimal-header {
                div.identity {
                    (avatar(info, "avatar-sm", ""))
                    div.identity-text {
                        h1.full-name { (display_name(info)) }
                        p.job-title { (display_title(info)) }
                    }
                }
                (contact_list(info, ContactGlyph::Label, "contact-quiet"))
                div.header-rule style=(format!("background-color: {}", theme.accent_color)) {}
            }
            @if let Some(summary) = non_empty(&info.summary) {
                (section(SectionId::Summary, None, HEADING, html! {
                    p.summary.summary-quote { (summary) }
                }))
            }
            @if !data.experience.is_empty() {
                (section(SectionId::Experience, Some("Experience"), HEADING, html! {
                    @for exp in &data.experience {
                        div.entry.experience-entry.ruled style=(rule) {
                            (experience_heading(exp, LocationPlacement::Inline(", "), ""))
                            (experience_details(exp, theme, Marker::Dash))
                        }
                    }
                }))
            }
            @if !data.education.is_empty() {
                (section(SectionId::Education, Some("Education"), HEADING, html! {
                    @for edu in &data.education {
                        div.ruled style=(rule) {
                            (education_entry(edu, "", true))
                        }
                    }
                }))
            }
            @if !data.skills.is_empty() {
                (section(SectionId::Skills, Some("Skills"), HEADING, html! {
                    ul.pill-list {
                        @for skill in &data.skills {
                            li.skill-pill.outlined style=(format!("border-color: {}", theme.accent_alpha("66"))) {
                                span.skill-name { (skill.name) }
                                (level_bar(skill.level, &theme.accent_color, "transparent"))
                            }
                        }
                    }
                }))
            }
            (two_column_row(certifications, projects))
        }
    }
}
