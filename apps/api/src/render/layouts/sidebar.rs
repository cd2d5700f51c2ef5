//! Sidebar: a colored left rail (about a third of the page) carrying identity,
//! contact, bar-rated skills and certifications; the rest holds the narrative sections.

use maud::{html, Markup};

use crate::models::resume::ResumeData;
use crate::render::format::non_empty;
use crate::render::parts::{
    accent_text, avatar, certification_entry, contact_items, contact_list, display_name,
    display_title, education_entry, experience_details, experience_heading, level_bar,
    project_entry, section, ContactGlyph, LocationPlacement, Marker, SectionId,
};
use crate::templates::Theme;

const RAIL_HEADING: &str = "border-bottom: 1px solid rgba(255, 255, 255, 0.3)";
const RAIL_FILL: &str = "rgba(255, 255, 255, 0.8)";
const RAIL_TRACK: &str = "rgba(255, 255, 255, 0.2)";

pub fn render(data: &ResumeData, theme: &Theme) -> Markup {
    let info = &data.personal_info;
    let heading = format!(
        "color: {0}; border-bottom: 2px solid {0}",
        theme.accent_color
    );
    let accent = accent_text(theme);

    html! {
        div.sidebar-page {
            aside.sidebar-rail style=(format!("background-color: {}", theme.accent_color)) {
                header.resume-header.rail-header {
                    (avatar(info, "avatar-xl on-color", ""))
                    h1.full-name { (display_name(info)) }
                    p.job-title { (display_title(info)) }
                }
                @if !contact_items(info).is_empty() {
                    div.rail-block {
                        h2.rail-title style=(RAIL_HEADING) { "Contact" }
                        (contact_list(info, ContactGlyph::Symbol, "contact-stacked on-color"))
                    }
                }
                @if !data.skills.is_empty() {
                    (section(SectionId::Skills, Some("Skills"), RAIL_HEADING, html! {
                        ul.skill-list {
                            @for skill in &data.skills {
                                li.skill-row.skill-row-stacked {
                                    span.skill-name { (skill.name) }
                                    (level_bar(skill.level, RAIL_FILL, RAIL_TRACK))
                                }
                            }
                        }
                    }))
                }
                @if !data.certifications.is_empty() {
                    (section(SectionId::Certifications, Some("Certifications"), RAIL_HEADING, html! {
                        @for cert in &data.certifications {
                            (certification_entry(cert, theme, false))
                        }
                    }))
                }
            }
            div.resume-body.sidebar-main {
                @if let Some(summary) = non_empty(&info.summary) {
                    (section(SectionId::Summary, Some("About Me"), &heading, html! {
                        p.summary { (summary) }
                    }))
                }
                @if !data.experience.is_empty() {
                    (section(SectionId::Experience, Some("Experience"), &heading, html! {
                        @for exp in &data.experience {
                            div.entry.experience-entry {
                                (experience_heading(exp, LocationPlacement::Inline(" · "), &accent))
                                (experience_details(exp, theme, Marker::Dot))
                            }
                        }
                    }))
                }
                @if !data.education.is_empty() {
                    (section(SectionId::Education, Some("Education"), &heading, html! {
                        @for edu in &data.education {
                            (education_entry(edu, &accent, true))
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
