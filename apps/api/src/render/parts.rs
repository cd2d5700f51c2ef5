//! Markup pieces shared by the layout families.
//!
//! Families decide *where* things go; the data contract for each entry (which
//! fields appear, how dates and levels are shown) lives here so it cannot drift
//! between templates.

use maud::{html, Markup};

use crate::models::resume::{
    CertificationItem, EducationItem, ExperienceItem, PersonalInfo, ProjectItem,
};
use crate::render::format::{
    date_range, filled_dots, format_month, initial, level_percent, non_empty, MAX_LEVEL,
};
use crate::templates::Theme;

pub const PLACEHOLDER_NAME: &str = "Your Name";
pub const PLACEHOLDER_TITLE: &str = "Job Title";

/// Unfilled dot / empty bar track.
pub const TRACK_COLOR: &str = "#E5E7EB";

// ────────────────────────────────────────────────────────────────────────────
// Sections
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionId {
    Summary,
    Experience,
    Education,
    Skills,
    Certifications,
    Projects,
}

impl SectionId {
    pub fn as_str(self) -> &'static str {
        match self {
            SectionId::Summary => "summary",
            SectionId::Experience => "experience",
            SectionId::Education => "education",
            SectionId::Skills => "skills",
            SectionId::Certifications => "certifications",
            SectionId::Projects => "projects",
        }
    }
}

/// Wraps a body section. `title` is omitted for layouts that show a section
/// without a heading (e.g. an inline summary).
pub fn section(id: SectionId, title: Option<&str>, heading_style: &str, body: Markup) -> Markup {
    html! {
        section.resume-section data-section=(id.as_str()) {
            @if let Some(title) = title {
                h2.section-title style=(heading_style) { (title) }
            }
            (body)
        }
    }
}

/// Two sections side by side; emits nothing when both are empty.
pub fn two_column_row(left: Option<Markup>, right: Option<Markup>) -> Markup {
    html! {
        @if left.is_some() || right.is_some() {
            div.section-row {
                div.section-cell { @if let Some(left) = left { (left) } }
                div.section-cell { @if let Some(right) = right { (right) } }
            }
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Header pieces
// ────────────────────────────────────────────────────────────────────────────

pub fn display_name(info: &PersonalInfo) -> &str {
    non_empty(&info.full_name).unwrap_or(PLACEHOLDER_NAME)
}

pub fn display_title(info: &PersonalInfo) -> &str {
    non_empty(&info.job_title).unwrap_or(PLACEHOLDER_TITLE)
}

/// Photo source, if it is an embedded image or an http(s) URL.
pub fn photo_src(info: &PersonalInfo) -> Option<&str> {
    info.profile_photo
        .as_deref()
        .map(str::trim)
        .filter(|src| {
            src.starts_with("data:image/") || src.starts_with("https://") || src.starts_with("http://")
        })
}

/// Circular profile photo, or a placeholder showing the name's initial.
pub fn avatar(info: &PersonalInfo, class: &str, style: &str) -> Markup {
    html! {
        @if let Some(src) = photo_src(info) {
            img class=(format!("avatar {class}")) src=(src) alt="Profile" style=(style);
        } @else {
            div class=(format!("avatar avatar-placeholder {class}")) style=(style) aria-hidden="true" {
                span.avatar-initial { (initial(&info.full_name)) }
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactKind {
    Email,
    Phone,
    Location,
    Linkedin,
    Github,
    Website,
}

impl ContactKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ContactKind::Email => "email",
            ContactKind::Phone => "phone",
            ContactKind::Location => "location",
            ContactKind::Linkedin => "linkedin",
            ContactKind::Github => "github",
            ContactKind::Website => "website",
        }
    }

    fn symbol(self) -> &'static str {
        match self {
            ContactKind::Email => "✉",
            ContactKind::Phone => "☎",
            ContactKind::Location => "⌖",
            ContactKind::Linkedin => "in",
            ContactKind::Github => "⌥",
            ContactKind::Website => "◎",
        }
    }

    fn label(self) -> &'static str {
        match self {
            ContactKind::Email => "Email",
            ContactKind::Phone => "Phone",
            ContactKind::Location => "Based in",
            ContactKind::Linkedin => "LinkedIn",
            ContactKind::Github => "GitHub",
            ContactKind::Website => "Web",
        }
    }
}

/// How a contact entry is prefixed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactGlyph {
    Symbol,
    Label,
}

/// Non-empty contact fields in display order.
pub fn contact_items(info: &PersonalInfo) -> Vec<(ContactKind, &str)> {
    [
        (ContactKind::Email, info.email.as_str()),
        (ContactKind::Phone, info.phone.as_str()),
        (ContactKind::Location, info.location.as_str()),
        (ContactKind::Linkedin, info.linkedin.as_str()),
        (ContactKind::Github, info.github.as_str()),
        (ContactKind::Website, info.website.as_str()),
    ]
    .into_iter()
    .filter_map(|(kind, value)| non_empty(value).map(|v| (kind, v)))
    .collect()
}

pub fn contact_list(info: &PersonalInfo, glyph: ContactGlyph, class: &str) -> Markup {
    let items = contact_items(info);
    html! {
        @if !items.is_empty() {
            ul class=(format!("contact-list {class}")) {
                @for (kind, value) in &items {
                    li.contact-item data-contact=(kind.as_str()) {
                        @match glyph {
                            ContactGlyph::Symbol => {
                                span.contact-icon aria-hidden="true" { (kind.symbol()) }
                            },
                            ContactGlyph::Label => {
                                span.contact-label { (kind.label()) }
                            },
                        }
                        " "
                        span.contact-value { (value) }
                    }
                }
            }
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Experience / education
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Marker {
    Dot,
    Dash,
    Arrow,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocationPlacement {
    /// `Company — Location` on the company line.
    Inline(&'static str),
    /// Location on its own line below the company.
    OwnLine,
}

pub fn accent_text(theme: &Theme) -> String {
    format!("color: {}", theme.accent_color)
}

pub fn date_line(range: String) -> Markup {
    html! {
        @if !range.is_empty() {
            p.entry-dates { (range) }
        }
    }
}

/// Position, company, optional location and the date range.
pub fn experience_heading(
    exp: &ExperienceItem,
    location: LocationPlacement,
    company_style: &str,
) -> Markup {
    let company = non_empty(&exp.company);
    let place = non_empty(&exp.location);
    // Inline placement needs a company line to sit on.
    let inline_sep = match (location, company) {
        (LocationPlacement::Inline(sep), Some(_)) => Some(sep),
        _ => None,
    };
    html! {
        div.entry-head {
            div.entry-main {
                @if let Some(position) = non_empty(&exp.position) {
                    p.entry-title { (position) }
                }
                @if let Some(company) = company {
                    p.entry-org style=(company_style) {
                        (company)
                        @if let (Some(sep), Some(place)) = (inline_sep, place) {
                            (sep) (place)
                        }
                    }
                }
                @if let (None, Some(place)) = (inline_sep, place) {
                    p.entry-location { (place) }
                }
            }
            (date_line(date_range(&exp.start_date, &exp.end_date, exp.current)))
        }
    }
}

/// Description paragraph and the filtered highlight bullets.
pub fn experience_details(exp: &ExperienceItem, theme: &Theme, marker: Marker) -> Markup {
    let highlights: Vec<&str> = exp.visible_highlights().collect();
    html! {
        @if let Some(description) = non_empty(&exp.description) {
            p.entry-description { (description) }
        }
        @if !highlights.is_empty() {
            ul.highlights {
                @for highlight in &highlights {
                    li.highlight {
                        @match marker {
                            Marker::Dot => {
                                span.bullet-dot style=(format!("background-color: {}", theme.accent_color)) {}
                            },
                            Marker::Dash => {
                                span.bullet-mark { "— " }
                            },
                            Marker::Arrow => {
                                span.bullet-mark style=(accent_text(theme)) { "▸ " }
                            },
                        }
                        (highlight)
                    }
                }
            }
        }
    }
}

/// Degree line, institution, GPA (inline or on its own line) and the date range.
pub fn education_entry(edu: &EducationItem, institution_style: &str, gpa_inline: bool) -> Markup {
    let dates = date_range(&edu.start_date, &edu.end_date, false);
    let gpa = non_empty(&edu.gpa);
    let degree = edu.degree_line();
    html! {
        div.entry.education-entry {
            div.entry-head {
                div.entry-main {
                    @if !degree.is_empty() {
                        p.entry-title { (degree) }
                    }
                    @if let Some(institution) = non_empty(&edu.institution) {
                        p.entry-org style=(institution_style) { (institution) }
                    }
                    @if let (Some(gpa), false) = (gpa, gpa_inline) {
                        p.entry-gpa { "GPA: " (gpa) }
                    }
                }
                @if gpa_inline {
                    p.entry-dates {
                        (dates)
                        @if let Some(gpa) = gpa {
                            @if !dates.is_empty() { " · " }
                            "GPA: " (gpa)
                        }
                    }
                } @else {
                    (date_line(dates.clone()))
                }
            }
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Skills
// ────────────────────────────────────────────────────────────────────────────

/// Five dots, `level` of them filled.
pub fn level_dots(level: i32, fill: &str) -> Markup {
    let filled = filled_dots(level);
    html! {
        span.level-dots role="meter" aria-valuemin="0" aria-valuemax=(MAX_LEVEL)
            aria-valuenow=(level.clamp(0, MAX_LEVEL)) data-strength=(level_percent(level)) {
            @for i in 0..MAX_LEVEL as u32 {
                @let color = if i < filled { fill } else { TRACK_COLOR };
                span.dot.filled[i < filled] style=(format!("background-color: {color}")) {}
            }
        }
    }
}

/// Continuous bar filled to `level / 5`.
pub fn level_bar(level: i32, fill: &str, track: &str) -> Markup {
    let percent = level_percent(level);
    html! {
        span.level-bar role="meter" aria-valuemin="0" aria-valuemax=(MAX_LEVEL)
            aria-valuenow=(level.clamp(0, MAX_LEVEL)) data-strength=(percent)
            style=(format!("background-color: {track}")) {
            span.level-fill style=(format!("width: {percent}%; background-color: {fill}")) {}
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Certifications / projects
// ────────────────────────────────────────────────────────────────────────────

pub fn certification_entry(cert: &CertificationItem, theme: &Theme, starred: bool) -> Markup {
    let date = format_month(&cert.date);
    html! {
        div.entry.cert-entry {
            @if starred {
                span.cert-star style=(accent_text(theme)) aria-hidden="true" { "★" }
            }
            div.entry-main {
                @if let Some(name) = non_empty(&cert.name) {
                    p.cert-name { (name) }
                }
                @if let Some(issuer) = non_empty(&cert.issuer) {
                    p.cert-issuer { (issuer) }
                }
                @if !date.is_empty() {
                    p.entry-dates { (date) }
                }
                @if let Some(attachment) = cert.attachment() {
                    p.cert-attachment { "📎 " (attachment) }
                }
            }
        }
    }
}

pub fn project_entry(proj: &ProjectItem) -> Markup {
    html! {
        div.entry.project-entry {
            div.entry-head {
                @if let Some(name) = non_empty(&proj.name) {
                    p.entry-title { (name) }
                }
                @if let Some(url) = non_empty(&proj.url) {
                    p.project-url { (url) }
                }
            }
            @if let Some(description) = non_empty(&proj.description) {
                p.entry-description { (description) }
            }
            @if let Some(tech) = non_empty(&proj.technologies) {
                p.project-tech { span.project-tech-label { "Tech:" } " " (tech) }
            }
        }
    }
}
