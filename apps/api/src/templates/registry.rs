//! Static template catalog and the template → layout family mapping.
//!
//! Many templates share one of five hand-built layouts; the template only picks
//! the family and suggests an accent color for the editor's picker.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

// ────────────────────────────────────────────────────────────────────────────
// Layout families
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LayoutFamily {
    /// Centered header, single column.
    Classic,
    /// Colored header band, narrow left column and wide right column.
    Modern,
    /// Colored left sidebar holding identity, contact and skills.
    Sidebar,
    /// No color block; accent rules and outlined pills.
    Minimal,
    /// Dark header band with an experience timeline.
    Bold,
}

/// Family used when a template id is unknown or missing.
pub const DEFAULT_FAMILY: LayoutFamily = LayoutFamily::Modern;

impl LayoutFamily {
    pub const ALL: [LayoutFamily; 5] = [
        LayoutFamily::Classic,
        LayoutFamily::Modern,
        LayoutFamily::Sidebar,
        LayoutFamily::Minimal,
        LayoutFamily::Bold,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            LayoutFamily::Classic => "classic",
            LayoutFamily::Modern => "modern",
            LayoutFamily::Sidebar => "sidebar",
            LayoutFamily::Minimal => "minimal",
            LayoutFamily::Bold => "bold",
        }
    }

    /// Accent used when the document carries no accent color of its own.
    pub fn default_accent(self) -> &'static str {
        match self {
            LayoutFamily::Minimal => "#10B981",
            _ => "#7C3AED",
        }
    }
}

impl fmt::Display for LayoutFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LayoutFamily {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LayoutFamily::ALL
            .into_iter()
            .find(|family| family.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown layout family '{s}'"))
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Template catalog
// ────────────────────────────────────────────────────────────────────────────

/// Thumbnail style hint for template galleries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PreviewStyle {
    Gradient,
    Clean,
    Bold,
    Minimal,
    Formal,
    Dark,
    Technical,
    Creative,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateInfo {
    pub id: &'static str,
    pub name: &'static str,
    pub industry: &'static str,
    /// Suggested accent color applied by the editor when the template is picked.
    pub color: &'static str,
    pub preview: PreviewStyle,
    pub popular: bool,
    pub family: LayoutFamily,
}

const fn template(
    id: &'static str,
    name: &'static str,
    industry: &'static str,
    color: &'static str,
    preview: PreviewStyle,
    popular: bool,
    family: LayoutFamily,
) -> TemplateInfo {
    TemplateInfo {
        id,
        name,
        industry,
        color,
        preview,
        popular,
        family,
    }
}

use LayoutFamily as F;
use PreviewStyle as P;

#[rustfmt::skip]
static TEMPLATES: [TemplateInfo; 32] = [
    template("modern",     "Modern Pro",          "Tech",         "#7C3AED", P::Gradient,  true,  F::Modern),
    template("executive",  "Executive Suite",     "Business",     "#0EA5E9", P::Clean,     true,  F::Classic),
    template("creative",   "Creative Studio",     "Design",       "#F97316", P::Bold,      true,  F::Bold),
    template("minimal",    "Minimal Zen",         "Any",          "#10B981", P::Minimal,   false, F::Minimal),
    template("academic",   "Academic Scholar",    "Education",    "#8B5CF6", P::Formal,    false, F::Classic),
    template("tech-dark",  "Tech Dark",           "Tech",         "#06B6D4", P::Dark,      true,  F::Sidebar),
    template("medical",    "Medical Pro",         "Healthcare",   "#EC4899", P::Clean,     false, F::Classic),
    template("finance",    "Finance Elite",       "Finance",      "#059669", P::Formal,    false, F::Classic),
    template("legal",      "Legal Edge",          "Legal",        "#374151", P::Formal,    false, F::Classic),
    template("marketing",  "Marketing Maestro",   "Marketing",    "#EF4444", P::Bold,      false, F::Bold),
    template("engineer",   "Engineering Grid",    "Engineering",  "#3B82F6", P::Technical, true,  F::Modern),
    template("startup",    "Startup Hustle",      "Startup",      "#F59E0B", P::Bold,      false, F::Bold),
    template("elegant",    "Elegant Classic",     "Any",          "#6B7280", P::Clean,     false, F::Minimal),
    template("data-sci",   "Data Scientist",      "Data",         "#8B5CF6", P::Technical, true,  F::Sidebar),
    template("ux-design",  "UX Portfolio",        "Design",       "#EC4899", P::Creative,  false, F::Sidebar),
    template("sales",      "Sales Champion",      "Sales",        "#F97316", P::Bold,      false, F::Bold),
    template("hr",         "HR Professional",     "HR",           "#10B981", P::Clean,     false, F::Classic),
    template("consulting", "Consulting Edge",     "Consulting",   "#0EA5E9", P::Formal,    false, F::Classic),
    template("nonprofit",  "Nonprofit Leader",    "Nonprofit",    "#7C3AED", P::Minimal,   false, F::Minimal),
    template("freelance",  "Freelance Creative",  "Freelance",    "#EF4444", P::Creative,  false, F::Bold),
    template("architect",  "Architect Blueprint", "Architecture", "#374151", P::Technical, false, F::Sidebar),
    template("teacher",    "Educator's Choice",   "Education",    "#059669", P::Clean,     false, F::Classic),
    template("journalist", "Journalist Voice",    "Media",        "#DC2626", P::Bold,      false, F::Bold),
    template("scientist",  "Research Pro",        "Science",      "#2563EB", P::Formal,    false, F::Classic),
    template("product",    "Product Manager",     "Product",      "#7C3AED", P::Gradient,  true,  F::Modern),
    template("devops",     "DevOps Engineer",     "Tech",         "#0D9488", P::Technical, false, F::Sidebar),
    template("cybersec",   "CyberSecurity",       "Tech",         "#1F2937", P::Dark,      false, F::Sidebar),
    template("ai-ml",      "AI/ML Specialist",    "Tech",         "#6366F1", P::Technical, true,  F::Modern),
    template("game-dev",   "Game Developer",      "Gaming",       "#7C3AED", P::Dark,      false, F::Bold),
    template("blockchain", "Blockchain Dev",      "Tech",         "#F59E0B", P::Technical, false, F::Sidebar),
    template("nurse",      "Healthcare Hero",     "Healthcare",   "#3B82F6", P::Clean,     false, F::Classic),
    template("chef",       "Culinary Pro",        "Hospitality",  "#DC2626", P::Creative,  false, F::Bold),
];

/// Industry value meaning "no industry filter".
pub const ALL_INDUSTRIES: &str = "All";

pub fn all_templates() -> &'static [TemplateInfo] {
    &TEMPLATES
}

pub fn find_template(id: &str) -> Option<&'static TemplateInfo> {
    TEMPLATES.iter().find(|t| t.id == id)
}

/// Total mapping: unknown or empty ids resolve to [`DEFAULT_FAMILY`].
pub fn family_for(template_id: &str) -> LayoutFamily {
    find_template(template_id.trim()).map_or(DEFAULT_FAMILY, |t| t.family)
}

/// Catalog entries matching an optional industry and a free-text query.
///
/// The industry must match exactly (`"All"` disables it); the query is a
/// case-insensitive substring of the name or industry.
pub fn filter_templates(industry: Option<&str>, query: Option<&str>) -> Vec<&'static TemplateInfo> {
    let industry = industry
        .map(str::trim)
        .filter(|i| !i.is_empty() && *i != ALL_INDUSTRIES);
    let query = query
        .map(|q| q.trim().to_lowercase())
        .filter(|q| !q.is_empty());

    TEMPLATES
        .iter()
        .filter(|t| industry.map_or(true, |i| t.industry == i))
        .filter(|t| {
            query.as_deref().map_or(true, |q| {
                t.name.to_lowercase().contains(q) || t.industry.to_lowercase().contains(q)
            })
        })
        .collect()
}

/// `"All"` followed by each distinct industry in catalog order.
pub fn industries() -> Vec<&'static str> {
    let mut out = vec![ALL_INDUSTRIES];
    for t in TEMPLATES.iter() {
        if !out.contains(&t.industry) {
            out.push(t.industry);
        }
    }
    out
}
