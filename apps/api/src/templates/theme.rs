//! Theme resolution: accent color and font with per-family fallbacks.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::models::resume::ResumeData;
use crate::templates::registry::LayoutFamily;

pub const DEFAULT_FONT: &str = "Inter";

/// Characters that would let a value escape its CSS declaration.
const CSS_BREAKOUT: &[char] = &[';', '{', '}', '<', '>', '"', '`', '\\'];

/// CSS functions a color value may use.
const COLOR_FUNCTIONS: [&str; 4] = ["rgb(", "rgba(", "hsl(", "hsla("];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Theme {
    pub accent_color: String,
    pub font_family: String,
}

impl Theme {
    /// Resolves the document's theme for the given family.
    ///
    /// Null, blank or unsafe values fall back to the family accent and [`DEFAULT_FONT`].
    pub fn resolve(data: &ResumeData, family: LayoutFamily) -> Self {
        let accent_color = css_value(data.accent_color.as_deref(), "accentColor")
            .unwrap_or(family.default_accent())
            .to_string();
        let font_family = css_value(data.font_family.as_deref(), "fontFamily")
            .map(|f| f.trim_matches(|c: char| c == '\'' || c == ' '))
            .filter(|f| !f.is_empty() && !f.contains('\''))
            .unwrap_or(DEFAULT_FONT)
            .to_string();
        Self {
            accent_color,
            font_family,
        }
    }

    /// The accent with a two-digit hex alpha appended, for tints such as `#7C3AED44`.
    ///
    /// Non-hex accents (named colors, `rgb()`) are returned unchanged.
    pub fn accent_alpha(&self, alpha: &str) -> String {
        let hex = self.accent_color.trim_start_matches('#');
        if self.accent_color.starts_with('#')
            && hex.len() == 6
            && hex.chars().all(|c| c.is_ascii_hexdigit())
        {
            format!("{}{}", self.accent_color, alpha)
        } else {
            self.accent_color.clone()
        }
    }

    /// CSS `font-family` declaration value with a generic fallback.
    pub fn font_stack(&self) -> String {
        format!("'{}', sans-serif", self.font_family)
    }
}

fn css_value<'a>(value: Option<&'a str>, field: &str) -> Option<&'a str> {
    let value = value.map(str::trim).filter(|v| !v.is_empty())?;
    if value.contains(CSS_BREAKOUT) {
        warn!("Ignoring {field} '{value}': not a plain CSS value");
        return None;
    }
    if value.contains('(') && !is_color_function(value) {
        warn!("Ignoring {field} '{value}': only rgb()/hsl() functions are allowed");
        return None;
    }
    Some(value)
}

fn is_color_function(value: &str) -> bool {
    let lower = value.to_ascii_lowercase();
    lower.matches('(').count() == 1 && COLOR_FUNCTIONS.iter().any(|f| lower.starts_with(f))
}
