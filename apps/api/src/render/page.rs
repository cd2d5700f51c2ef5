//! Page geometry shared by the on-screen preview and the print export.
//!
//! Sizes are CSS pixels at 96 dpi. The preview is width-fluid, so only the
//! minimum height and the print `@page` size depend on the paper.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PageSize {
    /// US letter, 8.5" × 11".
    Letter,
    /// ISO A4, 210 × 297 mm.
    A4,
}

impl PageSize {
    /// Value for the CSS `@page { size: … }` rule.
    pub fn css_size(self) -> &'static str {
        match self {
            PageSize::Letter => "letter",
            PageSize::A4 => "A4",
        }
    }
}

impl fmt::Display for PageSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            PageSize::Letter => "letter",
            PageSize::A4 => "a4",
        })
    }
}

impl FromStr for PageSize {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "letter" | "us-letter" => Ok(PageSize::Letter),
            "a4" => Ok(PageSize::A4),
            other => Err(format!("unknown page size '{other}' (expected letter or a4)")),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PageConfig {
    pub size: PageSize,
    pub width_px: u32,
    /// The page never renders shorter than one sheet.
    pub min_height_px: u32,
    pub base_font_px: u32,
}

pub fn default_page_config(size: PageSize) -> PageConfig {
    let (width_px, min_height_px) = match size {
        PageSize::Letter => (816, 1056),
        PageSize::A4 => (794, 1123),
    };
    PageConfig {
        size,
        width_px,
        min_height_px,
        base_font_px: 11,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_letter_dimensions() {
        let page = default_page_config(PageSize::Letter);
        assert_eq!((page.width_px, page.min_height_px), (816, 1056));
        assert_eq!(page.base_font_px, 11);
    }

    #[test]
    fn test_a4_is_taller_and_narrower() {
        let letter = default_page_config(PageSize::Letter);
        let a4 = default_page_config(PageSize::A4);
        assert!(a4.min_height_px > letter.min_height_px);
        assert!(a4.width_px < letter.width_px);
    }

    #[test]
    fn test_parse_page_size() {
        assert_eq!("A4".parse::<PageSize>(), Ok(PageSize::A4));
        assert_eq!(" Letter ".parse::<PageSize>(), Ok(PageSize::Letter));
        assert!("legal".parse::<PageSize>().is_err());
    }
}
