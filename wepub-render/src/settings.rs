//! User-tunable pipeline parameters.

use serde::{Deserialize, Serialize};

/// Heading numbering style for the `number-dot` setting value.
pub const NUMBERING_NUMBER_DOT: &str = "number-dot";
/// Heading numbering style for the `chinese-dot` setting value.
pub const NUMBERING_CHINESE_DOT: &str = "chinese-dot";

/// Settings threaded through each pipeline stage.
///
/// String fields default to empty, meaning "no override"; boolean flags
/// default to false. A settings value is an immutable snapshot for one
/// conversion and is only ever replaced wholesale.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Base font size applied to the output wrapper, e.g. "16px".
    pub font_size: String,
    /// Heading numbering style: "", "number-dot" or "chinese-dot".
    pub heading_numbering_style: String,
    /// Theme primary color, injected as `--primary-color` under `:root`.
    pub primary_color: String,
    /// Convert soft line breaks into hard `<br>` breaks.
    pub force_line_breaks: bool,
    /// Base domain prefixed onto relative image URLs.
    pub image_domain: String,
    /// Rewrite links/images as numbered references with a trailing list.
    pub enable_reference_links: bool,
}

impl Settings {
    /// Validate a font-size override: `<digits>px` within 14–18px.
    pub fn is_valid_font_size(font_size: &str) -> bool {
        let Some(digits) = font_size.strip_suffix("px") else {
            return false;
        };
        if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
            return false;
        }
        match digits.parse::<u32>() {
            Ok(size) => (14..=18).contains(&size),
            Err(_) => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_no_override() {
        let settings = Settings::default();
        assert!(settings.font_size.is_empty());
        assert!(settings.heading_numbering_style.is_empty());
        assert!(settings.primary_color.is_empty());
        assert!(!settings.force_line_breaks);
        assert!(settings.image_domain.is_empty());
        assert!(!settings.enable_reference_links);
    }

    #[test]
    fn test_font_size_validation() {
        assert!(Settings::is_valid_font_size("14px"));
        assert!(Settings::is_valid_font_size("16px"));
        assert!(Settings::is_valid_font_size("18px"));
        assert!(!Settings::is_valid_font_size("13px"));
        assert!(!Settings::is_valid_font_size("19px"));
        assert!(!Settings::is_valid_font_size("16"));
        assert!(!Settings::is_valid_font_size("px"));
        assert!(!Settings::is_valid_font_size("1.5em"));
        assert!(!Settings::is_valid_font_size(""));
    }
}
