//! Pipeline orchestration.
//!
//! One invocation walks the fixed stage order: parse, structural
//! rewrites on the Markdown tree, lowering, image normalization, style
//! resolution, serialization. Each invocation owns its trees, so
//! concurrent renders never share mutable state.

use crate::error::RenderError;
use crate::html::{serialize_fragment, to_html_tree};
use crate::markdown::parse_markdown;
use crate::settings::Settings;
use crate::style::{apply_styles, resolve_body_style};
use crate::theme::ThemeStyles;
use crate::transforms::{
    convert_reference_links, force_line_breaks, number_headings, transform_images,
};

/// Renders Markdown to a single inline-styled HTML fragment.
///
/// The theme is taken as already parsed; settings overlay it per
/// invocation without mutating the caller's copy. The result is
/// deterministic for identical inputs.
pub fn render(
    markdown: &str,
    theme: &ThemeStyles,
    settings: &Settings,
) -> Result<String, RenderError> {
    let theme = overlay_settings(theme, settings);

    let mut doc = parse_markdown(markdown)?;
    if settings.enable_reference_links {
        convert_reference_links(&mut doc);
    }
    if settings.force_line_breaks {
        force_line_breaks(&mut doc);
    }
    number_headings(&mut doc, &settings.heading_numbering_style);

    let mut tree = to_html_tree(&doc);
    transform_images(&mut tree, &settings.image_domain);
    apply_styles(&mut tree, &theme);

    let body_style = resolve_body_style(&theme);
    serialize_fragment(&tree, &body_style)
}

/// Folds per-invocation settings into a copy of the theme: the font
/// size lands on the `body` rule, the primary color overrides the
/// `--primary-color` custom property.
fn overlay_settings(theme: &ThemeStyles, settings: &Settings) -> ThemeStyles {
    let mut theme = theme.clone();
    if Settings::is_valid_font_size(&settings.font_size) {
        theme.set_declaration("body", "font-size", &settings.font_size);
    }
    if !settings.primary_color.is_empty() {
        theme.set_declaration(":root", "--primary-color", &settings.primary_color);
    }
    theme
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::parse_theme;

    #[test]
    fn test_empty_input_renders_an_empty_wrapper() {
        let html = render("", &ThemeStyles::new(), &Settings::default()).unwrap();
        assert_eq!(html, "<section></section>");
    }

    #[test]
    fn test_font_size_setting_reaches_the_wrapper() {
        let settings = Settings {
            font_size: "16px".to_string(),
            ..Settings::default()
        };
        let html = render("hello", &ThemeStyles::new(), &settings).unwrap();
        assert!(html.starts_with("<section style=\"font-size: 16px;\">"));
    }

    #[test]
    fn test_invalid_font_size_is_ignored() {
        let settings = Settings {
            font_size: "30px".to_string(),
            ..Settings::default()
        };
        let html = render("hello", &ThemeStyles::new(), &settings).unwrap();
        assert!(html.starts_with("<section><p"));
    }

    #[test]
    fn test_primary_color_overrides_the_theme_variable() {
        let theme = parse_theme(
            ":root { --primary-color: #000; } h2 { color: var(--primary-color); }",
        );
        let settings = Settings {
            primary_color: "#07c160".to_string(),
            ..Settings::default()
        };
        let html = render("## Title", &theme, &settings).unwrap();
        assert!(html.contains("color: #07c160;"));
    }

    #[test]
    fn test_rendering_is_deterministic() {
        let theme = parse_theme("p { color: #333; } h2 { color: red; }");
        let settings = Settings::default();
        let source = "## One\n\ntext with [a link](https://example.com)\n";
        let first = render(source, &theme, &settings).unwrap();
        let second = render(source, &theme, &settings).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_caller_theme_is_not_mutated() {
        let theme = parse_theme(":root { --primary-color: #000; }");
        let settings = Settings {
            primary_color: "#fff".to_string(),
            ..Settings::default()
        };
        render("x", &theme, &settings).unwrap();
        assert_eq!(
            theme.custom_properties().get("--primary-color"),
            Some(&"#000".to_string()),
        );
    }
}
