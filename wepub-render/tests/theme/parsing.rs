use wepub_render::{parse_theme, parse_theme_metadata, render, Settings};

const SAMPLE_THEME: &str = r#"/*
 * @theme-name: Mint
 * @theme-author: wepub
 * @theme-description: Green accents on a plain base
 * @theme-version: 1.2.0
 */

:root {
  --primary-color: #07c160;
  --text-color: #3f3f3f;
}

body {
  font-size: 15px;
  color: var(--text-color);
  line-height: 1.75;
}

h1, h2 {
  color: var(--primary-color);
  font-weight: bold;
}

blockquote {
  border-left: 4px solid var(--primary-color);
  color: #888;
}

/* links render as colored spans after pasting */
a {
  color: var(--primary-color);
}
"#;

#[test]
fn test_metadata_comes_from_the_leading_comment() {
    let metadata = parse_theme_metadata(SAMPLE_THEME);
    assert_eq!(metadata.name.as_deref(), Some("Mint"));
    assert_eq!(metadata.author.as_deref(), Some("wepub"));
    assert_eq!(
        metadata.description.as_deref(),
        Some("Green accents on a plain base"),
    );
    assert_eq!(metadata.version.as_deref(), Some("1.2.0"));
}

#[test]
fn test_parsing_the_same_text_twice_is_identical() {
    assert_eq!(parse_theme(SAMPLE_THEME), parse_theme(SAMPLE_THEME));
}

#[test]
fn test_grouped_selectors_are_split() {
    let theme = parse_theme(SAMPLE_THEME);
    assert!(theme.declarations("h1, h2").is_none());
    assert!(theme.declarations("h1").is_some());
    assert!(theme.declarations("h2").is_some());
}

#[test]
fn test_full_theme_renders_with_variables_resolved() {
    let theme = parse_theme(SAMPLE_THEME);
    let html = render(
        "# Title\n\n> aside with [a link](https://example.com/x)\n",
        &theme,
        &Settings::default(),
    )
    .unwrap();
    assert!(html.starts_with(
        "<section style=\"font-size: 15px; color: #3f3f3f; line-height: 1.75;\">"
    ));
    assert!(html.contains("<h1 style=\"color: #07c160; font-weight: bold;\">Title</h1>"));
    assert!(html.contains("border-left: 4px solid #07c160;"));
    assert!(html.contains("<span style=\"color: #07c160;\">a link</span>"));
    assert!(!html.contains("var(--"));
    assert!(!html.contains("--primary-color"));
}
