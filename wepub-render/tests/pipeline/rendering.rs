use wepub_render::{extract_frontmatter, parse_theme, render, Settings, ThemeStyles};

#[test]
fn test_basic_document_gets_inline_styles() {
    let theme = parse_theme("h1 { color: #1a1a1a; } p { line-height: 1.75; }");
    let html = render("# Hello\n\nWorld.", &theme, &Settings::default()).unwrap();
    assert_eq!(
        html,
        "<section><h1 style=\"color: #1a1a1a;\">Hello</h1>\
         <p style=\"line-height: 1.75;\">World.</p></section>",
    );
}

#[test]
fn test_unmatched_elements_carry_no_style_attribute() {
    let theme = parse_theme("h1 { color: red; }");
    let html = render("plain paragraph", &theme, &Settings::default()).unwrap();
    assert_eq!(html, "<section><p>plain paragraph</p></section>");
}

#[test]
fn test_links_become_non_interactive_spans() {
    let theme = parse_theme("a { color: #576b95; }");
    let html = render(
        "see [the docs](https://docs.example) here",
        &theme,
        &Settings::default(),
    )
    .unwrap();
    assert!(html.contains("<span style=\"color: #576b95;\">the docs</span>"));
    assert!(!html.contains("href"));
    assert!(!html.contains("<a"));
}

#[test]
fn test_image_is_wrapped_in_a_figure_with_caption() {
    let html = render(
        "![alt text](https://img.example/a.png \"The caption\")",
        &ThemeStyles::new(),
        &Settings::default(),
    )
    .unwrap();
    assert!(html.contains("<figure>"));
    assert!(html.contains("<figcaption>The caption</figcaption>"));
    assert!(html.contains("data-src=\"https://img.example/a.png\""));
    assert!(!html.contains("<p><figure"));
}

#[test]
fn test_relative_image_sources_use_the_configured_domain() {
    let settings = Settings {
        image_domain: "https://cdn.example".to_string(),
        ..Settings::default()
    };
    let html = render("![](/pics/a.png)", &ThemeStyles::new(), &settings).unwrap();
    assert!(html.contains("src=\"https://cdn.example/pics/a.png\""));
    assert!(html.contains("data-src=\"/pics/a.png\""));
}

#[test]
fn test_image_title_wins_over_alt_with_domain_join() {
    let settings = Settings {
        image_domain: "https://cdn.example.com".to_string(),
        ..Settings::default()
    };
    let html = render(
        "![alt text](img.png \"A Title\")",
        &ThemeStyles::new(),
        &settings,
    )
    .unwrap();
    assert!(html.contains("src=\"https://cdn.example.com/img.png\""));
    assert!(html.contains("<figcaption>A Title</figcaption>"));
    assert!(!html.contains("<figcaption>alt text</figcaption>"));
}

#[test]
fn test_heading_numbering_styles() {
    let source = "## First\n\n### Nested\n\n## Second\n";
    let settings = Settings {
        heading_numbering_style: "number-dot".to_string(),
        ..Settings::default()
    };
    let html = render(source, &ThemeStyles::new(), &settings).unwrap();
    assert!(html.contains("<h2>1. First</h2>"));
    assert!(html.contains("<h3>1.1 Nested</h3>"));
    assert!(html.contains("<h2>2. Second</h2>"));

    let settings = Settings {
        heading_numbering_style: "chinese-dot".to_string(),
        ..Settings::default()
    };
    let html = render(source, &ThemeStyles::new(), &settings).unwrap();
    assert!(html.contains("<h2>\u{4e00}\u{3001}First</h2>"));
    assert!(html.contains("<h2>\u{4e8c}\u{3001}Second</h2>"));
}

#[test]
fn test_forced_line_breaks() {
    let settings = Settings {
        force_line_breaks: true,
        ..Settings::default()
    };
    let html = render("one\ntwo", &ThemeStyles::new(), &settings).unwrap();
    assert!(html.contains("one<br>two"));
}

#[test]
fn test_soft_breaks_stay_soft_by_default() {
    let html = render("one\ntwo", &ThemeStyles::new(), &Settings::default()).unwrap();
    assert!(html.contains("one\ntwo"));
    assert!(!html.contains("<br>"));
}

#[test]
fn test_front_matter_is_not_rendered() {
    let source = "---\ntitle: Draft\n---\n\n# Body\n";
    let html = render(source, &ThemeStyles::new(), &Settings::default()).unwrap();
    assert!(!html.contains("title"));
    assert!(html.contains("<h1>Body</h1>"));
    assert_eq!(extract_frontmatter(source).as_deref(), Some("title: Draft"));
}

#[test]
fn test_raw_html_passes_through_unstyled() {
    let theme = parse_theme("div { color: red; } .note { color: red; }");
    let html = render(
        "<div class=\"note\">kept as-is</div>\n",
        &theme,
        &Settings::default(),
    )
    .unwrap();
    assert!(html.contains("<div class=\"note\">kept as-is</div>"));
    assert!(!html.contains("color: red"));
}

#[test]
fn test_table_alignment_and_styles() {
    let theme = parse_theme("th { background: #f5f5f5; }");
    let source = "| a | b |\n|:-:|---|\n| 1 | 2 |\n";
    let html = render(source, &theme, &Settings::default()).unwrap();
    assert!(html.contains("text-align: center;"));
    assert!(html.contains("background: #f5f5f5;"));
    assert!(html.contains("<tbody><tr><td"));
}

#[test]
fn test_blockquote_and_emphasis_nesting() {
    let theme = parse_theme("blockquote { border-left: 3px solid #ddd; } em { color: #888; }");
    let html = render("> quoted *soft* words", &theme, &Settings::default()).unwrap();
    assert!(html.contains("<blockquote style=\"border-left: 3px solid #ddd;\">"));
    assert!(html.contains("<em style=\"color: #888;\">soft</em>"));
}

#[test]
fn test_body_rule_styles_only_the_wrapper() {
    let theme = parse_theme("body { font-family: sans-serif; color: #333; }");
    let html = render("text", &theme, &Settings::default()).unwrap();
    assert!(html.starts_with("<section style=\"font-family: sans-serif; color: #333;\">"));
    assert!(html.contains("<p>text</p>"));
}
