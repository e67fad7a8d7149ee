use proptest::prelude::*;
use wepub_render::{parse_theme, render, Settings};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn render_is_deterministic(source in "\\PC{0,200}") {
        let theme = parse_theme(
            ":root { --c: #333; } body { color: var(--c); } p { line-height: 1.75; }",
        );
        let settings = Settings::default();
        let first = render(&source, &theme, &settings).unwrap();
        let second = render(&source, &theme, &settings).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn output_is_always_a_single_wrapped_fragment(source in "\\PC{0,200}") {
        let theme = parse_theme("body { font-size: 15px; }");
        let html = render(&source, &theme, &Settings::default()).unwrap();
        prop_assert!(html.starts_with("<section"));
        prop_assert!(html.ends_with("</section>"));
    }
}

#[test]
fn test_all_settings_enabled_is_still_deterministic() {
    let theme = parse_theme("h2 { color: var(--primary-color); } a { color: #576b95; }");
    let settings = Settings {
        font_size: "16px".to_string(),
        heading_numbering_style: "number-dot".to_string(),
        primary_color: "#07c160".to_string(),
        force_line_breaks: true,
        image_domain: "https://cdn.example".to_string(),
        enable_reference_links: true,
    };
    let source = "## One\n\nSee [docs](https://docs.example)\nand ![pic](/a.png).\n";
    let first = render(source, &theme, &settings).unwrap();
    let second = render(source, &theme, &settings).unwrap();
    assert_eq!(first, second);
    assert!(first.contains("<h2 style=\"color: #07c160;\">1. One</h2>"));
}
