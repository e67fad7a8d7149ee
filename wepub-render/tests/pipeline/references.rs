use wepub_render::{render, Settings, ThemeStyles};

fn settings() -> Settings {
    Settings {
        enable_reference_links: true,
        ..Settings::default()
    }
}

#[test]
fn test_link_gains_superscript_marker_and_appendix() {
    let html = render(
        "Read [the guide](https://guide.example \"The Guide\") first.",
        &ThemeStyles::new(),
        &settings(),
    )
    .unwrap();
    assert!(html.contains("the guide<sup>[1]</sup>"));
    assert!(html.contains("<hr>"));
    assert!(html.contains("<h2>References</h2>"));
    assert!(html.contains("The Guide (https://guide.example)"));
}

#[test]
fn test_repeated_destinations_share_a_number() {
    let source = "[one](https://a.example) and [two](https://a.example) and [three](https://b.example)";
    let html = render(source, &ThemeStyles::new(), &settings()).unwrap();
    assert!(html.contains("one<sup>[1]</sup>"));
    assert!(html.contains("two<sup>[1]</sup>"));
    assert!(html.contains("three<sup>[2]</sup>"));
    let appendix = html.split("<h2>References</h2>").nth(1).unwrap();
    assert_eq!(appendix.matches("<li>").count(), 2);
}

#[test]
fn test_platform_links_are_exempt() {
    let html = render(
        "[official](https://mp.weixin.qq.com/s/abc)",
        &ThemeStyles::new(),
        &settings(),
    )
    .unwrap();
    assert!(!html.contains("<sup>"));
    assert!(!html.contains("References"));
}

#[test]
fn test_bare_urls_are_not_converted() {
    // Autolinked URLs have their own destination as visible text.
    let html = render(
        "visit https://www.example.com/ today",
        &ThemeStyles::new(),
        &settings(),
    )
    .unwrap();
    assert!(!html.contains("<sup>"));
    assert!(!html.contains("References"));
}

#[test]
fn test_untitled_entry_lists_the_bare_url() {
    let html = render(
        "[docs](https://docs.example/page)",
        &ThemeStyles::new(),
        &settings(),
    )
    .unwrap();
    let appendix = html.split("<h2>References</h2>").nth(1).unwrap();
    assert!(appendix.contains("https://docs.example/page"));
}

#[test]
fn test_images_join_the_reference_list_without_markers() {
    let html = render(
        "![chart](https://img.example/chart.png)",
        &ThemeStyles::new(),
        &settings(),
    )
    .unwrap();
    assert!(html.contains("<figure>"));
    assert!(!html.contains("<sup>"));
    assert!(html.contains("<h2>References</h2>"));
    assert!(html.contains("https://img.example/chart.png"));
}

#[test]
fn test_disabled_conversion_leaves_links_inline() {
    let html = render(
        "[docs](https://docs.example)",
        &ThemeStyles::new(),
        &Settings::default(),
    )
    .unwrap();
    assert!(!html.contains("References"));
    assert!(html.contains("<span>docs</span>"));
}
