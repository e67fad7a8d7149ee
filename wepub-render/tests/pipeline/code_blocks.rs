use wepub_render::{parse_theme, render, Settings, ThemeStyles};

#[test]
fn test_fenced_block_is_decorated() {
    let html = render(
        "```rust\nfn main() {}\n```\n",
        &ThemeStyles::new(),
        &Settings::default(),
    )
    .unwrap();
    assert!(html.contains("<pre style="));
    assert!(html.contains("border: 1px solid #ddd"));
    assert!(html.contains("background-color: #f6f8fa"));
    assert!(html.contains("<svg"));
    assert!(!html.contains("<pre class"));
}

#[test]
fn test_code_text_whitespace_is_hardened() {
    let html = render(
        "```\nlet x = 1;\nlet y = 2;\n```\n",
        &ThemeStyles::new(),
        &Settings::default(),
    )
    .unwrap();
    assert!(html.contains("let&nbsp;x&nbsp;=&nbsp;1;<br>let&nbsp;y&nbsp;=&nbsp;2;<br>"));
}

#[test]
fn test_code_element_gets_monospace_base_style() {
    let html = render("```\nx\n```\n", &ThemeStyles::new(), &Settings::default()).unwrap();
    assert!(html.contains("font-family: Consolas, Monaco"));
    assert!(html.contains("background: transparent;"));
}

#[test]
fn test_theme_rules_do_not_reach_code_blocks() {
    let theme = parse_theme("pre { color: purple; } code { color: purple; }");
    let html = render("```\nx\n```\n", &theme, &Settings::default()).unwrap();
    assert!(!html.contains("purple"));
}

#[test]
fn test_inline_code_is_styled_by_the_theme() {
    let theme = parse_theme("code { background: #f3f3f3; }");
    let html = render("use `let` here", &theme, &Settings::default()).unwrap();
    assert!(html.contains("<code style=\"background: #f3f3f3;\">let</code>"));
}
