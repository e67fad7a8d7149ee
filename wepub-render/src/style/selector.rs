//! Minimal CSS selector matching against tree elements.
//!
//! Themes are trusted, hand-written stylesheets, so only the selector
//! forms they actually use are supported: tag names, `#id`, `.class`
//! and comma-separated groups. Combinator selectors are approximated:
//! a declaration applies when any simple part of the selector matches
//! the element, without checking ancestry. `:root` never matches an
//! in-tree element; its custom properties are read separately.

use crate::hast::Element;

/// Whether `selector` applies to `element` when rendered with the
/// given tag name. The tag override lets the anchor rewrite resolve
/// `a` rules for an element that has already become a `span`.
pub fn selector_matches(selector: &str, element: &Element, tag_name: &str) -> bool {
    selector
        .split(',')
        .map(str::trim)
        .filter(|group| !group.is_empty())
        .any(|group| {
            group
                .split(|c: char| c == ' ' || c == '>' || c == '+' || c == '~')
                .filter(|part| !part.is_empty())
                .any(|part| simple_matches(part, element, tag_name))
        })
}

fn simple_matches(part: &str, element: &Element, tag_name: &str) -> bool {
    if let Some(id) = part.strip_prefix('#') {
        return element.attr("id") == Some(id);
    }
    if let Some(class) = part.strip_prefix('.') {
        return element.class_list().contains(&class);
    }
    if part.starts_with(':') {
        return false;
    }
    part.eq_ignore_ascii_case(tag_name)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn element(tag: &str) -> Element {
        Element::new(tag)
    }

    #[test]
    fn test_tag_selector() {
        let el = element("h2");
        assert!(selector_matches("h2", &el, "h2"));
        assert!(!selector_matches("h3", &el, "h2"));
    }

    #[test]
    fn test_class_selector() {
        let mut el = element("code");
        el.set_attr("class", "hljs language-rust");
        assert!(selector_matches(".hljs", &el, "code"));
        assert!(!selector_matches(".missing", &el, "code"));
    }

    #[test]
    fn test_id_selector() {
        let mut el = element("div");
        el.set_attr("id", "toc");
        assert!(selector_matches("#toc", &el, "div"));
        assert!(!selector_matches("#other", &el, "div"));
    }

    #[test]
    fn test_group_selector() {
        let el = element("em");
        assert!(selector_matches("strong, em", &el, "em"));
    }

    #[test]
    fn test_combinator_matches_any_part() {
        let el = element("li");
        assert!(selector_matches("ul li", &el, "li"));
        assert!(selector_matches("blockquote > p, ol li", &el, "li"));
        assert!(!selector_matches("ul ol", &el, "li"));
    }

    #[test]
    fn test_root_never_matches() {
        let el = element("p");
        assert!(!selector_matches(":root", &el, "p"));
    }

    #[test]
    fn test_tag_override() {
        let el = element("span");
        assert!(selector_matches("a", &el, "a"));
        assert!(!selector_matches("a", &el, "span"));
    }
}
