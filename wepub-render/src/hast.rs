//! Core data structures for the HTML-like tree.
//!
//! This is the tree the structural rewrites and the style resolution
//! engine operate on, before it is lowered to an `RcDom` for
//! serialization. Attribute order is preserved; `Raw` nodes carry
//! verbatim HTML that is never styled.

/// The converted fragment: an ordered sequence of top-level nodes.
///
/// The document itself is the synthetic root; the serializer wraps the
/// children in a container element carrying body-level styles.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct HtmlDocument {
    pub children: Vec<HtmlNode>,
}

/// A node in the HTML tree.
#[derive(Debug, Clone, PartialEq)]
pub enum HtmlNode {
    Element(Element),
    Text(String),
    /// Verbatim HTML emitted as-is during serialization.
    Raw(String),
}

/// An element with a tag name, ordered attributes and children.
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    pub tag_name: String,
    pub properties: Vec<(String, String)>,
    pub children: Vec<HtmlNode>,
}

impl Element {
    pub fn new(tag_name: &str) -> Self {
        Element {
            tag_name: tag_name.to_string(),
            properties: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn with_children(tag_name: &str, children: Vec<HtmlNode>) -> Self {
        Element {
            tag_name: tag_name.to_string(),
            properties: Vec::new(),
            children,
        }
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        self.properties
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Set an attribute, replacing any existing value for the same name.
    pub fn set_attr(&mut self, name: &str, value: &str) {
        if let Some(entry) = self.properties.iter_mut().find(|(key, _)| key == name) {
            entry.1 = value.to_string();
        } else {
            self.properties
                .push((name.to_string(), value.to_string()));
        }
    }

    pub fn remove_attr(&mut self, name: &str) -> Option<String> {
        let index = self.properties.iter().position(|(key, _)| key == name)?;
        Some(self.properties.remove(index).1)
    }

    /// Append declarations to the element's `style` attribute, never
    /// clobbering styles applied by an earlier stage.
    pub fn append_style(&mut self, declarations: &str) {
        if declarations.is_empty() {
            return;
        }
        match self.attr("style") {
            Some(existing) if !existing.is_empty() => {
                let merged = format!("{existing} {declarations}");
                self.set_attr("style", &merged);
            }
            _ => self.set_attr("style", declarations),
        }
    }

    /// The element's classes, whitespace-split.
    pub fn class_list(&self) -> Vec<&str> {
        self.attr("class")
            .map(|value| value.split_whitespace().collect())
            .unwrap_or_default()
    }
}

/// Convenience constructor for a text node.
pub fn text(value: &str) -> HtmlNode {
    HtmlNode::Text(value.to_string())
}
