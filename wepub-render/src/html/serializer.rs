//! HTML tree → string serialization.
//!
//! The tree is lowered to an `RcDom`, wrapped in a single `<section>`
//! carrying the resolved body-level style, and serialized with
//! html5ever. Raw nodes are re-parsed and spliced in as real DOM
//! content so the output is one well-formed fragment.

use html5ever::{
    ns, parse_document, serialize, serialize::SerializeOpts, serialize::TraversalScope,
    tendril::TendrilSink, Attribute, LocalName, ParseOpts, QualName,
};
use markup5ever_rcdom::{Handle, Node, NodeData, RcDom, SerializableHandle};
use std::cell::{Cell, RefCell};
use std::default::Default;
use std::rc::Rc;

use crate::error::RenderError;
use crate::hast::{Element, HtmlDocument, HtmlNode};

/// Serializes the document to a self-contained HTML fragment.
///
/// `body_style` is the container's inline style; when empty the
/// `<section>` wrapper carries no style attribute. An empty document
/// serializes to an empty wrapper, not an empty string.
pub fn serialize_fragment(doc: &HtmlDocument, body_style: &str) -> Result<String, RenderError> {
    let attrs = if body_style.is_empty() {
        vec![]
    } else {
        vec![("style", body_style)]
    };
    let section = create_element("section", attrs);
    for node in &doc.children {
        append_node(&section, node);
    }
    serialize_handle(&section)
}

fn append_node(parent: &Handle, node: &HtmlNode) {
    match node {
        HtmlNode::Element(element) => {
            let handle = build_element(element);
            parent.children.borrow_mut().push(handle);
        }
        HtmlNode::Text(value) => {
            parent.children.borrow_mut().push(create_text(value));
        }
        HtmlNode::Raw(html) => {
            for child in parse_raw(html) {
                parent.children.borrow_mut().push(child);
            }
        }
    }
}

fn build_element(element: &Element) -> Handle {
    let attrs: Vec<(&str, &str)> = element
        .properties
        .iter()
        .map(|(name, value)| (name.as_str(), value.as_str()))
        .collect();
    let handle = create_element(&element.tag_name, attrs);
    for child in &element.children {
        append_node(&handle, child);
    }
    handle
}

/// Parses raw HTML and returns its body-level nodes for splicing.
/// Content the HTML parser refuses to place in a body is dropped.
fn parse_raw(html: &str) -> Vec<Handle> {
    let dom = parse_document(RcDom::default(), ParseOpts::default()).one(html);
    let document_children = dom.document.children.borrow();
    let Some(root) = document_children
        .iter()
        .find(|node| is_element(node, "html"))
    else {
        return Vec::new();
    };
    let root_children = root.children.borrow();
    match root_children.iter().find(|node| is_element(node, "body")) {
        // Detach rather than clone: when the temporary `RcDom` drops,
        // `Node::drop` recursively empties every still-attached node's
        // children, which would hollow out the spliced handles.
        Some(body) => std::mem::take(&mut *body.children.borrow_mut()),
        None => Vec::new(),
    }
}

fn is_element(node: &Handle, tag: &str) -> bool {
    match &node.data {
        NodeData::Element { name, .. } => name.local.as_ref() == tag,
        _ => false,
    }
}

fn create_element(tag: &str, attrs: Vec<(&str, &str)>) -> Handle {
    let qual_name = QualName::new(None, ns!(html), LocalName::from(tag));
    let attributes = attrs
        .into_iter()
        .map(|(name, value)| Attribute {
            name: QualName::new(None, ns!(), LocalName::from(name)),
            value: value.to_string().into(),
        })
        .collect();

    Rc::new(Node {
        parent: Cell::new(None),
        children: RefCell::new(Vec::new()),
        data: NodeData::Element {
            name: qual_name,
            attrs: RefCell::new(attributes),
            template_contents: Default::default(),
            mathml_annotation_xml_integration_point: false,
        },
    })
}

fn create_text(text: &str) -> Handle {
    Rc::new(Node {
        parent: Cell::new(None),
        children: RefCell::new(Vec::new()),
        data: NodeData::Text {
            contents: RefCell::new(text.to_string().into()),
        },
    })
}

fn serialize_handle(handle: &Handle) -> Result<String, RenderError> {
    let opts = SerializeOpts {
        traversal_scope: TraversalScope::IncludeNode,
        ..Default::default()
    };
    let mut output = Vec::new();
    let serializable = SerializableHandle::from(handle.clone());
    serialize(&mut output, &serializable, opts)
        .map_err(|e| RenderError::SerializationError(format!("HTML serialization failed: {e}")))?;
    String::from_utf8(output)
        .map_err(|e| RenderError::SerializationError(format!("UTF-8 conversion failed: {e}")))
}
