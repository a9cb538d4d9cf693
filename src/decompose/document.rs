// src/decompose/document.rs
//! Parsing seam: turns HTML text into a small owned tree of text and element nodes.

use scraper::{ElementRef, Html, Node, Selector};

use crate::app_log;

/// Element nesting deeper than this is collapsed into a single text node.
pub const MAX_NESTING_DEPTH: usize = 512;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HtmlNode {
    Text(String),
    Element(Element),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub tag: String,
    pub children: Vec<HtmlNode>,
}

impl HtmlNode {
    pub fn text(content: impl Into<String>) -> Self {
        HtmlNode::Text(content.into())
    }

    pub fn element(tag: impl Into<String>, children: Vec<HtmlNode>) -> Self {
        HtmlNode::Element(Element::new(tag, children))
    }

    pub fn as_element(&self) -> Option<&Element> {
        match self {
            HtmlNode::Element(element) => Some(element),
            HtmlNode::Text(_) => None,
        }
    }

    pub fn is_text(&self) -> bool {
        matches!(self, HtmlNode::Text(_))
    }
}

impl Element {
    pub fn new(tag: impl Into<String>, children: Vec<HtmlNode>) -> Self {
        Self {
            tag: tag.into(),
            children,
        }
    }

    pub fn is(&self, tag: &str) -> bool {
        self.tag == tag
    }

    /// Sibling immediately before the child at `index`, text nodes included.
    pub fn previous_sibling(&self, index: usize) -> Option<&HtmlNode> {
        index.checked_sub(1).and_then(|i| self.children.get(i))
    }
}

/// A parsed HTML document reduced to its `<body>`.
#[derive(Debug, Clone)]
pub struct Document {
    body: Option<Element>,
}

impl Document {
    pub fn parse(html: &str) -> Self {
        // html5ever always synthesises a body, so only trust an explicit tag
        if !has_body_tag(html) {
            app_log!(debug, "No <body> tag in document");
            return Self { body: None };
        }

        let parsed = Html::parse_document(html);
        let body = Selector::parse("body")
            .ok()
            .and_then(|selector| parsed.select(&selector).next())
            .map(|body| convert_element(body, 0));

        Self { body }
    }

    pub fn body(&self) -> Option<&Element> {
        self.body.as_ref()
    }
}

fn has_body_tag(html: &str) -> bool {
    let lower = html.to_ascii_lowercase();
    lower.match_indices("<body").any(|(pos, tag)| {
        matches!(
            lower[pos + tag.len()..].chars().next(),
            Some(c) if c == '>' || c == '/' || c.is_ascii_whitespace()
        )
    })
}

fn convert_element(element: ElementRef<'_>, depth: usize) -> Element {
    let tag = element.value().name().to_string();

    if depth >= MAX_NESTING_DEPTH {
        app_log!(
            warn,
            "Nesting deeper than {} levels under <{}>, collapsing to text",
            MAX_NESTING_DEPTH,
            tag
        );
        let text: String = element.text().collect();
        return Element::new(tag, vec![HtmlNode::Text(text)]);
    }

    let mut children = Vec::new();
    for child in element.children() {
        match child.value() {
            Node::Text(text) => children.push(HtmlNode::Text(text.to_string())),
            Node::Element(_) => {
                if let Some(child_element) = ElementRef::wrap(child) {
                    children.push(HtmlNode::Element(convert_element(child_element, depth + 1)));
                }
            }
            // a comment still occupies its sibling slot but flattens to nothing
            Node::Comment(_) => children.push(HtmlNode::Text(String::new())),
            _ => {}
        }
    }

    Element::new(tag, children)
}
