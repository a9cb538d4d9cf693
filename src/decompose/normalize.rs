// src/decompose/normalize.rs
//! Text flattening and the punctuation substitutions applied to extracted text.

use super::document::HtmlNode;

/// Concatenate every descendant text of `node`, in document order.
///
/// Non-breaking spaces become plain spaces and right single quotes become
/// apostrophes. Smart double quotes are left alone here, see [`normalize_quotes`].
pub fn flatten(node: &HtmlNode) -> String {
    let mut out = String::new();
    append_text(node, &mut out);
    out
}

fn append_text(node: &HtmlNode, out: &mut String) {
    match node {
        HtmlNode::Text(text) => out.push_str(&normalize_text(text)),
        HtmlNode::Element(element) => {
            for child in &element.children {
                append_text(child, out);
            }
        }
    }
}

pub fn normalize_text(text: &str) -> String {
    text.replace('\u{a0}', " ").replace('\u{2019}', "'")
}

/// List items only: smart double quotes become plain ones.
pub fn normalize_quotes(text: &str) -> String {
    normalize_text(text)
        .replace('\u{201c}', "\"")
        .replace('\u{201d}', "\"")
}

/// Résumé entry titles: en dashes and bullets become ASCII.
pub fn normalize_title(label: &str) -> String {
    label.replace('\u{2013}', "-").replace('\u{2022}', "*")
}
