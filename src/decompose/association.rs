// src/decompose/association.rs
//! Pairs every `<ul>` in a subtree with the text just before it, and every
//! vocabulary hit with the fixed `"Skills"` label.

use serde::Serialize;

use super::document::{Element, HtmlNode};
use super::normalize::{flatten, normalize_quotes};
use super::vocabulary::{expand_term, Vocabulary};
use crate::app_log;

pub const SKILLS_LABEL: &str = "Skills";

/// What a labelled entry carries: a single keyword hit or the items of a list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ListContent {
    Keyword(String),
    Items(Vec<String>),
}

impl ListContent {
    pub fn into_items(self) -> Vec<String> {
        match self {
            ListContent::Keyword(term) => vec![term],
            ListContent::Items(items) => items,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LabeledList {
    /// `None` when the list has no preceding sibling at all.
    pub label: Option<String>,
    pub content: ListContent,
}

impl LabeledList {
    pub fn keyword(term: impl Into<String>) -> Self {
        Self {
            label: Some(SKILLS_LABEL.to_string()),
            content: ListContent::Keyword(term.into()),
        }
    }

    pub fn items(label: Option<String>, items: Vec<String>) -> Self {
        Self {
            label,
            content: ListContent::Items(items),
        }
    }

    pub fn label_str(&self) -> &str {
        self.label.as_deref().unwrap_or_default()
    }
}

/// Walk `node` depth-first and collect every labelled list below it.
///
/// Keyword hits and `<ul>` hits are independent: one child may yield both.
/// Recursion continues into lists, so nested lists produce their own pairs.
pub fn associate(node: &Element, vocabulary: Option<&Vocabulary>) -> Vec<LabeledList> {
    let mut pairs = Vec::new();
    collect(node, vocabulary, &mut pairs);
    app_log!(debug, "Associated {} labelled lists", pairs.len());
    pairs
}

fn collect(node: &Element, vocabulary: Option<&Vocabulary>, pairs: &mut Vec<LabeledList>) {
    for (index, child) in node.children.iter().enumerate() {
        if let Some(vocabulary) = vocabulary {
            let text = flatten(child);
            for term in vocabulary.matches(&text) {
                pairs.extend(expand_term(term).into_iter().map(LabeledList::keyword));
            }
        }

        let HtmlNode::Element(element) = child else {
            continue;
        };

        if element.is("ul") {
            let items = element
                .children
                .iter()
                .filter(|item| !item.is_text())
                .map(|item| normalize_quotes(&flatten(item)))
                .collect();
            let label = node.previous_sibling(index).map(flatten);
            pairs.push(LabeledList::items(label, items));
        }

        collect(element, vocabulary, pairs);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn li(text: &str) -> HtmlNode {
        HtmlNode::element("li", vec![HtmlNode::text(text)])
    }

    fn ul(items: &[&str]) -> HtmlNode {
        HtmlNode::element("ul", items.iter().map(|item| li(item)).collect())
    }

    fn body(children: Vec<HtmlNode>) -> Element {
        Element::new("body", children)
    }

    #[test]
    fn test_ul_labelled_by_previous_sibling() {
        let root = body(vec![
            HtmlNode::element("p", vec![HtmlNode::text("Requirements:")]),
            ul(&["a", "b", "c"]),
        ]);

        let pairs = associate(&root, None);
        assert_eq!(
            pairs,
            vec![LabeledList::items(
                Some("Requirements:".to_string()),
                vec!["a".to_string(), "b".to_string(), "c".to_string()]
            )]
        );
    }

    #[test]
    fn test_items_keep_order_and_duplicates() {
        let root = body(vec![HtmlNode::text("x"), ul(&["b", "a", "b"])]);
        let pairs = associate(&root, None);
        assert_eq!(pairs[0].content, ListContent::Items(vec!["b".into(), "a".into(), "b".into()]));
    }

    #[test]
    fn test_ul_without_previous_sibling_has_no_label() {
        let root = body(vec![ul(&["only"])]);
        let pairs = associate(&root, None);
        assert_eq!(pairs.len(), 1);
        assert_eq!(pairs[0].label, None);
        assert_eq!(pairs[0].label_str(), "");
    }

    #[test]
    fn test_whitespace_sibling_is_the_label() {
        let root = body(vec![
            HtmlNode::element("h3", vec![HtmlNode::text("Skills:")]),
            HtmlNode::text("\n"),
            ul(&["a"]),
        ]);
        let pairs = associate(&root, None);
        assert_eq!(pairs[0].label.as_deref(), Some("\n"));
    }

    #[test]
    fn test_nested_lists_are_found() {
        let nested = HtmlNode::element(
            "li",
            vec![
                HtmlNode::element("span", vec![HtmlNode::text("Inner")]),
                ul(&["deep"]),
            ],
        );
        let root = body(vec![
            HtmlNode::element("div", vec![HtmlNode::text("Outer")]),
            HtmlNode::element("ul", vec![nested]),
        ]);

        let pairs = associate(&root, None);
        assert_eq!(pairs.len(), 2);
        assert_eq!(pairs[0].label.as_deref(), Some("Outer"));
        assert_eq!(pairs[0].content, ListContent::Items(vec!["Innerdeep".into()]));
        assert_eq!(pairs[1].label.as_deref(), Some("Inner"));
        assert_eq!(pairs[1].content, ListContent::Items(vec!["deep".into()]));
    }

    #[test]
    fn test_text_children_of_ul_are_not_items() {
        let root = body(vec![
            HtmlNode::text("Label"),
            HtmlNode::element("ul", vec![HtmlNode::text("\n  "), li("a"), HtmlNode::text("\n")]),
        ]);
        let pairs = associate(&root, None);
        assert_eq!(pairs[0].content, ListContent::Items(vec!["a".into()]));
    }

    #[test]
    fn test_item_quotes_normalized_but_label_untouched() {
        let root = body(vec![
            HtmlNode::text("\u{201c}Quoted\u{201d} label"),
            ul(&["said \u{201c}hi\u{201d}"]),
        ]);
        let pairs = associate(&root, None);
        assert_eq!(pairs[0].label.as_deref(), Some("\u{201c}Quoted\u{201d} label"));
        assert_eq!(pairs[0].content, ListContent::Items(vec!["said \"hi\"".into()]));
    }

    #[test]
    fn test_keyword_hits_on_text_and_elements() {
        let vocabulary = Vocabulary::new(["python"]);
        let root = body(vec![
            HtmlNode::text("Python scripting"),
            HtmlNode::element("p", vec![HtmlNode::text("more python")]),
        ]);

        // text child, the <p>, then the <p>'s own text node
        let pairs = associate(&root, Some(&vocabulary));
        assert_eq!(pairs, vec![LabeledList::keyword("python"); 3]);
    }

    #[test]
    fn test_keyword_hit_and_list_hit_are_cumulative() {
        let vocabulary = Vocabulary::new(["rust"]);
        let root = body(vec![HtmlNode::text("Tools"), ul(&["Rust"])]);

        let pairs = associate(&root, Some(&vocabulary));
        // the ul, then the li and its text node during recursion
        assert_eq!(
            pairs,
            vec![
                LabeledList::keyword("rust"),
                LabeledList::items(Some("Tools".into()), vec!["Rust".into()]),
                LabeledList::keyword("rust"),
                LabeledList::keyword("rust"),
            ]
        );
    }

    #[test]
    fn test_c_family_term_expands() {
        let vocabulary = Vocabulary::new(["c/c++"]);
        let root = body(vec![HtmlNode::text("Languages: C/C++")]);

        let pairs = associate(&root, Some(&vocabulary));
        assert_eq!(pairs, vec![LabeledList::keyword("c"), LabeledList::keyword("c++")]);
    }

    #[test]
    fn test_no_vocabulary_means_no_keyword_hits() {
        let root = body(vec![HtmlNode::text("python")]);
        assert!(associate(&root, None).is_empty());
    }

    #[test]
    fn test_serializes_as_label_and_content() {
        let json = serde_json::to_value(LabeledList::keyword("redis")).unwrap();
        assert_eq!(json, serde_json::json!({"label": "Skills", "content": "redis"}));
    }
}
