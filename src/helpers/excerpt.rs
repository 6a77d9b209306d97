//! Plain-text excerpts of Jira descriptions.
//!
//! Descriptions arrive as Atlassian document trees. Only the text nodes of
//! top-level paragraphs are kept, concatenated in document order.

use serde_json::Value;

use crate::models::jira::RichTextNode;

pub const EXCERPT_LIMIT: usize = 200;

/// Read access to a document node, either typed or raw JSON.
///
/// Nodes are only inspected when the walk reaches them, so malformed parts
/// of a document that are never visited do not affect the excerpt.
pub trait DocumentNode: Sized {
    fn node_type(&self) -> Option<&str>;
    fn children(&self) -> Option<&[Self]>;
    fn text(&self) -> Option<&str>;
}

impl DocumentNode for RichTextNode {
    fn node_type(&self) -> Option<&str> {
        Some(self.node_type.as_str())
    }

    fn children(&self) -> Option<&[Self]> {
        self.content.as_deref()
    }

    fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }
}

impl DocumentNode for Value {
    fn node_type(&self) -> Option<&str> {
        self.get("type")?.as_str()
    }

    fn children(&self) -> Option<&[Self]> {
        self.get("content")?.as_array().map(Vec::as_slice)
    }

    fn text(&self) -> Option<&str> {
        self.get("text")?.as_str()
    }
}

/// Excerpt of a document, or an empty string when the document is missing or malformed.
pub fn extract(document: Option<&RichTextNode>) -> String {
    document.and_then(try_extract).unwrap_or_default()
}

/// Same as [`extract`] for a raw JSON description.
pub fn extract_value(description: Option<&Value>) -> String {
    description.and_then(try_extract).unwrap_or_default()
}

/// Walks the document, `None` when a visited block has no content list, or a
/// visited paragraph child has no type or a text node has no text.
///
/// A block's type is only read once it has a child, and children of
/// non-paragraph blocks are never inspected.
pub fn try_extract<N: DocumentNode>(document: &N) -> Option<String> {
    let mut excerpt = String::new();
    let mut length = 0;

    for block in document.children()? {
        for node in block.children()? {
            if block.node_type()? == "paragraph" && node.node_type()? == "text" {
                let text = node.text()?;
                excerpt.push_str(text);
                length += text.chars().count();

                if length > EXCERPT_LIMIT {
                    return Some(truncate(excerpt));
                }
            }
        }
    }

    Some(truncate(excerpt))
}

fn truncate(excerpt: String) -> String {
    match excerpt.char_indices().nth(EXCERPT_LIMIT) {
        Some((byte_index, _)) => excerpt[..byte_index].to_string(),
        None => excerpt,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn doc_with(texts: &[&str]) -> RichTextNode {
        RichTextNode::doc(vec![RichTextNode::paragraph(
            texts.iter().map(|t| RichTextNode::text(t)).collect(),
        )])
    }

    #[test]
    fn missing_document_is_empty() {
        assert_eq!(extract(None), "");
        assert_eq!(extract_value(None), "");
    }

    #[test]
    fn empty_object_is_empty() {
        assert_eq!(extract_value(Some(&json!({}))), "");
    }

    #[test]
    fn single_text_node() {
        assert_eq!(extract(Some(&doc_with(&["hello"]))), "hello");
    }

    #[test]
    fn concatenates_paragraphs_in_order() {
        let document = RichTextNode::doc(vec![
            RichTextNode::paragraph(vec![RichTextNode::text("one "), RichTextNode::text("two ")]),
            RichTextNode::block("codeBlock", vec![RichTextNode::text("skipped")]),
            RichTextNode::paragraph(vec![
                RichTextNode::block("hardBreak", vec![]),
                RichTextNode::text("three"),
            ]),
        ]);

        assert_eq!(extract(Some(&document)), "one two three");
    }

    #[test]
    fn truncates_to_limit() {
        let chunk = "x".repeat(150);
        let excerpt = extract(Some(&doc_with(&[chunk.as_str(), chunk.as_str(), "never read"])));
        assert_eq!(excerpt.chars().count(), EXCERPT_LIMIT);
        assert_eq!(excerpt, "x".repeat(EXCERPT_LIMIT));
    }

    #[test]
    fn exactly_at_limit_keeps_reading() {
        let chunk = "a".repeat(EXCERPT_LIMIT);
        let excerpt = extract(Some(&doc_with(&[chunk.as_str(), "b"])));
        assert_eq!(excerpt, "a".repeat(EXCERPT_LIMIT));
    }

    #[test]
    fn truncation_counts_characters() {
        let chunk = "ż".repeat(199);
        let excerpt = extract(Some(&doc_with(&[chunk.as_str(), "ół"])));
        assert_eq!(excerpt.chars().count(), EXCERPT_LIMIT);
        assert!(excerpt.ends_with("żó"));
    }

    #[test]
    fn stops_before_malformed_trailing_block() {
        let chunk = "y".repeat(201);
        let document = RichTextNode::doc(vec![
            RichTextNode::paragraph(vec![RichTextNode::text(&chunk)]),
            RichTextNode {
                node_type: "rule".to_string(),
                content: None,
                text: None,
            },
        ]);

        assert_eq!(extract(Some(&document)), "y".repeat(EXCERPT_LIMIT));
    }

    #[test]
    fn block_without_content_is_malformed() {
        let document = RichTextNode::doc(vec![
            RichTextNode::paragraph(vec![RichTextNode::text("kept?")]),
            RichTextNode {
                node_type: "rule".to_string(),
                content: None,
                text: None,
            },
        ]);

        assert_eq!(try_extract(&document), None);
        assert_eq!(extract(Some(&document)), "");
    }

    #[test]
    fn text_node_without_text_is_malformed() {
        let document = RichTextNode::doc(vec![RichTextNode::paragraph(vec![RichTextNode {
            node_type: "text".to_string(),
            content: None,
            text: None,
        }])]);

        assert_eq!(extract(Some(&document)), "");
    }

    #[test]
    fn wrong_json_shapes_are_empty() {
        for value in [
            json!("plain string"),
            json!({"type": "doc", "content": "nope"}),
            json!({"type": "doc", "content": [{"content": []}]}),
            json!({"type": "doc"}),
        ] {
            assert_eq!(extract_value(Some(&value)), "", "value {value}");
        }
    }

    #[test]
    fn json_blocks_after_limit_are_not_visited() {
        let value = json!({
            "type": "doc",
            "content": [
                {"type": "paragraph", "content": [{"type": "text", "text": "y".repeat(201)}]},
                {"content": []},
                {"type": "rule"}
            ]
        });

        assert_eq!(extract_value(Some(&value)), "y".repeat(EXCERPT_LIMIT));
    }

    #[test]
    fn json_non_paragraph_children_are_not_inspected() {
        let value = json!({
            "type": "doc",
            "content": [
                {"type": "paragraph", "content": [{"type": "text", "text": "hello"}]},
                {
                    "type": "bulletList",
                    "content": [{"type": "listItem", "content": [{"text": "x"}]}]
                }
            ]
        });

        assert_eq!(extract_value(Some(&value)), "hello");
    }

    #[test]
    fn json_paragraph_child_without_type_is_malformed() {
        let value = json!({
            "type": "doc",
            "content": [{"type": "paragraph", "content": [{"text": "lost"}]}]
        });

        assert_eq!(try_extract(&value), None);
        assert_eq!(extract_value(Some(&value)), "");
    }

    #[test]
    fn json_text_must_be_a_string() {
        let value = json!({
            "type": "doc",
            "content": [{"type": "paragraph", "content": [{"type": "text", "text": 42}]}]
        });

        assert_eq!(extract_value(Some(&value)), "");
    }

    #[test]
    fn raw_adf_description() {
        let value = json!({
            "type": "doc",
            "version": 1,
            "content": [{
                "type": "paragraph",
                "content": [
                    {"type": "text", "text": "Add "},
                    {"type": "text", "text": "export", "marks": [{"type": "strong"}]}
                ]
            }]
        });

        assert_eq!(extract_value(Some(&value)), "Add export");
    }
}
