use serde::{Deserialize, Serialize};

// Response structs for the Jira search API
#[derive(Serialize, Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct SearchResponse {
    #[serde(default)]
    pub issues: Vec<Issue>,
    #[serde(default)]
    pub error_messages: Vec<String>,
}

impl SearchResponse {
    /// Message shown when a search came back without issues.
    pub fn failure_message(&self) -> String {
        if self.error_messages.is_empty() {
            "Unexpected error, no issues".to_string()
        } else {
            self.error_messages.join("; ")
        }
    }
}

#[derive(Serialize, Deserialize, Debug)]
pub struct Issue {
    pub key: String,
    pub fields: IssueFields,
}

impl Issue {
    pub fn assignee_name(&self) -> Option<&str> {
        self.fields
            .assignee
            .as_ref()
            .map(|assignee| assignee.display_name.as_str())
    }
}

#[derive(Serialize, Deserialize, Debug)]
pub struct IssueFields {
    #[serde(default)]
    pub summary: String,
    pub assignee: Option<Assignee>,
    // Kept raw, the document shape is only trusted by the excerpt extractor
    #[serde(default)]
    pub description: Option<serde_json::Value>,
}

#[derive(Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct Assignee {
    pub display_name: String,
}

/// A node of an Atlassian document (ADF) tree.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct RichTextNode {
    #[serde(rename = "type")]
    pub node_type: String,
    pub content: Option<Vec<RichTextNode>>,
    pub text: Option<String>,
}

impl RichTextNode {
    pub fn text(text: &str) -> Self {
        Self {
            node_type: "text".to_string(),
            content: None,
            text: Some(text.to_string()),
        }
    }

    pub fn block(node_type: &str, content: Vec<RichTextNode>) -> Self {
        Self {
            node_type: node_type.to_string(),
            content: Some(content),
            text: None,
        }
    }

    pub fn paragraph(content: Vec<RichTextNode>) -> Self {
        Self::block("paragraph", content)
    }

    pub fn doc(content: Vec<RichTextNode>) -> Self {
        Self::block("doc", content)
    }
}
