//! Story graph definitions - records, nodes, and choices.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A node graph maps node ids to nodes.
///
/// A `BTreeMap` keeps iteration order deterministic: when a graph has no
/// `start` node, the entry point is the lexicographically smallest id.
pub type NodeGraph = BTreeMap<String, Node>;

/// The id of the conventional entry node.
pub const START_NODE: &str = "start";

/// A complete story as stored in the catalog.
///
/// The serialized shape is the registration format authors supply:
/// `{ id, title, synopsis, thumbnail?, data: { nodeId: { text, choices } } }`.
/// Records are immutable for the lifetime of a play session; only the
/// catalog layer replaces them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoryRecord {
    pub id: String,

    #[serde(default)]
    pub title: String,

    #[serde(default)]
    pub synopsis: String,

    /// Optional thumbnail URI for library cards.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,

    /// The node graph, keyed by node id.
    #[serde(rename = "data")]
    pub nodes: NodeGraph,
}

impl StoryRecord {
    /// Create a new story record with an empty graph.
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            synopsis: String::new(),
            thumbnail: None,
            nodes: NodeGraph::new(),
        }
    }

    /// Set the synopsis shown on library cards.
    pub fn with_synopsis(mut self, synopsis: impl Into<String>) -> Self {
        self.synopsis = synopsis.into();
        self
    }

    /// Add a node under the given id.
    pub fn with_node(mut self, id: impl Into<String>, node: Node) -> Self {
        self.nodes.insert(id.into(), node);
        self
    }

    /// The node id a play session starts from, if the graph has any nodes.
    pub fn entry_node(&self) -> Option<&str> {
        entry_node(&self.nodes)
    }
}

/// One narrative beat: displayable markup text plus outgoing choices.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Node {
    pub text: String,

    /// Rendered in declaration order. Empty means a terminal node.
    #[serde(default)]
    pub choices: Vec<Choice>,
}

impl Node {
    /// Create a node with no choices.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            choices: Vec::new(),
        }
    }

    /// Append a choice leading to `next`.
    pub fn with_choice(mut self, label: impl Into<String>, next: impl Into<String>) -> Self {
        self.choices.push(Choice {
            label: label.into(),
            next: next.into(),
        });
        self
    }
}

/// An outgoing edge of a node. `next` may be dangling; that is only
/// detected when the player tries to follow it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Choice {
    #[serde(rename = "text")]
    pub label: String,
    pub next: String,
}

/// Resolve the entry point of a graph: `start` if present, otherwise the
/// lexicographically smallest node id. `None` for an empty graph.
pub fn entry_node(nodes: &NodeGraph) -> Option<&str> {
    if nodes.contains_key(START_NODE) {
        Some(START_NODE)
    } else {
        nodes.keys().next().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_node_prefers_start() {
        let record = StoryRecord::new("s", "S")
            .with_node("alpha", Node::new("a"))
            .with_node("start", Node::new("b"));

        assert_eq!(record.entry_node(), Some("start"));
    }

    #[test]
    fn test_entry_node_falls_back_to_smallest_id() {
        let record = StoryRecord::new("s", "S")
            .with_node("zeta", Node::new("z"))
            .with_node("beta", Node::new("b"));

        assert_eq!(record.entry_node(), Some("beta"));
    }

    #[test]
    fn test_entry_node_empty_graph() {
        let record = StoryRecord::new("s", "S");
        assert_eq!(record.entry_node(), None);
    }

    #[test]
    fn test_deserialize_registration_shape() {
        let raw = r#"{
            "id": "custom",
            "title": "A Custom Tale",
            "synopsis": "Short.",
            "data": {
                "start": {
                    "text": "A [cat|small feline] sat.",
                    "choices": [{ "text": "Go", "next": "b" }]
                }
            }
        }"#;

        let record: StoryRecord = serde_json::from_str(raw).unwrap();
        assert_eq!(record.id, "custom");
        assert_eq!(record.nodes["start"].choices[0].label, "Go");
        assert_eq!(record.nodes["start"].choices[0].next, "b");
    }

    #[test]
    fn test_deserialize_defaults_optional_fields() {
        let raw = r#"{ "id": "bare", "data": { "only": { "text": "hi" } } }"#;

        let record: StoryRecord = serde_json::from_str(raw).unwrap();
        assert_eq!(record.title, "");
        assert_eq!(record.synopsis, "");
        assert_eq!(record.thumbnail, None);
        assert!(record.nodes["only"].choices.is_empty());
    }

    #[test]
    fn test_serialize_uses_wire_names() {
        let record = StoryRecord::new("s", "S")
            .with_node("start", Node::new("t").with_choice("Go", "b"));

        let value = serde_json::to_value(&record).unwrap();
        assert!(value.get("data").is_some());
        assert_eq!(value["data"]["start"]["choices"][0]["text"], "Go");
        assert!(value.get("thumbnail").is_none());
    }
}
