//! Canonical graph data structures carried through the share codec.
//!
//! Keys a newer or older writer put next to the known fields land in each
//! type's `extra` map and are written back out unchanged.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};

/// Descriptive metadata attached to a shared graph.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GraphMetadata {
	/// Display name of the graph.
	pub name: String,
	/// Free-form description, may be empty.
	pub description: String,
	/// ISO-8601 timestamp of when the graph was authored or shared.
	pub timestamp: String,
	/// Keys outside the schema, passed through opaquely.
	#[serde(flatten)]
	pub extra: Map<String, Value>,
}

impl GraphMetadata {
	/// Name given to graphs shared without metadata of their own.
	pub const UNTITLED: &'static str = "Shared graph";

	/// Metadata with no extra keys.
	pub fn new(
		name: impl Into<String>,
		description: impl Into<String>,
		timestamp: impl Into<String>,
	) -> Self {
		Self {
			name: name.into(),
			description: description.into(),
			timestamp: timestamp.into(),
			extra: Map::new(),
		}
	}

	/// Metadata for a graph that is shared before it was ever named.
	pub fn untitled(timestamp: impl Into<String>) -> Self {
		Self::new(Self::UNTITLED, "", timestamp)
	}
}

/// Classification key of a node. Either numeric or an arbitrary label.
///
/// Numbers keep their JSON representation so `1` never comes back as `1.0`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Group {
	/// Numeric group, e.g. `1`.
	Number(Number),
	/// Named group, e.g. `"modules.home"`.
	Label(String),
}

impl From<i32> for Group {
	fn from(value: i32) -> Self {
		Group::Number(value.into())
	}
}

impl From<i64> for Group {
	fn from(value: i64) -> Self {
		Group::Number(value.into())
	}
}

impl From<u64> for Group {
	fn from(value: u64) -> Self {
		Group::Number(value.into())
	}
}

impl From<&str> for Group {
	fn from(value: &str) -> Self {
		Group::Label(value.to_string())
	}
}

impl From<String> for Group {
	fn from(value: String) -> Self {
		Group::Label(value)
	}
}

impl fmt::Display for Group {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Group::Number(n) => write!(f, "{n}"),
			Group::Label(s) => f.write_str(s),
		}
	}
}

/// A node in its canonical form.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GraphNode {
	/// Unique identifier, referenced by links.
	pub id: String,
	/// Display name.
	pub name: String,
	/// Optional description. An empty string is kept as supplied.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub description: Option<String>,
	/// Cluster the node belongs to.
	pub group: Group,
	/// Keys outside the schema, passed through opaquely.
	#[serde(flatten)]
	pub extra: Map<String, Value>,
}

impl GraphNode {
	/// A node without description or extra keys.
	pub fn new(id: impl Into<String>, name: impl Into<String>, group: impl Into<Group>) -> Self {
		Self {
			id: id.into(),
			name: name.into(),
			description: None,
			group: group.into(),
			extra: Map::new(),
		}
	}

	/// Set the description.
	pub fn with_description(mut self, description: impl Into<String>) -> Self {
		self.description = Some(description.into());
		self
	}
}

/// A directed edge between two nodes, referenced by id.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GraphLink {
	/// Source node ID.
	pub source: String,
	/// Target node ID.
	pub target: String,
	/// Optional edge label. Never `Some("")` after canonicalization.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub label: Option<String>,
	/// Keys outside the schema, passed through opaquely.
	#[serde(flatten)]
	pub extra: Map<String, Value>,
}

impl GraphLink {
	/// An unlabeled link without extra keys.
	pub fn new(source: impl Into<String>, target: impl Into<String>) -> Self {
		Self {
			source: source.into(),
			target: target.into(),
			label: None,
			extra: Map::new(),
		}
	}

	/// Set the label.
	pub fn with_label(mut self, label: impl Into<String>) -> Self {
		self.label = Some(label.into());
		self
	}
}

/// Complete graph data: nodes in insertion order and the links between them.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct GraphData {
	/// Nodes, ids unique.
	pub nodes: Vec<GraphNode>,
	/// Links between nodes of this graph.
	pub links: Vec<GraphLink>,
}

/// The unit encoded into and decoded from a URL fragment.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SharedGraphPayload {
	/// Name, description and timestamp.
	pub metadata: GraphMetadata,
	/// The graph itself.
	pub graph: GraphData,
}

impl SharedGraphPayload {
	/// Pair metadata with a graph.
	pub fn new(metadata: GraphMetadata, graph: GraphData) -> Self {
		Self { metadata, graph }
	}
}

#[cfg(test)]
mod tests {
	use serde_json::json;

	use super::*;

	#[test]
	fn group_keeps_numeric_and_label_forms() {
		let groups: Vec<Group> = serde_json::from_value(json!([1, 2.5, "core"])).unwrap();
		assert_eq!(groups[0], Group::from(1));
		assert_eq!(groups[2], Group::from("core"));
		assert_eq!(serde_json::to_value(&groups).unwrap(), json!([1, 2.5, "core"]));
		assert_eq!(groups[1].to_string(), "2.5");
	}

	#[test]
	fn absent_optionals_are_not_emitted() {
		let node = GraphNode::new("b", "Node B", 2);
		assert_eq!(
			serde_json::to_value(&node).unwrap(),
			json!({"id": "b", "name": "Node B", "group": 2})
		);

		let link = GraphLink::new("a", "b");
		assert_eq!(
			serde_json::to_value(&link).unwrap(),
			json!({"source": "a", "target": "b"})
		);
	}

	#[test]
	fn empty_description_is_kept_literally() {
		let node = GraphNode::new("a", "A", "x").with_description("");
		let value = serde_json::to_value(&node).unwrap();
		assert_eq!(value["description"], json!(""));
		let back: GraphNode = serde_json::from_value(value).unwrap();
		assert_eq!(back, node);
	}

	#[test]
	fn unknown_keys_ride_along() {
		let value = json!({"id": "a", "name": "A", "group": 1, "color": "#fff", "weight": [1, 2]});
		let node: GraphNode = serde_json::from_value(value.clone()).unwrap();
		assert_eq!(node.extra.get("color"), Some(&json!("#fff")));
		assert_eq!(serde_json::to_value(&node).unwrap(), value);

		let meta: GraphMetadata =
			serde_json::from_value(json!({"name": "G", "description": "", "timestamp": "t", "author": "x"}))
				.unwrap();
		assert_eq!(meta.extra.get("author"), Some(&json!("x")));
	}

	#[test]
	fn untitled_metadata() {
		let meta = GraphMetadata::untitled("2026-02-12T19:30:00Z");
		assert_eq!(meta.name, "Shared graph");
		assert!(meta.description.is_empty());
	}
}
