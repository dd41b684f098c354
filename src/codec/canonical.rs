//! Projection of a live, renderer-held graph down to its canonical schema.
//!
//! Renderers decorate nodes with simulation coordinates and their own object
//! handles, and replace link endpoints with references to node objects. None
//! of that belongs in a shared link. [`strip_simulation_state`] keeps only the
//! allow-listed fields and drops links whose endpoints no longer resolve.

use std::collections::HashSet;

use log::debug;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::types::{GraphData, GraphLink, GraphNode, Group};

/// A node as held by a renderer: canonical fields plus simulation state.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LiveNode {
	/// Node id.
	pub id: String,
	/// Display name.
	pub name: String,
	/// Optional description.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub description: Option<String>,
	/// Cluster key.
	pub group: Group,
	/// Simulated position, x axis.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub x: Option<f64>,
	/// Simulated position, y axis.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub y: Option<f64>,
	/// Simulated position, z axis.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub z: Option<f64>,
	/// Simulated velocity, x axis.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub vx: Option<f64>,
	/// Simulated velocity, y axis.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub vy: Option<f64>,
	/// Simulated velocity, z axis.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub vz: Option<f64>,
	/// Everything else the renderer attached (object handles, indices, ...).
	#[serde(flatten)]
	pub runtime: Map<String, Value>,
}

impl LiveNode {
	/// Keep exactly the canonical fields.
	pub fn to_canonical(&self) -> GraphNode {
		GraphNode {
			id: self.id.clone(),
			name: self.name.clone(),
			description: self.description.clone(),
			group: self.group.clone(),
			extra: Map::new(),
		}
	}
}

impl From<GraphNode> for LiveNode {
	fn from(node: GraphNode) -> Self {
		Self {
			id: node.id,
			name: node.name,
			description: node.description,
			group: node.group,
			x: None,
			y: None,
			z: None,
			vx: None,
			vy: None,
			vz: None,
			runtime: node.extra,
		}
	}
}

/// A node object standing in for an id, as renderers store resolved links.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NodeRef {
	/// Id of the referenced node.
	pub id: String,
	/// Whatever else the node object carries.
	#[serde(flatten)]
	pub rest: Map<String, Value>,
}

/// One end of a live link: either a bare id or the node object itself.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LinkEndpoint {
	/// Bare node id.
	Id(String),
	/// Resolved node object.
	Node(NodeRef),
}

impl LinkEndpoint {
	/// The node id this endpoint refers to.
	pub fn id(&self) -> &str {
		match self {
			LinkEndpoint::Id(id) => id,
			LinkEndpoint::Node(node) => &node.id,
		}
	}
}

impl From<String> for LinkEndpoint {
	fn from(id: String) -> Self {
		LinkEndpoint::Id(id)
	}
}

/// A link as held by a renderer.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LiveLink {
	/// Where the link starts.
	pub source: LinkEndpoint,
	/// Where the link ends.
	pub target: LinkEndpoint,
	/// Optional label; empty counts as absent.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub label: Option<String>,
	/// Renderer-attached fields (curvature, particles, ...).
	#[serde(flatten)]
	pub runtime: Map<String, Value>,
}

impl From<GraphLink> for LiveLink {
	fn from(link: GraphLink) -> Self {
		Self {
			source: link.source.into(),
			target: link.target.into(),
			label: link.label,
			runtime: link.extra,
		}
	}
}

/// Graph data in the shape the renderers mutate.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct LiveGraph {
	/// Nodes in insertion order.
	pub nodes: Vec<LiveNode>,
	/// Links, possibly stale.
	pub links: Vec<LiveLink>,
}

impl From<GraphData> for LiveGraph {
	fn from(graph: GraphData) -> Self {
		Self {
			nodes: graph.nodes.into_iter().map(LiveNode::from).collect(),
			links: graph.links.into_iter().map(LiveLink::from).collect(),
		}
	}
}

/// Reduce a live graph to canonical [`GraphData`].
///
/// - nodes keep `id`, `name`, `description` and `group`, in input order
/// - link endpoints are resolved to bare ids
/// - empty link labels become absent
/// - links touching an unknown node id are dropped silently
pub fn strip_simulation_state(graph: &LiveGraph) -> GraphData {
	let nodes: Vec<GraphNode> = graph.nodes.iter().map(LiveNode::to_canonical).collect();

	let links: Vec<GraphLink> = {
		let ids: HashSet<&str> = nodes.iter().map(|n| n.id.as_str()).collect();
		graph
			.links
			.iter()
			.filter_map(|link| {
				let (source, target) = (link.source.id(), link.target.id());
				if !ids.contains(source) || !ids.contains(target) {
					return None;
				}
				Some(GraphLink {
					source: source.to_string(),
					target: target.to_string(),
					label: link.label.clone().filter(|label| !label.is_empty()),
					extra: Map::new(),
				})
			})
			.collect()
	};

	let dropped = graph.links.len() - links.len();
	if dropped > 0 {
		debug!("graph-share: dropped {} dangling links", dropped);
	}

	GraphData { nodes, links }
}
