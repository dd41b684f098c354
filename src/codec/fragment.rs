//! Share links: placing tokens in URLs and reading them back out.

use log::{info, warn};

use super::canonical::{LiveGraph, strip_simulation_state};
use super::error::Result;
use super::transport::{decode, encode};
use super::types::{GraphMetadata, SharedGraphPayload};

/// Text after the first `#`, or the whole input when it has no `#`.
/// `None` when that text is empty.
pub fn fragment_of(url_or_hash: &str) -> Option<&str> {
	let fragment = match url_or_hash.split_once('#') {
		Some((_, fragment)) => fragment,
		None => url_or_hash,
	};
	(!fragment.is_empty()).then_some(fragment)
}

/// `base_url` with its fragment replaced by the encoded payload.
pub fn share_url(base_url: &str, payload: &SharedGraphPayload) -> Result<String> {
	let base = match base_url.split_once('#') {
		Some((base, _)) => base,
		None => base_url,
	};
	Ok(format!("{}#{}", base, encode(payload)?))
}

/// Canonicalize a live graph and build its share link.
pub fn share_graph(
	metadata: GraphMetadata,
	graph: &LiveGraph,
	base_url: &str,
) -> Result<String> {
	let payload = SharedGraphPayload::new(metadata, strip_simulation_state(graph));
	share_url(base_url, &payload)
}

/// Decode the shared graph carried by a URL or `location.hash` value.
///
/// Any failure is logged and reported as "no shared graph".
pub fn decode_fragment(url_or_hash: &str) -> Option<SharedGraphPayload> {
	let token = fragment_of(url_or_hash)?;
	match decode(token) {
		Ok(payload) => {
			info!(
				"graph-share: loaded shared graph {:?} with {} nodes, {} links",
				payload.metadata.name,
				payload.graph.nodes.len(),
				payload.graph.links.len()
			);
			Some(payload)
		}
		Err(e) => {
			warn!("graph-share: ignoring shared graph ({} stage): {}", e.stage(), e);
			None
		}
	}
}

#[cfg(test)]
mod tests {
	use serde_json::json;

	use super::*;
	use crate::codec::types::{GraphData, GraphLink, GraphNode};

	fn payload() -> SharedGraphPayload {
		SharedGraphPayload::new(
			GraphMetadata::new("Deps", "", "2026-02-12T19:30:00Z"),
			GraphData {
				nodes: vec![GraphNode::new("a", "A", "core"), GraphNode::new("b", "B", "core")],
				links: vec![GraphLink::new("a", "b")],
			},
		)
	}

	#[test]
	fn fragment_extraction() {
		assert_eq!(fragment_of("https://host/app?x=1#abc"), Some("abc"));
		assert_eq!(fragment_of("#abc"), Some("abc"));
		assert_eq!(fragment_of("abc"), Some("abc"));
		assert_eq!(fragment_of("https://host/app#"), None);
		assert_eq!(fragment_of(""), None);
	}

	#[test]
	fn share_url_replaces_existing_fragment() {
		let url = share_url("https://host/app?x=1#stale", &payload()).unwrap();
		let token = encode(&payload()).unwrap();
		assert_eq!(url, format!("https://host/app?x=1#{token}"));
		assert_eq!(decode_fragment(&url), Some(payload()));
	}

	#[test]
	fn share_graph_strips_live_state() {
		let live: LiveGraph = serde_json::from_value(json!({
			"nodes": [
				{"id": "a", "name": "A", "group": "core", "x": 3.5, "vx": 0.0},
				{"id": "b", "name": "B", "group": "core", "__threeObj": {}}
			],
			"links": [
				{"source": {"id": "a"}, "target": {"id": "b"}, "label": ""},
				{"source": "a", "target": "gone"}
			]
		}))
		.unwrap();
		let url = share_graph(payload().metadata, &live, "https://host/app").unwrap();
		assert_eq!(decode_fragment(&url), Some(payload()));
	}

	#[test]
	fn bad_fragments_mean_no_graph() {
		assert_eq!(decode_fragment("https://host/app"), None);
		assert_eq!(decode_fragment("https://host/app#"), None);
		assert_eq!(decode_fragment("#not-valid-base64!!!"), None);
		assert_eq!(decode_fragment("#N4I"), None);
	}
}
