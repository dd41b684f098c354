//! Payload to fragment token and back.
//!
//! `encode`: shorten keys, serialize to JSON, compress into the fragment alphabet.
//! `decode`: the same steps reversed, failing at the first stage that rejects
//! the input.

use log::debug;
use serde_json::Value;

use super::compact::{CompactPayload, expand_keys, shorten_keys};
use super::error::{DecompressError, Result, ShareError};
use super::lz;
use super::types::SharedGraphPayload;

/// Encode a payload into a token that can follow `#` in a URL as-is.
pub fn encode(payload: &SharedGraphPayload) -> Result<String> {
	let compact = shorten_keys(payload)?;
	let json = serde_json::to_string(&compact).map_err(ShareError::Serialize)?;
	let token = lz::compress_to_uri_component(&json);
	debug!(
		"graph-share: encoded {} nodes, {} links ({} bytes json, {} chars token)",
		payload.graph.nodes.len(),
		payload.graph.links.len(),
		json.len(),
		token.len()
	);
	Ok(token)
}

/// Reverse the character encoding and compression of a token, yielding the
/// compact JSON text.
pub fn decompress_fragment(token: &str) -> Result<String> {
	if token.is_empty() {
		return Err(ShareError::EmptyInput);
	}
	let json = lz::decompress_from_uri_component(token)?;
	if json.is_empty() {
		return Err(DecompressError::Empty.into());
	}
	Ok(json)
}

/// Decode a token produced by [`encode`].
pub fn decode(token: &str) -> Result<SharedGraphPayload> {
	let json = decompress_fragment(token)?;
	let value: Value = serde_json::from_str(&json).map_err(ShareError::Parse)?;
	if !value.is_object() {
		return Err(ShareError::Shape("decoded value is not an object"));
	}
	let payload = expand_keys(&CompactPayload::from(value))?;
	debug!(
		"graph-share: decoded {:?} ({} nodes, {} links)",
		payload.metadata.name,
		payload.graph.nodes.len(),
		payload.graph.links.len()
	);
	Ok(payload)
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::codec::error::Stage;
	use crate::codec::types::{GraphData, GraphLink, GraphMetadata, GraphNode};

	fn sample() -> SharedGraphPayload {
		SharedGraphPayload::new(
			GraphMetadata::new("Test Graph", "A test", "2026-02-12T19:30:00Z"),
			GraphData {
				nodes: vec![
					GraphNode::new("a", "Node A", 1).with_description("Desc A"),
					GraphNode::new("b", "Node B", 2),
				],
				links: vec![GraphLink::new("a", "b").with_label("connects to")],
			},
		)
	}

	#[test]
	fn round_trip() {
		let payload = sample();
		let token = encode(&payload).unwrap();
		assert!(!token.is_empty());
		assert_eq!(decode(&token).unwrap(), payload);
	}

	#[test]
	fn intermediate_text_uses_aliases_only() {
		let json = decompress_fragment(&encode(&sample()).unwrap()).unwrap();
		for key in ["nodes", "links", "source", "target", "label", "group"] {
			assert!(!json.contains(&format!("\"{key}\"")), "{key} leaked into {json}");
		}
		assert!(json.contains("\"lb\":\"connects to\""));
	}

	#[test]
	fn stage_of_each_failure() {
		assert_eq!(decode("").unwrap_err().stage(), Stage::Input);
		assert_eq!(decode("not-valid-base64!!!").unwrap_err().stage(), Stage::Decompress);

		let garbage = lz::compress_to_uri_component("{ invalid }");
		assert_eq!(decode(&garbage).unwrap_err().stage(), Stage::Parse);

		let scalar = lz::compress_to_uri_component("42");
		assert_eq!(decode(&scalar).unwrap_err().stage(), Stage::Shape);

		let shapeless = lz::compress_to_uri_component(r#"{"hello":"world"}"#);
		assert_eq!(decode(&shapeless).unwrap_err().stage(), Stage::Shape);

		let bad_meta = lz::compress_to_uri_component(
			r#"{"metadata":{"name":1,"description":"","timestamp":""},"graph":{"n":[],"l":[]}}"#,
		);
		assert_eq!(decode(&bad_meta).unwrap_err().stage(), Stage::Validate);
	}

	#[test]
	fn terminator_only_stream_is_rejected() {
		let token = lz::compress_to_uri_component("");
		assert_eq!(decode(&token).unwrap_err().stage(), Stage::Decompress);
	}

	#[test]
	fn reencoding_keeps_unknown_keys() {
		let token = lz::compress_to_uri_component(
			r##"{"metadata":{"name":"G","description":"","timestamp":"t","author":"someone"},"graph":{"n":[{"id":"a","name":"A","g":1,"color":"#fff"}],"l":[{"s":"a","t":"a","w":3}]}}"##,
		);
		let payload = decode(&token).unwrap();
		let json: Value = serde_json::from_str(&decompress_fragment(&encode(&payload).unwrap()).unwrap()).unwrap();
		assert_eq!(json["metadata"]["author"], "someone");
		assert_eq!(json["graph"]["n"][0]["color"], "#fff");
		assert_eq!(json["graph"]["l"][0]["w"], 3);
		assert_eq!(decode(&encode(&payload).unwrap()).unwrap(), payload);
	}
}
