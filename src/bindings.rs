//! JavaScript entry points.
//!
//! Payloads cross the boundary as JSON text, in the same shape the front end
//! keeps them in (`{metadata, graph: {nodes, links}}`).

use log::warn;
use wasm_bindgen::prelude::*;

use crate::codec::{self, GraphMetadata, LiveGraph, fragment};

/// Encode a `SharedGraphPayload` given as JSON into a fragment token.
#[wasm_bindgen(js_name = encodeGraph)]
pub fn encode_graph(payload_json: &str) -> Result<String, JsError> {
	let payload = serde_json::from_str(payload_json)?;
	Ok(codec::encode(&payload)?)
}

/// Decode a fragment token into `SharedGraphPayload` JSON.
#[wasm_bindgen(js_name = decodeGraph)]
pub fn decode_graph(token: &str) -> Result<String, JsError> {
	let payload = codec::decode(token)?;
	Ok(serde_json::to_string(&payload)?)
}

/// Canonicalize a renderer-held graph given as JSON.
#[wasm_bindgen(js_name = stripSimulationState)]
pub fn strip_simulation_state(graph_json: &str) -> Result<String, JsError> {
	let graph: LiveGraph = serde_json::from_str(graph_json)?;
	Ok(serde_json::to_string(&codec::strip_simulation_state(&graph))?)
}

/// Build a share link for the current page from a live graph.
///
/// Without metadata the graph is shared as "Shared graph", stamped now.
#[wasm_bindgen(js_name = shareCurrentGraph)]
pub fn share_current_graph(
	metadata_json: Option<String>,
	graph_json: &str,
) -> Result<String, JsError> {
	let metadata = match metadata_json {
		Some(json) => serde_json::from_str(&json)?,
		None => GraphMetadata::untitled(String::from(js_sys::Date::new_0().to_iso_string())),
	};
	let graph: LiveGraph = serde_json::from_str(graph_json)?;
	Ok(fragment::share_graph(metadata, &graph, &current_url()?)?)
}

/// Decode the graph shared through `window.location.hash`, if any.
#[wasm_bindgen(js_name = loadSharedGraph)]
pub fn load_shared_graph() -> Option<String> {
	let hash = web_sys::window()?.location().hash().ok()?;
	let payload = fragment::decode_fragment(&hash)?;
	match serde_json::to_string(&payload) {
		Ok(json) => Some(json),
		Err(e) => {
			warn!("graph-share: failed to serialize shared graph: {}", e);
			None
		}
	}
}

fn current_url() -> Result<String, JsError> {
	let location = web_sys::window()
		.ok_or_else(|| JsError::new("no window"))?
		.location();
	let part = |r: Result<String, JsValue>| r.map_err(|_| JsError::new("location unavailable"));
	Ok(format!(
		"{}{}{}",
		part(location.origin())?,
		part(location.pathname())?,
		part(location.search())?
	))
}
