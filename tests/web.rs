//! Browser tests for the JavaScript entry points.
#![cfg(target_arch = "wasm32")]

use graph_share::bindings::{decode_graph, encode_graph, strip_simulation_state};
use serde_json::{Value, json};
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn encode_then_decode_json() {
	let payload = json!({
		"metadata": {"name": "Test Graph", "description": "A test", "timestamp": "2026-02-12T19:30:00Z"},
		"graph": {
			"nodes": [
				{"id": "a", "name": "Node A", "description": "Desc A", "group": 1},
				{"id": "b", "name": "Node B", "group": 2}
			],
			"links": [{"source": "a", "target": "b", "label": "connects to"}]
		}
	});
	let token = encode_graph(&payload.to_string()).unwrap();
	let decoded: Value = serde_json::from_str(&decode_graph(&token).unwrap()).unwrap();
	assert_eq!(decoded, payload);
}

#[wasm_bindgen_test]
fn strip_over_json() {
	let live = json!({
		"nodes": [{"id": "a", "name": "A", "group": 1, "x": 1, "__threeObj": {}}],
		"links": [{"source": {"id": "a"}, "target": "a", "label": ""}, {"source": "a", "target": "b"}]
	});
	let out: Value = serde_json::from_str(&strip_simulation_state(&live.to_string()).unwrap()).unwrap();
	assert_eq!(
		out,
		json!({"nodes": [{"id": "a", "name": "A", "group": 1}], "links": [{"source": "a", "target": "a"}]})
	);
}

#[wasm_bindgen_test]
fn bad_tokens_raise() {
	assert!(decode_graph("").is_err());
	assert!(decode_graph("not-valid-base64!!!").is_err());
}
