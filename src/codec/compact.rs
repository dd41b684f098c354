//! Field-name compaction for the `graph` half of a payload.
//!
//! The fields that repeat once per node or link (`source`, `target`, `label`,
//! `group`) dominate the serialized size, so they travel under one- or
//! two-letter aliases. Keys outside [`ALIASES`] pass through untouched in both
//! directions, and `metadata` is never rewritten.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::error::{Result, ShareError};
use super::types::SharedGraphPayload;

/// Full field name to alias, exhaustive.
pub const ALIASES: [(&str, &str); 6] = [
	("nodes", "n"),
	("links", "l"),
	("source", "s"),
	("target", "t"),
	("label", "lb"),
	("group", "g"),
];

/// Direction of a key substitution.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
	/// Full name to alias.
	Shorten,
	/// Alias to full name.
	Expand,
}

impl Direction {
	/// Rename a single key, or hand it back when the table has no entry.
	pub fn rename(self, key: String) -> String {
		let found = ALIASES.iter().find_map(|&(full, short)| match self {
			Direction::Shorten if key == full => Some(short),
			Direction::Expand if key == short => Some(full),
			_ => None,
		});
		match found {
			Some(renamed) => renamed.to_string(),
			None => key,
		}
	}

	fn rename_object(self, object: Map<String, Value>) -> Map<String, Value> {
		object
			.into_iter()
			.map(|(key, value)| (self.rename(key), value))
			.collect()
	}

	/// Rename the keys of an object value. Anything else passes through.
	fn rename_value(self, value: Value) -> Value {
		match value {
			Value::Object(object) => Value::Object(self.rename_object(object)),
			other => other,
		}
	}
}

fn alias(full: &str) -> String {
	Direction::Shorten.rename(full.to_string())
}

/// A payload whose `graph` keys have been shortened.
///
/// Shape: `{metadata: {...}, graph: {n: [...], l: [...]}}`. The wrapped value
/// is untyped because a compact payload may also come from an untrusted
/// fragment; [`expand_keys`] checks it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CompactPayload(Value);

impl CompactPayload {
	/// The wrapped JSON value.
	pub fn as_value(&self) -> &Value {
		&self.0
	}

	/// Unwrap into the JSON value.
	pub fn into_value(self) -> Value {
		self.0
	}

	/// Shortened node objects, if the payload has them.
	pub fn nodes(&self) -> Option<&Vec<Value>> {
		self.0.get("graph")?.get(alias("nodes"))?.as_array()
	}

	/// Shortened link objects, if the payload has them.
	pub fn links(&self) -> Option<&Vec<Value>> {
		self.0.get("graph")?.get(alias("links"))?.as_array()
	}
}

impl From<Value> for CompactPayload {
	fn from(value: Value) -> Self {
		Self(value)
	}
}

/// Shorten the keys of `payload.graph`, its nodes and its links.
pub fn shorten_keys(payload: &SharedGraphPayload) -> Result<CompactPayload> {
	let to_value = |v: Result<Value, serde_json::Error>| v.map_err(ShareError::Serialize);

	let metadata = to_value(serde_json::to_value(&payload.metadata))?;
	let nodes = payload
		.graph
		.nodes
		.iter()
		.map(|node| to_value(serde_json::to_value(node)).map(|v| Direction::Shorten.rename_value(v)))
		.collect::<Result<Vec<_>>>()?;
	let links = payload
		.graph
		.links
		.iter()
		.map(|link| to_value(serde_json::to_value(link)).map(|v| Direction::Shorten.rename_value(v)))
		.collect::<Result<Vec<_>>>()?;

	let mut graph = Map::new();
	graph.insert(alias("nodes"), Value::Array(nodes));
	graph.insert(alias("links"), Value::Array(links));

	let mut root = Map::new();
	root.insert("metadata".to_string(), metadata);
	root.insert("graph".to_string(), Value::Object(graph));
	Ok(CompactPayload(Value::Object(root)))
}

/// Restore full key names and check the result against the canonical schema.
///
/// Fails with [`ShareError::Shape`] when `metadata` or `graph` is missing or
/// not an object, and with [`ShareError::Validation`] when the expanded
/// payload does not fit the schema.
pub fn expand_keys(compact: &CompactPayload) -> Result<SharedGraphPayload> {
	let root = compact
		.as_value()
		.as_object()
		.ok_or(ShareError::Shape("decoded value is not an object"))?;
	let (Some(Value::Object(metadata)), Some(Value::Object(graph))) =
		(root.get("metadata"), root.get("graph"))
	else {
		return Err(ShareError::Shape("missing metadata or graph"));
	};

	let mut graph = Direction::Expand.rename_object(graph.clone());
	let mut expanded = Map::new();
	for field in ["nodes", "links"] {
		let items = match graph.remove(field) {
			Some(Value::Array(items)) => items
				.into_iter()
				.map(|item| Direction::Expand.rename_value(item))
				.collect(),
			Some(_) => {
				return Err(ShareError::Validation(format!("graph.{field} must be an array")));
			}
			None => {
				return Err(ShareError::Validation(format!("graph must have a {field} array")));
			}
		};
		expanded.insert(field.to_string(), Value::Array(items));
	}

	validate(metadata, expanded)
}

fn validate(metadata: &Map<String, Value>, graph: Map<String, Value>) -> Result<SharedGraphPayload> {
	for field in ["name", "description", "timestamp"] {
		if !matches!(metadata.get(field), Some(Value::String(_))) {
			return Err(ShareError::Validation(format!(
				"metadata.{field} must be a string"
			)));
		}
	}

	let mut root = Map::new();
	root.insert("metadata".to_string(), Value::Object(metadata.clone()));
	root.insert("graph".to_string(), Value::Object(graph));
	serde_json::from_value(Value::Object(root)).map_err(|e| ShareError::Validation(e.to_string()))
}
