//! Graph share codec.
//!
//! Turns a graph and its metadata into a short token for a URL fragment, and
//! back:
//!
//! - [`strip_simulation_state`] projects renderer-held graphs onto the
//!   canonical node/link schema
//! - [`shorten_keys`] / [`expand_keys`] swap repeated field names for aliases
//! - [`encode`] / [`decode`] serialize, compress and render in a URL-safe alphabet
//!
//! # Example
//!
//! ```
//! use graph_share::codec::{self, GraphData, GraphLink, GraphMetadata, GraphNode, SharedGraphPayload};
//!
//! let payload = SharedGraphPayload::new(
//!     GraphMetadata::new("Test Graph", "A test", "2026-02-12T19:30:00Z"),
//!     GraphData {
//!         nodes: vec![
//!             GraphNode::new("a", "Node A", 1).with_description("Desc A"),
//!             GraphNode::new("b", "Node B", 2),
//!         ],
//!         links: vec![GraphLink::new("a", "b").with_label("connects to")],
//!     },
//! );
//!
//! let token = codec::encode(&payload).unwrap();
//! assert_eq!(codec::decode(&token).unwrap(), payload);
//! ```

mod canonical;
mod compact;
mod error;
pub mod fragment;
pub mod lz;
mod transport;
mod types;

pub use canonical::{LinkEndpoint, LiveGraph, LiveLink, LiveNode, NodeRef, strip_simulation_state};
pub use compact::{ALIASES, CompactPayload, Direction, expand_keys, shorten_keys};
pub use error::{DecompressError, Result, ShareError, Stage};
pub use transport::{decode, decompress_fragment, encode};
pub use types::{GraphData, GraphLink, GraphMetadata, GraphNode, Group, SharedGraphPayload};
