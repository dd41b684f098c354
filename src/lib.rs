//! graph-share: share force-directed graphs through URL fragments.
//!
//! This crate packs a graph definition (nodes, links and metadata) into a short,
//! URL-safe token and restores it losslessly. It builds as a WASM module for the
//! browser front end and as a plain library for native use and tests.

use log::{Level, info};
use wasm_bindgen::prelude::*;

pub mod bindings;
pub mod codec;

pub use codec::{
	GraphData, GraphLink, GraphMetadata, GraphNode, Group, ShareError, SharedGraphPayload, decode,
	encode, strip_simulation_state,
};

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("graph-share: logging initialized");
}

/// Module start hook, run once when the WASM module is instantiated.
#[wasm_bindgen(start)]
pub fn start() {
	init_logging();
}
