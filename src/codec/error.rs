//! Failure taxonomy for decoding shared graph fragments.

use std::fmt;

use thiserror::Error;

/// Errors raised while reversing the compressed, character-encoded stream.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum DecompressError {
	/// The token, or the text it decodes to, is empty.
	#[error("compressed stream decodes to no text")]
	Empty,
	/// A character the fragment alphabet does not contain.
	#[error("character {ch:?} at position {index} is outside the fragment alphabet")]
	InvalidCharacter {
		/// The offending character.
		ch: char,
		/// Its position in the token, in characters.
		index: usize,
	},
	/// The token is longer than any share link the codec accepts.
	#[error("token of {len} characters exceeds the {max} character limit")]
	TooLong {
		/// Token length in characters.
		len: usize,
		/// The accepted maximum.
		max: usize,
	},
	/// The stream is cut short or references codes it never defined.
	#[error("compressed stream is truncated or corrupted")]
	Corrupt,
	/// The decoded code units do not form valid UTF-16.
	#[error("decompressed text is not valid UTF-16")]
	InvalidUtf16,
}

/// Pipeline stage at which a share token was rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Stage {
	/// The token itself was missing.
	Input,
	/// Character decoding or decompression.
	Decompress,
	/// JSON parsing of the decompressed text.
	Parse,
	/// Top-level `metadata`/`graph` structure.
	Shape,
	/// Field types of the expanded payload.
	Validate,
	/// Serializing a payload for encoding.
	Serialize,
}

impl fmt::Display for Stage {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(match self {
			Stage::Input => "input",
			Stage::Decompress => "decompress",
			Stage::Parse => "parse",
			Stage::Shape => "shape",
			Stage::Validate => "validate",
			Stage::Serialize => "serialize",
		})
	}
}

/// Any failure of [`encode`](super::encode) or [`decode`](super::decode).
///
/// Decoding never yields a partial payload: the first failing stage wins.
#[derive(Debug, Error)]
pub enum ShareError {
	/// `decode` was handed an empty token.
	#[error("empty or invalid hash")]
	EmptyInput,
	/// The token could not be reversed to text.
	#[error("failed to decompress hash: {0}")]
	Decompression(#[from] DecompressError),
	/// The decompressed text is not JSON.
	#[error("invalid JSON in hash: {0}")]
	Parse(#[source] serde_json::Error),
	/// `metadata` or `graph` is missing or not an object.
	#[error("invalid payload: {0}")]
	Shape(&'static str),
	/// The expanded payload does not fit the schema.
	#[error("invalid payload: {0}")]
	Validation(String),
	/// The payload could not be serialized.
	#[error("failed to serialize payload: {0}")]
	Serialize(#[source] serde_json::Error),
}

impl ShareError {
	/// The stage that produced this error.
	pub fn stage(&self) -> Stage {
		match self {
			ShareError::EmptyInput => Stage::Input,
			ShareError::Decompression(_) => Stage::Decompress,
			ShareError::Parse(_) => Stage::Parse,
			ShareError::Shape(_) => Stage::Shape,
			ShareError::Validation(_) => Stage::Validate,
			ShareError::Serialize(_) => Stage::Serialize,
		}
	}
}

/// Result alias used throughout the codec.
pub type Result<T, E = ShareError> = std::result::Result<T, E>;
