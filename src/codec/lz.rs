//! LZ dictionary compression rendered in a URL-fragment-safe alphabet.
//!
//! Tokens use the "encoded URI component" stream of the `lz-string` family,
//! via the `lz-str` crate, so they are interchangeable with links made by JS
//! front ends. This module adds the checks `lz-str` leaves to the caller:
//! characters outside the alphabet are rejected up front, spaces left behind by
//! form decoding are read as `+`, and oversized tokens are refused before the
//! dictionary is rebuilt.
//!
//! # Example
//!
//! ```
//! use graph_share::codec::lz;
//!
//! let token = lz::compress_to_uri_component("hello hello hello");
//! assert_eq!(lz::decompress_from_uri_component(&token).unwrap(), "hello hello hello");
//! ```

use super::error::DecompressError;

/// Token alphabet. Every character is legal unescaped in a URL fragment.
///
/// Only the first 64 characters carry data; `$` (index 64) is the base64
/// padding slot and never appears in URI mode output.
pub const ALPHABET: &[u8; 65] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+-$";

/// Longest token accepted for decompression, in characters.
///
/// Crafted streams can make the decoded text grow with the square of the token
/// length; far larger than any browser keeps in a fragment.
pub const MAX_TOKEN_LEN: usize = 32 * 1024;

/// Compress `input` into a token made only of [`ALPHABET`] characters.
pub fn compress_to_uri_component(input: &str) -> String {
	lz_str::compress_to_encoded_uri_component(input)
}

/// Reject foreign characters and map form-decoded spaces back to `+`.
fn normalize(input: &str) -> Result<String, DecompressError> {
	input
		.chars()
		.enumerate()
		.map(|(index, ch)| match ch {
			' ' => Ok('+'),
			_ if ch.is_ascii() && ALPHABET.contains(&(ch as u8)) => Ok(ch),
			_ => Err(DecompressError::InvalidCharacter { ch, index }),
		})
		.collect()
}

/// Reverse [`compress_to_uri_component`].
///
/// A stream whose first code is the terminator decodes to an empty string.
pub fn decompress_from_uri_component(input: &str) -> Result<String, DecompressError> {
	if input.is_empty() {
		return Err(DecompressError::Empty);
	}
	let len = input.chars().count();
	if len > MAX_TOKEN_LEN {
		return Err(DecompressError::TooLong {
			len,
			max: MAX_TOKEN_LEN,
		});
	}

	let token = normalize(input)?;
	let units =
		lz_str::decompress_from_encoded_uri_component(token.as_str()).ok_or(DecompressError::Corrupt)?;
	String::from_utf16(&units).map_err(|_| DecompressError::InvalidUtf16)
}
