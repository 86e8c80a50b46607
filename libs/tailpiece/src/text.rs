//! String payloads.
//!
//! The trailer itself only stores bytes; these helpers convert text to and from a payload with an
//! explicit [`TextEncoding`]. No encoding is ever guessed.

use core::fmt;

use serde::{Deserialize, Serialize};

#[cfg(feature = "alloc")]
use alloc::{string::String, vec::Vec};

#[cfg(feature = "alloc")]
use crate::{codec, error::Error};

/// Encoding used for text payloads.
#[derive(Serialize, Deserialize, Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum TextEncoding {
    #[default]
    Utf8,
    Utf16le,
    Utf16be,
}

impl fmt::Display for TextEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            TextEncoding::Utf8 => "UTF-8",
            TextEncoding::Utf16le => "UTF-16LE",
            TextEncoding::Utf16be => "UTF-16BE",
        })
    }
}

#[cfg(feature = "alloc")]
impl TextEncoding {
    pub fn encode(&self, text: &str) -> Vec<u8> {
        match self {
            TextEncoding::Utf8 => text.as_bytes().to_vec(),
            TextEncoding::Utf16le => text.encode_utf16().flat_map(u16::to_le_bytes).collect(),
            TextEncoding::Utf16be => text.encode_utf16().flat_map(u16::to_be_bytes).collect(),
        }
    }

    pub fn decode(&self, bytes: &[u8]) -> Result<String, Error> {
        let from_bytes: fn([u8; 2]) -> u16 = match self {
            TextEncoding::Utf8 => {
                return core::str::from_utf8(bytes)
                    .map(String::from)
                    .map_err(|_| Error::Decode(*self));
            }
            TextEncoding::Utf16le => u16::from_le_bytes,
            TextEncoding::Utf16be => u16::from_be_bytes,
        };
        if bytes.len() % 2 != 0 {
            return Err(Error::Decode(*self));
        }
        let units = bytes.chunks_exact(2).map(|c| from_bytes([c[0], c[1]]));
        char::decode_utf16(units)
            .collect::<Result<String, _>>()
            .map_err(|_| Error::Decode(*self))
    }
}

/// [`codec::append`] for a string payload.
#[cfg(feature = "alloc")]
pub fn append_str(buf: &[u8], text: &str, encoding: TextEncoding) -> Result<Vec<u8>, Error> {
    codec::append(buf, &encoding.encode(text))
}

/// [`codec::append_all`] for a string payload.
#[cfg(feature = "alloc")]
pub fn append_all_str(buf: &[u8], text: &str, encoding: TextEncoding) -> Result<Vec<u8>, Error> {
    codec::append_all(buf, &encoding.encode(text))
}

/// Reads the trailer payload and decodes it as `encoding`.
#[cfg(feature = "alloc")]
pub fn read_str(buf: &[u8], encoding: TextEncoding) -> Result<String, Error> {
    encoding.decode(codec::read(buf)?)
}
