//! The fixed 8 byte footer that terminates every trailer.
//!
//! ```text
//! | payload ... | 'D' 'p' 'R' ';' | offset: i32 LE |
//!               ^-- len - 8        ^-- len - 4
//! ```
//!
//! `offset` is the absolute index, from the start of the buffer, where the payload begins.
//! Nothing else is stored: no length, no checksum, no version. A buffer whose natural content
//! happens to end in the signature and a plausible offset is indistinguishable from one
//! carrying a trailer.

use zerocopy::byteorder::little_endian::I32;
use zerocopy::{FromBytes, Immutable, IntoBytes, KnownLayout, Unaligned};

use crate::error::Error;

/// ASCII `DpR;`
pub const SIGNATURE: [u8; 4] = [0x44, 0x70, 0x52, 0x3B];

pub const FOOTER_LEN: usize = core::mem::size_of::<Footer>();

const _: () = assert!(FOOTER_LEN == 8);

#[repr(C)]
#[derive(
    FromBytes, IntoBytes, KnownLayout, Immutable, Unaligned, Clone, Copy, Debug, PartialEq, Eq,
)]
pub struct Footer {
    pub signature: [u8; 4],
    /// Absolute index of the first payload byte
    pub offset: I32,
}

impl Footer {
    pub fn new(offset: i32) -> Self {
        Footer {
            signature: SIGNATURE,
            offset: I32::new(offset),
        }
    }

    /// Builds the footer for a payload that starts at `start`.
    pub fn at(start: usize) -> Result<Self, Error> {
        let offset = i32::try_from(start).map_err(|_| Error::OffsetOverflow)?;
        Ok(Footer::new(offset))
    }

    /// Views the last [`FOOTER_LEN`] bytes of `buf` as a footer, without checking the signature
    /// or the offset.
    pub fn from_tail(buf: &[u8]) -> Option<&Footer> {
        Footer::ref_from_suffix(buf).ok().map(|(_, footer)| footer)
    }

    pub fn has_signature(&self) -> bool {
        self.signature == SIGNATURE
    }

    pub fn offset(&self) -> i32 {
        self.offset.get()
    }

    /// Returns the payload start if this footer is well formed for a buffer of `buf_len` bytes.
    pub fn payload_start(&self, buf_len: usize) -> Option<usize> {
        if !self.has_signature() {
            return None;
        }
        let start = usize::try_from(self.offset()).ok()?;
        (start > 0 && start < buf_len).then_some(start)
    }
}
