//! Detecting, reading and writing the trailer.
//!
//! Every operation takes the buffer by reference and either borrows from it or builds a new
//! buffer; the input is never modified. The `*_into` variants assemble into any [`Buf`], the plain
//! variants allocate a `Vec<u8>`.

use tracing::{debug, trace};
use zerocopy::FromBytes;
use zerocopy::IntoBytes;
use zerocopy::byteorder::little_endian::I32;

#[cfg(feature = "alloc")]
use alloc::vec::Vec;

use crate::{
    buf::Buf,
    error::Error,
    footer::{FOOTER_LEN, Footer},
};

/// A validated view of the trailer at the end of a buffer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Trailer<'a> {
    /// Everything in front of the payload
    pub content: &'a [u8],
    pub payload: &'a [u8],
}

impl Trailer<'_> {
    /// The value stored in the offset field.
    pub fn offset(&self) -> usize {
        self.content.len()
    }
}

/// Payload start, if `buf` ends in a signature followed by an offset in `1..buf.len()`.
fn payload_start(buf: &[u8]) -> Option<usize> {
    if buf.len() <= FOOTER_LEN {
        return None;
    }
    Footer::from_tail(buf)?.payload_start(buf.len())
}

/// Returns true if `buf` looks like it carries a trailer.
///
/// This is a heuristic: content that naturally ends in the signature and a plausible offset is
/// reported as a trailer.
pub fn has_trailer(buf: &[u8]) -> bool {
    payload_start(buf).is_some()
}

/// Returns the raw offset field, the last four bytes of `buf` as a little-endian `i32`.
///
/// The value is not range checked; use [`inspect`] to get a validated offset.
pub fn data_index(buf: &[u8]) -> Result<i32, Error> {
    let tail = buf
        .len()
        .checked_sub(4)
        .and_then(|start| buf.get(start..))
        .ok_or(Error::BufferUnderflow)?;
    I32::read_from_bytes(tail)
        .map(|offset| offset.get())
        .map_err(|_| Error::BufferUnderflow)
}

/// Splits `buf` into content and payload if it carries a readable trailer.
///
/// A footer whose offset points into the footer itself passes [`has_trailer`] but has no
/// payload to read, so it yields `None` here.
pub fn inspect(buf: &[u8]) -> Option<Trailer<'_>> {
    let start = payload_start(buf)?;
    let body = &buf[..buf.len() - FOOTER_LEN];
    let payload = body.get(start..)?;
    Some(Trailer {
        content: &body[..start],
        payload,
    })
}

/// Returns the trailer payload.
pub fn read(buf: &[u8]) -> Result<&[u8], Error> {
    match inspect(buf) {
        Some(trailer) => Ok(trailer.payload),
        None => {
            debug!(len = buf.len(), "read on buffer without a trailer");
            Err(Error::NoTrailer)
        }
    }
}

/// Returns `buf` without its trailer, or all of `buf` if it has none.
pub fn strip(buf: &[u8]) -> &[u8] {
    inspect(buf).map_or(buf, |trailer| trailer.content)
}

/// Writes `head ++ parts.. ++ footer(head.len())` into `out`, replacing its contents.
fn assemble(head: &[u8], parts: &[&[u8]], out: &mut impl Buf) -> Result<(), Error> {
    let footer = Footer::at(head.len())?;
    out.clear();
    out.reserve(head.len() + parts.iter().map(|p| p.len()).sum::<usize>() + FOOTER_LEN);
    let res = [head]
        .into_iter()
        .chain(parts.iter().copied())
        .chain([footer.as_bytes()])
        .try_for_each(|part| out.extend_from_slice(part));
    if res.is_err() {
        out.clear();
    }
    res
}

/// Writes `new_data` on top of the existing trailer into `out`.
///
/// With a trailer present the new payload starts where the old footer began: the old footer is
/// overwritten and the old payload becomes part of the content. Without one, the payload starts
/// at the end of `buf`. Either way the offset field points at `new_data`.
pub fn append_into(buf: &[u8], new_data: &[u8], out: &mut impl Buf) -> Result<(), Error> {
    let start = if has_trailer(buf) {
        let start = buf.len() - FOOTER_LEN;
        trace!(
            start,
            len = new_data.len(),
            "appending over existing footer"
        );
        start
    } else {
        trace!(
            start = buf.len(),
            len = new_data.len(),
            "appending fresh trailer"
        );
        buf.len()
    };
    assemble(&buf[..start], &[new_data], out)
}

/// Writes `new_data` as the only payload into `out`, dropping any existing one.
pub fn append_all_into(buf: &[u8], new_data: &[u8], out: &mut impl Buf) -> Result<(), Error> {
    let start = match payload_start(buf) {
        Some(start) => {
            trace!(start, len = new_data.len(), "replacing existing payload");
            start
        }
        None => {
            trace!(
                start = buf.len(),
                len = new_data.len(),
                "appending fresh trailer"
            );
            buf.len()
        }
    };
    assemble(&buf[..start], &[new_data], out)
}

/// Writes the existing payload followed by `new_data` into `out`, keeping the original offset.
pub fn extend_into(buf: &[u8], new_data: &[u8], out: &mut impl Buf) -> Result<(), Error> {
    match inspect(buf) {
        Some(trailer) => {
            trace!(
                start = trailer.offset(),
                old_len = trailer.payload.len(),
                len = new_data.len(),
                "extending existing payload"
            );
            assemble(trailer.content, &[trailer.payload, new_data], out)
        }
        None => {
            trace!(
                start = buf.len(),
                len = new_data.len(),
                "appending fresh trailer"
            );
            assemble(buf, &[new_data], out)
        }
    }
}

/// See [`append_into`].
#[cfg(feature = "alloc")]
pub fn append(buf: &[u8], new_data: &[u8]) -> Result<Vec<u8>, Error> {
    let mut out = Vec::new();
    append_into(buf, new_data, &mut out)?;
    Ok(out)
}

/// See [`append_all_into`].
#[cfg(feature = "alloc")]
pub fn append_all(buf: &[u8], new_data: &[u8]) -> Result<Vec<u8>, Error> {
    let mut out = Vec::new();
    append_all_into(buf, new_data, &mut out)?;
    Ok(out)
}

/// See [`extend_into`].
#[cfg(feature = "alloc")]
pub fn extend(buf: &[u8], new_data: &[u8]) -> Result<Vec<u8>, Error> {
    let mut out = Vec::new();
    extend_into(buf, new_data, &mut out)?;
    Ok(out)
}
