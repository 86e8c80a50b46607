use crate::error::Error;

/// An output buffer the codec can assemble a trailer-bearing buffer into.
///
/// Implemented for `Vec<u8>` (with `alloc`) and for fixed-capacity `heapless::Vec<u8, N>`, so
/// targets without an allocator can still append a trailer.
pub trait Buf {
    fn as_slice(&self) -> &[u8];
    fn extend_from_slice(&mut self, other: &[u8]) -> Result<(), Error>;
    fn clear(&mut self);

    /// Hint that `additional` more bytes are about to be written.
    fn reserve(&mut self, _additional: usize) {}

    fn len(&self) -> usize {
        self.as_slice().len()
    }

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(feature = "alloc")]
impl Buf for alloc::vec::Vec<u8> {
    fn as_slice(&self) -> &[u8] {
        &self[..]
    }

    fn extend_from_slice(&mut self, other: &[u8]) -> Result<(), Error> {
        alloc::vec::Vec::extend_from_slice(self, other);
        Ok(())
    }

    fn clear(&mut self) {
        alloc::vec::Vec::clear(self);
    }

    fn reserve(&mut self, additional: usize) {
        alloc::vec::Vec::reserve(self, additional);
    }
}

impl<const N: usize> Buf for heapless::Vec<u8, N> {
    fn as_slice(&self) -> &[u8] {
        &self[..]
    }

    fn extend_from_slice(&mut self, other: &[u8]) -> Result<(), Error> {
        heapless::Vec::extend_from_slice(self, other).map_err(|_| Error::BufferOverflow)
    }

    fn clear(&mut self) {
        heapless::Vec::clear(self)
    }
}
