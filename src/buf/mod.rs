//! Segmented input buffers.
//!
//! A [`SegmentedBuf`] is a logically contiguous byte stream stored as an
//! ordered sequence of non-overlapping segments, typically the read chunks
//! of a connection buffer. Segments can be any `AsRef<[u8]>`, so both
//! `&[&[u8]]` and `&[bytes::Bytes]` work.
//!
//! Parsing walks the stream through a [`SegCursor`], which borrows the
//! segments and never mutates them.
mod cursor;

pub use cursor::SegCursor;

#[cfg(test)]
mod test;

/// A finite, read-only sequence of contiguous byte segments.
pub struct SegmentedBuf<'a, S = &'a [u8]> {
    segments: &'a [S],
    len: usize,
}

impl<'a, S: AsRef<[u8]>> SegmentedBuf<'a, S> {
    /// Create a buffer over `segments`.
    ///
    /// Empty segments are permitted and skipped during iteration.
    pub fn new(segments: &'a [S]) -> Self {
        let len = segments.iter().map(|seg| seg.as_ref().len()).sum();
        Self { segments, len }
    }

    /// Total number of bytes across all segments.
    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the buffer contains no bytes.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The underlying segments.
    #[inline]
    pub const fn segments(&self) -> &'a [S] {
        self.segments
    }

    /// A cursor positioned at the first byte.
    #[inline]
    pub fn cursor(&self) -> SegCursor<'a, S> {
        SegCursor::with_len(self.segments, self.len)
    }
}

impl<S: AsRef<[u8]>> std::fmt::Debug for SegmentedBuf<'_, S> {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.debug_struct("SegmentedBuf")
            .field("segments", &self.segments.len())
            .field("len", &self.len)
            .finish()
    }
}
