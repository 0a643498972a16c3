use std::borrow::Cow;

use crate::simd;

/// Read cursor over the segments of a [`SegmentedBuf`].
///
/// The cursor tracks an absolute position, peeks without consuming, and
/// advances in amortized O(1). Sub-ranges are materialized as
/// [`Cow::Borrowed`] when they lie within the current segment and as a
/// one-time [`Cow::Owned`] copy when they straddle a boundary.
///
/// The cursor is `Copy`; a probing scan can work on a copy and leave the
/// original untouched.
///
/// [`SegmentedBuf`]: super::SegmentedBuf
pub struct SegCursor<'a, S = &'a [u8]> {
    segments: &'a [S],
    /// Current segment index.
    seg: usize,
    /// Offset into the current segment.
    ///
    /// INVARIANT: `off` points at a real byte, or `seg == segments.len()`.
    off: usize,
    /// Absolute position from the start of the buffer.
    pos: usize,
    len: usize,
}

impl<'a, S: AsRef<[u8]>> SegCursor<'a, S> {
    /// Create a cursor at the first byte of `segments`.
    pub fn new(segments: &'a [S]) -> Self {
        let len = segments.iter().map(|seg| seg.as_ref().len()).sum();
        Self::with_len(segments, len)
    }

    pub(crate) fn with_len(segments: &'a [S], len: usize) -> Self {
        let mut cursor = Self { segments, seg: 0, off: 0, pos: 0, len };
        cursor.normalize();
        cursor
    }

    /// Skip exhausted and empty segments.
    fn normalize(&mut self) {
        while let Some(seg) = self.segments.get(self.seg) {
            if self.off < seg.as_ref().len() {
                break;
            }
            self.off = 0;
            self.seg += 1;
        }
    }

    /// Absolute position from the start of the buffer.
    #[inline]
    pub const fn pos(&self) -> usize {
        self.pos
    }

    /// Bytes left between the cursor and the end of the buffer.
    #[inline]
    pub const fn remaining(&self) -> usize {
        self.len - self.pos
    }

    /// Returns `true` if no bytes remain.
    #[inline]
    pub const fn has_remaining(&self) -> bool {
        self.pos < self.len
    }

    /// Remainder of the current segment.
    ///
    /// Empty only when the cursor is exhausted.
    #[inline]
    pub fn chunk(&self) -> &'a [u8] {
        match self.segments.get(self.seg) {
            Some(seg) => &seg.as_ref()[self.off..],
            None => &[],
        }
    }

    /// Peek one byte without consuming it.
    #[inline]
    pub fn peek(&self) -> Option<u8> {
        self.chunk().first().copied()
    }

    /// Peek two bytes without consuming them.
    ///
    /// Returns `None` when fewer than two bytes remain in the whole buffer.
    #[inline]
    pub fn peek_pair(&self) -> Option<[u8; 2]> {
        match self.chunk() {
            [c1, c2, ..] => Some([*c1, *c2]),
            _ => self.peek_pair_spanning(),
        }
    }

    /// Gather two bytes across a segment boundary into a stack scratch.
    ///
    /// Kept out of line so the in-segment peek stays small.
    #[cold]
    #[inline(never)]
    fn peek_pair_spanning(&self) -> Option<[u8; 2]> {
        if self.remaining() < 2 {
            return None;
        }

        let mut scratch = [0u8; 2];
        let mut gathered = 0;
        let mut seg = self.seg;
        let mut off = self.off;

        while gathered < 2 {
            let bytes = &self.segments[seg].as_ref()[off..];
            for byte in bytes {
                scratch[gathered] = *byte;
                gathered += 1;
                if gathered == 2 {
                    break;
                }
            }
            seg += 1;
            off = 0;
        }

        Some(scratch)
    }

    /// Advance the cursor by `n` bytes.
    ///
    /// # Panics
    ///
    /// Panics if `n` exceeds [`remaining`][SegCursor::remaining].
    pub fn advance(&mut self, mut n: usize) {
        assert!(n <= self.remaining(), "advance past the end of the buffer");

        self.pos += n;
        while n > 0 {
            let left = self.segments[self.seg].as_ref().len() - self.off;
            if n < left {
                self.off += n;
                return;
            }
            n -= left;
            self.off = 0;
            self.seg += 1;
        }
        self.normalize();
    }

    /// Offset of the next occurrence of `byte`, relative to the cursor.
    ///
    /// Scans the current segment's remainder and then each following
    /// segment with the word-at-a-time search.
    pub fn find(&self, byte: u8) -> Option<usize> {
        let mut acc = 0;
        let mut seg = self.seg;
        let mut off = self.off;

        while let Some(segment) = self.segments.get(seg) {
            let bytes = &segment.as_ref()[off..];
            if let Some(nth) = simd::find_byte(bytes, byte) {
                return Some(acc + nth);
            }
            acc += bytes.len();
            seg += 1;
            off = 0;
        }

        None
    }

    /// Contiguous view of the next `n` bytes, without consuming them.
    ///
    /// Borrows from the current segment when the range fits; copies once
    /// when it straddles segments.
    ///
    /// # Panics
    ///
    /// Panics if `n` exceeds [`remaining`][SegCursor::remaining].
    pub fn materialize(&self, n: usize) -> Cow<'a, [u8]> {
        let chunk = self.chunk();
        if n <= chunk.len() {
            return Cow::Borrowed(&chunk[..n]);
        }
        self.materialize_spanning(n)
    }

    #[cold]
    fn materialize_spanning(&self, n: usize) -> Cow<'a, [u8]> {
        assert!(n <= self.remaining(), "materialize past the end of the buffer");

        let mut out = Vec::with_capacity(n);
        let mut seg = self.seg;
        let mut off = self.off;

        while out.len() < n {
            let bytes = &self.segments[seg].as_ref()[off..];
            let take = usize::min(bytes.len(), n - out.len());
            out.extend_from_slice(&bytes[..take]);
            seg += 1;
            off = 0;
        }

        Cow::Owned(out)
    }

    /// Read up to (excluding) the next `delim` byte, consuming the
    /// delimiter as well.
    ///
    /// Returns `None` and leaves the cursor unchanged when `delim` is not
    /// in view.
    pub fn read_until(&mut self, delim: u8) -> Option<Cow<'a, [u8]>> {
        let nth = self.find(delim)?;
        let view = self.materialize(nth);
        self.advance(nth + 1);
        Some(view)
    }

    /// Read up to (excluding) the next occurrence of the byte sequence
    /// `delim`, consuming the delimiter as well.
    ///
    /// Returns `None` and leaves the cursor unchanged when `delim` is not
    /// in view.
    ///
    /// The match is a scalar rolling compare that restarts on mismatch,
    /// retesting the mismatched byte against the first delimiter byte.
    /// This is not a KMP: a self-overlapping delimiter (such as `aba`) can
    /// be missed when a partial match overlaps the true start. It is exact
    /// for delimiters with pairwise-distinct prefixes, `\r\n` included.
    pub fn read_until_seq(&mut self, delim: &[u8]) -> Option<Cow<'a, [u8]>> {
        assert!(!delim.is_empty(), "empty delimiter");

        let mut probe = *self;
        let mut scanned = 0;
        let mut matched = 0;

        loop {
            let byte = probe.peek()?;
            probe.advance(1);
            scanned += 1;

            if byte == delim[matched] {
                matched += 1;
                if matched == delim.len() {
                    let view = self.materialize(scanned - delim.len());
                    self.advance(scanned);
                    return Some(view);
                }
            } else {
                matched = (byte == delim[0]) as usize;
            }
        }
    }
}

impl<S> Clone for SegCursor<'_, S> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<S> Copy for SegCursor<'_, S> {}

impl<S: AsRef<[u8]>> std::fmt::Debug for SegCursor<'_, S> {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.debug_struct("SegCursor")
            .field("pos", &self.pos)
            .field("len", &self.len)
            .finish_non_exhaustive()
    }
}

impl<S: AsRef<[u8]>> bytes::Buf for SegCursor<'_, S> {
    #[inline]
    fn remaining(&self) -> usize {
        SegCursor::remaining(self)
    }

    #[inline]
    fn chunk(&self) -> &[u8] {
        SegCursor::chunk(self)
    }

    #[inline]
    fn advance(&mut self, cnt: usize) {
        SegCursor::advance(self, cnt)
    }
}
