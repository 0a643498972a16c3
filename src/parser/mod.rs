//! HTTP/1.x request head parsing.
//!
//! [`HttpParser::parse_request_line`] and [`HttpParser::parse_headers`]
//! work on chunk reads: given an unknown amount of buffered bytes, each
//! call either consumes one complete grammar production and reports the
//! exact byte count, or returns [`ParseResult::Pending`] so the caller can
//! read more and retry. The parser keeps no state between calls.
//!
//! Parsed tokens are delivered as byte-slice views through the
//! [`StartLineHandler`] and [`HeaderHandler`] sinks, borrowing from the
//! input segments whenever a token lies inside one segment and from a
//! one-time contiguous copy when it straddles a boundary.
//!
//! On `Pending` nothing counts as consumed: the next call re-parses the
//! block from the start of the buffer, so a header sink may observe the
//! same leading headers again. Callers must treat invocations from a
//! pending call as void.
//!
//! [`ParseResult::Pending`]: crate::ParseResult::Pending
mod error;

mod header;
mod request;

pub use error::{HttpParseError, HttpParseErrorKind, MAX_ERROR_DETAIL_LEN};
pub use request::Reqline;

use crate::{
    buf::SegmentedBuf,
    common::ParseResult,
    handler::{HeaderHandler, StartLineHandler},
};


/// HTTP/1.x request head parser.
///
/// Reentrant and oblivious to pipelining: it carries only the error-detail
/// flag, so one instance may serve any number of disjoint buffers, and
/// parsing the same bytes twice produces identical outcomes.
#[derive(Debug, Clone, Copy, Default)]
pub struct HttpParser {
    show_error_details: bool,
}

impl HttpParser {
    /// Parser that reports rejections without input excerpts.
    pub const fn new() -> Self {
        Self {
            show_error_details: false,
        }
    }

    /// Parser that attaches an escaped excerpt of the offending input to
    /// rejections, bounded by [`MAX_ERROR_DETAIL_LEN`].
    pub const fn with_error_details(show_error_details: bool) -> Self {
        Self { show_error_details }
    }

    /// Parse one request line from the start of `buf`.
    ///
    /// On success the handler has been invoked exactly once and the
    /// returned count covers the line including its CRLF. Returns
    /// [`ParseResult::Pending`] when no full line is in view; the buffer
    /// is untouched either way, consumption is the caller advancing past
    /// the reported count.
    pub fn parse_request_line<S, H>(
        &self,
        buf: &SegmentedBuf<'_, S>,
        handler: &mut H,
    ) -> ParseResult<usize, HttpParseError>
    where
        S: AsRef<[u8]>,
        H: StartLineHandler,
    {
        request::parse_request_line(self, buf, handler)
    }

    /// Parse a header block from the start of `buf`, up to and including
    /// the terminating CRLF.
    ///
    /// The handler is invoked once per header in source order. On
    /// [`ParseResult::Pending`] nothing counts as consumed and the whole
    /// block is re-parsed on the next call.
    pub fn parse_headers<S, H>(
        &self,
        buf: &SegmentedBuf<'_, S>,
        handler: &mut H,
    ) -> ParseResult<usize, HttpParseError>
    where
        S: AsRef<[u8]>,
        H: HeaderHandler,
    {
        header::parse_headers(self, buf, handler)
    }

    pub(crate) fn reject(&self, kind: HttpParseErrorKind, excerpt: &[u8]) -> HttpParseError {
        if self.show_error_details {
            HttpParseError::with_excerpt(kind, excerpt)
        } else {
            HttpParseError::new(kind)
        }
    }
}
