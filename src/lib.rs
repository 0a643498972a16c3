//! Streaming, zero-copy HTTP/1.x request head parser.
//!
//! Bytes arrive in one or more non-contiguous segments ([`SegmentedBuf`])
//! and parsing drives a pair of caller-supplied sinks ([`StartLineHandler`]
//! and [`HeaderHandler`]) with byte-slice views into the original buffers.
//! Each successful call reports exactly how many bytes the production
//! consumed, so the caller can release drained buffers and feed the rest
//! back in; when the bytes in view end before the grammar does, the call
//! returns [`ParseResult::Pending`] instead.
//!
//! ```rust
//! use suji::{HeaderHandler, HttpParser, ParseResult, Reqline, SegmentedBuf, StartLineHandler};
//!
//! #[derive(Default)]
//! struct Head {
//!     target: Vec<u8>,
//!     host: Vec<u8>,
//! }
//!
//! impl StartLineHandler for Head {
//!     fn on_start_line(&mut self, line: Reqline<'_>) {
//!         self.target = line.target.to_vec();
//!     }
//! }
//!
//! impl HeaderHandler for Head {
//!     fn on_header(&mut self, name: &[u8], value: &[u8]) {
//!         if name.eq_ignore_ascii_case(b"host") {
//!             self.host = value.to_vec();
//!         }
//!     }
//! }
//!
//! let parser = HttpParser::new();
//! let mut head = Head::default();
//!
//! // two reads off the wire
//! let segments: &[&[u8]] = &[b"GET /metrics HT", b"TP/1.1\r\nHost: example\r\n\r\n"];
//!
//! let buf = SegmentedBuf::new(segments);
//! let ParseResult::Ok(read) = parser.parse_request_line(&buf, &mut head) else {
//!     panic!("incomplete request line");
//! };
//!
//! // drop the drained line, then parse the header block
//! let rest: &[&[u8]] = &[&segments[1][read - segments[0].len()..]];
//! let buf = SegmentedBuf::new(rest);
//! let ParseResult::Ok(_) = parser.parse_headers(&buf, &mut head) else {
//!     panic!("incomplete headers");
//! };
//!
//! assert_eq!(head.target, b"/metrics");
//! assert_eq!(head.host, b"example");
//! ```
#![warn(missing_debug_implementations)]

mod common;
mod log;
mod matches;
mod simd;

mod method;
mod version;

pub mod buf;
pub mod handler;
pub mod parser;

// ===== Reexports =====

pub use buf::{SegCursor, SegmentedBuf};
pub use common::ParseResult;
pub use handler::{HeaderHandler, StartLineHandler};
pub use method::{Method, UnknownMethod};
pub use parser::{HttpParseError, HttpParseErrorKind, HttpParser, Reqline};
pub use version::Version;
