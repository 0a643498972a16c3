use super::{HttpParser, error::HttpParseError};
use crate::{
    buf::SegmentedBuf,
    common::ParseResult,
    handler::StartLineHandler,
    log::trace,
    matches, simd,
    method::Method,
    version::Version,
};

macro_rules! reject {
    ($parser:ident, $kind:ident, $excerpt:expr) => {{
        let err = $parser.reject(super::error::HttpParseErrorKind::$kind, $excerpt);
        crate::log::debug!("request line rejected: {err}");
        return ParseResult::Err(err);
    }};
}

const VERSION_SIZE: usize = b"HTTP/1.1".len();

/// Request-line record handed to [`StartLineHandler::on_start_line`].
///
/// Every byte-slice view borrows from the parsed input and is valid only
/// for the duration of the callback.
#[derive(Debug, Clone, Copy)]
pub struct Reqline<'a> {
    pub method: Method,
    /// The method token bytes, non-empty iff `method` is [`Method::CUSTOM`].
    pub custom_method: &'a [u8],
    pub version: Version,
    /// Path plus optional query, with no surrounding SP.
    pub target: &'a [u8],
    /// Subset of `target` up to the `?` or the terminating SP.
    pub path: &'a [u8],
    /// Subset of `target` from the `?` (inclusive), empty if none appeared.
    pub query: &'a [u8],
    /// `true` iff a `%` byte appeared in the path.
    pub path_encoded: bool,
}

// ===== Request Line =====
//
// The first LF in view bounds the whole line. Everything after runs on a
// contiguous slice of exactly that line, so no probe can read past it.

pub(super) fn parse_request_line<S, H>(
    parser: &HttpParser,
    buf: &SegmentedBuf<'_, S>,
    handler: &mut H,
) -> ParseResult<usize, HttpParseError>
where
    S: AsRef<[u8]>,
    H: StartLineHandler,
{
    let cursor = buf.cursor();

    let Some(lf) = cursor.find(b'\n') else {
        return ParseResult::Pending;
    };
    let line_len = lf + 1;

    // contiguous view of the line, copied only when it straddles segments
    let line = cursor.materialize(line_len);
    let line = &line[..];

    let (method, custom_method, target_start) = match known_method(line) {
        Some((method, len)) => (method, &b""[..], len + 1),
        None => {
            let mut nth = 0;
            while nth < line.len() && matches::is_method(line[nth]) {
                nth += 1;
            }
            if nth == 0 || line.get(nth) != Some(&b' ') {
                reject!(parser, InvalidRequestLine, line);
            }
            (Method::CUSTOM, &line[..nth], nth + 1)
        }
    };

    // path section: SP, '?' and '%' cannot lead it
    let mut path_encoded = false;
    let mut idx = target_start;
    let path_end = loop {
        match line.get(idx) {
            Some(b' ' | b'?') => {
                if idx == target_start {
                    reject!(parser, InvalidRequestLine, line);
                }
                break idx;
            }
            Some(b'%') => {
                if idx == target_start {
                    reject!(parser, InvalidRequestLine, line);
                }
                path_encoded = true;
            }
            Some(b'\r' | b'\n') | None => reject!(parser, InvalidRequestLine, line),
            Some(_) => {}
        }
        idx += 1;
    };

    // query section runs to the SP before the version
    let target_end = if line[path_end] == b'?' {
        let mut idx = path_end + 1;
        loop {
            match line.get(idx) {
                Some(b' ') => break idx,
                Some(b'\r' | b'\n') | None => reject!(parser, InvalidRequestLine, line),
                Some(_) => idx += 1,
            }
        }
    } else {
        path_end
    };

    let version_start = target_end + 1;

    // fixed eight-byte probe, bounded by the line the LF search established
    let version = match line.get(version_start..version_start + VERSION_SIZE) {
        Some(token) => Version::from_bytes(token),
        None => Version::UNKNOWN,
    };

    if version == Version::UNKNOWN {
        // recoverable only when the rest of the line is otherwise well
        // formed: CR directly before the LF, no CR anywhere earlier
        if line[line_len - 2] != b'\r' {
            reject!(parser, InvalidRequestLine, line);
        }
        let Some(span) = line.get(version_start..line_len - 2) else {
            reject!(parser, InvalidRequestLine, line);
        };
        if simd::contains(span, b'\r') {
            reject!(parser, InvalidRequestLine, line);
        }
        reject!(parser, UnrecognizedHttpVersion, line);
    }

    // the CRLF must follow the eight version bytes directly, even when
    // they matched a recognized version
    if line.get(version_start + VERSION_SIZE) != Some(&b'\r')
        || line.get(version_start + VERSION_SIZE + 1) != Some(&b'\n')
    {
        reject!(parser, InvalidRequestLine, line);
    }

    handler.on_start_line(Reqline {
        method,
        custom_method,
        version,
        target: &line[target_start..target_end],
        path: &line[target_start..path_end],
        query: &line[path_end..target_end],
        path_encoded,
    });

    trace!("request line parsed: {method:?} {version:?}, consumed={line_len}");

    ParseResult::Ok(line_len)
}

/// First-byte dispatch into the fixed method dictionary, then a word
/// compare of the token together with its terminating SP.
#[inline]
fn known_method(line: &[u8]) -> Option<(Method, usize)> {
    let candidate = match line.first()? {
        b'G' => Method::GET,
        b'H' => Method::HEAD,
        b'T' => Method::TRACE,
        b'D' => Method::DELETE,
        b'C' => Method::CONNECT,
        b'O' => Method::OPTIONS,
        b'P' => match line.get(1)? {
            b'U' => Method::PUT,
            b'O' => Method::POST,
            b'A' => Method::PATCH,
            _ => return None,
        },
        _ => return None,
    };

    let token = candidate.as_str().as_bytes();
    match line.split_at_checked(token.len()) {
        Some((head, [b' ', ..])) if head == token => Some((candidate, token.len())),
        _ => None,
    }
}
