use super::{
    HttpParser,
    error::{HttpParseError, HttpParseErrorKind},
};
use crate::{
    buf::SegmentedBuf, common::ParseResult, handler::HeaderHandler, log::trace, matches, simd,
};

macro_rules! reject {
    ($parser:ident, $kind:ident, $excerpt:expr) => {{
        let err = $parser.reject(HttpParseErrorKind::$kind, $excerpt);
        crate::log::debug!("header block rejected: {err}");
        return ParseResult::Err(err);
    }};
}

// ===== Header Block =====

pub(super) fn parse_headers<S, H>(
    parser: &HttpParser,
    buf: &SegmentedBuf<'_, S>,
    handler: &mut H,
) -> ParseResult<usize, HttpParseError>
where
    S: AsRef<[u8]>,
    H: HeaderHandler,
{
    let mut cursor = buf.cursor();
    let mut consumed = 0;

    loop {
        let Some([c1, c2]) = cursor.peek_pair() else {
            return ParseResult::Pending;
        };

        if c1 == b'\r' {
            if c2 == b'\n' {
                consumed += 2;
                trace!("header block parsed, consumed={consumed}");
                return ParseResult::Ok(consumed);
            }
            reject!(parser, InvalidRequestHeadersNoCrlf, &[c1, c2]);
        }

        let Some(lf) = cursor.find(b'\n') else {
            return ParseResult::Pending;
        };
        let line_len = lf + 1;

        // borrows straight out of the segment unless the line straddles one
        let line = cursor.materialize(line_len);
        if let Err(err) = take_single_header(parser, &line, handler) {
            return ParseResult::Err(err);
        }

        cursor.advance(line_len);
        consumed += line_len;
    }
}

// ===== Single Header =====

/// Tokenize one CRLF-terminated header line and emit it.
///
/// Obs-fold is unsupported: a continuation line starts with SP/HTAB, which
/// fails the token check on its name, and any CR outside the terminating
/// CRLF rejects.
fn take_single_header<H: HeaderHandler>(
    parser: &HttpParser,
    line: &[u8],
    handler: &mut H,
) -> Result<(), HttpParseError> {
    let invalid = || {
        let err = parser.reject(HttpParseErrorKind::InvalidRequestHeader, line);
        crate::log::debug!("header rejected: {err}");
        err
    };

    let [content @ .., b'\r', b'\n'] = line else {
        return Err(invalid());
    };

    let Some(colon) = simd::find_byte(content, b':') else {
        return Err(invalid());
    };

    let (name, rest) = content.split_at(colon);
    if name.is_empty() || !name.iter().all(|byte| matches::is_token(*byte)) {
        return Err(invalid());
    }

    let mut value = &rest[1..];
    if simd::contains(value, b'\r') {
        return Err(invalid());
    }

    // strip OWS from both ends
    while let [byte, tail @ ..] = value {
        if !matches::is_ows(*byte) {
            break;
        }
        value = tail;
    }
    while let [head @ .., byte] = value {
        if !matches::is_ows(*byte) {
            break;
        }
        value = head;
    }

    handler.on_header(name, value);

    Ok(())
}
