use std::fmt;

/// Upper bound, in input bytes, of the excerpt attached to a rejection.
pub const MAX_ERROR_DETAIL_LEN: usize = 128;

/// Request head parsing error.
///
/// Carries a classified [kind][HttpParseErrorKind] and, when the parser
/// was built with error details enabled, an escaped-ASCII excerpt of the
/// offending input.
#[derive(Debug)]
pub struct HttpParseError {
    kind: HttpParseErrorKind,
    detail: Option<Box<str>>,
}

/// Classified rejection reasons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpParseErrorKind {
    /// Grammar violation in the method, target, or line-terminator region.
    InvalidRequestLine,
    /// Grammar violation within a header line.
    InvalidRequestHeader,
    /// Bare CR not followed by LF in the header block.
    InvalidRequestHeadersNoCrlf,
    /// Well-formed request line whose version token is neither `HTTP/1.0`
    /// nor `HTTP/1.1`.
    ///
    /// Recoverable: a caller may answer 505 instead of dropping the
    /// connection.
    UnrecognizedHttpVersion,
}

impl HttpParseError {
    pub(crate) const fn new(kind: HttpParseErrorKind) -> Self {
        Self { kind, detail: None }
    }

    pub(crate) fn with_excerpt(kind: HttpParseErrorKind, excerpt: &[u8]) -> Self {
        let end = usize::min(excerpt.len(), MAX_ERROR_DETAIL_LEN);
        let detail = excerpt[..end].escape_ascii().to_string();
        Self {
            kind,
            detail: Some(detail.into_boxed_str()),
        }
    }

    /// The rejection kind.
    #[inline]
    pub const fn kind(&self) -> HttpParseErrorKind {
        self.kind
    }

    /// Escaped excerpt of the rejected input, if the parser was built with
    /// error details enabled.
    #[inline]
    pub fn detail(&self) -> Option<&str> {
        self.detail.as_deref()
    }

    /// Returns `true` if the caller can answer 505 instead of closing the
    /// connection.
    #[inline]
    pub const fn is_recoverable(&self) -> bool {
        matches!(self.kind, HttpParseErrorKind::UnrecognizedHttpVersion)
    }
}

impl From<HttpParseErrorKind> for HttpParseError {
    #[inline]
    fn from(kind: HttpParseErrorKind) -> Self {
        Self::new(kind)
    }
}

impl std::error::Error for HttpParseError {}

impl fmt::Display for HttpParseError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match self.kind {
            HttpParseErrorKind::InvalidRequestLine => "invalid request line",
            HttpParseErrorKind::InvalidRequestHeader => "invalid request header",
            HttpParseErrorKind::InvalidRequestHeadersNoCrlf => {
                "request headers contain a bare CR"
            }
            HttpParseErrorKind::UnrecognizedHttpVersion => "unrecognized HTTP version",
        })?;

        match &self.detail {
            Some(detail) => write!(f, ": {detail}"),
            None => Ok(()),
        }
    }
}
