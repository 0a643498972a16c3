use std::fmt;

/// HTTP version of a request line.
#[derive(Copy, Clone, PartialEq, Eq, Hash)]
pub struct Version(Inner);

impl Version {
    /// `HTTP/1.0`
    pub const HTTP_10: Version = Version(Inner::Http10);

    /// `HTTP/1.1`
    pub const HTTP_11: Version = Version(Inner::Http11);

    /// Any version token other than `HTTP/1.0` or `HTTP/1.1`.
    ///
    /// A syntactically well-formed request line carrying an unrecognized
    /// version is rejected with a recoverable error so the caller can
    /// answer 505.
    pub const UNKNOWN: Version = Version(Inner::Unknown);

    /// Match the literal version token.
    ///
    /// Anything but the exact bytes `HTTP/1.0` or `HTTP/1.1` yields
    /// [`Version::UNKNOWN`].
    pub const fn from_bytes(src: &[u8]) -> Version {
        match src {
            b"HTTP/1.1" => Version::HTTP_11,
            b"HTTP/1.0" => Version::HTTP_10,
            _ => Version::UNKNOWN,
        }
    }

    /// Returns the string representation.
    pub const fn as_str(&self) -> &'static str {
        match self.0 {
            Inner::Http10 => "HTTP/1.0",
            Inner::Http11 => "HTTP/1.1",
            Inner::Unknown => "<unknown>",
        }
    }
}

#[derive(Copy, Clone, PartialEq, Eq, Hash)]
enum Inner {
    Http10,
    Http11,
    Unknown,
}

impl Default for Version {
    #[inline]
    fn default() -> Version {
        Version::HTTP_11
    }
}

impl fmt::Debug for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
