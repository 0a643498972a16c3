use std::{fmt, str::FromStr};

/// HTTP request method.
///
/// Methods outside the recognized dictionary are represented by
/// [`Method::CUSTOM`]; the actual token bytes travel alongside the tag in
/// the request-line record.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Method(Inner);

// https://tools.ietf.org/html/rfc7231#section-4
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
enum Inner {
    Options,
    #[default]
    Get,
    Head,
    Trace,
    Connect,
    Post,
    Put,
    Delete,
    Patch,
    Custom,
}

impl fmt::Debug for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        str::fmt(self.as_str(), f)
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Method {
    /// Any method token outside the recognized dictionary.
    pub const CUSTOM: Method = Method(Inner::Custom);

    /// Returns `true` for [`Method::CUSTOM`].
    #[inline]
    pub const fn is_custom(&self) -> bool {
        matches!(self.0, Inner::Custom)
    }

    forward! {
        /// The `OPTIONS` method describes the communication options for the
        /// target resource.
        pub const OPTIONS: Options = b"OPTIONS";
        /// The `GET` method requests a representation of the specified
        /// resource.
        pub const GET: Get = b"GET";
        /// The `HEAD` method asks for a response identical to a GET request,
        /// but without a response body.
        pub const HEAD: Head = b"HEAD";
        /// The `TRACE` method performs a message loop-back test along the
        /// path to the target resource.
        pub const TRACE: Trace = b"TRACE";
        /// The `CONNECT` method establishes a tunnel to the server identified
        /// by the target resource.
        pub const CONNECT: Connect = b"CONNECT";
        /// The `POST` method submits an entity to the specified resource.
        pub const POST: Post = b"POST";
        /// The `PUT` method replaces all current representations of the
        /// target resource with the request content.
        pub const PUT: Put = b"PUT";
        /// The `DELETE` method deletes the specified resource.
        pub const DELETE: Delete = b"DELETE";
        /// The `PATCH` method applies partial modifications to a resource.
        pub const PATCH: Patch = b"PATCH";
    }
}

// ===== Error =====

/// An error when trying to parse [`Method`] from a string.
#[derive(Debug)]
pub struct UnknownMethod;

impl FromStr for Method {
    type Err = UnknownMethod;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_bytes(s.as_bytes()).ok_or(UnknownMethod)
    }
}

impl std::error::Error for UnknownMethod {}

impl fmt::Display for UnknownMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("unknown method")
    }
}

// ===== Macros =====

macro_rules! forward {
    ($($(#[$doc:meta])* pub const $name:ident: $variant:ident = $val:literal;)*) => {
        $(
            $(#[$doc])*
            pub const $name: Method = Method(Inner::$variant);
        )*

        /// Look up a recognized [`Method`] from its exact token bytes.
        ///
        /// Matching is ASCII-exact and case-sensitive. Unrecognized tokens
        /// return `None`; the request-line parser carries them as
        /// [`Method::CUSTOM`] instead.
        pub const fn from_bytes(src: &[u8]) -> Option<Method> {
            match src {
                $(
                    $val => Some(Self::$name),
                )*
                _ => None,
            }
        }

        /// Returns the string representation.
        pub const fn as_str(&self) -> &'static str {
            match self.0 {
                $(
                    Inner::$variant => stringify!($name),
                )*
                Inner::Custom => "CUSTOM",
            }
        }
    };
}

use forward;
