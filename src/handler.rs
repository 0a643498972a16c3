use crate::parser::Reqline;

/// Sink for a parsed request line.
///
/// Dispatch is static so the callback inlines into the parser's hot loop;
/// `&mut dyn StartLineHandler` also satisfies the bound for callers that
/// prefer dynamic dispatch over monomorphization.
pub trait StartLineHandler {
    /// Called exactly once per successful request-line parse.
    ///
    /// Every byte-slice view inside [`Reqline`] borrows from the parsed
    /// input and is only valid for the duration of this call. Persisting
    /// anything requires a copy.
    fn on_start_line(&mut self, line: Reqline<'_>);
}

/// Sink for parsed header fields.
///
/// Dispatch is static; `&mut dyn HeaderHandler` also satisfies the bound.
pub trait HeaderHandler {
    /// Called once per well-formed header, in source order.
    ///
    /// `name` is non-empty and contains only token characters. `value` may
    /// be empty, contains no CR, and has optional whitespace stripped from
    /// both ends. Both views are only valid for the duration of this call.
    ///
    /// Never called for a malformed header; the parse fails instead.
    fn on_header(&mut self, name: &[u8], value: &[u8]);
}

impl<H: StartLineHandler + ?Sized> StartLineHandler for &mut H {
    #[inline]
    fn on_start_line(&mut self, line: Reqline<'_>) {
        (**self).on_start_line(line)
    }
}

impl<H: HeaderHandler + ?Sized> HeaderHandler for &mut H {
    #[inline]
    fn on_header(&mut self, name: &[u8], value: &[u8]) {
        (**self).on_header(name, value)
    }
}
