//! A mostly transparent wrapper around any type to indicate that it carries
//! a `Span` with it.
//!
//! `Sp` is used for the pieces of an assertion that do not carry a span of
//! their own once translated (e.g. operators), so that the generated code
//! can point back to the right place in the user's source.

use std::fmt;

use candela_err::TrySpan;
pub use candela_err::Span;

/// Span wrapper.
#[derive(Debug, Clone, Copy)]
pub struct Sp<T> {
    /// A payload.
    pub t: T,
    /// The span associated with the payload.
    pub span: Span,
}

impl<T> TrySpan for Sp<T> {
    /// `Sp` always has a span, so `TrySpan` is guaranteed to succeed.
    fn try_span(&self) -> Option<Span> {
        Some(self.span)
    }
}

impl<T> Sp<T> {
    /// Attach a span.
    pub fn new(t: T, span: Span) -> Self {
        Self { t, span }
    }
}

/// Transparent display: the span is not shown.
impl<T: fmt::Display> fmt::Display for Sp<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.t)
    }
}
