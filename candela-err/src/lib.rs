//! Error accumulator and prebuilt diagnostics for the Candela macros.
//!
//! Everything that goes wrong while expanding `#[case]` or `check!` is
//! described by an [Error]: a sequence of messages, each optionally attached
//! to a [Span]. Prebuilt messages live in [error] and are turned into an
//! [Error] through [IntoError]. Errors are collected in an [EAccum] so that
//! a single expansion can report everything it found at once.
//!
//! The macros [abort] and [consistency] are for internal errors only,
//! i.e. situations that indicate a bug in Candela rather than a mistake
//! in user code.

#![warn(
    missing_docs,
    unused_crate_dependencies,
    unused_macro_rules,
    variant_size_differences,
    clippy::allow_attributes,
    clippy::allow_attributes_without_reason,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::missing_docs_in_private_items,
    clippy::multiple_inherent_impl,
    clippy::pedantic,
    clippy::str_to_string,
    clippy::unreachable,
    clippy::unwrap_used,
    clippy::use_debug
)]

pub mod error;

pub use error::*;
pub use proc_macro2::Span;

/// Where to report internal errors.
pub const REPO: &str = "https://github.com/Vanille-N/candela";

/// Location in the source code of Candela itself.
#[macro_export]
macro_rules! here {
    () => {
        concat!(file!(), ":", line!(), ":", column!())
    };
}

/// Internal error: something that should never happen, phrased as a bug
/// report for the maintainers.
#[macro_export]
macro_rules! abort {
    ($($msg:expr),*) => {{
        std::panic!("

Candela panicked: \x1b[1;31m{}.\x1b[0m
This error occured in \x1b[1;35m{}\x1b[0m

If you are not a developper of Candela and you see this message then this is a bug.
I'd be grateful if you could report this error at \x1b[33m{}\x1b[0m
with the code that produced it and the version of Candela you are using.

",
            format!($($msg),*),
            $crate::here!(),
            $crate::REPO,
        );
    }};
}

/// Abort if the condition does not hold.
#[macro_export]
macro_rules! consistency {
    ($cond:expr, $($msg:expr),*) => {
        if !$cond {
            $crate::abort!($($msg),*)
        }
    };
}

/// Error accumulator.
///
/// Collecting errors instead of failing on the first one lets the user
/// see every problem of a declaration in a single compilation.
#[derive(Debug, Default)]
pub struct EAccum {
    /// Fatal errors collected so far.
    errors: Vec<Error>,
}

impl EAccum {
    /// Record a new error.
    ///
    /// Always returns `None` so that it can be used as
    /// `return eaccum.error(...)` in functions that produce an `Option`.
    pub fn error<T>(&mut self, e: impl IntoError) -> Option<T> {
        self.errors.push(e.into_err());
        None
    }

    /// Whether any error was recorded.
    #[must_use]
    pub fn is_fatal(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Extract the errors, in the order in which they were recorded.
    #[must_use]
    pub fn fetch(self) -> Vec<Error> {
        self.errors
    }
}
