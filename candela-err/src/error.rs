//! Error message generation.
//!
//! Here we provide the facilities to instanciate prebuilt error messages.
//! The general structure is that each kind of error message will be implemented
//! by a `struct` that implements [IntoError], where the blanks are filled
//! in by the `struct` fields' [Display] and [TrySpan] `impl`s.

use std::fmt::Display;

use crate::Span;

/// Anything that went wrong: a sequence of [Span] and associated message.
pub type Error = Vec<(String, Option<Span>)>;

/// Generate an [Error].
#[expect(
    clippy::module_name_repetitions,
    reason = "Of course the trait contains the word 'Error'"
)]
pub trait IntoError {
    /// Produce the sequence of spans and help messages.
    fn into_err(self) -> Error;
}

/// Objects that can be converted to spans.
pub trait TrySpan {
    /// Try to get a span from the object (by default we don't get any,
    /// but a wrapper might provide one)
    fn try_span(&self) -> Option<Span> {
        None
    }
}

/// Always [Some].
impl TrySpan for Span {
    fn try_span(&self) -> Option<Span> {
        Some(*self)
    }
}

/// Trivial projection.
impl<T: TrySpan> TrySpan for &T {
    fn try_span(&self) -> Option<Span> {
        (*self).try_span()
    }
}

/// Trivial projection.
impl<T: TrySpan> TrySpan for Option<T> {
    fn try_span(&self) -> Option<Span> {
        self.as_ref().and_then(TrySpan::try_span)
    }
}

/// Generic wraper that implements `Display` and `TrySpan` to wrap together
/// items that don't implement both.
pub struct DisplayTrySpan<T> {
    /// Displayable part.
    pub display: T,
    /// Spannable part.
    pub try_span: Option<Span>,
}

impl<T: Display> Display for DisplayTrySpan<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.display.fmt(f)
    }
}

impl<T> TrySpan for DisplayTrySpan<T> {
    fn try_span(&self) -> Option<Span> {
        self.try_span
    }
}

/// Describe an error message in a succint format and the macro will generate
/// the `impl IntoError` automaticaly.
///
/// The declaration looks like this:
/// ```skip
/// ["Documentation for SomeError"]
/// struct SomeError where {
///     ["Documentation for foo"] foo: {Display},
///     ["Documentation for bar"] bar: {TrySpan},
/// } impl {
///     "Uh oh this is bad: {foo} occured here" @ bar;
///     "Plain help message";
/// }
/// ```
/// Each field may be of any type that implements its trait bounds,
/// and each line of the implementation is one message:
/// - `"msg"` plain message without span,
/// - `"{foo}"` format string (requires `foo: {Display}`),
/// - `"msg" @ bar` use the span of `bar` (requires `bar: {TrySpan}`).
macro_rules! error_message {
    (
        $( [ $predoc:expr ] )* // documentation of the struct
        struct $name:ident where {
            $( // fields and trait bounds (typically `Display` and/or `TrySpan`)
                [ $doc:expr ] $field:ident : { $($bounds:tt)+ },
            )*
        } impl { // ;-separated list of messages, handled by the auxiliary arms
            $( $message:tt )*
        }
    ) => {
        #[allow(non_camel_case_types, reason = "We are using a generic of the same name for each field")]
        $( #[doc = $predoc] )*
        pub struct $name <$($field),*> {
            $(
                #[doc = $doc]
                pub $field : $field ,
            )*
        }

        #[allow(non_camel_case_types, reason = "We are using a generic of the same name for each field")]
        impl <$($field),*> IntoError for $name<$($field),*>
        where $( $field: $($bounds)* , )*
        {
            fn into_err(self) -> Error {
                let Self { $($field),* } = self;
                let mut constructed = Vec::new();
                error_message!([constructed]
                    $($message)* // more black magic to turn these into statements
                );
                constructed
            }
        }
    };
    // Auxiliary arms to build just the message constructor.
    // These recursively consume the stream of tokens that describe the message
    // and produce the appropriate `push` operations.
    ( [$constructed:ident] ) => {}; // done
    ( [$constructed:ident] $fmt:tt @ $site:ident ; $($rest:tt)* ) => {
        // Base case looks like ["foo" @ site]: "foo" is treated as a format
        // string and `site` gives the `Span`.
        $constructed.push((format!($fmt), $site.try_span()));
        error_message!([$constructed] $($rest)*);
    };
    ( [$constructed:ident] $fmt:tt ; $($rest:tt)* ) => {
        // Base case without `Span`.
        $constructed.push((format!($fmt), None));
        error_message!([$constructed] $($rest)*);
    };
}

error_message! {
    ["Generate an error for an attribute `#[case(...)]` given arguments."]
    struct CaseAttrArgs where {
        ["Location of the arguments."] site: {TrySpan},
    } impl {
        "`#[case]` does not accept arguments" @ site;
        "The test case is named after the function it is applied to";
    }
}

error_message! {
    ["Generate an error for a qualifier that test cases cannot have,"]
    ["such as `async`, `const`, `unsafe` or `extern`."]
    struct CaseQualifier where {
        ["The offending qualifier."] qualifier: {Display + TrySpan},
    } impl {
        "Test cases cannot be declared `{qualifier}`" @ qualifier;
        "A test case is a plain synchronous function: remove `{qualifier}`";
    }
}

error_message! {
    ["Generate an error for a test case that declares parameters."]
    struct CaseParams where {
        ["Location of the parameters."] params: {TrySpan},
    } impl {
        "Test cases take no parameters" @ params;
        "The failure callback is passed implicitly to every `check!` of the body";
    }
}

error_message! {
    ["Generate an error for a generic test case."]
    struct CaseGenerics where {
        ["Location of the generic parameters."] generics: {TrySpan},
    } impl {
        "Test cases cannot be generic" @ generics;
    }
}

error_message! {
    ["Generate an error for a test case that returns something else than `()`."]
    struct CaseReturn where {
        ["Declared return type."] output: {Display + TrySpan},
    } impl {
        "Test cases must return `()`, found `{output}`" @ output;
        "Report failures with `check!` instead of returning them";
    }
}

error_message! {
    ["Generate an error for a `check!()` without an expression."]
    struct CheckEmpty where {
        ["Location of the invocation."] site: {TrySpan},
    } impl {
        "`check!` expects an expression" @ site;
        "e.g. `check!(left == right)`";
    }
}

error_message! {
    ["Generate an error for a `check!` given more than one expression."]
    struct CheckTrailing where {
        ["Location of what follows the first expression."] extra: {TrySpan},
    } impl {
        "`check!` takes a single expression" @ extra;
        "Combine conditions with `&&`, or write one `check!` per condition";
    }
}

error_message! {
    ["Generate an error for input of `check!` that is not an expression."]
    struct CheckSyntax where {
        ["What the parser complains about."] msg: {Display},
        ["Where the parser gave up."] site: {TrySpan},
    } impl {
        "{msg}" @ site;
    }
}
