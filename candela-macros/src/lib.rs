//! Procedural macros of the Candela suite.
//!
//! Two macros are provided: the `#[case]` attribute declares a test case,
//! and `check!` asserts an expression inside of it. Both expand to calls
//! to the runtime in `candela_sem`, which must be a dependency of any
//! crate that uses them.
//!
//! ```
//! use candela_macros::{case, check};
//!
//! #[case]
//! fn arithmetic() {
//!     let x = 3;
//!     check!(x * 2 + 1 == 7);
//!     check!(x < 10 && x > 0);
//! }
//!
//! fn main() {
//!     let failures = std::cell::RefCell::new(Vec::new());
//!     arithmetic(&|msg: &str, _: &str, _: u32| failures.borrow_mut().push(msg.to_owned()));
//!     assert!(failures.borrow().is_empty());
//! }
//! ```

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
    clippy::panic,
    clippy::pedantic,
    clippy::str_to_string,
    clippy::unreachable,
    clippy::unwrap_used,
    clippy::use_debug
)]

mod ast;
mod case;
mod codegen;
mod sp;

use proc_macro2::TokenStream;
use quote::ToTokens;

use candela_err::{self as err, EAccum, Error};


/// Declare a test case.
///
/// The function must take no parameters, return `()`, and be neither
/// generic, `const`, `async`, `unsafe` nor `extern`. It is registered
/// under its own name and run by `candela_sem::run`.
///
/// The registered function takes the failure callback as its only
/// argument, so it can also be called directly:
/// ```
/// # use candela_macros::{case, check};
/// #[case]
/// fn mismatch() {
///     check!(1 == 2);
/// }
///
/// # fn main() {
/// let failures = std::cell::RefCell::new(Vec::new());
/// mismatch(&|msg: &str, _: &str, _: u32| failures.borrow_mut().push(msg.to_owned()));
/// assert_eq!(*failures.borrow(), ["1 == 2 [ 1 == 2 ]"]);
/// # }
/// ```
///
/// ```compile_fail
/// # use candela_macros::case;
/// #[case]
/// fn with_params(n: u32) {}
/// # fn main() {}
/// ```
///
/// ```compile_fail
/// # use candela_macros::case;
/// #[case]
/// async fn asynchronous() {}
/// # fn main() {}
/// ```
///
/// ```compile_fail
/// # use candela_macros::case;
/// #[case]
/// fn fallible() -> Result<(), String> { Ok(()) }
/// # fn main() {}
/// ```
///
/// ```compile_fail
/// # use candela_macros::case;
/// #[case(named)]
/// fn with_args() {}
/// # fn main() {}
/// ```
#[proc_macro_attribute]
pub fn case(
    args: proc_macro::TokenStream,
    item: proc_macro::TokenStream,
) -> proc_macro::TokenStream {
    let item = syn::parse_macro_input!(item as syn::ItemFn);
    let mut eaccum = EAccum::default();
    let case = case::Case::translate(&mut eaccum, args.into(), item);
    finish(eaccum, case).into()
}

/// Assert an expression, reporting the values of its operands if it
/// does not hold.
///
/// `check!(a == b)` evaluates both operands once and, on failure, reports
/// `a == b [ <a> == <b> ]` through the callback of the enclosing test case.
/// Expressions that are not comparisons are judged on their truthiness.
/// A panic during evaluation is reported, then propagated.
///
/// Only usable in the body of a `#[case]`:
/// ```compile_fail
/// # use candela_macros::check;
/// fn not_a_case() {
///     check!(1 == 1);
/// }
/// # fn main() {}
/// ```
///
/// ```compile_fail
/// # use candela_macros::{case, check};
/// #[case]
/// fn empty() {
///     check!();
/// }
/// # fn main() {}
/// ```
#[proc_macro]
pub fn check(i: proc_macro::TokenStream) -> proc_macro::TokenStream {
    let mut eaccum = EAccum::default();
    let check = ast::Check::translate(&mut eaccum, i.into());
    finish(eaccum, check).into()
}

/// Generate the code, or the errors if there is no code.
fn finish<T: ToTokens>(eaccum: EAccum, generated: Option<T>) -> TokenStream {
    let fatal = eaccum.is_fatal();
    let errs = eaccum.fetch();
    let Some(generated) = generated else {
        err::consistency!(fatal, "No code generated, but no fatal error emitted");
        return errs.into_iter().map(emit).collect();
    };
    err::consistency!(!fatal, "Code generated despite a fatal error");
    generated.into_token_stream()
}

/// Generate a run of trybuild test cases.
/// Usage: `compiling!(test_name with expected_outcome in path/to/test/folder)`.
#[cfg(test)]
macro_rules! compiling {
    ($fun:ident with $testing:ident in $($dir:ident / )*) => {
        #[test]
        fn $fun() {
            let t = trybuild::TestCases::new();
            t.$testing(concat!("tests/", $( concat!(stringify!($dir), "/") , )* "**/*.rs"));
        }
    };
}

// Compile-Fail tests. These should fail to compile with the recorded message.
#[cfg(test)]
compiling!(fail_ui_case with compile_fail in compile_fail/ui/case/);
#[cfg(test)]
compiling!(fail_ui_check with compile_fail in compile_fail/ui/check/);
// Pass tests. These should compile and run.
#[cfg(test)]
compiling!(pass_check with pass in pass/check/);
#[cfg(test)]
compiling!(pass_case with pass in pass/case/);
#[cfg(test)]
compiling!(pass_run with pass in pass/run/);

/// Emit one error message from a sequence of spans and associated hint messages.
///
/// Hints without a span are attached to the message that precedes them.
fn emit(elements: Error) -> TokenStream {
    let mut elements = elements.into_iter();
    let Some((msg, span)) = elements.next() else {
        err::abort!("This error message is empty")
    };
    let Some(span) = span else {
        err::abort!("The very first error should always have an associated span")
    };
    let mut messages = vec![(msg, span)];
    for (msg, span) in elements {
        if let Some(span) = span {
            messages.push((format!("note: {msg}"), span));
        } else if let Some(last) = messages.last_mut() {
            last.0.push_str("\n= help: ");
            last.0.push_str(&msg);
        }
    }
    messages
        .into_iter()
        .map(|(msg, span)| syn::Error::new(span, msg).to_compile_error())
        .collect()
}
