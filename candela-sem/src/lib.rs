//! Semantics of Candela, a minimal embeddable unit-test framework.
//!
//! Test cases register themselves in a process-wide collection, assertions
//! are written as ordinary comparisons, and on failure the runner reports
//! the literal source of the assertion together with the runtime values of
//! both operands.
//!
//! This crate is the runtime half. The declaration syntax (`#[case]` and
//! `check!`) is provided by `candela_macros`, which expands to calls into
//! the items below. Code generated by the macros refers to this crate as
//! `::candela_sem`, so it must be a direct dependency of the crate that
//! declares the test cases.
//!
//! ### How an assertion is evaluated
//!
//! `check!(a + b == c)` expands to (roughly)
//! ```ignore
//! ::candela_sem::check("a + b == c", Site { file: file!(), line: line!() }, fail, || {
//!     match (::candela_sem::capture(a) + b, &(c)) {
//!         (lhs, rhs) => ::candela_sem::evaluate(lhs.by_ref().equal(rhs)),
//!     }
//! })
//! ```
//! - [capture] wraps the leftmost operand in a [Leaf],
//! - `+ b` is computed right away and gives a new `Leaf` (see [expr]),
//! - `equal` does not compare anything, it builds a [Binary] node that
//!   remembers both operands and the operator (see [ops]),
//! - [evaluate] reduces the node to an [Outcome] and renders it only if it
//!   does not hold,
//! - [check] reports a failure as `"a + b == c [ 3 == 4 ]"` through the
//!   failure callback of the test case, or reports and resumes a panic.
//!
//! The same machinery can be driven by hand:
//! ```
//! use candela_sem::{capture, evaluate, Outcome};
//!
//! assert_eq!(evaluate((capture(2) + 2).equal(4)), Outcome::Pass);
//! assert_eq!(
//!     evaluate(capture(1).less_than(1)),
//!     Outcome::Fail("1 < 1".to_owned()),
//! );
//! ```
//!
//! ### How cases are run
//!
//! ```
//! use candela_sem::{check, evaluate, capture, Buffer, FailureCallback, Registry, Runner, Site};
//!
//! let mut registry = Registry::new();
//! registry.register("arith", |fail: &dyn FailureCallback| {
//!     let site = Site { file: "demo.rs", line: 1 };
//!     check("1 == 2", site, fail, || evaluate(capture(1).equal(2)));
//! });
//! let runner = Runner::new(Buffer::new());
//! let summary = runner.run(&registry);
//! assert!(!summary.passed());
//! assert_eq!(
//!     runner.reporter().contents(),
//!     "*****FAILED: arith at: \ndemo.rs:1\n1 == 2 [ 1 == 2 ]\n",
//! );
//! ```
//! Everything is sequential: cases run one after the other on the calling
//! thread, and the assertions of a case run in order. There is no timeout,
//! a case that never returns blocks the run.

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

pub mod check;
pub mod expr;
pub mod logging;
pub mod ops;
pub mod registry;
pub mod runner;

pub use check::{check, evaluate, FailureCallback, Outcome, Site};
pub use expr::{capture, Binary, Expression, Leaf, Truthy};
pub use ops::Op;
pub use registry::{Declaration, Registry};
pub use runner::{run, Buffer, Console, Report, Runner, Summary};

// Used by the expansion of `#[case]`.
#[doc(hidden)]
pub use inventory;

/// Generate the `main` function of a test program.
///
/// It installs the logger (see [logging]), runs every declared case with
/// [run], and exits with status `0` if all of them passed, `1` otherwise.
/// ```ignore
/// use candela_macros::{case, check};
///
/// #[case]
/// fn addition() {
///     check!(2 + 2 == 4);
/// }
///
/// candela_sem::main!();
/// ```
#[macro_export]
macro_rules! main {
    () => {
        fn main() {
            $crate::logging::init();
            let summary = $crate::run();
            ::std::process::exit(summary.exit_code());
        }
    };
}
