//! Assertion driver.
//!
//! `check!(E)` expands to a call to [check] with the literal text of `E`,
//! the location of the invocation, the failure callback of the enclosing
//! test case, and a closure that builds and [evaluate]s the node of `E`.
//!
//! Panics are the exception mechanism: a panic while evaluating `E` is
//! reported through the callback and then resumed, which aborts the rest
//! of the test case. The runner is responsible for catching it.

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};

use crate::expr::Expression;

/// Sink for assertion failures.
pub trait FailureCallback {
    /// Report one failure: what went wrong, and where.
    fn fail(&self, message: &str, file: &str, line: u32);
}

impl<F> FailureCallback for F
where
    F: Fn(&str, &str, u32),
{
    fn fail(&self, message: &str, file: &str, line: u32) {
        self(message, file, line);
    }
}

/// Source location of an assertion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Site {
    /// Path of the file, as given by `file!()`.
    pub file: &'static str,
    /// Line, as given by `line!()`.
    pub line: u32,
}

/// Result of evaluating an assertion.
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use]
pub enum Outcome {
    /// The expression holds.
    Pass,
    /// The expression does not hold. Carries the rendering of the node.
    Fail(String),
}

/// Evaluate a node. The node is only rendered if it does not hold.
pub fn evaluate<E: Expression>(node: E) -> Outcome {
    if node.truth() {
        Outcome::Pass
    } else {
        Outcome::Fail(node.as_string())
    }
}

/// Message of a failed assertion: literal text then rendered node.
#[must_use]
pub fn failure_message(text: &str, rendered: &str) -> String {
    format!("{text} [ {rendered} ]")
}

/// Message of an assertion that panicked with a readable payload.
#[must_use]
pub fn exception_message(text: &str, description: &str) -> String {
    format!("{text}\nException thrown: {description}")
}

/// Message of an assertion that panicked with an opaque payload.
#[must_use]
pub fn unknown_exception_message(text: &str) -> String {
    format!("{text}\nAn unknown exception has occurred")
}

/// Text of a panic payload, if it is one of the types produced by `panic!`.
#[must_use]
pub fn describe(payload: &(dyn Any + Send)) -> Option<&str> {
    if let Some(s) = payload.downcast_ref::<&'static str>() {
        Some(*s)
    } else {
        payload.downcast_ref::<String>().map(String::as_str)
    }
}

/// Run one assertion.
///
/// Invokes `fail` at most once: if the outcome is a failure, or if
/// evaluation panicked. In the latter case the panic is resumed after
/// having been reported.
pub fn check<F>(text: &str, site: Site, fail: &dyn FailureCallback, eval: F)
where
    F: FnOnce() -> Outcome,
{
    match panic::catch_unwind(AssertUnwindSafe(eval)) {
        Ok(Outcome::Pass) => {}
        Ok(Outcome::Fail(rendered)) => {
            fail.fail(&failure_message(text, &rendered), site.file, site.line);
        }
        Err(payload) => {
            let message = match describe(&*payload) {
                Some(description) => exception_message(text, description),
                None => unknown_exception_message(text),
            };
            fail.fail(&message, site.file, site.line);
            panic::resume_unwind(payload)
        }
    }
}
