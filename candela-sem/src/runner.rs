//! Sequential execution of a [Registry].
//!
//! Every case runs exactly once, in registry order, with a callback that
//! forwards failures to a [Report]. Each case is isolated: a panic that
//! escapes a case marks it as failed and the run goes on with the next one.

use std::cell::{Cell, RefCell};
use std::panic::{self, AssertUnwindSafe};

use crate::check::describe;
use crate::registry::{Entry, Registry};

/// Line printed for one failed assertion.
#[must_use]
pub fn failure_line(case: &str, file: &str, line: u32, message: &str) -> String {
    format!("*****FAILED: {case} at: \n{file}:{line}\n{message}")
}

/// Line printed after a run without failures.
#[must_use]
pub fn success_line(total: usize) -> String {
    format!("All {total} test cases passed.")
}

/// Output of the runner.
pub trait Report {
    /// One assertion of `case` failed.
    fn failure(&self, case: &str, file: &str, line: u32, message: &str);
    /// The run is over and nothing failed.
    fn success(&self, total: usize);
}

/// Trivial projection.
impl<R: Report + ?Sized> Report for &R {
    fn failure(&self, case: &str, file: &str, line: u32, message: &str) {
        (**self).failure(case, file, line, message);
    }
    fn success(&self, total: usize) {
        (**self).success(total);
    }
}

/// Print to the standard output.
#[derive(Debug, Default, Clone, Copy)]
pub struct Console;

impl Report for Console {
    fn failure(&self, case: &str, file: &str, line: u32, message: &str) {
        println!("{}", failure_line(case, file, line, message));
    }
    fn success(&self, total: usize) {
        println!("{}", success_line(total));
    }
}

/// Keep the output in memory.
#[derive(Debug, Default)]
pub struct Buffer {
    /// Every line that would have been printed.
    lines: RefCell<Vec<String>>,
}

impl Buffer {
    /// Empty buffer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Lines so far.
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        self.lines.borrow().clone()
    }

    /// Output so far, as it would have been printed.
    #[must_use]
    pub fn contents(&self) -> String {
        self.lines
            .borrow()
            .iter()
            .map(|line| format!("{line}\n"))
            .collect()
    }
}

impl Report for Buffer {
    fn failure(&self, case: &str, file: &str, line: u32, message: &str) {
        self.lines
            .borrow_mut()
            .push(failure_line(case, file, line, message));
    }
    fn success(&self, total: usize) {
        self.lines.borrow_mut().push(success_line(total));
    }
}

/// What happened during a run.
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use]
pub struct Summary {
    /// Number of registered cases, which is also the number of cases run.
    total: usize,
    /// Names of the cases that failed, in execution order.
    failed: Vec<String>,
}

impl Summary {
    /// Number of cases run.
    #[must_use]
    pub fn total(&self) -> usize {
        self.total
    }

    /// Whether every case passed.
    #[must_use]
    pub fn passed(&self) -> bool {
        self.failed.is_empty()
    }

    /// Names of the cases that reported at least one failure or panicked.
    #[must_use]
    pub fn failed_cases(&self) -> &[String] {
        &self.failed
    }

    /// Conventional process exit status.
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        i32::from(!self.passed())
    }
}

/// Executor of test cases.
#[derive(Debug, Default)]
pub struct Runner<R> {
    /// Where failures and the final summary go.
    reporter: R,
}

impl<R: Report> Runner<R> {
    /// Runner that reports to `reporter`.
    pub fn new(reporter: R) -> Self {
        Self { reporter }
    }

    /// Access the reporter, e.g. to read a [Buffer] after the run.
    pub fn reporter(&self) -> &R {
        &self.reporter
    }

    /// Run every case of `registry`, in order.
    ///
    /// The success line is only printed if nothing failed; failures are
    /// signaled by their own lines only.
    pub fn run(&self, registry: &Registry) -> Summary {
        let mut failed = Vec::new();
        for entry in registry {
            let _span = tracing::debug_span!("case", name = entry.name()).entered();
            if self.run_case(entry) {
                failed.push(entry.name().to_owned());
            }
        }
        let summary = Summary {
            total: registry.len(),
            failed,
        };
        tracing::info!(
            total = summary.total,
            failed = summary.failed.len(),
            "test run finished"
        );
        if summary.passed() {
            self.reporter.success(summary.total);
        }
        summary
    }

    /// Run one case. Returns whether it failed.
    fn run_case(&self, entry: &Entry) -> bool {
        let failed = Cell::new(false);
        let sink = |message: &str, file: &str, line: u32| {
            self.reporter.failure(entry.name(), file, line, message);
            failed.set(true);
        };
        tracing::debug!("running");
        if let Err(payload) = panic::catch_unwind(AssertUnwindSafe(|| entry.invoke(&sink))) {
            tracing::warn!(
                case = entry.name(),
                reason = describe(&*payload).unwrap_or("opaque panic payload"),
                "test case aborted"
            );
            failed.set(true);
        }
        tracing::debug!(failed = failed.get(), "done");
        failed.get()
    }
}

/// Run every case declared with `#[case]`, printing to the console.
pub fn run() -> Summary {
    Runner::new(Console).run(&Registry::declared())
}
