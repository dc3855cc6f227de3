//! A program without any case.

use candela_sem::{Buffer, Registry, Runner};

fn main() {
    let registry = Registry::declared();
    assert!(registry.is_empty());
    let runner = Runner::new(Buffer::new());
    let summary = runner.run(&registry);
    assert!(summary.passed());
    assert_eq!(summary.exit_code(), 0);
    assert_eq!(runner.reporter().lines(), ["All 0 test cases passed."]);
}
