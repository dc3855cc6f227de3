//! Declared cases run once each, in declaration order.

use std::cell::RefCell;

use candela_macros::{case, check};
use candela_sem::{Buffer, Registry, Runner};

thread_local! {
    static TRACE: RefCell<Vec<&'static str>> = const { RefCell::new(Vec::new()) };
}

fn visit(name: &'static str) {
    TRACE.with(|t| t.borrow_mut().push(name));
}

#[case]
fn zeta() {
    visit("zeta");
    check!(1 + 1 == 2);
}

#[case]
fn alpha() {
    visit("alpha");
}

#[case]
fn middle() {
    visit("middle");
    check!(2 * 3 == 6);
}

fn main() {
    let registry = Registry::declared();
    let names: Vec<&str> = registry.iter().map(|e| e.name()).collect();
    assert_eq!(names, ["zeta", "alpha", "middle"]);

    let runner = Runner::new(Buffer::new());
    let summary = runner.run(&registry);
    assert!(summary.passed());
    assert_eq!(summary.total(), 3);
    assert_eq!(runner.reporter().lines(), ["All 3 test cases passed."]);
    TRACE.with(|t| assert_eq!(*t.borrow(), ["zeta", "alpha", "middle"]));
}
