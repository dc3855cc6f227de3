//! Failures are reported per assertion, panics abort only their own case.

use candela_macros::{case, check};
use candela_sem::{Buffer, Registry, Runner};

fn divide(a: i32, b: i32) -> i32 {
    if b == 0 {
        panic!("division by zero");
    }
    a / b
}

#[case]
fn mismatch() {
    check!(1 == 2);
    check!(2 + 2 == 4);
    check!(2 + 2 == 5);
}

#[case]
fn aborted() {
    check!(divide(4, 0) == 0);
    check!(1 == 3);
}

#[case]
fn fine() {
    check!(divide(4, 2) == 2);
}

fn main() {
    let registry = Registry::declared();
    let runner = Runner::new(Buffer::new());
    let summary = runner.run(&registry);
    assert_eq!(summary.total(), 3);
    assert_eq!(summary.failed_cases(), ["mismatch", "aborted"]);
    assert_eq!(summary.exit_code(), 1);

    let lines = runner.reporter().lines();
    assert_eq!(lines.len(), 3);
    assert!(lines[0].starts_with("*****FAILED: mismatch at: \n"));
    assert!(lines[0].ends_with("\n1 == 2 [ 1 == 2 ]"));
    assert!(lines[1].ends_with("\n2 + 2 == 5 [ 4 == 5 ]"));
    assert!(lines[2].starts_with("*****FAILED: aborted at: \n"));
    assert!(lines[2].ends_with("\ndivide(4, 0) == 0\nException thrown: division by zero"));
    assert!(!runner.reporter().contents().contains("test cases passed"));
}
