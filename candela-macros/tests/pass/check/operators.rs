//! Every comparison operator, passing and failing.

use candela_macros::{case, check};
use candela_sem::{Buffer, Registry, Runner};

#[case]
fn comparisons_hold() {
    let (a, b) = (2, 3);
    check!(a == 2);
    check!(a != b);
    check!(a < b);
    check!(a <= 2);
    check!(b > a);
    check!(b >= 3);
}

#[case]
fn comparisons_fail() {
    let (a, b) = (2, 3);
    check!(a == b);
    check!(a != 2);
    check!(b < a);
    check!(b <= a);
    check!(a > b);
    check!(a >= b);
}

fn main() {
    let registry = Registry::declared();
    let runner = Runner::new(Buffer::new());
    let summary = runner.run(&registry);
    assert_eq!(summary.failed_cases(), ["comparisons_fail"]);

    let lines = runner.reporter().lines();
    let rendered: Vec<&str> = lines
        .iter()
        .map(|l| l.rsplit('\n').next().unwrap_or_default())
        .collect();
    assert_eq!(
        rendered,
        [
            "a == b [ 2 == 3 ]",
            "a != 2 [ 2 != 2 ]",
            "b < a [ 3 < 2 ]",
            "b <= a [ 3 <= 2 ]",
            "a > b [ 2 > 3 ]",
            "a >= b [ 2 >= 3 ]",
        ]
    );
}
