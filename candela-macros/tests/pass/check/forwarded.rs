//! Cases and assertions generated by a declarative macro.

use candela_macros::{case, check};
use candela_sem::{Buffer, Registry, Runner};

macro_rules! case_asserting {
    ($name:ident: $e:expr) => {
        #[case]
        fn $name() {
            check!($e);
        }
    };
}

case_asserting!(sum: 1 + 1 == 2);
case_asserting!(product: 2 * 2 == 5);

fn main() {
    let registry = Registry::declared();
    let runner = Runner::new(Buffer::new());
    let summary = runner.run(&registry);
    assert_eq!(summary.failed_cases(), ["product"]);
    let lines = runner.reporter().lines();
    assert!(lines[0].ends_with("\n2 * 2 == 5 [ 4 == 5 ]"));
}
