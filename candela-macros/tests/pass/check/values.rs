//! Operands of various types.

use candela_macros::{case, check};
use candela_sem::{Buffer, Registry, Runner};

#[derive(Debug, PartialEq)]
struct Celsius(i32);

impl std::fmt::Display for Celsius {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}°C", self.0)
    }
}

#[case]
fn strings() {
    let greeting = String::from("hello");
    check!(greeting == "hello");
    check!(&greeting[1..] == "ello");
    check!('x' < 'y');
}

#[case]
fn floats() {
    let half = 0.5_f64;
    check!(half * 2.0 == 1.0);
    check!(half + 0.25 == 1.0);
}

#[case]
fn user_types() {
    check!(Celsius(20) == Celsius(21));
}

fn main() {
    let registry = Registry::declared();
    let runner = Runner::new(Buffer::new());
    let summary = runner.run(&registry);
    assert_eq!(summary.total(), 3);
    assert_eq!(summary.failed_cases(), ["floats", "user_types"]);

    let contents = runner.reporter().contents();
    assert!(contents.contains("\nhalf + 0.25 == 1.0 [ 0.75 == 1 ]\n"));
    assert!(contents.contains("\nCelsius(20) == Celsius(21) [ 20°C == 21°C ]\n"));
}
