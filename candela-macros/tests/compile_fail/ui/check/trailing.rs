use candela_macros::{case, check};

#[case]
fn two_expressions() {
    check!(1 == 1, 2 == 2);
}

fn main() {}
