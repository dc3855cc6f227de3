use candela_macros::{case, check};

#[case]
fn nothing_to_check() {
    check!();
}

fn main() {}
