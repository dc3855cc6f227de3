//! The generated entry point exits successfully when every case passes.

use candela_macros::{case, check};

#[case]
fn truth() {
    check!(true);
    check!(1 < 2 && 2 < 3);
}

#[case]
fn arithmetic() {
    let n = 10;
    check!(n / 3 == 3);
    check!(n % 3 == 1);
}

candela_sem::main!();
