use candela_macros::{case, check};

fn fib(n: u64) -> u64 {
    (0..n).fold((0, 1), |(a, b), _| (b, a + b)).0
}

fn parse_port(s: &str) -> u16 {
    s.parse().unwrap_or_else(|e| panic!("invalid port {s:?}: {e}"))
}

#[case]
fn fibonacci() {
    check!(fib(0) == 0);
    check!(fib(10) == 55);
    check!(fib(12) - 1 == 143);
    // Wrong on purpose: reported as `fib(20) == 6764 [ 6765 == 6764 ]`.
    check!(fib(20) == 6764);
}

#[case]
fn strings() {
    let name = String::from("candela");
    check!(name.len() == 7);
    check!(name == "chandelier");
    check!(name.starts_with("cand") && name.ends_with('a'));
}

#[case]
fn ports() {
    check!(parse_port("8080") == 8080);
    // Aborts the case: the rest of its assertions are skipped.
    check!(parse_port("http") == 80);
    check!(parse_port("443") == 443);
}

#[case]
fn bits() {
    let flags = 0b1010_u8;
    check!(flags >> 1 == 0b101);
    check!(flags & 0b10);
    check!(flags.count_ones() < 2);
}

// Run with `CANDELA_LOG=debug` to follow the runner.
candela_sem::main!();
