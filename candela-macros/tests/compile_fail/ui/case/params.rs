use candela_macros::case;

#[case]
fn with_params(n: u32) {}

fn main() {}
