use candela_macros::case;

#[case]
fn fallible() -> i32 {
    0
}

fn main() {}
