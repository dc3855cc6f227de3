//! Declarations spread across modules, with attributes and visibility.

use candela_sem::Registry;

mod first {
    use candela_macros::{case, check};

    /// Documented case.
    #[case]
    pub fn same_name() {
        check!(1 + 1 == 2);
    }

    #[case]
    #[allow(clippy::eq_op)]
    pub(crate) fn tautology() {
        check!(3 == 3);
    }
}

mod second {
    use candela_macros::{case, check};

    #[case]
    fn same_name() {
        check!(2 - 1 == 1);
    }

    #[case]
    fn explicit_unit() -> () {}
}

fn unexpected(message: &str, _: &str, _: u32) {
    panic!("unexpected failure: {message}");
}

fn main() {
    let registry = Registry::declared();
    assert_eq!(registry.len(), 4);
    let mut names: Vec<&str> = registry.iter().map(|e| e.name()).collect();
    names.sort_unstable();
    assert_eq!(names, ["explicit_unit", "same_name", "same_name", "tautology"]);

    // Still callable as ordinary functions.
    first::same_name(&unexpected);
    first::tautology(&unexpected);
}
