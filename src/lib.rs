//! Candela: declare test cases with `#[case]`, assert with `check!`,
//! run them all with [run] or [main!].
//!
//! This crate only gathers the runtime (`candela_sem`) and the macros
//! (`candela_macros`) under one name. The macros expand to paths into
//! `::candela_sem`, so a crate declaring cases depends on `candela-sem`
//! directly as well.

pub use candela_macros::{case, check};
pub use candela_sem::*;
