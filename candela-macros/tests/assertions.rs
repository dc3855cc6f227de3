//! Test cases called directly with a recording callback.

use std::cell::{Cell, RefCell};
use std::panic;

use candela_macros::{case, check};
use candela_sem::FailureCallback;

#[derive(Default)]
struct Recorder {
    reports: RefCell<Vec<(String, String, u32)>>,
}

impl FailureCallback for Recorder {
    fn fail(&self, message: &str, file: &str, line: u32) {
        self.reports
            .borrow_mut()
            .push((message.to_owned(), file.to_owned(), line));
    }
}

impl Recorder {
    fn messages(&self) -> Vec<String> {
        self.reports.borrow().iter().map(|r| r.0.clone()).collect()
    }
}

#[case]
fn arithmetic_holds() {
    check!(2 + 2 == 4);
    let x = 3;
    check!(x * 2 + 1 == 7);
    check!(x << 2 == 12);
    check!(x % 2 != 0);
    check!((x & 1) == 1);
}

#[test]
fn passing_assertions_report_nothing() {
    let rec = Recorder::default();
    arithmetic_holds(&rec);
    assert!(rec.messages().is_empty());
}

#[case]
fn literal_mismatch() {
    check!(1 == 2);
}

#[test]
fn failure_shows_text_and_values() {
    let rec = Recorder::default();
    literal_mismatch(&rec);
    assert_eq!(rec.messages(), ["1 == 2 [ 1 == 2 ]"]);
    assert!(rec.reports.borrow()[0].1.ends_with("assertions.rs"));
}

#[case]
fn variables_are_rendered() {
    let a = 3;
    let b = 4;
    check!(a == b);
    check!(a + 1 < b);
    check!(a >= b);
}

#[test]
fn operands_are_substituted() {
    let rec = Recorder::default();
    variables_are_rendered(&rec);
    assert_eq!(
        rec.messages(),
        ["a == b [ 3 == 4 ]", "a + 1 < b [ 4 < 4 ]", "a >= b [ 3 >= 4 ]"]
    );
}

#[case]
fn reports_its_own_line() {
    let here = line!(); check!(here == 0);
}

#[test]
fn line_is_that_of_the_assertion() {
    let rec = Recorder::default();
    reports_its_own_line(&rec);
    let reports = rec.reports.borrow();
    let (message, file, line) = &reports[0];
    assert_eq!(*message, format!("here == 0 [ {line} == 0 ]"));
    assert_eq!(file, file!());
}

thread_local! {
    static CALLS: Cell<u32> = const { Cell::new(0) };
}

fn bump() -> u32 {
    CALLS.with(|c| {
        c.set(c.get() + 1);
        c.get()
    })
}

#[case]
fn operands_evaluated_once() {
    check!(bump() == 1);
    check!(bump() == 5);
}

#[test]
fn side_effects_happen_once() {
    CALLS.with(|c| c.set(0));
    let rec = Recorder::default();
    operands_evaluated_once(&rec);
    assert_eq!(CALLS.with(Cell::get), 2);
    assert_eq!(rec.messages(), ["bump() == 5 [ 2 == 5 ]"]);
}

#[case]
fn chains_evaluated_once() {
    check!(bump() + 0 == 1);
    check!(true && bump() == 2);
    check!(false && bump() == 100);
    check!(bump() * 2 == 7);
}

#[test]
fn every_path_evaluates_once() {
    CALLS.with(|c| c.set(0));
    let rec = Recorder::default();
    chains_evaluated_once(&rec);
    assert_eq!(CALLS.with(Cell::get), 3);
    assert_eq!(rec.messages(), ["bump() * 2 == 7 [ 6 == 7 ]"]);
}

#[case]
fn shifts_on_unsigned() {
    let n: u32 = 4;
    check!(n << 1 == 8);
    check!(n >> 1 == 2);
    let flags: u8 = 0b1010;
    check!(flags >> 1 == 0b101);
    check!(flags << 1 == 0);
}

#[test]
fn shift_amounts_are_inferred_separately() {
    let rec = Recorder::default();
    shifts_on_unsigned(&rec);
    assert_eq!(rec.messages(), ["flags << 1 == 0 [ 20 == 0 ]"]);
}

#[case]
fn operands_are_not_consumed() {
    let name = String::from("candela");
    check!(name == "candela");
    check!(name.len() == 7);
    check!("candela" == name);
    let owned = name;
    check!(owned != "chandelier");
}

#[test]
fn borrowed_operands() {
    let rec = Recorder::default();
    operands_are_not_consumed(&rec);
    assert!(rec.messages().is_empty());
}

#[case]
fn truthiness() {
    let zero = 0;
    let flag = false;
    check!(zero);
    check!(flag);
    check!(true);
    check!(7);
}

#[test]
fn plain_values_are_judged_on_truthiness() {
    let rec = Recorder::default();
    truthiness(&rec);
    assert_eq!(rec.messages(), ["zero [ 0 ]", "flag [ false ]"]);
}

#[case]
fn logic() {
    let a = 1;
    let b = 3;
    check!(a == 1 && b == 2);
    check!(a == 1 || b == 2);
    check!(a == 2 || b == 2);
}

#[test]
fn logical_operators_collapse_to_bool() {
    let rec = Recorder::default();
    logic(&rec);
    assert_eq!(
        rec.messages(),
        ["a == 1 && b == 2 [ false ]", "a == 2 || b == 2 [ false ]"]
    );
}

fn explode() -> i32 {
    panic!("kaboom")
}

#[case]
fn panics_midway() {
    check!(1 == 1);
    check!(explode() == 1);
    check!(1 == 2);
}

#[test]
fn panic_is_reported_then_propagated() {
    let rec = Recorder::default();
    let res = panic::catch_unwind(panic::AssertUnwindSafe(|| panics_midway(&rec)));
    assert!(res.is_err());
    assert_eq!(rec.messages(), ["explode() == 1\nException thrown: kaboom"]);
}

struct Opaque;

fn throw_opaque() -> bool {
    panic::panic_any(Opaque)
}

#[case]
fn panics_with_opaque_payload() {
    check!(throw_opaque());
}

#[test]
fn opaque_payload_is_unknown() {
    let rec = Recorder::default();
    let res = panic::catch_unwind(panic::AssertUnwindSafe(|| panics_with_opaque_payload(&rec)));
    assert!(res.is_err());
    assert_eq!(
        rec.messages(),
        ["throw_opaque()\nAn unknown exception has occurred"]
    );
}

#[case]
fn short_circuit() {
    check!(false && explode() == 1);
    check!(true || explode() == 1);
}

#[test]
fn skipped_operands_are_not_evaluated() {
    let rec = Recorder::default();
    short_circuit(&rec);
    assert_eq!(rec.messages(), ["false && explode() == 1 [ false ]"]);
}

#[case]
fn closures_are_callbacks() {
    check!(2 * 21 == 42);
    check!(2 * 21 == 24);
}

#[test]
fn closure_callback() {
    let seen = RefCell::new(Vec::new());
    closures_are_callbacks(&|message: &str, _: &str, _: u32| {
        seen.borrow_mut().push(message.to_owned());
    });
    assert_eq!(*seen.borrow(), ["2 * 21 == 24 [ 42 == 24 ]"]);
}
