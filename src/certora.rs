use crate::ConstAdder;

use cvlr::prelude::*;

/// Verifies that `apply` returns the operand plus the constant.
#[rule]
pub fn rule_apply_is_correct() {
    let c: u64 = nondet();
    let n: u64 = nondet();
    cvlr::cvlr_assume!(n <= u64::MAX - c);
    let add = ConstAdder::new(c);
    cvlr_assert_eq!(add.apply(n), n + c);
}

/// Verifies that applying the adder leaves its constant untouched.
#[rule]
pub fn rule_constant_is_unchanged() {
    let c: u64 = nondet();
    let n: u64 = nondet();
    cvlr::cvlr_assume!(n <= u64::MAX - c);
    let add = ConstAdder::new(c);
    add.apply(n);
    cvlr_assert_eq!(add.constant(), c);
}

/// Verifies that swapping the constant and the operand gives the same sum.
#[rule]
pub fn rule_apply_commutes() {
    let c: u64 = nondet();
    let n: u64 = nondet();
    cvlr::cvlr_assume!(n <= u64::MAX - c);
    cvlr_assert_eq!(ConstAdder::new(c).apply(n), ConstAdder::new(n).apply(c));
}
