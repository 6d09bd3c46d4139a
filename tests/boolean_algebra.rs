//! Boolean-algebra laws over reduced BDDs (spec §8 "Boolean algebra").
//!
//! Each variable is built as its own single-variable BDD, then rebuilt into
//! a common store/order so `apply` and `equivalent` can combine them (spec
//! §4.5 (i), §9 "Equivalence cross-store").

use robdd::{build, reduce, Bdd, VariableOrder};

struct Vars {
    a: Bdd,
    b: Bdd,
    c: Bdd,
}

fn three_vars() -> Vars {
    let order = VariableOrder::new(vec!["a".into(), "b".into(), "c".into()]);
    let a = reduce(build(&robdd::Formula::var("a"), Some(order.clone())).unwrap()).0;
    let b = reduce(build(&robdd::Formula::var("b"), Some(order.clone())).unwrap())
        .0
        .rebuild_into(&a)
        .unwrap();
    let c = reduce(build(&robdd::Formula::var("c"), Some(order)).unwrap())
        .0
        .rebuild_into(&a)
        .unwrap();
    Vars { a, b, c }
}

#[test]
fn and_is_commutative() {
    let Vars { a, b, .. } = three_vars();
    let ab = a.and(&b).unwrap();
    let ba = b.and(&a).unwrap();
    assert!(ab.equivalent(&ba).unwrap());
}

#[test]
fn or_is_commutative() {
    let Vars { a, b, .. } = three_vars();
    let ab = a.or(&b).unwrap();
    let ba = b.or(&a).unwrap();
    assert!(ab.equivalent(&ba).unwrap());
}

#[test]
fn xor_is_commutative() {
    let Vars { a, b, .. } = three_vars();
    let ab = a.xor(&b).unwrap();
    let ba = b.xor(&a).unwrap();
    assert!(ab.equivalent(&ba).unwrap());
}

#[test]
fn iff_is_commutative() {
    let Vars { a, b, .. } = three_vars();
    let ab = a.iff(&b).unwrap();
    let ba = b.iff(&a).unwrap();
    assert!(ab.equivalent(&ba).unwrap());
}

#[test]
fn and_is_associative() {
    let Vars { a, b, c } = three_vars();
    let left = a.and(&b).unwrap().and(&c).unwrap();
    let right = a.and(&b.and(&c).unwrap()).unwrap();
    assert!(left.equivalent(&right).unwrap());
}

#[test]
fn or_is_associative() {
    let Vars { a, b, c } = three_vars();
    let left = a.or(&b).unwrap().or(&c).unwrap();
    let right = a.or(&b.or(&c).unwrap()).unwrap();
    assert!(left.equivalent(&right).unwrap());
}

#[test]
fn xor_is_associative() {
    let Vars { a, b, c } = three_vars();
    let left = a.xor(&b).unwrap().xor(&c).unwrap();
    let right = a.xor(&b.xor(&c).unwrap()).unwrap();
    assert!(left.equivalent(&right).unwrap());
}

#[test]
fn iff_is_associative() {
    let Vars { a, b, c } = three_vars();
    let left = a.iff(&b).unwrap().iff(&c).unwrap();
    let right = a.iff(&b.iff(&c).unwrap()).unwrap();
    assert!(left.equivalent(&right).unwrap());
}

#[test]
fn and_distributes_over_or() {
    let Vars { a, b, c } = three_vars();
    let lhs = a.and(&b.or(&c).unwrap()).unwrap();
    let rhs = a.and(&b).unwrap().or(&a.and(&c).unwrap()).unwrap();
    assert!(lhs.equivalent(&rhs).unwrap());
}

#[test]
fn de_morgan_holds_for_and() {
    let Vars { a, b, .. } = three_vars();
    let lhs = a.and(&b).unwrap().not();
    let rhs = a.not().or(&b.not()).unwrap();
    assert!(lhs.equivalent(&rhs).unwrap());
}

#[test]
fn double_negation_is_identity() {
    let Vars { a, .. } = three_vars();
    assert!(a.equivalent(&a.not().not()).unwrap());
}

#[test]
fn or_absorbs_and() {
    let Vars { a, b, .. } = three_vars();
    let lhs = a.or(&a.and(&b).unwrap()).unwrap();
    assert!(lhs.equivalent(&a).unwrap());
}
