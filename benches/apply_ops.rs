use criterion::{criterion_group, Criterion};

use robdd::{apply_op, build, reduce, BoolOp, Formula, VariableOrder};

fn chain(prefix: &str, n: usize, order: &mut Vec<robdd::Variable>) -> std::rc::Rc<Formula> {
    let vars: Vec<_> = (0..n).map(|i| format!("{prefix}{i}")).collect();
    for v in &vars {
        order.push(v.as_str().into());
    }
    vars.iter()
        .map(|v| Formula::var(v.as_str()))
        .reduce(Formula::and)
        .expect("n must be at least 1")
}

fn two_eight_variable_conjunctions() -> (robdd::Bdd, robdd::Bdd) {
    let mut order_vars = Vec::new();
    let left = chain("a", 8, &mut order_vars);
    let right = chain("b", 8, &mut order_vars);
    let order = VariableOrder::new(order_vars);

    let a = reduce(build(&left, Some(order.clone())).unwrap()).0;
    let b = reduce(build(&right, Some(order)).unwrap())
        .0
        .rebuild_into(&a)
        .unwrap();
    (a, b)
}

fn apply_and_over_conjunction_chains(c: &mut Criterion) {
    let (a, b) = two_eight_variable_conjunctions();
    c.bench_function("apply AND over two 8-variable conjunction chains", |b_| {
        b_.iter(|| apply_op(BoolOp::And, &a, &b).unwrap())
    });
}

fn apply_xor_over_conjunction_chains(c: &mut Criterion) {
    let (a, b) = two_eight_variable_conjunctions();
    c.bench_function("apply XOR over two 8-variable conjunction chains", |b_| {
        b_.iter(|| apply_op(BoolOp::Xor, &a, &b).unwrap())
    });
}

criterion_group!(
    apply_ops,
    apply_and_over_conjunction_chains,
    apply_xor_over_conjunction_chains
);
