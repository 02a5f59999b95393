use crate::autograd::BackwardOp;
use crate::graph::Graph;
use crate::utils::testing::check_scalar_near;

#[test]
fn test_add_forward_and_backward() {
    let graph = Graph::new();
    let a = graph.leaf(2.0);
    let b = graph.leaf(-5.0);
    let c = a + b;
    assert_eq!(c.data(), -3.0);
    assert_eq!(c.node().op(), BackwardOp::Add(a.id(), b.id()));
    c.backward();
    assert_eq!(a.grad(), 1.0);
    assert_eq!(b.grad(), 1.0);
    assert_eq!(c.grad(), 1.0);
}

#[test]
fn test_mul_forward_and_backward() {
    let graph = Graph::new();
    let a = graph.leaf(3.0);
    let b = graph.leaf(4.0);
    let c = a * b;
    assert_eq!(c.data(), 12.0);
    c.backward();
    assert_eq!(a.grad(), 4.0);
    assert_eq!(b.grad(), 3.0);
}

#[test]
fn test_literal_operands_become_leaves() {
    let graph = Graph::new();
    let a = graph.leaf(3.0);
    let c = a + 2.0;
    assert_eq!(c.data(), 5.0);
    assert_eq!(graph.len(), 3);
    match c.node().op() {
        BackwardOp::Add(left, right) => {
            assert_eq!(left, a.id());
            assert!(graph.value(right).node().is_leaf());
            assert_eq!(graph.data(right), 2.0);
        }
        other => panic!("unexpected op {:?}", other),
    }
}

#[test]
fn test_reflected_literal_stays_left_operand() {
    let graph = Graph::new();
    let a = graph.leaf(4.0);
    let c = 10.0 - a;
    assert_eq!(c.data(), 6.0);
    c.backward();
    assert_eq!(a.grad(), -1.0);

    let graph = Graph::new();
    let a = graph.leaf(4.0);
    let c = 2.0 * a;
    match c.node().op() {
        BackwardOp::Mul(left, right) => {
            assert_eq!(graph.data(left), 2.0);
            assert_eq!(right, a.id());
        }
        other => panic!("unexpected op {:?}", other),
    }
    c.backward();
    assert_eq!(a.grad(), 2.0);
}

#[test]
fn test_neg_is_multiplication_by_minus_one() {
    let graph = Graph::new();
    let a = graph.leaf(1.5);
    let c = -a;
    assert_eq!(c.data(), -1.5);
    assert!(matches!(c.node().op(), BackwardOp::Mul(left, _) if left == a.id()));
    c.backward();
    assert_eq!(a.grad(), -1.0);
}

#[test]
fn test_sub_forward_and_backward() {
    let graph = Graph::new();
    let a = graph.leaf(5.0);
    let b = graph.leaf(3.0);
    let c = a - b;
    assert_eq!(c.data(), 2.0);
    // a, b, -1, b*-1, a+(-b)
    assert_eq!(graph.len(), 5);
    c.backward();
    assert_eq!(a.grad(), 1.0);
    assert_eq!(b.grad(), -1.0);
}

#[test]
fn test_div_forward_and_backward() {
    let graph = Graph::new();
    let a = graph.leaf(6.0);
    let b = graph.leaf(2.0);
    let c = a / b;
    check_scalar_near(c.data(), 3.0, 1e-12);
    c.backward();
    check_scalar_near(a.grad(), 0.5, 1e-12);
    check_scalar_near(b.grad(), -1.5, 1e-12);
}

#[test]
fn test_div_by_zero_is_infinite_not_an_error() {
    let graph = Graph::new();
    let a = graph.leaf(1.0);
    let c = a / 0.0;
    assert!(c.data().is_infinite());
}

#[test]
fn test_reflected_div() {
    let graph = Graph::new();
    let a = graph.leaf(4.0);
    let c = 1.0 / a;
    check_scalar_near(c.data(), 0.25, 1e-12);
    c.backward();
    check_scalar_near(a.grad(), -1.0 / 16.0, 1e-12);
}

#[test]
fn test_pow_with_literal_exponent() {
    let graph = Graph::new();
    let a = graph.leaf(3.0);
    let c = a.pow(2.0);
    assert_eq!(c.data(), 9.0);
    c.backward();
    check_scalar_near(a.grad(), 6.0, 1e-12);
}

#[test]
fn test_exp_forward_and_backward() {
    let graph = Graph::new();
    let a = graph.leaf(0.5);
    let c = a.exp();
    check_scalar_near(c.data(), 0.5_f64.exp(), 1e-12);
    c.backward();
    check_scalar_near(a.grad(), 0.5_f64.exp(), 1e-12);
}

#[test]
fn test_self_multiplication_accumulates_both_paths() {
    let graph = Graph::new();
    let x = graph.leaf(-3.0);
    let y = x * x;
    assert_eq!(y.data(), 9.0);
    y.backward();
    assert_eq!(x.grad(), -6.0);
}

#[test]
#[should_panic(expected = "operands belong to different graphs")]
fn test_mixing_graphs_panics() {
    let first = Graph::new();
    let second = Graph::new();
    let _ = first.leaf(1.0) + second.leaf(2.0);
}
