use super::*;
use crate::autograd::BackwardOp;
use crate::error::ScalarGradError;

#[test]
fn test_leaf_starts_with_zero_grad() {
    let graph = Graph::new();
    let x = graph.leaf(3.5);
    assert_eq!(x.data(), 3.5);
    assert_eq!(x.grad(), 0.0);
    assert!(x.node().is_leaf());
    assert_eq!(x.node().children().count(), 0);
    assert_eq!(graph.len(), 1);
}

#[test]
fn test_from_literal_promotes_primitive_numbers() -> Result<(), ScalarGradError> {
    let graph = Graph::new();
    assert_eq!(graph.from_literal(3_i32)?.data(), 3.0);
    assert_eq!(graph.from_literal(7_u64)?.data(), 7.0);
    assert_eq!(graph.from_literal(2.5_f32)?.data(), 2.5);
    assert_eq!(graph.from_literal(-0.125_f64)?.data(), -0.125);
    assert_eq!(graph.len(), 4);
    Ok(())
}

#[test]
fn test_from_literal_rejects_non_finite() {
    let graph = Graph::new();
    assert!(matches!(
        graph.from_literal(f64::NAN),
        Err(ScalarGradError::NonNumericLiteral(_))
    ));
    assert!(matches!(
        graph.from_literal(f32::INFINITY),
        Err(ScalarGradError::NonNumericLiteral(_))
    ));
    assert!(graph.is_empty(), "rejected literals must not create nodes");
}

#[test]
fn test_equal_data_nodes_stay_distinct() {
    let graph = Graph::new();
    let a = graph.leaf(1.0);
    let b = graph.leaf(1.0);
    assert_ne!(a.id(), b.id());
    assert!(!a.same_node(b));
    assert!(a.same_node(graph.value(a.id())));

    let z = a * b;
    z.backward();
    assert_eq!(a.grad(), 1.0);
    assert_eq!(b.grad(), 1.0);
}

#[test]
fn test_set_data_only_on_leaves() {
    let graph = Graph::new();
    let x = graph.leaf(1.0);
    let y = x * 2.0;

    assert_eq!(
        graph.set_data(y.id(), 5.0),
        Err(ScalarGradError::NotALeaf { index: y.id().index() })
    );
    assert_eq!(graph.set_data(x.id(), 4.0), Ok(()));
    assert_eq!(x.data(), 4.0);
    // Derived nodes keep the value computed at construction.
    assert_eq!(y.data(), 2.0);
}

#[test]
fn test_get_and_set_data_out_of_bounds() {
    let graph = Graph::new();
    graph.leaf(1.0);
    let missing = NodeId(5);
    assert_eq!(
        graph.get(missing),
        Err(ScalarGradError::IndexOutOfBounds { index: 5, len: 1 })
    );
    assert_eq!(
        graph.set_data(missing, 0.0),
        Err(ScalarGradError::IndexOutOfBounds { index: 5, len: 1 })
    );
}

#[test]
fn test_get_returns_op_record() {
    let graph = Graph::new();
    let x = graph.leaf(2.0);
    let y = x.exp();
    let node = graph.get(y.id()).expect("node exists");
    assert_eq!(node.op(), BackwardOp::Exp(x.id()));
    assert_eq!(node.data(), 2.0_f64.exp());
}

#[test]
fn test_zero_grads_resets_listed_nodes() {
    let graph = Graph::new();
    let a = graph.leaf(2.0);
    let b = graph.leaf(3.0);
    let c = graph.leaf(4.0);
    let y = a * b * c;
    y.backward();
    assert_eq!(a.grad(), 12.0);

    graph.zero_grads([a.id(), b.id()]);
    assert_eq!(a.grad(), 0.0);
    assert_eq!(b.grad(), 0.0);
    assert_eq!(c.grad(), 6.0);

    c.zero_grad();
    assert_eq!(c.grad(), 0.0);
}

#[test]
fn test_truncate_keeps_nodes_below_mark() {
    let mut graph = Graph::new();
    let w = graph.leaf(0.5).id();
    let mark = graph.checkpoint();
    {
        let y = graph.value(w) * 3.0 + 1.0;
        y.backward();
        assert_eq!(graph.len(), 5);
    }
    assert_eq!(graph.grad(w), 3.0);

    graph.truncate(mark);
    assert_eq!(graph.len(), 1);
    assert_eq!(graph.data(w), 0.5);
    assert_eq!(graph.grad(w), 3.0);
}

#[test]
fn test_snapshot_is_in_creation_order() {
    let graph = Graph::new();
    let x = graph.leaf(1.0);
    let _y = x + 2.0;
    let nodes = graph.snapshot();
    assert_eq!(nodes.len(), 3);
    assert!(nodes[0].is_leaf());
    assert!(nodes[1].is_leaf());
    assert_eq!(nodes[2].op(), BackwardOp::Add(NodeId(0), NodeId(1)));
}

#[test]
fn test_value_debug_shows_data_and_grad() {
    let graph = Graph::new();
    let x = graph.leaf(1.5);
    assert_eq!(format!("{:?}", x), "Value(1.5 | 0)");
}
