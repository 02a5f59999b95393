use super::*;
use crate::utils::testing::check_scalar_near;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn build(graph: &Graph, sizes: &[usize], activation: Activation) -> Mlp {
    let mut rng = StdRng::seed_from_u64(23);
    Mlp::new(graph, &mut rng, 3, sizes, activation).expect("valid architecture")
}

#[test]
fn test_parameter_count_for_reference_architecture() {
    let graph = Graph::new();
    let mlp = build(&graph, &[10, 5, 4, 1], Activation::Tanh);
    // 10*(3+1) + 5*(10+1) + 4*(5+1) + 1*(4+1)
    assert_eq!(mlp.parameters().len(), 124);
    assert_eq!(graph.len(), 124);
    assert_eq!(mlp.layer_sizes(), vec![10, 5, 4, 1]);
    assert_eq!(mlp.n_inputs(), 3);
    assert_eq!(mlp.n_outputs(), 1);
    assert_eq!(mlp.activation(), Activation::Tanh);
}

#[test]
fn test_layers_chain_fan_in() {
    let graph = Graph::new();
    let mlp = build(&graph, &[4, 2], Activation::Relu);
    let fan_in: Vec<usize> = mlp.layers().iter().map(|l| l.in_features()).collect();
    assert_eq!(fan_in, vec![3, 4]);
    assert!(mlp.layers()[1]
        .neurons()
        .iter()
        .all(|n| n.n_inputs() == 4 && n.activation() == Activation::Relu));
}

#[test]
fn test_same_seed_same_network() {
    let first = Graph::new();
    let second = Graph::new();
    let a = build(&first, &[3, 1], Activation::Sigmoid);
    let b = build(&second, &[3, 1], Activation::Sigmoid);
    let weights = |mlp: &Mlp, graph: &Graph| {
        mlp.parameters().iter().map(|p| p.data(graph)).collect::<Vec<_>>()
    };
    assert_eq!(weights(&a, &first), weights(&b, &second));
}

#[test]
fn test_named_parameters_are_hierarchical() {
    let graph = Graph::new();
    let mlp = build(&graph, &[2, 1], Activation::Tanh);
    let names: Vec<String> = mlp.named_parameters().into_iter().map(|(n, _)| n).collect();
    assert_eq!(names.len(), 2 * 4 + 3);
    assert_eq!(names[0], "layer0.neuron0.weight.0");
    assert_eq!(names[3], "layer0.neuron0.bias");
    assert_eq!(names.last().map(String::as_str), Some("layer1.neuron0.bias"));
}

#[test]
fn test_single_output_is_unwrapped() {
    let graph = Graph::new();
    let mlp = build(&graph, &[4, 1], Activation::Tanh);
    let output = mlp.predict(&graph, &[1.0, -2.0, 0.5]).expect("forward");
    let value = output.clone().into_single().expect("single output");
    assert!(value.data().abs() <= 1.0);
    assert_eq!(output.data(), vec![value.data()]);
}

#[test]
fn test_multiple_outputs_stay_a_sequence() {
    let graph = Graph::new();
    let mlp = build(&graph, &[4, 2], Activation::Sigmoid);
    let output = mlp.predict(&graph, &[1.0, -2.0, 0.5]).expect("forward");
    assert!(output.clone().into_single().is_none());
    assert_eq!(output.into_vec().len(), 2);
}

#[test]
fn test_predict_matches_manual_forward() {
    let graph = Graph::new();
    let mlp = build(&graph, &[1], Activation::Identity);
    let neuron = &mlp.layers()[0].neurons()[0];
    let inputs = [0.5, -1.0, 2.0];
    let expected = neuron.bias().data(&graph)
        + neuron
            .weights()
            .iter()
            .zip(inputs)
            .map(|(w, x)| w.data(&graph) * x)
            .sum::<f64>();
    let output = mlp.predict(&graph, &inputs).expect("forward");
    check_scalar_near(output.data()[0], expected, 1e-12);
}

#[test]
fn test_backward_reaches_every_parameter() {
    let graph = Graph::new();
    let mlp = build(&graph, &[3, 1], Activation::Tanh);
    let output = mlp
        .predict(&graph, &[0.3, -0.2, 0.9])
        .expect("forward")
        .into_single()
        .expect("single output");
    output.backward();
    let touched = mlp
        .parameters()
        .iter()
        .filter(|p| p.grad(&graph) != 0.0)
        .count();
    assert_eq!(touched, mlp.parameters().len());
}

#[test]
fn test_invalid_architectures() {
    let graph = Graph::new();
    let mut rng = StdRng::seed_from_u64(0);
    for (n_inputs, sizes) in [(0, vec![1]), (3, vec![]), (3, vec![2, 0, 1])] {
        assert!(matches!(
            Mlp::new(&graph, &mut rng, n_inputs, &sizes, Activation::Tanh),
            Err(ScalarGradError::InvalidArchitecture(_))
        ));
    }
}

#[test]
fn test_wrong_input_size() {
    let graph = Graph::new();
    let mlp = build(&graph, &[2, 1], Activation::Tanh);
    assert!(matches!(
        mlp.predict(&graph, &[1.0]),
        Err(ScalarGradError::InputSizeMismatch { expected: 3, actual: 1 })
    ));
}
