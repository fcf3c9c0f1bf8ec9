mod common;

use common::init_logger;
use nanograd_core::nn::{Layer, Mlp, Module, Neuron};
use nanograd_core::utils::testing::check_grads_near;
use nanograd_core::{Graph, NanogradError};
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn test_perceptron_parameter_scenario() -> Result<(), NanogradError> {
    init_logger();
    let graph = Graph::new();
    let mlp = Mlp::new(&graph, 3, &[4, 2])?;
    assert_eq!(mlp.parameters().len(), 3 * 4 + 4 + 4 * 2 + 2);

    let outputs = mlp.forward(&graph.leaves(&[1.0, -2.0, 0.5]))?.into_vec();
    let total = &outputs[0] + &outputs[1];
    total.backward();
    assert!(mlp.parameters().iter().any(|p| p.grad() != 0.0));

    mlp.zero_grad();
    assert!(mlp.parameters().iter().all(|p| p.grad() == 0.0));
    Ok(())
}

#[test]
fn test_squared_error_loss_over_batch() -> Result<(), NanogradError> {
    init_logger();
    let graph = Graph::new();
    let mlp = Mlp::with_rng(&graph, 3, &[4, 4, 1], &mut StdRng::seed_from_u64(1337))?;
    let xs = [
        [2.0, 3.0, -1.0],
        [3.0, -1.0, 0.5],
        [0.5, 1.0, 1.0],
        [1.0, 1.0, -1.0],
    ];
    let ys = [1.0, -1.0, -1.0, 1.0];

    let mut loss = graph.leaf(0.0);
    let mut expected_loss = 0.0;
    for (x, &y) in xs.iter().zip(ys.iter()) {
        let prediction = mlp
            .forward(&graph.leaves(x))?
            .into_scalar()
            .expect("last layer has one neuron");
        expected_loss += (prediction.data() - y).powi(2);
        loss += (prediction - y).pow(2.0);
    }
    assert!((loss.data() - expected_loss).abs() < 1e-12);

    loss.backward();
    // Each parameter is shared by all four samples; gradients must be finite sums.
    assert!(mlp.parameters().iter().all(|p| p.grad().is_finite()));
    Ok(())
}

#[test]
fn test_single_neuron_gradient_by_hand() -> Result<(), NanogradError> {
    init_logger();
    let graph = Graph::new();
    let weights = vec![
        graph.leaf_with_label(-3.0, "w1"),
        graph.leaf_with_label(1.0, "w2"),
    ];
    let bias = graph.leaf_with_label(6.881_373_587_019_543, "b");
    let neuron = Neuron::from_parameters(weights, bias)?;
    let x = graph.leaves(&[2.0, 0.0]);

    let out = neuron.forward(&x)?;
    assert!((out.data() - 0.7071).abs() < 1e-4);
    out.backward();

    let params = neuron.parameters();
    // d out / d n = 1 - tanh(n)^2 = 0.5; weights pick up their input.
    check_grads_near(&params, &[0.5 * 2.0, 0.5 * 0.0, 0.5], 1e-4);
    check_grads_near(&[&x[0], &x[1]], &[0.5 * -3.0, 0.5 * 1.0], 1e-4);
    Ok(())
}

#[test]
fn test_layers_share_one_graph() -> Result<(), NanogradError> {
    let graph = Graph::new();
    let before = graph.len();
    let layer = Layer::new(&graph, 2, 3)?;
    // every parameter is a leaf in the shared arena
    assert_eq!(graph.len(), before + layer.parameters().len());
    assert!(layer
        .parameters()
        .iter()
        .all(|p| p.graph().ptr_eq(&graph)));
    Ok(())
}
