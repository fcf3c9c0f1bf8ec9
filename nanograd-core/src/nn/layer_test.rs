use super::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn test_layer_initialization() -> Result<(), NanogradError> {
    let graph = Graph::new();
    let layer = Layer::new(&graph, 3, 4)?;
    assert_eq!(layer.nout(), 4);
    assert_eq!(layer.nin(), 3);
    assert!(layer.neurons().iter().all(|n| n.nin() == 3));
    Ok(())
}

#[test]
fn test_layer_call_single_neuron_collapses_to_scalar() -> Result<(), NanogradError> {
    let graph = Graph::new();
    let layer = Layer::new(&graph, 2, 1)?;
    let output = layer.forward(&graph.leaves(&[0.5, -0.5]))?;
    let value = output.as_scalar().expect("single neuron should give a scalar");
    assert!((-1.0..=1.0).contains(&value.data()));
    assert_eq!(output.len(), 1);
    Ok(())
}

#[test]
fn test_layer_call_multiple_neurons() -> Result<(), NanogradError> {
    let graph = Graph::new();
    let layer = Layer::new(&graph, 2, 3)?;
    let output = layer.forward(&graph.leaves(&[0.5, -0.5]))?;
    assert!(output.as_scalar().is_none());
    let outs = output.into_vec();
    assert_eq!(outs.len(), 3);
    assert!(outs.iter().all(|o| (-1.0..=1.0).contains(&o.data())));
    Ok(())
}

#[test]
fn test_layer_outputs_follow_neuron_order() -> Result<(), NanogradError> {
    let graph = Graph::new();
    let layer = Layer::with_rng(&graph, 2, 2, &mut StdRng::seed_from_u64(11))?;
    let x = graph.leaves(&[0.3, 0.9]);
    let outs = layer.forward(&x)?.into_vec();
    for (neuron, out) in layer.neurons().iter().zip(&outs) {
        assert_eq!(neuron.forward(&x)?.data(), out.data());
    }
    Ok(())
}

#[test]
fn test_layer_parameters() -> Result<(), NanogradError> {
    let graph = Graph::new();
    let layer = Layer::new(&graph, 3, 2)?;
    // 2 neurons, each with 3 weights and 1 bias
    assert_eq!(layer.parameters().len(), 8);

    let named = layer.named_parameters();
    assert_eq!(named[0].0, "neurons.0.w.0");
    assert_eq!(named[3].0, "neurons.0.b");
    assert_eq!(named[7].0, "neurons.1.b");
    for ((_, named_param), param) in named.iter().zip(layer.parameters()) {
        assert!(named_param.same_node(param));
    }
    Ok(())
}

#[test]
fn test_layer_zero_grad() -> Result<(), NanogradError> {
    let graph = Graph::new();
    let layer = Layer::new(&graph, 3, 2)?;
    for param in layer.parameters() {
        param.set_grad(1.0);
    }
    layer.zero_grad();
    assert!(layer.parameters().iter().all(|p| p.grad() == 0.0));
    Ok(())
}

#[test]
fn test_empty_layer_is_rejected() {
    let graph = Graph::new();
    assert!(matches!(
        Layer::new(&graph, 3, 0),
        Err(NanogradError::InvalidArchitecture(_))
    ));
}
