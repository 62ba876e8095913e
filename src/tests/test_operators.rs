use approx::assert_relative_eq;

use crate::graph::Edge;
use crate::operators::*;

#[test]
fn test_distances() {
    let a = [1.0, 2.0, 3.0];
    let b = [4.0, 6.0, 3.0];
    assert_relative_eq!(squared_euclidean_distance(&a, &b), 25.0);
    assert_relative_eq!(euclidean_distance(&a, &b), 5.0);
    assert_relative_eq!(squared_euclidean_distance(&a, &a), 0.0);
}

#[test]
fn test_cosine_distance() {
    assert_relative_eq!(cosine_distance(&[1.0, 0.0], &[2.0, 0.0]), 0.0);
    assert_relative_eq!(cosine_distance(&[1.0, 0.0], &[0.0, 3.0]), 1.0);
    assert_relative_eq!(cosine_distance(&[1.0, 0.0], &[-1.0, 0.0]), 2.0);
    // zero vector is orthogonal to everything
    assert_relative_eq!(cosine_distance(&[0.0, 0.0], &[1.0, 1.0]), 1.0);
}

#[test]
fn test_weight_functions() {
    let e = Edge::new(0, 1, 2.0);
    assert_eq!(use_weights_of_one(&e), 1.0);

    let gaussian = use_gaussian_weights(0.5);
    assert_relative_eq!(gaussian(&e), (-1.0f64).exp() as f32);
    assert_relative_eq!(gaussian(&Edge::new(0, 1, 0.0)), 1.0);
}

#[test]
fn test_weight_kernels() {
    assert_eq!(WeightKernel::Ones.weight(123.0), 1.0);
    assert_relative_eq!(
        WeightKernel::Gaussian { gamma: 0.5 }.weight(2.0),
        (-1.0f64).exp() as f32
    );
    // 1 / (1 + (2/1)^2) = 0.2
    assert_relative_eq!(WeightKernel::Rational { sigma: 1.0, p: 2.0 }.weight(2.0), 0.2);

    let e = Edge::new(3, 4, 2.0);
    let k = WeightKernel::Rational { sigma: 2.0, p: 1.0 };
    assert_relative_eq!(k.edge_weight(&e), 0.5);
}

#[test]
fn test_kernels_decrease_with_distance() {
    for kernel in [
        WeightKernel::Gaussian { gamma: 0.3 },
        WeightKernel::Rational { sigma: 0.5, p: 2.0 },
    ] {
        let mut last = f32::INFINITY;
        for d in [0.0, 0.1, 0.5, 1.0, 4.0] {
            let w = kernel.weight(d);
            assert!(w < last, "{:?} not decreasing at {}", kernel, d);
            assert!(w > 0.0);
            last = w;
        }
    }
}
