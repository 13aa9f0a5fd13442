use approx::assert_relative_eq;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tensor_rs::prelude::*;

fn random_tensor(rng: &mut StdRng, shape: &[usize]) -> Tensor {
    let size: usize = shape.iter().product();
    let data = (0..size).map(|_| rng.gen_range(-10.0f32..10.0)).collect();
    Tensor::from_shape_vec(shape, data).unwrap()
}

/// Every coordinate tuple of `shape` in row-major order.
fn coords(shape: &[usize]) -> Vec<Vec<usize>> {
    let mut out = vec![vec![]];
    for &dim in shape {
        out = out
            .into_iter()
            .flat_map(|prefix| {
                (0..dim).map(move |i| {
                    let mut c = prefix.clone();
                    c.push(i);
                    c
                })
            })
            .collect();
    }
    out
}

#[test]
fn test_constructor_by_shape() {
    let t = Tensor::new(&[2, 3]);
    assert_eq!(t.shape(), &[2, 3]);
    assert_eq!(t.size(), 6);
    assert_eq!(t.data().len(), 6);
    assert!(t.data().iter().all(|&x| x == 0.0));
}

#[test]
fn test_constructor_by_1d_data() {
    let t = Tensor::from_nested(vec![1.0, 2.0, 3.0]).unwrap();
    assert_eq!(t.shape(), &[3]);
    assert_eq!(t.size(), 3);
    assert_eq!(t.element(&[1]).unwrap(), 2.0);
}

#[test]
fn test_constructor_by_2d_data() {
    let t = Tensor::from_nested(vec![vec![1.0, 2.0], vec![3.0, 4.0], vec![5.0, 6.0]]).unwrap();
    assert_eq!(t.shape(), &[3, 2]);
    assert_eq!(t.size(), 6);
    assert_eq!(t.element(&[1, 0]).unwrap(), 3.0);
}

#[test]
fn test_constructor_by_3d_data() {
    let t = Tensor::from_nested([
        [[1.0, 2.0], [3.0, 4.0], [5.0, 6.0]],
        [[7.0, 8.0], [9.0, 10.0], [11.0, 12.0]],
    ])
    .unwrap();
    assert_eq!(t.shape(), &[2, 3, 2]);
    assert_eq!(t.size(), 12);
    assert_eq!(t.element(&[1, 2, 1]).unwrap(), 12.0);
}

#[test]
fn test_scalar_addition() {
    let t = Tensor::from_nested([[1.0, 2.0], [3.0, 4.0]]).unwrap();
    let result = &t + 5.0;
    assert_eq!(result.element(&[0, 0]).unwrap(), 6.0);
    assert_eq!(result.element(&[1, 1]).unwrap(), 9.0);
}

#[test]
fn test_row_major_matches_literal() {
    let nested = vec![
        vec![vec![0.5, 1.5, 2.5, 3.5], vec![4.5, 5.5, 6.5, 7.5]],
        vec![vec![8.5, 9.5, 10.5, 11.5], vec![12.5, 13.5, 14.5, 15.5]],
        vec![vec![16.5, 17.5, 18.5, 19.5], vec![20.5, 21.5, 22.5, 23.5]],
    ];
    let t = Tensor::from_nested(nested.clone()).unwrap();
    assert_eq!(t.shape(), &[3, 2, 4]);

    for c in coords(t.shape()) {
        assert_eq!(t.element(&c).unwrap(), nested[c[0]][c[1]][c[2]] as f32);
    }
}

#[test]
fn test_size_is_product_of_shape() {
    for shape in [vec![], vec![4], vec![2, 5], vec![3, 0, 2], vec![2, 3, 4, 1]] {
        let t = Tensor::new(&shape);
        let product: usize = shape.iter().product();
        assert_eq!(t.size(), product);
        assert_eq!(t.data().len(), t.size());
    }
}

#[test]
fn test_elementwise_matches_scalar_arithmetic() {
    let mut rng = StdRng::seed_from_u64(7);
    let shape = [3, 4, 2];
    let a = random_tensor(&mut rng, &shape);
    let b = random_tensor(&mut rng, &shape).map(|x| if x == 0.0 { 1.0 } else { x });
    let s = 2.5f32;

    let sum = (&a + &b).unwrap();
    let diff = (&a - &b).unwrap();
    let prod = (&a * &b).unwrap();
    let quot = (&a / &b).unwrap();
    for result in [
        &sum,
        &diff,
        &prod,
        &quot,
        &(&a + s),
        &(&a - s),
        &(&a * s),
        &(&a / s),
    ] {
        assert_eq!(result.shape(), a.shape());
    }

    for c in coords(&shape) {
        let (x, y) = (a.element(&c).unwrap(), b.element(&c).unwrap());
        assert_eq!(sum.element(&c).unwrap(), x + y);
        assert_eq!(diff.element(&c).unwrap(), x - y);
        assert_eq!(prod.element(&c).unwrap(), x * y);
        assert_relative_eq!(quot.element(&c).unwrap(), x / y);
        assert_eq!((&a + s).element(&c).unwrap(), x + s);
        assert_eq!((&a - s).element(&c).unwrap(), x - s);
        assert_eq!((&a * s).element(&c).unwrap(), x * s);
        assert_relative_eq!((&a / s).element(&c).unwrap(), x / s);
    }
}

#[test]
fn test_operators_are_pure() {
    let mut rng = StdRng::seed_from_u64(42);
    let a = random_tensor(&mut rng, &[4, 3]);
    let b = random_tensor(&mut rng, &[4, 3]);
    let (a_before, b_before) = (a.clone(), b.clone());

    let _ = (&a + &b).unwrap();
    let _ = (&a - &b).unwrap();
    let _ = (&a * &b).unwrap();
    let _ = (&a / &b).unwrap();
    let _ = &a * 3.0;

    let bits = |t: &Tensor| t.data().iter().map(|x| x.to_bits()).collect::<Vec<_>>();
    assert_eq!(bits(&a), bits(&a_before));
    assert_eq!(bits(&b), bits(&b_before));
    assert_eq!(a.shape(), a_before.shape());
}

#[test]
fn test_mismatch_rejection() {
    let a = Tensor::new(&[2, 3]);
    let b = Tensor::new(&[2, 3, 1]);
    let ops: [fn(&Tensor, &Tensor) -> TensorResult<Tensor>; 4] =
        [Tensor::add, Tensor::sub, Tensor::mul, Tensor::div];
    for op in ops {
        match op(&a, &b) {
            Err(TensorError::ShapeMismatch { lhs, rhs, .. }) => {
                assert_eq!(lhs, vec![2, 3]);
                assert_eq!(rhs, vec![2, 3, 1]);
            }
            other => panic!("expected shape mismatch, got {:?}", other),
        }
    }
}

#[test]
fn test_out_of_range_rejection() {
    let mut t = Tensor::from_nested([[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]]).unwrap();

    assert!(matches!(
        t.element(&[2, 0]),
        Err(TensorError::IndexOutOfRange { axis: 0, index: 2, size: 2 })
    ));
    assert!(matches!(
        t.element(&[0, 3]),
        Err(TensorError::IndexOutOfRange { axis: 1, index: 3, size: 3 })
    ));
    assert!(matches!(
        t.element(&[1]),
        Err(TensorError::RankMismatch { expected: 2, got: 1 })
    ));
    assert!(matches!(
        t.set(&[0, 0, 0], 1.0),
        Err(TensorError::RankMismatch { expected: 2, got: 3 })
    ));

    // failed accesses leave the tensor untouched
    assert_eq!(t.data(), &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
}

#[test]
fn test_write_through_coordinates() {
    let mut t = Tensor::new(&[2, 2, 2]);
    for (i, c) in coords(t.shape()).into_iter().enumerate() {
        *t.element_mut(&c).unwrap() = i as f32;
    }
    assert_eq!(t.data(), &[0.0, 1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0]);
}

#[test]
fn test_jagged_literal_rejected() {
    let err = Tensor::from_nested(vec![vec![1.0, 2.0], vec![3.0, 4.0, 5.0]]).unwrap_err();
    assert!(matches!(err, TensorError::MalformedLiteral { depth: 1, .. }));
}

#[cfg(feature = "serde")]
#[test]
fn test_literal_from_json() {
    let literal: Literal = serde_json::from_str("[[[1, 2]], [[3, 4]]]").unwrap();
    let t = Tensor::from_nested(literal).unwrap();
    assert_eq!(t.shape(), &[2, 1, 2]);
    assert_eq!(t.element(&[1, 0, 1]).unwrap(), 4.0);
}

#[test]
fn test_clone_is_independent() {
    let a = Tensor::from_nested([1.0, 2.0]).unwrap();
    let mut b = a.clone();
    b.set(&[0], 100.0).unwrap();
    assert_eq!(a.element(&[0]).unwrap(), 1.0);
    assert_eq!(b.element(&[0]).unwrap(), 100.0);
}
