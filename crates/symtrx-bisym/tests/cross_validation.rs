use proptest::prelude::*;
use symtrx_bisym::{is_valid, random_full, BisymmetricMatrix};
use symtrx_core::rng::{random_vector, RngHandle};
use symtrx_core::tolerance::{within, QUADFORM_TOLERANCE, STRUCTURAL_TOLERANCE, TRACE_TOLERANCE};
use symtrx_core::DenseMatrix;

proptest! {
    #[test]
    fn wedge_product_matches_dense_extraction(n in 1usize..40, seed in any::<u64>()) {
        let mut rng = RngHandle::from_seed(seed);
        let a = random_full(n, &mut rng).unwrap();
        let b = random_full(n, &mut rng).unwrap();
        let expected = BisymmetricMatrix::from_full(&a.product(&b).unwrap());
        let product = BisymmetricMatrix::from_full(&a)
            .product(&BisymmetricMatrix::from_full(&b))
            .unwrap();
        for (got, want) in product.as_slice().iter().zip(expected.as_slice()) {
            prop_assert!(within(*got, *want, STRUCTURAL_TOLERANCE));
        }
    }

    #[test]
    fn reductions_match_dense(n in 1usize..30, seed in any::<u64>()) {
        let mut rng = RngHandle::from_seed(seed);
        let a = random_full(n, &mut rng).unwrap();
        let b = random_full(n, &mut rng).unwrap();
        let ca = BisymmetricMatrix::from_full(&a);
        let cb = BisymmetricMatrix::from_full(&b);
        prop_assert!(within(ca.trace(), a.trace(), TRACE_TOLERANCE));
        prop_assert!(within(
            ca.trace_product(&cb).unwrap(),
            a.trace_product(&b).unwrap(),
            TRACE_TOLERANCE
        ));
        let x = random_vector(n, &mut rng);
        let y = random_vector(n, &mut rng);
        prop_assert!(within(
            ca.quad_form(&x, &y).unwrap(),
            a.quad_form(&x, &y).unwrap(),
            QUADFORM_TOLERANCE
        ));
    }
}

#[test]
fn corner_matrix_squares_onto_itself() {
    let n = 4;
    let mut full = DenseMatrix::zeros(n).unwrap();
    for (i, j) in [(0, 0), (n - 1, n - 1)] {
        full.set(i, j, 1.0);
    }
    assert!(is_valid(&full));

    let compressed = BisymmetricMatrix::from_full(&full);
    assert_eq!(compressed.as_slice(), &[1.0, 0.0, 0.0, 0.0, 0.0, 0.0]);

    let squared = full.product(&full).unwrap();
    let expected = BisymmetricMatrix::from_full(&squared);
    let product = compressed.product(&compressed).unwrap();
    assert!(product.approx_eq(&expected));
    assert_eq!(product, compressed);
}

#[test]
fn commuting_operands_give_a_bisymmetric_product() {
    let mut rng = RngHandle::from_seed(77);
    let a = random_full(9, &mut rng).unwrap();
    let squared = a.product(&a).unwrap();
    assert!(is_valid(&squared));

    let ca = BisymmetricMatrix::from_full(&a);
    let restored = ca.product(&ca).unwrap().to_full().unwrap();
    for i in 0..9 {
        for j in 0..9 {
            assert!(within(restored.get(i, j), squared.get(i, j), STRUCTURAL_TOLERANCE));
        }
    }
}

#[test]
fn general_product_is_only_centrosymmetric() {
    let mut rng = RngHandle::from_seed(78);
    let a = random_full(6, &mut rng).unwrap();
    let b = random_full(6, &mut rng).unwrap();
    let product = a.product(&b).unwrap();
    assert!(symtrx_centro::is_valid(&product));
    assert!(!is_valid(&product));
}
