use symtrx_bisym::{
    bisym_size, is_valid, random_full, storage_gain, BisymmetricMatrix,
};
use symtrx_centro::RowMajor;
use symtrx_core::{Ran2, RngHandle};

#[test]
fn extraction_round_trips_both_parities() {
    for n in [1, 2, 5, 6, 7, 100] {
        let mut rng = Ran2::new(n as u64);
        let full = random_full(n, &mut rng).unwrap();
        assert!(is_valid(&full), "n={n}");
        let compressed = BisymmetricMatrix::from_full(&full);
        assert_eq!(compressed.as_slice().len(), bisym_size(n));
        assert_eq!(compressed.to_full().unwrap(), full, "n={n}");
    }
}

#[test]
fn every_draw_lands_in_its_own_slot() {
    let n = 7;
    let mut rng = RngHandle::from_seed(3);
    let full = random_full(n, &mut rng).unwrap();
    let compressed = BisymmetricMatrix::from_full(&full);
    let mut values = compressed.as_slice().to_vec();
    values.sort_by(f64::total_cmp);
    values.dedup();
    assert_eq!(values.len(), bisym_size(n));
}

#[test]
fn single_perturbation_is_detected() {
    let mut rng = RngHandle::from_seed(4);
    for n in 2..=10 {
        let mut full = random_full(n, &mut rng).unwrap();
        let bumped = full.get(0, 1) + 1e-6;
        full.set(0, 1, bumped);
        assert!(!is_valid(&full), "n={n}");
    }
}

#[test]
fn centrosymmetric_matrix_is_not_bisymmetric() {
    let mut rng = RngHandle::from_seed(5);
    let full = symtrx_centro::random_full(5, &mut rng).unwrap();
    assert!(symtrx_centro::is_valid(&full));
    assert!(!is_valid(&full));
}

#[test]
fn bridge_to_centrosymmetric_preserves_cells() {
    let mut rng = RngHandle::from_seed(6);
    let full = random_full(8, &mut rng).unwrap();
    let bisym = BisymmetricMatrix::from_full(&full);
    let centro = bisym.to_centrosymmetric::<RowMajor>().unwrap();
    assert_eq!(centro.to_full().unwrap(), full);
}

#[test]
fn buffer_length_and_dimension_are_checked() {
    assert!(BisymmetricMatrix::zeros(0).is_err());
    assert!(BisymmetricMatrix::from_compressed(6, vec![0.0; 12]).is_ok());
    assert!(BisymmetricMatrix::from_compressed(6, vec![0.0; 10]).is_err());
    let a = BisymmetricMatrix::zeros(3).unwrap();
    let b = BisymmetricMatrix::zeros(4).unwrap();
    assert!(a.product(&b).is_err());
    assert!(!a.approx_eq(&b));
}

#[test]
fn storage_gain_approaches_four() {
    assert_eq!(storage_gain(2), 2.0);
    assert!((storage_gain(400) - 4.0).abs() < 0.05);
}
