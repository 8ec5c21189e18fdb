use symtrx_centro::{
    random_full, storage_gain, storage_len, CentrosymmetricMatrix, DiagonalMajor, IndexScheme,
    RowMajor,
};
use symtrx_core::{Ran2, RngHandle};

fn assert_round_trip<S: IndexScheme>(n: usize) {
    let mut rng = Ran2::new(n as u64 + 17);
    let full = random_full(n, &mut rng).unwrap();
    let compressed = CentrosymmetricMatrix::<S>::from_full(&full);
    assert_eq!(compressed.as_slice().len(), storage_len(n));
    let restored = compressed.to_full().unwrap();
    for i in 0..n {
        for j in 0..n {
            assert_eq!(restored.get(i, j), full.get(i, j), "{} n={n} ({i},{j})", S::NAME);
        }
    }
}

#[test]
fn extraction_round_trips_both_parities() {
    for n in [1, 2, 5, 6, 7, 100] {
        assert_round_trip::<RowMajor>(n);
        assert_round_trip::<DiagonalMajor>(n);
    }
}

#[test]
fn schemes_convert_without_loss() {
    let mut rng = RngHandle::from_seed(8);
    let full = random_full(11, &mut rng).unwrap();
    let row = CentrosymmetricMatrix::<RowMajor>::from_full(&full);
    let diag: CentrosymmetricMatrix<DiagonalMajor> = row.convert();
    assert_eq!(diag, CentrosymmetricMatrix::<DiagonalMajor>::from_full(&full));
    assert_eq!(diag.convert::<RowMajor>(), row);
    for i in 0..11 {
        for j in 0..11 {
            assert_eq!(row.get(i, j), diag.get(i, j));
        }
    }
}

#[test]
fn compressed_buffer_length_is_checked() {
    assert!(CentrosymmetricMatrix::<RowMajor>::from_compressed(4, vec![0.0; 10]).is_ok());
    assert!(CentrosymmetricMatrix::<RowMajor>::from_compressed(4, vec![0.0; 9]).is_err());
    assert!(CentrosymmetricMatrix::<RowMajor>::zeros(0).is_err());
}

#[test]
fn storage_gain_approaches_two() {
    assert_eq!(storage_gain(1), 1.0);
    assert_eq!(storage_gain(3), 1.5);
    assert!((storage_gain(1000) - 2.0).abs() < 0.01);
}

#[test]
fn display_prints_one_line_per_row() {
    let compressed = CentrosymmetricMatrix::<RowMajor>::zeros(3).unwrap();
    let text = compressed.to_string();
    let rows: Vec<&str> = text.lines().collect();
    assert_eq!(rows.len(), 3);
    assert_eq!(rows[2].split_whitespace().count(), 3);
}
