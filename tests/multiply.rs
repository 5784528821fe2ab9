use ndarray::Array2;
use rand::rngs::StdRng;
use rand::SeedableRng;
use strassen::matrix::{
    initialize_matrices_with, naive_multiply, operations::random_matrix, quadrants, Element,
    MatrixType,
};
use strassen::{multiply, Matrix, MatrixError, Strassen, StrassenConfig};

fn matrix(rows: &[&[Element]]) -> Matrix {
    Matrix::from_rows(rows.iter().map(|row| row.to_vec()).collect()).unwrap()
}

fn ndarray_product(a: &Matrix, b: &Matrix) -> Matrix {
    let product = Array2::from(a).dot(&Array2::from(b));
    Matrix::try_from(&product).unwrap()
}

#[test]
fn two_by_two_scenario() {
    let a = matrix(&[&[1, 2], &[3, 4]]);
    let b = matrix(&[&[5, 6], &[7, 8]]);
    assert_eq!(multiply(&a, &b).unwrap(), matrix(&[&[19, 22], &[43, 50]]));
}

#[test]
fn four_by_four_scenario() {
    let a = matrix(&[&[1, 2, 3, 4], &[5, 6, 7, 8], &[9, 10, 11, 12], &[13, 14, 15, 16]]);
    let b = matrix(&[
        &[17, 18, 19, 20],
        &[21, 22, 23, 24],
        &[25, 26, 27, 28],
        &[29, 30, 31, 32],
    ]);
    let c = multiply(&a, &b).unwrap();
    assert_eq!(c[(0, 0)], 250);
    assert_eq!(
        c,
        matrix(&[
            &[250, 260, 270, 280],
            &[618, 644, 670, 696],
            &[986, 1028, 1070, 1112],
            &[1354, 1412, 1470, 1528],
        ])
    );
    assert_eq!(c, naive_multiply(&a, &b).unwrap());
}

#[test]
fn random_eight_by_eight_matches_naive() {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    for _ in 0..20 {
        let (a, b) = initialize_matrices_with(&mut rng, MatrixType::Random, 8);
        let c = multiply(&a, &b).unwrap();
        let expected = naive_multiply(&a, &b).unwrap();
        for row in 0..8 {
            for col in 0..8 {
                assert_eq!(c[(row, col)], expected[(row, col)], "entry ({}, {})", row, col);
            }
        }
    }
}

#[test]
fn every_dimension_up_to_twenty_matches_ndarray() {
    let mut rng = StdRng::seed_from_u64(42);
    for n in 0..=20 {
        let a = random_matrix(&mut rng, n);
        let b = random_matrix(&mut rng, n);
        assert_eq!(multiply(&a, &b).unwrap(), ndarray_product(&a, &b), "dimension {}", n);
    }
}

#[test]
fn sequential_ten_by_ten_matches_ndarray() {
    let mut rng = StdRng::seed_from_u64(1);
    let (a, b) = initialize_matrices_with(&mut rng, MatrixType::Sequential, 10);
    let c = multiply(&a, &b).unwrap();
    assert_eq!(c.dim(), 10);
    assert_eq!(c, ndarray_product(&a, &b));
}

#[test]
fn identity_is_neutral_on_both_sides() {
    let mut rng = StdRng::seed_from_u64(3);
    for n in [1, 2, 4, 7, 8, 16] {
        let a = random_matrix(&mut rng, n);
        let id = Matrix::identity(n);
        assert_eq!(multiply(&a, &id).unwrap(), a);
        assert_eq!(multiply(&id, &a).unwrap(), a);
    }
}

#[test]
fn mismatched_dimensions_fail_fast() {
    let err = multiply(&Matrix::identity(4), &Matrix::identity(8)).unwrap_err();
    assert_eq!(err, MatrixError::ShapeMismatch { left: 4, right: 8 });
    assert_eq!(err.to_string(), "Shape mismatch: left operand is 4x4, right operand is 8x8");

    // пустая матрица остается обычным значением, а не признаком ошибки
    assert!(multiply(&Matrix::zeros(0), &Matrix::identity(1)).is_err());
    assert!(multiply(&Matrix::zeros(0), &Matrix::zeros(0)).unwrap().is_empty());
}

#[test]
fn split_join_inverse_on_random_matrices() {
    let mut rng = StdRng::seed_from_u64(9);
    for n in [2, 4, 10, 32] {
        let m = random_matrix(&mut rng, n);
        assert_eq!(quadrants::split(&m).join(), m);
    }
}

#[test]
fn operation_count_grows_as_seven_to_the_depth() {
    let multiplier = Strassen::new(StrassenConfig { threshold: 1 }).unwrap();
    let mut rng = StdRng::seed_from_u64(11);
    let mut previous = None;
    for k in 1..=6u32 {
        let n = 1usize << k;
        let a = random_matrix(&mut rng, n);
        let b = random_matrix(&mut rng, n);
        let (_, stats) = multiplier.multiply_with_stats(&a, &b).unwrap();
        assert_eq!(stats.scalar_multiplications, 7u64.pow(k));
        if let Some(prev) = previous {
            // удвоение размера умножает работу на 7, а не на 8
            assert_eq!(stats.scalar_multiplications, prev * 7);
        }
        previous = Some(stats.scalar_multiplications);
    }
}

#[test]
fn thresholds_do_not_change_the_product() {
    let mut rng = StdRng::seed_from_u64(21);
    let a = random_matrix(&mut rng, 24);
    let b = random_matrix(&mut rng, 24);
    let expected = naive_multiply(&a, &b).unwrap();
    for threshold in [1, 2, 3, 5, 8, 24, 64] {
        let multiplier = Strassen::new(StrassenConfig { threshold }).unwrap();
        assert_eq!(multiplier.multiply(&a, &b).unwrap(), expected, "threshold {}", threshold);
    }
}
