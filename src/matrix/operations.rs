//! Операции над матрицами: эталонное умножение, сравнение, инициализация

use super::types::{Element, Matrix, MatrixType};
use crate::error::{MatrixError, Result};
use rand::Rng;
use rand_distr::{Distribution, Uniform};
use tracing::{info, warn};

/// Граница модуля случайных элементов
///
/// Для матриц до 1024x1024 произведения остаются далеко от переполнения i64.
pub const RANDOM_ELEMENT_BOUND: Element = 1000;

/// Инициализирует матрицы заданного типа и размера
pub fn initialize_matrices(matrix_type: MatrixType, size: usize) -> (Matrix, Matrix) {
    initialize_matrices_with(&mut rand::thread_rng(), matrix_type, size)
}

/// То же, что [`initialize_matrices`], но с заданным генератором
pub fn initialize_matrices_with<R: Rng + ?Sized>(
    rng: &mut R,
    matrix_type: MatrixType,
    size: usize,
) -> (Matrix, Matrix) {
    match matrix_type {
        MatrixType::OnesAndTwos => (
            Matrix::from_fn(size, |_, _| 1),
            Matrix::from_fn(size, |_, _| 2),
        ),
        MatrixType::ThreesAndFours => (
            Matrix::from_fn(size, |_, _| 3),
            Matrix::from_fn(size, |_, _| 4),
        ),
        MatrixType::Sequential => {
            let count = |row: usize, col: usize| (row * size + col + 1) as Element;
            (
                Matrix::from_fn(size, count),
                Matrix::from_fn(size, |row, col| count(row, col) + 100),
            )
        }
        MatrixType::Random => (random_matrix(rng, size), random_matrix(rng, size)),
    }
}

/// Матрица со случайными элементами из [-RANDOM_ELEMENT_BOUND, RANDOM_ELEMENT_BOUND]
pub fn random_matrix<R: Rng + ?Sized>(rng: &mut R, size: usize) -> Matrix {
    let range = Uniform::new_inclusive(-RANDOM_ELEMENT_BOUND, RANDOM_ELEMENT_BOUND);
    Matrix::from_fn(size, |_, _| range.sample(rng))
}

/// Прямое произведение по определению, без проверки размерностей
pub(crate) fn direct_product(a: &Matrix, b: &Matrix) -> Matrix {
    let size = a.dim();
    Matrix::from_fn(size, |i, j| {
        (0..size).fold(0 as Element, |sum, k| {
            sum.wrapping_add(a[(i, k)].wrapping_mul(b[(k, j)]))
        })
    })
}

/// Классическое умножение за O(n^3)
///
/// Используется как эталон для проверки алгоритма Штрассена.
pub fn naive_multiply(a: &Matrix, b: &Matrix) -> Result<Matrix> {
    if a.dim() != b.dim() {
        return Err(MatrixError::shape_mismatch(a.dim(), b.dim()));
    }
    Ok(direct_product(a, b))
}

/// Поэлементно сравнивает два результата умножения
pub fn compare_results(lhs: &Matrix, rhs: &Matrix) -> bool {
    if lhs.dim() != rhs.dim() {
        warn!(left = lhs.dim(), right = rhs.dim(), "results have different dimensions");
        return false;
    }

    let mut max_diff: u64 = 0;
    let mut diff_count = 0usize;
    for (&x, &y) in lhs.as_slice().iter().zip(rhs.as_slice()) {
        if x != y {
            diff_count += 1;
            max_diff = max_diff.max(x.abs_diff(y));
        }
    }

    if diff_count > 0 {
        warn!(diff_count, max_diff, "results differ");
        false
    } else {
        info!(dim = lhs.dim(), "results match");
        true
    }
}
