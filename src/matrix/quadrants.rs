//! Разбиение матрицы на четверти и обратная сборка

use super::types::{Element, Matrix};

/// Четыре квадранта матрицы размерности `2k`, каждый размерности `k`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Quadrants {
    /// Левый верхний блок
    pub top_left: Matrix,
    /// Правый верхний блок
    pub top_right: Matrix,
    /// Левый нижний блок
    pub bottom_left: Matrix,
    /// Правый нижний блок
    pub bottom_right: Matrix,
}

impl Quadrants {
    /// Собирает квадранты обратно в одну матрицу
    pub fn join(self) -> Matrix {
        join(&self.top_left, &self.top_right, &self.bottom_left, &self.bottom_right)
    }
}

fn block(matrix: &Matrix, row_offset: usize, col_offset: usize, size: usize) -> Matrix {
    Matrix::from_fn(size, |row, col| matrix[(row + row_offset, col + col_offset)])
}

/// Делит матрицу четной размерности `n` на четыре матрицы размерности `n/2`
pub fn split(matrix: &Matrix) -> Quadrants {
    let n = matrix.dim();
    assert!(n % 2 == 0, "split requires an even dimension, got {}", n);
    let half = n / 2;

    Quadrants {
        top_left: block(matrix, 0, 0, half),
        top_right: block(matrix, 0, half, half),
        bottom_left: block(matrix, half, 0, half),
        bottom_right: block(matrix, half, half, half),
    }
}

/// Размещает четыре матрицы размерности `k` в одной матрице размерности `2k`
pub fn join(
    top_left: &Matrix,
    top_right: &Matrix,
    bottom_left: &Matrix,
    bottom_right: &Matrix,
) -> Matrix {
    let half = top_left.dim();
    assert!(
        [top_right, bottom_left, bottom_right]
            .iter()
            .all(|q| q.dim() == half),
        "all quadrants must share one dimension"
    );

    let mut data: Vec<Element> = Vec::with_capacity(4 * half * half);
    for row in 0..half {
        data.extend_from_slice(top_left.row(row));
        data.extend_from_slice(top_right.row(row));
    }
    for row in 0..half {
        data.extend_from_slice(bottom_left.row(row));
        data.extend_from_slice(bottom_right.row(row));
    }
    Matrix::from_raw(2 * half, data)
}

/// Дополняет матрицу нулевыми строками и столбцами до размерности `dim`
pub fn pad_to(matrix: &Matrix, dim: usize) -> Matrix {
    assert!(dim >= matrix.dim(), "cannot pad {}x{} down to {}", matrix.dim(), matrix.dim(), dim);
    let n = matrix.dim();
    Matrix::from_fn(dim, |row, col| {
        if row < n && col < n {
            matrix[(row, col)]
        } else {
            0
        }
    })
}

/// Левый верхний блок размерности `dim`
pub fn truncate(matrix: &Matrix, dim: usize) -> Matrix {
    assert!(dim <= matrix.dim(), "cannot truncate {}x{} up to {}", matrix.dim(), matrix.dim(), dim);
    block(matrix, 0, 0, dim)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sequential(n: usize) -> Matrix {
        Matrix::from_fn(n, |r, c| (r * n + c + 1) as Element)
    }

    #[test]
    fn split_takes_each_block() {
        let m = sequential(4);
        let q = split(&m);
        assert_eq!(q.top_left.to_rows(), vec![vec![1, 2], vec![5, 6]]);
        assert_eq!(q.top_right.to_rows(), vec![vec![3, 4], vec![7, 8]]);
        assert_eq!(q.bottom_left.to_rows(), vec![vec![9, 10], vec![13, 14]]);
        assert_eq!(q.bottom_right.to_rows(), vec![vec![11, 12], vec![15, 16]]);
    }

    #[test]
    fn join_inverts_split() {
        for n in [0, 2, 4, 6, 8, 16] {
            let m = Matrix::from_fn(n, |r, c| (r as Element - 3) * 7 + c as Element * 11);
            assert_eq!(split(&m).join(), m, "dimension {}", n);
        }
    }

    #[test]
    fn split_of_two_by_two_gives_scalars() {
        let q = split(&sequential(2));
        assert_eq!(q.top_left[(0, 0)], 1);
        assert_eq!(q.top_right[(0, 0)], 2);
        assert_eq!(q.bottom_left[(0, 0)], 3);
        assert_eq!(q.bottom_right[(0, 0)], 4);
    }

    #[test]
    #[should_panic(expected = "all quadrants must share one dimension")]
    fn join_rejects_mismatched_quadrants() {
        let two = Matrix::identity(2);
        let _ = join(&two, &Matrix::identity(1), &two, &two);
    }

    #[test]
    #[should_panic(expected = "split requires an even dimension")]
    fn split_rejects_odd_dimension() {
        let _ = split(&sequential(3));
    }

    #[test]
    fn pad_then_truncate_restores_matrix() {
        let m = sequential(3);
        let padded = pad_to(&m, 4);
        assert_eq!(padded.row(3), &[0, 0, 0, 0]);
        assert_eq!(padded.row(0), &[1, 2, 3, 0]);
        assert_eq!(truncate(&padded, 3), m);
    }
}
