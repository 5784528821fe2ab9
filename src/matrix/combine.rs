//! Поэлементные операции над матрицами одинакового размера
//!
//! Арифметика выполняется с переполнением по модулю 2^64,
//! одинаково в debug и release сборках.

use super::types::{Element, Matrix};
use std::ops::{Add, Sub};

fn zip_with(a: &Matrix, b: &Matrix, op: fn(Element, Element) -> Element) -> Matrix {
    assert_eq!(a.dim(), b.dim(), "elementwise operands must have equal dimension");
    let data = a
        .as_slice()
        .iter()
        .zip(b.as_slice())
        .map(|(&x, &y)| op(x, y))
        .collect();
    Matrix::from_raw(a.dim(), data)
}

/// C = A + B
pub fn add(a: &Matrix, b: &Matrix) -> Matrix {
    zip_with(a, b, Element::wrapping_add)
}

/// C = A - B
pub fn sub(a: &Matrix, b: &Matrix) -> Matrix {
    zip_with(a, b, Element::wrapping_sub)
}

impl Add for &Matrix {
    type Output = Matrix;

    fn add(self, rhs: &Matrix) -> Matrix {
        add(self, rhs)
    }
}

impl Sub for &Matrix {
    type Output = Matrix;

    fn sub(self, rhs: &Matrix) -> Matrix {
        sub(self, rhs)
    }
}
