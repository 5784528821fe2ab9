//! Типы матриц и связанные структуры

use crate::error::{MatrixError, Result};
use ndarray::Array2;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Index;

/// Тип элементов матрицы
pub type Element = i64;

/// Тип заполнения матриц для демонстраций и бенчмарков
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum MatrixType {
    /// Матрицы заполненные 1 и 2
    OnesAndTwos,
    /// Матрицы заполненные 3 и 4
    ThreesAndFours,
    /// A заполнена числами 1, 2, 3, ... по строкам, B = A + 100
    Sequential,
    /// Случайно заполненные матрицы
    Random,
}

/// Квадратная матрица целых чисел размера `dim x dim`
///
/// Данные хранятся построчно. После создания матрица не изменяется:
/// все операции возвращают новое значение.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<Element>>", into = "Vec<Vec<Element>>")]
pub struct Matrix {
    dim: usize,
    data: Vec<Element>,
}

impl Matrix {
    /// Нулевая матрица
    pub fn zeros(dim: usize) -> Self {
        Self {
            dim,
            data: vec![0; dim * dim],
        }
    }

    /// Единичная матрица
    pub fn identity(dim: usize) -> Self {
        Self::from_fn(dim, |row, col| if row == col { 1 } else { 0 })
    }

    /// Строит матрицу, вычисляя каждый элемент по его координатам
    pub fn from_fn<F>(dim: usize, mut f: F) -> Self
    where
        F: FnMut(usize, usize) -> Element,
    {
        let mut data = Vec::with_capacity(dim * dim);
        for row in 0..dim {
            for col in 0..dim {
                data.push(f(row, col));
            }
        }
        Self { dim, data }
    }

    /// Строит матрицу из построчного буфера длины `dim * dim`
    pub fn from_flat(dim: usize, data: Vec<Element>) -> Result<Self> {
        if data.len() != dim * dim {
            return Err(MatrixError::invalid_shape(format!(
                "expected {} elements for a {}x{} matrix, got {}",
                dim * dim,
                dim,
                dim,
                data.len()
            )));
        }
        Ok(Self { dim, data })
    }

    /// Внутренний конструктор без проверки длины буфера
    pub(crate) fn from_raw(dim: usize, data: Vec<Element>) -> Self {
        debug_assert_eq!(data.len(), dim * dim);
        Self { dim, data }
    }

    /// Строит матрицу из списка строк
    ///
    /// Каждая строка должна иметь длину, равную числу строк.
    pub fn from_rows(rows: Vec<Vec<Element>>) -> Result<Self> {
        let dim = rows.len();
        let mut data = Vec::with_capacity(dim * dim);
        for (index, row) in rows.into_iter().enumerate() {
            if row.len() != dim {
                return Err(MatrixError::invalid_shape(format!(
                    "row {} has {} elements, expected {}",
                    index,
                    row.len(),
                    dim
                )));
            }
            data.extend(row);
        }
        Ok(Self { dim, data })
    }

    /// Размерность матрицы (число строк = числу столбцов)
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Пустая ли матрица (размерность 0)
    pub fn is_empty(&self) -> bool {
        self.dim == 0
    }

    /// Элемент в позиции (row, col)
    ///
    /// # Panics
    /// При выходе индекса за границы матрицы.
    pub fn get(&self, row: usize, col: usize) -> Element {
        self[(row, col)]
    }

    /// Срез одной строки
    pub fn row(&self, row: usize) -> &[Element] {
        let start = row * self.dim;
        &self.data[start..start + self.dim]
    }

    /// Итератор по строкам
    pub fn rows(&self) -> impl Iterator<Item = &[Element]> {
        // chunks(0) паникует, поэтому для пустой матрицы берем размер 1
        self.data.chunks(self.dim.max(1))
    }

    /// Построчный буфер элементов
    pub fn as_slice(&self) -> &[Element] {
        &self.data
    }

    /// Копия матрицы в виде списка строк
    pub fn to_rows(&self) -> Vec<Vec<Element>> {
        self.rows().map(<[Element]>::to_vec).collect()
    }
}

impl Index<(usize, usize)> for Matrix {
    type Output = Element;

    fn index(&self, (row, col): (usize, usize)) -> &Element {
        assert!(
            row < self.dim && col < self.dim,
            "index ({}, {}) out of bounds for {}x{} matrix",
            row,
            col,
            self.dim,
            self.dim
        );
        &self.data[row * self.dim + col]
    }
}

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            write!(f, "[ ")?;
            for value in row {
                write!(f, "{} ", value)?;
            }
            writeln!(f, "]")?;
        }
        Ok(())
    }
}

impl TryFrom<Vec<Vec<Element>>> for Matrix {
    type Error = MatrixError;

    fn try_from(rows: Vec<Vec<Element>>) -> Result<Self> {
        Self::from_rows(rows)
    }
}

impl From<Matrix> for Vec<Vec<Element>> {
    fn from(matrix: Matrix) -> Self {
        matrix.to_rows()
    }
}

impl From<&Matrix> for Array2<Element> {
    fn from(matrix: &Matrix) -> Self {
        Array2::from_shape_fn((matrix.dim, matrix.dim), |(row, col)| matrix[(row, col)])
    }
}

impl TryFrom<&Array2<Element>> for Matrix {
    type Error = MatrixError;

    fn try_from(array: &Array2<Element>) -> Result<Self> {
        let (rows, cols) = array.dim();
        if rows != cols {
            return Err(MatrixError::invalid_shape(format!(
                "array is {}x{}, expected a square array",
                rows, cols
            )));
        }
        Ok(Self::from_fn(rows, |row, col| array[[row, col]]))
    }
}
