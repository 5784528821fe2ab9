//! Умножение квадратных целочисленных матриц методом Штрассена

pub mod error;
pub mod matrix;
pub mod utils;

// Реэкспорт основных типов для удобства
pub use error::{MatrixError, Result};
pub use matrix::{multiply, Matrix, MatrixType, Strassen, StrassenConfig};
