//! Модуль для работы с матрицами
//!
//! Предоставляет:
//! - Тип квадратной целочисленной матрицы
//! - Поэлементные операции и разбиение на квадранты
//! - Умножение методом Штрассена и эталонное умножение

mod types;
pub mod combine;
pub mod operations;
pub mod quadrants;
pub mod strassen;

pub use types::{Element, Matrix, MatrixType};
pub use operations::{
    compare_results, initialize_matrices, initialize_matrices_with, naive_multiply,
};
pub use quadrants::{split, join, Quadrants};
pub use strassen::{multiply, MultiplyStats, Strassen, StrassenConfig, DEFAULT_THRESHOLD};
