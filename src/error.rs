//! Ошибки операций над матрицами

use thiserror::Error;

/// Результат операций крейта
pub type Result<T> = std::result::Result<T, MatrixError>;

/// Ошибки, возникающие при построении и умножении матриц
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MatrixError {
    /// Размерности операндов не совпадают
    #[error("Shape mismatch: left operand is {left}x{left}, right operand is {right}x{right}")]
    ShapeMismatch {
        /// Размерность левого операнда
        left: usize,
        /// Размерность правого операнда
        right: usize,
    },

    /// Входные данные не образуют квадратную матрицу
    #[error("Invalid shape: {reason}")]
    InvalidShape {
        /// Описание нарушения
        reason: String,
    },

    /// Некорректная конфигурация умножителя
    #[error("Invalid config '{field}': {reason}")]
    InvalidConfig {
        /// Имя поля конфигурации
        field: &'static str,
        /// Причина
        reason: String,
    },
}

impl MatrixError {
    /// Создает ошибку несовпадения размерностей
    pub fn shape_mismatch(left: usize, right: usize) -> Self {
        Self::ShapeMismatch { left, right }
    }

    /// Создает ошибку некорректной формы
    pub fn invalid_shape(reason: impl Into<String>) -> Self {
        Self::InvalidShape {
            reason: reason.into(),
        }
    }
}
