//! Рекурсивное умножение матриц методом Штрассена
//!
//! На каждом уровне рекурсии выполняется семь умножений матриц
//! половинного размера вместо восьми, что дает O(n^log2(7)) операций.

use super::combine::{add, sub};
use super::operations::direct_product;
use super::quadrants::{join, pad_to, split, truncate};
use super::types::Matrix;
use crate::error::{MatrixError, Result};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};

/// Порог рекурсии по умолчанию: матрицы 1x1 и 2x2 умножаются напрямую
pub const DEFAULT_THRESHOLD: usize = 2;

/// Параметры умножителя
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StrassenConfig {
    /// Матрицы размерности не больше порога умножаются по определению
    pub threshold: usize,
}

impl Default for StrassenConfig {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
        }
    }
}

/// Счетчики одного вызова умножения
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MultiplyStats {
    /// Скалярные умножения в базовых случаях
    pub scalar_multiplications: u64,
    /// Вызовы рекурсивной процедуры, включая верхний
    pub recursive_calls: u64,
    /// Наибольшая глубина рекурсии (верхний вызов имеет глубину 0)
    pub max_depth: usize,
    /// Сколько раз нечетная размерность дополнялась до четной
    pub padded_levels: u64,
}

/// Умножитель Штрассена
#[derive(Debug, Clone, Copy, Default)]
pub struct Strassen {
    config: StrassenConfig,
}

impl Strassen {
    /// Создает умножитель с проверенной конфигурацией
    pub fn new(config: StrassenConfig) -> Result<Self> {
        if config.threshold == 0 {
            return Err(MatrixError::InvalidConfig {
                field: "threshold",
                reason: "recursion threshold must be at least 1".to_string(),
            });
        }
        Ok(Self { config })
    }

    /// Текущая конфигурация
    pub fn config(&self) -> &StrassenConfig {
        &self.config
    }

    /// Вычисляет A * B
    ///
    /// Размерности проверяются один раз, до начала рекурсии.
    pub fn multiply(&self, a: &Matrix, b: &Matrix) -> Result<Matrix> {
        self.multiply_with_stats(a, b).map(|(product, _)| product)
    }

    /// Вычисляет A * B и возвращает счетчики операций
    pub fn multiply_with_stats(
        &self,
        a: &Matrix,
        b: &Matrix,
    ) -> Result<(Matrix, MultiplyStats)> {
        if a.dim() != b.dim() {
            warn!(
                left = a.dim(),
                right = b.dim(),
                "refusing to multiply matrices of different dimensions"
            );
            return Err(MatrixError::shape_mismatch(a.dim(), b.dim()));
        }

        debug!(dim = a.dim(), threshold = self.config.threshold, "strassen multiply");
        let mut stats = MultiplyStats::default();
        let product = self.recurse(a, b, 0, &mut stats);
        debug!(
            scalar_multiplications = stats.scalar_multiplications,
            recursive_calls = stats.recursive_calls,
            max_depth = stats.max_depth,
            "strassen multiply finished"
        );
        Ok((product, stats))
    }

    fn recurse(
        &self,
        a: &Matrix,
        b: &Matrix,
        depth: usize,
        stats: &mut MultiplyStats,
    ) -> Matrix {
        let n = a.dim();
        stats.recursive_calls += 1;
        stats.max_depth = stats.max_depth.max(depth);

        if n <= self.config.threshold {
            stats.scalar_multiplications += (n as u64).pow(3);
            return direct_product(a, b);
        }

        if n % 2 == 1 {
            // лишние нулевые строка и столбец не влияют на левый верхний блок произведения
            debug!(dim = n, depth, "padding odd dimension");
            stats.padded_levels += 1;
            let product = self.seven_products(&pad_to(a, n + 1), &pad_to(b, n + 1), depth, stats);
            return truncate(&product, n);
        }

        self.seven_products(a, b, depth, stats)
    }

    fn seven_products(
        &self,
        a: &Matrix,
        b: &Matrix,
        depth: usize,
        stats: &mut MultiplyStats,
    ) -> Matrix {
        trace!(dim = a.dim(), depth, "splitting");
        let a = split(a);
        let b = split(b);
        let (a11, a12, a21, a22) = (&a.top_left, &a.top_right, &a.bottom_left, &a.bottom_right);
        let (b11, b12, b21, b22) = (&b.top_left, &b.top_right, &b.bottom_left, &b.bottom_right);

        let next = depth + 1;
        let p1 = self.recurse(a11, &sub(b12, b22), next, stats);
        let p2 = self.recurse(&add(a11, a12), b22, next, stats);
        let p3 = self.recurse(&add(a21, a22), b11, next, stats);
        let p4 = self.recurse(a22, &sub(b21, b11), next, stats);
        let p5 = self.recurse(&add(a11, a22), &add(b11, b22), next, stats);
        let p6 = self.recurse(&sub(a12, a22), &add(b21, b22), next, stats);
        let p7 = self.recurse(&sub(a11, a21), &add(b11, b12), next, stats);

        let c11 = add(&sub(&add(&p5, &p4), &p2), &p6);
        let c12 = add(&p1, &p2);
        let c21 = add(&p3, &p4);
        let c22 = sub(&sub(&add(&p5, &p1), &p3), &p7);

        join(&c11, &c12, &c21, &c22)
    }
}

/// Умножает две квадратные матрицы одинаковой размерности методом Штрассена
///
/// ```
/// use strassen::{multiply, Matrix};
///
/// let a = Matrix::from_rows(vec![vec![1, 2], vec![3, 4]])?;
/// let b = Matrix::from_rows(vec![vec![5, 6], vec![7, 8]])?;
/// assert_eq!(multiply(&a, &b)?.to_rows(), vec![vec![19, 22], vec![43, 50]]);
/// # Ok::<(), strassen::MatrixError>(())
/// ```
pub fn multiply(a: &Matrix, b: &Matrix) -> Result<Matrix> {
    Strassen::default().multiply(a, b)
}
