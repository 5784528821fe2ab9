//! Демонстрация умножения матриц методом Штрассена

use anyhow::{Context, Result};
use clap::Parser;
use serde::Deserialize;
use std::fs;
use std::path::PathBuf;
use strassen::{
    matrix::{
        compare_results, initialize_matrices, naive_multiply, Element, MatrixType,
        DEFAULT_THRESHOLD,
    },
    utils::{init_logging, measure_time},
    Matrix, Strassen, StrassenConfig,
};
use tracing::info;

#[derive(Parser)]
#[command(name = "strassen")]
#[command(about = "Multiply square integer matrices with Strassen's algorithm.")]
struct CommandLine {
    /// Matrices up to this dimension are multiplied directly
    #[arg(long, default_value_t = DEFAULT_THRESHOLD)]
    threshold: usize,
    /// JSON file with two matrices: { "a": [[..]], "b": [[..]] }
    #[arg(long, short)]
    input: Option<PathBuf>,
    /// Write the product as JSON to this file
    #[arg(long, short)]
    output: Option<PathBuf>,
    /// Generate two matrices of this dimension instead of reading a file
    #[arg(long, conflicts_with = "input")]
    size: Option<usize>,
    /// How generated matrices are filled
    #[arg(long, value_enum, default_value_t = MatrixType::Random)]
    fill: MatrixType,
    /// Check the product against the cubic-time definition
    #[arg(long)]
    verify: bool,
}

#[derive(Deserialize)]
struct MatrixPair {
    a: Matrix,
    b: Matrix,
}

fn print_matrix(name: &str, matrix: &Matrix) {
    println!("\nMatrix {} ({}x{}):", name, matrix.dim(), matrix.dim());
    print!("{}", matrix);
}

fn run(
    multiplier: &Strassen,
    label: &str,
    a: &Matrix,
    b: &Matrix,
    verify: bool,
) -> Result<Matrix> {
    print_matrix(&format!("A{}", label), a);
    print_matrix(&format!("B{}", label), b);

    let (product, duration) = measure_time(|| multiplier.multiply_with_stats(a, b));
    let (c, stats) = product
        .with_context(|| format!("Не удалось перемножить A{} и B{}", label, label))?;
    print_matrix(&format!("C{} = A{} * B{}", label, label, label), &c);

    info!(
        dim = c.dim(),
        scalar_multiplications = stats.scalar_multiplications,
        recursive_calls = stats.recursive_calls,
        elapsed = ?duration,
        "product computed"
    );

    if verify {
        let expected = naive_multiply(a, b)?;
        if !compare_results(&c, &expected) {
            anyhow::bail!("Результат для C{} расходится с классическим умножением", label);
        }
    }
    Ok(c)
}

fn main() -> Result<()> {
    let args = CommandLine::parse();
    init_logging();

    let multiplier = Strassen::new(StrassenConfig {
        threshold: args.threshold,
    })?;

    let product = if let Some(path) = &args.input {
        let text = fs::read_to_string(path)
            .with_context(|| format!("Не удалось прочитать {}", path.display()))?;
        let pair: MatrixPair = serde_json::from_str(&text)
            .with_context(|| format!("Некорректные матрицы в {}", path.display()))?;
        run(&multiplier, "", &pair.a, &pair.b, args.verify)?
    } else if let Some(size) = args.size {
        let (a, b) = initialize_matrices(args.fill, size);
        run(&multiplier, "", &a, &b, args.verify)?
    } else {
        // встроенные сценарии: 2x2, 4x4 и 10x10 с нечетной размерностью на втором уровне
        let a1 = Matrix::from_rows(vec![vec![1, 2], vec![3, 4]])?;
        let b1 = Matrix::from_rows(vec![vec![5, 6], vec![7, 8]])?;
        run(&multiplier, "1", &a1, &b1, args.verify)?;

        let a2 = Matrix::from_fn(4, |row, col| (row * 4 + col + 1) as Element);
        let b2 = Matrix::from_fn(4, |row, col| (row * 4 + col + 17) as Element);
        run(&multiplier, "2", &a2, &b2, args.verify)?;

        let (a3, b3) = initialize_matrices(MatrixType::Sequential, 10);
        run(&multiplier, "3", &a3, &b3, args.verify)?
    };

    if let Some(path) = &args.output {
        let json = serde_json::to_string_pretty(&product)?;
        fs::write(path, json).with_context(|| format!("Не удалось записать {}", path.display()))?;
        info!(path = %path.display(), "product written");
    }

    Ok(())
}
