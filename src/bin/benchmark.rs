//! Сравнение производительности метода Штрассена и классического умножения
use anyhow::{Context, Result};
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use prettytable::{row, Table};
use strassen::{
    matrix::{
        compare_results, initialize_matrices, naive_multiply, MatrixType, DEFAULT_THRESHOLD,
    },
    utils::{init_logging, measure_time},
    Strassen, StrassenConfig,
};
use tracing::info;

#[derive(Parser)]
#[command(name = "benchmark")]
#[command(about = "Compare Strassen multiplication with the cubic-time definition.")]
struct CommandLine {
    /// Matrix dimensions to measure
    #[arg(long, value_delimiter = ',', default_values_t = vec![16usize, 32, 64, 128, 256])]
    sizes: Vec<usize>,
    /// Matrices up to this dimension are multiplied directly
    #[arg(long, default_value_t = DEFAULT_THRESHOLD)]
    threshold: usize,
    /// Runs per size; timings are averaged
    #[arg(long, default_value_t = 3)]
    iterations: u32,
    /// How the input matrices are filled
    #[arg(long, value_enum, default_value_t = MatrixType::Random)]
    fill: MatrixType,
}

/// Результаты замеров для одной размерности
struct Measurement {
    size: usize,
    naive_avg: f64,
    strassen_avg: f64,
    strassen_multiplications: u64,
    results_match: bool,
}

fn main() -> Result<()> {
    let args = CommandLine::parse();
    init_logging();

    let multiplier = Strassen::new(StrassenConfig {
        threshold: args.threshold,
    })?;
    let iterations = args.iterations.max(1);

    info!(sizes = ?args.sizes, threshold = args.threshold, iterations, "starting benchmark");

    let pb = ProgressBar::new(args.sizes.len() as u64 * u64::from(iterations));
    pb.set_style(
        ProgressStyle::default_bar()
            .template(
                "{spinner:.green} [{elapsed_precise}] [{wide_bar:.cyan/blue}] {pos}/{len} {msg}",
            )
            .context("Некорректный шаблон прогресс-бара")?
            .progress_chars("#>-"),
    );

    let mut measurements = Vec::with_capacity(args.sizes.len());
    for &size in &args.sizes {
        pb.set_message(format!("{}x{}", size, size));
        let mut naive_total = 0.0f64;
        let mut strassen_total = 0.0f64;
        let mut strassen_multiplications = 0;
        let mut results_match = true;

        for _ in 0..iterations {
            let (a, b) = initialize_matrices(args.fill, size);

            let (expected, naive_duration) = measure_time(|| naive_multiply(&a, &b));
            let (product, strassen_duration) =
                measure_time(|| multiplier.multiply_with_stats(&a, &b));
            let (product, stats) = product?;

            naive_total += naive_duration.as_secs_f64();
            strassen_total += strassen_duration.as_secs_f64();
            strassen_multiplications = stats.scalar_multiplications;
            results_match &= compare_results(&product, &expected?);
            pb.inc(1);
        }

        measurements.push(Measurement {
            size,
            naive_avg: naive_total / f64::from(iterations),
            strassen_avg: strassen_total / f64::from(iterations),
            strassen_multiplications,
            results_match,
        });
    }
    pb.finish_with_message("done");

    let mut table = Table::new();
    table.add_row(row![
        "Размер",
        "Классический, мс",
        "Штрассен, мс",
        "Умножений (n^3)",
        "Умножений (Штрассен)",
        "Ускорение",
        "Совпадение"
    ]);
    for m in &measurements {
        let speedup = if m.strassen_avg > 0.0 { m.naive_avg / m.strassen_avg } else { 0.0 };
        let naive_multiplications = (m.size as u64).pow(3);
        let matched = if m.results_match { "да" } else { "нет" };
        table.add_row(row![
            format!("{}x{}", m.size, m.size),
            format!("{:.3}", m.naive_avg * 1000.0),
            format!("{:.3}", m.strassen_avg * 1000.0),
            naive_multiplications,
            m.strassen_multiplications,
            format!("{:.2}x", speedup),
            matched
        ]);
    }
    table.printstd();

    if measurements.iter().any(|m| !m.results_match) {
        anyhow::bail!("Результаты метода Штрассена расходятся с классическим умножением");
    }
    Ok(())
}
