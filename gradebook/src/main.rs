/*
SPDX-FileCopyrightText: Copyright 2026 LG Electronics Inc.
SPDX-License-Identifier: MIT
*/

use std::path::PathBuf;
use std::process;
use std::sync::Arc;

use clap::{Parser, ValueEnum};
use tracing::{error, info};

use gradebook::config::SeedConfig;
use gradebook::roster::TracingObserver;
use gradebook::stats::CourseStatistics;
use gradebook::{Gradebook, Roster, SortPolicy};

// ── CLI argument definition ───────────────────────────────────────────────────

/// Roster order selectable on the command line.
#[derive(Debug, Clone, Copy, ValueEnum)]
enum OrderArg {
    /// Highest average first.
    AverageDesc,
    /// Lowest average first.
    AverageAsc,
    /// Alphabetical by student key.
    Key,
}

impl From<OrderArg> for SortPolicy {
    fn from(arg: OrderArg) -> Self {
        match arg {
            OrderArg::AverageDesc => SortPolicy::AverageDescending,
            OrderArg::AverageAsc => SortPolicy::AverageAscending,
            OrderArg::Key => SortPolicy::KeyAscending,
        }
    }
}

/// Gradebook roster viewer.
///
/// Example:
///   gradebook --seed demos/seed.yaml --course CS101
#[derive(Debug, Parser)]
#[command(
    name = "gradebook",
    about = "Loads a seed file and prints course rosters in average-grade order",
    long_about = None,
)]
struct Cli {
    /// Path to the YAML seed file.
    #[arg(short = 's', long = "seed")]
    seed: PathBuf,

    /// Only print this course.
    #[arg(short = 'c', long = "course")]
    course: Option<String>,

    /// Roster order.
    #[arg(short = 'o', long = "order", value_enum, default_value_t = OrderArg::AverageDesc)]
    order: OrderArg,

    /// Do not log the roster listing after every enrollment while loading.
    #[arg(short = 'q', long = "quiet", default_value_t = false)]
    quiet: bool,
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() {
    // Level is controlled by the RUST_LOG env-var (e.g. RUST_LOG=debug).
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    info!(
        seed   = %cli.seed.display(),
        course = ?cli.course,
        order  = ?cli.order,
        quiet  = cli.quiet,
        "Configuration"
    );

    // ── Load and apply the seed ───────────────────────────────────────────────
    let seed = match SeedConfig::load_from_file(&cli.seed) {
        Ok(seed) => seed,
        Err(e) => {
            error!("Failed to load seed file: {:#}", e);
            process::exit(1);
        }
    };

    let mut book = Gradebook::new().with_default_order(cli.order.into());
    if !cli.quiet {
        book = book.with_observer(Arc::new(TracingObserver));
    }

    if let Err(e) = seed.apply(&mut book) {
        error!("Failed to apply seed file: {}", e);
        process::exit(1);
    }

    // ── Print rosters ─────────────────────────────────────────────────────────
    match &cli.course {
        Some(key) => match book.course(key) {
            Ok(roster) => print_roster(roster),
            Err(e) => {
                error!("{}", e);
                process::exit(1);
            }
        },
        None => {
            info!("Loaded {} course(s):", book.courses().count());
            for roster in book.courses() {
                print_roster(roster);
            }
        }
    }
}

fn print_roster(roster: &Roster) {
    let stats = CourseStatistics::from_roster(roster);
    info!(
        "[{key}]  year={year}  students={count}  class_avg={avg:.2}  high={high:.2}  low={low:.2}",
        key = stats.course_key,
        year = stats.academic_year,
        count = stats.student_count,
        avg = stats.class_average,
        high = stats.highest_average,
        low = stats.lowest_average,
    );
    for (rank, student) in roster.enumerate().enumerate() {
        info!("  {}. {}", rank + 1, student);
    }
}
