//! Timing log over a directory of test vectors, and its summary.
//!
//! One row per case: `execution_time_ns,iteration_count,array_size,solution_size`.

use anyhow::{Context, Result};
use hullref::api::HullComputer;
use polars::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use crate::io;

/// One profiled case.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProfileRow {
    pub execution_time_ns: u128,
    pub iteration_count: usize,
    pub array_size: usize,
    pub solution_size: usize,
}

/// `test_data_<i>.csv` files under `dir`, ordered by case number.
pub fn case_files(dir: &Path) -> Result<Vec<(u64, PathBuf)>> {
    let mut cases = Vec::new();
    for entry in fs::read_dir(dir).with_context(|| format!("listing {}", dir.display()))? {
        let path = entry?.path();
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };
        let case = name
            .strip_prefix("test_data_")
            .and_then(|rest| rest.strip_suffix(".csv"))
            .and_then(|num| num.parse::<u64>().ok());
        if let Some(case) = case {
            cases.push((case, path));
        }
    }
    cases.sort();
    Ok(cases)
}

/// Hull every case under `dir` and time each computation.
pub fn profile_dir(dir: &Path, computer: &HullComputer) -> Result<Vec<ProfileRow>> {
    let mut rows = Vec::new();
    for (case, path) in case_files(dir)? {
        let points = io::read_points(&path)?;
        let started = Instant::now();
        let run = computer
            .compute_with_stats(&points)
            .with_context(|| format!("case {case}"))?;
        let elapsed = started.elapsed();
        tracing::debug!(case, n = points.len(), hull = run.hull.len(), ?elapsed, "profiled");
        rows.push(ProfileRow {
            execution_time_ns: elapsed.as_nanos(),
            iteration_count: run.stats.iterations,
            array_size: run.stats.input_len,
            solution_size: run.hull.len(),
        });
    }
    Ok(rows)
}

pub fn write_log(path: &Path, rows: &[ProfileRow]) -> Result<()> {
    let time: Vec<i64> = rows
        .iter()
        .map(|r| i64::try_from(r.execution_time_ns).unwrap_or(i64::MAX))
        .collect();
    let iterations: Vec<i64> = rows.iter().map(|r| r.iteration_count as i64).collect();
    let sizes: Vec<i64> = rows.iter().map(|r| r.array_size as i64).collect();
    let solutions: Vec<i64> = rows.iter().map(|r| r.solution_size as i64).collect();
    let mut df = df!(
        "execution_time_ns" => time,
        "iteration_count" => iterations,
        "array_size" => sizes,
        "solution_size" => solutions
    )?;
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let mut file =
        fs::File::create(path).with_context(|| format!("creating {}", path.display()))?;
    CsvWriter::new(&mut file).include_header(true).finish(&mut df)?;
    Ok(())
}

/// Per-`array_size` means of a profiling log, smallest sets first.
pub fn summarize(path: &Path) -> Result<DataFrame> {
    let df = LazyCsvReader::new(path)
        .with_has_header(true)
        .finish()
        .with_context(|| format!("opening {}", path.display()))?
        .group_by([col("array_size")])
        .agg([
            len().alias("runs"),
            col("execution_time_ns").mean().alias("mean_time_ns"),
            col("iteration_count").mean().alias("mean_iterations"),
            col("solution_size").mean().alias("mean_solution_size"),
        ])
        .sort(["array_size"], SortMultipleOptions::default())
        .collect()?;
    Ok(df)
}
