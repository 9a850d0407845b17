//! CSV persistence of point sets and hulls.
//!
//! Layouts (header row + one record per row):
//! - point set: `x,y`
//! - hull by index: `index`
//! - hull by coordinates: `x,y`
//!
//! Coordinates are written as integers when every value is integral, which
//! keeps files readable by consumers that parse integers only.

use anyhow::{bail, Context, Result};
use hullref::{Hull, Point, PointSet};
use polars::prelude::*;
use std::fs::{self, File};
use std::path::Path;

/// Which hull representation a file carries.
#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum HullFormat {
    /// 0-based indices into the input (`index` column)
    Index,
    /// Vertex coordinates (`x,y` columns)
    Coords,
}

/// Hull expectation read back from disk.
#[derive(Clone, Debug, PartialEq)]
pub enum Expectation {
    Indices(Vec<usize>),
    Coords(Vec<Point>),
}

fn read_frame(path: &Path) -> Result<DataFrame> {
    let df = LazyCsvReader::new(path)
        .with_has_header(true)
        .with_infer_schema_length(Some(100))
        .finish()
        .with_context(|| format!("opening {}", path.display()))?
        .collect()
        .with_context(|| format!("reading {}", path.display()))?;
    Ok(df)
}

fn f64_column(df: &DataFrame, name: &str) -> Result<Vec<Option<f64>>> {
    let series = df
        .column(name)
        .with_context(|| format!("missing column `{name}`"))?
        .cast(&DataType::Float64)?;
    Ok(series.f64()?.into_iter().collect())
}

/// Reads an `x,y` file into a point set. Empty cells are rejected.
pub fn read_points(path: &Path) -> Result<PointSet> {
    let df = read_frame(path)?;
    let xs = f64_column(&df, "x")?;
    let ys = f64_column(&df, "y")?;
    PointSet::from_optional(xs.into_iter().zip(ys))
        .with_context(|| format!("points in {}", path.display()))
}

/// Reads a hull file, detecting the layout from its header.
pub fn read_expectation(path: &Path) -> Result<Expectation> {
    let df = read_frame(path)?;
    if df.column("index").is_ok() {
        let series = df.column("index")?.cast(&DataType::Int64)?;
        let mut indices = Vec::with_capacity(series.len());
        for (row, v) in series.i64()?.into_iter().enumerate() {
            match v {
                Some(i) if i >= 0 => indices.push(i as usize),
                Some(i) => bail!("negative index {i} in row {row} of {}", path.display()),
                None => bail!("empty index in row {row} of {}", path.display()),
            }
        }
        return Ok(Expectation::Indices(indices));
    }
    let points = read_points(path)?;
    Ok(Expectation::Coords(points.points().to_vec()))
}

fn create(path: &Path) -> Result<File> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating dir {}", parent.display()))?;
        }
    }
    File::create(path).with_context(|| format!("creating {}", path.display()))
}

fn write_frame(path: &Path, df: &mut DataFrame) -> Result<()> {
    let mut file = create(path)?;
    CsvWriter::new(&mut file)
        .include_header(true)
        .finish(df)
        .with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}

/// Largest magnitude below which every integer is exact in `f64`.
const EXACT_INT: f64 = 9_007_199_254_740_992.0;

fn all_integral(points: &[Point]) -> bool {
    points
        .iter()
        .flat_map(|p| [p.x, p.y])
        .all(|v| v.fract() == 0.0 && v.abs() < EXACT_INT)
}

fn coords_frame(points: &[Point]) -> Result<DataFrame> {
    let df = if all_integral(points) {
        let xs: Vec<i64> = points.iter().map(|p| p.x as i64).collect();
        let ys: Vec<i64> = points.iter().map(|p| p.y as i64).collect();
        df!("x" => xs, "y" => ys)?
    } else {
        let xs: Vec<f64> = points.iter().map(|p| p.x).collect();
        let ys: Vec<f64> = points.iter().map(|p| p.y).collect();
        df!("x" => xs, "y" => ys)?
    };
    Ok(df)
}

pub fn write_points(path: &Path, points: &PointSet) -> Result<()> {
    let mut df = coords_frame(points.points())?;
    write_frame(path, &mut df)
}

pub fn write_hull(path: &Path, hull: &Hull, format: HullFormat) -> Result<()> {
    let mut df = match format {
        HullFormat::Index => {
            let idx: Vec<i64> = hull.indices().iter().map(|&i| i as i64).collect();
            df!("index" => idx)?
        }
        HullFormat::Coords => coords_frame(hull.vertices())?,
    };
    write_frame(path, &mut df)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn points_and_both_hull_layouts_round_trip() {
        let dir = tempdir().unwrap();
        let ps = PointSet::from_xy([(0.0, 0.0), (4.0, 0.0), (4.0, 4.0), (0.0, 4.0), (2.0, 2.0)]);
        let hull = hullref::compute(&ps).unwrap();

        let data = dir.path().join("cases/test_data_0.csv");
        write_points(&data, &ps).unwrap();
        assert_eq!(read_points(&data).unwrap(), ps);
        let text = fs::read_to_string(&data).unwrap();
        assert!(text.starts_with("x,y\n0,0\n"));

        let by_index = dir.path().join("expected_output_0.csv");
        write_hull(&by_index, &hull, HullFormat::Index).unwrap();
        assert_eq!(
            read_expectation(&by_index).unwrap(),
            Expectation::Indices(vec![0, 1, 2, 3])
        );

        let by_coords = dir.path().join("expected_hull_0.csv");
        write_hull(&by_coords, &hull, HullFormat::Coords).unwrap();
        assert_eq!(
            read_expectation(&by_coords).unwrap(),
            Expectation::Coords(hull.vertices().to_vec())
        );
    }

    #[test]
    fn real_coordinates_stay_floats() {
        let dir = tempdir().unwrap();
        let ps = PointSet::from_xy([(0.5, -1.25), (2.0, 3.0)]);
        let path = dir.path().join("p.csv");
        write_points(&path, &ps).unwrap();
        assert_eq!(read_points(&path).unwrap(), ps);
    }

    #[test]
    fn missing_cell_is_invalid_input() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bad.csv");
        fs::write(&path, "x,y\n1,2\n3,\n").unwrap();
        let err = read_points(&path).unwrap_err();
        let root = err.root_cause().to_string();
        assert!(root.contains("index 1"), "{root}");
    }
}
