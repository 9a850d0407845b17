use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use hullref::api::{
    compute_checked, draw_point_set, first_outside, Algorithm, GenCfg, HullCfg, HullComputer,
    HullDiff, PointCount, ReplayToken, MAX_BOUND,
};
use hullref::{Hull, Point, PointSet};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::SubscriberBuilder;

mod io;
mod profile;
mod provenance;

use io::{Expectation, HullFormat};

#[derive(Parser)]
#[command(name = "hullref-cli")]
#[command(about = "Reference convex hull test vectors: generate, compute, verify, profile")]
struct Cmd {
    /// Optional run tag; propagated to provenance sidecars and logs
    #[arg(long)]
    tag: Option<String>,

    #[command(subcommand)]
    action: Action,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum AlgoArg {
    GiftWrap,
    MonotoneChain,
}

impl From<AlgoArg> for Algorithm {
    fn from(a: AlgoArg) -> Self {
        match a {
            AlgoArg::GiftWrap => Algorithm::GiftWrap,
            AlgoArg::MonotoneChain => Algorithm::MonotoneChain,
        }
    }
}

#[derive(Subcommand)]
enum Action {
    /// Write random point sets with their expected hulls
    Generate {
        #[arg(long)]
        out: PathBuf,
        #[arg(long, default_value_t = 10)]
        cases: u64,
        #[arg(long, default_value_t = 10)]
        min_points: usize,
        #[arg(long, default_value_t = 100)]
        max_points: usize,
        /// Coordinates are integers in [-bound, bound]
        #[arg(long, default_value_t = 100)]
        bound: i64,
        #[arg(long, default_value_t = 0)]
        seed: u64,
        /// Allow repeated coordinates within a point set
        #[arg(long)]
        allow_duplicates: bool,
    },
    /// Compute the hull of one point-set file
    Hull {
        #[arg(long)]
        input: PathBuf,
        #[arg(long)]
        out: PathBuf,
        #[arg(long, value_enum, default_value_t = HullFormat::Index)]
        format: HullFormat,
        #[arg(long, value_enum, default_value_t = AlgoArg::GiftWrap)]
        algo: AlgoArg,
        /// Collinearity tolerance; 0 keeps predicates exact
        #[arg(long, default_value_t = 0.0)]
        eps: f64,
    },
    /// Compare a stored expectation against the reference hull
    Verify {
        #[arg(long)]
        input: PathBuf,
        #[arg(long)]
        expected: PathBuf,
        /// Also require the canonical vertex order
        #[arg(long)]
        strict_order: bool,
    },
    /// Time every test_data_<i>.csv under a directory
    Profile {
        #[arg(long)]
        dir: PathBuf,
        #[arg(long)]
        log: PathBuf,
    },
    /// Aggregate a profiling log by input size
    Summary {
        #[arg(long)]
        log: PathBuf,
    },
    /// Print a small provenance JSON block
    Report,
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Generate {
            out,
            cases,
            min_points,
            max_points,
            bound,
            seed,
            allow_duplicates,
        } => {
            let cfg = GenCfg {
                count: PointCount::Uniform {
                    min: min_points,
                    max: max_points,
                },
                bound,
                distinct: !allow_duplicates,
            };
            generate(&out, cases, cfg, seed, cmd.tag)
        }
        Action::Hull {
            input,
            out,
            format,
            algo,
            eps,
        } => hull(&input, &out, format, algo, eps),
        Action::Verify {
            input,
            expected,
            strict_order,
        } => verify(&input, &expected, strict_order),
        Action::Profile { dir, log } => run_profile(&dir, &log, cmd.tag),
        Action::Summary { log } => summary(&log),
        Action::Report => report(cmd.tag),
    }
}

#[derive(Serialize)]
struct CaseEntry {
    case: u64,
    points: usize,
    hull: usize,
    data: String,
    expected_index: String,
    expected_coords: String,
}

fn generate(out: &Path, cases: u64, cfg: GenCfg, seed: u64, tag: Option<String>) -> Result<()> {
    tracing::info!(out = %out.display(), cases, seed, bound = cfg.bound, tag = ?tag, "generate");
    if cfg.bound.unsigned_abs() > MAX_BOUND.unsigned_abs() {
        bail!(
            "--bound must be at most {MAX_BOUND} in magnitude (got {})",
            cfg.bound
        );
    }
    std::fs::create_dir_all(out).with_context(|| format!("creating dir {}", out.display()))?;
    let mut entries = Vec::with_capacity(cases as usize);
    let mut outputs = Vec::new();
    for case in 0..cases {
        let points = draw_point_set(cfg, ReplayToken { seed, index: case });
        let run = compute_checked(&points, HullCfg::default())
            .with_context(|| format!("case {case}"))?;

        let data = out.join(format!("test_data_{case}.csv"));
        let by_index = out.join(format!("expected_output_{case}.csv"));
        let by_coords = out.join(format!("expected_hull_{case}.csv"));
        io::write_points(&data, &points)?;
        io::write_hull(&by_index, &run.hull, HullFormat::Index)?;
        io::write_hull(&by_coords, &run.hull, HullFormat::Coords)?;
        tracing::info!(case, n = points.len(), hull = run.hull.len(), "case written");

        entries.push(CaseEntry {
            case,
            points: points.len(),
            hull: run.hull.len(),
            data: file_name(&data),
            expected_index: file_name(&by_index),
            expected_coords: file_name(&by_coords),
        });
        outputs.extend([data, by_index, by_coords]);
    }

    let manifest = out.join("manifest.json");
    std::fs::write(&manifest, serde_json::to_vec_pretty(&entries)?)
        .with_context(|| format!("writing {}", manifest.display()))?;
    let params = serde_json::json!({
        "cases": cases,
        "seed": seed,
        "bound": cfg.bound,
        "distinct": cfg.distinct,
        "count": format!("{:?}", cfg.count),
    });
    let payload = provenance::Payload::new(params, tag).with_outputs(outputs);
    let prov = provenance::write_sidecar(&manifest, payload)?;
    tracing::info!(manifest = %manifest.display(), provenance = %prov.display(), "done");
    Ok(())
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}

fn hull(input: &Path, out: &Path, format: HullFormat, algo: AlgoArg, eps: f64) -> Result<()> {
    if !(eps.is_finite() && eps >= 0.0) {
        bail!("--eps must be a finite, non-negative number (got {eps})");
    }
    let points = io::read_points(input)?;
    let computer = HullComputer::new(HullCfg {
        algorithm: algo.into(),
        eps_orient: eps,
    });
    let run = computer.compute_with_stats(&points)?;
    tracing::info!(
        input = %input.display(),
        n = run.stats.input_len,
        distinct = run.stats.distinct,
        hull = run.hull.len(),
        iterations = run.stats.iterations,
        "hull"
    );
    if eps > 0.0 {
        warn_if_points_outside(&points, &run.hull, eps);
    }
    io::write_hull(out, &run.hull, format)
}

/// A positive tolerance may drop real corners; report the first input point left outside.
fn warn_if_points_outside(points: &PointSet, hull: &Hull, eps: f64) -> Option<usize> {
    let outside = first_outside(hull, points)?;
    tracing::warn!(
        eps,
        index = outside,
        hull = hull.len(),
        "tolerance dropped input points outside the hull"
    );
    Some(outside)
}

fn verify(input: &Path, expected: &Path, strict_order: bool) -> Result<()> {
    let points = io::read_points(input)?;
    let hull = hullref::compute(&points)?;
    let expected_vertices: Vec<Point> = match io::read_expectation(expected)? {
        Expectation::Indices(indices) => indices
            .iter()
            .map(|&i| {
                points
                    .get(i)
                    .with_context(|| format!("index {i} out of range for {} points", points.len()))
            })
            .collect::<Result<_>>()?,
        Expectation::Coords(vertices) => vertices,
    };

    let diff = HullDiff::between(&expected_vertices, hull.vertices());
    if !diff.is_empty() {
        bail!(
            "hull mismatch for {}\nexpected: {:?}\nactual:   {:?}\nmissing:    {:?}\nunexpected: {:?}",
            input.display(),
            expected_vertices,
            hull.vertices(),
            diff.missing,
            diff.unexpected
        );
    }
    let ordered = expected_vertices.as_slice() == hull.vertices();
    if strict_order && !ordered {
        bail!(
            "vertex sets match but order differs for {}\nexpected: {:?}\nactual:   {:?}",
            input.display(),
            expected_vertices,
            hull.vertices()
        );
    }
    tracing::info!(input = %input.display(), hull = hull.len(), canonical_order = ordered, "verified");
    Ok(())
}

fn run_profile(dir: &Path, log: &Path, tag: Option<String>) -> Result<()> {
    tracing::info!(dir = %dir.display(), log = %log.display(), "profile");
    let rows = profile::profile_dir(dir, &HullComputer::default())?;
    if rows.is_empty() {
        tracing::warn!(dir = %dir.display(), "no test_data_<i>.csv files found");
    }
    profile::write_log(log, &rows)?;
    let params = serde_json::json!({ "dir": dir.to_string_lossy(), "cases": rows.len() });
    provenance::write_sidecar(log, provenance::Payload::new(params, tag))?;
    Ok(())
}

fn summary(log: &Path) -> Result<()> {
    let df = profile::summarize(log)?;
    println!("{df}");
    Ok(())
}

fn report(tag: Option<String>) -> Result<()> {
    let obj = serde_json::json!({
        "code_rev": provenance::current_git_rev(),
        "engine_version": hullref::VERSION,
        "tag": tag,
        "params": {},
        "outputs": []
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn small_cfg() -> GenCfg {
        GenCfg {
            count: PointCount::Uniform { min: 10, max: 30 },
            bound: 100,
            distinct: true,
        }
    }

    #[test]
    fn generated_vectors_verify_against_reference() {
        let dir = tempdir().unwrap();
        generate(dir.path(), 3, small_cfg(), 17, None).unwrap();
        for case in 0..3 {
            let data = dir.path().join(format!("test_data_{case}.csv"));
            let by_index = dir.path().join(format!("expected_output_{case}.csv"));
            let by_coords = dir.path().join(format!("expected_hull_{case}.csv"));
            verify(&data, &by_index, true).unwrap();
            verify(&data, &by_coords, true).unwrap();
        }
        let manifest: serde_json::Value =
            serde_json::from_slice(&std::fs::read(dir.path().join("manifest.json")).unwrap())
                .unwrap();
        assert_eq!(manifest.as_array().unwrap().len(), 3);
        assert!(dir.path().join("manifest.provenance.json").exists());
    }

    #[test]
    fn verify_rejects_wrong_expectation() {
        let dir = tempdir().unwrap();
        let data = dir.path().join("test_data_0.csv");
        std::fs::write(&data, "x,y\n0,0\n4,0\n4,4\n0,4\n2,2\n").unwrap();
        let wrong = dir.path().join("expected_output_0.csv");
        std::fs::write(&wrong, "index\n0\n1\n4\n").unwrap();
        let err = verify(&data, &wrong, false).unwrap_err().to_string();
        assert!(err.contains("hull mismatch"), "{err}");

        // Same vertex set, clockwise order.
        let clockwise = dir.path().join("expected_output_1.csv");
        std::fs::write(&clockwise, "index\n0\n3\n2\n1\n").unwrap();
        verify(&data, &clockwise, false).unwrap();
        assert!(verify(&data, &clockwise, true).is_err());

        let out_of_range = dir.path().join("expected_output_2.csv");
        std::fs::write(&out_of_range, "index\n9\n").unwrap();
        assert!(verify(&data, &out_of_range, false).is_err());
    }

    #[test]
    fn hull_command_writes_requested_layout() {
        let dir = tempdir().unwrap();
        let data = dir.path().join("in.csv");
        std::fs::write(&data, "x,y\n1,1\n2,2\n3,3\n").unwrap();
        let out = dir.path().join("out/hull.csv");
        hull(&data, &out, HullFormat::Coords, AlgoArg::MonotoneChain, 0.0).unwrap();
        assert_eq!(std::fs::read_to_string(&out).unwrap(), "x,y\n1,1\n3,3\n");
        assert!(hull(&data, &out, HullFormat::Index, AlgoArg::GiftWrap, -1.0).is_err());
    }

    #[test]
    fn loose_tolerance_reports_points_left_outside() {
        let square = PointSet::from_xy([(0.0, 0.0), (4.0, 0.0), (4.0, 4.0), (0.0, 4.0)]);
        let exact = hullref::compute(&square).unwrap();
        assert_eq!(warn_if_points_outside(&square, &exact, 0.0), None);

        let collapsed = HullComputer::new(HullCfg {
            algorithm: Algorithm::MonotoneChain,
            eps_orient: 1e300,
        })
        .compute(&square)
        .unwrap();
        assert_eq!(collapsed.len(), 2);
        assert_eq!(warn_if_points_outside(&square, &collapsed, 1e300), Some(1));
    }

    #[test]
    fn generate_rejects_bounds_beyond_exact_integers() {
        let dir = tempdir().unwrap();
        let cfg = GenCfg {
            bound: i64::MIN,
            ..small_cfg()
        };
        let err = generate(dir.path(), 1, cfg, 0, None).unwrap_err().to_string();
        assert!(err.contains("--bound"), "{err}");
        assert!(!dir.path().join("test_data_0.csv").exists());
    }
}
