//! Print hull sizes for a few generated test cases.
//!
//! Usage:
//!   cargo run -p hullref --example hull_sizes -- [seed]
//!
//! Prints one line per case: input size, distinct points, hull size, and the
//! canonical vertex indices.

use hullref::api::{draw_point_set, GenCfg, HullComputer, ReplayToken};

fn main() {
    let seed = std::env::args()
        .nth(1)
        .and_then(|s| s.parse::<u64>().ok())
        .unwrap_or(2025);
    let computer = HullComputer::default();
    for index in 0..10 {
        let ps = draw_point_set(GenCfg::default(), ReplayToken { seed, index });
        match computer.compute_with_stats(&ps) {
            Ok(run) => println!(
                "case {index}: n={} distinct={} hull={} indices={:?}",
                run.stats.input_len,
                run.stats.distinct,
                run.hull.len(),
                run.hull.indices()
            ),
            Err(e) => eprintln!("case {index}: {e}"),
        }
    }
}
