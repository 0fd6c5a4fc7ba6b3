//! Draw a mixed scenario and print every detected line.
//!
//! Usage:
//!   cargo run -p collinear --example mixed_scenario

use collinear::prelude::*;

fn main() {
    let clusters = ClusterCfg {
        lines: 8,
        points_min: 3,
        points_max: 6,
        bound: 100,
    };
    let noise = ScatterCfg {
        count: 40,
        bound: 1_000,
    };
    let Some(mut points) = draw_mixed(clusters, noise, ReplayToken { seed: 2026, index: 0 })
    else {
        eprintln!("scenario bounds too tight to fill");
        return;
    };
    shuffle(&mut points, ReplayToken { seed: 2026, index: 1 });

    let lines = find_lines(&points);
    println!("{} points -> {} lines", points.len(), lines.len());
    for line in lines {
        match line {
            Line::Sloped { slope, intercept } => println!("  y = {slope} * x + {intercept}"),
            Line::Vertical { x } => println!("  x = {x}"),
        }
    }
}
