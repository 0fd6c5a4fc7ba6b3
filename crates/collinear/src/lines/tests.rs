use super::rand::{
    draw_axis_parallel, draw_line_clusters, draw_mixed, draw_scatter, shuffle, Axis,
    AxisParallelCfg, ClusterCfg, ReplayToken, ScatterCfg,
};
use super::types::LineKey;
use super::util::dedup_exact;
use super::*;
use nalgebra::Vector2;

fn pts(raw: &[(f64, f64)]) -> Vec<Vector2<f64>> {
    raw.iter().map(|&(x, y)| Vector2::new(x, y)).collect()
}

#[test]
fn three_collinear_points_form_one_line() {
    let found = find_lines(&pts(&[(0.0, 0.0), (1.0, 1.0), (2.0, 2.0)]));
    assert_eq!(
        found,
        vec![Line::Sloped {
            slope: 1.0,
            intercept: 0.0
        }]
    );

    let found = find_lines(&pts(&[(0.0, 0.0), (-1.0, -1.0), (-2.0, -2.0)]));
    assert_eq!(
        found,
        vec![Line::Sloped {
            slope: 1.0,
            intercept: 0.0
        }]
    );

    // Hand-checked: slope (-53+28)/(9-4) = -5, intercept -28 + 5*4 = -8.
    let found = find_lines(&pts(&[(4.0, -28.0), (9.0, -53.0), (0.0, -8.0)]));
    assert_eq!(
        found,
        vec![Line::Sloped {
            slope: -5.0,
            intercept: -8.0
        }]
    );

    // Hand-checked: slope (2+42)/(-2-9) = -4, intercept -42 + 4*9 = -6.
    let found = find_lines(&pts(&[(9.0, -42.0), (-2.0, 2.0), (3.0, -18.0)]));
    assert_eq!(
        found,
        vec![Line::Sloped {
            slope: -4.0,
            intercept: -6.0
        }]
    );
}

#[test]
fn fewer_than_three_distinct_points_yield_nothing() {
    assert!(find_lines(&[]).is_empty());
    assert!(find_lines(&pts(&[(0.0, 0.0)])).is_empty());
    assert!(find_lines(&pts(&[(0.0, 0.0), (1.0, 1.0)])).is_empty());
    // Duplicates do not count toward the minimum support.
    assert!(find_lines(&pts(&[(0.0, 0.0), (0.0, 0.0), (1.0, 1.0), (1.0, 1.0)])).is_empty());
}

#[test]
fn duplicated_input_changes_nothing() {
    let cfg = ClusterCfg {
        lines: 4,
        points_min: 3,
        points_max: 6,
        bound: 400,
    };
    let base = draw_line_clusters(cfg, ReplayToken { seed: 21, index: 0 }).expect("scenario");
    let mut doubled = base.clone();
    doubled.extend_from_slice(&base);
    assert_eq!(find_lines(&doubled), find_lines(&base));
}

#[test]
fn decimal_coordinates_canonicalize_exactly() {
    // 0.1 + 0.1 + 0.1 != 0.3 in f64; the decimal-exact keys still collapse
    // every pair of these points onto the single line y = 0.1 * x.
    let found = find_lines(&pts(&[(0.0, 0.0), (1.0, 0.1), (2.0, 0.2), (3.0, 0.3)]));
    assert_eq!(
        found,
        vec![Line::Sloped {
            slope: 0.1,
            intercept: 0.0
        }]
    );
}

#[test]
fn derivation_pair_does_not_leak_into_the_key() {
    // Slope 1/3 has no finite decimal or binary expansion; all three pairs
    // must still produce one key.
    let found = find_lines(&pts(&[(0.0, 0.0), (3.0, 1.0), (6.0, 2.0), (9.0, 3.0)]));
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].slope(), 1.0 / 3.0);
    assert_eq!(found[0].intercept(), 0.0);
}

#[test]
fn vertical_clusters_report_the_sentinel() {
    let scenario = draw_axis_parallel(
        Axis::Y,
        AxisParallelCfg::default(),
        ReplayToken { seed: 5, index: 0 },
    )
    .expect("scenario");
    let found = find_lines(&scenario);
    assert_eq!(found.len(), 10);
    assert!(found.iter().all(|l| l.is_vertical()));
    assert!(found.iter().all(|l| l.slope() == f64::INFINITY));
    // Sorted output: the ten constant x-coordinates are strictly increasing.
    let xs: Vec<f64> = found.iter().map(|l| l.intercept()).collect();
    assert!(xs.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn horizontal_clusters_have_zero_slope() {
    let scenario = draw_axis_parallel(
        Axis::X,
        AxisParallelCfg::default(),
        ReplayToken { seed: 6, index: 0 },
    )
    .expect("scenario");
    let found = find_lines(&scenario);
    assert_eq!(found.len(), 10);
    assert!(found.iter().all(|l| l.slope() == 0.0));
    let ys: Vec<f64> = found.iter().map(|l| l.intercept()).collect();
    assert!(ys.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn noise_alone_forms_no_lines() {
    let scenario = draw_scatter(ScatterCfg::default(), ReplayToken { seed: 8, index: 0 })
        .expect("scenario");
    assert_eq!(scenario.len(), 200);
    assert!(find_lines(&scenario).is_empty());
}

#[test]
fn mixed_scenario_reports_each_seeded_line_once() {
    let clusters = ClusterCfg {
        lines: 100,
        points_min: 3,
        points_max: 9,
        bound: 1_000,
    };
    let noise = ScatterCfg {
        count: 400,
        bound: 10_000,
    };
    let mut scenario =
        draw_mixed(clusters, noise, ReplayToken { seed: 77, index: 0 }).expect("scenario");
    shuffle(&mut scenario, ReplayToken { seed: 77, index: 1 });
    assert_eq!(find_lines(&scenario).len(), 100);
}

#[test]
fn input_order_does_not_matter() {
    let clusters = ClusterCfg {
        lines: 8,
        points_min: 3,
        points_max: 5,
        bound: 500,
    };
    let noise = ScatterCfg {
        count: 60,
        bound: 4_000,
    };
    let base = draw_mixed(clusters, noise, ReplayToken { seed: 31, index: 0 }).expect("scenario");
    let expected = find_lines(&base);
    for index in 1..4 {
        let mut permuted = base.clone();
        shuffle(&mut permuted, ReplayToken { seed: 31, index });
        assert_eq!(find_lines(&permuted), expected);
    }
}

#[test]
fn bucketing_agrees_with_the_exhaustive_reference() {
    let clusters = ClusterCfg {
        lines: 6,
        points_min: 3,
        points_max: 5,
        bound: 300,
    };
    let noise = ScatterCfg {
        count: 50,
        bound: 2_000,
    };
    let scenario =
        draw_mixed(clusters, noise, ReplayToken { seed: 13, index: 0 }).expect("scenario");
    let fast = find_lines(&scenario);
    let reference = find_lines_exhaustive(&scenario);
    assert_eq!(fast, reference);
    assert_eq!(fast.len(), 6);
}

#[test]
fn every_reported_line_has_at_least_three_supporters() {
    let clusters = ClusterCfg {
        lines: 5,
        points_min: 3,
        points_max: 7,
        bound: 400,
    };
    let noise = ScatterCfg {
        count: 40,
        bound: 3_000,
    };
    let scenario =
        draw_mixed(clusters, noise, ReplayToken { seed: 19, index: 0 }).expect("scenario");
    let found = find_lines(&scenario);
    assert_eq!(found.len(), 5);

    // k supporters produce k*(k-1)/2 pairs keying the same line, so three
    // supporters show as at least three pairs.
    let exact_pts = dedup_exact(&scenario);
    for line in &found {
        let pairs = {
            let mut count = 0usize;
            for i in 0..exact_pts.len() - 1 {
                for j in i + 1..exact_pts.len() {
                    if LineKey::through(&exact_pts[i], &exact_pts[j]).to_line() == *line {
                        count += 1;
                    }
                }
            }
            count
        };
        assert!(pairs >= 3, "line {line:?} carried by {pairs} pairs");
    }
}

#[test]
fn collinearity_predicates_agree_on_lattice_points() {
    let a = Vector2::new(0.0, 0.0);
    let b = Vector2::new(2.0, 1.0);
    let c = Vector2::new(4.0, 2.0);
    let d = Vector2::new(4.0, 3.0);
    assert!(is_collinear(a, b, c));
    assert!(!is_collinear(a, b, d));
    assert_eq!(cross(a, b, c), 0.0);
    assert!(cross(a, b, d) != 0.0);
}

#[test]
fn non_finite_coordinates_are_discarded() {
    let mut scenario = pts(&[(0.0, 0.0), (1.0, 1.0), (2.0, 2.0)]);
    scenario.push(Vector2::new(f64::NAN, 0.0));
    scenario.push(Vector2::new(f64::INFINITY, f64::INFINITY));
    assert_eq!(
        find_lines(&scenario),
        vec![Line::Sloped {
            slope: 1.0,
            intercept: 0.0
        }]
    );
}

mod properties {
    use super::*;
    use proptest::prelude::*;

    fn small_points() -> impl Strategy<Value = Vec<(i8, i8)>> {
        prop::collection::vec((any::<i8>(), any::<i8>()), 0..24)
    }

    fn to_vectors(raw: &[(i8, i8)]) -> Vec<Vector2<f64>> {
        raw.iter()
            .map(|&(x, y)| Vector2::new(f64::from(x), f64::from(y)))
            .collect()
    }

    proptest! {
        #[test]
        fn agrees_with_exhaustive_reference(raw in small_points()) {
            let points = to_vectors(&raw);
            prop_assert_eq!(find_lines(&points), find_lines_exhaustive(&points));
        }

        #[test]
        fn permutation_invariant(raw in small_points(), seed in any::<u64>()) {
            let mut points = to_vectors(&raw);
            let base = find_lines(&points);
            shuffle(&mut points, ReplayToken { seed, index: 0 });
            prop_assert_eq!(find_lines(&points), base);
        }

        #[test]
        fn duplication_invariant(raw in small_points()) {
            let points = to_vectors(&raw);
            let mut doubled = points.clone();
            doubled.extend_from_slice(&points);
            prop_assert_eq!(find_lines(&doubled), find_lines(&points));
        }
    }
}
