//! Polar coordinate mapping and arc path construction.
//!
//! All angular charts share one convention: 0° points at 12 o'clock and
//! angles increase clockwise, so sweeps read the way a dashboard user
//! expects. The conversion to the trigonometric frame (`angle − 90°`
//! before `cos`/`sin`) lives only in [`polar_to_cartesian`]; an
//! implementation using the mathematical standard would produce visually
//! rotated charts.

use crate::types::Angle;
use glam::{DVec2, dvec2};

/// Threshold above which an arc takes the long way around.
const LARGE_ARC_DEGREES: f64 = 180.0;

/// Endpoint clamp for full-circle sweeps. A sweep of exactly 360° would
/// put the arc's start and end on the same point and the path would
/// collapse to a zero-length arc; stopping just short keeps the endpoints
/// distinct after coordinate rounding while still reading as a full circle.
const FULL_SWEEP_CLAMP: f64 = 359.99;

/// Map polar coordinates to Cartesian.
///
/// `angle` may be any real number of degrees; it is not normalized.
pub fn polar_to_cartesian(center: DVec2, radius: f64, angle: Angle) -> DVec2 {
    let radians = (angle.raw() - 90.0).to_radians();
    center + radius * dvec2(radians.cos(), radians.sin())
}

/// The SVG large-arc flag for a sweep from `start` to `end`.
///
/// `1` only when the sweep exceeds 180°. This tie-break matters for
/// single-slice (100%) datasets: the naive "always small arc" choice would
/// draw the wedge inverted, as a sliver instead of a full circle.
pub fn large_arc_flag(start: Angle, end: Angle) -> u8 {
    if start.sweep_to(end) > LARGE_ARC_DEGREES {
        1
    } else {
        0
    }
}

/// Clamp the sweep endpoint so a >=360° sweep keeps distinct arc endpoints.
fn clamp_full_sweep(start: Angle, end: Angle) -> Angle {
    if start.sweep_to(end) >= Angle::FULL.raw() {
        Angle(start.raw() + FULL_SWEEP_CLAMP)
    } else {
        end
    }
}

/// Build a closed pie-wedge path: center, line out to the rim, arc back,
/// close.
///
/// `start == end` yields a syntactically valid zero-area path rather than
/// an error; zero-value entries simply draw nothing.
pub fn wedge_path(center: DVec2, radius: f64, start: Angle, end: Angle) -> String {
    let large_arc = large_arc_flag(start, end);
    let end = clamp_full_sweep(start, end);
    let arc_from = polar_to_cartesian(center, radius, end);
    let arc_to = polar_to_cartesian(center, radius, start);

    format!(
        "M {} {} L {} {} A {} {} 0 {} 0 {} {} Z",
        fmt_num(center.x),
        fmt_num(center.y),
        fmt_num(arc_from.x),
        fmt_num(arc_from.y),
        fmt_num(radius),
        fmt_num(radius),
        large_arc,
        fmt_num(arc_to.x),
        fmt_num(arc_to.y),
    )
}

/// Build a closed donut-segment path: along the outer rim, across to the
/// inner rim, back along it, close.
pub fn ring_path(center: DVec2, inner_radius: f64, outer_radius: f64, start: Angle, end: Angle) -> String {
    let large_arc = large_arc_flag(start, end);
    let end = clamp_full_sweep(start, end);
    let outer_from = polar_to_cartesian(center, outer_radius, end);
    let outer_to = polar_to_cartesian(center, outer_radius, start);
    let inner_from = polar_to_cartesian(center, inner_radius, end);
    let inner_to = polar_to_cartesian(center, inner_radius, start);

    format!(
        "M {} {} A {} {} 0 {} 0 {} {} L {} {} A {} {} 0 {} 1 {} {} Z",
        fmt_num(outer_from.x),
        fmt_num(outer_from.y),
        fmt_num(outer_radius),
        fmt_num(outer_radius),
        large_arc,
        fmt_num(outer_to.x),
        fmt_num(outer_to.y),
        fmt_num(inner_to.x),
        fmt_num(inner_to.y),
        fmt_num(inner_radius),
        fmt_num(inner_radius),
        large_arc,
        fmt_num(inner_from.x),
        fmt_num(inner_from.y),
    )
}

/// Format a coordinate for SVG output: two decimal places, trailing zeros
/// trimmed. Fixed-precision output keeps rendered scenes byte-stable
/// across libm implementations.
pub(crate) fn fmt_num(value: f64) -> String {
    let rounded = (value * 100.0).round() / 100.0;
    // Normalize -0.0 so tiny negative values don't print as "-0".
    let rounded = if rounded == 0.0 { 0.0 } else { rounded };
    let s = format!("{rounded:.2}");
    let s = s.trim_end_matches('0');
    let s = s.trim_end_matches('.');
    s.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    fn assert_vec_eq(actual: DVec2, expected: DVec2) {
        assert!(
            (actual.x - expected.x).abs() < EPSILON && (actual.y - expected.y).abs() < EPSILON,
            "({}, {}) != ({}, {})",
            actual.x,
            actual.y,
            expected.x,
            expected.y
        );
    }

    #[test]
    fn zero_degrees_is_twelve_oclock() {
        let p = polar_to_cartesian(dvec2(100.0, 100.0), 80.0, Angle(0.0));
        assert_vec_eq(p, dvec2(100.0, 20.0));
    }

    #[test]
    fn ninety_degrees_is_three_oclock() {
        let p = polar_to_cartesian(dvec2(100.0, 100.0), 80.0, Angle(90.0));
        assert_vec_eq(p, dvec2(180.0, 100.0));
    }

    #[test]
    fn one_eighty_degrees_is_six_oclock() {
        let p = polar_to_cartesian(dvec2(100.0, 100.0), 80.0, Angle(180.0));
        assert_vec_eq(p, dvec2(100.0, 180.0));
    }

    #[test]
    fn two_seventy_degrees_is_nine_oclock() {
        let p = polar_to_cartesian(dvec2(100.0, 100.0), 80.0, Angle(270.0));
        assert_vec_eq(p, dvec2(20.0, 100.0));
    }

    #[test]
    fn angles_are_not_normalized() {
        let a = polar_to_cartesian(dvec2(0.0, 0.0), 1.0, Angle(450.0));
        let b = polar_to_cartesian(dvec2(0.0, 0.0), 1.0, Angle(90.0));
        assert_vec_eq(a, b);
    }

    #[test]
    fn zero_radius_maps_to_center() {
        let p = polar_to_cartesian(dvec2(7.0, 9.0), 0.0, Angle(123.0));
        assert_vec_eq(p, dvec2(7.0, 9.0));
    }

    #[test]
    fn large_arc_only_above_half_turn() {
        assert_eq!(large_arc_flag(Angle(0.0), Angle(90.0)), 0);
        assert_eq!(large_arc_flag(Angle(0.0), Angle(180.0)), 0);
        assert_eq!(large_arc_flag(Angle(0.0), Angle(180.1)), 1);
        assert_eq!(large_arc_flag(Angle(0.0), Angle(360.0)), 1);
    }

    #[test]
    fn quarter_wedge_path() {
        let d = wedge_path(dvec2(100.0, 100.0), 80.0, Angle(0.0), Angle(90.0));
        assert_eq!(d, "M 100 100 L 180 100 A 80 80 0 0 0 100 20 Z");
    }

    #[test]
    fn degenerate_wedge_is_still_valid() {
        let d = wedge_path(dvec2(100.0, 100.0), 80.0, Angle(45.0), Angle(45.0));
        assert!(d.starts_with("M 100 100 L "));
        assert!(d.ends_with('Z'));
    }

    #[test]
    fn full_circle_wedge_keeps_distinct_endpoints() {
        let d = wedge_path(dvec2(100.0, 100.0), 80.0, Angle(0.0), Angle(360.0));
        // Large-arc set, and the arc's two rim points must not coincide.
        assert!(d.contains(" A 80 80 0 1 0 "));
        let arc_from = d.split(" L ").nth(1).unwrap().split(" A ").next().unwrap();
        let arc_to = d.split(" 1 0 ").nth(1).unwrap().trim_end_matches(" Z");
        assert_ne!(arc_from, arc_to);
    }

    #[test]
    fn ring_path_has_both_arcs() {
        let d = ring_path(dvec2(100.0, 100.0), 50.0, 80.0, Angle(0.0), Angle(90.0));
        assert_eq!(
            d,
            "M 180 100 A 80 80 0 0 0 100 20 L 100 50 A 50 50 0 0 1 150 100 Z"
        );
    }

    #[test]
    fn fmt_num_trims_and_rounds() {
        assert_eq!(fmt_num(180.0), "180");
        assert_eq!(fmt_num(99.986), "99.99");
        assert_eq!(fmt_num(0.5), "0.5");
        assert_eq!(fmt_num(-4.9e-15), "0");
        assert_eq!(fmt_num(12.3456), "12.35");
    }
}
