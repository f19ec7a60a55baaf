// Host-side tests for the pure readout color mapping.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod palette {
    include!("../src/palette.rs");
}

use palette::*;

#[test]
fn fraction_spans_zero_to_one() {
    assert_eq!(total_fraction(4, 4, 40), 0.0);
    assert_eq!(total_fraction(40, 4, 40), 1.0);
    let mid = total_fraction(22, 4, 40);
    assert!(mid > 0.49 && mid < 0.51);
}

#[test]
fn fraction_clamps_out_of_range_totals() {
    assert_eq!(total_fraction(0, 4, 40), 0.0);
    assert_eq!(total_fraction(99, 4, 40), 1.0);
}

#[test]
fn degenerate_range_does_not_divide_by_zero() {
    assert_eq!(total_fraction(7, 10, 10), 0.0);
    assert_eq!(total_fraction(7, 10, 4), 0.0);
}

#[test]
fn hue_runs_red_to_green() {
    assert_eq!(readout_hue(4, 4, 40), 0.0);
    assert_eq!(readout_hue(40, 4, 40), 120.0);
    assert!(readout_hue(23, 4, 40) > 0.0);
}

#[test]
fn color_is_a_css_hsl_string() {
    assert_eq!(readout_color(40, 4, 40), "hsl(120, 70%, 45%)");
    assert!(readout_color(4, 4, 40).starts_with("hsl(0,"));
}
