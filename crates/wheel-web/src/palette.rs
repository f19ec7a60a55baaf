// Color mapping for the total readout. Pure so the host-side tests can
// include this file directly.

/// Position of `total` inside `[min_total, max_total]`, clamped to `[0, 1]`.
pub fn total_fraction(total: u32, min_total: u32, max_total: u32) -> f64 {
    if max_total <= min_total {
        return 0.0;
    }
    let t = total.clamp(min_total, max_total);
    (t - min_total) as f64 / (max_total - min_total) as f64
}

/// Hue along red (0) -> green (120).
pub fn readout_hue(total: u32, min_total: u32, max_total: u32) -> f64 {
    120.0 * total_fraction(total, min_total, max_total)
}

/// CSS color for the sum readout.
pub fn readout_color(total: u32, min_total: u32, max_total: u32) -> String {
    format!("hsl({:.0}, 70%, 45%)", readout_hue(total, min_total, max_total))
}
