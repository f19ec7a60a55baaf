// Shared tuning constants used by the web frontend and the host-side tests.

// Scroll settlement
pub const SETTLE_QUIET_MS: i32 = 80; // no scroll event for this long = settled
pub const DEFAULT_ITEM_HEIGHT_PX: f64 = 60.0; // fallback before layout is measurable

// Spin animation
pub const DIGIT_REPEAT_FACTOR: usize = 3; // odd; one spare block of headroom per side
pub const DEFAULT_SPIN_TURNS: usize = 1; // extra full rotations on a forward spin

// Score data
pub const SCORE_DIMENSIONS: usize = 4;
pub const CATEGORY_LABELS: [&str; SCORE_DIMENSIONS] = [
    "Ease of Gathering",
    "Signal Strength",
    "Resistance to Gaming",
    "Objectivity",
];
