// Property tests for the scroll mapping and wrap arithmetic.

use proptest::prelude::*;
use wheel_core::{wrap_index, WheelGeometry};

proptest! {
    #[test]
    fn offset_index_round_trip(
        h in 8.0f64..200.0,
        vh in 8.0f64..1200.0,
        len in 1usize..64,
        i in 0usize..64,
    ) {
        let i = i % len;
        let g = WheelGeometry::new(h, vh);
        let s = g.scroll_offset_for(i as f64);
        prop_assert_eq!(g.nearest_index(s, len), i);
    }

    #[test]
    fn nearest_index_always_in_range(
        h in 8.0f64..200.0,
        vh in 8.0f64..1200.0,
        scroll in -1.0e6f64..1.0e6,
        len in 1usize..64,
    ) {
        let g = WheelGeometry::new(h, vh);
        prop_assert!(g.nearest_index(scroll, len) < len);
    }

    #[test]
    fn wrap_index_stays_in_domain(i in -1000isize..1000, d in -1000isize..1000, n in 1usize..40) {
        let wrapped = wrap_index(i + d, n);
        prop_assert!(wrapped < n);
        // Adding any multiple of n does not change the result.
        prop_assert_eq!(wrap_index(i + d + 3 * n as isize, n), wrapped);
    }
}
