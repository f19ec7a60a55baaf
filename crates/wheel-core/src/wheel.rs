//! Wheel selection state machine.
//!
//! `WheelCore` owns the authoritative selected value of one wheel and plans
//! its transitions: wrap-around stepping, multi-turn spin destinations over
//! the repeated item blocks, and post-scroll settlement. It never touches the
//! DOM; the web frontend translates `SpinPlan`/`Settled` into scroll calls.
//!
//! The authoritative value changes only through `set_value` and `settle`.
//! Live scroll positions are cosmetic and stay out of this type entirely.

/// Wrap `index` into `0..len` without ever going negative.
#[inline]
pub fn wrap_index(index: isize, len: usize) -> usize {
    debug_assert!(len > 0);
    let len = len as isize;
    (((index % len) + len) % len) as usize
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SpinDirection {
    Forward,
    Backward,
}

/// Static per-wheel configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WheelConfig {
    item_count: usize,
    repeat_factor: usize,
    interactive: bool,
}

impl WheelConfig {
    /// `repeat_factor` is normalized to an odd value >= 1 so a middle block
    /// always exists; `item_count` to >= 1.
    pub fn new(item_count: usize, repeat_factor: usize, interactive: bool) -> Self {
        let item_count = item_count.max(1);
        let mut repeat_factor = repeat_factor.max(1);
        if repeat_factor % 2 == 0 {
            repeat_factor += 1;
        }
        Self {
            item_count,
            repeat_factor,
            interactive,
        }
    }

    #[inline]
    pub fn item_count(&self) -> usize {
        self.item_count
    }

    #[inline]
    pub fn repeat_factor(&self) -> usize {
        self.repeat_factor
    }

    #[inline]
    pub fn interactive(&self) -> bool {
        self.interactive
    }

    /// Number of rendered items: `item_count * repeat_factor`.
    #[inline]
    pub fn rendered_len(&self) -> usize {
        self.item_count * self.repeat_factor
    }

    /// Raw index of the first item of the canonical middle block.
    #[inline]
    pub fn middle_block_start(&self) -> usize {
        (self.repeat_factor / 2) * self.item_count
    }
}

/// An animated spin, expressed as raw rendered indices.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SpinPlan {
    /// Where the wheel must be recentered (instantly) before animating.
    pub start_raw: usize,
    /// Raw index to smooth-scroll to. Always within `0..rendered_len`.
    pub dest_raw: usize,
    /// Canonical value the wheel rests on once the scroll settles.
    pub final_value: usize,
}

/// Outcome of a settle: the new authoritative value, plus the middle-block
/// raw index to snap back to (non-animated) when headroom must be restored.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Settled {
    pub value: usize,
    pub recenter_raw: Option<usize>,
}

#[derive(Clone, Debug)]
pub struct WheelCore {
    config: WheelConfig,
    current_value: usize,
}

impl WheelCore {
    pub fn new(config: WheelConfig) -> Self {
        Self {
            config,
            current_value: 0,
        }
    }

    #[inline]
    pub fn config(&self) -> &WheelConfig {
        &self.config
    }

    /// Authoritative selected value. Never read from a mid-flight scroll.
    #[inline]
    pub fn value(&self) -> usize {
        self.current_value
    }

    /// Clamp `v` into the domain and make it authoritative. Idempotent.
    pub fn set_value(&mut self, v: usize) -> usize {
        self.current_value = v.min(self.config.item_count - 1);
        self.current_value
    }

    /// Raw rendered index of the current value inside the middle block.
    #[inline]
    pub fn resting_raw(&self) -> usize {
        self.config.middle_block_start() + self.current_value
    }

    /// Step target for a +-1 button or arrow key, with wraparound.
    #[inline]
    pub fn step_target(&self, delta: isize) -> usize {
        wrap_index(self.current_value as isize + delta, self.config.item_count)
    }

    #[inline]
    pub fn first(&self) -> usize {
        0
    }

    #[inline]
    pub fn last(&self) -> usize {
        self.config.item_count - 1
    }

    /// Forward wrap-around distance from the current value to `target`,
    /// always in `0..item_count`.
    #[inline]
    pub fn forward_distance(&self, target: usize) -> usize {
        wrap_index(
            target as isize - self.current_value as isize,
            self.config.item_count,
        )
    }

    /// Plan an animated spin to `target`.
    ///
    /// The wheel first recenters (instantly) at `start_raw`, then animates to
    /// `dest_raw`. Extra `turns` add whole rotations in the spin direction,
    /// purely cosmetic. The destination is folded back into the rendered
    /// range by whole-block steps, so it never runs past the first or last
    /// repeated block.
    pub fn plan_spin(&self, target: usize, turns: usize, direction: SpinDirection) -> SpinPlan {
        let n = self.config.item_count;
        let target = target.min(n - 1);
        let start_raw = self.resting_raw();
        let max_raw = (self.config.rendered_len() - 1) as isize;

        let mut dest = match direction {
            SpinDirection::Forward => {
                let distance = self.forward_distance(target) + turns * n;
                start_raw as isize + distance as isize
            }
            SpinDirection::Backward => {
                let distance =
                    wrap_index(self.current_value as isize - target as isize, n) + turns * n;
                start_raw as isize - distance as isize
            }
        };
        while dest > max_raw {
            dest -= n as isize;
        }
        while dest < 0 {
            dest += n as isize;
        }

        SpinPlan {
            start_raw,
            dest_raw: dest as usize,
            final_value: target,
        }
    }

    /// The scroll stopped with `raw_index` centered: adopt the canonical
    /// value and, for repeated wheels parked outside their resting position,
    /// report the middle-block index to snap back to.
    pub fn settle(&mut self, raw_index: usize) -> Settled {
        let raw = raw_index.min(self.config.rendered_len() - 1);
        self.current_value = raw % self.config.item_count;
        let recenter_raw = if self.config.repeat_factor > 1 {
            let resting = self.resting_raw();
            (raw != resting).then_some(resting)
        } else {
            None
        };
        Settled {
            value: self.current_value,
            recenter_raw,
        }
    }
}
