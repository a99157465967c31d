/// Exponentially damped input accumulator.
///
/// Scroll input arrives in discrete notches but should move the view as a
/// smooth glide. Notches pile up in `pending` and are drained into the target
/// quantity one `pending * dt` slice per frame, while `pending` itself decays
/// toward zero at `decay_rate` per second.
#[derive(Debug, Clone, Copy)]
pub struct DampedDelta {
    pub pending: f32,
    pub decay_rate: f32,
}

impl DampedDelta {
    pub fn new(decay_rate: f32) -> Self {
        Self {
            pending: 0.0,
            decay_rate,
        }
    }

    /// Accumulate another notch of input.
    pub fn add(&mut self, delta: f32) {
        self.pending += delta;
    }

    /// Replace whatever is pending, discarding prior input.
    pub fn reset(&mut self, value: f32) {
        self.pending = value;
    }

    pub fn exceeds(&self, dead_zone: f32) -> bool {
        self.pending.abs() > dead_zone
    }

    /// One frame's slice of the accumulated input applied to `current`,
    /// clamped to the quantity's valid range.
    pub fn integrate(&self, current: f32, dt: f32, min: f32, max: f32) -> f32 {
        (current + self.pending * dt).clamp(min, max)
    }

    /// Bleed off a frame's worth of the accumulated input.
    pub fn decay(&mut self, dt: f32) {
        self.pending -= self.pending * dt * self.decay_rate;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decay_converges_to_zero() {
        let mut delta = DampedDelta::new(4.0);
        delta.add(3.0);

        // Ten seconds of frames at 60 fps
        for _ in 0..600 {
            delta.decay(1.0 / 60.0);
        }
        assert!(
            delta.pending.abs() < 1e-4,
            "pending should decay to zero, got {}",
            delta.pending
        );
    }

    #[test]
    fn test_integrate_applies_one_slice() {
        let mut delta = DampedDelta::new(4.0);
        delta.add(2.0);

        let result = delta.integrate(1.0, 0.5, 0.0, 100.0);
        assert_eq!(result, 2.0, "half a second of +2/s should add 1.0");
    }

    #[test]
    fn test_integrate_respects_bounds() {
        let mut delta = DampedDelta::new(4.0);

        delta.add(1000.0);
        assert_eq!(delta.integrate(5.0, 1.0, 1.0, 10.0), 10.0);

        delta.reset(-1000.0);
        assert_eq!(delta.integrate(5.0, 1.0, 1.0, 10.0), 1.0);
    }

    #[test]
    fn test_dead_zone_check() {
        let mut delta = DampedDelta::new(4.0);
        assert!(!delta.exceeds(0.5));

        delta.add(-0.6);
        assert!(delta.exceeds(0.5), "check must use the magnitude");

        delta.reset(0.5);
        assert!(!delta.exceeds(0.5), "the boundary itself is inside the dead zone");
    }
}
