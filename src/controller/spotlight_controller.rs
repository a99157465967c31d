use crate::controller::ease::DampedDelta;
use crate::controller::input::InputSnapshot;
use crate::model::spotlight::{Spotlight, MAX_RADIUS_MULTIPLIER, MIN_RADIUS_MULTIPLIER};

/// Radius multiplier the spotlight flashes out to when switched on.
const FLASH_RADIUS_MULTIPLIER: f32 = 5.0;
/// Contraction queued with the flash so the circle snaps wide and then
/// eases back down.
const FLASH_CONTRACTION: f32 = -15.0;
/// Exponential decay rate for accumulated radius input, per second.
const RADIUS_DECAY_RATE: f32 = 4.0;

/// Drives the spotlight from the modifier keys: Ctrl holds it open,
/// Ctrl+Shift+wheel resizes it.
pub struct SpotlightController {
    pub radius_delta: DampedDelta,
}

impl SpotlightController {
    pub fn new() -> Self {
        Self {
            radius_delta: DampedDelta::new(RADIUS_DECAY_RATE),
        }
    }

    pub fn update(&mut self, spotlight: &mut Spotlight, input: &InputSnapshot) {
        let dt = input.frame_seconds;

        spotlight.enabled = input.ctrl_down;

        if input.ctrl_pressed {
            spotlight.radius_multiplier = FLASH_RADIUS_MULTIPLIER;
            self.radius_delta.reset(FLASH_CONTRACTION);
        }

        // Scrolling up shrinks the circle, scrolling down grows it.
        if input.ctrl_down && input.shift_down && input.wheel_delta != 0.0 {
            self.radius_delta.add(-input.wheel_delta);
        }

        spotlight.radius_multiplier = self.radius_delta.integrate(
            spotlight.radius_multiplier,
            dt,
            MIN_RADIUS_MULTIPLIER,
            MAX_RADIUS_MULTIPLIER,
        );
        self.radius_delta.decay(dt);
    }
}
