use glam::Vec2;

use crate::controller::ease::DampedDelta;
use crate::controller::input::InputSnapshot;
use crate::model::camera::{Camera, MAX_ZOOM, MIN_ZOOM};

/// Accumulated wheel input must exceed this before zoom starts to move.
const ZOOM_DEAD_ZONE: f32 = 0.5;
/// Exponential decay rate for accumulated zoom input, per second.
const ZOOM_DECAY_RATE: f32 = 4.0;
/// Exponential decay rate for the glide after a drag ends, per second.
const PAN_FRICTION: f32 = 6.0;
/// Glides slower than this many world units per second are dropped.
const MIN_GLIDE_SPEED: f32 = 15.0;

/// Turns per-frame pointer input into smoothed camera motion: eased zoom
/// anchored at the scroll position, 1:1 drag panning, and a momentum glide
/// once the drag lets go.
pub struct CameraController {
    pub zoom_delta: DampedDelta,
    pub zoom_pivot: Vec2,
    pub pan_velocity: Vec2,
}

impl CameraController {
    pub fn new() -> Self {
        Self {
            zoom_delta: DampedDelta::new(ZOOM_DECAY_RATE),
            zoom_pivot: Vec2::ZERO,
            pan_velocity: Vec2::ZERO,
        }
    }

    pub fn update(&mut self, camera: &mut Camera, input: &InputSnapshot) {
        let dt = input.frame_seconds;

        // Wheel without Shift zooms; the scroll position anchors the glide.
        if input.wheel_delta != 0.0 && !input.shift_down {
            self.zoom_delta.add(input.wheel_delta);
            self.zoom_pivot = input.cursor_pos;
        }

        if self.zoom_delta.exceeds(ZOOM_DEAD_ZONE) {
            // Shift the target so the world point under the pivot stays put
            // across the zoom step.
            let before = self.zoom_pivot / camera.zoom;
            camera.zoom = self.zoom_delta.integrate(camera.zoom, dt, MIN_ZOOM, MAX_ZOOM);
            let after = self.zoom_pivot / camera.zoom;
            camera.target += before - after;
        }
        self.zoom_delta.decay(dt);

        if input.left_down {
            // Drag pans 1:1 in world space and leaves a velocity behind for
            // the glide.
            let world_delta = camera.screen_to_world(input.cursor_pos - input.cursor_delta)
                - camera.screen_to_world(input.cursor_pos);
            camera.target += world_delta;
            self.pan_velocity = world_delta * input.fps;
        } else if self.pan_velocity.length_squared() > MIN_GLIDE_SPEED * MIN_GLIDE_SPEED {
            camera.target += self.pan_velocity * dt;
            self.pan_velocity -= self.pan_velocity * dt * PAN_FRICTION;
        }
    }
}
