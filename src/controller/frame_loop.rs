use crate::controller::camera_controller::CameraController;
use crate::controller::input::InputSnapshot;
use crate::controller::spotlight_controller::SpotlightController;
use crate::model::{Camera, Spotlight};

/// Everything the per-frame update touches, bundled so the whole loop body
/// can be driven by scripted input with no window or GPU behind it.
pub struct FrameContext {
    pub camera: Camera,
    pub spotlight: Spotlight,
    pub camera_controller: CameraController,
    pub spotlight_controller: SpotlightController,
}

impl FrameContext {
    pub fn new() -> Self {
        Self {
            camera: Camera::new(),
            spotlight: Spotlight::new(),
            camera_controller: CameraController::new(),
            spotlight_controller: SpotlightController::new(),
        }
    }

    /// Advance all view state by one frame of input.
    pub fn update(&mut self, input: &InputSnapshot) {
        self.camera_controller.update(&mut self.camera, input);
        self.spotlight_controller.update(&mut self.spotlight, input);
    }

    /// The session ends on window close or a right click.
    pub fn should_exit(&self, input: &InputSnapshot) -> bool {
        input.close_requested || input.right_down
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    const DT: f32 = 1.0 / 60.0;

    fn idle() -> InputSnapshot {
        InputSnapshot {
            frame_seconds: DT,
            fps: 1.0 / DT,
            ..Default::default()
        }
    }

    #[test]
    fn test_starts_at_rest() {
        let ctx = FrameContext::new();
        assert_eq!(ctx.camera.zoom, 1.0);
        assert_eq!(ctx.camera.target, Vec2::ZERO);
        assert!(!ctx.spotlight.enabled);
        assert_eq!(ctx.spotlight.radius_multiplier, 1.0);
    }

    #[test]
    fn test_exits_on_right_click_or_close() {
        let ctx = FrameContext::new();

        assert!(!ctx.should_exit(&idle()));
        assert!(ctx.should_exit(&InputSnapshot {
            right_down: true,
            ..idle()
        }));
        assert!(ctx.should_exit(&InputSnapshot {
            close_requested: true,
            ..idle()
        }));
    }

    #[test]
    fn test_whole_view_settles_without_input() {
        let mut ctx = FrameContext::new();

        // A busy frame: zoom scroll, spotlight flash, and a drag in flight
        ctx.update(&InputSnapshot {
            cursor_pos: Vec2::new(300.0, 200.0),
            cursor_delta: Vec2::new(40.0, -25.0),
            wheel_delta: 3.0,
            left_down: true,
            left_pressed: true,
            ctrl_down: true,
            ctrl_pressed: true,
            frame_seconds: DT,
            fps: 1.0 / DT,
            ..Default::default()
        });

        // Then the user walks away
        for _ in 0..1200 {
            ctx.update(&idle());
        }
        assert!(ctx.camera_controller.zoom_delta.pending.abs() < 1e-4);
        assert!(ctx.spotlight_controller.radius_delta.pending.abs() < 1e-4);

        let zoom = ctx.camera.zoom;
        let target = ctx.camera.target;
        let radius = ctx.spotlight.radius_multiplier;
        for _ in 0..100 {
            ctx.update(&idle());
        }
        assert_eq!(ctx.camera.zoom, zoom);
        assert_eq!(ctx.camera.target, target);
        assert_eq!(ctx.spotlight.radius_multiplier, radius);
    }

    #[test]
    fn test_zoom_and_spotlight_inputs_stay_separate() {
        let mut ctx = FrameContext::new();

        // Ctrl+Shift+wheel resizes the spotlight and must not zoom
        ctx.update(&InputSnapshot {
            wheel_delta: -2.0,
            ctrl_down: true,
            ctrl_pressed: true,
            shift_down: true,
            frame_seconds: DT,
            fps: 1.0 / DT,
            ..Default::default()
        });
        assert_eq!(ctx.camera_controller.zoom_delta.pending, 0.0);
        assert!(ctx.spotlight_controller.radius_delta.pending != 0.0);
    }
}
