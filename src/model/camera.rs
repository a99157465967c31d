use glam::{Mat4, Vec2, Vec3};

pub const MIN_ZOOM: f32 = 1.0;
pub const MAX_ZOOM: f32 = 10.0;

/// 2D view over the captured screen. World coordinates are screenshot
/// pixels; the visible region is `target` scaled by `zoom`.
pub struct Camera {
    pub zoom: f32,
    pub target: Vec2,
}

impl Camera {
    pub fn new() -> Self {
        Self {
            zoom: 1.0,
            target: Vec2::ZERO,
        }
    }

    /// Map a window position to the world point currently under it.
    pub fn screen_to_world(&self, screen: Vec2) -> Vec2 {
        screen / self.zoom + self.target
    }

    /// Combined view and pixel-space orthographic projection for the
    /// given surface size.
    pub fn view_proj(&self, width: u32, height: u32) -> Mat4 {
        let proj = Mat4::orthographic_rh(0.0, width as f32, height as f32, 0.0, -1.0, 1.0);
        let view = Mat4::from_scale(Vec3::new(self.zoom, self.zoom, 1.0))
            * Mat4::from_translation(Vec3::new(-self.target.x, -self.target.y, 0.0));
        proj * view
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_screen_to_world_identity_at_rest() {
        let camera = Camera::new();
        let p = camera.screen_to_world(Vec2::new(320.0, 240.0));
        assert_eq!(p, Vec2::new(320.0, 240.0));
    }

    #[test]
    fn test_screen_to_world_zoomed_and_panned() {
        let camera = Camera {
            zoom: 2.0,
            target: Vec2::new(100.0, 50.0),
        };
        let p = camera.screen_to_world(Vec2::new(200.0, 80.0));
        assert_eq!(p, Vec2::new(200.0, 90.0));
    }

    #[test]
    fn test_view_proj_maps_window_corners() {
        let camera = Camera::new();
        let vp = camera.view_proj(800, 600);

        let top_left = vp.project_point3(Vec3::new(0.0, 0.0, 0.0));
        assert!((top_left.x - -1.0).abs() < 1e-6, "left edge should be -1, got {}", top_left.x);
        assert!((top_left.y - 1.0).abs() < 1e-6, "top edge should be +1, got {}", top_left.y);

        let bottom_right = vp.project_point3(Vec3::new(800.0, 600.0, 0.0));
        assert!((bottom_right.x - 1.0).abs() < 1e-6);
        assert!((bottom_right.y - -1.0).abs() < 1e-6);
    }

    #[test]
    fn test_view_proj_zoom_magnifies_around_target() {
        // At zoom 2 with target at the origin, the world point that was at
        // screen (400, 300) moves to screen (800, 600).
        let camera = Camera {
            zoom: 2.0,
            target: Vec2::ZERO,
        };
        let vp = camera.view_proj(800, 600);
        let p = vp.project_point3(Vec3::new(400.0, 300.0, 0.0));
        assert!((p.x - 1.0).abs() < 1e-6);
        assert!((p.y - -1.0).abs() < 1e-6);
    }
}
