pub const MIN_RADIUS_MULTIPLIER: f32 = 0.3;
pub const MAX_RADIUS_MULTIPLIER: f32 = 10.0;

/// Circular highlight around the cursor. While enabled, everything outside
/// the circle is tinted down; the circle itself keeps a fixed on-screen size
/// regardless of zoom.
pub struct Spotlight {
    pub enabled: bool,
    pub radius_multiplier: f32,
}

impl Spotlight {
    pub fn new() -> Self {
        Self {
            enabled: false,
            radius_multiplier: 1.0,
        }
    }
}
