/// Platform-agnostic input handling
use glam::Vec2;

/// Platform-independent input events
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    CursorMove { x: f32, y: f32 },
    Button { button: MouseButton, is_down: bool },
    Wheel { notches: f32 },
    Modifier { key: ModifierKey, is_down: bool },
    CloseRequested,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseButton {
    Left,
    Right,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModifierKey {
    Ctrl,
    Shift,
}

/// Read-only view of one frame's input, handed to the controllers.
#[derive(Debug, Clone, Copy, Default)]
pub struct InputSnapshot {
    pub cursor_pos: Vec2,
    /// Cursor movement since the previous frame.
    pub cursor_delta: Vec2,
    /// Wheel notches scrolled since the previous frame.
    pub wheel_delta: f32,
    pub left_down: bool,
    /// True only on the frame the left button went down.
    pub left_pressed: bool,
    pub right_down: bool,
    pub ctrl_down: bool,
    /// True only on the frame Ctrl went down.
    pub ctrl_pressed: bool,
    pub shift_down: bool,
    pub close_requested: bool,
    pub frame_seconds: f32,
    pub fps: f32,
}

/// Folds input events into per-frame snapshots. Deltas accumulate between
/// frames and drain when a snapshot is taken; press edges latch until the
/// next snapshot so none are lost to event timing.
pub struct InputState {
    cursor_pos: Vec2,
    cursor_delta: Vec2,
    wheel_delta: f32,
    left_down: bool,
    left_pressed: bool,
    right_down: bool,
    ctrl_down: bool,
    ctrl_pressed: bool,
    shift_down: bool,
    close_requested: bool,
}

impl InputState {
    pub fn new() -> Self {
        Self {
            cursor_pos: Vec2::ZERO,
            cursor_delta: Vec2::ZERO,
            wheel_delta: 0.0,
            left_down: false,
            left_pressed: false,
            right_down: false,
            ctrl_down: false,
            ctrl_pressed: false,
            shift_down: false,
            close_requested: false,
        }
    }

    /// Process an input event and update state
    pub fn process_event(&mut self, event: &InputEvent) {
        match event {
            InputEvent::CursorMove { x, y } => {
                let pos = Vec2::new(*x, *y);
                self.cursor_delta += pos - self.cursor_pos;
                self.cursor_pos = pos;
            }
            InputEvent::Button { button, is_down } => match button {
                MouseButton::Left => {
                    if *is_down && !self.left_down {
                        self.left_pressed = true;
                    }
                    self.left_down = *is_down;
                }
                MouseButton::Right => self.right_down = *is_down,
                MouseButton::Other => {}
            },
            InputEvent::Wheel { notches } => {
                self.wheel_delta += notches;
            }
            InputEvent::Modifier { key, is_down } => match key {
                ModifierKey::Ctrl => {
                    // Key repeat delivers further down events while held;
                    // only a real transition counts as a press.
                    if *is_down && !self.ctrl_down {
                        self.ctrl_pressed = true;
                    }
                    self.ctrl_down = *is_down;
                }
                ModifierKey::Shift => self.shift_down = *is_down,
            },
            InputEvent::CloseRequested => self.close_requested = true,
        }
    }

    /// Drain the per-frame accumulators into a snapshot.
    pub fn snapshot(&mut self, frame_seconds: f32) -> InputSnapshot {
        let snapshot = InputSnapshot {
            cursor_pos: self.cursor_pos,
            cursor_delta: self.cursor_delta,
            wheel_delta: self.wheel_delta,
            left_down: self.left_down,
            left_pressed: self.left_pressed,
            right_down: self.right_down,
            ctrl_down: self.ctrl_down,
            ctrl_pressed: self.ctrl_pressed,
            shift_down: self.shift_down,
            close_requested: self.close_requested,
            frame_seconds,
            fps: if frame_seconds > 0.0 { 1.0 / frame_seconds } else { 0.0 },
        };

        self.cursor_delta = Vec2::ZERO;
        self.wheel_delta = 0.0;
        self.left_pressed = false;
        self.ctrl_pressed = false;

        snapshot
    }
}

pub mod winit_input {
    use super::*;
    use winit::event::{ElementState, MouseScrollDelta, WindowEvent};
    use winit::keyboard::{KeyCode, PhysicalKey};

    /// Scroll distance pixel-based devices report per wheel notch.
    pub const PIXELS_PER_NOTCH: f32 = 120.0;

    pub fn notches_from_pixels(pixels: f32) -> f32 {
        pixels / PIXELS_PER_NOTCH
    }

    /// Translate a window event into a platform-independent input event.
    pub fn window_event_to_input(event: &WindowEvent) -> Option<InputEvent> {
        match event {
            WindowEvent::CursorMoved { position, .. } => Some(InputEvent::CursorMove {
                x: position.x as f32,
                y: position.y as f32,
            }),
            WindowEvent::MouseInput { state, button, .. } => {
                let button = match button {
                    winit::event::MouseButton::Left => MouseButton::Left,
                    winit::event::MouseButton::Right => MouseButton::Right,
                    _ => MouseButton::Other,
                };
                Some(InputEvent::Button {
                    button,
                    is_down: state.is_pressed(),
                })
            }
            WindowEvent::MouseWheel { delta, .. } => {
                let notches = match delta {
                    MouseScrollDelta::LineDelta(_, y) => *y,
                    MouseScrollDelta::PixelDelta(pos) => notches_from_pixels(pos.y as f32),
                };
                Some(InputEvent::Wheel { notches })
            }
            WindowEvent::KeyboardInput { event, .. } => {
                let key = match event.physical_key {
                    PhysicalKey::Code(KeyCode::ControlLeft | KeyCode::ControlRight) => {
                        ModifierKey::Ctrl
                    }
                    PhysicalKey::Code(KeyCode::ShiftLeft | KeyCode::ShiftRight) => {
                        ModifierKey::Shift
                    }
                    // Escape ends the session like a window close would.
                    PhysicalKey::Code(KeyCode::Escape) => {
                        return (event.state == ElementState::Pressed)
                            .then_some(InputEvent::CloseRequested);
                    }
                    _ => return None,
                };
                Some(InputEvent::Modifier {
                    key,
                    is_down: event.state == ElementState::Pressed,
                })
            }
            WindowEvent::CloseRequested => Some(InputEvent::CloseRequested),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wheel_accumulates_and_drains() {
        let mut state = InputState::new();
        state.process_event(&InputEvent::Wheel { notches: 1.0 });
        state.process_event(&InputEvent::Wheel { notches: 2.0 });

        let snap = state.snapshot(1.0 / 60.0);
        assert_eq!(snap.wheel_delta, 3.0);

        let next = state.snapshot(1.0 / 60.0);
        assert_eq!(next.wheel_delta, 0.0, "accumulator must drain per frame");
    }

    #[test]
    fn test_cursor_delta_spans_all_moves_in_frame() {
        let mut state = InputState::new();
        state.process_event(&InputEvent::CursorMove { x: 10.0, y: 10.0 });
        state.process_event(&InputEvent::CursorMove { x: 30.0, y: 20.0 });

        let snap = state.snapshot(1.0 / 60.0);
        assert_eq!(snap.cursor_pos, Vec2::new(30.0, 20.0));
        assert_eq!(snap.cursor_delta, Vec2::new(30.0, 20.0));

        let next = state.snapshot(1.0 / 60.0);
        assert_eq!(next.cursor_delta, Vec2::ZERO);
        assert_eq!(next.cursor_pos, Vec2::new(30.0, 20.0), "position persists");
    }

    #[test]
    fn test_ctrl_press_edge_latches_once() {
        let mut state = InputState::new();
        state.process_event(&InputEvent::Modifier {
            key: ModifierKey::Ctrl,
            is_down: true,
        });
        // Key repeat while held
        state.process_event(&InputEvent::Modifier {
            key: ModifierKey::Ctrl,
            is_down: true,
        });

        let snap = state.snapshot(1.0 / 60.0);
        assert!(snap.ctrl_pressed);
        assert!(snap.ctrl_down);

        let next = state.snapshot(1.0 / 60.0);
        assert!(!next.ctrl_pressed, "edge must not repeat while held");
        assert!(next.ctrl_down);
    }

    #[test]
    fn test_press_edge_survives_release_within_frame() {
        let mut state = InputState::new();
        state.process_event(&InputEvent::Button {
            button: MouseButton::Left,
            is_down: true,
        });
        state.process_event(&InputEvent::Button {
            button: MouseButton::Left,
            is_down: false,
        });

        let snap = state.snapshot(1.0 / 60.0);
        assert!(snap.left_pressed, "a tap between frames must still register");
        assert!(!snap.left_down);
    }

    #[test]
    fn test_pixel_scroll_normalization() {
        assert_eq!(winit_input::notches_from_pixels(240.0), 2.0);
        assert_eq!(winit_input::notches_from_pixels(-120.0), -1.0);
    }

    #[test]
    fn test_fps_from_frame_time() {
        let mut state = InputState::new();
        let snap = state.snapshot(0.02);
        assert!((snap.fps - 50.0).abs() < 1e-3);

        // A zero-length frame must not produce an infinite fps.
        let snap = state.snapshot(0.0);
        assert_eq!(snap.fps, 0.0);
    }
}
