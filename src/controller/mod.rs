// CONTROLLER: input collection and per-frame state updates
pub mod ease;
pub mod input;
pub mod camera_controller;
pub mod spotlight_controller;
pub mod frame_loop;

pub use input::{InputEvent, InputSnapshot, InputState};
pub use camera_controller::CameraController;
pub use spotlight_controller::SpotlightController;
pub use frame_loop::FrameContext;
