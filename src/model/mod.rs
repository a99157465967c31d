// MODEL: view and spotlight state
pub mod camera;
pub mod spotlight;

pub use camera::Camera;
pub use spotlight::Spotlight;
