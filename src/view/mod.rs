// VIEW: GPU setup and rendering
pub mod render;
pub mod gpu_init;

pub use render::{CameraResources, FramePlan, PipelineResources, SpotlightResources, TextureResources};
pub use gpu_init::GpuContext;
