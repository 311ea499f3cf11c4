pub mod baseline;
pub mod depth;
pub mod geometry;
pub mod pipeline;
pub mod scale;
pub mod skeleton;

pub use baseline::{DepthBaseline, REFERENCE_PAIR_COUNT};
pub use geometry::{bone_transform, joint_transform, MeshTransform};
pub use pipeline::{OverlayFrame, OverlayPipeline};
pub use skeleton::{BONE_PAIRS, BONE_RADIUS, JOINT_RADIUS, REFERENCE_PAIRS};
