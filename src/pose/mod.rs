pub mod keypoint;
pub mod source;

pub use keypoint::{HandLandmark, HandPose, Keypoint};
pub use source::{KeypointSource, SyntheticHand};
