//! Per-frame bridge orchestration

pub mod context;
pub mod transforms;
pub mod renderer;

pub use context::{CapturedFrustum, FrameContext};
pub use renderer::{BridgedFrameRenderer, FrameOutcome, FrameRenderer};
pub use transforms::TransformStack;
