//! External renderer bridge interface

pub mod registers;

pub use registers::{BridgeRegisters, RenderBridge, TransformSlot, TRANSFORM_SLOTS, VIEW_SLOT};
