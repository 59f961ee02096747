//! Math utilities for the bridge

pub mod view;
pub mod cell;
pub mod frustum;

pub use view::view_transform;
pub use cell::{CellCoord, CELL_SIZE};
pub use frustum::Frustum;
