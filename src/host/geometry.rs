//! Vertex submission capability and the null sink
//!
//! The host's per-entity render entry writes geometry through a vertex
//! sink. The bridge only cares about the side effects of that call, so it
//! supplies [`NullVertexSink`], which satisfies the capability and drops
//! everything.

/// Write target for host geometry submission.
///
/// One vertex is the sequence `vertex` followed by any number of attribute
/// calls, terminated by `end_vertex`.
pub trait VertexSink {
    /// Begin a vertex at a world-space position
    fn vertex(&mut self, x: f64, y: f64, z: f64);
    /// Vertex color, linear RGBA
    fn color(&mut self, r: f32, g: f32, b: f32, a: f32);
    /// Texture coordinates
    fn uv(&mut self, u: f32, v: f32);
    /// Vertex normal
    fn normal(&mut self, x: f32, y: f32, z: f32);
    /// Finish the current vertex
    fn end_vertex(&mut self);
}

/// A sink that accepts and discards all geometry.
///
/// Never panics, never allocates, never retains submitted data. Keeps a
/// saturating count of discarded vertices for diagnostics.
#[derive(Debug, Default)]
pub struct NullVertexSink {
    discarded: u64,
}

impl NullVertexSink {
    /// Create a new null sink
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of vertices discarded since creation
    pub fn discarded(&self) -> u64 {
        self.discarded
    }
}

impl VertexSink for NullVertexSink {
    fn vertex(&mut self, _x: f64, _y: f64, _z: f64) {}

    fn color(&mut self, _r: f32, _g: f32, _b: f32, _a: f32) {}

    fn uv(&mut self, _u: f32, _v: f32) {}

    fn normal(&mut self, _x: f32, _y: f32, _z: f32) {}

    fn end_vertex(&mut self) {
        self.discarded = self.discarded.saturating_add(1);
    }
}
