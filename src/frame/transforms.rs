//! Transient transform stack for entity dispatch
//!
//! The host's per-entity render entry expects a matrix stack it can push
//! local transforms onto. One fresh stack is created per traversal pass and
//! discarded with the frame.

use crate::core::types::Mat4;

/// A matrix stack seeded with identity. Pop never removes the last entry.
#[derive(Clone, Debug)]
pub struct TransformStack {
    stack: Vec<Mat4>,
}

impl TransformStack {
    /// Create a stack holding a single identity matrix
    pub fn new() -> Self {
        Self { stack: vec![Mat4::IDENTITY] }
    }

    /// Duplicate the top entry
    pub fn push(&mut self) {
        let top = *self.peek();
        self.stack.push(top);
    }

    /// Discard the top entry; the bottom entry is kept
    pub fn pop(&mut self) {
        if self.stack.len() > 1 {
            self.stack.pop();
        }
    }

    /// Current top matrix
    pub fn peek(&self) -> &Mat4 {
        self.stack.last().unwrap_or(&Mat4::IDENTITY)
    }

    /// Mutable access to the top matrix
    pub fn peek_mut(&mut self) -> &mut Mat4 {
        if self.stack.is_empty() {
            self.stack.push(Mat4::IDENTITY);
        }
        self.stack.last_mut().unwrap()
    }

    /// Multiply the top matrix by `m` on the right
    pub fn multiply(&mut self, m: Mat4) {
        let top = self.peek_mut();
        *top = *top * m;
    }
}

impl Default for TransformStack {
    fn default() -> Self {
        Self::new()
    }
}
