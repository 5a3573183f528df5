/* 📖 # What is a VectorHandle?

A VectorHandle is a cloneable reference to a single vector stored behind `Arc<RwLock<..>>`.
Every clone sees the same storage, so scaling through one clone is observed by all others.
Reads take the read lock and `scale` takes the write lock, which serialises concurrent writers.
*/

use std::sync::Arc;

use parking_lot::RwLock;
use tracing::trace;

use crate::vector::Vector2D;

/// Thread-safe shared handle to one [`Vector2D`].
///
/// # Examples
///
/// ```
/// use vertex_core::{Vector2D, VectorHandle};
///
/// let a = VectorHandle::new(Vector2D::new(3.0, 4.0));
/// let b = a.clone();
/// b.scale(5.0);
/// assert_eq!(a.snapshot(), Vector2D::new(15.0, 20.0));
/// ```
#[derive(Debug, Clone)]
pub struct VectorHandle(Arc<RwLock<Vector2D>>);

impl VectorHandle {
    pub fn new(vector: Vector2D) -> Self {
        Self(Arc::new(RwLock::new(vector)))
    }

    /// See [`Vector2D::magnitude`].
    pub fn magnitude(&self) -> f64 {
        self.0.read().magnitude()
    }

    /// Scales the shared vector in place. See [`Vector2D::scale`].
    pub fn scale(&self, factor: f64) {
        let mut vector = self.0.write();
        vector.scale(factor);
        trace!(x = vector.x, y = vector.y, factor, "scaled shared vector");
    }

    /// Runs `f` with exclusive access to the shared vector.
    pub fn update<R>(&self, f: impl FnOnce(&mut Vector2D) -> R) -> R {
        f(&mut *self.0.write())
    }

    /// Returns a detached copy of the current value.
    pub fn snapshot(&self) -> Vector2D {
        *self.0.read()
    }

    /// Returns true if both handles refer to the same storage.
    pub fn ptr_eq(&self, other: &VectorHandle) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl From<Vector2D> for VectorHandle {
    fn from(vector: Vector2D) -> Self {
        Self::new(vector)
    }
}
