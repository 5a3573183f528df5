/* 📖 # What lives in vertex_base?
vertex_base holds the error type and tracing setup used by every other crate in the workspace.
*/

pub mod error;
pub mod tracing;

// Re-export commonly used types for convenience
pub use error::{ErrorKind, ResultExt, VertexError, VertexResult};
