//! Rendering module
//!
//! Produces shapes, labels and triangle-list vertices. Uploading them to a
//! GPU or drawing text is up to the host window.

pub mod scene;
pub mod shapes;
pub mod vertex;

pub use scene::{Align, Frame, Label, Shape};
pub use vertex::Vertex;
