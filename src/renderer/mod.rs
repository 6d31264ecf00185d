//! Rendering interface
//!
//! The game never touches GPU objects. It turns the current state into a list
//! of (mesh handle, matrices) pairs and hands them to a caller-supplied sink.

pub mod draw_list;
pub mod meshes;

pub use draw_list::{DrawCall, DrawSink, ObjectUniforms, draw, world_to_clip};
pub use meshes::{MeshError, MeshSet};
