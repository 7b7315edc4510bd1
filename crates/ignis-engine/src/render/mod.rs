//! GL rendering: the API seam, shader programs, static geometry and the
//! scenes drawn by the frame loop.
//!
//! Every call is issued directly against the context current on the calling
//! thread. Nothing here is thread-safe and nothing needs to be.

mod api;
mod geometry;
mod scene;
mod shader;

#[cfg(test)]
pub(crate) mod mock;

pub use api::{Capability, Gl, GlApi, InfoString, ShaderStage};
pub use geometry::{
    GeometryError, TriangleMesh, POSITION_ATTRIBUTE, POSITION_COMPONENTS, TRIANGLE_VERTICES,
};
pub use scene::{BlankScene, SceneError, TriangleScene};
pub use shader::{ShaderError, ShaderProgram, PASSTHROUGH_VERTEX_SRC, SOLID_ORANGE_FRAGMENT_SRC};
