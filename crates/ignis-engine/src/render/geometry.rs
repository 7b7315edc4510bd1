use thiserror::Error;

use super::api::GlApi;

/// Three positions in normalized device coordinates, `{x, y, z}` each.
pub const TRIANGLE_VERTICES: [f32; 9] = [
    -0.8, -0.8, 0.0, // bottom left
    0.8, -0.8, 0.0, // bottom right
    0.0, 0.8, 0.0, // top
];

/// Attribute slot carrying vertex positions.
pub const POSITION_ATTRIBUTE: u32 = 0;

/// Components per position.
pub const POSITION_COMPONENTS: i32 = 3;

#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("failed to create GL {what}: {reason}")]
    Create { what: &'static str, reason: String },
}

/// One static vertex buffer plus the vertex array describing it.
///
/// Immutable after upload: the data is never rewritten or resized.
#[derive(Debug)]
pub struct TriangleMesh<G: GlApi> {
    vao: G::VertexArray,
    vbo: G::Buffer,
    vertex_count: i32,
}

impl<G: GlApi> TriangleMesh<G> {
    /// Uploads `positions` and records attribute 0 as tightly packed `vec3`.
    ///
    /// Leaves no vertex array bound and attribute 0 disabled globally; the
    /// enabled state lives in the vertex array itself.
    pub fn upload(gl: &G, positions: &[f32; 9]) -> Result<Self, GeometryError> {
        let vao = gl
            .create_vertex_array()
            .map_err(|reason| GeometryError::Create {
                what: "vertex array",
                reason,
            })?;
        gl.bind_vertex_array(Some(vao));

        let vbo = match gl.create_buffer() {
            Ok(b) => b,
            Err(reason) => {
                gl.bind_vertex_array(None);
                return Err(GeometryError::Create {
                    what: "buffer",
                    reason,
                });
            }
        };
        gl.bind_array_buffer(Some(vbo));
        gl.upload_static_array_buffer(bytemuck::cast_slice(positions.as_slice()));

        gl.vertex_attrib_pointer_f32(POSITION_ATTRIBUTE, POSITION_COMPONENTS, false, 0, 0);
        gl.enable_vertex_attrib_array(POSITION_ATTRIBUTE);

        // With no vertex array bound a core context rejects this call with
        // GL_INVALID_OPERATION; attribute 0 stays enabled on `vao`.
        gl.bind_vertex_array(None);
        gl.disable_vertex_attrib_array(POSITION_ATTRIBUTE);

        log::debug!("uploaded {} vertices to buffer {vbo:?}", positions.len() / 3);

        Ok(Self {
            vao,
            vbo,
            vertex_count: positions.len() as i32 / POSITION_COMPONENTS,
        })
    }

    /// Binds the vertex array and its buffer for drawing.
    pub fn bind(&self, gl: &G) {
        gl.bind_vertex_array(Some(self.vao));
        gl.bind_array_buffer(Some(self.vbo));
    }

    pub fn vertex_count(&self) -> i32 {
        self.vertex_count
    }
}
