use crate::core::{FrameCtx, Scene};
use crate::paint::Color;

use super::api::{Capability, GlApi};
use super::geometry::{GeometryError, TriangleMesh, TRIANGLE_VERTICES};
use super::shader::{ShaderError, ShaderProgram, PASSTHROUGH_VERTEX_SRC, SOLID_ORANGE_FRAGMENT_SRC};

/// Scene that issues no GL calls; the window only shows what the platform
/// presents.
#[derive(Debug, Default, Copy, Clone)]
pub struct BlankScene;

impl<G: GlApi> Scene<G> for BlankScene {
    fn draw(&mut self, _gl: &G, _frame: &FrameCtx) {}
}

/// A single orange triangle over a solid background.
#[derive(Debug)]
pub struct TriangleScene<G: GlApi> {
    program: ShaderProgram<G>,
    mesh: TriangleMesh<G>,
    clear_color: Color,
}

impl<G: GlApi> TriangleScene<G> {
    /// Builds the shader program first, then uploads the geometry.
    pub fn new(gl: &G, clear_color: Color) -> anyhow::Result<Self> {
        let program = ShaderProgram::build(gl, PASSTHROUGH_VERTEX_SRC, SOLID_ORANGE_FRAGMENT_SRC)
            .map_err(SceneError::Shader)?;
        let mesh = TriangleMesh::upload(gl, &TRIANGLE_VERTICES).map_err(SceneError::Geometry)?;

        Ok(Self {
            program,
            mesh,
            clear_color: clear_color.clamped(),
        })
    }

    pub fn program(&self) -> &ShaderProgram<G> {
        &self.program
    }

    pub fn mesh(&self) -> &TriangleMesh<G> {
        &self.mesh
    }
}

impl<G: GlApi> Scene<G> for TriangleScene<G> {
    fn predraw(&mut self, gl: &G, frame: &FrameCtx) {
        gl.disable(Capability::DepthTest);
        gl.disable(Capability::CullFace);

        gl.viewport(frame.viewport);
        gl.clear_color(self.clear_color);
        gl.clear_color_and_depth();

        self.program.bind(gl);
    }

    fn draw(&mut self, gl: &G, _frame: &FrameCtx) {
        self.mesh.bind(gl);
        gl.draw_triangles(0, self.mesh.vertex_count());
    }
}

/// Setup failure of a scene, kept typed so callers can match on the stage.
#[derive(Debug, thiserror::Error)]
pub enum SceneError {
    #[error(transparent)]
    Shader(#[from] ShaderError),

    #[error(transparent)]
    Geometry(#[from] GeometryError),
}
