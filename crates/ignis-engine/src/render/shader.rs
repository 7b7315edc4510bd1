use thiserror::Error;

use super::api::{GlApi, ShaderStage};

/// Pass-through vertex stage: attribute 0 is already in clip space.
pub const PASSTHROUGH_VERTEX_SRC: &str = include_str!("shaders/passthrough.vert");

/// Fragment stage emitting a constant opaque orange.
pub const SOLID_ORANGE_FRAGMENT_SRC: &str = include_str!("shaders/solid_orange.frag");

/// Failure while turning shader source into a linked program.
#[derive(Debug, Error)]
pub enum ShaderError {
    #[error("failed to create GL {what}: {reason}")]
    Create { what: &'static str, reason: String },

    #[error("{stage} shader failed to compile:\n{log}")]
    Compile { stage: ShaderStage, log: String },

    #[error("shader program failed to link:\n{log}")]
    Link { log: String },
}

/// A linked vertex + fragment program.
///
/// The intermediate stage objects are released once linking finishes; only
/// the program id is retained.
#[derive(Debug)]
pub struct ShaderProgram<G: GlApi> {
    program: G::Program,
}

impl<G: GlApi> ShaderProgram<G> {
    /// Compiles both stages, links them and validates the result.
    ///
    /// Compile and link status are checked explicitly; failures carry the
    /// driver's info log.
    pub fn build(gl: &G, vertex_src: &str, fragment_src: &str) -> Result<Self, ShaderError> {
        let vs = compile_stage(gl, ShaderStage::Vertex, vertex_src)?;
        let fs = match compile_stage(gl, ShaderStage::Fragment, fragment_src) {
            Ok(fs) => fs,
            Err(e) => {
                gl.delete_shader(vs);
                return Err(e);
            }
        };

        let program = match gl.create_program() {
            Ok(p) => p,
            Err(reason) => {
                gl.delete_shader(vs);
                gl.delete_shader(fs);
                return Err(ShaderError::Create {
                    what: "program",
                    reason,
                });
            }
        };

        gl.attach_shader(program, vs);
        gl.attach_shader(program, fs);
        gl.link_program(program);
        let linked = gl.program_link_status(program);

        // Stage objects are no longer needed once the link has run.
        for shader in [vs, fs] {
            gl.detach_shader(program, shader);
            gl.delete_shader(shader);
        }

        if !linked {
            let log = gl.program_info_log(program);
            gl.delete_program(program);
            return Err(ShaderError::Link { log });
        }

        gl.validate_program(program);
        let validation = gl.program_info_log(program);
        if !validation.trim().is_empty() {
            log::debug!("program validation log: {}", validation.trim());
        }

        log::debug!("shader program {program:?} linked");
        Ok(Self { program })
    }

    /// Makes this program current for subsequent draws.
    pub fn bind(&self, gl: &G) {
        gl.use_program(Some(self.program));
    }

    pub fn id(&self) -> G::Program {
        self.program
    }

    pub fn is_linked(&self, gl: &G) -> bool {
        gl.program_link_status(self.program)
    }
}

fn compile_stage<G: GlApi>(
    gl: &G,
    stage: ShaderStage,
    source: &str,
) -> Result<G::Shader, ShaderError> {
    let shader = gl.create_shader(stage).map_err(|reason| ShaderError::Create {
        what: match stage {
            ShaderStage::Vertex => "vertex shader",
            ShaderStage::Fragment => "fragment shader",
        },
        reason,
    })?;

    gl.shader_source(shader, source);
    gl.compile_shader(shader);

    if !gl.shader_compile_status(shader) {
        let log = gl.shader_info_log(shader);
        gl.delete_shader(shader);
        return Err(ShaderError::Compile { stage, log });
    }

    Ok(shader)
}
