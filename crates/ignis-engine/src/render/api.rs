use std::fmt;

use glow::HasContext;

use crate::coords::Viewport;
use crate::paint::Color;

/// Programmable pipeline stage.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum ShaderStage {
    Vertex,
    Fragment,
}

impl ShaderStage {
    fn gl_enum(self) -> u32 {
        match self {
            ShaderStage::Vertex => glow::VERTEX_SHADER,
            ShaderStage::Fragment => glow::FRAGMENT_SHADER,
        }
    }
}

impl fmt::Display for ShaderStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShaderStage::Vertex => f.write_str("vertex"),
            ShaderStage::Fragment => f.write_str("fragment"),
        }
    }
}

/// Fixed-function state toggled before drawing.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Capability {
    DepthTest,
    CullFace,
}

/// Driver identification strings.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum InfoString {
    Vendor,
    Renderer,
    Version,
    ShadingLanguageVersion,
}

/// The slice of the GL API issued by this crate.
///
/// Handles are opaque associated types so a recording double can stand in
/// for a live context. Every call targets the context current on this thread.
pub trait GlApi {
    type Shader: Copy + fmt::Debug + PartialEq;
    type Program: Copy + fmt::Debug + PartialEq;
    type Buffer: Copy + fmt::Debug + PartialEq;
    type VertexArray: Copy + fmt::Debug + PartialEq;

    fn create_shader(&self, stage: ShaderStage) -> Result<Self::Shader, String>;
    fn shader_source(&self, shader: Self::Shader, source: &str);
    fn compile_shader(&self, shader: Self::Shader);
    fn shader_compile_status(&self, shader: Self::Shader) -> bool;
    fn shader_info_log(&self, shader: Self::Shader) -> String;
    fn delete_shader(&self, shader: Self::Shader);

    fn create_program(&self) -> Result<Self::Program, String>;
    fn attach_shader(&self, program: Self::Program, shader: Self::Shader);
    fn detach_shader(&self, program: Self::Program, shader: Self::Shader);
    fn link_program(&self, program: Self::Program);
    fn program_link_status(&self, program: Self::Program) -> bool;
    fn validate_program(&self, program: Self::Program);
    fn program_info_log(&self, program: Self::Program) -> String;
    fn delete_program(&self, program: Self::Program);
    fn use_program(&self, program: Option<Self::Program>);

    fn create_vertex_array(&self) -> Result<Self::VertexArray, String>;
    fn bind_vertex_array(&self, vao: Option<Self::VertexArray>);
    fn create_buffer(&self) -> Result<Self::Buffer, String>;
    fn bind_array_buffer(&self, buffer: Option<Self::Buffer>);
    /// Uploads `data` to the bound array buffer with a static-draw hint.
    fn upload_static_array_buffer(&self, data: &[u8]);
    fn vertex_attrib_pointer_f32(
        &self,
        index: u32,
        size: i32,
        normalized: bool,
        stride: i32,
        offset: i32,
    );
    fn enable_vertex_attrib_array(&self, index: u32);
    fn disable_vertex_attrib_array(&self, index: u32);

    fn disable(&self, capability: Capability);
    fn viewport(&self, viewport: Viewport);
    fn clear_color(&self, color: Color);
    /// Clears color and depth attachments of the bound framebuffer.
    fn clear_color_and_depth(&self);
    fn draw_triangles(&self, first: i32, count: i32);

    fn info_string(&self, name: InfoString) -> String;
}

/// Loaded GL entry points for the context owned by a [`GlDevice`].
///
/// [`GlDevice`]: crate::device::GlDevice
pub struct Gl {
    raw: glow::Context,
}

impl Gl {
    /// Wraps loaded entry points.
    ///
    /// # Safety
    /// The context the pointers were resolved for must be current on the
    /// calling thread for as long as this value is used.
    pub(crate) unsafe fn from_raw(raw: glow::Context) -> Self {
        Self { raw }
    }
}

impl fmt::Debug for Gl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Gl").finish_non_exhaustive()
    }
}

// SAFETY (all methods): `Gl` is only constructed by `GlDevice` after its
// context was made current, and the device never hands it out across threads.
impl GlApi for Gl {
    type Shader = glow::NativeShader;
    type Program = glow::NativeProgram;
    type Buffer = glow::NativeBuffer;
    type VertexArray = glow::NativeVertexArray;

    fn create_shader(&self, stage: ShaderStage) -> Result<Self::Shader, String> {
        unsafe { self.raw.create_shader(stage.gl_enum()) }
    }

    fn shader_source(&self, shader: Self::Shader, source: &str) {
        unsafe { self.raw.shader_source(shader, source) }
    }

    fn compile_shader(&self, shader: Self::Shader) {
        unsafe { self.raw.compile_shader(shader) }
    }

    fn shader_compile_status(&self, shader: Self::Shader) -> bool {
        unsafe { self.raw.get_shader_compile_status(shader) }
    }

    fn shader_info_log(&self, shader: Self::Shader) -> String {
        unsafe { self.raw.get_shader_info_log(shader) }
    }

    fn delete_shader(&self, shader: Self::Shader) {
        unsafe { self.raw.delete_shader(shader) }
    }

    fn create_program(&self) -> Result<Self::Program, String> {
        unsafe { self.raw.create_program() }
    }

    fn attach_shader(&self, program: Self::Program, shader: Self::Shader) {
        unsafe { self.raw.attach_shader(program, shader) }
    }

    fn detach_shader(&self, program: Self::Program, shader: Self::Shader) {
        unsafe { self.raw.detach_shader(program, shader) }
    }

    fn link_program(&self, program: Self::Program) {
        unsafe { self.raw.link_program(program) }
    }

    fn program_link_status(&self, program: Self::Program) -> bool {
        unsafe { self.raw.get_program_link_status(program) }
    }

    fn validate_program(&self, program: Self::Program) {
        unsafe { self.raw.validate_program(program) }
    }

    fn program_info_log(&self, program: Self::Program) -> String {
        unsafe { self.raw.get_program_info_log(program) }
    }

    fn delete_program(&self, program: Self::Program) {
        unsafe { self.raw.delete_program(program) }
    }

    fn use_program(&self, program: Option<Self::Program>) {
        unsafe { self.raw.use_program(program) }
    }

    fn create_vertex_array(&self) -> Result<Self::VertexArray, String> {
        unsafe { self.raw.create_vertex_array() }
    }

    fn bind_vertex_array(&self, vao: Option<Self::VertexArray>) {
        unsafe { self.raw.bind_vertex_array(vao) }
    }

    fn create_buffer(&self) -> Result<Self::Buffer, String> {
        unsafe { self.raw.create_buffer() }
    }

    fn bind_array_buffer(&self, buffer: Option<Self::Buffer>) {
        unsafe { self.raw.bind_buffer(glow::ARRAY_BUFFER, buffer) }
    }

    fn upload_static_array_buffer(&self, data: &[u8]) {
        unsafe {
            self.raw
                .buffer_data_u8_slice(glow::ARRAY_BUFFER, data, glow::STATIC_DRAW)
        }
    }

    fn vertex_attrib_pointer_f32(
        &self,
        index: u32,
        size: i32,
        normalized: bool,
        stride: i32,
        offset: i32,
    ) {
        unsafe {
            self.raw
                .vertex_attrib_pointer_f32(index, size, glow::FLOAT, normalized, stride, offset)
        }
    }

    fn enable_vertex_attrib_array(&self, index: u32) {
        unsafe { self.raw.enable_vertex_attrib_array(index) }
    }

    fn disable_vertex_attrib_array(&self, index: u32) {
        unsafe { self.raw.disable_vertex_attrib_array(index) }
    }

    fn disable(&self, capability: Capability) {
        let cap = match capability {
            Capability::DepthTest => glow::DEPTH_TEST,
            Capability::CullFace => glow::CULL_FACE,
        };
        unsafe { self.raw.disable(cap) }
    }

    fn viewport(&self, viewport: Viewport) {
        let (x, y, w, h) = viewport.gl_rect();
        unsafe { self.raw.viewport(x, y, w, h) }
    }

    fn clear_color(&self, color: Color) {
        unsafe { self.raw.clear_color(color.r, color.g, color.b, color.a) }
    }

    fn clear_color_and_depth(&self) {
        unsafe { self.raw.clear(glow::COLOR_BUFFER_BIT | glow::DEPTH_BUFFER_BIT) }
    }

    fn draw_triangles(&self, first: i32, count: i32) {
        unsafe { self.raw.draw_arrays(glow::TRIANGLES, first, count) }
    }

    fn info_string(&self, name: InfoString) -> String {
        let param = match name {
            InfoString::Vendor => glow::VENDOR,
            InfoString::Renderer => glow::RENDERER,
            InfoString::Version => glow::VERSION,
            InfoString::ShadingLanguageVersion => glow::SHADING_LANGUAGE_VERSION,
        };
        unsafe { self.raw.get_parameter_string(param) }
    }
}
