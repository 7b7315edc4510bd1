//! Recording GL double used by unit tests across the crate.

use std::cell::RefCell;
use std::collections::{BTreeMap, BTreeSet};

use crate::coords::Viewport;
use crate::paint::Color;

use super::api::{Capability, GlApi, InfoString, ShaderStage};

/// One recorded GL call.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Call {
    CreateShader(ShaderStage, u32),
    ShaderSource(u32),
    CompileShader(u32),
    DeleteShader(u32),
    CreateProgram(u32),
    AttachShader(u32, u32),
    DetachShader(u32, u32),
    LinkProgram(u32),
    ValidateProgram(u32),
    DeleteProgram(u32),
    UseProgram(Option<u32>),
    CreateVertexArray(u32),
    BindVertexArray(Option<u32>),
    CreateBuffer(u32),
    BindArrayBuffer(Option<u32>),
    Upload(usize),
    AttribPointer {
        index: u32,
        size: i32,
        normalized: bool,
        stride: i32,
        offset: i32,
    },
    EnableAttrib(u32),
    DisableAttrib(u32),
    Disable(Capability),
    Viewport(Viewport),
    ClearColor(Color),
    Clear,
    DrawTriangles(i32, i32),
}

#[derive(Debug, Default)]
struct State {
    next_id: u32,
    calls: Vec<Call>,
    sources: BTreeMap<u32, String>,
    stages: BTreeMap<u32, ShaderStage>,
    compiled: BTreeMap<u32, bool>,
    attached: BTreeMap<u32, Vec<u32>>,
    linked: BTreeMap<u32, bool>,
    live_shaders: BTreeSet<u32>,
    buffers: BTreeMap<u32, Vec<u8>>,
    bound_vao: Option<u32>,
    bound_buffer: Option<u32>,
    // Attribute state is recorded on the bound vertex array; with none bound
    // enable/disable are rejected by core GL and have no effect here either.
    enabled_attribs: BTreeMap<u32, BTreeSet<u32>>,
    attrib_layouts: BTreeMap<(u32, u32), (i32, i32)>,
}

/// GL double that "compiles" any source not containing `SYNTAX ERROR` and
/// "links" when both attached stages compiled and neither contains
/// `LINK ERROR`.
#[derive(Debug, Default)]
pub(crate) struct MockGl {
    state: RefCell<State>,
    fail_create: bool,
}

impl MockGl {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Every object-creation call fails.
    pub(crate) fn failing_creation() -> Self {
        Self {
            fail_create: true,
            ..Self::default()
        }
    }

    pub(crate) fn calls(&self) -> Vec<Call> {
        self.state.borrow().calls.clone()
    }

    pub(crate) fn clear_calls(&self) {
        self.state.borrow_mut().calls.clear();
    }

    pub(crate) fn live_shaders(&self) -> usize {
        self.state.borrow().live_shaders.len()
    }

    pub(crate) fn buffer_contents(&self) -> Vec<Vec<u8>> {
        self.state.borrow().buffers.values().cloned().collect()
    }

    pub(crate) fn bound_vao(&self) -> Option<u32> {
        self.state.borrow().bound_vao
    }

    pub(crate) fn bound_buffer(&self) -> Option<u32> {
        self.state.borrow().bound_buffer
    }

    /// Attributes enabled on `vao`.
    pub(crate) fn enabled_attribs(&self, vao: u32) -> Vec<u32> {
        self.state
            .borrow()
            .enabled_attribs
            .get(&vao)
            .map(|set| set.iter().copied().collect())
            .unwrap_or_default()
    }

    /// `(size, stride)` recorded for attribute `index` of `vao`.
    pub(crate) fn attrib_layout(&self, vao: u32, index: u32) -> Option<(i32, i32)> {
        self.state.borrow().attrib_layouts.get(&(vao, index)).copied()
    }

    fn alloc(&self) -> u32 {
        let mut st = self.state.borrow_mut();
        st.next_id += 1;
        st.next_id
    }

    fn record(&self, call: Call) {
        self.state.borrow_mut().calls.push(call);
    }
}

impl GlApi for MockGl {
    type Shader = u32;
    type Program = u32;
    type Buffer = u32;
    type VertexArray = u32;

    fn create_shader(&self, stage: ShaderStage) -> Result<u32, String> {
        if self.fail_create {
            return Err("out of shader objects".into());
        }
        let id = self.alloc();
        let mut st = self.state.borrow_mut();
        st.stages.insert(id, stage);
        st.live_shaders.insert(id);
        st.calls.push(Call::CreateShader(stage, id));
        Ok(id)
    }

    fn shader_source(&self, shader: u32, source: &str) {
        let mut st = self.state.borrow_mut();
        st.sources.insert(shader, source.to_owned());
        st.calls.push(Call::ShaderSource(shader));
    }

    fn compile_shader(&self, shader: u32) {
        let mut st = self.state.borrow_mut();
        let ok = st
            .sources
            .get(&shader)
            .is_some_and(|src| !src.contains("SYNTAX ERROR"));
        st.compiled.insert(shader, ok);
        st.calls.push(Call::CompileShader(shader));
    }

    fn shader_compile_status(&self, shader: u32) -> bool {
        self.state.borrow().compiled.get(&shader).copied().unwrap_or(false)
    }

    fn shader_info_log(&self, shader: u32) -> String {
        if self.shader_compile_status(shader) {
            String::new()
        } else {
            "0:1(1): error: syntax error, unexpected IDENTIFIER".into()
        }
    }

    fn delete_shader(&self, shader: u32) {
        let mut st = self.state.borrow_mut();
        st.live_shaders.remove(&shader);
        st.calls.push(Call::DeleteShader(shader));
    }

    fn create_program(&self) -> Result<u32, String> {
        if self.fail_create {
            return Err("out of program objects".into());
        }
        let id = self.alloc();
        self.record(Call::CreateProgram(id));
        Ok(id)
    }

    fn attach_shader(&self, program: u32, shader: u32) {
        let mut st = self.state.borrow_mut();
        st.attached.entry(program).or_default().push(shader);
        st.calls.push(Call::AttachShader(program, shader));
    }

    fn detach_shader(&self, program: u32, shader: u32) {
        let mut st = self.state.borrow_mut();
        if let Some(list) = st.attached.get_mut(&program) {
            list.retain(|s| *s != shader);
        }
        st.calls.push(Call::DetachShader(program, shader));
    }

    fn link_program(&self, program: u32) {
        let mut st = self.state.borrow_mut();
        let shaders = st.attached.get(&program).cloned().unwrap_or_default();
        let has = |stage: ShaderStage| shaders.iter().any(|s| st.stages.get(s) == Some(&stage));
        let ok = has(ShaderStage::Vertex)
            && has(ShaderStage::Fragment)
            && shaders.iter().all(|s| {
                st.compiled.get(s).copied().unwrap_or(false)
                    && !st.sources.get(s).is_some_and(|src| src.contains("LINK ERROR"))
            });
        st.linked.insert(program, ok);
        st.calls.push(Call::LinkProgram(program));
    }

    fn program_link_status(&self, program: u32) -> bool {
        self.state.borrow().linked.get(&program).copied().unwrap_or(false)
    }

    fn validate_program(&self, program: u32) {
        self.record(Call::ValidateProgram(program));
    }

    fn program_info_log(&self, program: u32) -> String {
        if self.program_link_status(program) {
            String::new()
        } else {
            "error: unresolved varying".into()
        }
    }

    fn delete_program(&self, program: u32) {
        self.record(Call::DeleteProgram(program));
    }

    fn use_program(&self, program: Option<u32>) {
        self.record(Call::UseProgram(program));
    }

    fn create_vertex_array(&self) -> Result<u32, String> {
        if self.fail_create {
            return Err("out of vertex arrays".into());
        }
        let id = self.alloc();
        self.record(Call::CreateVertexArray(id));
        Ok(id)
    }

    fn bind_vertex_array(&self, vao: Option<u32>) {
        let mut st = self.state.borrow_mut();
        st.bound_vao = vao;
        st.calls.push(Call::BindVertexArray(vao));
    }

    fn create_buffer(&self) -> Result<u32, String> {
        if self.fail_create {
            return Err("out of buffers".into());
        }
        let id = self.alloc();
        let mut st = self.state.borrow_mut();
        st.buffers.insert(id, Vec::new());
        st.calls.push(Call::CreateBuffer(id));
        Ok(id)
    }

    fn bind_array_buffer(&self, buffer: Option<u32>) {
        let mut st = self.state.borrow_mut();
        st.bound_buffer = buffer;
        st.calls.push(Call::BindArrayBuffer(buffer));
    }

    fn upload_static_array_buffer(&self, data: &[u8]) {
        let mut st = self.state.borrow_mut();
        if let Some(id) = st.bound_buffer {
            st.buffers.insert(id, data.to_vec());
        }
        st.calls.push(Call::Upload(data.len()));
    }

    fn vertex_attrib_pointer_f32(
        &self,
        index: u32,
        size: i32,
        normalized: bool,
        stride: i32,
        offset: i32,
    ) {
        let mut st = self.state.borrow_mut();
        if let Some(vao) = st.bound_vao {
            st.attrib_layouts.insert((vao, index), (size, stride));
        }
        st.calls.push(Call::AttribPointer {
            index,
            size,
            normalized,
            stride,
            offset,
        });
    }

    fn enable_vertex_attrib_array(&self, index: u32) {
        let mut st = self.state.borrow_mut();
        if let Some(vao) = st.bound_vao {
            st.enabled_attribs.entry(vao).or_default().insert(index);
        }
        st.calls.push(Call::EnableAttrib(index));
    }

    fn disable_vertex_attrib_array(&self, index: u32) {
        let mut st = self.state.borrow_mut();
        if let Some(vao) = st.bound_vao {
            if let Some(set) = st.enabled_attribs.get_mut(&vao) {
                set.remove(&index);
            }
        }
        st.calls.push(Call::DisableAttrib(index));
    }

    fn disable(&self, capability: Capability) {
        self.record(Call::Disable(capability));
    }

    fn viewport(&self, viewport: Viewport) {
        self.record(Call::Viewport(viewport));
    }

    fn clear_color(&self, color: Color) {
        self.record(Call::ClearColor(color));
    }

    fn clear_color_and_depth(&self) {
        self.record(Call::Clear);
    }

    fn draw_triangles(&self, first: i32, count: i32) {
        self.record(Call::DrawTriangles(first, count));
    }

    fn info_string(&self, name: InfoString) -> String {
        match name {
            InfoString::Vendor => "Mock Vendor".into(),
            InfoString::Renderer => "Mock Renderer".into(),
            InfoString::Version => "4.1 Mock".into(),
            InfoString::ShadingLanguageVersion => "4.10".into(),
        }
    }
}
