// Copyright 2025 eraflo
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use super::conversions::{buffer_id, texture_id, vertex_array_id, IntoGl};
use glow::HasContext;
use lumen_core::math::LinearRgba;
use lumen_core::renderer::api::*;
use lumen_core::renderer::traits::Driver;
use lumen_core::renderer::{ResourceError, ResourceKind};
use std::fmt;

/// The minimum GL version providing vertex array objects and uniform buffers.
const MIN_GL_VERSION: (u32, u32) = (3, 3);

/// An OpenGL implementation of the [`Driver`] boundary.
///
/// Every method forwards to exactly one GL entry point (two for buffer
/// uploads, which bind before uploading). No state is cached here; that is
/// the job of the `StateTracker`.
///
/// Textures are always bound to `GL_TEXTURE_2D` and draws always use
/// `GL_TRIANGLES`.
pub struct GlowDriver {
    gl: glow::Context,
}

impl GlowDriver {
    /// Wraps an existing GL context.
    ///
    /// # Safety
    ///
    /// `gl` must be current on the calling thread for the whole lifetime of
    /// the driver, and the driver must only be used from that thread.
    pub unsafe fn new(gl: glow::Context) -> Self {
        Self { gl }
    }

    /// Loads GL entry points through `loader` and checks the context version.
    ///
    /// # Safety
    ///
    /// Same requirements as [`GlowDriver::new`]; additionally `loader` must
    /// return valid function pointers for the current context.
    pub unsafe fn from_loader<F>(loader: F) -> anyhow::Result<Self>
    where
        F: FnMut(&str) -> *const std::os::raw::c_void,
    {
        let gl = glow::Context::from_loader_function(loader);
        let version = gl.version();
        if version.is_embedded || (version.major, version.minor) < MIN_GL_VERSION {
            anyhow::bail!(
                "OpenGL {}.{} core is required, context reports {:?}",
                MIN_GL_VERSION.0,
                MIN_GL_VERSION.1,
                version
            );
        }
        log::info!(
            "GlowDriver: using {} ({})",
            gl.get_parameter_string(glow::VERSION),
            gl.get_parameter_string(glow::RENDERER)
        );
        Ok(Self::new(gl))
    }

    /// The underlying GL context, for backend code outside the driver
    /// boundary (shader compilation, texture upload, attribute layout).
    pub fn gl(&self) -> &glow::Context {
        &self.gl
    }

    fn set_capability(&self, capability: u32, enabled: bool) {
        unsafe {
            if enabled {
                self.gl.enable(capability);
            } else {
                self.gl.disable(capability);
            }
        }
    }
}

impl fmt::Debug for GlowDriver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GlowDriver")
            .field("version", self.gl.version())
            .finish()
    }
}

fn creation_failed(kind: ResourceKind, details: String) -> ResourceError {
    log::error!("GlowDriver: failed to create {kind}: {details}");
    ResourceError::CreationFailed { kind, details }
}

impl Driver for GlowDriver {
    fn create_buffer(&self) -> Result<BufferId, ResourceError> {
        let buffer = unsafe { self.gl.create_buffer() }
            .map_err(|e| creation_failed(ResourceKind::Buffer, e))?;
        Ok(buffer_id(buffer))
    }

    fn upload_buffer(&self, kind: BufferKind, id: BufferId, data: &[u8]) {
        let target = kind.into_gl();
        unsafe {
            self.gl.bind_buffer(target, id.into_gl());
            self.gl.buffer_data_u8_slice(target, data, glow::STATIC_DRAW);
        }
    }

    fn delete_buffer(&self, id: BufferId) {
        if let Some(buffer) = id.into_gl() {
            unsafe { self.gl.delete_buffer(buffer) };
        }
    }

    fn bind_buffer(&self, kind: BufferKind, id: Option<BufferId>) {
        let buffer = id.and_then(IntoGl::into_gl);
        unsafe { self.gl.bind_buffer(kind.into_gl(), buffer) };
    }

    fn create_texture(&self) -> Result<TextureId, ResourceError> {
        let texture = unsafe { self.gl.create_texture() }
            .map_err(|e| creation_failed(ResourceKind::Texture, e))?;
        Ok(texture_id(texture))
    }

    fn delete_texture(&self, id: TextureId) {
        if let Some(texture) = id.into_gl() {
            unsafe { self.gl.delete_texture(texture) };
        }
    }

    fn create_vertex_array(&self) -> Result<VertexArrayId, ResourceError> {
        let vertex_array = unsafe { self.gl.create_vertex_array() }
            .map_err(|e| creation_failed(ResourceKind::VertexArray, e))?;
        Ok(vertex_array_id(vertex_array))
    }

    fn delete_vertex_array(&self, id: VertexArrayId) {
        if let Some(vertex_array) = id.into_gl() {
            unsafe { self.gl.delete_vertex_array(vertex_array) };
        }
    }

    fn set_color_mask(&self, enabled: bool) {
        unsafe { self.gl.color_mask(enabled, enabled, enabled, enabled) };
    }

    fn set_depth_test(&self, enabled: bool) {
        self.set_capability(glow::DEPTH_TEST, enabled);
    }

    fn set_depth_mask(&self, enabled: bool) {
        unsafe { self.gl.depth_mask(enabled) };
    }

    fn set_stencil_test(&self, enabled: bool) {
        self.set_capability(glow::STENCIL_TEST, enabled);
    }

    fn set_stencil_mask(&self, mask: u32) {
        unsafe { self.gl.stencil_mask(mask) };
    }

    fn set_stencil_func(&self, test: StencilTest, reference: i32, read_mask: u32) {
        unsafe { self.gl.stencil_func(test.into_gl(), reference, read_mask) };
    }

    fn set_stencil_op(
        &self,
        fail: StencilOperation,
        depth_fail: StencilOperation,
        depth_pass: StencilOperation,
    ) {
        unsafe {
            self.gl
                .stencil_op(fail.into_gl(), depth_fail.into_gl(), depth_pass.into_gl())
        };
    }

    fn use_program(&self, program: Option<ProgramId>) {
        let program = program.and_then(IntoGl::into_gl);
        unsafe { self.gl.use_program(program) };
    }

    fn bind_uniform_buffer(&self, slot: u32, id: BufferId) {
        unsafe {
            self.gl
                .bind_buffer_base(glow::UNIFORM_BUFFER, slot, id.into_gl())
        };
    }

    fn set_active_texture_unit(&self, unit: u32) {
        unsafe { self.gl.active_texture(glow::TEXTURE0 + unit) };
    }

    fn bind_texture(&self, id: Option<TextureId>) {
        let texture = id.and_then(IntoGl::into_gl);
        unsafe { self.gl.bind_texture(glow::TEXTURE_2D, texture) };
    }

    fn bind_vertex_array(&self, id: Option<VertexArrayId>) {
        let vertex_array = id.and_then(IntoGl::into_gl);
        unsafe { self.gl.bind_vertex_array(vertex_array) };
    }

    fn draw_indexed(&self, index_count: u32, format: IndexFormat) {
        let count = i32::try_from(index_count).unwrap_or(i32::MAX);
        unsafe {
            self.gl
                .draw_elements(glow::TRIANGLES, count, format.into_gl(), 0)
        };
    }

    fn set_clear_color(&self, color: LinearRgba) {
        unsafe { self.gl.clear_color(color.r, color.g, color.b, color.a) };
    }

    fn clear(&self, flags: ClearFlags) {
        unsafe { self.gl.clear(flags.into_gl()) };
    }
}
