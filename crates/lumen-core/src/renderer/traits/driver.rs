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

use crate::math::LinearRgba;
use crate::renderer::api::*;
use crate::renderer::error::ResourceError;
use std::fmt::Debug;

/// The boundary to an immediate-mode graphics API.
///
/// A `Driver` exposes the global, stateful surface of the underlying API: mask
/// toggles, depth and stencil state, program/buffer/texture binding, indexed
/// draw submission, and the creation and deletion of raw object ids.
///
/// Calls are synchronous and take effect in the order they are made on the
/// calling thread. Implementations are expected to forward each call directly,
/// without caching: redundant-state elimination is the job of the
/// [`StateTracker`](crate::renderer::StateTracker).
///
/// All methods take `&self`; backends wrap an API context that already has
/// interior state. A driver is bound to the thread that owns the graphics
/// context and is deliberately not required to be `Send` or `Sync`.
pub trait Driver: Debug {
    // --- Resource ids ---

    /// Allocates a new buffer object id.
    /// ## Errors
    /// * `ResourceError::CreationFailed` - If the backend could not allocate the buffer.
    fn create_buffer(&self) -> Result<BufferId, ResourceError>;

    /// Replaces the whole contents of buffer `id`, bound as `kind`.
    fn upload_buffer(&self, kind: BufferKind, id: BufferId, data: &[u8]);

    /// Releases buffer `id`. Never called with the empty sentinel.
    fn delete_buffer(&self, id: BufferId);

    /// Binds `id` to the target for `kind`, or unbinds that target with `None`.
    fn bind_buffer(&self, kind: BufferKind, id: Option<BufferId>);

    /// Allocates a new texture object id.
    /// ## Errors
    /// * `ResourceError::CreationFailed` - If the backend could not allocate the texture.
    fn create_texture(&self) -> Result<TextureId, ResourceError>;

    /// Releases texture `id`. Never called with the empty sentinel.
    fn delete_texture(&self, id: TextureId);

    /// Allocates a new vertex array object id.
    /// ## Errors
    /// * `ResourceError::CreationFailed` - If the backend could not allocate the vertex array.
    fn create_vertex_array(&self) -> Result<VertexArrayId, ResourceError>;

    /// Releases vertex array `id`. Never called with the empty sentinel.
    fn delete_vertex_array(&self, id: VertexArrayId);

    // --- Fixed-function state ---

    /// Enables or disables writes to all four color channels at once.
    fn set_color_mask(&self, enabled: bool);

    /// Enables or disables the depth test.
    fn set_depth_test(&self, enabled: bool);

    /// Enables or disables writes to the depth buffer.
    fn set_depth_mask(&self, enabled: bool);

    /// Enables or disables the stencil test.
    fn set_stencil_test(&self, enabled: bool);

    /// Sets which stencil bits can be written.
    fn set_stencil_mask(&self, mask: u32);

    /// Sets the stencil comparison, its reference value and read mask.
    fn set_stencil_func(&self, test: StencilTest, reference: i32, read_mask: u32);

    /// Sets the stencil operations for fail, depth-fail and depth-pass outcomes.
    fn set_stencil_op(
        &self,
        fail: StencilOperation,
        depth_fail: StencilOperation,
        depth_pass: StencilOperation,
    );

    // --- Bindings ---

    /// Makes `program` current, or unbinds the current program with `None`.
    fn use_program(&self, program: Option<ProgramId>);

    /// Exposes uniform buffer `id` at binding `slot`.
    fn bind_uniform_buffer(&self, slot: u32, id: BufferId);

    /// Selects the texture unit affected by subsequent [`bind_texture`](Self::bind_texture) calls.
    fn set_active_texture_unit(&self, unit: u32);

    /// Binds `id` to the active texture unit, or unbinds it with `None`.
    fn bind_texture(&self, id: Option<TextureId>);

    /// Binds vertex array `id`, or unbinds the current one with `None`.
    fn bind_vertex_array(&self, id: Option<VertexArrayId>);

    // --- Submission ---

    /// Draws `index_count` indices of type `format` from the bound index buffer as triangles.
    fn draw_indexed(&self, index_count: u32, format: IndexFormat);

    /// Sets the color used by subsequent color clears.
    fn set_clear_color(&self, color: LinearRgba);

    /// Clears the selected framebuffer planes.
    fn clear(&self, flags: ClearFlags);
}
