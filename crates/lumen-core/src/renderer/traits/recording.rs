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

//! A driver that records every call, used by the unit tests of this crate.

use super::Driver;
use crate::math::LinearRgba;
use crate::renderer::api::*;
use crate::renderer::error::ResourceError;
use std::cell::{Cell, RefCell};

/// One recorded driver call.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Call {
    CreateBuffer(BufferId),
    UploadBuffer(BufferKind, BufferId, usize),
    DeleteBuffer(BufferId),
    BindBuffer(BufferKind, Option<BufferId>),
    CreateTexture(TextureId),
    DeleteTexture(TextureId),
    CreateVertexArray(VertexArrayId),
    DeleteVertexArray(VertexArrayId),
    ColorMask(bool),
    DepthTest(bool),
    DepthMask(bool),
    StencilEnable(bool),
    StencilMask(u32),
    StencilFunc(StencilTest, i32, u32),
    StencilOp(StencilOperation, StencilOperation, StencilOperation),
    UseProgram(Option<ProgramId>),
    BindUniformBuffer(u32, BufferId),
    ActiveTextureUnit(u32),
    BindTexture(Option<TextureId>),
    BindVertexArray(Option<VertexArrayId>),
    DrawIndexed(u32, IndexFormat),
    ClearColor(LinearRgba),
    Clear(ClearFlags),
}

#[derive(Debug, Default)]
pub(crate) struct RecordingDriver {
    calls: RefCell<Vec<Call>>,
    next_id: Cell<u32>,
    pub(crate) fail_creation: Cell<bool>,
}

impl RecordingDriver {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    pub(crate) fn take_calls(&self) -> Vec<Call> {
        self.calls.take()
    }

    fn record(&self, call: Call) {
        self.calls.borrow_mut().push(call);
    }

    fn allocate(&self, kind: crate::renderer::ResourceKind) -> Result<u32, ResourceError> {
        if self.fail_creation.get() {
            return Err(ResourceError::CreationFailed {
                kind,
                details: "out of ids".to_string(),
            });
        }
        let id = self.next_id.get() + 1;
        self.next_id.set(id);
        Ok(id)
    }
}

impl Driver for RecordingDriver {
    fn create_buffer(&self) -> Result<BufferId, ResourceError> {
        let id = BufferId(self.allocate(crate::renderer::ResourceKind::Buffer)?);
        self.record(Call::CreateBuffer(id));
        Ok(id)
    }

    fn upload_buffer(&self, kind: BufferKind, id: BufferId, data: &[u8]) {
        self.record(Call::UploadBuffer(kind, id, data.len()));
    }

    fn delete_buffer(&self, id: BufferId) {
        self.record(Call::DeleteBuffer(id));
    }

    fn bind_buffer(&self, kind: BufferKind, id: Option<BufferId>) {
        self.record(Call::BindBuffer(kind, id));
    }

    fn create_texture(&self) -> Result<TextureId, ResourceError> {
        let id = TextureId(self.allocate(crate::renderer::ResourceKind::Texture)?);
        self.record(Call::CreateTexture(id));
        Ok(id)
    }

    fn delete_texture(&self, id: TextureId) {
        self.record(Call::DeleteTexture(id));
    }

    fn create_vertex_array(&self) -> Result<VertexArrayId, ResourceError> {
        let id = VertexArrayId(self.allocate(crate::renderer::ResourceKind::VertexArray)?);
        self.record(Call::CreateVertexArray(id));
        Ok(id)
    }

    fn delete_vertex_array(&self, id: VertexArrayId) {
        self.record(Call::DeleteVertexArray(id));
    }

    fn set_color_mask(&self, enabled: bool) {
        self.record(Call::ColorMask(enabled));
    }

    fn set_depth_test(&self, enabled: bool) {
        self.record(Call::DepthTest(enabled));
    }

    fn set_depth_mask(&self, enabled: bool) {
        self.record(Call::DepthMask(enabled));
    }

    fn set_stencil_test(&self, enabled: bool) {
        self.record(Call::StencilEnable(enabled));
    }

    fn set_stencil_mask(&self, mask: u32) {
        self.record(Call::StencilMask(mask));
    }

    fn set_stencil_func(&self, test: StencilTest, reference: i32, read_mask: u32) {
        self.record(Call::StencilFunc(test, reference, read_mask));
    }

    fn set_stencil_op(
        &self,
        fail: StencilOperation,
        depth_fail: StencilOperation,
        depth_pass: StencilOperation,
    ) {
        self.record(Call::StencilOp(fail, depth_fail, depth_pass));
    }

    fn use_program(&self, program: Option<ProgramId>) {
        self.record(Call::UseProgram(program));
    }

    fn bind_uniform_buffer(&self, slot: u32, id: BufferId) {
        self.record(Call::BindUniformBuffer(slot, id));
    }

    fn set_active_texture_unit(&self, unit: u32) {
        self.record(Call::ActiveTextureUnit(unit));
    }

    fn bind_texture(&self, id: Option<TextureId>) {
        self.record(Call::BindTexture(id));
    }

    fn bind_vertex_array(&self, id: Option<VertexArrayId>) {
        self.record(Call::BindVertexArray(id));
    }

    fn draw_indexed(&self, index_count: u32, format: IndexFormat) {
        self.record(Call::DrawIndexed(index_count, format));
    }

    fn set_clear_color(&self, color: LinearRgba) {
        self.record(Call::ClearColor(color));
    }

    fn clear(&self, flags: ClearFlags) {
        self.record(Call::Clear(flags));
    }
}
