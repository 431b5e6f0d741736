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

//! Conversions between `lumen-core` types and OpenGL enums and object names.

use glow::{NativeBuffer, NativeProgram, NativeTexture, NativeVertexArray};
use lumen_core::renderer::api::{
    BufferId, BufferKind, ClearFlags, IndexFormat, ProgramId, StencilOperation, StencilTest,
    TextureId, VertexArrayId,
};
use std::num::NonZeroU32;

/// A local extension trait to convert our engine's types into GL-compatible values.
/// This avoids Rust's orphan rules while keeping an idiomatic `.into_gl()` syntax.
pub trait IntoGl<T> {
    /// Consumes self and converts it into a GL-compatible value.
    fn into_gl(self) -> T;
}

// --- Enums ---

impl IntoGl<u32> for BufferKind {
    fn into_gl(self) -> u32 {
        match self {
            BufferKind::Vertex => glow::ARRAY_BUFFER,
            BufferKind::Index => glow::ELEMENT_ARRAY_BUFFER,
            BufferKind::Uniform => glow::UNIFORM_BUFFER,
        }
    }
}

impl IntoGl<u32> for IndexFormat {
    fn into_gl(self) -> u32 {
        match self {
            IndexFormat::Uint16 => glow::UNSIGNED_SHORT,
            IndexFormat::Uint32 => glow::UNSIGNED_INT,
        }
    }
}

impl IntoGl<u32> for StencilTest {
    fn into_gl(self) -> u32 {
        match self {
            StencilTest::Always => glow::ALWAYS,
            StencilTest::Equal => glow::EQUAL,
            StencilTest::NotEqual => glow::NOTEQUAL,
        }
    }
}

impl IntoGl<u32> for StencilOperation {
    fn into_gl(self) -> u32 {
        match self {
            StencilOperation::Keep => glow::KEEP,
            StencilOperation::Replace => glow::REPLACE,
        }
    }
}

impl IntoGl<u32> for ClearFlags {
    fn into_gl(self) -> u32 {
        let mut mask = 0;
        if self.contains(ClearFlags::COLOR) {
            mask |= glow::COLOR_BUFFER_BIT;
        }
        if self.contains(ClearFlags::DEPTH) {
            mask |= glow::DEPTH_BUFFER_BIT;
        }
        if self.contains(ClearFlags::STENCIL) {
            mask |= glow::STENCIL_BUFFER_BIT;
        }
        mask
    }
}

// --- Object names ---
//
// GL never hands out name 0, which is also the empty sentinel of every
// `lumen-core` handle, so the mapping is total in both directions.

impl IntoGl<Option<NativeBuffer>> for BufferId {
    fn into_gl(self) -> Option<NativeBuffer> {
        NonZeroU32::new(self.0).map(NativeBuffer)
    }
}

impl IntoGl<Option<NativeTexture>> for TextureId {
    fn into_gl(self) -> Option<NativeTexture> {
        NonZeroU32::new(self.0).map(NativeTexture)
    }
}

impl IntoGl<Option<NativeVertexArray>> for VertexArrayId {
    fn into_gl(self) -> Option<NativeVertexArray> {
        NonZeroU32::new(self.0).map(NativeVertexArray)
    }
}

impl IntoGl<Option<NativeProgram>> for ProgramId {
    fn into_gl(self) -> Option<NativeProgram> {
        NonZeroU32::new(self.0).map(NativeProgram)
    }
}

/// Wraps a program linked by backend code so it can be used in a `PipelineState`.
pub fn program_id(program: NativeProgram) -> ProgramId {
    ProgramId(program.0.get())
}

/// Wraps a texture created by backend code.
pub fn texture_id(texture: NativeTexture) -> TextureId {
    TextureId(texture.0.get())
}

pub(crate) fn buffer_id(buffer: NativeBuffer) -> BufferId {
    BufferId(buffer.0.get())
}

pub(crate) fn vertex_array_id(vertex_array: NativeVertexArray) -> VertexArrayId {
    VertexArrayId(vertex_array.0.get())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn buffer_kinds_map_to_targets() {
        assert_eq!(BufferKind::Vertex.into_gl(), glow::ARRAY_BUFFER);
        assert_eq!(BufferKind::Index.into_gl(), glow::ELEMENT_ARRAY_BUFFER);
        assert_eq!(BufferKind::Uniform.into_gl(), glow::UNIFORM_BUFFER);
    }

    #[test]
    fn index_formats_map_to_element_types() {
        assert_eq!(IndexFormat::Uint16.into_gl(), glow::UNSIGNED_SHORT);
        assert_eq!(IndexFormat::Uint32.into_gl(), glow::UNSIGNED_INT);
    }

    #[test]
    fn stencil_enums_map_to_gl() {
        assert_eq!(StencilTest::NotEqual.into_gl(), glow::NOTEQUAL);
        assert_eq!(StencilOperation::Keep.into_gl(), glow::KEEP);
        assert_eq!(StencilOperation::Replace.into_gl(), glow::REPLACE);
    }

    #[test]
    fn clear_flags_build_a_mask() {
        let mask: u32 = (ClearFlags::COLOR | ClearFlags::STENCIL).into_gl();
        assert_eq!(mask, glow::COLOR_BUFFER_BIT | glow::STENCIL_BUFFER_BIT);
        let none: u32 = ClearFlags::EMPTY.into_gl();
        assert_eq!(none, 0);
    }

    #[test]
    fn empty_handles_map_to_none() {
        let buffer: Option<NativeBuffer> = BufferId::EMPTY.into_gl();
        assert!(buffer.is_none());
        let program: Option<NativeProgram> = ProgramId(12).into_gl();
        assert_eq!(program.map(program_id), Some(ProgramId(12)));
        let texture: Option<NativeTexture> = TextureId(3).into_gl();
        assert_eq!(texture.map(texture_id), Some(TextureId(3)));
    }
}
