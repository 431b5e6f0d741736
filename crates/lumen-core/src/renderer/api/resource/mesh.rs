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

//! A minimal drawable: a vertex array plus index information.

use super::buffer::Buffer;
use super::vertex_array::VertexArray;
use crate::renderer::api::enums::{BufferKind, IndexFormat};
use crate::renderer::api::handles::VertexArrayId;
use crate::renderer::error::ResourceError;
use crate::renderer::traits::Geometry;

/// A non-owning description of geometry drawn with one indexed draw call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct IndexedMesh {
    /// The vertex array holding the vertex and index buffer bindings.
    pub vertex_array: VertexArrayId,
    /// The number of indices to draw.
    pub index_count: u32,
    /// The data type of the indices.
    pub index_format: IndexFormat,
}

impl IndexedMesh {
    /// Creates a mesh description from raw parts.
    pub fn new(vertex_array: VertexArrayId, index_count: u32, index_format: IndexFormat) -> Self {
        Self {
            vertex_array,
            index_count,
            index_format,
        }
    }

    /// Describes the geometry captured by `vertex_array`, deriving the index
    /// count from the size of `indices`.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::WrongBufferKind`] if `indices` is not an index buffer.
    pub fn from_buffers(
        vertex_array: &VertexArray,
        indices: &Buffer,
        index_format: IndexFormat,
    ) -> Result<Self, ResourceError> {
        if indices.kind() != BufferKind::Index {
            return Err(ResourceError::WrongBufferKind {
                expected: BufferKind::Index,
                found: indices.kind(),
            });
        }
        let index_count = (indices.len() / index_format.size()) as u32;
        Ok(Self::new(vertex_array.id(), index_count, index_format))
    }
}

impl Geometry for IndexedMesh {
    fn vertex_array(&self) -> VertexArrayId {
        self.vertex_array
    }

    fn index_count(&self) -> u32 {
        self.index_count
    }

    fn index_format(&self) -> IndexFormat {
        self.index_format
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::traits::recording::RecordingDriver;

    #[test]
    fn index_count_follows_the_format() {
        let driver = RecordingDriver::new();
        let indices = Buffer::from_slice(&driver, BufferKind::Index, &[0u16, 1, 2, 2, 3, 0]).unwrap();
        let vao = VertexArray::from_raw(VertexArrayId(4));

        let mesh = IndexedMesh::from_buffers(&vao, &indices, IndexFormat::Uint16).unwrap();

        assert_eq!(mesh.index_count(), 6);
        assert_eq!(mesh.vertex_array(), VertexArrayId(4));
        assert!(!mesh.is_empty());
    }

    #[test]
    fn default_mesh_is_empty() {
        assert!(IndexedMesh::default().is_empty());
    }
}
