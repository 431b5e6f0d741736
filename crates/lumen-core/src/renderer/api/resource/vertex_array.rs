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

//! A vertex array object handle.

use super::buffer::Buffer;
use crate::renderer::api::enums::BufferKind;
use crate::renderer::api::handles::VertexArrayId;
use crate::renderer::error::{ResourceError, ResourceKind};
use crate::renderer::traits::Driver;

/// A vertex array owning one driver id.
///
/// Vertex attribute layout is configured by the backend. This wrapper records
/// which vertex and index buffers the array captures and manages the id.
#[derive(Debug, Default)]
pub struct VertexArray {
    id: VertexArrayId,
}

impl VertexArray {
    /// Allocates a vertex array and captures `vertices` and `indices` in it.
    ///
    /// # Errors
    ///
    /// * [`ResourceError::WrongBufferKind`] if the buffers are not a vertex and an index buffer.
    /// * [`ResourceError::InvalidResource`] if either buffer is empty.
    /// * [`ResourceError::CreationFailed`] if the driver cannot allocate an id.
    pub fn new(
        driver: &dyn Driver,
        vertices: &Buffer,
        indices: &Buffer,
    ) -> Result<Self, ResourceError> {
        expect_kind(vertices, BufferKind::Vertex)?;
        expect_kind(indices, BufferKind::Index)?;
        if vertices.is_empty() || indices.is_empty() {
            return Err(ResourceError::InvalidResource {
                kind: ResourceKind::Buffer,
            });
        }

        let id = driver.create_vertex_array()?;
        driver.bind_vertex_array(Some(id));
        vertices.bind(driver)?;
        indices.bind(driver)?;
        driver.bind_vertex_array(None);

        log::debug!(
            "Created vertex array {:?} over buffers {:?}/{:?}",
            id,
            vertices.id(),
            indices.id()
        );
        Ok(Self { id })
    }

    /// Takes ownership of a vertex array id created by backend-specific code.
    pub fn from_raw(id: VertexArrayId) -> Self {
        Self { id }
    }

    /// The driver id, or [`VertexArrayId::EMPTY`].
    pub fn id(&self) -> VertexArrayId {
        self.id
    }

    /// Returns `true` if the vertex array owns no driver id.
    pub fn is_empty(&self) -> bool {
        self.id.is_empty()
    }

    /// Moves the id into a new wrapper, leaving `self` empty.
    #[must_use = "the returned vertex array owns the driver id"]
    pub fn take(&mut self) -> Self {
        std::mem::take(self)
    }

    /// Releases the driver id. No-op on an empty vertex array.
    pub fn destroy(&mut self, driver: &dyn Driver) {
        if let Some(id) = self.id.non_empty() {
            driver.delete_vertex_array(id);
            log::debug!("Destroyed vertex array {id:?}");
        }
        self.id = VertexArrayId::EMPTY;
    }
}

fn expect_kind(buffer: &Buffer, expected: BufferKind) -> Result<(), ResourceError> {
    if buffer.kind() == expected {
        Ok(())
    } else {
        Err(ResourceError::WrongBufferKind {
            expected,
            found: buffer.kind(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::traits::recording::{Call, RecordingDriver};

    #[test]
    fn new_captures_both_buffers() {
        let driver = RecordingDriver::new();
        let vertices = Buffer::from_slice(&driver, BufferKind::Vertex, &[0.0f32; 9]).unwrap();
        let indices = Buffer::from_slice(&driver, BufferKind::Index, &[0u32, 1, 2]).unwrap();
        driver.take_calls();

        let vao = VertexArray::new(&driver, &vertices, &indices).unwrap();

        assert_eq!(
            driver.calls(),
            vec![
                Call::CreateVertexArray(vao.id()),
                Call::BindVertexArray(Some(vao.id())),
                Call::BindBuffer(BufferKind::Vertex, Some(vertices.id())),
                Call::BindBuffer(BufferKind::Index, Some(indices.id())),
                Call::BindVertexArray(None),
            ]
        );
    }

    #[test]
    fn swapped_buffers_are_rejected() {
        let driver = RecordingDriver::new();
        let vertices = Buffer::new(&driver, BufferKind::Vertex, &[0; 4]).unwrap();
        let indices = Buffer::new(&driver, BufferKind::Index, &[0; 4]).unwrap();

        let err = VertexArray::new(&driver, &indices, &vertices).unwrap_err();

        assert_eq!(
            err,
            ResourceError::WrongBufferKind {
                expected: BufferKind::Vertex,
                found: BufferKind::Index
            }
        );
    }

    #[test]
    fn take_moves_the_id() {
        let mut vao = VertexArray::from_raw(VertexArrayId(5));
        let moved = vao.take();
        assert!(vao.is_empty());
        assert_eq!(moved.id(), VertexArrayId(5));
    }
}
