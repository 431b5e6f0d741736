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

//! A GPU buffer that keeps a CPU copy of its contents.

use crate::renderer::api::enums::BufferKind;
use crate::renderer::api::handles::BufferId;
use crate::renderer::error::{ResourceError, ResourceKind};
use crate::renderer::traits::Driver;

/// A buffer object owning one driver id and a CPU copy of the uploaded bytes.
///
/// The CPU copy is what makes [`duplicate`](Buffer::duplicate) possible: the
/// duplicate gets its own id and the same bytes are uploaded again.
#[derive(Debug)]
pub struct Buffer {
    id: BufferId,
    kind: BufferKind,
    data: Vec<u8>,
}

impl Buffer {
    /// Creates a buffer of `kind` and uploads `data` to it.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::CreationFailed`] if the driver cannot allocate an id.
    pub fn new(driver: &dyn Driver, kind: BufferKind, data: &[u8]) -> Result<Self, ResourceError> {
        let id = driver.create_buffer()?;
        let buffer = Self {
            id,
            kind,
            data: data.to_vec(),
        };
        buffer.push_data(driver);
        log::debug!(
            "Created {:?} buffer {:?} ({} bytes)",
            kind,
            id,
            buffer.data.len()
        );
        Ok(buffer)
    }

    /// Creates a buffer of `kind` from a slice of plain-old-data values.
    pub fn from_slice<T: bytemuck::Pod>(
        driver: &dyn Driver,
        kind: BufferKind,
        values: &[T],
    ) -> Result<Self, ResourceError> {
        Self::new(driver, kind, bytemuck::cast_slice(values))
    }

    /// An empty buffer that owns no driver id.
    pub fn empty(kind: BufferKind) -> Self {
        Self {
            id: BufferId::EMPTY,
            kind,
            data: Vec::new(),
        }
    }

    /// The driver id, or [`BufferId::EMPTY`].
    pub fn id(&self) -> BufferId {
        self.id
    }

    /// The binding target this buffer was created for.
    pub fn kind(&self) -> BufferKind {
        self.kind
    }

    /// The bytes last uploaded to the buffer.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// The size of the buffer contents in bytes.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` if the buffer owns no driver id.
    pub fn is_empty(&self) -> bool {
        self.id.is_empty()
    }

    /// Replaces the contents of the buffer and uploads them.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::InvalidResource`] if the buffer is empty.
    pub fn set_data(&mut self, driver: &dyn Driver, data: &[u8]) -> Result<(), ResourceError> {
        self.ensure_live()?;
        self.data.clear();
        self.data.extend_from_slice(data);
        self.push_data(driver);
        Ok(())
    }

    /// Binds the buffer to its target.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::InvalidResource`] if the buffer is empty.
    pub fn bind(&self, driver: &dyn Driver) -> Result<(), ResourceError> {
        self.ensure_live()?;
        driver.bind_buffer(self.kind, Some(self.id));
        Ok(())
    }

    /// Unbinds whatever buffer is bound to this buffer's target.
    pub fn unbind(&self, driver: &dyn Driver) {
        driver.bind_buffer(self.kind, None);
    }

    /// Creates an independent copy with a freshly allocated id and the same contents.
    ///
    /// # Errors
    ///
    /// * [`ResourceError::InvalidResource`] if this buffer is empty.
    /// * [`ResourceError::CreationFailed`] if the driver cannot allocate an id.
    pub fn duplicate(&self, driver: &dyn Driver) -> Result<Self, ResourceError> {
        self.ensure_live()?;
        Self::new(driver, self.kind, &self.data)
    }

    /// Moves the id and contents into a new wrapper, leaving `self` empty.
    #[must_use = "the returned buffer owns the driver id"]
    pub fn take(&mut self) -> Self {
        let kind = self.kind;
        std::mem::replace(self, Self::empty(kind))
    }

    /// Releases the driver id and clears the CPU copy. No-op on an empty buffer.
    pub fn destroy(&mut self, driver: &dyn Driver) {
        if let Some(id) = self.id.non_empty() {
            driver.delete_buffer(id);
            log::debug!("Destroyed {:?} buffer {:?}", self.kind, id);
        }
        self.id = BufferId::EMPTY;
        self.data.clear();
    }

    fn ensure_live(&self) -> Result<(), ResourceError> {
        if self.is_empty() {
            Err(ResourceError::InvalidResource {
                kind: ResourceKind::Buffer,
            })
        } else {
            Ok(())
        }
    }

    fn push_data(&self, driver: &dyn Driver) {
        driver.upload_buffer(self.kind, self.id, &self.data);
    }
}
