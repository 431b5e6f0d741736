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

//! A typed uniform buffer holding a single value.

use super::buffer::Buffer;
use crate::renderer::api::enums::BufferKind;
use crate::renderer::api::handles::BufferId;
use crate::renderer::error::ResourceError;
use crate::renderer::traits::Driver;
use bytemuck::Pod;

/// A uniform buffer whose contents are one value of type `T`.
///
/// A [`PipelineState`](crate::renderer::PipelineState) only stores the slot to
/// buffer association. Changing the uniform data goes through
/// [`set_value`](UniformBuffer::set_value) and is picked up on the next apply,
/// since uniform bindings are re-issued unconditionally.
#[derive(Debug)]
pub struct UniformBuffer<T: Pod> {
    buffer: Buffer,
    value: T,
}

impl<T: Pod> UniformBuffer<T> {
    /// Creates the buffer and uploads `value`.
    pub fn new(driver: &dyn Driver, value: T) -> Result<Self, ResourceError> {
        let buffer = Buffer::new(driver, BufferKind::Uniform, bytemuck::bytes_of(&value))?;
        Ok(Self { buffer, value })
    }

    /// The driver id, or [`BufferId::EMPTY`].
    pub fn id(&self) -> BufferId {
        self.buffer.id()
    }

    /// Returns `true` if the buffer owns no driver id.
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// The value last uploaded.
    pub fn value(&self) -> &T {
        &self.value
    }

    /// Replaces the value and uploads it.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::InvalidResource`] if the buffer is empty.
    pub fn set_value(&mut self, driver: &dyn Driver, value: T) -> Result<(), ResourceError> {
        self.buffer.set_data(driver, bytemuck::bytes_of(&value))?;
        self.value = value;
        Ok(())
    }

    /// Exposes the buffer at binding `slot`.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::InvalidResource`] if the buffer is empty.
    pub fn bind_to_slot(&self, driver: &dyn Driver, slot: u32) -> Result<(), ResourceError> {
        if self.is_empty() {
            return Err(ResourceError::InvalidResource {
                kind: crate::renderer::ResourceKind::Buffer,
            });
        }
        driver.bind_uniform_buffer(slot, self.id());
        Ok(())
    }

    /// Creates an independent copy with its own id and the same value.
    pub fn duplicate(&self, driver: &dyn Driver) -> Result<Self, ResourceError> {
        Ok(Self {
            buffer: self.buffer.duplicate(driver)?,
            value: self.value,
        })
    }

    /// Moves the id into a new wrapper, leaving `self` empty and zeroed.
    #[must_use = "the returned buffer owns the driver id"]
    pub fn take(&mut self) -> Self {
        Self {
            buffer: self.buffer.take(),
            value: std::mem::replace(&mut self.value, T::zeroed()),
        }
    }

    /// Releases the driver id. No-op on an empty buffer.
    pub fn destroy(&mut self, driver: &dyn Driver) {
        self.buffer.destroy(driver);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::LinearRgba;
    use crate::renderer::traits::recording::{Call, RecordingDriver};

    #[test]
    fn set_value_uploads_the_whole_block() {
        let driver = RecordingDriver::new();
        let mut ubo = UniformBuffer::new(&driver, LinearRgba::WHITE).unwrap();
        driver.take_calls();

        ubo.set_value(&driver, LinearRgba::MAGENTA).unwrap();

        assert_eq!(*ubo.value(), LinearRgba::MAGENTA);
        assert_eq!(
            driver.calls(),
            vec![Call::UploadBuffer(BufferKind::Uniform, ubo.id(), 16)]
        );
    }

    #[test]
    fn bind_to_slot_forwards_to_driver() {
        let driver = RecordingDriver::new();
        let ubo = UniformBuffer::new(&driver, 1.5f32).unwrap();
        driver.take_calls();

        ubo.bind_to_slot(&driver, 3).unwrap();

        assert_eq!(driver.calls(), vec![Call::BindUniformBuffer(3, ubo.id())]);
    }

    #[test]
    fn moved_out_buffer_cannot_be_used() {
        let driver = RecordingDriver::new();
        let mut ubo = UniformBuffer::new(&driver, 7u32).unwrap();
        let moved = ubo.take();
        driver.take_calls();

        assert_eq!(*moved.value(), 7);
        assert_eq!(*ubo.value(), 0);
        assert!(ubo.bind_to_slot(&driver, 0).is_err());
        assert!(ubo.set_value(&driver, 1).is_err());
        assert!(driver.calls().is_empty());
    }

    #[test]
    fn duplicate_gets_a_fresh_id() {
        let driver = RecordingDriver::new();
        let ubo = UniformBuffer::new(&driver, [1.0f32; 4]).unwrap();
        let copy = ubo.duplicate(&driver).unwrap();
        assert_ne!(copy.id(), ubo.id());
        assert_eq!(copy.value(), ubo.value());
    }
}
