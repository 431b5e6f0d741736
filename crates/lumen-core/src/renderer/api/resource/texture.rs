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

//! A texture object handle.

use crate::renderer::api::handles::TextureId;
use crate::renderer::error::{ResourceError, ResourceKind};
use crate::renderer::traits::Driver;

/// A texture owning one driver id.
///
/// Pixel upload and sampling parameters are configured by the backend; this
/// wrapper only manages the id and binds it to texture units.
#[derive(Debug, Default)]
pub struct Texture {
    id: TextureId,
}

impl Texture {
    /// Allocates a new texture id.
    pub fn new(driver: &dyn Driver) -> Result<Self, ResourceError> {
        let id = driver.create_texture()?;
        log::debug!("Created texture {id:?}");
        Ok(Self { id })
    }

    /// Takes ownership of a texture id created by backend-specific code.
    pub fn from_raw(id: TextureId) -> Self {
        Self { id }
    }

    /// The driver id, or [`TextureId::EMPTY`].
    pub fn id(&self) -> TextureId {
        self.id
    }

    /// Returns `true` if the texture owns no driver id.
    pub fn is_empty(&self) -> bool {
        self.id.is_empty()
    }

    /// Selects texture unit `unit` and binds this texture to it.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::InvalidResource`] if the texture is empty.
    pub fn bind_to_unit(&self, driver: &dyn Driver, unit: u32) -> Result<(), ResourceError> {
        let id = self.id.non_empty().ok_or(ResourceError::InvalidResource {
            kind: ResourceKind::Texture,
        })?;
        driver.set_active_texture_unit(unit);
        driver.bind_texture(Some(id));
        Ok(())
    }

    /// Moves the id into a new wrapper, leaving `self` empty.
    #[must_use = "the returned texture owns the driver id"]
    pub fn take(&mut self) -> Self {
        std::mem::take(self)
    }

    /// Releases the driver id. No-op on an empty texture.
    pub fn destroy(&mut self, driver: &dyn Driver) {
        if let Some(id) = self.id.non_empty() {
            driver.delete_texture(id);
            log::debug!("Destroyed texture {id:?}");
        }
        self.id = TextureId::EMPTY;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::traits::recording::{Call, RecordingDriver};

    #[test]
    fn bind_to_unit_selects_unit_first() {
        let driver = RecordingDriver::new();
        let texture = Texture::new(&driver).unwrap();
        driver.take_calls();

        texture.bind_to_unit(&driver, 2).unwrap();

        assert_eq!(
            driver.calls(),
            vec![
                Call::ActiveTextureUnit(2),
                Call::BindTexture(Some(texture.id()))
            ]
        );
    }

    #[test]
    fn take_then_destroy() {
        let driver = RecordingDriver::new();
        let mut texture = Texture::new(&driver).unwrap();
        let mut moved = texture.take();
        driver.take_calls();

        assert!(texture.bind_to_unit(&driver, 0).is_err());
        texture.destroy(&driver);
        moved.destroy(&driver);

        assert_eq!(driver.calls(), vec![Call::DeleteTexture(TextureId(1))]);
    }
}
