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

//! Issues indexed draw calls against bound geometry.

use crate::renderer::error::{ResourceError, ResourceKind};
use crate::renderer::traits::{Driver, Geometry};

/// Issues one indexed draw per [`Geometry`].
///
/// The dispatcher does not check that a pipeline has been applied: that is
/// owned by whoever drives the [`StateTracker`](crate::renderer::StateTracker).
/// It only guarantees that a draw never reaches the driver with an empty
/// vertex array.
#[derive(Debug, Default, Clone, Copy)]
pub struct DrawDispatcher;

impl DrawDispatcher {
    /// Creates a dispatcher.
    pub fn new() -> Self {
        Self
    }

    /// Binds the geometry's vertex array, draws its indices, and unbinds it.
    ///
    /// Returns the number of indices submitted.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::InvalidResource`] if the geometry has no vertex
    /// array. No driver call is issued in that case.
    pub fn draw(&self, driver: &dyn Driver, geometry: &dyn Geometry) -> Result<u32, ResourceError> {
        if geometry.is_empty() {
            return Err(ResourceError::InvalidResource {
                kind: ResourceKind::Geometry,
            });
        }

        let index_count = geometry.index_count();
        geometry.bind(driver)?;
        driver.draw_indexed(index_count, geometry.index_format());
        geometry.unbind(driver);

        Ok(index_count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::api::{IndexFormat, IndexedMesh, VertexArrayId};
    use crate::renderer::traits::recording::{Call, RecordingDriver};

    #[test]
    fn draw_binds_draws_and_unbinds() {
        let driver = RecordingDriver::new();
        let mesh = IndexedMesh::new(VertexArrayId(3), 36, IndexFormat::Uint16);

        let submitted = DrawDispatcher::new().draw(&driver, &mesh).unwrap();

        assert_eq!(submitted, 36);
        assert_eq!(
            driver.calls(),
            vec![
                Call::BindVertexArray(Some(VertexArrayId(3))),
                Call::DrawIndexed(36, IndexFormat::Uint16),
                Call::BindVertexArray(None),
            ]
        );
    }

    #[test]
    fn empty_geometry_is_rejected_before_any_call() {
        let driver = RecordingDriver::new();
        let mesh = IndexedMesh::new(VertexArrayId::EMPTY, 6, IndexFormat::Uint32);

        let err = DrawDispatcher::new().draw(&driver, &mesh);

        assert_eq!(
            err,
            Err(ResourceError::InvalidResource {
                kind: ResourceKind::Geometry
            })
        );
        assert!(driver.calls().is_empty());
    }
}
