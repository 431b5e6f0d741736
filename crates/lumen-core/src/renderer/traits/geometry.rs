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

use crate::renderer::api::{IndexFormat, VertexArrayId};
use crate::renderer::error::{ResourceError, ResourceKind};
use crate::renderer::traits::Driver;

/// Anything that can be drawn with a single indexed draw call.
///
/// Mesh construction lives outside this crate; a mesh type only has to expose
/// its vertex array and index information to be drawn by the
/// [`DrawDispatcher`](crate::renderer::DrawDispatcher).
pub trait Geometry {
    /// The vertex array holding the vertex and index buffer bindings.
    fn vertex_array(&self) -> VertexArrayId;

    /// The number of indices to draw.
    fn index_count(&self) -> u32;

    /// The data type of the indices.
    fn index_format(&self) -> IndexFormat;

    /// Returns `true` if the geometry has no underlying vertex array.
    fn is_empty(&self) -> bool {
        self.vertex_array().is_empty()
    }

    /// Binds the geometry's vertex array.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::InvalidResource`] if the vertex array is empty.
    fn bind(&self, driver: &dyn Driver) -> Result<(), ResourceError> {
        let id = self
            .vertex_array()
            .non_empty()
            .ok_or(ResourceError::InvalidResource {
                kind: ResourceKind::Geometry,
            })?;
        driver.bind_vertex_array(Some(id));
        Ok(())
    }

    /// Unbinds whatever vertex array is current.
    fn unbind(&self, driver: &dyn Driver) {
        driver.bind_vertex_array(None);
    }
}
