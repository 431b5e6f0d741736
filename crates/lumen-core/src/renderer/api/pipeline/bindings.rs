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

//! Resource bindings carried by a [`PipelineState`](super::PipelineState).

use crate::renderer::api::handles::{BufferId, TextureId};
use std::any::{type_name, TypeId};

/// A uniform buffer registered at a binding slot, tagged with the Rust type of
/// its contents.
///
/// The tag lets callers retrieve the buffer as a typed handle without an
/// unchecked cast: a lookup with the wrong type fails with
/// [`PipelineError::TypeMismatch`](crate::renderer::PipelineError::TypeMismatch).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UniformBinding {
    buffer: BufferId,
    type_id: TypeId,
    type_name: &'static str,
}

impl UniformBinding {
    /// Creates a binding for a buffer holding values of type `T`.
    pub fn of<T: 'static>(buffer: BufferId) -> Self {
        Self {
            buffer,
            type_id: TypeId::of::<T>(),
            type_name: type_name::<T>(),
        }
    }

    /// The bound buffer.
    pub fn buffer(&self) -> BufferId {
        self.buffer
    }

    /// The name of the type the buffer was registered with.
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// Returns `true` if the buffer was registered as holding a `T`.
    pub fn holds<T: 'static>(&self) -> bool {
        self.type_id == TypeId::of::<T>()
    }
}

/// A texture bound to a texture unit for the duration of a pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SamplerBinding {
    /// The texture to bind.
    pub texture: TextureId,
    /// The texture unit the texture is bound to.
    pub unit: u32,
}
