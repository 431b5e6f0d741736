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

//! Defines the hierarchy of error types for the rendering subsystem.
//!
//! Every error here reports misuse detected *before* any driver call was
//! issued, so a failed operation never leaves driver state half-updated.

use std::fmt;

/// The kind of GPU resource an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    /// A vertex, index or uniform buffer.
    Buffer,
    /// A texture object.
    Texture,
    /// A vertex array object.
    VertexArray,
    /// A linked shader program.
    Program,
    /// Drawable geometry (a vertex array plus index information).
    Geometry,
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ResourceKind::Buffer => "buffer",
            ResourceKind::Texture => "texture",
            ResourceKind::VertexArray => "vertex array",
            ResourceKind::Program => "program",
            ResourceKind::Geometry => "geometry",
        };
        f.write_str(name)
    }
}

/// An error related to the configuration or application of a [`PipelineState`].
///
/// [`PipelineState`]: crate::renderer::PipelineState
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PipelineError {
    /// The pipeline has no program attached and cannot be applied.
    InvalidState,
    /// A uniform buffer is already registered at this binding slot.
    DuplicateSlot {
        /// The binding slot that was registered twice.
        slot: u32,
    },
    /// A binding was registered with an empty resource handle.
    EmptyBinding {
        /// The kind of resource that was empty.
        kind: ResourceKind,
        /// The binding slot or texture unit the resource was meant for.
        index: u32,
    },
    /// No uniform buffer is registered at this binding slot.
    UnknownSlot {
        /// The binding slot that was looked up.
        slot: u32,
    },
    /// A uniform buffer was retrieved as a different type than it was registered with.
    TypeMismatch {
        /// The binding slot that was looked up.
        slot: u32,
        /// The type requested by the caller.
        expected: &'static str,
        /// The type the buffer was registered with.
        found: &'static str,
    },
}

impl fmt::Display for PipelineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PipelineError::InvalidState => {
                write!(f, "Pipeline has no program attached and cannot be applied")
            }
            PipelineError::DuplicateSlot { slot } => {
                write!(f, "A uniform buffer is already bound to slot {slot}")
            }
            PipelineError::EmptyBinding { kind, index } => {
                write!(f, "Cannot bind an empty {kind} at index {index}")
            }
            PipelineError::UnknownSlot { slot } => {
                write!(f, "No uniform buffer is bound to slot {slot}")
            }
            PipelineError::TypeMismatch {
                slot,
                expected,
                found,
            } => {
                write!(
                    f,
                    "Uniform buffer at slot {slot} holds '{found}', not '{expected}'"
                )
            }
        }
    }
}

impl std::error::Error for PipelineError {}

/// An error related to the creation or use of a GPU resource.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResourceError {
    /// The resource handle is empty (never created, moved out, or destroyed).
    InvalidResource {
        /// The kind of resource that was empty.
        kind: ResourceKind,
    },
    /// The backend failed to allocate a new resource id.
    CreationFailed {
        /// The kind of resource being created.
        kind: ResourceKind,
        /// Details reported by the backend.
        details: String,
    },
    /// A buffer of the wrong kind was supplied (e.g. a vertex buffer used as indices).
    WrongBufferKind {
        /// The kind that was required.
        expected: crate::renderer::BufferKind,
        /// The kind that was supplied.
        found: crate::renderer::BufferKind,
    },
}

impl fmt::Display for ResourceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResourceError::InvalidResource { kind } => {
                write!(f, "Cannot use an empty {kind} handle")
            }
            ResourceError::CreationFailed { kind, details } => {
                write!(f, "Failed to create {kind}: {details}")
            }
            ResourceError::WrongBufferKind { expected, found } => {
                write!(f, "Expected a {expected:?} buffer, got a {found:?} buffer")
            }
        }
    }
}

impl std::error::Error for ResourceError {}

/// A high-level error returned by the [`Renderer`](crate::renderer::Renderer) facade.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderError {
    /// A pipeline could not be configured or applied.
    Pipeline(PipelineError),
    /// A GPU resource could not be created or used.
    Resource(ResourceError),
    /// `apply_default_pipeline` was called before a default pipeline was set.
    NoDefaultPipeline,
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderError::Pipeline(err) => write!(f, "Pipeline operation failed: {err}"),
            RenderError::Resource(err) => {
                write!(f, "Graphics resource operation failed: {err}")
            }
            RenderError::NoDefaultPipeline => {
                write!(f, "No default pipeline has been configured")
            }
        }
    }
}

impl std::error::Error for RenderError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RenderError::Pipeline(err) => Some(err),
            RenderError::Resource(err) => Some(err),
            RenderError::NoDefaultPipeline => None,
        }
    }
}

impl From<PipelineError> for RenderError {
    fn from(err: PipelineError) -> Self {
        RenderError::Pipeline(err)
    }
}

impl From<ResourceError> for RenderError {
    fn from(err: ResourceError) -> Self {
        RenderError::Resource(err)
    }
}
