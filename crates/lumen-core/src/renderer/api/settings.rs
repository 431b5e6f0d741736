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

//! Configuration for the [`Renderer`](crate::renderer::Renderer) facade.

use crate::math::LinearRgba;
use crate::renderer::api::flags::ClearFlags;

/// A collection of settings that affect how the renderer issues work.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RendererSettings {
    /// The clear color used until a pipeline has been applied.
    pub clear_color: LinearRgba,
    /// The planes cleared by [`Renderer::clear`](crate::renderer::Renderer::clear).
    pub clear_flags: ClearFlags,
    /// If `true`, every transition issued by the state tracker is logged at `trace` level.
    pub trace_transitions: bool,
}

impl Default for RendererSettings {
    fn default() -> Self {
        Self {
            clear_color: LinearRgba::BLACK,
            clear_flags: ClearFlags::COLOR | ClearFlags::DEPTH,
            trace_transitions: false,
        }
    }
}
