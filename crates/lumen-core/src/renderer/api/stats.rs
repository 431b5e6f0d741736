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

//! Per-frame counters for the rendering system.

/// Work accumulated by the renderer since the last [`end_frame`].
///
/// [`end_frame`]: crate::renderer::Renderer::end_frame
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrameStats {
    /// A sequential counter for finished frames.
    pub frame_number: u64,
    /// The number of successful pipeline applications.
    pub pipeline_applies: u32,
    /// The number of program binds actually issued.
    pub program_binds: u32,
    /// The number of fixed-function transitions (masks, depth test, stencil) issued.
    pub state_transitions: u32,
    /// The number of uniform buffer binds issued.
    pub uniform_binds: u32,
    /// The number of texture binds issued.
    pub sampler_binds: u32,
    /// The number of indexed draw calls issued.
    pub draw_calls: u32,
    /// The total number of indices submitted by those draw calls.
    pub indices_submitted: u64,
}

impl FrameStats {
    /// Returns the number of pipeline applications that did not need to switch programs.
    pub fn redundant_program_switches_avoided(&self) -> u32 {
        self.pipeline_applies.saturating_sub(self.program_binds)
    }
}
