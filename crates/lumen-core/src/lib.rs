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

//! # Lumen Core
//!
//! Backend-agnostic render-state tracking and draw dispatch.
//!
//! The crate defines the [`Driver`](renderer::Driver) contract that a concrete
//! graphics backend implements, the [`PipelineState`](renderer::PipelineState)
//! description of a batch of draws, the [`StateTracker`](renderer::StateTracker)
//! that applies only the state deltas between successive pipelines, and the thin
//! resource wrappers (buffers, textures, vertex arrays) that own driver ids.

#![warn(missing_docs)]

pub mod math;
pub mod renderer;
pub mod utils;
