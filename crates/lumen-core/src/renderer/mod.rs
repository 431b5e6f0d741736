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

//! Provides the backend-agnostic rendering contracts and the state-diffing core.
//!
//! The [`traits`] module defines the [`Driver`] boundary a concrete backend
//! implements (see the `lumen-infra` crate for the OpenGL one). The [`api`]
//! module holds the data types: handles, [`PipelineState`], resource wrappers,
//! settings and statistics. On top of those, [`StateTracker`] applies only the
//! deltas between successive pipelines, [`DrawDispatcher`] issues indexed draws,
//! and [`Renderer`] ties both to an owned driver.

pub mod api;
pub mod dispatcher;
pub mod error;
pub mod system;
pub mod tracker;
pub mod traits;

// Re-export the most important traits and types for easier use.
pub use self::api::*;
pub use self::dispatcher::DrawDispatcher;
pub use self::error::{PipelineError, RenderError, ResourceError, ResourceKind};
pub use self::system::Renderer;
pub use self::tracker::{StateTracker, Transitions};
pub use self::traits::{Driver, Geometry};
