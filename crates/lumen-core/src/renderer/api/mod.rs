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

//! Backend-agnostic rendering API.
//!
//! Organized into several logical sub-modules:
//!
//! - **[`handles`]**: Opaque driver ids with an explicit empty sentinel.
//! - **[`enums`]** and **[`flags`]**: Plain enumerations and bitflags shared with backends.
//! - **[`pipeline`]**: The [`PipelineState`] description and its bindings.
//! - **[`resource`]**: Owning wrappers around driver ids (buffers, textures, vertex arrays).
//! - **[`settings`]** and **[`stats`]**: Renderer configuration and per-frame counters.

pub mod enums;
pub mod flags;
pub mod handles;
pub mod pipeline;
pub mod resource;
pub mod settings;
pub mod stats;

pub use self::enums::*;
pub use self::flags::*;
pub use self::handles::*;
pub use self::pipeline::*;
pub use self::resource::*;
pub use self::settings::*;
pub use self::stats::*;
