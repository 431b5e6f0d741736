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

//! Defines the core architectural traits for the rendering subsystem.
//!
//! - [`Driver`]: The boundary to the stateful graphics API. Every GPU side effect
//!   in this crate goes through it.
//! - [`Geometry`]: Anything that can be drawn with a single indexed draw call.

mod driver;
mod geometry;

#[cfg(test)]
pub(crate) mod recording;

pub use self::driver::Driver;
pub use self::geometry::Geometry;
