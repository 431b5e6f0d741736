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

//! Owning wrappers around driver object ids.
//!
//! Each wrapper exclusively owns one driver id. The ownership rules are the
//! same for every wrapper:
//!
//! - Wrappers are not `Clone`. Duplicating a resource goes through an explicit
//!   `duplicate` that allocates a fresh id and re-uploads the data; two
//!   wrappers never share an id.
//! - `take` transfers the id to a new wrapper and resets the source to the
//!   empty sentinel. Every operation checks for the sentinel before touching
//!   the driver.
//! - Release is explicit through `destroy(driver)`, since dropping a wrapper has
//!   no driver to talk to. Destroying an empty wrapper is a no-op.

pub mod buffer;
pub mod mesh;
pub mod texture;
pub mod uniform_buffer;
pub mod vertex_array;

pub use self::buffer::Buffer;
pub use self::mesh::IndexedMesh;
pub use self::texture::Texture;
pub use self::uniform_buffer::UniformBuffer;
pub use self::vertex_array::VertexArray;
