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

//! Bitflag sets passed across the driver boundary.

use crate::lumen_bitflags;

lumen_bitflags! {
    /// Selects which framebuffer planes a clear affects.
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct ClearFlags: u8 {
        /// Clear the color attachment to the pipeline's clear color.
        const COLOR = 1 << 0;
        /// Clear the depth attachment.
        const DEPTH = 1 << 1;
        /// Clear the stencil attachment.
        const STENCIL = 1 << 2;
        /// Clear every attachment.
        const ALL = Self::COLOR.bits() | Self::DEPTH.bits() | Self::STENCIL.bits();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_contains_every_plane() {
        assert!(ClearFlags::ALL.contains(ClearFlags::COLOR | ClearFlags::DEPTH));
        assert!(ClearFlags::ALL.contains(ClearFlags::STENCIL));
        assert_eq!(
            format!("{:?}", ClearFlags::COLOR | ClearFlags::DEPTH),
            "ClearFlags { COLOR | DEPTH }"
        );
    }
}
