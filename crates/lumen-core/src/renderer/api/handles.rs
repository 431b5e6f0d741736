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

//! Opaque handles to driver-side objects.
//!
//! Every handle wraps the raw id the driver returned. The value `0` is never
//! handed out by a driver and is used as the explicit "empty" sentinel: it marks
//! a handle that was never created, was moved out of, or was destroyed.

macro_rules! driver_handle {
    ($(#[$attr:meta])* $name:ident) => {
        $(#[$attr])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        pub struct $name(pub u32);

        impl $name {
            /// The empty sentinel. Never refers to a live driver object.
            pub const EMPTY: Self = Self(0);

            /// Returns `true` if this handle is the empty sentinel.
            #[inline]
            pub const fn is_empty(&self) -> bool {
                self.0 == 0
            }

            /// Returns `None` for the empty sentinel, `Some(self)` otherwise.
            #[inline]
            pub const fn non_empty(self) -> Option<Self> {
                if self.is_empty() {
                    None
                } else {
                    Some(self)
                }
            }
        }
    };
}

driver_handle! {
    /// A linked shader program. Compared by identity when diffing pipelines.
    ProgramId
}

driver_handle! {
    /// A buffer object (vertex, index or uniform storage).
    BufferId
}

driver_handle! {
    /// A texture object.
    TextureId
}

driver_handle! {
    /// A vertex array object describing how vertex buffers are fed to a program.
    VertexArrayId
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_handle_is_empty() {
        assert!(ProgramId::default().is_empty());
        assert_eq!(BufferId::default(), BufferId::EMPTY);
        assert_eq!(TextureId::EMPTY.non_empty(), None);
    }

    #[test]
    fn non_zero_handle_is_live() {
        let id = VertexArrayId(7);
        assert!(!id.is_empty());
        assert_eq!(id.non_empty(), Some(id));
    }
}
