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

//! The [`PipelineState`] description and its stencil sub-state.

use super::bindings::{SamplerBinding, UniformBinding};
use crate::math::LinearRgba;
use crate::renderer::api::enums::{StencilOperation, StencilTest};
use crate::renderer::api::handles::{BufferId, ProgramId, TextureId};
use crate::renderer::api::resource::{Texture, UniformBuffer};
use crate::renderer::error::{PipelineError, ResourceKind};
use std::collections::BTreeMap;

/// Describes the stencil test and the operations applied to the stencil buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StencilState {
    /// If `true`, the stencil test is enabled.
    pub enabled: bool,
    /// The comparison performed against the stored value.
    pub test: StencilTest,
    /// The reference value used by the comparison and by `Replace`.
    pub reference: i32,
    /// The mask ANDed with both the reference and the stored value before comparison.
    pub read_mask: u32,
    /// The mask controlling which stencil bits can be written. `0` disables writes.
    pub write_mask: u32,
    /// The operation applied when the stencil test fails.
    pub fail: StencilOperation,
    /// The operation applied when the stencil test passes but the depth test fails.
    pub depth_fail: StencilOperation,
    /// The operation applied when both tests pass.
    pub depth_pass: StencilOperation,
}

impl Default for StencilState {
    fn default() -> Self {
        Self {
            enabled: false,
            test: StencilTest::Always,
            reference: 0,
            read_mask: 0xFF,
            write_mask: 0xFF,
            fail: StencilOperation::Replace,
            depth_fail: StencilOperation::Replace,
            depth_pass: StencilOperation::Replace,
        }
    }
}

/// The desired GPU state for a batch of draw calls.
///
/// A `PipelineState` is created by the caller and handed to
/// [`StateTracker::apply`](crate::renderer::StateTracker::apply), which issues
/// only the transitions that differ from the previously applied state. The
/// tracker never takes ownership: it copies the comparable fields.
///
/// Every field has a defined default, so a pipeline applied without explicit
/// configuration never depends on whatever state the driver was left in:
/// color writes on, depth test on, depth writes off, no bindings, no stencil.
/// The program is the one exception: it starts empty and must be set before
/// the pipeline can be applied.
#[derive(Debug, Clone, PartialEq)]
pub struct PipelineState {
    program: ProgramId,
    /// If `true`, writes to all four color channels are enabled.
    pub write_color: bool,
    /// If `true`, the depth test is enabled.
    pub enable_depth_test: bool,
    /// If `true`, depth values are written to the depth buffer.
    pub depth_mask: bool,
    /// The color used when clearing. Not part of the diffed draw state.
    pub clear_color: LinearRgba,
    /// The stencil configuration. `None` leaves the driver's stencil state untouched.
    pub stencil: Option<StencilState>,
    uniform_bindings: BTreeMap<u32, UniformBinding>,
    sampler_bindings: Vec<SamplerBinding>,
}

impl Default for PipelineState {
    fn default() -> Self {
        Self {
            program: ProgramId::EMPTY,
            write_color: true,
            enable_depth_test: true,
            depth_mask: false,
            clear_color: LinearRgba::BLACK,
            stencil: None,
            uniform_bindings: BTreeMap::new(),
            sampler_bindings: Vec::new(),
        }
    }
}

impl PipelineState {
    /// Creates a pipeline with default state and no program.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a pipeline with default state that uses `program`.
    pub fn with_program(program: ProgramId) -> Self {
        Self {
            program,
            ..Self::default()
        }
    }

    /// The program used by this pipeline. May be [`ProgramId::EMPTY`].
    pub fn program(&self) -> ProgramId {
        self.program
    }

    /// Replaces the program used by this pipeline.
    pub fn set_program(&mut self, program: ProgramId) {
        self.program = program;
    }

    /// Returns `true` if a non-empty program is attached.
    pub fn has_program(&self) -> bool {
        !self.program.is_empty()
    }

    /// Checks that the pipeline can be applied.
    ///
    /// # Errors
    ///
    /// Returns [`PipelineError::InvalidState`] if no program is attached.
    pub fn validate(&self) -> Result<(), PipelineError> {
        if self.has_program() {
            Ok(())
        } else {
            Err(PipelineError::InvalidState)
        }
    }

    /// Registers `buffer` at the uniform binding `slot`.
    ///
    /// # Errors
    ///
    /// * [`PipelineError::DuplicateSlot`] if `slot` is already registered.
    /// * [`PipelineError::EmptyBinding`] if `buffer` was moved out or destroyed.
    ///
    /// On error the binding set is left unchanged.
    pub fn add_uniform_binding<T: bytemuck::Pod>(
        &mut self,
        slot: u32,
        buffer: &UniformBuffer<T>,
    ) -> Result<(), PipelineError> {
        self.add_uniform_buffer_id::<T>(slot, buffer.id())
    }

    /// Registers a raw uniform buffer id holding a `T` at the binding `slot`.
    ///
    /// Use this when the buffer is owned by code that does not go through
    /// [`UniformBuffer`]. Same errors as [`add_uniform_binding`](Self::add_uniform_binding).
    pub fn add_uniform_buffer_id<T: 'static>(
        &mut self,
        slot: u32,
        buffer: BufferId,
    ) -> Result<(), PipelineError> {
        if self.uniform_bindings.contains_key(&slot) {
            return Err(PipelineError::DuplicateSlot { slot });
        }
        if buffer.is_empty() {
            return Err(PipelineError::EmptyBinding {
                kind: ResourceKind::Buffer,
                index: slot,
            });
        }
        self.uniform_bindings
            .insert(slot, UniformBinding::of::<T>(buffer));
        Ok(())
    }

    /// Removes and returns the binding registered at `slot`, if any.
    pub fn remove_uniform_binding(&mut self, slot: u32) -> Option<UniformBinding> {
        self.uniform_bindings.remove(&slot)
    }

    /// Returns the buffer registered at `slot`, checking that it holds a `T`.
    ///
    /// # Errors
    ///
    /// * [`PipelineError::UnknownSlot`] if nothing is registered at `slot`.
    /// * [`PipelineError::TypeMismatch`] if the buffer was registered with another type.
    pub fn uniform_buffer<T: 'static>(&self, slot: u32) -> Result<BufferId, PipelineError> {
        let binding = self
            .uniform_bindings
            .get(&slot)
            .ok_or(PipelineError::UnknownSlot { slot })?;

        if binding.holds::<T>() {
            Ok(binding.buffer())
        } else {
            Err(PipelineError::TypeMismatch {
                slot,
                expected: std::any::type_name::<T>(),
                found: binding.type_name(),
            })
        }
    }

    /// Iterates over the uniform bindings in ascending slot order.
    pub fn uniform_bindings(&self) -> impl ExactSizeIterator<Item = (u32, &UniformBinding)> {
        self.uniform_bindings.iter().map(|(slot, b)| (*slot, b))
    }

    /// Binds `texture` to `unit` for this pipeline.
    ///
    /// # Errors
    ///
    /// Returns [`PipelineError::EmptyBinding`] if `texture` was moved out or destroyed.
    pub fn add_sampler_binding(&mut self, texture: &Texture, unit: u32) -> Result<(), PipelineError> {
        self.add_sampler_id(texture.id(), unit)
    }

    /// Binds a raw texture id to `unit` for this pipeline.
    pub fn add_sampler_id(&mut self, texture: TextureId, unit: u32) -> Result<(), PipelineError> {
        if texture.is_empty() {
            return Err(PipelineError::EmptyBinding {
                kind: ResourceKind::Texture,
                index: unit,
            });
        }
        self.sampler_bindings.push(SamplerBinding { texture, unit });
        Ok(())
    }

    /// The sampler bindings in the order they are applied.
    pub fn sampler_bindings(&self) -> &[SamplerBinding] {
        &self.sampler_bindings
    }

    /// Removes every sampler binding.
    pub fn clear_sampler_bindings(&mut self) {
        self.sampler_bindings.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_explicit() {
        let state = PipelineState::new();
        assert!(state.write_color);
        assert!(state.enable_depth_test);
        assert!(!state.depth_mask);
        assert!(state.stencil.is_none());
        assert_eq!(state.uniform_bindings().len(), 0);
        assert!(state.sampler_bindings().is_empty());
        assert!(!state.has_program());
    }

    #[test]
    fn validate_requires_program() {
        assert_eq!(
            PipelineState::new().validate(),
            Err(PipelineError::InvalidState)
        );
        assert!(PipelineState::with_program(ProgramId(1)).validate().is_ok());
    }

    #[test]
    fn duplicate_slot_leaves_bindings_untouched() {
        let mut state = PipelineState::with_program(ProgramId(1));
        state.add_uniform_buffer_id::<f32>(0, BufferId(10)).unwrap();

        let err = state.add_uniform_buffer_id::<u32>(0, BufferId(11));

        assert_eq!(err, Err(PipelineError::DuplicateSlot { slot: 0 }));
        assert_eq!(state.uniform_bindings().len(), 1);
        assert_eq!(state.uniform_buffer::<f32>(0), Ok(BufferId(10)));
    }

    #[test]
    fn empty_buffer_is_rejected() {
        let mut state = PipelineState::new();
        assert_eq!(
            state.add_uniform_buffer_id::<f32>(2, BufferId::EMPTY),
            Err(PipelineError::EmptyBinding {
                kind: ResourceKind::Buffer,
                index: 2
            })
        );
        assert_eq!(state.uniform_bindings().len(), 0);
    }

    #[test]
    fn typed_lookup_checks_the_type() {
        let mut state = PipelineState::new();
        state.add_uniform_buffer_id::<[f32; 16]>(1, BufferId(4)).unwrap();

        assert_eq!(state.uniform_buffer::<[f32; 16]>(1), Ok(BufferId(4)));
        assert_eq!(
            state.uniform_buffer::<u32>(1),
            Err(PipelineError::TypeMismatch {
                slot: 1,
                expected: "u32",
                found: "[f32; 16]",
            })
        );
        assert_eq!(
            state.uniform_buffer::<u32>(9),
            Err(PipelineError::UnknownSlot { slot: 9 })
        );
    }

    #[test]
    fn uniform_bindings_iterate_by_slot() {
        let mut state = PipelineState::new();
        state.add_uniform_buffer_id::<f32>(5, BufferId(1)).unwrap();
        state.add_uniform_buffer_id::<f32>(1, BufferId(2)).unwrap();
        let slots: Vec<u32> = state.uniform_bindings().map(|(slot, _)| slot).collect();
        assert_eq!(slots, vec![1, 5]);

        assert!(state.remove_uniform_binding(5).is_some());
        assert!(state.remove_uniform_binding(5).is_none());
    }

    #[test]
    fn sampler_bindings_keep_order() {
        let mut state = PipelineState::new();
        state.add_sampler_id(TextureId(8), 1).unwrap();
        state.add_sampler_id(TextureId(3), 0).unwrap();
        assert_eq!(
            state.sampler_bindings(),
            &[
                SamplerBinding {
                    texture: TextureId(8),
                    unit: 1
                },
                SamplerBinding {
                    texture: TextureId(3),
                    unit: 0
                },
            ]
        );
        assert!(state.add_sampler_id(TextureId::EMPTY, 2).is_err());

        state.clear_sampler_bindings();
        assert!(state.sampler_bindings().is_empty());
    }
}
