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

//! Applies pipeline states while issuing only the transitions that changed.

use crate::renderer::api::{PipelineState, ProgramId, StencilState};
use crate::renderer::error::PipelineError;
use crate::renderer::traits::Driver;

/// The comparable fields of the last applied [`PipelineState`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct AppliedState {
    program: ProgramId,
    write_color: bool,
    enable_depth_test: bool,
    depth_mask: bool,
}

impl AppliedState {
    fn of(state: &PipelineState) -> Self {
        Self {
            program: state.program(),
            write_color: state.write_color,
            enable_depth_test: state.enable_depth_test,
            depth_mask: state.depth_mask,
        }
    }
}

/// A summary of the driver calls issued by one [`StateTracker::apply`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Transitions {
    /// Fixed-function transitions issued (masks, depth test, stencil).
    pub state_changes: u32,
    /// `true` if the program was rebound.
    pub program_bound: bool,
    /// Uniform buffer binds issued.
    pub uniform_binds: u32,
    /// Texture binds issued.
    pub sampler_binds: u32,
}

impl Transitions {
    /// Returns `true` if only the unconditional binds were issued.
    pub fn is_rebind_only(&self) -> bool {
        self.state_changes == 0 && !self.program_bound
    }
}

/// Tracks the pipeline state currently applied to one graphics context.
///
/// The tracker owns no GPU resources; it keeps a copy of the handle values and
/// flags of the last state it applied and diffs every new request against it.
/// There is exactly one tracker per context, living as long as the context.
///
/// Transitions are always issued in this order:
///
/// 1. color write mask
/// 2. depth test enable
/// 3. depth write mask
/// 4. stencil state (only when the new state carries one)
/// 5. program
/// 6. uniform buffers, every apply, by ascending slot
/// 7. samplers, every apply, in registration order
///
/// Uniform and sampler bindings are never diffed.
///
/// The tracker is single-writer state. It is not `Sync`-guarded; all calls
/// must come from the thread that owns the context.
#[derive(Debug, Default)]
pub struct StateTracker {
    current: Option<AppliedState>,
    stencil: Option<StencilState>,
    trace_transitions: bool,
}

impl StateTracker {
    /// Creates a tracker with nothing applied yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enables `trace`-level logging of every transition issued.
    pub fn set_trace_transitions(&mut self, enabled: bool) {
        self.trace_transitions = enabled;
    }

    /// Returns `true` if no state has been applied since creation or the last
    /// [`invalidate`](Self::invalidate).
    pub fn is_pristine(&self) -> bool {
        self.current.is_none()
    }

    /// The program of the last applied state, if any.
    pub fn current_program(&self) -> Option<ProgramId> {
        self.current.map(|c| c.program)
    }

    /// The last stencil state applied, if any.
    pub fn current_stencil(&self) -> Option<&StencilState> {
        self.stencil.as_ref()
    }

    /// Applies `state`, issuing only the transitions that differ from the
    /// last applied state, then records `state` as current.
    ///
    /// With nothing applied yet, every diffed field counts as changed.
    ///
    /// # Errors
    ///
    /// Returns [`PipelineError::InvalidState`] if `state` has no program. No
    /// driver call is issued and the recorded state is unchanged.
    pub fn apply(
        &mut self,
        driver: &dyn Driver,
        state: &PipelineState,
    ) -> Result<Transitions, PipelineError> {
        state.validate()?;

        let next = AppliedState::of(state);
        let previous = self.current;
        let mut transitions = Transitions::default();

        if previous.map(|p| p.write_color) != Some(next.write_color) {
            self.trace(format_args!("color mask -> {}", next.write_color));
            driver.set_color_mask(next.write_color);
            transitions.state_changes += 1;
        }

        if previous.map(|p| p.enable_depth_test) != Some(next.enable_depth_test) {
            self.trace(format_args!("depth test -> {}", next.enable_depth_test));
            driver.set_depth_test(next.enable_depth_test);
            transitions.state_changes += 1;
        }

        if previous.map(|p| p.depth_mask) != Some(next.depth_mask) {
            self.trace(format_args!("depth mask -> {}", next.depth_mask));
            driver.set_depth_mask(next.depth_mask);
            transitions.state_changes += 1;
        }

        if let Some(stencil) = state.stencil {
            transitions.state_changes += self.apply_stencil(driver, &stencil);
        }

        if previous.map(|p| p.program) != Some(next.program) {
            log::debug!(
                "Switching program {:?} -> {:?}",
                previous.map(|p| p.program),
                next.program
            );
            driver.use_program(Some(next.program));
            transitions.program_bound = true;
        }

        for (slot, binding) in state.uniform_bindings() {
            driver.bind_uniform_buffer(slot, binding.buffer());
            transitions.uniform_binds += 1;
        }

        for sampler in state.sampler_bindings() {
            driver.set_active_texture_unit(sampler.unit);
            driver.bind_texture(Some(sampler.texture));
            transitions.sampler_binds += 1;
        }

        self.current = Some(next);
        Ok(transitions)
    }

    /// Forgets the recorded state so the next apply re-issues every transition.
    ///
    /// Call this after code outside the tracker touched driver state, or after
    /// the context was recreated.
    pub fn invalidate(&mut self) {
        log::debug!("State tracker invalidated");
        self.current = None;
        self.stencil = None;
    }

    /// Unbinds the current program, if any, and forgets the recorded state.
    pub fn release(&mut self, driver: &dyn Driver) {
        if self.current.is_some() {
            driver.use_program(None);
        }
        self.invalidate();
    }

    fn apply_stencil(&mut self, driver: &dyn Driver, next: &StencilState) -> u32 {
        let previous = self.stencil;
        let mut changes = 0;

        if previous.map(|p| p.enabled) != Some(next.enabled) {
            self.trace(format_args!("stencil test -> {}", next.enabled));
            driver.set_stencil_test(next.enabled);
            changes += 1;
        }

        if previous.map(|p| p.write_mask) != Some(next.write_mask) {
            self.trace(format_args!("stencil mask -> {:#x}", next.write_mask));
            driver.set_stencil_mask(next.write_mask);
            changes += 1;
        }

        if previous.map(|p| (p.test, p.reference, p.read_mask))
            != Some((next.test, next.reference, next.read_mask))
        {
            self.trace(format_args!(
                "stencil func -> {:?} ref={} mask={:#x}",
                next.test, next.reference, next.read_mask
            ));
            driver.set_stencil_func(next.test, next.reference, next.read_mask);
            changes += 1;
        }

        if previous.map(|p| (p.fail, p.depth_fail, p.depth_pass))
            != Some((next.fail, next.depth_fail, next.depth_pass))
        {
            self.trace(format_args!(
                "stencil op -> {:?}/{:?}/{:?}",
                next.fail, next.depth_fail, next.depth_pass
            ));
            driver.set_stencil_op(next.fail, next.depth_fail, next.depth_pass);
            changes += 1;
        }

        self.stencil = Some(*next);
        changes
    }

    fn trace(&self, args: std::fmt::Arguments<'_>) {
        if self.trace_transitions {
            log::trace!("StateTracker: {args}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::api::{BufferId, StencilOperation, StencilTest, TextureId};
    use crate::renderer::traits::recording::{Call, RecordingDriver};

    fn state(program: u32) -> PipelineState {
        PipelineState::with_program(ProgramId(program))
    }

    #[test]
    fn first_apply_issues_everything_in_order() {
        let driver = RecordingDriver::new();
        let mut tracker = StateTracker::new();

        let transitions = tracker.apply(&driver, &state(1)).unwrap();

        assert_eq!(
            driver.calls(),
            vec![
                Call::ColorMask(true),
                Call::DepthTest(true),
                Call::DepthMask(false),
                Call::UseProgram(Some(ProgramId(1))),
            ]
        );
        assert_eq!(transitions.state_changes, 3);
        assert!(transitions.program_bound);
        assert_eq!(tracker.current_program(), Some(ProgramId(1)));
    }

    #[test]
    fn only_the_changed_flag_is_issued() {
        let driver = RecordingDriver::new();
        let mut tracker = StateTracker::new();
        tracker.apply(&driver, &state(1)).unwrap();
        driver.take_calls();

        let mut next = state(1);
        next.write_color = false;
        let transitions = tracker.apply(&driver, &next).unwrap();

        assert_eq!(driver.calls(), vec![Call::ColorMask(false)]);
        assert!(!transitions.program_bound);
    }

    #[test]
    fn identical_state_only_rebinds_resources() {
        let driver = RecordingDriver::new();
        let mut tracker = StateTracker::new();
        let mut s = state(2);
        s.add_uniform_buffer_id::<f32>(4, BufferId(9)).unwrap();
        s.add_uniform_buffer_id::<f32>(0, BufferId(8)).unwrap();
        s.add_sampler_id(TextureId(3), 1).unwrap();
        tracker.apply(&driver, &s).unwrap();
        driver.take_calls();

        let transitions = tracker.apply(&driver, &s).unwrap();

        assert!(transitions.is_rebind_only());
        assert_eq!(
            driver.calls(),
            vec![
                Call::BindUniformBuffer(0, BufferId(8)),
                Call::BindUniformBuffer(4, BufferId(9)),
                Call::ActiveTextureUnit(1),
                Call::BindTexture(Some(TextureId(3))),
            ]
        );
    }

    #[test]
    fn program_change_rebinds_program() {
        let driver = RecordingDriver::new();
        let mut tracker = StateTracker::new();
        tracker.apply(&driver, &state(1)).unwrap();
        driver.take_calls();

        tracker.apply(&driver, &state(2)).unwrap();

        assert_eq!(driver.calls(), vec![Call::UseProgram(Some(ProgramId(2)))]);
    }

    #[test]
    fn missing_program_issues_nothing() {
        let driver = RecordingDriver::new();
        let mut tracker = StateTracker::new();
        tracker.apply(&driver, &state(1)).unwrap();
        driver.take_calls();

        let err = tracker.apply(&driver, &PipelineState::new());

        assert_eq!(err, Err(PipelineError::InvalidState));
        assert!(driver.calls().is_empty());
        assert_eq!(tracker.current_program(), Some(ProgramId(1)));
    }

    #[test]
    fn stencil_is_diffed_per_group() {
        let driver = RecordingDriver::new();
        let mut tracker = StateTracker::new();
        let mut s = state(1);
        s.stencil = Some(StencilState {
            enabled: true,
            ..StencilState::default()
        });
        tracker.apply(&driver, &s).unwrap();
        let first = driver.take_calls();
        assert_eq!(
            &first[3..7],
            &[
                Call::StencilEnable(true),
                Call::StencilMask(0xFF),
                Call::StencilFunc(StencilTest::Always, 0, 0xFF),
                Call::StencilOp(
                    StencilOperation::Replace,
                    StencilOperation::Replace,
                    StencilOperation::Replace
                ),
            ]
        );

        let mut masked = s.clone();
        masked.stencil = Some(StencilState {
            enabled: true,
            test: StencilTest::NotEqual,
            reference: 1,
            write_mask: 0,
            ..StencilState::default()
        });
        let transitions = tracker.apply(&driver, &masked).unwrap();

        assert_eq!(
            driver.calls(),
            vec![
                Call::StencilMask(0),
                Call::StencilFunc(StencilTest::NotEqual, 1, 0xFF),
            ]
        );
        assert_eq!(transitions.state_changes, 2);
    }

    #[test]
    fn absent_stencil_leaves_driver_untouched() {
        let driver = RecordingDriver::new();
        let mut tracker = StateTracker::new();
        let mut s = state(1);
        s.stencil = Some(StencilState::default());
        tracker.apply(&driver, &s).unwrap();
        driver.take_calls();

        tracker.apply(&driver, &state(1)).unwrap();
        assert!(driver.calls().is_empty());
        assert_eq!(tracker.current_stencil(), Some(&StencilState::default()));
    }

    #[test]
    fn invalidate_forces_a_full_resync() {
        let driver = RecordingDriver::new();
        let mut tracker = StateTracker::new();
        tracker.apply(&driver, &state(1)).unwrap();
        tracker.invalidate();
        assert!(tracker.is_pristine());
        driver.take_calls();

        tracker.apply(&driver, &state(1)).unwrap();

        assert_eq!(driver.calls().len(), 4);
    }

    #[test]
    fn release_unbinds_the_program() {
        let driver = RecordingDriver::new();
        let mut tracker = StateTracker::new();
        tracker.release(&driver);
        assert!(driver.calls().is_empty());

        tracker.apply(&driver, &state(1)).unwrap();
        driver.take_calls();
        tracker.release(&driver);

        assert_eq!(driver.calls(), vec![Call::UseProgram(None)]);
        assert!(tracker.is_pristine());
    }
}
