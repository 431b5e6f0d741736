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

//! The [`Renderer`] facade tying a driver to the state tracker and dispatcher.

use crate::math::LinearRgba;
use crate::renderer::api::{ClearFlags, FrameStats, PipelineState, RendererSettings};
use crate::renderer::dispatcher::DrawDispatcher;
use crate::renderer::error::RenderError;
use crate::renderer::tracker::{StateTracker, Transitions};
use crate::renderer::traits::{Driver, Geometry};

/// Owns a [`Driver`] together with the [`StateTracker`] and [`DrawDispatcher`]
/// for its context.
///
/// Every state-affecting call takes `&mut self`, so a renderer can only be
/// driven from one place at a time, mirroring the single-threaded nature of
/// the underlying context.
///
/// # Example
///
/// ```ignore
/// let mut renderer = Renderer::new(driver);
/// renderer.set_pipeline(&opaque)?;
/// renderer.clear();
/// for mesh in &meshes {
///     renderer.draw(mesh)?;
/// }
/// let stats = renderer.end_frame();
/// ```
#[derive(Debug)]
pub struct Renderer<D: Driver> {
    driver: D,
    tracker: StateTracker,
    dispatcher: DrawDispatcher,
    default_pipeline: Option<PipelineState>,
    settings: RendererSettings,
    clear_color: LinearRgba,
    stats: FrameStats,
}

impl<D: Driver> Renderer<D> {
    /// Creates a renderer with default settings.
    pub fn new(driver: D) -> Self {
        Self::with_settings(driver, RendererSettings::default())
    }

    /// Creates a renderer with the given settings.
    pub fn with_settings(driver: D, settings: RendererSettings) -> Self {
        let mut tracker = StateTracker::new();
        tracker.set_trace_transitions(settings.trace_transitions);
        log::info!("Renderer created with settings: {settings:?}");

        Self {
            driver,
            tracker,
            dispatcher: DrawDispatcher::new(),
            default_pipeline: None,
            clear_color: settings.clear_color,
            settings,
            stats: FrameStats::default(),
        }
    }

    /// The driver this renderer issues calls to.
    pub fn driver(&self) -> &D {
        &self.driver
    }

    /// The settings the renderer was created with.
    pub fn settings(&self) -> &RendererSettings {
        &self.settings
    }

    /// The state tracker of this renderer's context.
    pub fn tracker(&self) -> &StateTracker {
        &self.tracker
    }

    /// Stores the pipeline used by [`apply_default_pipeline`](Self::apply_default_pipeline).
    ///
    /// # Errors
    ///
    /// Returns [`PipelineError::InvalidState`](crate::renderer::PipelineError::InvalidState)
    /// if `pipeline` has no program. The previous default is kept.
    pub fn set_default_pipeline(&mut self, pipeline: PipelineState) -> Result<(), RenderError> {
        pipeline.validate()?;
        self.default_pipeline = Some(pipeline);
        Ok(())
    }

    /// The default pipeline, if one was set.
    pub fn default_pipeline(&self) -> Option<&PipelineState> {
        self.default_pipeline.as_ref()
    }

    /// Mutable access to the default pipeline, e.g. to change its flags.
    pub fn default_pipeline_mut(&mut self) -> Option<&mut PipelineState> {
        self.default_pipeline.as_mut()
    }

    /// Applies the default pipeline.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::NoDefaultPipeline`] if none was set.
    pub fn apply_default_pipeline(&mut self) -> Result<Transitions, RenderError> {
        let pipeline = self
            .default_pipeline
            .take()
            .ok_or(RenderError::NoDefaultPipeline)?;
        let result = self.set_pipeline(&pipeline);
        self.default_pipeline = Some(pipeline);
        result
    }

    /// Applies `pipeline` through the state tracker.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::Pipeline`] if the pipeline has no program.
    pub fn set_pipeline(&mut self, pipeline: &PipelineState) -> Result<Transitions, RenderError> {
        let transitions = self.tracker.apply(&self.driver, pipeline)?;

        self.clear_color = pipeline.clear_color;
        self.stats.pipeline_applies += 1;
        self.stats.state_transitions += transitions.state_changes;
        self.stats.program_binds += u32::from(transitions.program_bound);
        self.stats.uniform_binds += transitions.uniform_binds;
        self.stats.sampler_binds += transitions.sampler_binds;

        Ok(transitions)
    }

    /// Draws `geometry` with the currently applied pipeline.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::Resource`] if the geometry has no vertex array.
    pub fn draw(&mut self, geometry: &dyn Geometry) -> Result<(), RenderError> {
        let indices = self.dispatcher.draw(&self.driver, geometry)?;
        self.stats.draw_calls += 1;
        self.stats.indices_submitted += u64::from(indices);
        Ok(())
    }

    /// Clears the planes selected in the settings.
    pub fn clear(&mut self) {
        self.clear_with(self.settings.clear_flags);
    }

    /// Clears the selected planes, using the clear color of the last applied
    /// pipeline (or the configured one if nothing was applied yet).
    pub fn clear_with(&mut self, flags: ClearFlags) {
        if flags.is_empty() {
            return;
        }
        if flags.contains(ClearFlags::COLOR) {
            self.driver.set_clear_color(self.clear_color.clamped());
        }
        self.driver.clear(flags);
    }

    /// Forgets the tracked state so the next pipeline is applied in full.
    pub fn invalidate(&mut self) {
        self.tracker.invalidate();
    }

    /// Unbinds the current program and forgets the tracked state.
    pub fn release(&mut self) {
        self.tracker.release(&self.driver);
    }

    /// The counters accumulated since the last [`end_frame`](Self::end_frame).
    pub fn stats(&self) -> &FrameStats {
        &self.stats
    }

    /// Finishes the current frame and returns its counters.
    pub fn end_frame(&mut self) -> FrameStats {
        let next = FrameStats {
            frame_number: self.stats.frame_number + 1,
            ..FrameStats::default()
        };
        let finished = std::mem::replace(&mut self.stats, next);
        log::trace!("Frame {} finished: {:?}", finished.frame_number, finished);
        finished
    }

    /// Consumes the renderer and returns its driver.
    pub fn into_driver(self) -> D {
        self.driver
    }
}
