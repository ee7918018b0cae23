//! The flyover engine: start/stop/resume state machine and the step loop.
//!
//! A `Flyover` rotates its viewport's camera around one coordinate in discrete steps.
//! Each step reads the current `Context`, computes a target pose from the
//! configuration's parameters and hands the timing to the `Animator`. When a step
//! finishes naturally, `advance` begins the next one. Stopping or retargeting
//! discards the in-flight step, so only a started flyover still aimed at the step's
//! coordinate ever reaches a step boundary. There is no recursion; the loop lives
//! in the per-frame `advance` call.

use std::time::Duration;

use bevy::prelude::*;

use crate::animator::Animator;
use crate::configuration::Configuration;
use crate::context::Context;
use crate::coordinate::Coordinate;
use crate::error::FlyoverError;
use crate::events::FlyoverStepComplete;
use crate::events::FlyoverStopped;
use crate::viewport::MapCamera;
use crate::viewport::MapViewport;

#[derive(Reflect, Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum FlyoverState {
    #[default]
    Stopped,
    Started,
}

/// Host lifecycle notifications a flyover reacts to.
#[derive(Reflect, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LifecycleEvent {
    /// The application is about to leave the foreground.
    Suspend,
    /// The application is back in the foreground.
    Resume,
}

/// What happened during one `advance`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Advance {
    /// Nothing in flight.
    Idle,
    /// The in-flight step moved forward.
    Ticked,
    /// A step reached its end and the next one began.
    StepCompleted { heading: f64 },
    /// The viewport disappeared or the next step could not begin; the flyover stopped.
    Halted,
}

/// The step currently being animated.
#[derive(Debug, Clone, Copy)]
struct Step {
    from: MapCamera,
    to:   MapCamera,
}

/// The engine component. Lives on any entity; drives the viewport entity it was
/// created for.
#[derive(Component, Debug)]
pub struct Flyover {
    viewport: Entity,
    state:    FlyoverState,
    context:  Option<Context>,
    animator: Animator,
    step:     Option<Step>,
    /// Elapsed fraction reported by the most recent `stop`.
    interrupted_at: Option<f32>,
}

impl Flyover {
    pub const fn new(viewport: Entity) -> Self {
        Self {
            viewport,
            state: FlyoverState::Stopped,
            context: None,
            animator: Animator::new(),
            step: None,
            interrupted_at: None,
        }
    }

    pub const fn viewport(&self) -> Entity { self.viewport }

    pub const fn state(&self) -> FlyoverState { self.state }

    pub fn is_started(&self) -> bool { self.state == FlyoverState::Started }

    /// The last accepted target, kept across stops so `resume` can pick it up.
    pub const fn context(&self) -> Option<&Context> { self.context.as_ref() }

    /// Elapsed fraction of the step interrupted by the most recent stop, if a step
    /// was in flight then.
    pub const fn last_interruption(&self) -> Option<f32> { self.interrupted_at }

    /// A step is in flight.
    pub const fn is_animating(&self) -> bool { self.animator.is_running() }

    /// Starts (or retargets) the flyover. Returns whether it is now started.
    pub fn start(
        &mut self,
        coordinate: impl Into<Coordinate>,
        configuration: Configuration,
        viewport: Option<&mut MapViewport>,
    ) -> bool {
        self.try_start(coordinate.into(), configuration, viewport)
            .inspect_err(|error| warn!("Flyover: start failed: {error}"))
            .is_ok()
    }

    pub fn try_start(
        &mut self,
        coordinate: Coordinate,
        configuration: Configuration,
        viewport: Option<&mut MapViewport>,
    ) -> Result<(), FlyoverError> {
        let Some(viewport) = viewport else {
            self.stop(None);
            return Err(FlyoverError::ViewportUnavailable(self.viewport));
        };
        if !coordinate.is_valid() {
            self.stop(Some(viewport));
            return Err(FlyoverError::InvalidCoordinate(coordinate));
        }

        let retargeted = !self
            .context
            .as_ref()
            .is_some_and(|context| context.matches(coordinate));
        if retargeted {
            viewport.recenter(coordinate);
        }

        self.context = Some(Context::new(coordinate, configuration));

        if self.is_started() {
            if retargeted {
                // abandon the step aimed at the old coordinate
                debug!("Flyover: retargeted to {coordinate:?} while started");
                self.animator.stop();
                self.step = None;
                return self.begin_step(viewport).inspect_err(|_| self.state = FlyoverState::Stopped);
            }
            return Ok(());
        }

        self.begin_step(viewport)?;
        self.state = FlyoverState::Started;
        info!("Flyover: started at {coordinate:?}");
        Ok(())
    }

    /// Restarts the loop from the stored context after a `stop`.
    pub fn resume(&mut self, viewport: Option<&mut MapViewport>) -> bool {
        self.try_resume(viewport)
            .inspect_err(|error| debug!("Flyover: resume ignored: {error}"))
            .is_ok()
    }

    pub fn try_resume(&mut self, viewport: Option<&mut MapViewport>) -> Result<(), FlyoverError> {
        if self.is_started() {
            return Err(FlyoverError::AlreadyStarted);
        }
        let Some(viewport) = viewport else {
            return Err(FlyoverError::ViewportUnavailable(self.viewport));
        };
        if self.context.is_none() {
            return Err(FlyoverError::NothingToResume);
        }

        self.begin_step(viewport)?;
        self.state = FlyoverState::Started;
        info!("Flyover: resumed");
        Ok(())
    }

    /// Stops the flyover. Returns the fraction of the in-flight step that had
    /// elapsed, if one was running.
    ///
    /// In standard map modes the heading eases to the matching point of the
    /// interrupted rotation. Other modes only re-apply the current heading.
    ///
    /// The blend point is the linear elapsed fraction, not the eased progress the
    /// camera was showing, so with a non-linear curve the heading moves on stop.
    /// An `EaseIn` step from 30° to 50° stopped halfway shows 32.5° and settles
    /// at 40°.
    pub fn stop(&mut self, viewport: Option<&mut MapViewport>) -> Option<f32> {
        if self.is_started() {
            info!("Flyover: stopped");
        }
        self.state = FlyoverState::Stopped;

        let fraction = self.animator.stop();
        let step = self.step.take();
        self.interrupted_at = fraction;
        let (Some(fraction), Some(step), Some(viewport), Some(context)) =
            (fraction, step, viewport, self.context.as_ref())
        else {
            return fraction;
        };

        if viewport.map_type.supports_heading_blend() {
            let start = step.from.heading;
            let target = context.configuration().heading.apply(start);
            viewport.set_heading(blended_heading(start, target, fraction));
        } else {
            let heading = viewport.camera.heading;
            viewport.set_heading(heading);
        }
        Some(fraction)
    }

    /// Reacts to the host leaving or re-entering the foreground.
    ///
    /// Suspending a started flyover stops it but keeps its target so that resuming
    /// restarts it. Suspending a stopped flyover forgets the target, so resuming
    /// does not revive a flyover the host had stopped.
    pub fn handle_lifecycle(&mut self, event: LifecycleEvent, viewport: Option<&mut MapViewport>) -> bool {
        match event {
            LifecycleEvent::Suspend => {
                if self.is_started() {
                    self.stop(viewport);
                } else {
                    self.context = None;
                }
                false
            },
            LifecycleEvent::Resume => {
                let Some(context) = self.context.clone() else {
                    return false;
                };
                self.start(context.coordinate(), context.configuration().clone(), viewport)
            },
        }
    }

    /// Moves the in-flight step forward by `delta` and, when it finishes, begins the
    /// next one.
    pub fn advance(&mut self, delta: Duration, viewport: Option<&mut MapViewport>) -> Advance {
        if !self.animator.is_running() {
            return Advance::Idle;
        }
        let Some(viewport) = viewport else {
            warn!("Flyover: viewport {:?} disappeared, stopping", self.viewport);
            self.stop(None);
            return Advance::Halted;
        };
        let (Some(tick), Some(step)) = (self.animator.tick(delta), self.step) else {
            return Advance::Idle;
        };

        viewport.camera = step.from.interpolate(&step.to, f64::from(tick.progress));
        if !tick.finished {
            return Advance::Ticked;
        }

        // `stop` and retargeting both discard the in-flight step, so a step that
        // finishes here belongs to a started flyover still aimed at its coordinate
        self.step = None;
        let heading = viewport.camera.heading;

        match self.begin_step(viewport) {
            Ok(()) => Advance::StepCompleted { heading },
            Err(error) => {
                warn!("Flyover: could not schedule next step: {error}");
                self.state = FlyoverState::Stopped;
                Advance::Halted
            },
        }
    }

    fn begin_step(&mut self, viewport: &mut MapViewport) -> Result<(), FlyoverError> {
        let Some(context) = self.context.as_ref() else {
            return Err(FlyoverError::NothingToResume);
        };
        let configuration = context.configuration();
        let from = viewport.camera;
        let to = MapCamera {
            center:   context.coordinate(),
            altitude: configuration.altitude.apply(from.altitude),
            pitch:    configuration.pitch.apply(from.pitch),
            heading:  configuration.heading.apply(from.heading),
        };

        self.animator
            .start(configuration.animation_duration, configuration.animation_curve)?;
        self.step = Some(Step { from, to });
        debug!(
            "Flyover: step toward heading {:.1} over {:?}",
            to.heading, configuration.animation_duration
        );
        Ok(())
    }
}

/// System that advances every in-flight flyover step by the frame time.
///
/// A flyover reconfigured in between frames picks up its new configuration at the
/// next step boundary; one stopped in between frames has no step left to advance.
pub fn advance_flyovers(
    mut commands: Commands,
    time: Res<Time>,
    mut flyover_query: Query<(Entity, &mut Flyover)>,
    mut viewport_query: Query<&mut MapViewport>,
) {
    for (entity, mut flyover) in &mut flyover_query {
        if !flyover.is_animating() {
            continue;
        }

        let viewport_entity = flyover.viewport();
        let mut viewport = viewport_query.get_mut(viewport_entity).ok();

        match flyover.advance(time.delta(), viewport.as_deref_mut()) {
            Advance::Idle | Advance::Ticked => {},
            Advance::StepCompleted { heading } => {
                commands.trigger(FlyoverStepComplete {
                    flyover_entity: entity,
                    heading,
                });
            },
            Advance::Halted => {
                commands.trigger(FlyoverStopped {
                    flyover_entity:    entity,
                    viewport:          viewport_entity,
                    fraction_complete: flyover.last_interruption(),
                });
            },
        }
    }
}

/// Heading at `fraction` of the way from `start` to `target`, unwrapped.
///
/// `fraction` is clamped to `[0, 1]`, so the result never overshoots either end.
pub fn blended_heading(start: f64, target: f64, fraction: f32) -> f64 {
    (target - start).mul_add(f64::from(fraction.clamp(0.0, 1.0)), start)
}
