//! Single-transition step animator.
//!
//! Holds at most one timed interpolation. The transition is advanced by `tick`, which
//! the flyover calls from the `Update` schedule, and reports natural completion exactly
//! once. `stop` cancels on the spot and reports how far the transition got.

use std::time::Duration;

use crate::configuration::AnimationCurve;
use crate::error::FlyoverError;

#[derive(Clone, Copy, Debug)]
struct Transition {
    duration: Duration,
    curve:    AnimationCurve,
    elapsed:  Duration,
}

impl Transition {
    fn fraction_complete(&self) -> f32 {
        if self.duration.is_zero() {
            return if self.elapsed.is_zero() { 0.0 } else { 1.0 };
        }
        (self.elapsed.as_secs_f32() / self.duration.as_secs_f32()).min(1.0)
    }
}

/// Result of advancing a running transition by one frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AnimatorTick {
    /// Linear elapsed fraction in `[0, 1]`.
    pub fraction: f32,
    /// `fraction` after the transition's curve.
    pub progress: f32,
    /// The transition reached its end and has been cleared.
    pub finished: bool,
}

#[derive(Debug, Default)]
pub struct Animator {
    transition: Option<Transition>,
}

impl Animator {
    pub const fn new() -> Self { Self { transition: None } }

    pub const fn is_running(&self) -> bool { self.transition.is_some() }

    /// Begins a transition. Refuses if one is already running; callers stop first.
    ///
    /// Completion is never reported from here. A zero `duration` finishes on the next
    /// `tick`.
    pub fn start(&mut self, duration: Duration, curve: AnimationCurve) -> Result<(), FlyoverError> {
        if self.transition.is_some() {
            return Err(FlyoverError::AlreadyRunning);
        }
        self.transition = Some(Transition {
            duration,
            curve,
            elapsed: Duration::ZERO,
        });
        Ok(())
    }

    /// Advances the running transition by `delta`. `None` when idle.
    pub fn tick(&mut self, delta: Duration) -> Option<AnimatorTick> {
        let transition = self.transition.as_mut()?;

        transition.elapsed = if transition.duration.is_zero() {
            // any tick completes an instant transition, even one with a zero delta
            Duration::from_nanos(1).max(delta)
        } else {
            transition.elapsed.saturating_add(delta)
        };

        let fraction = transition.fraction_complete();
        let finished = fraction >= 1.0;
        let tick = AnimatorTick {
            fraction,
            progress: if finished { 1.0 } else { transition.curve.sample(fraction) },
            finished,
        };

        if finished {
            self.transition = None;
        }
        Some(tick)
    }

    /// Cancels the running transition and returns its elapsed fraction, or `None`
    /// when nothing was running.
    pub fn stop(&mut self) -> Option<f32> {
        self.transition.take().map(|transition| transition.fraction_complete())
    }
}
