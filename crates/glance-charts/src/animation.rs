//! Time-based animation of chart progress.
//!
//! An [`Animator`] holds the progress scalar every layout blends its
//! geometry by. Hosts drive it by calling [`Animator::advance`] once per
//! frame; nothing here sleeps, spawns, or reads a clock.

use std::time::Duration;

/// Cadence at which hosts are expected to advance animations (30 Hz).
pub const FRAME_INTERVAL: Duration = Duration::from_nanos(1_000_000_000 / 30);

/// Default length of an entrance or exit animation.
pub const DEFAULT_ANIMATION_DURATION: Duration = Duration::from_millis(1500);

// =============================================================================
// Easing Functions
// =============================================================================

/// Easing curves applied to normalized time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Easing {
    /// `t^3`: slow start
    CubicIn,
    /// `1 - (1 - t)^3`: slow end
    #[default]
    CubicOut,
}

impl Easing {
    /// Apply easing function to a normalized time value (0.0 to 1.0).
    #[must_use]
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::CubicIn => t * t * t,
            Self::CubicOut => 1.0 - (1.0 - t).powi(3),
        }
    }
}

// =============================================================================
// Animator
// =============================================================================

/// Which way progress is moving.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Progress rises toward 1
    Entrance,
    /// Progress falls toward 0
    Exit,
}

impl Direction {
    /// Progress value at which this direction completes.
    #[must_use]
    pub const fn terminal(self) -> f32 {
        match self {
            Self::Entrance => 1.0,
            Self::Exit => 0.0,
        }
    }

    /// Curve applied while moving in this direction.
    #[must_use]
    pub const fn easing(self) -> Easing {
        match self {
            Self::Entrance => Easing::CubicOut,
            Self::Exit => Easing::CubicIn,
        }
    }
}

/// Animation state machine.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AnimationState {
    /// No animation running
    Idle,
    /// An animation is running
    Animating {
        /// Direction of travel
        direction: Direction,
        /// Time since the animation started
        elapsed: Duration,
        /// Progress when the animation started
        progress_at_start: f32,
    },
}

/// Outcome of one [`Animator::advance`] call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationStep {
    /// Progress after the step
    pub progress: f32,
    /// Set when the running animation reached its terminal bound
    pub completed: Option<Direction>,
}

impl AnimationStep {
    /// Whether the loop should keep ticking.
    #[must_use]
    pub const fn should_continue(&self) -> bool {
        self.completed.is_none()
    }
}

/// Drives the chart's animation progress.
#[derive(Debug, Clone, PartialEq)]
pub struct Animator {
    duration: Duration,
    progress: f32,
    state: AnimationState,
}

impl Default for Animator {
    fn default() -> Self {
        Self::new(DEFAULT_ANIMATION_DURATION)
    }
}

impl Animator {
    /// Idle animator at full progress.
    #[must_use]
    pub const fn new(duration: Duration) -> Self {
        Self {
            duration,
            progress: 1.0,
            state: AnimationState::Idle,
        }
    }

    /// Current progress in [0, 1].
    #[must_use]
    pub const fn progress(&self) -> f32 {
        self.progress
    }

    /// Current state.
    #[must_use]
    pub const fn state(&self) -> AnimationState {
        self.state
    }

    /// Whether an animation is running.
    #[must_use]
    pub const fn is_animating(&self) -> bool {
        matches!(self.state, AnimationState::Animating { .. })
    }

    /// Direction of the running animation.
    #[must_use]
    pub const fn direction(&self) -> Option<Direction> {
        match self.state {
            AnimationState::Animating { direction, .. } => Some(direction),
            AnimationState::Idle => None,
        }
    }

    /// Animation length.
    #[must_use]
    pub const fn duration(&self) -> Duration {
        self.duration
    }

    /// Change the animation length; affects running animations too.
    pub fn set_duration(&mut self, duration: Duration) {
        self.duration = duration;
    }

    /// Stop any running animation and pin progress.
    pub fn set_progress(&mut self, progress: f32) {
        self.state = AnimationState::Idle;
        self.progress = progress.clamp(0.0, 1.0);
    }

    /// Start animating in `direction` from the current progress.
    ///
    /// Any running animation is replaced.
    pub fn start(&mut self, direction: Direction) {
        self.state = AnimationState::Animating {
            direction,
            elapsed: Duration::ZERO,
            progress_at_start: self.progress,
        };
    }

    /// Start an entrance from zero.
    pub fn start_entrance(&mut self) {
        self.progress = 0.0;
        self.start(Direction::Entrance);
    }

    /// Advance by `dt` and return the new progress.
    pub fn advance(&mut self, dt: Duration) -> AnimationStep {
        let AnimationState::Animating {
            direction,
            elapsed,
            progress_at_start,
        } = self.state
        else {
            return AnimationStep {
                progress: self.progress,
                completed: None,
            };
        };

        let elapsed = elapsed.saturating_add(dt);
        let t = if self.duration.is_zero() {
            1.0
        } else {
            (elapsed.as_secs_f32() / self.duration.as_secs_f32()).clamp(0.0, 1.0)
        };

        let eased = direction.easing().apply(t);
        let end = direction.terminal();
        self.progress = (end - progress_at_start).mul_add(eased, progress_at_start);

        let keep_going = match direction {
            Direction::Entrance => self.progress < 1.0,
            Direction::Exit => self.progress > 0.0,
        };
        if keep_going {
            self.state = AnimationState::Animating {
                direction,
                elapsed,
                progress_at_start,
            };
            AnimationStep {
                progress: self.progress,
                completed: None,
            }
        } else {
            self.set_progress(end);
            AnimationStep {
                progress: self.progress,
                completed: Some(direction),
            }
        }
    }
}
