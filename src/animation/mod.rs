//! Time-driven transitions for visual state.
//!
//! Every animated element owns a [`Transition`]. The host supplies the clock:
//! nothing here reads wall time, so the same inputs always produce the same
//! frames.

use serde::{Deserialize, Serialize};

use crate::core::Point;

/// Default transition length for axis and marker updates.
pub const DEFAULT_TRANSITION_MS: f64 = 1000.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Easing {
    Linear,
    Smoothstep,
    #[default]
    CubicInOut,
}

impl Easing {
    /// Maps linear progress in `[0, 1]` to eased progress in `[0, 1]`.
    #[must_use]
    pub fn apply(self, t: f64) -> f64 {
        let x = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => x,
            Self::Smoothstep => x * x * (3.0 - 2.0 * x),
            Self::CubicInOut => {
                if x < 0.5 {
                    4.0 * x * x * x
                } else {
                    let y = -2.0 * x + 2.0;
                    1.0 - y * y * y / 2.0
                }
            }
        }
    }
}

/// Values that can be blended between two endpoints.
pub trait Interpolate: Copy {
    fn interpolate(self, to: Self, t: f64) -> Self;
}

impl Interpolate for f64 {
    fn interpolate(self, to: Self, t: f64) -> Self {
        self + (to - self) * t
    }
}

impl Interpolate for (f64, f64) {
    fn interpolate(self, to: Self, t: f64) -> Self {
        (self.0.interpolate(to.0, t), self.1.interpolate(to.1, t))
    }
}

impl Interpolate for Point {
    fn interpolate(self, to: Self, t: f64) -> Self {
        Point::new(self.x.interpolate(to.x, t), self.y.interpolate(to.y, t))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum TransitionPhase<T> {
    Idle {
        value: T,
    },
    Animating {
        from: T,
        to: T,
        start_ms: f64,
        duration_ms: f64,
    },
}

/// `Idle -> Animating -> Idle` state machine for one animated property.
///
/// Retargeting while animating restarts from the current interpolated value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transition<T> {
    phase: TransitionPhase<T>,
    easing: Easing,
}

impl<T: Interpolate> Transition<T> {
    #[must_use]
    pub fn idle(value: T, easing: Easing) -> Self {
        Self {
            phase: TransitionPhase::Idle { value },
            easing,
        }
    }

    #[must_use]
    pub fn phase(&self) -> TransitionPhase<T> {
        self.phase
    }

    #[must_use]
    pub fn is_animating(&self) -> bool {
        matches!(self.phase, TransitionPhase::Animating { .. })
    }

    /// Final value once the current animation (if any) completes.
    #[must_use]
    pub fn target(&self) -> T {
        match self.phase {
            TransitionPhase::Idle { value } => value,
            TransitionPhase::Animating { to, .. } => to,
        }
    }

    #[must_use]
    pub fn value_at(&self, now_ms: f64) -> T {
        match self.phase {
            TransitionPhase::Idle { value } => value,
            TransitionPhase::Animating {
                from,
                to,
                start_ms,
                duration_ms,
            } => {
                let progress = if duration_ms <= 0.0 {
                    1.0
                } else {
                    (now_ms - start_ms) / duration_ms
                };
                from.interpolate(to, self.easing.apply(progress))
            }
        }
    }

    /// Starts animating toward `to` from wherever the property is at `now_ms`.
    pub fn retarget(&mut self, to: T, now_ms: f64, duration_ms: f64) {
        let from = self.value_at(now_ms);
        self.phase = if duration_ms > 0.0 {
            TransitionPhase::Animating {
                from,
                to,
                start_ms: now_ms,
                duration_ms,
            }
        } else {
            TransitionPhase::Idle { value: to }
        };
    }

    /// Returns to `Idle` when the animation has finished. Returns `true` while
    /// still animating.
    pub fn settle(&mut self, now_ms: f64) -> bool {
        if let TransitionPhase::Animating {
            to,
            start_ms,
            duration_ms,
            ..
        } = self.phase
        {
            if now_ms - start_ms >= duration_ms {
                self.phase = TransitionPhase::Idle { value: to };
                return false;
            }
            return true;
        }
        false
    }
}
