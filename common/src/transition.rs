//! Transition parameters and pose interpolation for animated presence.
//!
//! A transition is described by a single progress value in `[0, 1]`:
//! `0.0` is the resting hidden pose (offset and transparent), `1.0` is the
//! resting visible pose. Exiting runs the same curve backwards, so an exit is
//! always the time-reverse of the entry.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// Default transition length in milliseconds.
pub const DEFAULT_DURATION_MS: u64 = 300;

/// Default vertical offset of the hidden pose, in CSS pixels.
pub const DEFAULT_OFFSET_Y_PX: f32 = 20.0;

/// Extra time granted to the animation collaborator before the watchdog
/// forces a transition to resolve.
pub const DEFAULT_COMPLETION_GRACE_MS: u64 = 200;

/// Default frame interval for timer-driven animation (~60 Hz).
pub const DEFAULT_FRAME_INTERVAL_MS: u64 = 16;

/// Easing curve applied to linear progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Easing {
    Linear,
    EaseIn,
    #[default]
    EaseOut,
    EaseInOut,
}

impl Easing {
    /// Maps linear progress `t` to eased progress. Input is clamped to `[0, 1]`
    /// and the curve always passes through `(0, 0)` and `(1, 1)`.
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::EaseIn => t * t * t,
            Easing::EaseOut => 1.0 - (1.0 - t).powi(3),
            Easing::EaseInOut => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
                }
            }
        }
    }
}

/// Which way a transition is heading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Towards the visible pose.
    In,
    /// Towards the hidden pose.
    Out,
}

impl Direction {
    /// Progress value at which a transition in this direction is finished.
    pub fn target_progress(self) -> f32 {
        match self {
            Direction::In => 1.0,
            Direction::Out => 0.0,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::In => write!(f, "in"),
            Direction::Out => write!(f, "out"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransitionConfig {
    /// Length of a full hidden-to-visible transition.
    pub duration_ms: u64,
    /// Vertical offset of the hidden pose.
    pub offset_y_px: f32,
    pub easing: Easing,
    /// Time added to the remaining duration before the watchdog fires.
    pub completion_grace_ms: u64,
    /// Tick length used by timer-driven frame sources.
    pub frame_interval_ms: u64,
}

impl Default for TransitionConfig {
    fn default() -> Self {
        TransitionConfig {
            duration_ms: DEFAULT_DURATION_MS,
            offset_y_px: DEFAULT_OFFSET_Y_PX,
            easing: Easing::default(),
            completion_grace_ms: DEFAULT_COMPLETION_GRACE_MS,
            frame_interval_ms: DEFAULT_FRAME_INTERVAL_MS,
        }
    }
}

impl TransitionConfig {
    pub fn duration(&self) -> Duration {
        Duration::from_millis(self.duration_ms)
    }

    pub fn completion_grace(&self) -> Duration {
        Duration::from_millis(self.completion_grace_ms)
    }

    pub fn frame_interval(&self) -> Duration {
        Duration::from_millis(self.frame_interval_ms)
    }

    /// Interpolated pose for a linear progress value.
    pub fn pose_at(&self, progress: f32) -> Pose {
        let eased = self.easing.apply(progress);
        Pose {
            opacity: eased,
            offset_y: self.offset_y_px * (1.0 - eased),
        }
    }
}

/// Visual state of the animated content at one instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    pub opacity: f32,
    pub offset_y: f32,
}

impl Pose {
    /// Inline style for the animated element.
    pub fn to_css(&self) -> String {
        format!(
            "opacity: {:.3}; transform: translateY({:.2}px);",
            self.opacity, self.offset_y
        )
    }
}
