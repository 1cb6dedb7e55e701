//! Four-phase presence lifecycle for animated overlays.
//!
//! The owner of an overlay only says whether it *should* be visible. This
//! module turns that flag into `Hidden -> Entering -> Visible -> Exiting ->
//! Hidden`, keeping the content mounted while it animates out. Every
//! transition gets a fresh [`TransitionTicket`]; frames, completions and
//! watchdog timeouts carrying an older ticket are ignored, so a superseded
//! animation can never settle the machine.

use crate::transition::{Direction, Pose, TransitionConfig};
use std::fmt;
use std::time::Duration;
use tracing::{debug, warn};

/// Progress within this distance of the target counts as arrived.
const PROGRESS_EPSILON: f32 = 1e-4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Phase {
    #[default]
    Hidden,
    Entering,
    Visible,
    Exiting,
}

impl Phase {
    /// Whether content is present in the render tree in this phase.
    pub fn is_mounted(self) -> bool {
        !matches!(self, Phase::Hidden)
    }

    pub fn is_animating(self) -> bool {
        matches!(self, Phase::Entering | Phase::Exiting)
    }

    /// Whether `next` is a legal successor of this phase.
    pub fn can_transition_to(self, next: Phase) -> bool {
        matches!(
            (self, next),
            (Phase::Hidden, Phase::Entering)
                | (Phase::Entering, Phase::Visible)
                | (Phase::Entering, Phase::Exiting)
                | (Phase::Visible, Phase::Exiting)
                | (Phase::Exiting, Phase::Hidden)
                | (Phase::Exiting, Phase::Entering)
        )
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Phase::Hidden => "hidden",
            Phase::Entering => "entering",
            Phase::Visible => "visible",
            Phase::Exiting => "exiting",
        };
        f.write_str(name)
    }
}

/// Identifies one transition of one [`Presence`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TransitionTicket {
    generation: u64,
    direction: Direction,
}

impl TransitionTicket {
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }
}

#[derive(Debug, Clone)]
pub struct Presence {
    config: TransitionConfig,
    phase: Phase,
    progress: f32,
    generation: u64,
}

impl Presence {
    pub fn new(config: TransitionConfig) -> Self {
        Presence {
            config,
            phase: Phase::Hidden,
            progress: 0.0,
            generation: 0,
        }
    }

    pub fn config(&self) -> &TransitionConfig {
        &self.config
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Linear progress, `0.0` at the hidden pose and `1.0` at the visible pose.
    pub fn progress(&self) -> f32 {
        self.progress
    }

    pub fn pose(&self) -> Pose {
        self.config.pose_at(self.progress)
    }

    pub fn is_mounted(&self) -> bool {
        self.phase.is_mounted()
    }

    /// The visibility the machine is currently heading towards.
    pub fn target(&self) -> bool {
        matches!(self.phase, Phase::Entering | Phase::Visible)
    }

    /// Ticket of the transition in flight, if any.
    pub fn current_ticket(&self) -> Option<TransitionTicket> {
        let direction = match self.phase {
            Phase::Entering => Direction::In,
            Phase::Exiting => Direction::Out,
            Phase::Hidden | Phase::Visible => return None,
        };
        Some(TransitionTicket {
            generation: self.generation,
            direction,
        })
    }

    pub fn is_current(&self, ticket: &TransitionTicket) -> bool {
        self.current_ticket().as_ref() == Some(ticket)
    }

    /// Time the in-flight transition still needs at the configured speed.
    ///
    /// A reversal resumes from the current progress, so it only needs the
    /// share of the full duration that covers the distance back.
    pub fn remaining(&self) -> Duration {
        let distance = match self.phase {
            Phase::Entering => 1.0 - self.progress,
            Phase::Exiting => self.progress,
            Phase::Hidden | Phase::Visible => return Duration::ZERO,
        };
        let distance = distance.clamp(0.0, 1.0);
        if distance >= 1.0 {
            // A full run takes exactly the configured duration.
            return self.config.duration();
        }
        self.config.duration().mul_f64(f64::from(distance))
    }

    /// Applies a new value of the external visibility flag.
    ///
    /// Returns the ticket of the transition that was started, or `None` when
    /// the request matches where the machine is already heading.
    pub fn set_visible(&mut self, visible: bool) -> Option<TransitionTicket> {
        let next = match (self.phase, visible) {
            (Phase::Hidden, true) | (Phase::Exiting, true) => Phase::Entering,
            (Phase::Visible, false) | (Phase::Entering, false) => Phase::Exiting,
            _ => return None,
        };

        self.generation += 1;
        debug!(
            "Presence {} -> {} (generation {}, progress {:.3})",
            self.phase, next, self.generation, self.progress
        );
        self.phase = next;
        self.current_ticket()
    }

    /// Moves the in-flight transition forward by `elapsed`.
    ///
    /// Returns the settled phase if this frame finished the transition.
    pub fn advance(&mut self, ticket: &TransitionTicket, elapsed: Duration) -> Option<Phase> {
        if !self.is_current(ticket) {
            return None;
        }

        let duration = self.config.duration().as_secs_f32();
        let step = if duration > 0.0 {
            elapsed.as_secs_f32() / duration
        } else {
            1.0
        };

        self.progress = match ticket.direction {
            Direction::In => (self.progress + step).min(1.0),
            Direction::Out => (self.progress - step).max(0.0),
        };

        if (self.progress - ticket.direction.target_progress()).abs() <= PROGRESS_EPSILON {
            Some(self.settle())
        } else {
            None
        }
    }

    /// Completion notification from the animation collaborator.
    pub fn complete(&mut self, ticket: &TransitionTicket) -> Option<Phase> {
        if !self.is_current(ticket) {
            return None;
        }
        Some(self.settle())
    }

    /// Escape hatch for a collaborator that never reports completion.
    pub fn force_resolve(&mut self, ticket: &TransitionTicket) -> Option<Phase> {
        if !self.is_current(ticket) {
            return None;
        }
        warn!(
            "Transition {} (generation {}) did not complete in time, forcing resolution",
            ticket.direction, ticket.generation
        );
        Some(self.settle())
    }

    /// Returns to `Hidden` and invalidates every outstanding ticket.
    pub fn reset(&mut self) {
        self.generation += 1;
        self.phase = Phase::Hidden;
        self.progress = 0.0;
    }

    fn settle(&mut self) -> Phase {
        let (phase, progress) = match self.phase {
            Phase::Entering => (Phase::Visible, 1.0),
            Phase::Exiting => (Phase::Hidden, 0.0),
            settled => return settled,
        };
        debug!("Presence {} -> {} (generation {})", self.phase, phase, self.generation);
        self.phase = phase;
        self.progress = progress;
        phase
    }
}

impl Default for Presence {
    fn default() -> Self {
        Presence::new(TransitionConfig::default())
    }
}
