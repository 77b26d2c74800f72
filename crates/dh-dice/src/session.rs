//! Roll sessions driving the tracker's dice animation.
//!
//! The tracker animates rolls in the UI. The engine computes the real
//! result the moment the session starts; every animation frame after that
//! is a throwaway draw. Committing hands the stored result back, cancelling
//! discards it, and neither can happen twice.

use dh_core::Character;
use serde::{Deserialize, Serialize};

use crate::error::{DiceError, DiceResult};
use crate::roll::{RollRequest, RollResult, resolve};
use crate::source::RandomSource;

/// Where a session is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionPhase {
    /// Created, not yet started.
    Idle,
    /// Result computed, animation frames available.
    Animating,
    /// Result handed out.
    Committed,
    /// Result discarded.
    Cancelled,
}

impl std::fmt::Display for SessionPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let phase = match self {
            Self::Idle => "idle",
            Self::Animating => "animating",
            Self::Committed => "committed",
            Self::Cancelled => "cancelled",
        };
        write!(f, "{phase}")
    }
}

#[derive(Debug)]
enum State {
    Idle,
    Animating { result: RollResult },
    Committed,
    Cancelled,
}

/// One roll from request to committed result.
#[derive(Debug)]
pub struct RollSession {
    request: RollRequest,
    state: State,
    frames: u32,
}

impl RollSession {
    /// Create an idle session for a request.
    pub fn new(request: RollRequest) -> Self {
        Self {
            request,
            state: State::Idle,
            frames: 0,
        }
    }

    /// The request this session resolves.
    pub fn request(&self) -> &RollRequest {
        &self.request
    }

    /// Current lifecycle phase.
    pub fn phase(&self) -> SessionPhase {
        match self.state {
            State::Idle => SessionPhase::Idle,
            State::Animating { .. } => SessionPhase::Animating,
            State::Committed => SessionPhase::Committed,
            State::Cancelled => SessionPhase::Cancelled,
        }
    }

    /// Animation frames served so far.
    pub fn frames(&self) -> u32 {
        self.frames
    }

    /// Resolve the request and begin animating.
    ///
    /// The result is fixed here; later frames never change it. On error the
    /// session stays idle and can be started again.
    pub fn start(
        &mut self,
        character: &Character,
        source: &mut impl RandomSource,
    ) -> DiceResult<()> {
        if !matches!(self.state, State::Idle) {
            return Err(self.bad_phase("start"));
        }
        let result = resolve(&self.request, character, source)?;
        self.state = State::Animating { result };
        Ok(())
    }

    /// Draw one throwaway frame: fresh faces shaped like the real result.
    pub fn tick(&mut self, source: &mut impl RandomSource) -> DiceResult<Vec<u32>> {
        let State::Animating { result } = &self.state else {
            return Err(self.bad_phase("tick"));
        };
        let sides = result.die.sides();
        let count = result.dice.len();
        let frame = (0..count).map(|_| source.roll_die(sides)).collect();
        self.frames += 1;
        Ok(frame)
    }

    /// End the animation and hand back the result fixed at start.
    pub fn commit(&mut self) -> DiceResult<RollResult> {
        match std::mem::replace(&mut self.state, State::Committed) {
            State::Animating { result } => Ok(result),
            other => {
                self.state = other;
                Err(self.bad_phase("commit"))
            }
        }
    }

    /// Discard the pending result without exposing it.
    pub fn cancel(&mut self) -> DiceResult<()> {
        if !matches!(self.state, State::Animating { .. }) {
            return Err(self.bad_phase("cancel"));
        }
        self.state = State::Cancelled;
        Ok(())
    }

    fn bad_phase(&self, op: &'static str) -> DiceError {
        DiceError::InvalidSession {
            op,
            phase: self.phase(),
        }
    }
}
