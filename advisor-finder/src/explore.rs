//! Interactive research-direction exploration
//!
//! The session moves Start → Exploring → Ready → Finished. `ExploreState`
//! holds the data each phase needs, and `ExploreState::apply` is the only
//! place transitions happen. `Explorer` wraps it with input drafts, the
//! last error and a busy flag, and drives the backend calls.
//!
//! Readiness is decided by the backend; the client only follows `is_ready`.

use advisor_common::api::{ExploreFinish, ExplorePaper, ExploreStart, ExploreStep};

use crate::api::{AdvisorBackend, ApiError};

/// One round of papers and the question asked about them
#[derive(Debug, Clone, PartialEq)]
pub struct Round {
    pub session_id: String,
    pub papers: Vec<ExplorePaper>,
    pub prompt: String,
    /// 1-based round counter
    pub number: u32,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum ExploreState {
    #[default]
    Start,
    Exploring(Round),
    /// The backend considers the direction narrow enough to finish
    Ready(Round),
    Finished {
        session_id: String,
        rounds: u32,
        result: ExploreFinish,
    },
}

#[derive(Debug, Clone)]
pub enum ExploreEvent {
    Started(ExploreStart),
    Responded(ExploreStep),
    Finished(ExploreFinish),
    Reset,
}

impl ExploreState {
    /// Transition on `event`. Pairs with no transition leave the state as is.
    pub fn apply(self, event: ExploreEvent) -> ExploreState {
        match (self, event) {
            (_, ExploreEvent::Reset) => ExploreState::Start,

            (ExploreState::Start, ExploreEvent::Started(start)) => {
                ExploreState::Exploring(Round {
                    session_id: start.session_id,
                    papers: start.papers,
                    prompt: start.prompt,
                    number: 1,
                })
            }

            (
                ExploreState::Exploring(round) | ExploreState::Ready(round),
                ExploreEvent::Responded(step),
            ) => {
                let next = Round {
                    session_id: round.session_id,
                    papers: step.papers,
                    prompt: step.prompt,
                    number: round.number + 1,
                };
                if step.is_ready {
                    ExploreState::Ready(next)
                } else {
                    ExploreState::Exploring(next)
                }
            }

            (ExploreState::Ready(round), ExploreEvent::Finished(result)) => ExploreState::Finished {
                session_id: round.session_id,
                rounds: round.number,
                result,
            },

            (state, event) => {
                tracing::debug!(
                    state = state.name(),
                    event = event_name(&event),
                    "Ignored exploration event"
                );
                state
            }
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            ExploreState::Start => "start",
            ExploreState::Exploring(_) => "exploring",
            ExploreState::Ready(_) => "ready",
            ExploreState::Finished { .. } => "finished",
        }
    }

    /// Active round, while exploring or ready
    pub fn round(&self) -> Option<&Round> {
        match self {
            ExploreState::Exploring(round) | ExploreState::Ready(round) => Some(round),
            _ => None,
        }
    }

    /// Round counter: 0 before the session starts
    pub fn round_number(&self) -> u32 {
        match self {
            ExploreState::Start => 0,
            ExploreState::Exploring(round) | ExploreState::Ready(round) => round.number,
            ExploreState::Finished { rounds, .. } => *rounds,
        }
    }

    pub fn session_id(&self) -> Option<&str> {
        match self {
            ExploreState::Start => None,
            ExploreState::Exploring(round) | ExploreState::Ready(round) => Some(&round.session_id),
            ExploreState::Finished { session_id, .. } => Some(session_id),
        }
    }

    pub fn result(&self) -> Option<&ExploreFinish> {
        match self {
            ExploreState::Finished { result, .. } => Some(result),
            _ => None,
        }
    }
}

fn event_name(event: &ExploreEvent) -> &'static str {
    match event {
        ExploreEvent::Started(_) => "started",
        ExploreEvent::Responded(_) => "responded",
        ExploreEvent::Finished(_) => "finished",
        ExploreEvent::Reset => "reset",
    }
}

/// Result of an `Explorer` action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionOutcome {
    /// Preconditions not met; no request was sent
    Skipped,
    Applied,
    /// Request failed; see `Explorer::error`
    Failed,
}

/// Exploration screen state
#[derive(Debug, Default)]
pub struct Explorer {
    state: ExploreState,
    interest: String,
    response: String,
    error: Option<String>,
    busy: bool,
}

impl Explorer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &ExploreState {
        &self.state
    }

    pub fn interest(&self) -> &str {
        &self.interest
    }

    pub fn set_interest(&mut self, interest: impl Into<String>) {
        self.interest = interest.into();
    }

    pub fn response(&self) -> &str {
        &self.response
    }

    pub fn set_response(&mut self, response: impl Into<String>) {
        self.response = response.into();
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_busy(&self) -> bool {
        self.busy
    }

    pub fn can_start(&self) -> bool {
        !self.busy
            && matches!(self.state, ExploreState::Start)
            && !self.interest.trim().is_empty()
    }

    pub fn can_respond(&self) -> bool {
        !self.busy && self.state.round().is_some() && !self.response.trim().is_empty()
    }

    pub fn can_finish(&self) -> bool {
        !self.busy && matches!(self.state, ExploreState::Ready(_))
    }

    pub async fn start(&mut self, backend: &dyn AdvisorBackend) -> ActionOutcome {
        if !self.can_start() {
            return ActionOutcome::Skipped;
        }

        self.begin();
        let result = backend.start_exploration(&self.interest).await;
        self.busy = false;

        match result {
            Ok(start) => {
                self.transition(ExploreEvent::Started(start));
                ActionOutcome::Applied
            }
            Err(e) => self.fail(e, "Failed to start exploration"),
        }
    }

    pub async fn respond(&mut self, backend: &dyn AdvisorBackend) -> ActionOutcome {
        if !self.can_respond() {
            return ActionOutcome::Skipped;
        }
        let session_id = match self.state.session_id() {
            Some(id) => id.to_string(),
            None => return ActionOutcome::Skipped,
        };

        self.begin();
        let result = backend
            .respond_to_exploration(&session_id, &self.response)
            .await;
        self.busy = false;

        match result {
            Ok(step) => {
                self.response.clear();
                self.transition(ExploreEvent::Responded(step));
                ActionOutcome::Applied
            }
            Err(e) => self.fail(e, "Failed to process response"),
        }
    }

    pub async fn finish(&mut self, backend: &dyn AdvisorBackend) -> ActionOutcome {
        if !self.can_finish() {
            return ActionOutcome::Skipped;
        }
        let session_id = match self.state.session_id() {
            Some(id) => id.to_string(),
            None => return ActionOutcome::Skipped,
        };

        self.begin();
        let result = backend.finish_exploration(&session_id).await;
        self.busy = false;

        match result {
            Ok(finish) => {
                self.transition(ExploreEvent::Finished(finish));
                ActionOutcome::Applied
            }
            Err(e) => self.fail(e, "Failed to finish exploration"),
        }
    }

    /// Back to an empty start screen
    pub fn reset(&mut self) {
        self.transition(ExploreEvent::Reset);
        self.interest.clear();
        self.response.clear();
        self.error = None;
        self.busy = false;
    }

    fn begin(&mut self) {
        self.busy = true;
        self.error = None;
    }

    fn transition(&mut self, event: ExploreEvent) {
        let state = std::mem::take(&mut self.state);
        self.state = state.apply(event);
        tracing::debug!(
            state = self.state.name(),
            round = self.state.round_number(),
            "Exploration state changed"
        );
    }

    fn fail(&mut self, error: ApiError, fallback: &str) -> ActionOutcome {
        tracing::warn!(error = %error, state = self.state.name(), "Exploration request failed");
        self.error = Some(error.user_message(fallback));
        ActionOutcome::Failed
    }
}
