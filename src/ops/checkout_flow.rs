//! ops::checkout_flow
//!
//! Two-step checkout target selection.
//!
//! ```text
//! ChoosingKind --ChooseKind--> ChoosingTarget --valid selection--> Confirmed
//!      |  ^                          |
//!      |  +---- no candidates -------+ (reported, stays in ChoosingKind)
//!      |                             |
//!      +------- Quit / Interrupt ----+------> Cancelled
//! ```
//!
//! The flow consumes [`FlowEvent`]s, never raw text. Turning keystrokes or a
//! typed line into an event is the front end's job.

use crate::core::types::{CheckoutResult, TargetKind};
use crate::git::GitExecutor;

use super::facade::Operations;

pub const MSG_CANCELLED: &str = "Cancelled.";
pub const MSG_INVALID_CHOICE: &str = "Invalid choice";
pub const MSG_INVALID_SELECTION: &str = "Invalid selection";
pub const MSG_INVALID_INPUT: &str = "Invalid input";
pub const MSG_FINISHED: &str = "Checkout flow already finished";

/// Operator input, already decoded by the front end.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlowEvent {
    /// Pick branches or tags.
    ChooseKind(TargetKind),
    /// Pick a candidate by zero-based position.
    SelectIndex(i64),
    /// Pick a candidate by name.
    SelectName(String),
    /// Leave without checking anything out.
    Quit,
    /// Input the front end could not decode.
    Invalid,
    /// Operator abort (Ctrl-C, end of input).
    Interrupt,
}

/// Candidates for one selection attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckoutSelection {
    pub kind: TargetKind,
    pub candidates: Vec<String>,
    pub chosen_index: Option<usize>,
}

/// Where the flow is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlowState {
    ChoosingKind,
    ChoosingTarget(CheckoutSelection),
    /// A checkout ran for the candidate at `selection.chosen_index`.
    Confirmed {
        selection: CheckoutSelection,
        result: CheckoutResult,
    },
    Cancelled,
}

impl FlowState {
    /// Confirmed or cancelled; no further event is accepted.
    pub fn is_terminal(&self) -> bool {
        matches!(self, FlowState::Confirmed { .. } | FlowState::Cancelled)
    }
}

/// What the front end should show after an event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlowReply {
    /// Candidates are ready; prompt for one of them.
    Candidates {
        kind: TargetKind,
        candidates: Vec<String>,
    },
    /// The event was refused; the flow stays where it was.
    Rejected(String),
    /// The flow ended.
    Finished(FlowOutcome),
}

/// Terminal result of a flow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlowOutcome {
    /// A checkout ran; its result is reported untouched.
    Confirmed(CheckoutResult),
    /// Nothing was checked out.
    Cancelled { message: String },
}

impl FlowOutcome {
    pub fn message(&self) -> &str {
        match self {
            FlowOutcome::Confirmed(result) => result.message(),
            FlowOutcome::Cancelled { message } => message,
        }
    }

    /// Whether the front end should report failure. Cancelling is not one.
    pub fn is_failure(&self) -> bool {
        matches!(self, FlowOutcome::Confirmed(result) if !result.success())
    }
}

/// One checkout attempt.
#[derive(Debug)]
pub struct CheckoutFlow<'a, E> {
    ops: &'a Operations<E>,
    state: FlowState,
}

impl<'a, E: GitExecutor> CheckoutFlow<'a, E> {
    pub fn new(ops: &'a Operations<E>) -> Self {
        Self {
            ops,
            state: FlowState::ChoosingKind,
        }
    }

    /// Check out `target` without any selection step.
    pub fn direct(ops: &'a Operations<E>, target: &str) -> CheckoutResult {
        ops.checkout(target)
    }

    pub fn state(&self) -> &FlowState {
        &self.state
    }

    /// Feed one event.
    pub fn handle(&mut self, event: FlowEvent) -> FlowReply {
        if self.state.is_terminal() {
            return FlowReply::Rejected(MSG_FINISHED.to_string());
        }

        match (self.state.clone(), event) {
            (_, FlowEvent::Interrupt | FlowEvent::Quit) => self.cancel(),
            (FlowState::ChoosingTarget(selection), event) => {
                self.on_choosing_target(selection, event)
            }
            (_, event) => self.on_choosing_kind(event),
        }
    }

    fn on_choosing_kind(&mut self, event: FlowEvent) -> FlowReply {
        let FlowEvent::ChooseKind(kind) = event else {
            return FlowReply::Rejected(MSG_INVALID_CHOICE.to_string());
        };

        let candidates = self.ops.list_targets(kind);
        if candidates.is_empty() {
            return FlowReply::Rejected(format!("No {} found", kind.plural()));
        }

        self.state = FlowState::ChoosingTarget(CheckoutSelection {
            kind,
            candidates: candidates.clone(),
            chosen_index: None,
        });
        FlowReply::Candidates { kind, candidates }
    }

    fn on_choosing_target(&mut self, mut selection: CheckoutSelection, event: FlowEvent) -> FlowReply {
        let index = match event {
            FlowEvent::SelectIndex(i) => usize::try_from(i)
                .ok()
                .filter(|&i| i < selection.candidates.len()),
            FlowEvent::SelectName(name) => selection.candidates.iter().position(|c| *c == name),
            _ => return FlowReply::Rejected(MSG_INVALID_INPUT.to_string()),
        };

        let Some(index) = index else {
            return FlowReply::Rejected(MSG_INVALID_SELECTION.to_string());
        };

        selection.chosen_index = Some(index);
        let target = &selection.candidates[index];
        tracing::debug!(kind = %selection.kind, target = %target, "checkout target confirmed");

        let result = self.ops.checkout(target);
        self.state = FlowState::Confirmed {
            selection,
            result: result.clone(),
        };
        FlowReply::Finished(FlowOutcome::Confirmed(result))
    }

    fn cancel(&mut self) -> FlowReply {
        self.state = FlowState::Cancelled;
        FlowReply::Finished(FlowOutcome::Cancelled {
            message: MSG_CANCELLED.to_string(),
        })
    }
}
