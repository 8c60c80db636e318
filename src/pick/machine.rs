//! Per-commit pick state machine

use crate::error::{Error, Result};

/// Where a single commit is in its pick lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickState {
    /// Cherry-pick is being applied
    Picking,
    /// The pick left unmerged paths
    Conflicted,
    /// Waiting for the operator to resolve or abort
    AwaitingOperator,
    /// Changes are in the working tree (terminal)
    Applied,
    /// Pick failed without conflicts and was passed over (terminal)
    Failed,
    /// Operator cancelled the run (terminal)
    Aborted,
}

const VALID_TRANSITIONS: &[(PickState, &[PickState])] = &[
    (
        PickState::Picking,
        &[PickState::Applied, PickState::Conflicted, PickState::Failed],
    ),
    (PickState::Conflicted, &[PickState::AwaitingOperator]),
    (
        PickState::AwaitingOperator,
        &[
            PickState::AwaitingOperator, // still unmerged, re-prompt
            PickState::Applied,
            PickState::Aborted,
        ],
    ),
    // Applied, Failed and Aborted are terminal
];

impl PickState {
    /// Whether no further transition is possible
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Applied | Self::Failed | Self::Aborted)
    }

    /// Whether `self → to` is an allowed transition
    pub fn can_transition(self, to: Self) -> bool {
        VALID_TRANSITIONS
            .iter()
            .any(|(from, targets)| *from == self && targets.contains(&to))
    }

    /// Move to `to`, rejecting transitions the machine does not allow
    pub fn transition(&mut self, to: Self) -> Result<()> {
        if !self.can_transition(to) {
            return Err(Error::Internal(format!(
                "invalid pick transition: {self:?} -> {to:?}"
            )));
        }
        *self = to;
        Ok(())
    }
}

/// Operator's answer while a conflict is pending
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OperatorResponse {
    /// Conflicts are resolved (empty line or `continue`)
    Resolved,
    /// Cancel the whole run (`abort`)
    Abort,
    /// Anything else
    Unrecognized(String),
}

impl OperatorResponse {
    /// Interpret one line of operator input (case-insensitive)
    pub fn parse(input: &str) -> Self {
        let trimmed = input.trim();
        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("continue") {
            Self::Resolved
        } else if trimmed.eq_ignore_ascii_case("abort") {
            Self::Abort
        } else {
            Self::Unrecognized(trimmed.to_string())
        }
    }
}
