//! Two-step post deletion as an explicit state machine.
//!
//! A first click arms a row, a second click on the same row opens the
//! confirmation modal, and only typing [`CONFIRM_PHRASE`] lets the
//! destructive call start.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Literal the admin must type to confirm a deletion.
pub const CONFIRM_PHRASE: &str = "delete blogpost";

/// Case-insensitive, whitespace-trimmed comparison against [`CONFIRM_PHRASE`].
pub fn phrase_matches(input: &str) -> bool {
    input.trim().to_lowercase() == CONFIRM_PHRASE
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum DeleteFlow {
    #[default]
    Idle,
    Armed {
        post_id: Uuid,
    },
    ModalOpen {
        post_id: Uuid,
        title: String,
        error: Option<String>,
    },
    Deleting {
        post_id: Uuid,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FlowError {
    #[error("a deletion is already awaiting confirmation")]
    ModalOpen,

    #[error("a deletion is in progress")]
    Busy,

    #[error("no deletion is awaiting confirmation")]
    NothingToConfirm,

    #[error("type \"{CONFIRM_PHRASE}\" to confirm")]
    PhraseMismatch,

    #[error("no deletion is in progress")]
    NotDeleting,
}

impl DeleteFlow {
    /// Delete button pressed on a row.
    pub fn click(&mut self, post_id: Uuid, title: &str) -> Result<(), FlowError> {
        *self = match self {
            Self::Idle => Self::Armed { post_id },
            Self::Armed { post_id: armed } if *armed == post_id => Self::ModalOpen {
                post_id,
                title: title.to_string(),
                error: None,
            },
            Self::Armed { .. } => Self::Armed { post_id },
            Self::ModalOpen { .. } => return Err(FlowError::ModalOpen),
            Self::Deleting { .. } => return Err(FlowError::Busy),
        };
        Ok(())
    }

    /// Modal closed, or the armed row abandoned.
    pub fn cancel(&mut self) -> Result<(), FlowError> {
        if matches!(self, Self::Deleting { .. }) {
            return Err(FlowError::Busy);
        }
        *self = Self::Idle;
        Ok(())
    }

    /// Whether the modal's confirm control would be enabled for `input`.
    pub fn can_confirm(&self, input: &str) -> bool {
        matches!(self, Self::ModalOpen { .. }) && phrase_matches(input)
    }

    /// Confirm control pressed. On success returns the post to delete and
    /// moves to `Deleting`; on failure the state is left as it was.
    pub fn confirm(&mut self, input: &str) -> Result<Uuid, FlowError> {
        let post_id = match self {
            Self::ModalOpen { post_id, .. } => *post_id,
            Self::Deleting { .. } => return Err(FlowError::Busy),
            _ => return Err(FlowError::NothingToConfirm),
        };
        if !phrase_matches(input) {
            return Err(FlowError::PhraseMismatch);
        }
        *self = Self::Deleting { post_id };
        Ok(post_id)
    }

    /// Record the outcome of the delete call. A failure reopens the modal
    /// with the error so the admin can retry or cancel.
    pub fn finish(&mut self, title: &str, outcome: Result<(), String>) -> Result<(), FlowError> {
        let Self::Deleting { post_id } = *self else {
            return Err(FlowError::NotDeleting);
        };
        *self = match outcome {
            Ok(()) => Self::Idle,
            Err(message) => Self::ModalOpen {
                post_id,
                title: title.to_string(),
                error: Some(message),
            },
        };
        Ok(())
    }

    pub fn is_armed(&self, id: Uuid) -> bool {
        matches!(self, Self::Armed { post_id } if *post_id == id)
    }
}
