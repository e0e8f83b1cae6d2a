//! The wizard's state tree: getters read it, mutations write it.

mod getters;
mod mutations;

use thiserror::Error;

use crate::models::EntityType;

/// Errors raised by mutations that would break a state invariant.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StateError {
    #[error("step {step} is outside 1..={max_step}")]
    StepOutOfRange { step: i32, max_step: i32 },

    #[error("unknown entity type '{0}'")]
    UnknownEntityType(String),

    #[error("entity type is already {current} and cannot change to {requested}")]
    EntityTypeLocked {
        current: EntityType,
        requested: EntityType,
    },
}
