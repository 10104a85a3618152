//! Error types.

use thiserror::Error;

use crate::controller::Capability;
use crate::store::EntityId;

/// Errors from controller edits and order backfills.
///
/// Resolution itself cannot fail.
#[derive(Error, Debug)]
pub enum AclError {
    #[error("built-in {capability} grant at index {index} cannot be revoked")]
    BuiltIn { capability: Capability, index: usize },

    #[error("no {capability} grant at index {index} (have {len})")]
    NoSuchGrant {
        capability: Capability,
        index: usize,
        len: usize,
    },

    #[error("failed to list entities: {0}")]
    List(#[source] StoreError),

    #[error("failed to persist order for entity {id}: {source}")]
    Store {
        id: EntityId,
        #[source]
        source: StoreError,
    },
}

/// A failure reported by an [`EntityStore`](crate::store::EntityStore).
#[derive(Error, Debug)]
#[error("{message}")]
pub struct StoreError {
    message: String,
}

impl StoreError {
    pub fn new(message: impl Into<String>) -> Self {
        StoreError {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

pub type Result<T, E = AclError> = std::result::Result<T, E>;
