use thiserror::Error;

/// Failures at the seams around a store. Store actions themselves never fail.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("store `{id}` is already registered with a different type")]
    TypeMismatch { id: &'static str },

    #[error("no store registered under `{id}`")]
    NotRegistered { id: &'static str },

    #[error("snapshot of store `{found}` cannot be applied to store `{expected}`")]
    SnapshotMismatch { expected: &'static str, found: String },
}
