//! Error types for the GymTrack engine

use thiserror::Error;

/// Input rejection surfaced to the generation caller.
///
/// Generation never proceeds past an invalid biometric or journal input.
#[derive(Error, Debug)]
pub enum GenerationError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Why a delegation attempt produced no usable result.
///
/// Every variant triggers the same local fallback. A body that parses but
/// violates the output contract is a `SchemaMismatch`, never a partial
/// result — callers must not repair partial structures.
#[derive(Error, Debug)]
pub enum DelegationError {
    #[error("No API credential supplied")]
    MissingCredential,

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Generation service returned status {0}")]
    Status(u16),

    #[error("Response body could not be parsed: {0}")]
    UnparsableBody(String),

    #[error("Response did not satisfy the output contract: {0}")]
    SchemaMismatch(String),
}

/// External persistence collaborator failure.
///
/// Recoverable: the generated artifact stays in memory, so the save step
/// alone can be retried.
#[derive(Error, Debug)]
pub enum PersistenceError {
    #[error("Persistence backend error: {0}")]
    Backend(String),

    #[error("Record not found: {0}")]
    NotFound(String),
}
