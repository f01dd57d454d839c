use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error("Invalid input size: expected {expected} cards, got {actual}")]
    InvalidInputSize { expected: &'static str, actual: usize },
    #[error("Internal consistency error: {0}")]
    InternalConsistency(String),
    #[error("Expected {expected} hand evaluations (one per active player), got {actual}")]
    EvaluationCountMismatch { expected: usize, actual: usize },
    #[error("Invalid card: {0:?}")]
    InvalidCard(String),
}
