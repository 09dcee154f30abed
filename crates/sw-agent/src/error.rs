use thiserror::Error;

/// Precondition violations detected while building a [`crate::Population`].
#[derive(Debug, Error)]
pub enum PopulationError {
    #[error("agent count must be at least 1")]
    NoAgents,

    #[error("target set is empty; at least one target point is required")]
    EmptyTargets,

    #[error("{what} {index} has a non-finite coordinate")]
    NonFinite {
        what:  &'static str,
        index: usize,
    },

    #[error("{what} length {got} does not match agent count {expected}")]
    AgentCountMismatch {
        expected: usize,
        got:      usize,
        what:     &'static str,
    },
}

pub type PopulationResult<T> = Result<T, PopulationError>;
