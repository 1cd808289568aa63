#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PlanError {
    /// Field-level problems found before any calculation, all reported together.
    #[error("Validation failed")]
    Validation(Vec<String>),
    /// A precondition of one of the calculation stages did not hold.
    #[error("{0}")]
    Computation(String),
    #[error("unexpected failure: {0}")]
    Unexpected(String),
}

impl PlanError {
    pub(crate) fn computation(message: impl Into<String>) -> Self {
        PlanError::Computation(message.into())
    }

    /// Prefixes a computation message with the stage it came from.
    pub(crate) fn in_stage(self, stage: &str) -> Self {
        match self {
            PlanError::Computation(message) => {
                PlanError::Computation(format!("{}: {}", stage, message))
            }
            other => other,
        }
    }
}

pub type Result<T> = std::result::Result<T, PlanError>;
