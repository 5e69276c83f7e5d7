use svsim::SimError;

#[derive(Debug, thiserror::Error)]
pub enum VqeError {
    #[error("ansatz expects {expected} parameters, got {got}")]
    ParameterCount { expected: usize, got: usize },
    #[error(transparent)]
    Sim(#[from] SimError),
    #[error("optimizer failed: {0}")]
    Solver(argmin::core::Error),
    #[error("optimizer returned no result")]
    MissingResult,
}

impl From<argmin::core::Error> for VqeError {
    fn from(err: argmin::core::Error) -> Self {
        VqeError::Solver(err)
    }
}
