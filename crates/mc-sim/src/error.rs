use mc_core::CoreError;
use mc_grid::GridError;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SimError {
    #[error(transparent)]
    Config(#[from] CoreError),

    #[error("grid error: {0}")]
    Grid(#[from] GridError),
}

pub type SimResult<T> = Result<T, SimError>;
