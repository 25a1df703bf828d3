use crate::model::SolveStatus;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PlanError {
    #[error("invalid demand: {0}")]
    InvalidDemand(String),
    #[error("invalid labels: {0}")]
    InvalidLabels(String),
    #[error("solver unavailable: {0}")]
    SolverUnavailable(String),
    #[error("solver did not return in time")]
    SolverTimeout,
    #[error("solver returned a non-optimal status: {0}")]
    NonOptimal(SolveStatus),
    #[error("shift count for start day {day} is not a non-negative integer: {value}")]
    NonIntegerSolution { day: usize, value: f64 },
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
