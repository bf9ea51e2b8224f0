//! Workout summaries from raw sensor packages.
//!
//! A sensor package is a workout type code plus a flat list of numbers. The
//! [`package`] module turns it into a [`Workout`], which knows how to compute
//! distance, mean speed and spent calories for its kind of exercise and to
//! freeze them into a [`WorkoutSummary`]. The [`report`] module drives that
//! over a list of packages and writes one line per workout.

use thiserror::Error;

pub mod config;
pub mod constants;
pub mod observability;
pub mod package;
pub mod report;
pub mod summary;
pub mod workout;

pub use package::{SensorPackage, WorkoutType, read_package};
pub use summary::WorkoutSummary;
pub use workout::{Running, SportsWalking, Swimming, Workout};

#[derive(Debug, Error)]
pub enum WorkoutError {
    #[error("unknown workout type: {0}")]
    UnknownWorkoutType(String),
    #[error("{workout_type} expects {expected} data fields, got {actual}")]
    ArgumentCount {
        workout_type: WorkoutType,
        expected: usize,
        actual: usize,
    },
    #[error("{field} must be a non-negative whole number, got {value}")]
    InvalidField { field: &'static str, value: f64 },
    #[error("{field} must be greater than zero, got {value}")]
    NonPositive { field: &'static str, value: f64 },
    #[error("configuration error: {0}")]
    Config(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

impl WorkoutError {
    /// Short stable label used as a metrics dimension.
    pub fn reason(&self) -> &'static str {
        match self {
            WorkoutError::UnknownWorkoutType(_) => "unknown_workout_type",
            WorkoutError::ArgumentCount { .. } => "argument_count",
            WorkoutError::InvalidField { .. } => "invalid_field",
            WorkoutError::NonPositive { .. } => "non_positive",
            WorkoutError::Config(_) => "config",
            WorkoutError::Io(_) => "io",
            WorkoutError::Json(_) => "json",
        }
    }
}
