//! Workout kinds and their distance, speed and calorie formulas.
//!
//! Each variant carries the readings its formulas need. Constructors reject a
//! non-positive duration (and height for walking), so every formula below is
//! total once a [`Workout`] exists.

use crate::WorkoutError;
use crate::constants::{LEN_STEP_M, M_IN_KM, MIN_IN_H, running, swimming, walking};
use crate::summary::WorkoutSummary;

fn ensure_positive(field: &'static str, value: f64) -> Result<f64, WorkoutError> {
    // NaN fails the comparison too
    if value > 0.0 {
        Ok(value)
    } else {
        Err(WorkoutError::NonPositive { field, value })
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Running {
    pub action_count: u32,
    pub duration_hours: f64,
    pub weight_kg: f64,
}

impl Running {
    pub fn new(
        action_count: u32,
        duration_hours: f64,
        weight_kg: f64,
    ) -> Result<Self, WorkoutError> {
        Ok(Self {
            action_count,
            duration_hours: ensure_positive("duration_hours", duration_hours)?,
            weight_kg,
        })
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct SportsWalking {
    pub action_count: u32,
    pub duration_hours: f64,
    pub weight_kg: f64,
    pub height_cm: f64,
}

impl SportsWalking {
    pub fn new(
        action_count: u32,
        duration_hours: f64,
        weight_kg: f64,
        height_cm: f64,
    ) -> Result<Self, WorkoutError> {
        Ok(Self {
            action_count,
            duration_hours: ensure_positive("duration_hours", duration_hours)?,
            weight_kg,
            height_cm: ensure_positive("height_cm", height_cm)?,
        })
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Swimming {
    pub action_count: u32,
    pub duration_hours: f64,
    pub weight_kg: f64,
    pub pool_length_m: f64,
    pub pool_laps: u32,
}

impl Swimming {
    pub fn new(
        action_count: u32,
        duration_hours: f64,
        weight_kg: f64,
        pool_length_m: f64,
        pool_laps: u32,
    ) -> Result<Self, WorkoutError> {
        Ok(Self {
            action_count,
            duration_hours: ensure_positive("duration_hours", duration_hours)?,
            weight_kg,
            pool_length_m,
            pool_laps,
        })
    }
}

/// A single completed workout.
#[derive(Clone, Debug, PartialEq)]
pub enum Workout {
    Running(Running),
    SportsWalking(SportsWalking),
    Swimming(Swimming),
}

impl Workout {
    /// Display label carried into the summary.
    pub fn label(&self) -> &'static str {
        match self {
            Workout::Running(_) => "Running",
            Workout::SportsWalking(_) => "SportsWalking",
            Workout::Swimming(_) => "Swimming",
        }
    }

    pub fn action_count(&self) -> u32 {
        match self {
            Workout::Running(w) => w.action_count,
            Workout::SportsWalking(w) => w.action_count,
            Workout::Swimming(w) => w.action_count,
        }
    }

    pub fn duration_hours(&self) -> f64 {
        match self {
            Workout::Running(w) => w.duration_hours,
            Workout::SportsWalking(w) => w.duration_hours,
            Workout::Swimming(w) => w.duration_hours,
        }
    }

    pub fn weight_kg(&self) -> f64 {
        match self {
            Workout::Running(w) => w.weight_kg,
            Workout::SportsWalking(w) => w.weight_kg,
            Workout::Swimming(w) => w.weight_kg,
        }
    }

    /// Length covered by one step or stroke, in meters.
    pub fn step_length_m(&self) -> f64 {
        match self {
            Workout::Running(_) | Workout::SportsWalking(_) => LEN_STEP_M,
            Workout::Swimming(_) => swimming::LEN_STROKE_M,
        }
    }

    pub fn distance_km(&self) -> f64 {
        f64::from(self.action_count()) * self.step_length_m() / M_IN_KM
    }

    pub fn mean_speed_kmh(&self) -> f64 {
        match self {
            Workout::Swimming(w) => {
                w.pool_length_m * f64::from(w.pool_laps) / M_IN_KM / w.duration_hours
            }
            _ => self.distance_km() / self.duration_hours(),
        }
    }

    pub fn spent_calories(&self) -> f64 {
        let speed = self.mean_speed_kmh();
        match self {
            Workout::Running(w) => {
                (running::CALORIES_MEAN_SPEED_MULTIPLIER * speed
                    + running::CALORIES_MEAN_SPEED_SHIFT)
                    * w.weight_kg
                    / M_IN_KM
                    * w.duration_hours
                    * MIN_IN_H
            }
            Workout::SportsWalking(w) => {
                let speed_ms = speed * walking::KMH_IN_MSEC;
                let height_m = w.height_cm / walking::CM_IN_M;
                (walking::CALORIES_WEIGHT_MULTIPLIER * w.weight_kg
                    + (speed_ms.powi(2) / height_m)
                        * walking::CALORIES_SPEED_HEIGHT_MULTIPLIER
                        * w.weight_kg)
                    * w.duration_hours
                    * MIN_IN_H
            }
            Workout::Swimming(w) => {
                (speed + swimming::CALORIES_MEAN_SPEED_SHIFT)
                    * swimming::CALORIES_WEIGHT_MULTIPLIER
                    * w.weight_kg
                    * w.duration_hours
            }
        }
    }

    pub fn summary(&self) -> WorkoutSummary {
        WorkoutSummary {
            workout_type: self.label().to_string(),
            duration_hours: self.duration_hours(),
            distance_km: self.distance_km(),
            mean_speed_kmh: self.mean_speed_kmh(),
            calories_kcal: self.spent_calories(),
        }
    }
}

impl From<Running> for Workout {
    fn from(w: Running) -> Self {
        Workout::Running(w)
    }
}

impl From<SportsWalking> for Workout {
    fn from(w: SportsWalking) -> Self {
        Workout::SportsWalking(w)
    }
}

impl From<Swimming> for Workout {
    fn from(w: Swimming) -> Self {
        Workout::Swimming(w)
    }
}
