//! Sensor packages and dispatch into [`Workout`] values.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::str::FromStr;

use crate::WorkoutError;
use crate::workout::{Running, SportsWalking, Swimming, Workout};

/// Workout type code sent by the sensor unit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WorkoutType {
    Swim,
    Run,
    Walk,
}

impl WorkoutType {
    /// Sensor code, as emitted by the device.
    pub fn code(self) -> &'static str {
        match self {
            WorkoutType::Swim => "SWM",
            WorkoutType::Run => "RUN",
            WorkoutType::Walk => "WLK",
        }
    }

    /// Number of positional data fields the sensor sends for this type.
    pub fn field_count(self) -> usize {
        match self {
            WorkoutType::Swim => 5,
            WorkoutType::Run => 3,
            WorkoutType::Walk => 4,
        }
    }
}

impl fmt::Display for WorkoutType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for WorkoutType {
    type Err = WorkoutError;

    /// Accepts sensor codes (`SWM`, `RUN`, `WLK`) and names (`Swim`, `Run`, `Walk`)
    /// in any letter case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "SWM" | "SWIM" => Ok(WorkoutType::Swim),
            "RUN" => Ok(WorkoutType::Run),
            "WLK" | "WALK" => Ok(WorkoutType::Walk),
            _ => Err(WorkoutError::UnknownWorkoutType(s.to_string())),
        }
    }
}

fn whole_number(field: &'static str, value: f64) -> Result<u32, WorkoutError> {
    if value.is_finite() && value >= 0.0 && value.fract() == 0.0 && value <= f64::from(u32::MAX) {
        Ok(value as u32)
    } else {
        Err(WorkoutError::InvalidField { field, value })
    }
}

/// Build a workout from a type code and its positional sensor fields.
///
/// Field order:
/// - Swim: action_count, duration_hours, weight_kg, pool_length_m, pool_laps
/// - Run: action_count, duration_hours, weight_kg
/// - Walk: action_count, duration_hours, weight_kg, height_cm
pub fn read_package(workout_type: &str, data: &[f64]) -> Result<Workout, WorkoutError> {
    let kind: WorkoutType = workout_type.parse()?;
    let expected = kind.field_count();
    if data.len() != expected {
        return Err(WorkoutError::ArgumentCount {
            workout_type: kind,
            expected,
            actual: data.len(),
        });
    }
    tracing::debug!(workout_type = %kind, fields = data.len(), "reading sensor package");

    let action_count = whole_number("action_count", data[0])?;
    let (duration_hours, weight_kg) = (data[1], data[2]);
    let workout = match kind {
        WorkoutType::Run => Running::new(action_count, duration_hours, weight_kg)?.into(),
        WorkoutType::Walk => {
            SportsWalking::new(action_count, duration_hours, weight_kg, data[3])?.into()
        }
        WorkoutType::Swim => Swimming::new(
            action_count,
            duration_hours,
            weight_kg,
            data[3],
            whole_number("pool_laps", data[4])?,
        )?
        .into(),
    };
    Ok(workout)
}

/// One `(type, data)` pair as received from a sensor unit.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, JsonSchema)]
pub struct SensorPackage {
    pub workout_type: String,
    pub data: Vec<f64>,
}

impl SensorPackage {
    pub fn new(workout_type: impl Into<String>, data: impl Into<Vec<f64>>) -> Self {
        Self {
            workout_type: workout_type.into(),
            data: data.into(),
        }
    }

    pub fn read(&self) -> Result<Workout, WorkoutError> {
        read_package(&self.workout_type, &self.data)
    }

    /// Parse a JSON array of packages.
    pub fn parse_list(json: &str) -> Result<Vec<SensorPackage>, WorkoutError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read a JSON array of packages from a file.
    pub fn load_list(path: &Path) -> Result<Vec<SensorPackage>, WorkoutError> {
        let json = std::fs::read_to_string(path)?;
        Self::parse_list(&json)
    }
}

/// JSON schema of a package file: an array of [`SensorPackage`] objects.
pub fn package_schema() -> schemars::Schema {
    schemars::schema_for!(Vec<SensorPackage>)
}

/// Sample packages used when no input file is configured.
pub fn demo_packages() -> Vec<SensorPackage> {
    vec![
        SensorPackage::new("SWM", [720.0, 1.0, 80.0, 25.0, 40.0]),
        SensorPackage::new("RUN", [15000.0, 1.0, 75.0]),
        SensorPackage::new("WLK", [9000.0, 1.0, 75.0, 180.0]),
    ]
}
