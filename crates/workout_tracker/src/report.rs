//! Runs a list of sensor packages through dispatch and writes one line each.

use std::io::Write;
use std::str::FromStr;

use crate::observability;
use crate::package::{SensorPackage, package_schema};
use crate::{WorkoutError, WorkoutSummary};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// `Activity type: ...` lines.
    #[default]
    Text,
    /// One JSON object per line.
    Json,
    /// Package file schema instead of a report.
    Schema,
}

impl FromStr for OutputFormat {
    type Err = WorkoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            "schema" => Ok(OutputFormat::Schema),
            other => Err(WorkoutError::Config(format!(
                "unsupported output format: {other}"
            ))),
        }
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct ReportOptions {
    pub format: OutputFormat,
    /// Stop at the first failing package instead of skipping it.
    pub fail_fast: bool,
}

#[derive(Debug, Default)]
pub struct ReportOutcome {
    pub written: usize,
    /// Failed packages by input position.
    pub failures: Vec<(usize, WorkoutError)>,
}

impl ReportOutcome {
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}

pub fn summarize_package(package: &SensorPackage) -> Result<WorkoutSummary, WorkoutError> {
    let workout = package.read()?;
    Ok(workout.summary())
}

/// Summaries for every package, in input order, without any output.
pub fn summarize(packages: &[SensorPackage]) -> Vec<Result<WorkoutSummary, WorkoutError>> {
    packages.iter().map(summarize_package).collect()
}

fn write_summary<W: Write>(
    out: &mut W,
    summary: &WorkoutSummary,
    format: OutputFormat,
) -> Result<(), WorkoutError> {
    match format {
        OutputFormat::Text => writeln!(out, "{}", summary.message())?,
        OutputFormat::Json | OutputFormat::Schema => {
            serde_json::to_writer(&mut *out, summary)?;
            writeln!(out)?;
        }
    }
    Ok(())
}

pub fn write_package_schema<W: Write>(out: &mut W) -> Result<(), WorkoutError> {
    serde_json::to_writer_pretty(&mut *out, &package_schema())?;
    writeln!(out)?;
    out.flush()?;
    Ok(())
}

/// Write one line per package. Packages that fail to dispatch are logged and
/// collected in the outcome; I/O errors on `out` abort the whole report.
pub fn write_report<W: Write>(
    packages: &[SensorPackage],
    options: ReportOptions,
    out: &mut W,
) -> Result<ReportOutcome, WorkoutError> {
    let mut outcome = ReportOutcome::default();
    if options.format == OutputFormat::Schema {
        write_package_schema(out)?;
        return Ok(outcome);
    }
    for (index, package) in packages.iter().enumerate() {
        match summarize_package(package) {
            Ok(summary) => {
                write_summary(out, &summary, options.format)?;
                observability::record_summary(&summary);
                outcome.written += 1;
            }
            Err(err) => {
                tracing::warn!(
                    index,
                    workout_type = %package.workout_type,
                    error = %err,
                    "skipping sensor package"
                );
                observability::record_failure(&err);
                outcome.failures.push((index, err));
                if options.fail_fast {
                    break;
                }
            }
        }
    }
    out.flush()?;
    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::package::demo_packages;

    #[test]
    fn demo_report_lines() {
        let mut out = Vec::new();
        let outcome = write_report(&demo_packages(), ReportOptions::default(), &mut out).unwrap();
        assert!(outcome.is_clean());
        assert_eq!(outcome.written, 3);
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(
            lines,
            vec![
                "Activity type: Swimming; Duration: 1.000 h.; Distance: 0.994 km; \
                 Avg. speed: 1.000 km/h; Calories burned: 336.000.",
                "Activity type: Running; Duration: 1.000 h.; Distance: 9.750 km; \
                 Avg. speed: 9.750 km/h; Calories burned: 797.805.",
                "Activity type: SportsWalking; Duration: 1.000 h.; Distance: 5.850 km; \
                 Avg. speed: 5.850 km/h; Calories burned: 349.252.",
            ]
        );
    }

    #[test]
    fn failing_entry_does_not_stop_the_rest() {
        let packages = vec![
            SensorPackage::new("RUN", [15000.0, 1.0, 75.0]),
            SensorPackage::new("BIKE", [1.0, 1.0, 1.0]),
            SensorPackage::new("WLK", [9000.0, 1.0, 75.0, 180.0]),
        ];
        let mut out = Vec::new();
        let outcome = write_report(&packages, ReportOptions::default(), &mut out).unwrap();
        assert_eq!(outcome.written, 2);
        assert_eq!(outcome.failures.len(), 1);
        assert_eq!(outcome.failures[0].0, 1);
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert!(lines[0].starts_with("Activity type: Running;"));
        assert!(lines[1].starts_with("Activity type: SportsWalking;"));
    }

    #[test]
    fn fail_fast_stops_at_first_error() {
        let packages = vec![
            SensorPackage::new("RUN", [15000.0]),
            SensorPackage::new("RUN", [15000.0, 1.0, 75.0]),
        ];
        let options = ReportOptions {
            fail_fast: true,
            ..ReportOptions::default()
        };
        let mut out = Vec::new();
        let outcome = write_report(&packages, options, &mut out).unwrap();
        assert_eq!(outcome.written, 0);
        assert_eq!(outcome.failures.len(), 1);
        assert!(out.is_empty());
    }

    #[test]
    fn json_format_writes_objects() {
        let options = ReportOptions {
            format: OutputFormat::Json,
            ..ReportOptions::default()
        };
        let mut out = Vec::new();
        write_report(&demo_packages()[1..2], options, &mut out).unwrap();
        let v: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(v.get("workout_type").and_then(|t| t.as_str()), Some("Running"));
        assert_eq!(v.get("distance_km").and_then(|d| d.as_f64()), Some(9.75));
    }

    #[test]
    fn schema_format_writes_package_schema_only() {
        let options = ReportOptions {
            format: OutputFormat::Schema,
            ..ReportOptions::default()
        };
        let mut out = Vec::new();
        let outcome = write_report(&demo_packages(), options, &mut out).unwrap();
        assert_eq!(outcome.written, 0);
        assert!(outcome.is_clean());
        let v: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(v.get("type").and_then(|t| t.as_str()), Some("array"));
        assert!(v.to_string().contains("workout_type"));
    }

    #[test]
    fn summarize_keeps_order_and_errors() {
        let packages = vec![
            SensorPackage::new("WLK", [9000.0, 1.0, 75.0, 0.0]),
            SensorPackage::new("SWM", [720.0, 1.0, 80.0, 25.0, 40.0]),
        ];
        let results = summarize(&packages);
        assert!(results[0].is_err());
        assert_eq!(results[1].as_ref().unwrap().workout_type, "Swimming");
    }

    #[test]
    fn parses_output_format() {
        assert_eq!("TEXT".parse::<OutputFormat>().unwrap(), OutputFormat::Text);
        assert_eq!("json".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert_eq!("Schema".parse::<OutputFormat>().unwrap(), OutputFormat::Schema);
        assert!("yaml".parse::<OutputFormat>().is_err());
    }
}
