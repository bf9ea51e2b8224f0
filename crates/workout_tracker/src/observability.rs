use crate::{WorkoutError, WorkoutSummary};

pub fn record_summary(summary: &WorkoutSummary) {
    let workout_type = summary.workout_type.clone();
    metrics::counter!("workout_summaries_total", "workout_type" => workout_type.clone())
        .increment(1);
    metrics::histogram!("workout_calories_kcal", "workout_type" => workout_type)
        .record(summary.calories_kcal);
}

pub fn record_failure(err: &WorkoutError) {
    metrics::counter!("workout_failures_total", "reason" => err.reason()).increment(1);
}
