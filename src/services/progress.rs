use thiserror::Error;

use crate::models::plan::Plan;
use crate::models::progress::{DayProgress, ExerciseRef, ProgressLog, ProgressSummary};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ProgressError {
    #[error("plan has no workout at index {0}")]
    UnknownWorkout(usize),
    #[error("workout {workout_index} has no exercise at index {exercise_index}")]
    UnknownExercise {
        workout_index: usize,
        exercise_index: usize,
    },
}

pub fn check_workout(plan: &Plan, workout_index: usize) -> Result<(), ProgressError> {
    match plan.workout(workout_index) {
        Some(_) => Ok(()),
        None => Err(ProgressError::UnknownWorkout(workout_index)),
    }
}

pub fn check_exercise(plan: &Plan, exercise: ExerciseRef) -> Result<(), ProgressError> {
    let workout = plan
        .workout(exercise.workout_index)
        .ok_or(ProgressError::UnknownWorkout(exercise.workout_index))?;

    if exercise.exercise_index >= workout.exercises.len() {
        return Err(ProgressError::UnknownExercise {
            workout_index: exercise.workout_index,
            exercise_index: exercise.exercise_index,
        });
    }
    Ok(())
}

/// Completion counts for the progress bar and the per-day "done" badges.
pub fn summarize(plan: &Plan, log: &ProgressLog) -> ProgressSummary {
    let days: Vec<DayProgress> = plan
        .workouts
        .iter()
        .enumerate()
        .map(|(workout_index, workout)| {
            let total = workout.exercises.len();
            let completed = (0..total)
                .filter(|&exercise_index| log.is_completed(workout_index, exercise_index))
                .count();
            DayProgress {
                day: workout.day.clone(),
                completed,
                total,
                done: total > 0 && completed == total,
            }
        })
        .collect();

    let total_exercises = plan.total_exercises();
    let completed_exercises = days.iter().map(|d| d.completed).sum();

    ProgressSummary {
        total_exercises,
        completed_exercises,
        percent: percent(completed_exercises, total_exercises),
        days,
    }
}

fn percent(done: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    (done as f64 / total as f64 * 100.0).round() as u32
}
