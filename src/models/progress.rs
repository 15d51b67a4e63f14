use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Position of one exercise inside a plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExerciseRef {
    pub workout_index: usize,
    pub exercise_index: usize,
}

/// Checkmarks and notes recorded against a stored plan.
///
/// Lives beside the plan in the store; the plan itself is never modified.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressLog {
    pub completed: BTreeSet<ExerciseRef>,
    pub notes: BTreeMap<usize, String>,
}

impl ProgressLog {
    pub fn set_exercise(&mut self, exercise: ExerciseRef, checked: bool) {
        if checked {
            self.completed.insert(exercise);
        } else {
            self.completed.remove(&exercise);
        }
    }

    pub fn set_note(&mut self, workout_index: usize, note: String) {
        if note.trim().is_empty() {
            self.notes.remove(&workout_index);
        } else {
            self.notes.insert(workout_index, note);
        }
    }

    pub fn is_completed(&self, workout_index: usize, exercise_index: usize) -> bool {
        self.completed.contains(&ExerciseRef {
            workout_index,
            exercise_index,
        })
    }

    pub fn clear(&mut self) {
        self.completed.clear();
        self.notes.clear();
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DayProgress {
    pub day: String,
    pub completed: usize,
    pub total: usize,
    pub done: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressSummary {
    pub total_exercises: usize,
    pub completed_exercises: usize,
    pub percent: u32,
    pub days: Vec<DayProgress>,
}
