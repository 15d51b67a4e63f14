use serde::Serialize;

use crate::models::answers::{Equipment, Goal};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WorkoutDay {
    pub day: String,
    pub focus: String,
    pub exercises: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Plan {
    pub goal: Goal,
    pub days_per_week: usize,
    pub equipment: Equipment,
    pub workouts: Vec<WorkoutDay>,
}

impl Plan {
    pub fn workout(&self, index: usize) -> Option<&WorkoutDay> {
        self.workouts.get(index)
    }

    pub fn total_exercises(&self) -> usize {
        self.workouts.iter().map(|w| w.exercises.len()).sum()
    }
}
