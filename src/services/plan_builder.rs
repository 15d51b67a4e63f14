use crate::models::answers::{Answers, Goal};
use crate::models::plan::{Plan, WorkoutDay};
use crate::services::templates::{self, Movement, TemplateSet};

pub const MIN_DAYS: usize = 2;
pub const MAX_DAYS: usize = 5;

const WEEK_DAYS: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

/// Muscle-gain split days. The declaration order is the canonical
/// hypertrophy rotation used for 2 and 5 day weeks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Split {
    Push,
    Pull,
    Legs,
    Upper,
    Lower,
}

const HYPERTROPHY_ROTATION: [Split; 5] = [
    Split::Push,
    Split::Pull,
    Split::Legs,
    Split::Upper,
    Split::Lower,
];

impl Split {
    fn label(self) -> &'static str {
        match self {
            Split::Push => "Push",
            Split::Pull => "Pull",
            Split::Legs => "Legs",
            Split::Upper => "Upper",
            Split::Lower => "Lower",
        }
    }

    fn movement(self) -> Movement {
        match self {
            Split::Push => Movement::Push,
            Split::Pull => Movement::Pull,
            Split::Legs => Movement::Legs,
            Split::Upper => Movement::Upper,
            Split::Lower => Movement::Lower,
        }
    }
}

pub fn clamp_days(days: i64) -> usize {
    days.clamp(MIN_DAYS as i64, MAX_DAYS as i64) as usize
}

/// Build the weekly plan for a set of questionnaire answers.
///
/// Pure: the same answers always produce the same plan, and only goal,
/// day count and equipment are read.
pub fn build_plan(answers: &Answers) -> Plan {
    let days_per_week = clamp_days(answers.days_per_week);
    let templates = templates::for_equipment(answers.equipment);

    let workouts = match answers.goal {
        Goal::MuscleGain => build_muscle_gain(days_per_week, templates),
        Goal::FatLoss => build_fat_loss(days_per_week, templates),
        Goal::StayActive => build_stay_active(days_per_week, templates),
    };

    Plan {
        goal: answers.goal,
        days_per_week,
        equipment: answers.equipment,
        workouts,
    }
}

fn workout_day(index: usize, focus: String, exercises: &[&str]) -> WorkoutDay {
    WorkoutDay {
        day: WEEK_DAYS[index].to_string(),
        focus,
        exercises: exercises.iter().map(|e| e.to_string()).collect(),
    }
}

fn build_muscle_gain(days: usize, templates: &TemplateSet) -> Vec<WorkoutDay> {
    match days {
        3 => [Split::Push, Split::Pull, Split::Legs]
            .into_iter()
            .enumerate()
            .map(|(i, split)| {
                workout_day(
                    i,
                    format!("{} — muscle gain", split.label()),
                    templates.get_or_full_body(split.movement()),
                )
            })
            .collect(),
        4 => [Split::Upper, Split::Lower, Split::Upper, Split::Lower]
            .into_iter()
            .enumerate()
            .map(|(i, split)| {
                workout_day(
                    i,
                    format!("{} body — strength", split.label()),
                    templates.get_or_full_body(split.movement()),
                )
            })
            .collect(),
        _ => HYPERTROPHY_ROTATION
            .into_iter()
            .take(days)
            .enumerate()
            .map(|(i, split)| {
                workout_day(
                    i,
                    format!("{} — hypertrophy", split.label()),
                    templates.get_or_full_body(split.movement()),
                )
            })
            .collect(),
    }
}

fn build_fat_loss(days: usize, templates: &TemplateSet) -> Vec<WorkoutDay> {
    (0..days)
        .map(|i| match templates.get(Movement::Cardio) {
            // every second day leans on cardio
            Some(cardio) if i % 2 == 1 => {
                workout_day(i, "Cardio + light conditioning".to_string(), cardio)
            }
            _ => workout_day(
                i,
                "Full-body strength for fat loss".to_string(),
                templates.full_body,
            ),
        })
        .collect()
}

fn build_stay_active(days: usize, templates: &TemplateSet) -> Vec<WorkoutDay> {
    (0..days)
        .map(|i| match templates.get(Movement::Cardio) {
            Some(cardio) if i == days - 1 => {
                workout_day(i, "Light cardio + mobility".to_string(), cardio)
            }
            _ => workout_day(
                i,
                "Full-body routine — stay active".to_string(),
                templates.full_body,
            ),
        })
        .collect()
}
