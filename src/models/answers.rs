use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Goal {
    MuscleGain,
    FatLoss,
    #[serde(other)]
    StayActive,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Equipment {
    Gym,
    HomeDumbbells,
    // Unknown equipment trains with nothing but bodyweight.
    #[serde(other)]
    Bodyweight,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeOfDay {
    Morning,
    Evening,
    #[serde(other)]
    Flexible,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Experience {
    Beginner,
    Advanced,
    #[serde(other)]
    Intermediate,
}

/// Questionnaire answers as submitted by the start form.
///
/// Missing or `null` fields take the form's own defaults. `time_of_day`,
/// `experience` and `want_nutrition` are carried for the client but never
/// read by the plan builder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "AnswersPayload")]
pub struct Answers {
    pub goal: Goal,
    pub days_per_week: i64,
    pub equipment: Equipment,
    pub time_of_day: TimeOfDay,
    pub experience: Experience,
    pub want_nutrition: bool,
}

impl Default for Answers {
    fn default() -> Self {
        Self {
            goal: Goal::MuscleGain,
            days_per_week: 4,
            equipment: Equipment::Gym,
            time_of_day: TimeOfDay::Flexible,
            experience: Experience::Intermediate,
            want_nutrition: false,
        }
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct AnswersPayload {
    goal: Option<Goal>,
    days_per_week: Option<i64>,
    equipment: Option<Equipment>,
    time_of_day: Option<TimeOfDay>,
    experience: Option<Experience>,
    want_nutrition: Option<bool>,
}

impl From<AnswersPayload> for Answers {
    fn from(payload: AnswersPayload) -> Self {
        let defaults = Answers::default();
        Self {
            goal: payload.goal.unwrap_or(defaults.goal),
            days_per_week: payload.days_per_week.unwrap_or(defaults.days_per_week),
            equipment: payload.equipment.unwrap_or(defaults.equipment),
            time_of_day: payload.time_of_day.unwrap_or(defaults.time_of_day),
            experience: payload.experience.unwrap_or(defaults.experience),
            want_nutrition: payload.want_nutrition.unwrap_or(defaults.want_nutrition),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_answers_deserialize_from_form_payload() {
        let answers: Answers = serde_json::from_str(
            r#"{
                "goal": "fat_loss",
                "daysPerWeek": 3,
                "equipment": "home_dumbbells",
                "timeOfDay": "morning",
                "experience": "beginner",
                "wantNutrition": true
            }"#,
        )
        .unwrap();

        assert_eq!(answers.goal, Goal::FatLoss);
        assert_eq!(answers.days_per_week, 3);
        assert_eq!(answers.equipment, Equipment::HomeDumbbells);
        assert_eq!(answers.time_of_day, TimeOfDay::Morning);
        assert_eq!(answers.experience, Experience::Beginner);
        assert!(answers.want_nutrition);
    }

    #[test]
    fn test_missing_fields_take_form_defaults() {
        let answers: Answers = serde_json::from_str("{}").unwrap();
        assert_eq!(answers, Answers::default());

        let answers: Answers = serde_json::from_str(r#"{"daysPerWeek": 2}"#).unwrap();
        assert_eq!(answers.goal, Goal::MuscleGain);
        assert_eq!(answers.days_per_week, 2);
        assert_eq!(answers.equipment, Equipment::Gym);
    }

    #[test]
    fn test_null_fields_take_form_defaults() {
        let answers: Answers = serde_json::from_str(
            r#"{"goal": null, "daysPerWeek": null, "equipment": "bodyweight", "wantNutrition": null}"#,
        )
        .unwrap();

        assert_eq!(answers.goal, Goal::MuscleGain);
        assert_eq!(answers.days_per_week, 4);
        assert_eq!(answers.equipment, Equipment::Bodyweight);
        assert!(!answers.want_nutrition);
    }

    #[test]
    fn test_extra_form_fields_are_ignored() {
        let answers: Answers = serde_json::from_str(
            r#"{"goal": "stay_active", "jobActivity": "mixed", "focusAreas": ["core"]}"#,
        )
        .unwrap();

        assert_eq!(answers.goal, Goal::StayActive);
        assert_eq!(answers.days_per_week, 4);
    }

    #[test]
    fn test_unknown_values_fall_back() {
        let answers: Answers = serde_json::from_str(
            r#"{"goal": "yoga", "equipment": "kettlebells", "timeOfDay": "noon", "experience": "pro"}"#,
        )
        .unwrap();

        assert_eq!(answers.goal, Goal::StayActive);
        assert_eq!(answers.equipment, Equipment::Bodyweight);
        assert_eq!(answers.time_of_day, TimeOfDay::Flexible);
        assert_eq!(answers.experience, Experience::Intermediate);
    }

    #[test]
    fn test_enums_serialize_snake_case() {
        assert_eq!(
            serde_json::to_string(&Equipment::HomeDumbbells).unwrap(),
            "\"home_dumbbells\""
        );
        assert_eq!(
            serde_json::to_string(&Goal::MuscleGain).unwrap(),
            "\"muscle_gain\""
        );
    }
}
