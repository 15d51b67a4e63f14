use crate::models::answers::Equipment;

/// Movement-pattern keys used to look up exercise lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Movement {
    Push,
    Pull,
    Legs,
    Upper,
    Lower,
    FullBody,
    Cardio,
}

/// Exercise lists for one equipment setup. Only `full_body` is mandatory.
#[derive(Debug)]
pub struct TemplateSet {
    pub name: &'static str,
    pub push: Option<&'static [&'static str]>,
    pub pull: Option<&'static [&'static str]>,
    pub legs: Option<&'static [&'static str]>,
    pub upper: Option<&'static [&'static str]>,
    pub lower: Option<&'static [&'static str]>,
    pub full_body: &'static [&'static str],
    pub cardio: Option<&'static [&'static str]>,
}

impl TemplateSet {
    pub fn get(&self, movement: Movement) -> Option<&'static [&'static str]> {
        match movement {
            Movement::Push => self.push,
            Movement::Pull => self.pull,
            Movement::Legs => self.legs,
            Movement::Upper => self.upper,
            Movement::Lower => self.lower,
            Movement::FullBody => Some(self.full_body),
            Movement::Cardio => self.cardio,
        }
    }

    /// Lookup that falls back to the full-body list when the key is absent.
    pub fn get_or_full_body(&self, movement: Movement) -> &'static [&'static str] {
        self.get(movement).unwrap_or(self.full_body)
    }
}

pub fn for_equipment(equipment: Equipment) -> &'static TemplateSet {
    match equipment {
        Equipment::Gym => &GYM,
        Equipment::HomeDumbbells => &HOME_DUMBBELLS,
        Equipment::Bodyweight => &BODYWEIGHT,
    }
}

pub static GYM: TemplateSet = TemplateSet {
    name: "gym",
    push: Some(&[
        "Barbell bench press 4x8",
        "Incline DB press 3x10",
        "Overhead press 3x8",
        "Cable fly 3x12",
        "Triceps pushdown 3x12",
    ]),
    pull: Some(&[
        "Deadlift 3x5",
        "Pull-ups or Lat pulldown 4x8",
        "Barbell row 3x8",
        "Face pull 3x12",
        "Barbell curl 3x10",
    ]),
    legs: Some(&[
        "Back squat 4x8",
        "Romanian deadlift 3x10",
        "Leg press 3x12",
        "Lunges 3x10 each leg",
        "Standing calf raises 3x15",
    ]),
    upper: Some(&[
        "Bench press 4x8",
        "Bent-over row 4x8",
        "Overhead press 3x8",
        "Lat pulldown 3x10",
        "DB curls 3x10",
    ]),
    lower: Some(&[
        "Front squat 4x8",
        "Leg curl 3x12",
        "Leg extension 3x12",
        "Hip thrust 3x10",
        "Seated calf raise 3x15",
    ]),
    full_body: &[
        "Goblet squat 3x12",
        "Push-ups 3x10",
        "DB row 3x12",
        "DB shoulder press 3x10",
        "Plank 3x30s",
    ],
    cardio: Some(&[
        "Treadmill incline walk 20–30 min",
        "Bike or rower 10–15 min",
        "Light stretching 5–10 min",
    ]),
};

pub static HOME_DUMBBELLS: TemplateSet = TemplateSet {
    name: "home_dumbbells",
    push: None,
    pull: None,
    legs: None,
    upper: Some(&[
        "DB floor press 3x12",
        "One-arm DB row 3x12",
        "DB shoulder press 3x10",
        "DB curls 3x12",
        "DB triceps extension 3x12",
    ]),
    lower: Some(&[
        "Goblet squat 4x10",
        "DB lunge 3x10 each leg",
        "DB Romanian deadlift 3x12",
        "Glute bridge 3x15",
    ]),
    full_body: &[
        "Goblet squat 3x12",
        "DB bench or floor press 3x10",
        "One-arm DB row 3x12 each side",
        "DB shoulder press 3x10",
        "DB Romanian deadlift 3x12",
    ],
    cardio: Some(&[
        "Fast walking or light jog 20–30 min",
        "Jump rope 5–10 min",
        "Stretching 5–10 min",
    ]),
};

pub static BODYWEIGHT: TemplateSet = TemplateSet {
    name: "bodyweight",
    push: None,
    pull: None,
    legs: None,
    upper: Some(&[
        "Push-ups 4x8–12",
        "Pike push-ups 3x8",
        "Inverted row 3x8–10",
        "Diamond push-ups 2x10",
    ]),
    lower: Some(&[
        "Squats 4x15",
        "Reverse lunges 3x10 each leg",
        "Single-leg Romanian deadlift 3x10 each leg",
        "Wall sit 3x30s",
    ]),
    full_body: &[
        "Bodyweight squat 3x15",
        "Push-ups 3x10",
        "Inverted row or table row 3x8",
        "Glute bridge 3x15",
        "Plank 3x30s",
    ],
    cardio: Some(&[
        "Jumping jacks 3x30s",
        "High knees 3x30s",
        "Fast walk or light jog 15–20 min",
    ]),
};
