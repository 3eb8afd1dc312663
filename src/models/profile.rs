/// User gender as collected by the profile prompts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl Gender {
    pub const ALL: [Gender; 3] = [Gender::Male, Gender::Female, Gender::Other];

    pub fn label(&self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
            Gender::Other => "Other",
        }
    }
}

/// Activity level, each label bound to a fixed TDEE multiplier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivityLevel {
    Sedentary,
    LightlyActive,
    ModeratelyActive,
    VeryActive,
}

impl ActivityLevel {
    pub const ALL: [ActivityLevel; 4] = [
        ActivityLevel::Sedentary,
        ActivityLevel::LightlyActive,
        ActivityLevel::ModeratelyActive,
        ActivityLevel::VeryActive,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "Sedentary",
            ActivityLevel::LightlyActive => "Lightly Active",
            ActivityLevel::ModeratelyActive => "Moderately Active",
            ActivityLevel::VeryActive => "Very Active",
        }
    }

    pub fn multiplier(&self) -> f64 {
        match self {
            ActivityLevel::Sedentary => 1.2,
            ActivityLevel::LightlyActive => 1.375,
            ActivityLevel::ModeratelyActive => 1.55,
            ActivityLevel::VeryActive => 1.725,
        }
    }

    /// Parse a display label back to a level, case-insensitively and by
    /// containment so decorated labels still resolve.
    pub fn from_label(label: &str) -> Option<Self> {
        let lower = label.to_lowercase();
        Self::ALL
            .into_iter()
            .find(|level| lower.contains(&level.label().to_lowercase()))
    }
}

/// Fitness goal, each shifting the calorie target by a fixed amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FitnessGoal {
    LoseWeight,
    MaintainWeight,
    GainWeight,
}

impl FitnessGoal {
    pub const ALL: [FitnessGoal; 3] = [
        FitnessGoal::LoseWeight,
        FitnessGoal::MaintainWeight,
        FitnessGoal::GainWeight,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            FitnessGoal::LoseWeight => "Lose Weight 🔽",
            FitnessGoal::MaintainWeight => "Maintain Weight ⚖️",
            FitnessGoal::GainWeight => "Gain Weight 🔼",
        }
    }

    /// Matches by case-insensitive containment, so both bare goal names
    /// and decorated labels ("Lose Weight 🔽") resolve.
    pub fn from_label(label: &str) -> Option<Self> {
        let lower = label.to_lowercase();
        if lower.contains("lose weight") {
            Some(FitnessGoal::LoseWeight)
        } else if lower.contains("gain weight") {
            Some(FitnessGoal::GainWeight)
        } else if lower.contains("maintain weight") {
            Some(FitnessGoal::MaintainWeight)
        } else {
            None
        }
    }
}

/// Validated biometrics and preferences collected from the user.
#[derive(Debug, Clone)]
pub struct UserProfile {
    /// Body weight in kilograms (> 0).
    pub weight_kg: f64,

    /// Height in meters (> 0).
    pub height_m: f64,

    /// Age in whole years.
    pub age_years: u32,

    pub gender: Gender,
    pub activity: ActivityLevel,
    pub goal: FitnessGoal,

    /// Vegetarian preference, consumed by the advisory service only.
    pub vegetarian: bool,
}
