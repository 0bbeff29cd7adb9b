//! Patient profile types: the biometric fields that travel into every
//! prompt, plus the identity fields the intake form collects but never
//! sends to the model.

use std::fmt;
use std::str::FromStr;

/// Upper bound for the form's age field.
pub const AGE_MAX: u8 = 120;

/// Activity level, as offered by the intake form.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ActivityLevel {
    #[default]
    Sedentary,
    LightlyActive,
    ModeratelyActive,
    VeryActive,
    ExtraActive,
}

impl ActivityLevel {
    /// All levels in the order the form lists them.
    pub const ALL: [ActivityLevel; 5] = [
        ActivityLevel::Sedentary,
        ActivityLevel::LightlyActive,
        ActivityLevel::ModeratelyActive,
        ActivityLevel::VeryActive,
        ActivityLevel::ExtraActive,
    ];

    /// Form label, e.g. `"Lightly active"`. This exact text goes into the prompt.
    pub fn as_str(&self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "Sedentary",
            ActivityLevel::LightlyActive => "Lightly active",
            ActivityLevel::ModeratelyActive => "Moderately active",
            ActivityLevel::VeryActive => "Very active",
            ActivityLevel::ExtraActive => "Extra active",
        }
    }
}

impl fmt::Display for ActivityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ActivityLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "sedentary" => Ok(Self::Sedentary),
            "lightly active" => Ok(Self::LightlyActive),
            "moderately active" => Ok(Self::ModeratelyActive),
            "very active" => Ok(Self::VeryActive),
            "extra active" => Ok(Self::ExtraActive),
            _ => Err(format!(
                "unknown activity level: {} (use Sedentary, Lightly active, Moderately active, Very active, or Extra active)",
                s
            )),
        }
    }
}

/// Gender option from the intake form. Collected for the record only; the
/// prompt template does not reference it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Gender {
    #[default]
    Male,
    Female,
    Other,
}

impl Gender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
            Gender::Other => "Other",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Gender {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "male" => Ok(Self::Male),
            "female" => Ok(Self::Female),
            "other" => Ok(Self::Other),
            _ => Err(format!("unknown gender: {} (use Male, Female, or Other)", s)),
        }
    }
}

/// Identity fields from the "Patient Information" section of the form.
///
/// Validated at the boundary, then carried alongside the profile. None of
/// these fields appear in the prompt.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PatientInfo {
    pub name: String,
    pub age: u8,
    pub gender: Gender,
}

impl PatientInfo {
    /// Builds patient info, rejecting an age over [`AGE_MAX`].
    pub fn new(name: String, age: u8, gender: Gender) -> Result<Self, String> {
        if age > AGE_MAX {
            return Err(format!("age must be between 0 and {}", AGE_MAX));
        }
        Ok(Self { name, age, gender })
    }
}

impl Default for PatientInfo {
    fn default() -> Self {
        Self {
            name: String::new(),
            age: 25,
            gender: Gender::Male,
        }
    }
}

/// Biometric and dietary fields attached to every prompt.
///
/// Field defaults match the form defaults; there is no validation beyond
/// the form's min/max bounds and nothing persists across submissions.
#[derive(Clone, Debug, PartialEq)]
pub struct Profile {
    /// Weight in kilograms (form: >= 0, step 0.1).
    pub weight_kg: f64,
    /// Height in centimeters (form: >= 0, step 0.1).
    pub height_cm: f64,
    pub activity: ActivityLevel,
    /// Free text, e.g. "None", "vegetarian, no nuts".
    pub restriction: String,
    /// Free text, e.g. "weight loss", "Maintenance".
    pub goal: String,
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            weight_kg: 70.0,
            height_cm: 170.0,
            activity: ActivityLevel::Sedentary,
            restriction: "None".to_string(),
            goal: "Maintenance".to_string(),
        }
    }
}
