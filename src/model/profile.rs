use std::fmt::{Display, Formatter};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use strum_macros::EnumIter;

use super::lenient;

/// Opaque profile identifier. The backend may hand out numbers or strings;
/// either way the value is sent back exactly as received.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ProfileId {
    Number(i64),
    Text(String),
}

impl Display for ProfileId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ProfileId::Number(n) => write!(f, "{n}"),
            ProfileId::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for ProfileId {
    fn from(value: i64) -> Self {
        ProfileId::Number(value)
    }
}

impl From<&str> for ProfileId {
    fn from(value: &str) -> Self {
        ProfileId::Text(value.to_string())
    }
}

impl From<String> for ProfileId {
    fn from(value: String) -> Self {
        ProfileId::Text(value)
    }
}

/// One of the two exam attempts recorded on a profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, strum_macros::Display)]
pub enum Attempt {
    #[strum(to_string = "Ujian 1")]
    First,
    #[strum(to_string = "Ujian 2")]
    Second,
}

/// A scored section of the exam.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, strum_macros::Display)]
pub enum Section {
    Listening,
    Structure,
    Reading,
}

/// A participant record as stored by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub id: ProfileId,
    #[serde(rename = "nama", default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(rename = "nomor_whatsapp", default)]
    pub phone_number: Option<String>,
    #[serde(rename = "tempat_lahir", default)]
    pub birth_place: Option<String>,
    #[serde(
        rename = "tanggal_lahir",
        default,
        deserialize_with = "lenient::date"
    )]
    pub birth_date: Option<NaiveDate>,
    #[serde(rename = "tahun", default, deserialize_with = "lenient::text")]
    pub year: Option<String>,
    #[serde(rename = "bulan", default, deserialize_with = "lenient::text")]
    pub month: Option<String>,

    #[serde(default)]
    pub score_listening: Option<u32>,
    #[serde(default)]
    pub score_structure: Option<u32>,
    #[serde(default)]
    pub score_reading: Option<u32>,
    #[serde(default)]
    pub total_score: Option<f64>,
    #[serde(default)]
    pub listening: Option<bool>,
    #[serde(default)]
    pub structure: Option<bool>,
    #[serde(default)]
    pub reading: Option<bool>,

    #[serde(default)]
    pub score_listening2: Option<u32>,
    #[serde(default)]
    pub score_structure2: Option<u32>,
    #[serde(default)]
    pub score_reading2: Option<u32>,
    #[serde(default)]
    pub total_score2: Option<f64>,
    #[serde(default)]
    pub listening2: Option<bool>,
    #[serde(default)]
    pub structure2: Option<bool>,
    #[serde(default)]
    pub reading2: Option<bool>,
}

/// Scores and completion flags for one attempt.
///
/// The `*_done` flags are recorded separately by the backend and say
/// nothing about whether a score is present.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ScoreSet {
    pub listening: Option<u32>,
    pub structure: Option<u32>,
    pub reading: Option<u32>,
    pub total: Option<f64>,
    pub listening_done: bool,
    pub structure_done: bool,
    pub reading_done: bool,
}

impl ScoreSet {
    pub fn score(&self, section: Section) -> Option<u32> {
        match section {
            Section::Listening => self.listening,
            Section::Structure => self.structure,
            Section::Reading => self.reading,
        }
    }

    pub fn completed(&self, section: Section) -> bool {
        match section {
            Section::Listening => self.listening_done,
            Section::Structure => self.structure_done,
            Section::Reading => self.reading_done,
        }
    }

    /// True when any section of this attempt is flagged as taken.
    pub fn any_completed(&self) -> bool {
        self.listening_done || self.structure_done || self.reading_done
    }
}

impl Profile {
    /// Collect the flat score columns for `attempt`.
    pub fn scores(&self, attempt: Attempt) -> ScoreSet {
        match attempt {
            Attempt::First => ScoreSet {
                listening: self.score_listening,
                structure: self.score_structure,
                reading: self.score_reading,
                total: self.total_score,
                listening_done: self.listening.unwrap_or(false),
                structure_done: self.structure.unwrap_or(false),
                reading_done: self.reading.unwrap_or(false),
            },
            Attempt::Second => ScoreSet {
                listening: self.score_listening2,
                structure: self.score_structure2,
                reading: self.score_reading2,
                total: self.total_score2,
                listening_done: self.listening2.unwrap_or(false),
                structure_done: self.structure2.unwrap_or(false),
                reading_done: self.reading2.unwrap_or(false),
            },
        }
    }

    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or_default()
    }

    pub fn display_email(&self) -> &str {
        self.email.as_deref().unwrap_or_default()
    }
}

/// Every editable profile column. Sent as-is when creating a profile and
/// together with the id when updating one. `None` is sent as `null`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ProfileFields {
    #[serde(rename = "nama")]
    pub name: String,
    pub email: String,
    #[serde(rename = "nomor_whatsapp")]
    pub phone_number: String,
    #[serde(rename = "tempat_lahir")]
    pub birth_place: String,
    #[serde(rename = "tanggal_lahir")]
    pub birth_date: Option<NaiveDate>,

    pub score_listening: Option<u32>,
    pub score_structure: Option<u32>,
    pub score_reading: Option<u32>,
    pub total_score: Option<f64>,

    pub score_listening2: Option<u32>,
    pub score_structure2: Option<u32>,
    pub score_reading2: Option<u32>,
    pub total_score2: Option<f64>,
}

pub type CreateProfilePayload = ProfileFields;

/// Full replacement of a profile's editable columns.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UpdateProfilePayload {
    pub id: ProfileId,
    #[serde(flatten)]
    pub fields: ProfileFields,
}
