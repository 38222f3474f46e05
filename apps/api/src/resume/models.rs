use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::errors::AppError;
use crate::resume::validation::validate_required_fields;

/// Resource discriminator for the three resume collections.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    Experience,
    Education,
    Skill,
}

impl Kind {
    /// Resolves the `{kind}` path segment of `/resume/{kind}`.
    pub fn from_path(segment: &str) -> Option<Kind> {
        match segment {
            "experience" => Some(Kind::Experience),
            "education" => Some(Kind::Education),
            "skill" => Some(Kind::Skill),
            _ => None,
        }
    }

    /// Key under which records of this kind are echoed in response bodies.
    pub fn key(&self) -> &'static str {
        match self {
            Kind::Experience => "experience",
            Kind::Education => "education",
            Kind::Skill => "skill",
        }
    }

    pub fn required_fields(&self) -> &'static [&'static str] {
        match self {
            Kind::Experience => &[
                "title",
                "company",
                "start_date",
                "end_date",
                "description",
                "logo",
            ],
            Kind::Education => &["course", "school", "start_date", "end_date", "grade", "logo"],
            Kind::Skill => &["name", "proficiency", "logo"],
        }
    }

    /// Builds a typed record of this kind from a submitted JSON value.
    ///
    /// Field presence is checked before deserialization so that the error
    /// message names every missing field; a present field of the wrong type
    /// fails in the deserializer and carries its message instead.
    pub fn parse_record(&self, value: Value) -> Result<Record, AppError> {
        let object = match &value {
            Value::Object(map) => map,
            _ => {
                return Err(AppError::Validation(
                    "request body must be a JSON object".to_string(),
                ))
            }
        };

        let check = validate_required_fields(self.required_fields(), object);
        if !check.ok {
            return Err(AppError::Validation(check.message));
        }

        let record = match self {
            Kind::Experience => Record::Experience(serde_json::from_value(value)?),
            Kind::Education => Record::Education(serde_json::from_value(value)?),
            Kind::Skill => Record::Skill(serde_json::from_value(value)?),
        };
        Ok(record)
    }
}

/// A work experience entry. Unknown submitted fields are kept in `extra`
/// and round-trip through serialization.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Experience {
    pub title: String,
    pub company: String,
    pub start_date: String,
    pub end_date: String,
    pub description: String,
    pub logo: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Education {
    pub course: String,
    pub school: String,
    pub start_date: String,
    pub end_date: String,
    pub grade: String,
    pub logo: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    pub proficiency: String,
    pub logo: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// One entry in a resource collection.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum Record {
    Experience(Experience),
    Education(Education),
    Skill(Skill),
}

impl Record {
    /// JSON representation used in response bodies.
    pub fn to_json(&self) -> Value {
        serde_json::to_value(self).unwrap_or_default()
    }
}
