//! Pet domain model and write-payload validation.
//!
//! # Responsibility
//! - Define the canonical pet record stored in the `pets` table.
//! - Provide the tri-state `FieldSet` payload for insert/update calls.
//! - Enforce field constraints before any SQL mutation runs.
//!
//! # Invariants
//! - `id` is assigned by the store and never reused for another pet.
//! - A present-but-null field in a `FieldSet` is distinct from an absent one;
//!   update validation only inspects present keys.

use rusqlite::types::Value;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Stable row identifier assigned by the store on insert.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type PetId = i64;

/// Gender classification stored as a small integer code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    /// Not specified by the caller. Stored as code 0.
    Unknown,
    /// Stored as code 1.
    Male,
    /// Stored as code 2.
    Female,
}

impl Gender {
    /// Returns the integer code persisted in the `gender` column.
    pub fn code(self) -> i64 {
        match self {
            Self::Unknown => 0,
            Self::Male => 1,
            Self::Female => 2,
        }
    }

    /// Parses a stored gender code. Returns `None` for codes outside {0,1,2}.
    pub fn from_code(code: i64) -> Option<Self> {
        match code {
            0 => Some(Self::Unknown),
            1 => Some(Self::Male),
            2 => Some(Self::Female),
            _ => None,
        }
    }

    /// Returns the editor selection index (0 unknown, 1 male, 2 female).
    pub fn selection_index(self) -> usize {
        self.code() as usize
    }

    /// Maps an editor selection index back to a gender.
    pub fn from_selection_index(index: usize) -> Option<Self> {
        Self::from_code(i64::try_from(index).ok()?)
    }
}

/// Canonical pet record as persisted in the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pet {
    /// Store-assigned row id.
    pub id: PetId,
    /// Required display name. Never empty.
    pub name: String,
    /// Optional breed text. Any value including absent is valid.
    pub breed: Option<String>,
    /// Required gender classification.
    pub gender: Gender,
    /// Optional weight in whole units. Non-negative when present.
    pub weight: Option<i64>,
}

/// Column identifiers for the `pets` table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PetColumn {
    Id,
    Name,
    Breed,
    Gender,
    Weight,
}

/// All columns, in stored order. The default projection.
pub const ALL_COLUMNS: [PetColumn; 5] = [
    PetColumn::Id,
    PetColumn::Name,
    PetColumn::Breed,
    PetColumn::Gender,
    PetColumn::Weight,
];

impl PetColumn {
    /// Returns the SQL column name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::Name => "name",
            Self::Breed => "breed",
            Self::Gender => "gender",
            Self::Weight => "weight",
        }
    }
}

impl Display for PetColumn {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Validation failure for an insert/update payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PetValidationError {
    /// Name key missing, null, or empty after trimming.
    MissingName,
    /// Gender key missing, null, or outside the valid code set.
    InvalidGender(Option<i64>),
    /// Weight present but negative or not a number.
    InvalidWeight(String),
}

impl Display for PetValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingName => write!(f, "pet requires a name"),
            Self::InvalidGender(Some(code)) => {
                write!(f, "pet requires a valid gender, got code {code}")
            }
            Self::InvalidGender(None) => write!(f, "pet requires a valid gender"),
            Self::InvalidWeight(value) => {
                write!(f, "pet requires a valid weight, got `{value}`")
            }
        }
    }
}

impl Error for PetValidationError {}

/// Insert/update payload mapping column name to new value.
///
/// Each field is tri-state: absent, present-null, or present with a value.
/// Update validation applies a rule only when the key is present, so the
/// distinction must survive until the SQL statement is built.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldSet {
    name: Option<Option<String>>,
    breed: Option<Option<String>>,
    gender: Option<Option<i64>>,
    weight: Option<Option<i64>>,
}

impl FieldSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(mut self, value: impl Into<String>) -> Self {
        self.name = Some(Some(value.into()));
        self
    }

    pub fn null_name(mut self) -> Self {
        self.name = Some(None);
        self
    }

    pub fn breed(mut self, value: impl Into<String>) -> Self {
        self.breed = Some(Some(value.into()));
        self
    }

    pub fn null_breed(mut self) -> Self {
        self.breed = Some(None);
        self
    }

    pub fn gender(mut self, gender: Gender) -> Self {
        self.gender = Some(Some(gender.code()));
        self
    }

    /// Sets a raw gender code without checking it. Validation rejects codes
    /// outside the valid set.
    pub fn gender_code(mut self, code: i64) -> Self {
        self.gender = Some(Some(code));
        self
    }

    pub fn null_gender(mut self) -> Self {
        self.gender = Some(None);
        self
    }

    pub fn weight(mut self, value: i64) -> Self {
        self.weight = Some(Some(value));
        self
    }

    pub fn null_weight(mut self) -> Self {
        self.weight = Some(None);
        self
    }

    /// Returns true when no key is present at all.
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.breed.is_none()
            && self.gender.is_none()
            && self.weight.is_none()
    }

    /// Validates a full insert payload: name and gender are required.
    pub fn validate_insert(&self) -> Result<(), PetValidationError> {
        self.check_name(true)?;
        self.check_gender(true)?;
        self.check_weight()?;
        Ok(())
    }

    /// Validates a partial update payload: each rule runs only when the
    /// corresponding key is present. Breed is never checked.
    pub fn validate_update(&self) -> Result<(), PetValidationError> {
        self.check_name(false)?;
        self.check_gender(false)?;
        self.check_weight()?;
        Ok(())
    }

    fn check_name(&self, required: bool) -> Result<(), PetValidationError> {
        match &self.name {
            Some(Some(name)) if !name.trim().is_empty() => Ok(()),
            Some(_) => Err(PetValidationError::MissingName),
            None if required => Err(PetValidationError::MissingName),
            None => Ok(()),
        }
    }

    fn check_gender(&self, required: bool) -> Result<(), PetValidationError> {
        match self.gender {
            Some(Some(code)) if Gender::from_code(code).is_some() => Ok(()),
            Some(code) => Err(PetValidationError::InvalidGender(code)),
            None if required => Err(PetValidationError::InvalidGender(None)),
            None => Ok(()),
        }
    }

    fn check_weight(&self) -> Result<(), PetValidationError> {
        // A present-null weight is stored as NULL; only negative values fail.
        if let Some(Some(weight)) = self.weight {
            if weight < 0 {
                return Err(PetValidationError::InvalidWeight(weight.to_string()));
            }
        }
        Ok(())
    }

    /// Flattens present keys into column/value pairs for SQL building.
    /// Present-null keys become SQL NULL.
    pub fn entries(&self) -> Vec<(PetColumn, Value)> {
        let mut entries = Vec::new();
        if let Some(name) = &self.name {
            entries.push((PetColumn::Name, text_value(name.clone())));
        }
        if let Some(breed) = &self.breed {
            entries.push((PetColumn::Breed, text_value(breed.clone())));
        }
        if let Some(gender) = self.gender {
            entries.push((PetColumn::Gender, integer_value(gender)));
        }
        if let Some(weight) = self.weight {
            entries.push((PetColumn::Weight, integer_value(weight)));
        }
        entries
    }
}

fn text_value(value: Option<String>) -> Value {
    value.map_or(Value::Null, Value::Text)
}

fn integer_value(value: Option<i64>) -> Value {
    value.map_or(Value::Null, Value::Integer)
}

#[cfg(test)]
mod tests {
    use super::{FieldSet, Gender, PetColumn, PetValidationError};
    use rusqlite::types::Value;

    #[test]
    fn gender_codes_round_trip() {
        for gender in [Gender::Unknown, Gender::Male, Gender::Female] {
            assert_eq!(Gender::from_code(gender.code()), Some(gender));
            assert_eq!(
                Gender::from_selection_index(gender.selection_index()),
                Some(gender)
            );
        }
        assert_eq!(Gender::from_code(3), None);
        assert_eq!(Gender::from_code(-1), None);
    }

    #[test]
    fn gender_serializes_snake_case() {
        let json = serde_json::to_string(&Gender::Male).unwrap();
        assert_eq!(json, "\"male\"");
    }

    #[test]
    fn insert_validation_requires_name_and_gender() {
        let missing_name = FieldSet::new().gender(Gender::Male);
        assert_eq!(
            missing_name.validate_insert(),
            Err(PetValidationError::MissingName)
        );

        let null_name = FieldSet::new().null_name().gender(Gender::Male);
        assert_eq!(
            null_name.validate_insert(),
            Err(PetValidationError::MissingName)
        );

        let empty_name = FieldSet::new().name("   ").gender(Gender::Male);
        assert_eq!(
            empty_name.validate_insert(),
            Err(PetValidationError::MissingName)
        );

        let missing_gender = FieldSet::new().name("Rex");
        assert_eq!(
            missing_gender.validate_insert(),
            Err(PetValidationError::InvalidGender(None))
        );

        let bad_gender = FieldSet::new().name("Rex").gender_code(7);
        assert_eq!(
            bad_gender.validate_insert(),
            Err(PetValidationError::InvalidGender(Some(7)))
        );
    }

    #[test]
    fn update_validation_skips_absent_keys() {
        let weight_only = FieldSet::new().weight(12);
        assert_eq!(weight_only.validate_update(), Ok(()));

        let negative = FieldSet::new().weight(-3);
        assert!(matches!(
            negative.validate_update(),
            Err(PetValidationError::InvalidWeight(_))
        ));

        let null_name = FieldSet::new().null_name();
        assert_eq!(
            null_name.validate_update(),
            Err(PetValidationError::MissingName)
        );

        assert_eq!(FieldSet::new().validate_update(), Ok(()));
    }

    #[test]
    fn null_weight_is_accepted_and_stored_as_null() {
        let values = FieldSet::new().null_weight();
        assert_eq!(values.validate_update(), Ok(()));
        assert_eq!(values.entries(), vec![(PetColumn::Weight, Value::Null)]);
    }

    #[test]
    fn entries_preserve_present_keys_only() {
        let values = FieldSet::new().name("Rex").null_breed().weight(10);
        let entries = values.entries();
        assert_eq!(
            entries,
            vec![
                (PetColumn::Name, Value::Text("Rex".to_string())),
                (PetColumn::Breed, Value::Null),
                (PetColumn::Weight, Value::Integer(10)),
            ]
        );
        assert!(FieldSet::new().is_empty());
    }
}
