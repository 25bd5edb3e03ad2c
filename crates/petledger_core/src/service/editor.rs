//! Editor form mapping for the single-pet create/edit screen.
//!
//! # Responsibility
//! - Package raw editor input into a validated write payload.
//! - Populate editor fields from one stored record.
//!
//! # Invariants
//! - Text inputs are trimmed before packaging.
//! - Empty breed/weight inputs mean "absent", not empty values.
//! - Gender travels as a selection index (0 unknown, 1 male, 2 female).

use crate::model::pet::{FieldSet, Gender, Pet, PetId, PetValidationError};
use crate::provider::gateway::{PetProvider, ProviderResult};
use crate::provider::route::Route;
use crate::repo::pet_repo::PetStore;

/// Raw editor screen state: what the input widgets hold.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditorForm {
    pub name: String,
    pub breed: String,
    /// Weight as typed; empty means no weight recorded.
    pub weight: String,
    /// Gender dropdown selection index.
    pub gender_index: usize,
}

impl EditorForm {
    /// Packages the form into a write payload.
    ///
    /// Non-numeric weight input is a validation error here rather than a
    /// crash at parse time. Name is always included; the gateway rejects
    /// empty names on insert.
    pub fn to_field_set(&self) -> Result<FieldSet, PetValidationError> {
        let gender = Gender::from_selection_index(self.gender_index).ok_or(
            PetValidationError::InvalidGender(Some(self.gender_index as i64)),
        )?;

        let mut values = FieldSet::new().name(self.name.trim()).gender(gender);

        let breed = self.breed.trim();
        if !breed.is_empty() {
            values = values.breed(breed);
        }

        let weight = self.weight.trim();
        if !weight.is_empty() {
            let parsed = weight
                .parse::<i64>()
                .map_err(|_| PetValidationError::InvalidWeight(weight.to_string()))?;
            values = values.weight(parsed);
        }

        Ok(values)
    }

    /// Builds form state from a stored record.
    pub fn from_pet(pet: &Pet) -> Self {
        Self {
            name: pet.name.clone(),
            breed: pet.breed.clone().unwrap_or_default(),
            weight: pet.weight.map(|w| w.to_string()).unwrap_or_default(),
            gender_index: pet.gender.selection_index(),
        }
    }
}

/// Editor use-case service wired to one gateway.
pub struct PetEditor<'p, S: PetStore> {
    provider: &'p PetProvider<S>,
}

impl<'p, S: PetStore> PetEditor<'p, S> {
    pub fn new(provider: &'p PetProvider<S>) -> Self {
        Self { provider }
    }

    /// Saves a new pet from the form.
    ///
    /// Returns the created item route, or `None` on the store's soft
    /// insert-failure path.
    pub fn save_new(&self, form: &EditorForm) -> ProviderResult<Option<Route>> {
        let values = form.to_field_set()?;
        self.provider.insert(&Route::Collection, &values)
    }

    /// Loads an existing record into form state.
    ///
    /// Queries the item route with the full projection and reads the first
    /// row. Returns `None` when no such record exists.
    pub fn load(&self, id: PetId) -> ProviderResult<Option<EditorForm>> {
        let rows = self
            .provider
            .query(&Route::Item(id), None, None, &[], None)?;
        Ok(rows.first_pet()?.map(|pet| EditorForm::from_pet(&pet)))
    }
}
