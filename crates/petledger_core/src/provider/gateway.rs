//! Gateway dispatch: route-aware CRUD over the pet store.
//!
//! # Responsibility
//! - Map each operation onto the store per the resolved route.
//! - Enforce payload validation before mutations.
//! - Publish change notifications for successful writes.
//!
//! # Invariants
//! - Item routes discard caller-supplied filters and target the embedded id.
//! - Insert is collection-only; item insert is an unsupported operation.
//! - Update/delete notify only when at least one row was affected.

use crate::db::DbError;
use crate::model::pet::{
    FieldSet, Gender, Pet, PetColumn, PetValidationError, ALL_COLUMNS,
};
use crate::provider::notify::{ChangeListener, ChangeNotifier};
use crate::provider::route::Route;
use crate::repo::pet_repo::PetStore;
use log::{error, info};
use rusqlite::types::Value;
use std::error::Error;
use std::fmt::{Display, Formatter};

const ID_FILTER: &str = "id = ?";

pub type ProviderResult<T> = Result<T, ProviderError>;

/// Gateway-level failure for a single CRUD call.
#[derive(Debug)]
pub enum ProviderError {
    /// Operation not defined for this route (caller misuse).
    Unsupported {
        operation: &'static str,
        route: Route,
    },
    /// Payload rejected before any write.
    Validation(PetValidationError),
    /// Store or connection failure.
    Db(DbError),
    /// Persisted state does not decode into a valid pet record.
    InvalidRow(String),
}

impl Display for ProviderError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unsupported { operation, route } => {
                write!(f, "{operation} is not supported for route `{route}`")
            }
            Self::Validation(err) => write!(f, "{err}"),
            Self::Db(err) => write!(f, "{err}"),
            Self::InvalidRow(message) => write!(f, "invalid persisted pet data: {message}"),
        }
    }
}

impl Error for ProviderError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Unsupported { .. } => None,
            Self::Validation(err) => Some(err),
            Self::Db(err) => Some(err),
            Self::InvalidRow(_) => None,
        }
    }
}

impl From<PetValidationError> for ProviderError {
    fn from(value: PetValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<DbError> for ProviderError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

/// Query result: projected rows plus the route they were produced for.
///
/// The attached route is the invalidation identity; when a change
/// notification later fires for it, dependent callers re-query.
#[derive(Debug, Clone)]
pub struct RowSet {
    route: Route,
    columns: Vec<PetColumn>,
    rows: Vec<Vec<Value>>,
}

impl RowSet {
    /// Returns the route this result was produced for.
    pub fn route(&self) -> &Route {
        &self.route
    }

    /// Returns the projected columns, in row order.
    pub fn columns(&self) -> &[PetColumn] {
        &self.columns
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Returns the raw value at (row, column), if both exist in this result.
    pub fn value(&self, row: usize, column: PetColumn) -> Option<&Value> {
        let index = self.columns.iter().position(|&c| c == column)?;
        self.rows.get(row)?.get(index)
    }

    /// Decodes every row into a `Pet`. Requires the full projection.
    pub fn pets(&self) -> ProviderResult<Vec<Pet>> {
        (0..self.rows.len()).map(|row| self.pet_at(row)).collect()
    }

    /// Decodes the first row into a `Pet`, if any. Requires the full
    /// projection.
    pub fn first_pet(&self) -> ProviderResult<Option<Pet>> {
        if self.is_empty() {
            return Ok(None);
        }
        self.pet_at(0).map(Some)
    }

    fn pet_at(&self, row: usize) -> ProviderResult<Pet> {
        let id = match self.require(row, PetColumn::Id)? {
            Value::Integer(id) => *id,
            other => return Err(invalid_column(PetColumn::Id, other)),
        };
        let name = match self.require(row, PetColumn::Name)? {
            Value::Text(name) => name.clone(),
            other => return Err(invalid_column(PetColumn::Name, other)),
        };
        let breed = match self.require(row, PetColumn::Breed)? {
            Value::Text(breed) => Some(breed.clone()),
            Value::Null => None,
            other => return Err(invalid_column(PetColumn::Breed, other)),
        };
        let gender = match self.require(row, PetColumn::Gender)? {
            Value::Integer(code) => Gender::from_code(*code).ok_or_else(|| {
                ProviderError::InvalidRow(format!("invalid gender code {code} in pets.gender"))
            })?,
            other => return Err(invalid_column(PetColumn::Gender, other)),
        };
        let weight = match self.require(row, PetColumn::Weight)? {
            Value::Integer(weight) if *weight >= 0 => Some(*weight),
            Value::Null => None,
            other => return Err(invalid_column(PetColumn::Weight, other)),
        };

        Ok(Pet {
            id,
            name,
            breed,
            gender,
            weight,
        })
    }

    fn require(&self, row: usize, column: PetColumn) -> ProviderResult<&Value> {
        self.value(row, column).ok_or_else(|| {
            ProviderError::InvalidRow(format!("column `{column}` missing from projection"))
        })
    }
}

fn invalid_column(column: PetColumn, value: &Value) -> ProviderError {
    ProviderError::InvalidRow(format!("invalid value {value:?} in pets.{column}"))
}

/// Access gateway over an explicitly owned pet store.
///
/// Each call executes synchronously end-to-end: resolve the route, validate,
/// delegate to the store, then notify registered listeners on success.
pub struct PetProvider<S: PetStore> {
    store: S,
    notifier: ChangeNotifier,
}

impl<S: PetStore> PetProvider<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            notifier: ChangeNotifier::new(),
        }
    }

    /// Registers a change listener for all future writes.
    pub fn subscribe(&mut self, listener: ChangeListener) {
        self.notifier.subscribe(listener);
    }

    /// Queries the route with the given projection, filter, and order.
    ///
    /// Item routes discard the caller-supplied filter and target the id
    /// embedded in the route. `projection = None` selects all columns.
    pub fn query(
        &self,
        route: &Route,
        projection: Option<&[PetColumn]>,
        filter: Option<&str>,
        filter_args: &[Value],
        order: Option<&str>,
    ) -> ProviderResult<RowSet> {
        let columns = projection.unwrap_or(&ALL_COLUMNS).to_vec();
        let rows = match route {
            Route::Collection => self.store.select(&columns, filter, filter_args, order)?,
            Route::Item(id) => {
                self.store
                    .select(&columns, Some(ID_FILTER), &[Value::Integer(*id)], order)?
            }
        };

        Ok(RowSet {
            route: *route,
            columns,
            rows,
        })
    }

    /// Inserts a new pet into the collection.
    ///
    /// Returns the child item route on success, or `None` when the store
    /// rejects the row (soft failure, logged). Validation failures and
    /// item-route calls are errors and never touch the store.
    pub fn insert(&self, route: &Route, values: &FieldSet) -> ProviderResult<Option<Route>> {
        if let Route::Item(_) = route {
            return Err(ProviderError::Unsupported {
                operation: "insert",
                route: *route,
            });
        }

        values.validate_insert()?;

        let Some(id) = self.store.insert(&values.entries())? else {
            error!("event=pet_insert module=provider status=soft_fail route={route}");
            return Ok(None);
        };

        info!("event=pet_insert module=provider status=ok id={id}");
        self.notifier.notify(route);
        Ok(Some(Route::Item(id)))
    }

    /// Updates rows addressed by the route, applying only present keys.
    ///
    /// An empty field set returns 0 without touching the store. Notifies
    /// listeners only when at least one row changed.
    pub fn update(
        &self,
        route: &Route,
        values: &FieldSet,
        filter: Option<&str>,
        filter_args: &[Value],
    ) -> ProviderResult<usize> {
        values.validate_update()?;

        if values.is_empty() {
            return Ok(0);
        }

        let entries = values.entries();
        let updated = match route {
            Route::Collection => self.store.update(&entries, filter, filter_args)?,
            Route::Item(id) => {
                self.store
                    .update(&entries, Some(ID_FILTER), &[Value::Integer(*id)])?
            }
        };

        if updated > 0 {
            info!("event=pet_update module=provider status=ok route={route} rows={updated}");
            self.notifier.notify(route);
        }
        Ok(updated)
    }

    /// Deletes rows addressed by the route.
    ///
    /// Notifies listeners only when at least one row was deleted, for item
    /// and collection routes alike.
    pub fn delete(
        &self,
        route: &Route,
        filter: Option<&str>,
        filter_args: &[Value],
    ) -> ProviderResult<usize> {
        let deleted = match route {
            Route::Collection => self.store.delete(filter, filter_args)?,
            Route::Item(id) => self
                .store
                .delete(Some(ID_FILTER), &[Value::Integer(*id)])?,
        };

        if deleted > 0 {
            info!("event=pet_delete module=provider status=ok route={route} rows={deleted}");
            self.notifier.notify(route);
        }
        Ok(deleted)
    }

    /// Returns the content-kind label for the route.
    pub fn content_kind(&self, route: &Route) -> &'static str {
        route.content_kind()
    }
}
