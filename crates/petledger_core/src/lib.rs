//! Core domain logic for petledger: a single-table pet record store exposed
//! through a routed access gateway.
//! This crate is the single source of truth for field validation invariants.

pub mod db;
pub mod logging;
pub mod model;
pub mod provider;
pub mod repo;
pub mod service;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::pet::{
    FieldSet, Gender, Pet, PetColumn, PetId, PetValidationError, ALL_COLUMNS,
};
pub use provider::gateway::{PetProvider, ProviderError, ProviderResult, RowSet};
pub use provider::notify::{ChangeListener, ChangeNotifier};
pub use provider::route::{Route, RouteError, PET_ITEM_KIND, PET_LIST_KIND};
pub use repo::pet_repo::{PetStore, SqlitePetStore};
pub use service::editor::{EditorForm, PetEditor};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
