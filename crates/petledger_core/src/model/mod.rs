//! Domain model for pet records.
//!
//! # Responsibility
//! - Define the canonical `Pet` record and its field-level constraints.
//! - Define the `FieldSet` payload shape used by insert/update operations.
//!
//! # Invariants
//! - Every stored record has a valid gender code.
//! - `name` is never null or empty; `weight`, when present, is >= 0.

pub mod pet;
