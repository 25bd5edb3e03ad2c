//! Access gateway: route resolution, payload validation, CRUD dispatch.
//!
//! # Responsibility
//! - Classify resource paths into collection/item routes.
//! - Validate write payloads before any store mutation.
//! - Emit change notifications after successful writes.
//!
//! # Invariants
//! - Item-route operations always target the id embedded in the route;
//!   caller-supplied filters for item routes are discarded.
//! - Validation failures abort before the store is touched.

pub mod gateway;
pub mod notify;
pub mod route;
