//! Record store layer: the thin relational handle under the gateway.
//!
//! # Responsibility
//! - Execute single-statement CRUD SQL against the `pets` table.
//! - Keep SQL text and parameter binding out of the gateway.
//!
//! # Invariants
//! - No caching, no explicit transactions; single-statement atomicity only.
//! - Store code never validates payloads; the gateway does that first.

pub mod pet_repo;
