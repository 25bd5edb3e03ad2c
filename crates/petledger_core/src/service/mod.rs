//! Use-case services over the access gateway.
//!
//! # Responsibility
//! - Map UI-shaped input to gateway payloads and back.
//! - Keep UI layers decoupled from routes, SQL, and validation details.

pub mod editor;
