//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `petledger_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

use petledger_core::db::open_db_in_memory;
use petledger_core::{FieldSet, Gender, PetProvider, Route, SqlitePetStore};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("petledger_core version={}", petledger_core::core_version());

    let conn = open_db_in_memory()?;
    let provider = PetProvider::new(SqlitePetStore::new(&conn));

    let values = FieldSet::new()
        .name("Rex")
        .breed("Labrador")
        .gender(Gender::Male)
        .weight(10);

    match provider.insert(&Route::Collection, &values)? {
        Some(route) => {
            let rows = provider.query(&route, None, None, &[], None)?;
            println!("inserted {route} -> {} row(s)", rows.len());
        }
        None => println!("insert rejected by store"),
    }

    Ok(())
}
