//! Pet store contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide raw select/insert/update/delete over the `pets` table.
//! - Translate store-level insert rejection into the soft `None` result.
//!
//! # Invariants
//! - Filter fragments use `?` placeholders bound in argument order.
//! - A constraint rejection on insert is a soft failure, not an error.

use crate::db::{DbError, DbResult};
use crate::model::pet::{PetColumn, PetId};
use log::error;
use rusqlite::types::Value;
use rusqlite::{params_from_iter, Connection, ErrorCode};

const TABLE: &str = "pets";

/// Store contract used by the access gateway.
///
/// `filter` is a SQL predicate fragment with `?` placeholders; `args` supplies
/// the bound values in order. `None` means no predicate (whole table).
pub trait PetStore {
    /// Runs a SELECT with the given projection, filter, and order.
    /// Returns raw rows in projection column order.
    fn select(
        &self,
        projection: &[PetColumn],
        filter: Option<&str>,
        args: &[Value],
        order: Option<&str>,
    ) -> DbResult<Vec<Vec<Value>>>;

    /// Inserts one row from the given column/value entries.
    ///
    /// Returns `Some(id)` with the assigned row id, or `None` when the store
    /// rejects the row (constraint failure). Other failures are errors.
    fn insert(&self, entries: &[(PetColumn, Value)]) -> DbResult<Option<PetId>>;

    /// Applies the given entries to all rows matching the filter.
    /// Returns the number of rows updated.
    fn update(
        &self,
        entries: &[(PetColumn, Value)],
        filter: Option<&str>,
        args: &[Value],
    ) -> DbResult<usize>;

    /// Deletes all rows matching the filter. Returns the number of rows
    /// deleted.
    fn delete(&self, filter: Option<&str>, args: &[Value]) -> DbResult<usize>;
}

/// SQLite-backed pet store over a borrowed connection.
pub struct SqlitePetStore<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqlitePetStore<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl PetStore for SqlitePetStore<'_> {
    fn select(
        &self,
        projection: &[PetColumn],
        filter: Option<&str>,
        args: &[Value],
        order: Option<&str>,
    ) -> DbResult<Vec<Vec<Value>>> {
        let columns = projection
            .iter()
            .map(|column| column.as_str())
            .collect::<Vec<_>>()
            .join(", ");

        let mut sql = format!("SELECT {columns} FROM {TABLE}");
        if let Some(filter) = filter {
            sql.push_str(" WHERE ");
            sql.push_str(filter);
        }
        if let Some(order) = order {
            sql.push_str(" ORDER BY ");
            sql.push_str(order);
        }

        let mut stmt = self.conn.prepare(&sql)?;
        let mut rows = stmt.query(params_from_iter(args.iter().cloned()))?;
        let mut result = Vec::new();

        while let Some(row) = rows.next()? {
            let mut values = Vec::with_capacity(projection.len());
            for index in 0..projection.len() {
                values.push(row.get::<_, Value>(index)?);
            }
            result.push(values);
        }

        Ok(result)
    }

    fn insert(&self, entries: &[(PetColumn, Value)]) -> DbResult<Option<PetId>> {
        let columns = entries
            .iter()
            .map(|(column, _)| column.as_str())
            .collect::<Vec<_>>()
            .join(", ");
        let placeholders = vec!["?"; entries.len()].join(", ");
        let sql = format!("INSERT INTO {TABLE} ({columns}) VALUES ({placeholders});");

        let values = entries.iter().map(|(_, value)| value.clone());
        match self.conn.execute(&sql, params_from_iter(values)) {
            Ok(_) => Ok(Some(self.conn.last_insert_rowid())),
            Err(rusqlite::Error::SqliteFailure(failure, _))
                if failure.code == ErrorCode::ConstraintViolation =>
            {
                error!("event=pet_insert module=store status=soft_fail error_code=constraint");
                Ok(None)
            }
            Err(err) => Err(DbError::Sqlite(err)),
        }
    }

    fn update(
        &self,
        entries: &[(PetColumn, Value)],
        filter: Option<&str>,
        args: &[Value],
    ) -> DbResult<usize> {
        let assignments = entries
            .iter()
            .map(|(column, _)| format!("{} = ?", column.as_str()))
            .collect::<Vec<_>>()
            .join(", ");

        let mut sql = format!("UPDATE {TABLE} SET {assignments}");
        if let Some(filter) = filter {
            sql.push_str(" WHERE ");
            sql.push_str(filter);
        }

        let bound = entries
            .iter()
            .map(|(_, value)| value.clone())
            .chain(args.iter().cloned());
        let changed = self.conn.execute(&sql, params_from_iter(bound))?;
        Ok(changed)
    }

    fn delete(&self, filter: Option<&str>, args: &[Value]) -> DbResult<usize> {
        let mut sql = format!("DELETE FROM {TABLE}");
        if let Some(filter) = filter {
            sql.push_str(" WHERE ");
            sql.push_str(filter);
        }

        let deleted = self
            .conn
            .execute(&sql, params_from_iter(args.iter().cloned()))?;
        Ok(deleted)
    }
}
