//! Resource route classification.
//!
//! # Responsibility
//! - Parse opaque resource paths into the two supported route shapes.
//! - Render routes back to canonical paths and content-kind labels.
//!
//! # Invariants
//! - Only `pets` and `pets/<id>` are valid paths; everything else fails.
//! - Item ids are non-negative decimal integers.

use crate::model::pet::PetId;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Path segment addressing the pets table.
pub const COLLECTION_PATH: &str = "pets";

/// Content-kind label for the whole-collection route.
pub const PET_LIST_KIND: &str = "application/vnd.petledger.pet-list";

/// Content-kind label for a single-record route.
pub const PET_ITEM_KIND: &str = "application/vnd.petledger.pet";

/// Classified target of a gateway operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// The whole set of pets (`pets`).
    Collection,
    /// One pet addressed by id (`pets/<id>`).
    Item(PetId),
}

/// Rejection of a path that matches neither supported route shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteError {
    path: String,
}

impl Display for RouteError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown pet resource path `{}`", self.path)
    }
}

impl Error for RouteError {}

impl Route {
    /// Parses a resource path into a route.
    ///
    /// Accepts `pets` and `pets/<id>`, with optional surrounding slashes.
    /// Any other shape is an unknown-resource error.
    pub fn parse(path: &str) -> Result<Self, RouteError> {
        let reject = || RouteError {
            path: path.to_string(),
        };

        let mut segments = path.trim_matches('/').split('/');
        if segments.next() != Some(COLLECTION_PATH) {
            return Err(reject());
        }

        match segments.next() {
            None => Ok(Self::Collection),
            Some(id_segment) => {
                if segments.next().is_some() {
                    return Err(reject());
                }
                parse_id(id_segment)
                    .map(Self::Item)
                    .ok_or_else(reject)
            }
        }
    }

    /// Returns the content-kind label for this route.
    pub fn content_kind(&self) -> &'static str {
        match self {
            Self::Collection => PET_LIST_KIND,
            Self::Item(_) => PET_ITEM_KIND,
        }
    }

    /// Renders the canonical resource path.
    pub fn path(&self) -> String {
        match self {
            Self::Collection => COLLECTION_PATH.to_string(),
            Self::Item(id) => format!("{COLLECTION_PATH}/{id}"),
        }
    }
}

impl Display for Route {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.path())
    }
}

fn parse_id(segment: &str) -> Option<PetId> {
    if segment.is_empty() || !segment.bytes().all(|byte| byte.is_ascii_digit()) {
        return None;
    }
    segment.parse::<PetId>().ok()
}

#[cfg(test)]
mod tests {
    use super::{Route, PET_ITEM_KIND, PET_LIST_KIND};

    #[test]
    fn parses_collection_and_item_paths() {
        assert_eq!(Route::parse("pets"), Ok(Route::Collection));
        assert_eq!(Route::parse("/pets/"), Ok(Route::Collection));
        assert_eq!(Route::parse("pets/42"), Ok(Route::Item(42)));
        assert_eq!(Route::parse("pets/0"), Ok(Route::Item(0)));
    }

    #[test]
    fn rejects_unknown_paths() {
        for path in ["", "cats", "pets/abc", "pets/-1", "pets/3/extra", "pets/1/2"] {
            assert!(Route::parse(path).is_err(), "path `{path}` should fail");
        }
    }

    #[test]
    fn content_kinds_differ_by_route() {
        assert_eq!(Route::Collection.content_kind(), PET_LIST_KIND);
        assert_eq!(Route::Item(1).content_kind(), PET_ITEM_KIND);
        assert_ne!(PET_LIST_KIND, PET_ITEM_KIND);
    }

    #[test]
    fn path_round_trips_through_parse() {
        let item = Route::Item(7);
        assert_eq!(Route::parse(&item.path()), Ok(item));
        assert_eq!(item.to_string(), "pets/7");
    }
}
