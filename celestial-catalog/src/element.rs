//! Renderable projection of a catalog record.

use celestial_core::numeric::to_double;
use serde::Serialize;
use std::cmp::Ordering;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Alignment {
    Left,
    Right,
}

/// How a column sorts in a table view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SortKind {
    Numeric,
    Text,
}

/// One labeled, formatted cell of a record.
///
/// `computed` marks derived values; `faulty` marks values that are present
/// but unreliable (e.g. a proper motion whose error exceeds it).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CatalogElement {
    pub name: String,
    pub value: String,
    pub alignment: Alignment,
    pub sort: SortKind,
    pub tooltip: Option<String>,
    pub computed: bool,
    pub faulty: bool,
}

impl CatalogElement {
    /// Orders two cells of the same column.
    pub fn compare(&self, other: &Self) -> Ordering {
        match self.sort {
            SortKind::Numeric => to_double(&self.value).total_cmp(&to_double(&other.value)),
            SortKind::Text => self.value.cmp(&other.value),
        }
    }
}
