//! Field allow-list.
//!
//! Natro Macro only knows a closed set of gathering fields. Requested names are
//! matched exactly (case-sensitive) against this list before any file is touched.

use crate::error::SwitchError;
use std::fmt;

/// Every field name the macro accepts, in the order users see them.
pub const VALID_FIELDS: [&str; 17] = [
    "Bamboo",
    "Blue Flower",
    "Cactus",
    "Clover",
    "Coconut",
    "Dandelion",
    "Mountain Top",
    "Mushroom",
    "Pepper",
    "Pine Tree",
    "Pineapple",
    "Pumpkin",
    "Rose",
    "Spider",
    "Strawberry",
    "Stump",
    "Sunflower",
];

/// A field name known to be on the allow-list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FieldName(&'static str);

impl FieldName {
    /// Validate `requested` against the allow-list.
    pub fn parse(requested: &str) -> Result<Self, SwitchError> {
        VALID_FIELDS
            .into_iter()
            .find(|name| *name == requested)
            .map(FieldName)
            .ok_or_else(|| SwitchError::UnknownField {
                requested: requested.to_string(),
            })
    }

    pub fn as_str(&self) -> &'static str {
        self.0
    }

    /// All allow-listed fields.
    pub fn all() -> impl Iterator<Item = FieldName> {
        VALID_FIELDS.into_iter().map(FieldName)
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}
