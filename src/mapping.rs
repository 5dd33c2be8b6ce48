//! Field Mapper: canonical defaults to `nm_config.ini` slot-1 key names.

use crate::defaults::{Attribute, FieldDefaults};

const TARGET_KEYS: [&str; 12] = [
    "FieldPattern1",
    "FieldPatternSize1",
    "FieldReturnType1",
    "FieldRotateDirection1",
    "FieldRotateTimes1",
    "FieldSprinklerLoc1",
    "FieldSprinklerDist1",
    "FieldPatternInvertFB1",
    "FieldPatternInvertLR1",
    "FieldUntilPack1",
    "FieldPatternShift1",
    "FieldPatternReps1",
];

impl Attribute {
    /// Key this attribute is written to in the current configuration.
    pub const fn target_key(self) -> &'static str {
        TARGET_KEYS[self as usize]
    }
}

/// Ordered target key/value pairs produced from one [`FieldDefaults`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetKeyValues {
    entries: Vec<(&'static str, String)>,
}

impl TargetKeyValues {
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> + '_ {
        self.entries.iter().map(|(k, v)| (*k, v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Rename every attribute to its target key. Values pass through untouched.
pub fn map_to_target(defaults: &FieldDefaults) -> TargetKeyValues {
    TargetKeyValues {
        entries: defaults
            .iter()
            .map(|(attribute, value)| (attribute.target_key(), value.to_string()))
            .collect(),
    }
}
