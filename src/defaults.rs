//! Fallback Resolver
//!
//! Turns a parsed `field_config.ini` section into a complete [`FieldDefaults`]
//! record. Missing or empty values fall back to the constants Natro Macro itself
//! ships with.

use crate::ini::Section;
use serde::Serialize;

/// The twelve gathering attributes, in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Attribute {
    Pattern,
    Size,
    Convert,
    Camera,
    Turns,
    Sprinkler,
    Distance,
    InvertFB,
    InvertLR,
    Percent,
    ShiftLock,
    GatherTime,
}

const SOURCE_KEYS: [&str; 12] = [
    "pattern",
    "size",
    "convert",
    "camera",
    "turns",
    "sprinkler",
    "distance",
    "invertFB",
    "invertLR",
    "percent",
    "shiftlock",
    "gathertime",
];

const FALLBACKS: [&str; 12] = [
    "Stationary",
    "S",
    "Walk",
    "None",
    "1",
    "Center",
    "1",
    "0",
    "0",
    "95",
    "0",
    "10",
];

impl Attribute {
    pub const ALL: [Attribute; 12] = [
        Attribute::Pattern,
        Attribute::Size,
        Attribute::Convert,
        Attribute::Camera,
        Attribute::Turns,
        Attribute::Sprinkler,
        Attribute::Distance,
        Attribute::InvertFB,
        Attribute::InvertLR,
        Attribute::Percent,
        Attribute::ShiftLock,
        Attribute::GatherTime,
    ];

    /// Key name used in `field_config.ini`.
    pub const fn source_key(self) -> &'static str {
        SOURCE_KEYS[self as usize]
    }

    pub const fn fallback(self) -> &'static str {
        FALLBACKS[self as usize]
    }
}

/// Fully resolved defaults for one field. Every attribute is non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldDefaults {
    pub pattern: String,
    pub size: String,
    pub convert: String,
    pub camera: String,
    pub turns: String,
    pub sprinkler: String,
    pub distance: String,
    #[serde(rename = "invertFB")]
    pub invert_fb: String,
    #[serde(rename = "invertLR")]
    pub invert_lr: String,
    pub percent: String,
    #[serde(rename = "shiftlock")]
    pub shift_lock: String,
    #[serde(rename = "gathertime")]
    pub gather_time: String,
}

impl FieldDefaults {
    pub fn get(&self, attribute: Attribute) -> &str {
        match attribute {
            Attribute::Pattern => &self.pattern,
            Attribute::Size => &self.size,
            Attribute::Convert => &self.convert,
            Attribute::Camera => &self.camera,
            Attribute::Turns => &self.turns,
            Attribute::Sprinkler => &self.sprinkler,
            Attribute::Distance => &self.distance,
            Attribute::InvertFB => &self.invert_fb,
            Attribute::InvertLR => &self.invert_lr,
            Attribute::Percent => &self.percent,
            Attribute::ShiftLock => &self.shift_lock,
            Attribute::GatherTime => &self.gather_time,
        }
    }

    /// Attribute/value pairs in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (Attribute, &str)> + '_ {
        Attribute::ALL.into_iter().map(move |attr| (attr, self.get(attr)))
    }
}

impl Default for FieldDefaults {
    fn default() -> Self {
        resolve(&Section::new())
    }
}

/// Resolve a section against the fallback table.
///
/// A value counts as present when it is non-empty; `"0"` is a real value.
pub fn resolve(section: &Section) -> FieldDefaults {
    let pick = |attribute: Attribute| -> String {
        section
            .get(attribute.source_key())
            .filter(|value| !value.is_empty())
            .cloned()
            .unwrap_or_else(|| attribute.fallback().to_string())
    };

    FieldDefaults {
        pattern: pick(Attribute::Pattern),
        size: pick(Attribute::Size),
        convert: pick(Attribute::Convert),
        camera: pick(Attribute::Camera),
        turns: pick(Attribute::Turns),
        sprinkler: pick(Attribute::Sprinkler),
        distance: pick(Attribute::Distance),
        invert_fb: pick(Attribute::InvertFB),
        invert_lr: pick(Attribute::InvertLR),
        percent: pick(Attribute::Percent),
        shift_lock: pick(Attribute::ShiftLock),
        gather_time: pick(Attribute::GatherTime),
    }
}
