use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use uuid::Uuid;

mod style;

pub use style::{ClothingStyle, StyleWeights};

/// Named wardrobe colors from the closed 11-color wheel
///
/// Wheel order and the neutral subset live in [`crate::color`]; every
/// angular/distance computation is defined relative to that order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Red,
    Orange,
    Yellow,
    Green,
    Blue,
    Purple,
    Pink,
    White,
    Black,
    Gray,
    Brown,
}

impl Color {
    pub fn as_str(&self) -> &'static str {
        match self {
            Color::Red => "red",
            Color::Orange => "orange",
            Color::Yellow => "yellow",
            Color::Green => "green",
            Color::Blue => "blue",
            Color::Purple => "purple",
            Color::Pink => "pink",
            Color::White => "white",
            Color::Black => "black",
            Color::Gray => "gray",
            Color::Brown => "brown",
        }
    }
}

impl Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The closed set of garment categories the engine assembles over
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClothingType {
    Pants,
    Sweater,
    Dress,
    Jacket,
    Shirt,
    Shoes,
    Accessory,
}

impl ClothingType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ClothingType::Pants => "pants",
            ClothingType::Sweater => "sweater",
            ClothingType::Dress => "dress",
            ClothingType::Jacket => "jacket",
            ClothingType::Shirt => "shirt",
            ClothingType::Shoes => "shoes",
            ClothingType::Accessory => "accessory",
        }
    }
}

impl Display for ClothingType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Garment surface pattern (motif)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Pattern {
    Solid,
    Striped,
    Plaid,
    PolkaDot,
    Floral,
    Graphic,
    Checked,
}

/// A single wardrobe item, owned by the external wardrobe store
///
/// Read-only to the engine. `last_worn_at` is resolved by the store from
/// wear history before the item reaches the engine.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ClothingItem {
    pub id: Uuid,
    #[serde(rename = "type")]
    pub kind: ClothingType,
    pub color: Option<Color>,
    #[serde(default)]
    pub pattern: Option<Pattern>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub last_worn_at: Option<DateTime<Utc>>,
}

/// A wardrobe item plus the score accumulated during one generation pass
///
/// Created transiently per generation call and exclusively owned by that
/// invocation; concurrent generations never share scored items.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ScoredClothingItem {
    #[serde(flatten)]
    pub item: ClothingItem,
    pub score: f64,
}

impl ScoredClothingItem {
    pub fn new(item: ClothingItem) -> Self {
        Self { item, score: 0.0 }
    }
}

/// A weather observation
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct WeatherReading {
    /// Temperature in °C
    pub temp: f64,
    /// Rain intensity (mm)
    pub rain: f64,
    /// UV index, typically 0-12
    pub uv: f64,
}

/// Weather as supplied by the external weather collaborator
///
/// The collaborator may fail; an unavailable reading is not an error to the
/// engine, all weather-dependent scoring terms simply degrade to zero.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum Weather {
    Current(WeatherReading),
    Unavailable { error: String },
}

impl Weather {
    /// The observation, if the collaborator produced one
    pub fn reading(&self) -> Option<&WeatherReading> {
        match self {
            Weather::Current(reading) => Some(reading),
            Weather::Unavailable { .. } => None,
        }
    }
}

/// One assembled outfit, the generator's return value
///
/// Carries no identity of its own; persisting a preview is the caller's
/// concern.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct OutfitPreview {
    pub items: Vec<ScoredClothingItem>,
}

impl OutfitPreview {
    /// Whether the outfit includes a garment of the given category
    pub fn contains_kind(&self, kind: ClothingType) -> bool {
        self.items.iter().any(|entry| entry.item.kind == kind)
    }

    /// Whether an extra layer (jacket or sweater) was added
    pub fn has_layer(&self) -> bool {
        self.contains_kind(ClothingType::Jacket) || self.contains_kind(ClothingType::Sweater)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
