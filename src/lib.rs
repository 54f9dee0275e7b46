//! Outfit-scoring and assembly engine
//!
//! Selects a coherent clothing outfit from a user's wardrobe given current
//! weather and a style preference. Combines color-theory heuristics, pattern
//! compatibility, weather suitability and recency-of-wear decay into one
//! ranking, then greedily assembles a multi-slot outfit under controlled
//! randomness.
//!
//! Persistence, weather retrieval and HTTP wiring live outside this crate;
//! the wardrobe arrives through the [`WardrobeStore`] seam and weather as a
//! plain [`Weather`] value.

pub mod color;
pub mod config;
pub mod error;
pub mod models;
pub mod scoring;
pub mod services;

pub use config::Config;
pub use error::{AppError, AppResult};
pub use models::{
    ClothingItem, ClothingStyle, ClothingType, Color, OutfitPreview, Pattern, ScoredClothingItem,
    StyleWeights, Weather, WeatherReading,
};
pub use services::generator::{GenerateOptions, OutfitGenerator};
pub use services::providers::{InMemoryWardrobe, WardrobeStore};
