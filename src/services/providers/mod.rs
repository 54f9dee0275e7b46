/// Wardrobe data source abstraction
///
/// The engine never owns clothing data; it reads a user's wardrobe through
/// this seam. Production callers back it with their persistence layer, tests
/// with [`memory::InMemoryWardrobe`] or a mock.
use uuid::Uuid;

use crate::{error::AppResult, models::ClothingItem};

pub mod memory;

pub use memory::InMemoryWardrobe;

/// Read-only access to a user's clothing items
///
/// Implementations must resolve `last_worn_at` per item from wear history
/// before returning; the engine treats the items as immutable input.
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait WardrobeStore: Send + Sync {
    /// Lists every clothing item the user owns
    async fn items_for_user(&self, user_id: Uuid) -> AppResult<Vec<ClothingItem>>;
}
