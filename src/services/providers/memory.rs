use std::collections::HashMap;

use uuid::Uuid;

use crate::{error::AppResult, models::ClothingItem};

use super::WardrobeStore;

/// In-memory wardrobe store
///
/// For embedding callers that already hold the wardrobe, and for tests.
/// Unknown users simply own an empty wardrobe.
#[derive(Debug, Clone, Default)]
pub struct InMemoryWardrobe {
    items: HashMap<Uuid, Vec<ClothingItem>>,
}

impl InMemoryWardrobe {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store holding one user's wardrobe
    pub fn with_items(user_id: Uuid, items: Vec<ClothingItem>) -> Self {
        let mut store = Self::new();
        store.insert(user_id, items);
        store
    }

    /// Replaces a user's wardrobe
    pub fn insert(&mut self, user_id: Uuid, items: Vec<ClothingItem>) {
        self.items.insert(user_id, items);
    }
}

#[async_trait::async_trait]
impl WardrobeStore for InMemoryWardrobe {
    async fn items_for_user(&self, user_id: Uuid) -> AppResult<Vec<ClothingItem>> {
        Ok(self.items.get(&user_id).cloned().unwrap_or_default())
    }
}
