//! In-memory EntitySource. For tests and for embedding callers that already
//! hold the collections.

use crate::domain::DomainError;
use crate::ports::EntitySource;

pub struct MemorySource<T> {
    items: Vec<T>,
}

impl<T> MemorySource<T> {
    pub fn new(items: Vec<T>) -> Self {
        Self { items }
    }
}

impl<T> Default for MemorySource<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

#[async_trait::async_trait]
impl<T: Clone + Send + Sync> EntitySource<T> for MemorySource<T> {
    async fn list(&self) -> Result<Vec<T>, DomainError> {
        Ok(self.items.clone())
    }
}
