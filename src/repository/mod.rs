use async_trait::async_trait;

use crate::models::todo::TodoRecord;

pub mod database;
#[cfg(test)]
pub mod memory;

#[async_trait]
pub trait TodoRepository: Send + Sync {
    async fn insert(&self, todo: &TodoRecord) -> anyhow::Result<()>;

    async fn find_all(&self) -> anyhow::Result<Vec<TodoRecord>>;

    async fn find_by_id(&self, id: &str) -> anyhow::Result<Option<TodoRecord>>;

    // fails when no document has this id
    async fn update_by_id(&self, id: &str, todo: &TodoRecord) -> anyhow::Result<()>;

    async fn remove_by_id(&self, id: &str) -> anyhow::Result<()>;
}

/// Leases one connection per request; dropping the connection releases it.
pub trait ConnectionProvider: Send + Sync + 'static {
    type Connection: TodoRepository;

    fn acquire(&self) -> Self::Connection;
}
