use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::models::todo::TodoRecord;
use crate::repository::{ConnectionProvider, TodoRepository};

#[derive(Clone, Default)]
pub struct MemoryStore {
    pub todos: Arc<Mutex<Vec<TodoRecord>>>,
    fail_updates: bool,
}

impl MemoryStore {
    pub fn failing_updates() -> Self {
        Self {
            fail_updates: true,
            ..Self::default()
        }
    }

    pub fn count(&self) -> usize {
        self.todos.lock().unwrap().len()
    }
}

impl ConnectionProvider for MemoryStore {
    type Connection = MemoryStore;

    fn acquire(&self) -> MemoryStore {
        self.clone()
    }
}

#[async_trait]
impl TodoRepository for MemoryStore {
    async fn insert(&self, todo: &TodoRecord) -> anyhow::Result<()> {
        self.todos.lock().unwrap().push(todo.clone());
        Ok(())
    }

    async fn find_all(&self) -> anyhow::Result<Vec<TodoRecord>> {
        Ok(self.todos.lock().unwrap().clone())
    }

    async fn find_by_id(&self, id: &str) -> anyhow::Result<Option<TodoRecord>> {
        let todos = self.todos.lock().unwrap();
        Ok(todos.iter().find(|todo| todo.id == id).cloned())
    }

    async fn update_by_id(&self, id: &str, todo: &TodoRecord) -> anyhow::Result<()> {
        if self.fail_updates {
            anyhow::bail!("update rejected by store");
        }
        let mut todos = self.todos.lock().unwrap();
        let index = todos
            .iter()
            .position(|t| t.id == id)
            .ok_or_else(|| anyhow::anyhow!("Todo with id {} not found", id))?;
        todos[index] = todo.clone();
        Ok(())
    }

    async fn remove_by_id(&self, id: &str) -> anyhow::Result<()> {
        let mut todos = self.todos.lock().unwrap();
        todos.retain(|todo| todo.id != id);
        Ok(())
    }
}
