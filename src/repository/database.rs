use anyhow::Context;
use async_trait::async_trait;
use mongodb::bson::doc;
use mongodb::{options::ClientOptions, Client, Collection};

use crate::config::Config;
use crate::models::todo::TodoRecord;
use crate::repository::{ConnectionProvider, TodoRepository};

const DB_NAME: &str = "ToDo";
const COLLECTION_NAME: &str = "ToDoList";

#[derive(Clone, Debug)]
pub struct MongoDbClient {
    client: Client,
}

impl MongoDbClient {
    // ping so an unreachable server fails at startup
    pub async fn connect(config: &Config) -> anyhow::Result<Self> {
        let client_options = ClientOptions::parse(&config.mongodb_uri)
            .await
            .context("Failed to parse MongoDB connection string")?;
        let client =
            Client::with_options(client_options).context("Failed to create MongoDB client")?;
        client
            .database("admin")
            .run_command(doc! { "ping": 1 }, None)
            .await
            .context("MongoDB is not reachable")?;
        log::info!("connected to MongoDB, using {}.{}", DB_NAME, COLLECTION_NAME);
        Ok(Self { client })
    }

    fn get_todos_collection(&self) -> Collection<TodoRecord> {
        let db = self.client.database(DB_NAME);
        db.collection(COLLECTION_NAME)
    }
}

impl ConnectionProvider for MongoDbClient {
    type Connection = MongoConnection;

    fn acquire(&self) -> MongoConnection {
        log::debug!("leasing connection to {}.{}", DB_NAME, COLLECTION_NAME);
        MongoConnection {
            collection: self.get_todos_collection(),
        }
    }
}

#[derive(Debug)]
pub struct MongoConnection {
    collection: Collection<TodoRecord>,
}

#[async_trait]
impl TodoRepository for MongoConnection {
    async fn insert(&self, todo: &TodoRecord) -> anyhow::Result<()> {
        self.collection
            .insert_one(todo, None)
            .await
            .with_context(|| format!("Failed to insert todo {}", todo.id))?;
        Ok(())
    }

    async fn find_all(&self) -> anyhow::Result<Vec<TodoRecord>> {
        let mut cursor = self
            .collection
            .find(None, None)
            .await
            .context("Failed to query todos")?;
        let mut result: Vec<TodoRecord> = Vec::new();
        while cursor.advance().await? {
            result.push(cursor.deserialize_current()?);
        }
        Ok(result)
    }

    async fn find_by_id(&self, id: &str) -> anyhow::Result<Option<TodoRecord>> {
        let filter = doc! { "_id": id };
        let todo = self
            .collection
            .find_one(filter, None)
            .await
            .with_context(|| format!("Failed to load todo {}", id))?;
        Ok(todo)
    }

    async fn update_by_id(&self, id: &str, todo: &TodoRecord) -> anyhow::Result<()> {
        let filter = doc! { "_id": id };
        let result = self
            .collection
            .replace_one(filter, todo, None)
            .await
            .with_context(|| format!("Failed to update todo {}", id))?;
        if result.matched_count == 0 {
            anyhow::bail!("Todo with id {} not found", id);
        }
        Ok(())
    }

    async fn remove_by_id(&self, id: &str) -> anyhow::Result<()> {
        let filter = doc! { "_id": id };
        self.collection
            .delete_one(filter, None)
            .await
            .with_context(|| format!("Failed to delete todo {}", id))?;
        Ok(())
    }
}
