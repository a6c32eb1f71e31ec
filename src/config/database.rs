//! Database configuration module.
//!
//! Handles the `SQLite` connection and table creation using `SeaORM`. Tables
//! are generated from the entity definitions with
//! `Schema::create_table_from_entity`, so the schema always matches the Rust
//! structs without hand-written SQL. The default store is an in-memory
//! database: records live for the lifetime of the process, like the
//! evaluation tool's original session-scoped store.

use crate::entities::{Assessment, CleaningItem, Furniture, Repair};
use crate::errors::Result;
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection, Schema};

/// Gets the database URL from the environment or falls back to an in-memory
/// `SQLite` database.
#[must_use]
pub fn get_database_url() -> String {
    std::env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite::memory:".to_string())
}

/// Establishes a database connection.
///
/// An in-memory URL is pinned to a single pooled connection: every pooled
/// connection to `:memory:` opens its own empty database, which would lose
/// the schema between requests.
pub async fn create_connection(url: &str) -> Result<DatabaseConnection> {
    let mut options = ConnectOptions::new(url.to_owned());
    if url.contains(":memory:") {
        options.max_connections(1).min_connections(1);
    }

    Database::connect(options).await.map_err(Into::into)
}

/// Creates all tables from the entity definitions.
pub async fn create_tables(db: &DatabaseConnection) -> Result<()> {
    let builder = db.get_database_backend();
    let schema = Schema::new(builder);

    let furniture_table = schema.create_table_from_entity(Furniture);
    let repair_table = schema.create_table_from_entity(Repair);
    let cleaning_table = schema.create_table_from_entity(CleaningItem);
    let assessment_table = schema.create_table_from_entity(Assessment);

    db.execute(builder.build(&furniture_table)).await?;
    db.execute(builder.build(&repair_table)).await?;
    db.execute(builder.build(&cleaning_table)).await?;
    db.execute(builder.build(&assessment_table)).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::{
        AssessmentModel, CleaningItemModel, FurnitureModel, RepairModel,
    };
    use sea_orm::{EntityTrait, QuerySelect};

    #[tokio::test]
    async fn test_create_connection_in_memory() -> Result<()> {
        let db = create_connection("sqlite::memory:").await?;
        create_tables(&db).await?;

        // A simple query proves the connection and schema are live
        let _: Vec<FurnitureModel> = Furniture::find().limit(1).all(&db).await?;
        Ok(())
    }

    #[tokio::test]
    async fn test_create_tables() -> Result<()> {
        let db = create_connection("sqlite::memory:").await?;
        create_tables(&db).await?;

        let _: Vec<FurnitureModel> = Furniture::find().limit(1).all(&db).await?;
        let _: Vec<RepairModel> = Repair::find().limit(1).all(&db).await?;
        let _: Vec<CleaningItemModel> = CleaningItem::find().limit(1).all(&db).await?;
        let _: Vec<AssessmentModel> = Assessment::find().limit(1).all(&db).await?;

        Ok(())
    }
}
